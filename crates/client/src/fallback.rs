//! Builtin fallback data served when the backend is absent or failing.
//!
//! Intentionally small but complete enough to drive the whole ordering
//! flow offline: six restaurants, three dishes each.

use std::collections::HashMap;
use std::sync::LazyLock;

use rust_decimal::Decimal;

use gourmet_express_core::{MenuItem, Restaurant};

static RESTAURANTS: LazyLock<Vec<Restaurant>> = LazyLock::new(|| {
    vec![
        Restaurant {
            id: "r_pizza_harbor".to_owned(),
            name: "Pizza Harbor".to_owned(),
            category: "Pizza".to_owned(),
            rating: 4.7,
            eta_minutes: 25,
            fee: Decimal::new(249, 2),
            price_level: "$$".to_owned(),
            tags: tags(&["Wood-fired", "Family"]),
        },
        Restaurant {
            id: "r_blue_burger".to_owned(),
            name: "Blue Burger Co.".to_owned(),
            category: "Burgers".to_owned(),
            rating: 4.5,
            eta_minutes: 20,
            fee: Decimal::new(199, 2),
            price_level: "$".to_owned(),
            tags: tags(&["Smash", "Fries"]),
        },
        Restaurant {
            id: "r_sushi_current".to_owned(),
            name: "Sushi Current".to_owned(),
            category: "Sushi".to_owned(),
            rating: 4.8,
            eta_minutes: 35,
            fee: Decimal::new(399, 2),
            price_level: "$$$".to_owned(),
            tags: tags(&["Omakase", "Fresh"]),
        },
        Restaurant {
            id: "r_green_bowl".to_owned(),
            name: "Green Bowl".to_owned(),
            category: "Healthy".to_owned(),
            rating: 4.6,
            eta_minutes: 18,
            fee: Decimal::new(149, 2),
            price_level: "$$".to_owned(),
            tags: tags(&["Vegan", "Gluten-free"]),
        },
        Restaurant {
            id: "r_saffron_route".to_owned(),
            name: "Saffron Route".to_owned(),
            category: "Indian".to_owned(),
            rating: 4.4,
            eta_minutes: 30,
            fee: Decimal::new(299, 2),
            price_level: "$$".to_owned(),
            tags: tags(&["Spicy", "Curry"]),
        },
        Restaurant {
            id: "r_amber_desserts".to_owned(),
            name: "Amber Desserts".to_owned(),
            category: "Dessert".to_owned(),
            rating: 4.9,
            eta_minutes: 15,
            fee: Decimal::new(125, 2),
            price_level: "$$".to_owned(),
            tags: tags(&["Gelato", "Pastries"]),
        },
    ]
});

static MENUS: LazyLock<HashMap<&'static str, Vec<MenuItem>>> = LazyLock::new(|| {
    HashMap::from([
        (
            "r_pizza_harbor",
            vec![
                dish("m_ph_1", "Margherita", "Tomato, basil, mozzarella.", 1250),
                dish("m_ph_2", "Pepperoni", "Classic pepperoni & cheese.", 1400),
                dish(
                    "m_ph_3",
                    "Truffle Mushroom",
                    "Mushroom, truffle oil, parmesan.",
                    1650,
                ),
            ],
        ),
        (
            "r_blue_burger",
            vec![
                dish("m_bb_1", "Classic Smash", "Two patties, cheddar, pickles.", 1100),
                dish("m_bb_2", "Ocean BBQ", "BBQ sauce, onions, bacon.", 1350),
                dish("m_bb_3", "Crispy Fries", "Sea-salt fries, house dip.", 450),
            ],
        ),
        (
            "r_sushi_current",
            vec![
                dish("m_sc_1", "Salmon Nigiri (6)", "Silky salmon over sushi rice.", 1500),
                dish("m_sc_2", "Spicy Tuna Roll", "Tuna, chili, cucumber.", 1200),
                dish("m_sc_3", "Miso Soup", "Tofu, wakame, scallion.", 350),
            ],
        ),
        (
            "r_green_bowl",
            vec![
                dish("m_gb_1", "Power Bowl", "Quinoa, chickpeas, avocado.", 1200),
                dish("m_gb_2", "Chicken Caesar", "Romaine, parmesan, croutons.", 1150),
                dish("m_gb_3", "Cold Pressed Juice", "Citrus + ginger blend.", 600),
            ],
        ),
        (
            "r_saffron_route",
            vec![
                dish("m_sr_1", "Butter Chicken", "Creamy tomato sauce.", 1450),
                dish("m_sr_2", "Chana Masala", "Spiced chickpea curry.", 1200),
                dish("m_sr_3", "Garlic Naan", "Fresh baked naan bread.", 300),
            ],
        ),
        (
            "r_amber_desserts",
            vec![
                dish("m_ad_1", "Gelato Trio", "Pick any three flavors.", 950),
                dish("m_ad_2", "Almond Croissant", "Buttery, flaky, filled.", 475),
                dish("m_ad_3", "Chocolate Mousse", "Rich and airy.", 625),
            ],
        ),
    ])
});

/// All fallback restaurants, in display order.
#[must_use]
pub fn restaurants() -> Vec<Restaurant> {
    RESTAURANTS.clone()
}

/// One fallback restaurant by id.
#[must_use]
pub fn restaurant_by_id(id: &str) -> Option<Restaurant> {
    RESTAURANTS.iter().find(|entry| entry.id == id).cloned()
}

/// Fallback menu for a restaurant; unknown ids get an empty menu.
#[must_use]
pub fn menu(restaurant_id: &str) -> Vec<MenuItem> {
    MENUS.get(restaurant_id).cloned().unwrap_or_default()
}

/// Minimal stand-in for an id nothing knows about. Carries the catalog
/// defaults so the ordering flow stays alive instead of dead-ending.
#[must_use]
pub fn placeholder(restaurant_id: &str) -> Restaurant {
    Restaurant {
        id: restaurant_id.to_owned(),
        name: "Restaurant".to_owned(),
        category: "All".to_owned(),
        rating: 4.5,
        eta_minutes: 25,
        fee: Decimal::new(249, 2),
        price_level: "$$".to_owned(),
        tags: Vec::new(),
    }
}

fn tags(names: &[&str]) -> Vec<String> {
    names.iter().map(|&name| name.to_owned()).collect()
}

fn dish(id: &str, name: &str, desc: &str, price_cents: i64) -> MenuItem {
    MenuItem {
        id: id.to_owned(),
        name: name.to_owned(),
        desc: desc.to_owned(),
        price: Decimal::new(price_cents, 2),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_every_restaurant_has_a_menu() {
        let all = restaurants();
        assert_eq!(all.len(), 6);
        for entry in &all {
            assert_eq!(menu(&entry.id).len(), 3, "menu missing for {}", entry.id);
        }
    }

    #[test]
    fn test_lookup_by_id() {
        let harbor = restaurant_by_id("r_pizza_harbor").unwrap();
        assert_eq!(harbor.name, "Pizza Harbor");
        assert_eq!(harbor.fee, Decimal::new(249, 2));

        assert!(restaurant_by_id("r_nowhere").is_none());
        assert!(menu("r_nowhere").is_empty());
    }
}
