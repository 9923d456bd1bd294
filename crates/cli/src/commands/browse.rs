//! Browsing commands: the restaurant list and per-restaurant menus.
//!
//! # Usage
//!
//! ```bash
//! gx restaurants
//! gx restaurants --category Sushi
//! gx restaurants --query bowl
//! gx menu r_green_bowl
//! ```
//!
//! Output is live backend data when `GOURMET_API_BASE` points somewhere
//! reachable, the builtin set otherwise; the header says which.

use gourmet_express_client::state::AppState;
use gourmet_express_core::Restaurant;

/// List restaurants: exact category match (or everything for `All` or no
/// filter), then a lowercase substring match against names and tags.
pub async fn restaurants(state: &AppState, category: Option<&str>, query: Option<&str>) {
    let listing = state.catalog().restaurants().await;

    tracing::info!("Restaurants ({} data)", listing.source);
    tracing::info!("Categories: {}", state.catalog().categories().join(", "));
    tracing::info!("");

    let needle = query
        .map(str::trim)
        .map(str::to_lowercase)
        .unwrap_or_default();
    let mut shown = 0usize;
    for restaurant in &listing.data {
        if !matches_category(restaurant, category) || !matches_query(restaurant, &needle) {
            continue;
        }
        shown += 1;
        tracing::info!("{}  [{}]", restaurant.name, restaurant.id);
        tracing::info!(
            "  {:.1} ★  {} • {} • {} min • Delivery ${}",
            restaurant.rating,
            restaurant.category,
            restaurant.price_level,
            restaurant.eta_minutes,
            restaurant.fee
        );
        if !restaurant.tags.is_empty() {
            tracing::info!("  Tags: {}", restaurant.tags.join(", "));
        }
    }

    if shown == 0 {
        tracing::info!("No restaurants match.");
    }
}

/// Show one restaurant's header line and its menu with item ids.
pub async fn menu(state: &AppState, restaurant_id: &str) {
    let restaurant = state.catalog().restaurant(restaurant_id).await.data;
    let menu = state.catalog().menu(restaurant_id).await;

    tracing::info!("{} ({} data)", restaurant.name, menu.source);
    tracing::info!(
        "{} • {} • {} min • Delivery ${}",
        restaurant.category,
        restaurant.price_level,
        restaurant.eta_minutes,
        restaurant.fee
    );
    tracing::info!("");

    if menu.data.is_empty() {
        tracing::info!("No menu available for this restaurant.");
        return;
    }
    for item in &menu.data {
        tracing::info!("{} - ${}  [{}]", item.name, item.price, item.id);
        if !item.desc.is_empty() {
            tracing::info!("    {}", item.desc);
        }
    }
}

fn matches_category(restaurant: &Restaurant, category: Option<&str>) -> bool {
    category.is_none_or(|wanted| wanted == "All" || restaurant.category == wanted)
}

fn matches_query(restaurant: &Restaurant, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    restaurant.name.to_lowercase().contains(needle)
        || restaurant.tags.join(" ").to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn sample() -> Restaurant {
        Restaurant {
            id: "r1".to_owned(),
            name: "Pizza Harbor".to_owned(),
            category: "Pizza".to_owned(),
            rating: 4.7,
            eta_minutes: 25,
            fee: Decimal::new(249, 2),
            price_level: "$$".to_owned(),
            tags: vec!["Wood-fired".to_owned(), "Family".to_owned()],
        }
    }

    #[test]
    fn test_category_filter() {
        let restaurant = sample();
        assert!(matches_category(&restaurant, None));
        assert!(matches_category(&restaurant, Some("All")));
        assert!(matches_category(&restaurant, Some("Pizza")));
        assert!(!matches_category(&restaurant, Some("Sushi")));
    }

    #[test]
    fn test_query_matches_names_and_tags() {
        let restaurant = sample();
        assert!(matches_query(&restaurant, ""));
        assert!(matches_query(&restaurant, "harbor"));
        assert!(matches_query(&restaurant, "wood-fired"));
        assert!(!matches_query(&restaurant, "sushi"));
    }
}
