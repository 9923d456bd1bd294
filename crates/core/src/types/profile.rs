//! Delivery profile persisted on the device.

use serde::{Deserialize, Serialize};

/// Payment preference attached to the profile.
///
/// Selection only; no payment is ever processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    #[default]
    Card,
    Cash,
    ApplePay,
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Card => write!(f, "card"),
            Self::Cash => write!(f, "cash"),
            Self::ApplePay => write!(f, "apple_pay"),
        }
    }
}

impl std::str::FromStr for PaymentMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "card" => Ok(Self::Card),
            "cash" => Ok(Self::Cash),
            "apple_pay" => Ok(Self::ApplePay),
            _ => Err(format!("invalid payment method: {s}")),
        }
    }
}

/// Locally persisted delivery and payment preferences.
///
/// A partially-shaped stored record loads field by field: anything missing
/// takes its default rather than failing the whole profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub name: String,
    pub phone: String,
    pub address1: String,
    pub city: String,
    pub payment: PaymentMethod,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "Alex".to_owned(),
            phone: String::new(),
            address1: String::new(),
            city: String::new(),
            payment: PaymentMethod::Card,
        }
    }
}

impl Profile {
    /// The fields checkout needs filled in: name, street address, city.
    /// Whitespace-only values do not count.
    #[must_use]
    pub fn is_complete_for_delivery(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.address1.trim().is_empty()
            && !self.city.trim().is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let profile = Profile::default();
        assert_eq!(profile.name, "Alex");
        assert_eq!(profile.payment, PaymentMethod::Card);
        assert!(!profile.is_complete_for_delivery());
    }

    #[test]
    fn test_partial_record_fills_missing_fields() {
        let profile: Profile =
            serde_json::from_str(r#"{"address1": "1 Harbor St", "city": "Portside"}"#).unwrap();
        assert_eq!(profile.name, "Alex");
        assert_eq!(profile.address1, "1 Harbor St");
        assert!(profile.is_complete_for_delivery());
    }

    #[test]
    fn test_whitespace_fields_do_not_complete_profile() {
        let profile = Profile {
            name: "   ".to_owned(),
            address1: "1 Harbor St".to_owned(),
            city: "Portside".to_owned(),
            ..Profile::default()
        };
        assert!(!profile.is_complete_for_delivery());
    }

    #[test]
    fn test_payment_method_round_trip() {
        for method in [
            PaymentMethod::Card,
            PaymentMethod::Cash,
            PaymentMethod::ApplePay,
        ] {
            let parsed: PaymentMethod = method.to_string().parse().unwrap();
            assert_eq!(parsed, method);
        }
        assert!("bitcoin".parse::<PaymentMethod>().is_err());
    }
}
