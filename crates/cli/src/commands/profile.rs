//! Delivery profile commands.
//!
//! # Usage
//!
//! ```bash
//! # Show the stored profile
//! gx profile
//!
//! # Update some fields; the rest keep their value
//! gx profile --name "Alex" --address1 "1 Harbor St" --city "Portside"
//! gx profile --payment apple_pay
//! ```

use clap::Args;
use thiserror::Error;

use gourmet_express_client::state::AppState;
use gourmet_express_core::{PaymentMethod, Profile};

/// Field updates for the delivery profile; omitted fields keep their value.
#[derive(Debug, Args)]
pub struct ProfileArgs {
    /// Delivery name
    #[arg(long)]
    pub name: Option<String>,

    /// Contact phone
    #[arg(long)]
    pub phone: Option<String>,

    /// Street address
    #[arg(long)]
    pub address1: Option<String>,

    /// City
    #[arg(long)]
    pub city: Option<String>,

    /// Payment method: `card`, `cash`, or `apple_pay`
    #[arg(long)]
    pub payment: Option<String>,
}

impl ProfileArgs {
    fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.phone.is_none()
            && self.address1.is_none()
            && self.city.is_none()
            && self.payment.is_none()
    }
}

/// Errors that can occur while updating the profile.
#[derive(Debug, Error)]
pub enum ProfileError {
    /// Not one of the supported payment methods.
    #[error("Invalid payment method: {0}. Valid methods: card, cash, apple_pay")]
    InvalidPayment(String),
}

/// Print the profile, applying any requested field updates first.
pub fn show_or_update(state: &mut AppState, args: &ProfileArgs) -> Result<(), ProfileError> {
    if !args.is_empty() {
        let current = state.profile();
        let next = Profile {
            name: args.name.clone().unwrap_or_else(|| current.name.clone()),
            phone: args.phone.clone().unwrap_or_else(|| current.phone.clone()),
            address1: args
                .address1
                .clone()
                .unwrap_or_else(|| current.address1.clone()),
            city: args.city.clone().unwrap_or_else(|| current.city.clone()),
            payment: match &args.payment {
                Some(raw) => raw
                    .parse::<PaymentMethod>()
                    .map_err(|_| ProfileError::InvalidPayment(raw.clone()))?,
                None => current.payment,
            },
        };
        state.set_profile(next);
        tracing::info!("Profile updated.");
        tracing::info!("");
    }

    let profile = state.profile();
    let phone = if profile.phone.is_empty() {
        "(none)"
    } else {
        profile.phone.as_str()
    };
    tracing::info!("Name:     {}", profile.name);
    tracing::info!("Phone:    {phone}");
    tracing::info!("Address:  {}", profile.address1);
    tracing::info!("City:     {}", profile.city);
    tracing::info!("Payment:  {}", profile.payment);
    if !profile.is_complete_for_delivery() {
        tracing::info!("");
        tracing::info!("Checkout needs name, address and city filled in.");
    }
    Ok(())
}
