//! Gourmet Express CLI - Demo driver for the headless ordering flow.
//!
//! # Usage
//!
//! ```bash
//! # Browse restaurants (live backend when configured, builtin data otherwise)
//! gx restaurants
//! gx restaurants --category Pizza --query wood
//!
//! # Show a menu
//! gx menu r_pizza_harbor
//!
//! # Save delivery details
//! gx profile --name "Alex" --address1 "1 Harbor St" --city "Portside"
//!
//! # Order two Margheritas and watch tracking for a few refreshes
//! gx order r_pizza_harbor m_ph_1 m_ph_1 --refreshes 3
//! ```
//!
//! # Commands
//!
//! - `restaurants` - List restaurants, optionally filtered by category/query
//! - `menu` - Show one restaurant's menu
//! - `order` - Place an order from menu item ids, then poll tracking
//! - `profile` - Show or update the delivery profile
//!
//! # Environment Variables
//!
//! - `GOURMET_API_BASE` - Backend base URL; unset runs fully offline
//! - `GOURMET_API_TIMEOUT_MS` - Per-request timeout in ms (default: 7000)
//! - `GOURMET_DATA_DIR` - Where cart and profile live (default: `.gourmet-express`)

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

use gourmet_express_client::config::AppConfig;
use gourmet_express_client::state::AppState;

mod commands;

#[derive(Parser)]
#[command(name = "gx")]
#[command(author, version, about = "Gourmet Express ordering CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List restaurants
    Restaurants {
        /// Keep only this category (e.g. `Pizza`)
        #[arg(short, long)]
        category: Option<String>,

        /// Case-insensitive match against names and tags
        #[arg(short, long)]
        query: Option<String>,
    },
    /// Show one restaurant's menu
    Menu {
        /// Restaurant id (from `gx restaurants`)
        restaurant_id: String,
    },
    /// Place an order from the given menu items, then poll tracking
    Order {
        /// Restaurant id to order from
        restaurant_id: String,

        /// Menu item ids; repeat an id to increase its quantity
        #[arg(required = true)]
        item_ids: Vec<String>,

        /// Tracking refreshes after checkout, five seconds apart
        #[arg(long, default_value_t = 2)]
        refreshes: u32,
    },
    /// Show the delivery profile, or update the given fields
    Profile(commands::profile::ProfileArgs),
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::from_env()?;
    let mut state = AppState::new(&config)?;

    match cli.command {
        Commands::Restaurants { category, query } => {
            commands::browse::restaurants(&state, category.as_deref(), query.as_deref()).await;
        }
        Commands::Menu { restaurant_id } => {
            commands::browse::menu(&state, &restaurant_id).await;
        }
        Commands::Order {
            restaurant_id,
            item_ids,
            refreshes,
        } => {
            commands::order::place(&mut state, &restaurant_id, &item_ids, refreshes).await?;
        }
        Commands::Profile(args) => {
            commands::profile::show_or_update(&mut state, &args)?;
        }
    }
    Ok(())
}
