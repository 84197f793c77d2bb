//! Vendor portal CLI - Database migrations and management tools.
//!
//! # Usage
//!
//! ```bash
//! # Run portal database migrations
//! vp-cli migrate
//!
//! # Create a portal account
//! vp-cli user create -e vendor@example.com -p "a strong password"
//!
//! # Create a vendor profile for an account (starts as PENDING)
//! vp-cli vendor create -e vendor@example.com -b "Acme Goods" -c 12.50
//!
//! # Approve or reject a vendor
//! vp-cli vendor set-status -v 1 -s APPROVED
//!
//! # Add a brand to a vendor
//! vp-cli vendor add-brand -v 1 -n "Acme Outdoor"
//! ```
//!
//! # Commands
//!
//! - `migrate` - Run database migrations
//! - `user create` - Create portal accounts
//! - `vendor create` / `vendor set-status` / `vendor add-brand` - Manage the
//!   vendor directory

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "vp-cli")]
#[command(author, version, about = "Vendor portal CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run portal database migrations
    Migrate,
    /// Manage portal accounts
    User {
        #[command(subcommand)]
        action: UserAction,
    },
    /// Manage the vendor directory
    Vendor {
        #[command(subcommand)]
        action: VendorAction,
    },
}

#[derive(Subcommand)]
enum UserAction {
    /// Create a new portal account
    Create {
        /// Account email address
        #[arg(short, long)]
        email: String,

        /// Account password
        #[arg(short, long)]
        password: String,
    },
}

#[derive(Subcommand)]
enum VendorAction {
    /// Create a vendor profile for an existing account (status starts PENDING)
    Create {
        /// Email of the portal account
        #[arg(short, long)]
        email: String,

        /// Legal business name
        #[arg(short, long)]
        business_name: String,

        /// Commission rate in percent (e.g. 12.50)
        #[arg(short, long)]
        commission_rate: String,
    },
    /// Update a vendor's approval status
    SetStatus {
        /// Vendor ID
        #[arg(short, long)]
        vendor_id: i32,

        /// New status (`PENDING`, `APPROVED`, `REJECTED`)
        #[arg(short, long)]
        status: String,
    },
    /// Add a brand to a vendor
    AddBrand {
        /// Vendor ID
        #[arg(short, long)]
        vendor_id: i32,

        /// Brand name
        #[arg(short, long)]
        name: String,
    },
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
    match cli.command {
        Commands::Migrate => commands::migrate::run().await?,
        Commands::User { action } => match action {
            UserAction::Create { email, password } => {
                commands::user::create(&email, &password).await?;
            }
        },
        Commands::Vendor { action } => match action {
            VendorAction::Create {
                email,
                business_name,
                commission_rate,
            } => {
                commands::vendor::create(&email, &business_name, &commission_rate).await?;
            }
            VendorAction::SetStatus { vendor_id, status } => {
                commands::vendor::set_status(vendor_id, &status).await?;
            }
            VendorAction::AddBrand { vendor_id, name } => {
                commands::vendor::add_brand(vendor_id, &name).await?;
            }
        },
    }
    Ok(())
}
