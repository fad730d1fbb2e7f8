//! Bamboo Box CLI - command-line front end for the food-ordering demo.
//!
//! # Usage
//!
//! ```bash
//! # Seed the demo data (two accounts, three shops)
//! bb seed
//!
//! # Register and log in
//! bb auth register -e alice@example.com -u alice -p hunter22 --role user
//! bb auth login -u alice -p hunter22
//! bb auth whoami
//!
//! # Browse and order
//! bb shop list
//! bb order create --shop shop-1 --content "one bowl of noodles" --annotate
//! bb order list
//!
//! # Merchant side
//! bb auth login -u boss -p anything --role merchant
//! bb order status <ORDER_ID> confirmed
//! ```
//!
//! # Commands
//!
//! - `seed` - Seed demo users and shops
//! - `auth` - Register, login, logout, whoami, password reset
//! - `shop` - List shops, show or upsert your own shop
//! - `order` - Create orders, list them, advance their status

#![cfg_attr(not(test), forbid(unsafe_code))]
// A CLI's listings go to stdout on purpose.
#![allow(clippy::print_stdout)]

use std::sync::Arc;

use clap::{Parser, Subcommand};

use bamboo_box_core::{OrderStatus, UserRole};
use bamboo_box_services::{
    AppConfig, CatalogService, FileStore, IdentityService, OrderService, Store,
};

mod commands;

#[derive(Parser)]
#[command(name = "bb")]
#[command(author, version, about = "Bamboo Box food-ordering demo CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Seed demo users and shops into the data directory
    Seed,
    /// Account and session management
    Auth {
        #[command(subcommand)]
        action: AuthAction,
    },
    /// Shop browsing and merchant shop management
    Shop {
        #[command(subcommand)]
        action: ShopAction,
    },
    /// Order creation and lifecycle
    Order {
        #[command(subcommand)]
        action: OrderAction,
    },
}

#[derive(Subcommand)]
enum AuthAction {
    /// Register a new account and log it in
    Register {
        /// Email address
        #[arg(short, long)]
        email: String,

        /// Login username
        #[arg(short, long)]
        username: String,

        /// Password
        #[arg(short, long)]
        password: String,

        /// Account role (`user` or `merchant`)
        #[arg(long, default_value = "user")]
        role: UserRole,
    },
    /// Log in to an existing account
    Login {
        /// Login username
        #[arg(short, long)]
        username: String,

        /// Password
        #[arg(short, long)]
        password: String,

        /// Role claimed by the login form (stored role wins)
        #[arg(long, default_value = "user")]
        role: UserRole,
    },
    /// Clear the current session
    Logout,
    /// Show the current session
    Whoami,
    /// Request a (simulated) email verification code
    SendCode {
        /// Email address to "send" the code to
        #[arg(short, long)]
        email: String,
    },
    /// Reset an account password by email
    ResetPassword {
        /// Email address of the account
        #[arg(short, long)]
        email: String,

        /// New password
        #[arg(short, long)]
        password: String,

        /// Verification code from `send-code`
        #[arg(short, long)]
        code: String,
    },
}

#[derive(Subcommand)]
enum ShopAction {
    /// List all shops with their menus
    List,
    /// Show the shop owned by the logged-in merchant
    Mine,
    /// Create or replace the logged-in merchant's shop from a JSON file
    Save {
        /// Path to a shop JSON file
        file: String,
    },
}

#[derive(Subcommand)]
enum OrderAction {
    /// Create an order against a shop
    Create {
        /// Shop id to order from
        #[arg(long)]
        shop: String,

        /// Free-text order content
        #[arg(long)]
        content: String,

        /// Annotate the order via the Gemini collaborator
        #[arg(long)]
        annotate: bool,
    },
    /// List orders visible to the logged-in account
    List,
    /// Advance an order's status (`confirmed`, `completed`, `cancelled`)
    Status {
        /// Order id
        order_id: String,

        /// Target status
        status: OrderStatus,
    },
}

/// Services wired over the shared file store.
pub struct Context {
    pub config: AppConfig,
    pub store: Arc<dyn Store>,
    pub identity: IdentityService,
    pub catalog: CatalogService,
    pub orders: OrderService,
}

impl Context {
    fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        let config = AppConfig::from_env()?;
        let store: Arc<dyn Store> = Arc::new(FileStore::open(&config.data_dir)?);
        let latency = config.latency;
        Ok(Self {
            identity: IdentityService::new(Arc::clone(&store), latency),
            catalog: CatalogService::new(Arc::clone(&store), latency),
            orders: OrderService::new(Arc::clone(&store), latency),
            store,
            config,
        })
    }
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
    let ctx = Context::from_env()?;

    match cli.command {
        Commands::Seed => commands::seed::run(&ctx)?,
        Commands::Auth { action } => match action {
            AuthAction::Register {
                email,
                username,
                password,
                role,
            } => commands::auth::register(&ctx, &email, &username, &password, role).await?,
            AuthAction::Login {
                username,
                password,
                role,
            } => commands::auth::login(&ctx, &username, &password, role).await?,
            AuthAction::Logout => commands::auth::logout(&ctx)?,
            AuthAction::Whoami => commands::auth::whoami(&ctx)?,
            AuthAction::SendCode { email } => commands::auth::send_code(&ctx, &email).await,
            AuthAction::ResetPassword {
                email,
                password,
                code,
            } => commands::auth::reset_password(&ctx, &email, &password, &code).await?,
        },
        Commands::Shop { action } => match action {
            ShopAction::List => commands::shops::list(&ctx).await?,
            ShopAction::Mine => commands::shops::mine(&ctx).await?,
            ShopAction::Save { file } => commands::shops::save(&ctx, &file).await?,
        },
        Commands::Order { action } => match action {
            OrderAction::Create {
                shop,
                content,
                annotate,
            } => commands::orders::create(&ctx, &shop, &content, annotate).await?,
            OrderAction::List => commands::orders::list(&ctx).await?,
            OrderAction::Status { order_id, status } => {
                commands::orders::set_status(&ctx, &order_id, status).await?;
            }
        },
    }
    Ok(())
}
