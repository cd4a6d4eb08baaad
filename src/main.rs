use clap::{Parser, Subcommand};
use serde_json::Value;
use std::path::PathBuf;
use storefront::config::StorefrontConfig;
use storefront::core::{
    apply_coupon, can_drive, get_coupons, is_price_in_range, is_valid_username_str,
    validate_user_input,
};
use storefront::services::Storefront;
use storefront::StorefrontError;
use tracing::{debug, error, trace};

/// Check storefront rules from the command line
#[derive(Parser)]
#[command(name = "storefront")]
#[command(about = "Storefront rules: discounts, validation, store hours and shipping", long_about = None)]
struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to configuration file
    #[arg(short = 'c', long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply a discount code to a price
    Discount {
        #[arg(long, allow_hyphen_values = true)]
        price: f64,
        #[arg(long)]
        code: String,
    },
    /// Check whether someone may drive in a country
    CanDrive {
        #[arg(long)]
        age: u32,
        #[arg(long)]
        country: String,
    },
    /// Validate a username and age pair
    ValidateUser {
        #[arg(long)]
        username: String,
        /// Age; anything that is not a number is reported as invalid
        #[arg(long, allow_hyphen_values = true)]
        age: String,
    },
    /// Check a username against the 5-15 character rule
    Username { name: String },
    /// Check that a price lies within an inclusive range
    PriceRange {
        #[arg(long, allow_hyphen_values = true)]
        price: f64,
        #[arg(long, allow_hyphen_values = true)]
        min: f64,
        #[arg(long, allow_hyphen_values = true)]
        max: f64,
    },
    /// List the coupon catalog as JSON
    Coupons,
    /// Show whether the store is open and today's holiday discount
    Status,
    /// Convert a price from the base currency
    Convert {
        #[arg(long, allow_hyphen_values = true)]
        price: f64,
        #[arg(long)]
        currency: String,
    },
    /// Show shipping cost for a destination
    Shipping { destination: String },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match StorefrontConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    };

    let log_level = match cli.verbose {
        0 => config.log_level.as_str(),
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_target(cli.verbose >= 2)
        .with_writer(std::io::stderr)
        .init();

    debug!("Storefront started with verbosity level: {}", cli.verbose);
    trace!("Full CLI args: {:?}", std::env::args().collect::<Vec<_>>());

    let shop = Storefront::from_config(&config);

    if let Err(e) = run(cli.command, &shop) {
        error!("Fatal error: {}", e);
        eprintln!("Error: {e}");
        let code = e
            .downcast_ref::<StorefrontError>()
            .map_or(1, StorefrontError::exit_code);
        std::process::exit(code);
    }
}

fn run(command: Commands, shop: &Storefront) -> anyhow::Result<()> {
    match command {
        Commands::Discount { price, code } => {
            let discounted = apply_coupon(price, &code).map_err(StorefrontError::from)?;
            println!("{discounted}");
        }
        Commands::CanDrive { age, country } => {
            let allowed = can_drive(age, &country).map_err(StorefrontError::from)?;
            println!("{allowed}");
        }
        Commands::ValidateUser { username, age } => {
            // numbers stay numbers, anything else is passed through as text
            let age = serde_json::from_str::<Value>(&age)
                .ok()
                .filter(Value::is_number)
                .unwrap_or(Value::String(age));
            let report = validate_user_input(&Value::String(username), &age);
            println!("{}", report.message());
            report.into_result()?;
        }
        Commands::Username { name } => {
            println!("{}", is_valid_username_str(&name));
        }
        Commands::PriceRange { price, min, max } => {
            println!("{}", is_price_in_range(price, min, max));
        }
        Commands::Coupons => {
            println!("{}", serde_json::to_string_pretty(&get_coupons())?);
        }
        Commands::Status => {
            let state = if shop.is_online() { "open" } else { "closed" };
            println!("Store is {state}");
            println!("Holiday discount: {}", shop.holiday_discount());
        }
        Commands::Convert { price, currency } => {
            let converted = shop.price_in_currency(price, &currency)?;
            println!("{converted:.2} {currency}");
        }
        Commands::Shipping { destination } => {
            println!("{}", shop.shipping_info(&destination));
        }
    }
    Ok(())
}
