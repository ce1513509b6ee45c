mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use serde_json::Value;
use std::path::PathBuf;
use std::process;

use msme_core::persistence;
use msme_core::records::AppState;

use commands::amortize::AmortizeArgs;
use commands::contacts::AddContactArgs;
use commands::inventory::AddProductArgs;
use commands::orders::{CreatePurchaseArgs, CreateSaleArgs};
use commands::IdArg;

/// Small-business management toolkit
#[derive(Parser)]
#[command(
    name = "msme",
    version,
    about = "Small-business management toolkit",
    long_about = "Record-keeping and planning for micro, small and medium \
                  enterprises: inventory, customers, suppliers, sales and \
                  purchase orders, dashboard metrics, and a loan amortization \
                  calculator with decimal precision. Records are kept per \
                  user in a JSON blob under the data directory."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,

    /// Session owner; each user has an isolated record store
    #[arg(long, default_value = "default", global = true)]
    user: String,

    /// Directory holding per-user session blobs
    #[arg(long, default_value = "./msme-data", global = true)]
    data_dir: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a loan amortization schedule
    Amortize(AmortizeArgs),
    /// Add a product to the inventory
    AddProduct(AddProductArgs),
    /// List all products with stock status
    Products,
    /// Show one product
    Product(IdArg),
    /// Add a customer
    AddCustomer(AddContactArgs),
    /// List all customers
    Customers,
    /// Show one customer
    Customer(IdArg),
    /// Add a supplier
    AddSupplier(AddContactArgs),
    /// List all suppliers
    Suppliers,
    /// Show one supplier
    Supplier(IdArg),
    /// Create a sales order (decrements stock, all-or-nothing)
    CreateSale(CreateSaleArgs),
    /// List sales orders
    Sales,
    /// Show one sales order with its line items
    Sale(IdArg),
    /// Create a purchase order (increments stock)
    CreatePurchase(CreatePurchaseArgs),
    /// List purchase orders
    Purchases,
    /// Show one purchase order with its line items
    Purchase(IdArg),
    /// Key metrics, low-stock flags and business-stage advice
    Dashboard,
    /// Sales totals per day, for charting
    SalesTrend,
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    if let Commands::Version = cli.command {
        println!("msme {}", env!("CARGO_PKG_VERSION"));
        return;
    }

    match run(&cli) {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}

fn run(cli: &Cli) -> Result<Value, Box<dyn std::error::Error>> {
    // The amortization engine is stateless; everything else runs against the
    // user's persisted session.
    if let Commands::Amortize(args) = &cli.command {
        return commands::amortize::run(args);
    }

    let mut state = persistence::load(&cli.data_dir, &cli.user)?;
    let (value, mutated) = dispatch(&cli.command, &mut state)?;

    // Save after every mutating action. A failed save is a warning, not an
    // error: the command already ran and its result is still shown.
    if mutated {
        if let Err(e) = persistence::save(&cli.data_dir, &cli.user, &state) {
            eprintln!(
                "{}: {}; changes from this command may not survive restart",
                "warning".yellow().bold(),
                e
            );
        }
    }

    Ok(value)
}

fn dispatch(
    command: &Commands,
    state: &mut AppState,
) -> Result<(Value, bool), Box<dyn std::error::Error>> {
    match command {
        Commands::AddProduct(args) => commands::inventory::run_add(state, args),
        Commands::Products => commands::inventory::run_list(state),
        Commands::Product(arg) => commands::inventory::run_get(state, arg),
        Commands::AddCustomer(args) => commands::contacts::run_add_customer(state, args),
        Commands::Customers => commands::contacts::run_customers(state),
        Commands::Customer(arg) => commands::contacts::run_customer(state, arg),
        Commands::AddSupplier(args) => commands::contacts::run_add_supplier(state, args),
        Commands::Suppliers => commands::contacts::run_suppliers(state),
        Commands::Supplier(arg) => commands::contacts::run_supplier(state, arg),
        Commands::CreateSale(args) => commands::orders::run_create_sale(state, args),
        Commands::Sales => commands::orders::run_sales(state),
        Commands::Sale(arg) => commands::orders::run_sale(state, arg),
        Commands::CreatePurchase(args) => commands::orders::run_create_purchase(state, args),
        Commands::Purchases => commands::orders::run_purchases(state),
        Commands::Purchase(arg) => commands::orders::run_purchase(state, arg),
        Commands::Dashboard => commands::dashboard::run_summary(state),
        Commands::SalesTrend => commands::dashboard::run_trend(state),
        Commands::Amortize(_) | Commands::Version => unreachable!("handled before dispatch"),
    }
}
