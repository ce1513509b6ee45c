use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use msme_core::amortization::{self, LoanTerms};

use crate::input;

/// Arguments for the amortization schedule
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct AmortizeArgs {
    /// Amount borrowed, in currency units
    #[arg(long)]
    pub principal: Option<Decimal>,

    /// Annual rate as a percentage (e.g. 4.5 for 4.5%)
    #[arg(long, alias = "rate")]
    pub annual_rate_percent: Option<Decimal>,

    /// Loan term in whole years
    #[arg(long, alias = "years")]
    pub term_years: Option<u32>,

    /// Voluntary extra payment added every month
    #[arg(long, default_value = "0")]
    pub extra_payment: Decimal,

    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run(args: &AmortizeArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let terms: LoanTerms = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        LoanTerms {
            principal: args
                .principal
                .ok_or("--principal is required (or provide --input)")?,
            annual_rate_percent: args
                .annual_rate_percent
                .ok_or("--annual-rate-percent is required (or provide --input)")?,
            term_years: args
                .term_years
                .ok_or("--term-years is required (or provide --input)")?,
            extra_monthly_payment: args.extra_payment,
        }
    };

    let result = amortization::build_schedule(&terms)?;
    Ok(serde_json::to_value(result)?)
}
