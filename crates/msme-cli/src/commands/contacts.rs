use clap::Args;
use serde_json::Value;

use msme_core::records::{AppState, NewContact};

use super::IdArg;
use crate::input;

/// Contact fields shared by customers and suppliers
#[derive(Args)]
pub struct AddContactArgs {
    /// Contact name
    #[arg(long)]
    pub name: Option<String>,

    /// Contact person, if the record is a company
    #[arg(long, default_value = "")]
    pub contact_person: String,

    /// Email address
    #[arg(long, default_value = "")]
    pub email: String,

    /// Phone number
    #[arg(long, default_value = "")]
    pub phone: String,

    /// Postal address
    #[arg(long, default_value = "")]
    pub address: String,

    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

fn resolve_contact(args: &AddContactArgs) -> Result<NewContact, Box<dyn std::error::Error>> {
    if let Some(ref path) = args.input {
        return Ok(input::file::read_json(path)?);
    }
    if let Some(data) = input::stdin::read_stdin()? {
        return Ok(serde_json::from_value(data)?);
    }
    Ok(NewContact {
        name: args
            .name
            .clone()
            .ok_or("--name is required (or provide --input)")?,
        contact_person: args.contact_person.clone(),
        email: args.email.clone(),
        phone: args.phone.clone(),
        address: args.address.clone(),
    })
}

pub fn run_add_customer(
    state: &mut AppState,
    args: &AddContactArgs,
) -> Result<(Value, bool), Box<dyn std::error::Error>> {
    let customer = state.add_customer(resolve_contact(args)?)?;
    Ok((serde_json::to_value(customer)?, true))
}

pub fn run_customers(state: &AppState) -> Result<(Value, bool), Box<dyn std::error::Error>> {
    let rows: Vec<&_> = state.customers().collect();
    Ok((serde_json::to_value(rows)?, false))
}

pub fn run_customer(
    state: &AppState,
    arg: &IdArg,
) -> Result<(Value, bool), Box<dyn std::error::Error>> {
    Ok((serde_json::to_value(state.customer(&arg.id)?)?, false))
}

pub fn run_add_supplier(
    state: &mut AppState,
    args: &AddContactArgs,
) -> Result<(Value, bool), Box<dyn std::error::Error>> {
    let supplier = state.add_supplier(resolve_contact(args)?)?;
    Ok((serde_json::to_value(supplier)?, true))
}

pub fn run_suppliers(state: &AppState) -> Result<(Value, bool), Box<dyn std::error::Error>> {
    let rows: Vec<&_> = state.suppliers().collect();
    Ok((serde_json::to_value(rows)?, false))
}

pub fn run_supplier(
    state: &AppState,
    arg: &IdArg,
) -> Result<(Value, bool), Box<dyn std::error::Error>> {
    Ok((serde_json::to_value(state.supplier(&arg.id)?)?, false))
}
