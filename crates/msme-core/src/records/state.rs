//! The session's record stores and their state transitions.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::MsmeError;
use crate::MsmeResult;

use super::contact::{Customer, NewContact, Supplier};
use super::ids;
use super::order::{LineRequest, OrderLine, PurchaseOrder, SalesOrder};
use super::product::{NewProduct, Product};

/// All records for one session, keyed by generated identifiers. `Default`
/// gives the empty state a fresh session starts from.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppState {
    #[serde(default)]
    pub products: BTreeMap<String, Product>,
    #[serde(default)]
    pub customers: BTreeMap<String, Customer>,
    #[serde(default)]
    pub suppliers: BTreeMap<String, Supplier>,
    #[serde(default)]
    pub sales_orders: Vec<SalesOrder>,
    #[serde(default)]
    pub purchase_orders: Vec<PurchaseOrder>,
}

impl AppState {
    // -- Inventory ----------------------------------------------------------

    /// Add a product and return the stored record with its new id.
    pub fn add_product(&mut self, new: NewProduct) -> MsmeResult<Product> {
        new.validate()?;
        let id = ids::next_id(
            ids::PRODUCT_PREFIX,
            self.products.keys().map(String::as_str),
        );
        let product = Product {
            id: id.clone(),
            name: new.name,
            description: new.description,
            unit_price: new.unit_price,
            stock: new.stock,
            reorder_level: new.reorder_level,
        };
        self.products.insert(id, product.clone());
        Ok(product)
    }

    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.products.values()
    }

    pub fn product(&self, id: &str) -> MsmeResult<&Product> {
        self.products.get(id).ok_or_else(|| MsmeError::NotFound {
            entity: "Product",
            id: id.to_string(),
        })
    }

    /// Products whose stock has fallen below their reorder level.
    pub fn low_stock_products(&self) -> Vec<&Product> {
        self.products.values().filter(|p| p.is_low_stock()).collect()
    }

    // -- Contacts -----------------------------------------------------------

    pub fn add_customer(&mut self, new: NewContact) -> MsmeResult<Customer> {
        new.validate()?;
        let id = ids::next_id(
            ids::CUSTOMER_PREFIX,
            self.customers.keys().map(String::as_str),
        );
        let customer = Customer {
            id: id.clone(),
            name: new.name,
            contact_person: new.contact_person,
            email: new.email,
            phone: new.phone,
            address: new.address,
        };
        self.customers.insert(id, customer.clone());
        Ok(customer)
    }

    pub fn customers(&self) -> impl Iterator<Item = &Customer> {
        self.customers.values()
    }

    pub fn customer(&self, id: &str) -> MsmeResult<&Customer> {
        self.customers.get(id).ok_or_else(|| MsmeError::NotFound {
            entity: "Customer",
            id: id.to_string(),
        })
    }

    pub fn add_supplier(&mut self, new: NewContact) -> MsmeResult<Supplier> {
        new.validate()?;
        let id = ids::next_id(
            ids::SUPPLIER_PREFIX,
            self.suppliers.keys().map(String::as_str),
        );
        let supplier = Supplier {
            id: id.clone(),
            name: new.name,
            contact_person: new.contact_person,
            email: new.email,
            phone: new.phone,
            address: new.address,
        };
        self.suppliers.insert(id, supplier.clone());
        Ok(supplier)
    }

    pub fn suppliers(&self) -> impl Iterator<Item = &Supplier> {
        self.suppliers.values()
    }

    pub fn supplier(&self, id: &str) -> MsmeResult<&Supplier> {
        self.suppliers.get(id).ok_or_else(|| MsmeError::NotFound {
            entity: "Supplier",
            id: id.to_string(),
        })
    }

    // -- Orders -------------------------------------------------------------

    /// Create a sales order, decrementing stock for every line.
    ///
    /// Rejection is all-or-nothing: every line (including repeated lines for
    /// the same product, counted cumulatively) is checked against available
    /// stock before any stock is touched, so a failing order leaves the
    /// inventory exactly as it was.
    pub fn create_sales_order(
        &mut self,
        customer_id: &str,
        date: NaiveDate,
        lines: &[LineRequest],
    ) -> MsmeResult<SalesOrder> {
        let customer_name = self.customer(customer_id)?.name.clone();
        let priced_lines = self.price_lines(lines)?;

        let mut requested: BTreeMap<&str, u32> = BTreeMap::new();
        for line in lines {
            *requested.entry(line.product_id.as_str()).or_default() += line.quantity;
        }
        for (product_id, quantity) in &requested {
            let available = self.product(product_id)?.stock;
            if available < *quantity {
                return Err(MsmeError::InsufficientStock {
                    product_id: (*product_id).to_string(),
                    requested: *quantity,
                    available,
                });
            }
        }

        for (product_id, quantity) in requested {
            if let Some(product) = self.products.get_mut(product_id) {
                product.stock -= quantity;
            }
        }

        let total_amount = priced_lines.iter().map(|l| l.subtotal).sum();
        let id = ids::next_id(
            ids::SALES_ORDER_PREFIX,
            self.sales_orders.iter().map(|o| o.id.as_str()),
        );
        let order = SalesOrder {
            id,
            date,
            customer_id: customer_id.to_string(),
            customer_name,
            lines: priced_lines,
            total_amount,
        };
        self.sales_orders.push(order.clone());
        Ok(order)
    }

    /// Create a purchase order, incrementing stock for every line. Incoming
    /// stock has no invariant to violate, so the increment is unconditional.
    pub fn create_purchase_order(
        &mut self,
        supplier_id: &str,
        date: NaiveDate,
        lines: &[LineRequest],
    ) -> MsmeResult<PurchaseOrder> {
        let supplier_name = self.supplier(supplier_id)?.name.clone();
        let priced_lines = self.price_lines(lines)?;

        for line in &priced_lines {
            if let Some(product) = self.products.get_mut(&line.product_id) {
                product.stock = product.stock.saturating_add(line.quantity);
            }
        }

        let total_amount = priced_lines.iter().map(|l| l.subtotal).sum();
        let id = ids::next_id(
            ids::PURCHASE_ORDER_PREFIX,
            self.purchase_orders.iter().map(|o| o.id.as_str()),
        );
        let order = PurchaseOrder {
            id,
            date,
            supplier_id: supplier_id.to_string(),
            supplier_name,
            lines: priced_lines,
            total_amount,
        };
        self.purchase_orders.push(order.clone());
        Ok(order)
    }

    pub fn sales_orders(&self) -> &[SalesOrder] {
        &self.sales_orders
    }

    pub fn sales_order(&self, id: &str) -> MsmeResult<&SalesOrder> {
        self.sales_orders
            .iter()
            .find(|o| o.id == id)
            .ok_or_else(|| MsmeError::NotFound {
                entity: "Sales order",
                id: id.to_string(),
            })
    }

    pub fn purchase_orders(&self) -> &[PurchaseOrder] {
        &self.purchase_orders
    }

    pub fn purchase_order(&self, id: &str) -> MsmeResult<&PurchaseOrder> {
        self.purchase_orders
            .iter()
            .find(|o| o.id == id)
            .ok_or_else(|| MsmeError::NotFound {
                entity: "Purchase order",
                id: id.to_string(),
            })
    }

    /// Resolve and price requested lines at current unit prices. Fails on an
    /// empty order, an unknown product or a zero quantity without mutating
    /// anything.
    fn price_lines(&self, lines: &[LineRequest]) -> MsmeResult<Vec<OrderLine>> {
        if lines.is_empty() {
            return Err(MsmeError::InvalidInput {
                field: "lines".into(),
                reason: "An order needs at least one line item".into(),
            });
        }

        let mut priced = Vec::with_capacity(lines.len());
        for line in lines {
            if line.quantity == 0 {
                return Err(MsmeError::InvalidInput {
                    field: "quantity".into(),
                    reason: format!("Quantity for {} must be at least 1", line.product_id),
                });
            }
            let product = self.product(&line.product_id)?;
            let subtotal = product.unit_price * Decimal::from(line.quantity);
            priced.push(OrderLine {
                product_id: product.id.clone(),
                product_name: product.name.clone(),
                quantity: line.quantity,
                unit_price: product.unit_price,
                subtotal,
            });
        }
        Ok(priced)
    }
}
