//! Sequence-counter identifiers: a store prefix plus a zero-padded number.

pub const PRODUCT_PREFIX: &str = "PROD";
pub const CUSTOMER_PREFIX: &str = "CUST";
pub const SUPPLIER_PREFIX: &str = "SUPP";
pub const SALES_ORDER_PREFIX: &str = "SO";
pub const PURCHASE_ORDER_PREFIX: &str = "PO";

/// Minimum digits in the numeric part (`PROD001`). Widens past 999.
const PAD_WIDTH: usize = 3;

/// Next identifier for a store, derived from the ids already present so the
/// sequence survives a save/load round trip.
pub fn next_id<'a, I>(prefix: &str, existing: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let max_seen = existing
        .into_iter()
        .filter_map(|id| id.strip_prefix(prefix))
        .filter_map(|n| n.parse::<u64>().ok())
        .max()
        .unwrap_or(0);
    format!("{prefix}{:0width$}", max_seen + 1, width = PAD_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_id_is_padded() {
        assert_eq!(next_id(PRODUCT_PREFIX, []), "PROD001");
    }

    #[test]
    fn test_next_id_follows_highest() {
        let existing = ["PROD001", "PROD007", "PROD003"];
        assert_eq!(next_id(PRODUCT_PREFIX, existing), "PROD008");
    }

    #[test]
    fn test_width_grows_past_999() {
        assert_eq!(next_id(SALES_ORDER_PREFIX, ["SO999"]), "SO1000");
        assert_eq!(next_id(SALES_ORDER_PREFIX, ["SO1000"]), "SO1001");
    }

    #[test]
    fn test_foreign_ids_are_ignored() {
        let existing = ["CUST005", "PROD002"];
        assert_eq!(next_id(PRODUCT_PREFIX, existing), "PROD003");
    }
}
