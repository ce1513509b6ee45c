use chrono::NaiveDate;
use msme_core::dashboard::{self, BusinessStage};
use msme_core::records::{AppState, LineRequest, NewContact, NewProduct};
use msme_core::MsmeError;
use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;

fn order_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 14).unwrap()
}

fn seeded_state() -> AppState {
    let mut state = AppState::default();
    state
        .add_product(NewProduct {
            name: "Laptop Pro".into(),
            description: "15-inch screen, 8GB RAM".into(),
            unit_price: dec!(55_000),
            stock: 10,
            reorder_level: 3,
        })
        .unwrap();
    state
        .add_product(NewProduct {
            name: "Wireless Mouse".into(),
            description: String::new(),
            unit_price: dec!(800),
            stock: 50,
            reorder_level: 10,
        })
        .unwrap();
    state
        .add_customer(NewContact {
            name: "Asha Traders".into(),
            contact_person: "Asha".into(),
            email: "asha@example.com".into(),
            phone: "98765 43210".into(),
            address: "Market Road".into(),
        })
        .unwrap();
    state
        .add_supplier(NewContact {
            name: "Supplier A Ltd.".into(),
            contact_person: String::new(),
            email: String::new(),
            phone: String::new(),
            address: String::new(),
        })
        .unwrap();
    state
}

// ===========================================================================
// CRUD and identifier scheme
// ===========================================================================

#[test]
fn test_ids_are_sequential_per_store() {
    let state = seeded_state();
    let product_ids: Vec<&str> = state.products().map(|p| p.id.as_str()).collect();
    assert_eq!(product_ids, vec!["PROD001", "PROD002"]);
    assert!(state.customer("CUST001").is_ok());
    assert!(state.supplier("SUPP001").is_ok());
}

#[test]
fn test_get_unknown_id_is_not_found() {
    let state = seeded_state();
    match state.product("PROD999") {
        Err(MsmeError::NotFound { entity, id }) => {
            assert_eq!(entity, "Product");
            assert_eq!(id, "PROD999");
        }
        other => panic!("expected NotFound, got {other:?}"),
    }
    assert!(state.customer("CUST042").is_err());
    assert!(state.sales_order("SO001").is_err());
}

#[test]
fn test_empty_names_rejected() {
    let mut state = AppState::default();
    assert!(state
        .add_product(NewProduct {
            name: "   ".into(),
            description: String::new(),
            unit_price: dec!(10),
            stock: 0,
            reorder_level: 0,
        })
        .is_err());
    assert!(state
        .add_customer(NewContact {
            name: String::new(),
            contact_person: String::new(),
            email: String::new(),
            phone: String::new(),
            address: String::new(),
        })
        .is_err());
    assert!(state.products().next().is_none());
    assert!(state.customers().next().is_none());
}

// ===========================================================================
// Sales orders: pricing, stock decrement, atomic rejection
// ===========================================================================

#[test]
fn test_sales_order_decrements_stock_and_prices_lines() {
    let mut state = seeded_state();
    let lines = vec![
        LineRequest {
            product_id: "PROD001".into(),
            quantity: 2,
        },
        LineRequest {
            product_id: "PROD002".into(),
            quantity: 5,
        },
    ];

    let order = state
        .create_sales_order("CUST001", order_date(), &lines)
        .unwrap();

    assert_eq!(order.id, "SO001");
    assert_eq!(order.customer_name, "Asha Traders");
    assert_eq!(order.lines[0].subtotal, dec!(110_000));
    assert_eq!(order.lines[1].subtotal, dec!(4_000));
    assert_eq!(order.total_amount, dec!(114_000));

    assert_eq!(state.product("PROD001").unwrap().stock, 8);
    assert_eq!(state.product("PROD002").unwrap().stock, 45);
}

#[test]
fn test_insufficient_stock_rejection_is_atomic() {
    let mut state = seeded_state();
    let lines = vec![
        LineRequest {
            product_id: "PROD001".into(),
            quantity: 2,
        },
        // Second line exceeds available stock; the first must stay untouched.
        LineRequest {
            product_id: "PROD002".into(),
            quantity: 51,
        },
    ];

    match state.create_sales_order("CUST001", order_date(), &lines) {
        Err(MsmeError::InsufficientStock {
            product_id,
            requested,
            available,
        }) => {
            assert_eq!(product_id, "PROD002");
            assert_eq!(requested, 51);
            assert_eq!(available, 50);
        }
        other => panic!("expected InsufficientStock, got {other:?}"),
    }

    assert_eq!(state.product("PROD001").unwrap().stock, 10);
    assert_eq!(state.product("PROD002").unwrap().stock, 50);
    assert!(state.sales_orders().is_empty());
}

#[test]
fn test_repeated_lines_checked_cumulatively() {
    let mut state = seeded_state();
    // Two lines for the same product, individually in stock but not combined.
    let lines = vec![
        LineRequest {
            product_id: "PROD001".into(),
            quantity: 6,
        },
        LineRequest {
            product_id: "PROD001".into(),
            quantity: 6,
        },
    ];

    assert!(matches!(
        state.create_sales_order("CUST001", order_date(), &lines),
        Err(MsmeError::InsufficientStock { .. })
    ));
    assert_eq!(state.product("PROD001").unwrap().stock, 10);
}

#[test]
fn test_sales_order_rejects_bad_lines() {
    let mut state = seeded_state();

    assert!(matches!(
        state.create_sales_order("CUST001", order_date(), &[]),
        Err(MsmeError::InvalidInput { .. })
    ));
    assert!(matches!(
        state.create_sales_order(
            "CUST001",
            order_date(),
            &[LineRequest {
                product_id: "PROD001".into(),
                quantity: 0,
            }],
        ),
        Err(MsmeError::InvalidInput { .. })
    ));
    assert!(matches!(
        state.create_sales_order(
            "CUST001",
            order_date(),
            &[LineRequest {
                product_id: "PROD404".into(),
                quantity: 1,
            }],
        ),
        Err(MsmeError::NotFound { .. })
    ));
    assert!(state.sales_orders().is_empty());
    assert_eq!(state.product("PROD001").unwrap().stock, 10);
}

// ===========================================================================
// Purchase orders
// ===========================================================================

#[test]
fn test_purchase_order_increments_stock() {
    let mut state = seeded_state();
    let order = state
        .create_purchase_order(
            "SUPP001",
            order_date(),
            &[LineRequest {
                product_id: "PROD002".into(),
                quantity: 100,
            }],
        )
        .unwrap();

    assert_eq!(order.id, "PO001");
    assert_eq!(order.supplier_name, "Supplier A Ltd.");
    assert_eq!(order.total_amount, dec!(80_000));
    assert_eq!(state.product("PROD002").unwrap().stock, 150);
}

#[test]
fn test_order_ids_advance_independently() {
    let mut state = seeded_state();
    let line = [LineRequest {
        product_id: "PROD002".into(),
        quantity: 1,
    }];

    state
        .create_sales_order("CUST001", order_date(), &line)
        .unwrap();
    state
        .create_sales_order("CUST001", order_date(), &line)
        .unwrap();
    let po = state
        .create_purchase_order("SUPP001", order_date(), &line)
        .unwrap();

    assert_eq!(state.sales_orders()[1].id, "SO002");
    assert_eq!(po.id, "PO001");
}

// ===========================================================================
// Dashboard aggregation
// ===========================================================================

#[test]
fn test_dashboard_reflects_orders_and_low_stock() {
    let mut state = seeded_state();
    state
        .create_sales_order(
            "CUST001",
            order_date(),
            &[LineRequest {
                product_id: "PROD001".into(),
                quantity: 8,
            }],
        )
        .unwrap();

    let summary = dashboard::summarize(&state);
    assert_eq!(summary.total_products, 2);
    assert_eq!(summary.total_customers, 1);
    assert_eq!(summary.total_suppliers, 1);
    assert_eq!(summary.sales_order_count, 1);
    assert_eq!(summary.total_sales_value, dec!(440_000));
    assert_eq!(summary.business_stage, BusinessStage::Growing);

    // PROD001 dropped to 2, below its reorder level of 3.
    assert_eq!(summary.low_stock.len(), 1);
    assert_eq!(summary.low_stock[0].product_id, "PROD001");
    assert_eq!(summary.low_stock[0].stock, 2);
}

#[test]
fn test_sales_trend_groups_by_date_ascending() {
    let mut state = seeded_state();
    let line = [LineRequest {
        product_id: "PROD002".into(),
        quantity: 2,
    }];
    let day1 = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
    let day2 = NaiveDate::from_ymd_opt(2025, 3, 12).unwrap();

    state.create_sales_order("CUST001", day2, &line).unwrap();
    state.create_sales_order("CUST001", day1, &line).unwrap();
    state.create_sales_order("CUST001", day1, &line).unwrap();

    let trend = dashboard::sales_trend(&state);
    assert_eq!(trend.len(), 2);
    assert_eq!(trend[0].date, day1);
    assert_eq!(trend[0].total, dec!(3_200));
    assert_eq!(trend[1].date, day2);
    assert_eq!(trend[1].total, dec!(1_600));
}
