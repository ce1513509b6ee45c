use msme_core::amortization::{build_schedule, LoanTerms};
use msme_core::MsmeError;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn terms(principal: Decimal, rate: Decimal, years: u32, extra: Decimal) -> LoanTerms {
    LoanTerms {
        principal,
        annual_rate_percent: rate,
        term_years: years,
        extra_monthly_payment: extra,
    }
}

// ===========================================================================
// Zero-interest amortization
// ===========================================================================

#[test]
fn test_zero_interest_is_straight_line() {
    let out = build_schedule(&terms(dec!(12_000), dec!(0), 1, dec!(0))).unwrap();
    let result = &out.result;

    assert_eq!(result.schedule.len(), 12);
    assert_eq!(result.summary.payment_count, 12);
    assert_eq!(result.summary.base_monthly_payment, dec!(1000));
    assert_eq!(result.summary.total_interest_paid, dec!(0));

    for entry in &result.schedule {
        assert_eq!(entry.principal_paid, dec!(1000));
        assert_eq!(entry.interest_paid, dec!(0));
        assert_eq!(entry.payment_amount, dec!(1000));
    }
    assert_eq!(result.schedule[11].remaining_balance, dec!(0));
}

// ===========================================================================
// Balance monotonicity and principal conservation
// ===========================================================================

#[test]
fn test_balance_is_monotone_and_ends_at_zero() {
    let cases = [
        terms(dec!(250_000), dec!(6.5), 20, dec!(0)),
        terms(dec!(50_000), dec!(11.25), 5, dec!(150)),
        terms(dec!(1_000), dec!(0.1), 1, dec!(0)),
    ];

    for case in &cases {
        let out = build_schedule(case).unwrap();
        let schedule = &out.result.schedule;

        let mut previous = case.principal;
        for entry in schedule {
            assert!(
                entry.remaining_balance <= previous,
                "balance increased at period {} for {case:?}",
                entry.payment_number
            );
            previous = entry.remaining_balance;
        }
        assert_eq!(schedule.last().unwrap().remaining_balance, dec!(0));
    }
}

#[test]
fn test_indivisible_principal_ends_at_exactly_zero() {
    // 10000 / 12 has no finite decimal expansion, so every period carries a
    // rounding residue; the final payment must absorb it.
    let out = build_schedule(&terms(dec!(10_000), dec!(0), 1, dec!(0))).unwrap();
    let schedule = &out.result.schedule;

    assert_eq!(schedule.len(), 12);
    assert_eq!(schedule.last().unwrap().remaining_balance, dec!(0));

    let summed: Decimal = schedule.iter().map(|e| e.principal_paid).sum();
    assert_eq!(summed, dec!(10_000));
}

#[test]
fn test_principal_conservation() {
    let case = terms(dec!(180_000), dec!(7.4), 15, dec!(200));
    let out = build_schedule(&case).unwrap();

    let summed: Decimal = out.result.schedule.iter().map(|e| e.principal_paid).sum();
    assert!(
        (summed - case.principal).abs() < dec!(0.01),
        "principal drifted: {summed}"
    );
    assert!((out.result.summary.total_principal_paid - case.principal).abs() < dec!(0.01));
}

#[test]
fn test_balance_recurrence_holds() {
    let case = terms(dec!(90_000), dec!(9), 10, dec!(0));
    let out = build_schedule(&case).unwrap();

    let mut balance = case.principal;
    for entry in &out.result.schedule {
        balance -= entry.principal_paid;
        assert_eq!(entry.remaining_balance, balance.max(Decimal::ZERO));
    }
}

// ===========================================================================
// Extra payments
// ===========================================================================

#[test]
fn test_extra_payment_shortens_term() {
    let base = build_schedule(&terms(dec!(200_000), dec!(6), 30, dec!(0))).unwrap();
    let accelerated = build_schedule(&terms(dec!(200_000), dec!(6), 30, dec!(100))).unwrap();

    assert!(
        accelerated.result.summary.payment_count < base.result.summary.payment_count,
        "{} vs {}",
        accelerated.result.summary.payment_count,
        base.result.summary.payment_count
    );
    assert!(
        accelerated.result.summary.total_interest_paid
            < base.result.summary.total_interest_paid
    );
}

#[test]
fn test_final_period_correction() {
    let out = build_schedule(&terms(dec!(200_000), dec!(6), 30, dec!(250))).unwrap();
    let result = &out.result;
    let nominal = result.summary.total_monthly_payment;

    let (last, rest) = result.schedule.split_last().unwrap();
    for entry in rest {
        assert_eq!(entry.payment_amount, nominal);
    }
    assert!(last.payment_amount <= nominal);
    assert_eq!(last.remaining_balance, dec!(0));
}

// ===========================================================================
// Input rejection
// ===========================================================================

#[test]
fn test_invalid_inputs_rejected() {
    let cases = [
        (terms(dec!(-1), dec!(5), 10, dec!(0)), "principal"),
        (terms(dec!(0), dec!(5), 10, dec!(0)), "principal"),
        (terms(dec!(100), dec!(-1), 10, dec!(0)), "annual_rate_percent"),
        (terms(dec!(100), dec!(5), 0, dec!(0)), "term_years"),
        (terms(dec!(100), dec!(5), 10, dec!(-0.5)), "extra_monthly_payment"),
    ];

    for (case, expected_field) in cases {
        match build_schedule(&case) {
            Err(MsmeError::InvalidInput { field, .. }) => {
                assert_eq!(field, expected_field, "wrong field for {case:?}")
            }
            other => panic!("expected InvalidInput for {case:?}, got {other:?}"),
        }
    }
}

#[test]
fn test_payment_numbers_are_dense_from_one() {
    let out = build_schedule(&terms(dec!(30_000), dec!(12), 3, dec!(50))).unwrap();
    for (i, entry) in out.result.schedule.iter().enumerate() {
        assert_eq!(entry.payment_number as usize, i + 1);
    }
}

#[test]
fn test_summary_totals_match_schedule() {
    let out = build_schedule(&terms(dec!(75_000), dec!(8.5), 7, dec!(0))).unwrap();
    let result = &out.result;

    let interest: Decimal = result.schedule.iter().map(|e| e.interest_paid).sum();
    let principal: Decimal = result.schedule.iter().map(|e| e.principal_paid).sum();
    assert_eq!(result.summary.total_interest_paid, interest);
    assert_eq!(result.summary.total_principal_paid, principal);
    assert_eq!(
        result.summary.payment_count as usize,
        result.schedule.len()
    );
}
