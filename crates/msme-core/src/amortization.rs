//! Loan amortization schedule generation.
//!
//! Produces a period-by-period breakdown of a loan repayment into principal
//! and interest components, with support for extra monthly payments and
//! early payoff. All math in `rust_decimal::Decimal`.

use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::MsmeError;
use crate::types::{with_metadata, ComputationOutput, Money, Rate};
use crate::MsmeResult;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Residual balance below which the loan is treated as repaid.
const BALANCE_EPSILON: Decimal = dec!(0.01);

/// Months per year.
const MONTHS_PER_YEAR: u32 = 12;

/// Term length beyond which `powd` precision in the annuity factor is no
/// longer guaranteed to standard double-precision quality.
const PRECISION_WARNING_MONTHS: u32 = 600;

// ---------------------------------------------------------------------------
// Input types
// ---------------------------------------------------------------------------

/// Validated loan parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanTerms {
    /// Amount borrowed, in currency units.
    pub principal: Money,
    /// Annual rate as a percentage (4.5 = 4.5%).
    pub annual_rate_percent: Rate,
    /// Nominal term in whole years.
    pub term_years: u32,
    /// Voluntary extra payment added to every period.
    #[serde(default)]
    pub extra_monthly_payment: Money,
}

// ---------------------------------------------------------------------------
// Output types
// ---------------------------------------------------------------------------

/// One simulated payment period. Payment numbers start at 1.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub payment_number: u32,
    /// Cash actually paid this period. Equals the nominal payment except on
    /// the final period, where it may be smaller.
    pub payment_amount: Money,
    pub principal_paid: Money,
    pub interest_paid: Money,
    /// Balance after this payment. Exactly zero on the final entry.
    pub remaining_balance: Money,
}

/// Aggregates over the full schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleSummary {
    pub total_interest_paid: Money,
    pub total_principal_paid: Money,
    /// Number of periods actually simulated (shorter than the nominal term
    /// when extra payments are made).
    pub payment_count: u32,
    /// Payment that retires the principal over the nominal term with no
    /// extra payment.
    pub base_monthly_payment: Money,
    /// Base payment plus the extra monthly payment.
    pub total_monthly_payment: Money,
}

/// Full engine output: ordered schedule plus summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmortizationOutput {
    pub schedule: Vec<ScheduleEntry>,
    pub summary: ScheduleSummary,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Build the amortization schedule for the given terms.
///
/// Fails with `InvalidInput` on bad parameters and `NonAmortizing` when the
/// monthly payment does not cover even the first period's interest; no
/// partial schedule is produced on either path.
pub fn build_schedule(terms: &LoanTerms) -> MsmeResult<ComputationOutput<AmortizationOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();
    validate_terms(terms)?;

    let monthly_rate = terms.annual_rate_percent / dec!(100) / dec!(12);
    let term_months = terms.term_years * MONTHS_PER_YEAR;

    if term_months > PRECISION_WARNING_MONTHS {
        warnings.push(format!(
            "Term of {term_months} months exceeds {PRECISION_WARNING_MONTHS}; \
             annuity factor precision is not guaranteed beyond double precision"
        ));
    }

    let base_payment = base_monthly_payment(terms.principal, monthly_rate, term_months);
    let nominal_payment = base_payment + terms.extra_monthly_payment;

    // Detect a payment that can never reduce the balance before simulating,
    // instead of looping to the safety bound and truncating silently.
    let first_interest = terms.principal * monthly_rate;
    if nominal_payment <= first_interest {
        return Err(MsmeError::NonAmortizing {
            payment: nominal_payment,
            first_interest,
        });
    }

    let safety_bound = term_months * 2;
    let mut schedule: Vec<ScheduleEntry> = Vec::with_capacity(term_months as usize);
    let mut remaining = terms.principal;
    let mut payment_number = 0u32;
    let mut total_interest = Decimal::ZERO;
    let mut total_principal = Decimal::ZERO;

    loop {
        payment_number += 1;

        let interest = remaining * monthly_rate;
        let mut principal_part = nominal_payment - interest;
        let payment_amount;

        if principal_part >= remaining - BALANCE_EPSILON {
            // Final period: clamp so the balance lands on exactly zero,
            // folding any sub-epsilon rounding residue into this payment.
            principal_part = remaining;
            payment_amount = principal_part + interest;
            remaining = Decimal::ZERO;
        } else {
            remaining -= principal_part;
            payment_amount = nominal_payment;
        }

        total_interest += interest;
        total_principal += principal_part;

        schedule.push(ScheduleEntry {
            payment_number,
            payment_amount,
            principal_paid: principal_part,
            interest_paid: interest,
            remaining_balance: remaining,
        });

        if remaining <= BALANCE_EPSILON || payment_number >= safety_bound {
            break;
        }
    }

    let summary = ScheduleSummary {
        total_interest_paid: total_interest,
        total_principal_paid: total_principal,
        payment_count: payment_number,
        base_monthly_payment: base_payment,
        total_monthly_payment: nominal_payment,
    };

    let output = AmortizationOutput { schedule, summary };
    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Level-Payment Amortization with Early-Payoff Correction",
        terms,
        warnings,
        elapsed,
        output,
    ))
}

// ---------------------------------------------------------------------------
// Internals
// ---------------------------------------------------------------------------

/// Standalone payment that fully amortizes `principal` over `term_months`.
fn base_monthly_payment(principal: Money, monthly_rate: Rate, term_months: u32) -> Money {
    if monthly_rate.is_zero() {
        // Straight-line, no interest.
        return principal / Decimal::from(term_months);
    }

    let one_plus_r = Decimal::ONE + monthly_rate;
    let factor = one_plus_r.powd(Decimal::from(term_months));
    principal * monthly_rate * factor / (factor - Decimal::ONE)
}

fn validate_terms(terms: &LoanTerms) -> MsmeResult<()> {
    if terms.principal <= Decimal::ZERO {
        return Err(MsmeError::InvalidInput {
            field: "principal".into(),
            reason: "Principal must be positive".into(),
        });
    }
    if terms.annual_rate_percent < Decimal::ZERO {
        return Err(MsmeError::InvalidInput {
            field: "annual_rate_percent".into(),
            reason: "Annual rate cannot be negative".into(),
        });
    }
    if terms.term_years == 0 {
        return Err(MsmeError::InvalidInput {
            field: "term_years".into(),
            reason: "Term must be at least one year".into(),
        });
    }
    if terms.extra_monthly_payment < Decimal::ZERO {
        return Err(MsmeError::InvalidInput {
            field: "extra_monthly_payment".into(),
            reason: "Extra monthly payment cannot be negative".into(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn terms(principal: Decimal, rate: Decimal, years: u32) -> LoanTerms {
        LoanTerms {
            principal,
            annual_rate_percent: rate,
            term_years: years,
            extra_monthly_payment: Decimal::ZERO,
        }
    }

    #[test]
    fn test_base_payment_known_answer() {
        // 200k at 6% over 30 years => ~1199.10 per month.
        let pmt = base_monthly_payment(dec!(200_000), dec!(0.005), 360);
        assert!((pmt - dec!(1199.10)).abs() < dec!(0.01), "got {pmt}");
    }

    #[test]
    fn test_zero_rate_is_straight_line() {
        let out = build_schedule(&terms(dec!(12000), dec!(0), 1)).unwrap();
        let result = &out.result;
        assert_eq!(result.schedule.len(), 12);
        for entry in &result.schedule {
            assert_eq!(entry.principal_paid, dec!(1000));
            assert_eq!(entry.interest_paid, dec!(0));
        }
        assert_eq!(result.schedule[11].remaining_balance, dec!(0));
    }

    #[test]
    fn test_payment_numbers_increase_by_one() {
        let out = build_schedule(&terms(dec!(50_000), dec!(7.2), 5)).unwrap();
        for (i, entry) in out.result.schedule.iter().enumerate() {
            assert_eq!(entry.payment_number, i as u32 + 1);
        }
    }

    #[test]
    fn test_long_term_warns_about_precision() {
        let out = build_schedule(&terms(dec!(100_000), dec!(4), 60)).unwrap();
        assert!(!out.warnings.is_empty());
    }

    #[test]
    fn test_interest_share_declines_over_time() {
        let out = build_schedule(&terms(dec!(100_000), dec!(8), 10)).unwrap();
        let schedule = &out.result.schedule;
        let first = &schedule[0];
        let last = &schedule[schedule.len() - 1];
        assert!(first.interest_paid > last.interest_paid);
        assert!(first.principal_paid < last.principal_paid);
    }
}
