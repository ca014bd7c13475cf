//! Fixed-rate amortizing loan math.

use core_types::CalculatorError;
use rust_decimal::Decimal;

/// The level monthly payment that retires `loan_amount` over
/// `number_of_payments` months at `monthly_rate` (0.005 for 0.5% a month).
///
/// A zero rate falls back to straight-line repayment,
/// `loan_amount / number_of_payments`. Otherwise the standard formula
/// `L * r(1+r)^n / ((1+r)^n - 1)` is used.
pub fn monthly_payment(
    loan_amount: Decimal,
    monthly_rate: Decimal,
    number_of_payments: u32,
) -> Result<Decimal, CalculatorError> {
    if number_of_payments == 0 {
        return Err(CalculatorError::Calculation(
            "Number of payments must be greater than 0".to_string(),
        ));
    }

    if monthly_rate.is_zero() {
        return Ok(loan_amount / Decimal::from(number_of_payments));
    }

    let factor = compound(monthly_rate, number_of_payments).ok_or_else(|| {
        CalculatorError::Calculation("Compound interest factor overflowed".to_string())
    })?;

    // f / (f - 1) approaches 1 as f grows, so taking it before the loan
    // multiplication keeps every intermediate close to the payment itself.
    let annuity = factor.checked_div(factor - Decimal::ONE).ok_or_else(|| {
        CalculatorError::Calculation("Loan payment is undefined for this rate".to_string())
    })?;

    loan_amount
        .checked_mul(monthly_rate)
        .and_then(|interest| interest.checked_mul(annuity))
        .ok_or_else(|| CalculatorError::Calculation("Loan payment overflowed".to_string()))
}

/// `(1 + rate)^periods` by repeated multiplication, `None` on overflow.
fn compound(rate: Decimal, periods: u32) -> Option<Decimal> {
    let base = Decimal::ONE + rate;
    let mut result = Decimal::ONE;
    for _ in 0..periods {
        result = result.checked_mul(base)?;
    }
    Some(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn zero_rate_is_straight_line() {
        let payment = monthly_payment(dec!(80000), Decimal::ZERO, 360).unwrap();
        assert_eq!(payment, dec!(80000) / dec!(360));
    }

    #[test]
    fn thirty_year_mortgage_at_six_percent() {
        // 150k borrowed at 6% a year over 30 years.
        let payment = monthly_payment(dec!(150000), dec!(0.005), 360).unwrap();
        assert_eq!(payment.round_dp(2), dec!(899.33));
    }

    #[test]
    fn single_payment_repays_principal_plus_one_month_of_interest() {
        let payment = monthly_payment(dec!(1000), dec!(0.01), 1).unwrap();
        assert_eq!(payment.round_dp(6), dec!(1010));
    }

    #[test]
    fn zero_loan_has_zero_payment() {
        assert_eq!(monthly_payment(Decimal::ZERO, dec!(0.005), 360).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn zero_payments_is_rejected() {
        assert!(matches!(
            monthly_payment(dec!(1000), dec!(0.005), 0),
            Err(CalculatorError::Calculation(_))
        ));
    }

    #[test]
    fn runaway_rate_overflows_into_an_error() {
        // 100% a month for 360 months cannot be represented.
        assert!(matches!(
            monthly_payment(dec!(1000), dec!(1), 360),
            Err(CalculatorError::Calculation(_))
        ));
    }

    #[test]
    fn long_term_at_a_high_rate_stays_representable() {
        // (1.125)^480 fits in a Decimal but loan * rate * factor would not.
        let payment = monthly_payment(dec!(1000000), dec!(150) / dec!(1200), 480).unwrap();
        assert_eq!(payment.round_dp(2), dec!(125000));
    }

    #[test]
    fn payment_beyond_decimal_range_is_an_error() {
        assert!(matches!(
            monthly_payment(Decimal::MAX, dec!(2), 12),
            Err(CalculatorError::Calculation(_))
        ));
    }

    #[test]
    fn compound_matches_manual_expansion() {
        assert_eq!(compound(dec!(0.1), 2).unwrap(), dec!(1.21));
        assert_eq!(compound(dec!(0.1), 0).unwrap(), Decimal::ONE);
    }
}
