use crate::prelude::*;

/// USD cost of spending `gas_used` gas at `fee_per_gas`, with the chain's
/// native currency trading at `price`.
///
/// The fee scales by 1e-9 from gwei to whole currency units. Plain `f64`
/// arithmetic throughout, no rounding.
pub fn cost_usd(fee_per_gas: Gwei, gas_used: Gas, price: Usd) -> Usd {
    let fee_native_currency = *fee_per_gas * *gas_used as f64 / 1e9;
    Usd::from(fee_native_currency * *price)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bnb_chain_scenario() {
        // Medium fee of 5 gwei, BNB at 600 USD.
        let cost = cost_usd(
            Gwei::from(5.0),
            Gas::standard_transaction_estimate(),
            Usd::from(600.0),
        );
        assert_eq!(*cost, 5.0 * 65_000.0 / 1e9 * 600.0);
        assert!((*cost - 0.195).abs() < 1e-12);
    }

    #[test]
    fn linear_in_fee_per_gas() {
        let base = cost_usd(Gwei::from(5.0), Gas::from(65_000), Usd::from(600.0));
        let doubled = cost_usd(Gwei::from(10.0), Gas::from(65_000), Usd::from(600.0));
        assert_eq!(*doubled, 2.0 * *base);
    }

    #[test]
    fn linear_in_gas_used() {
        let base = cost_usd(Gwei::from(5.0), Gas::from(65_000), Usd::from(600.0));
        let doubled = cost_usd(Gwei::from(5.0), Gas::from(130_000), Usd::from(600.0));
        assert_eq!(*doubled, 2.0 * *base);
    }

    #[test]
    fn linear_in_price() {
        let base = cost_usd(Gwei::from(5.0), Gas::from(65_000), Usd::from(600.0));
        let doubled = cost_usd(Gwei::from(5.0), Gas::from(65_000), Usd::from(1200.0));
        assert_eq!(*doubled, 2.0 * *base);
    }

    #[test]
    fn zero_fee_costs_nothing() {
        let cost = cost_usd(
            Gwei::from(0.0),
            Gas::standard_transaction_estimate(),
            Usd::from(600.0),
        );
        assert_eq!(*cost, 0.0);
    }
}
