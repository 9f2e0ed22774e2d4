use derive_more::IsVariant;

use crate::prelude::*;

/// The report entry of a single chain: a computed cost, or the fixed
/// annotation the entry degrades to when an upstream call failed.
#[derive(
    Debug, Clone, Copy, PartialEq, IsVariant, Serialize, Deserialize, derive_more::From,
)]
#[serde(untagged)]
pub enum CostResult {
    Medium(MediumGasCost),
    Unavailable(UpstreamFailure),
}

/// Cost entry of a chain whose fee and price lookups both succeeded.
///
/// The key quotes 21000 gas but the amount is computed with
/// [`Gas::standard_transaction_estimate`] (65000). The original service
/// shipped this mismatch and clients key on the exact string, so the label
/// stays as is.
#[derive(
    Debug, Clone, Copy, PartialEq, Serialize, Deserialize, CopyGetters, derive_more::From,
)]
pub struct MediumGasCost {
    #[serde(rename = "Total medium gas cost in USD (for 21000 gas used)")]
    #[getset(get_copy = "pub")]
    total_usd: Usd,
}

/// Which upstream lookup failed for a degraded entry. Serialized as the
/// fixed human readable strings the endpoint has always returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IsVariant, Serialize, Deserialize)]
pub enum UpstreamFailure {
    #[serde(rename = "Could not fetch suggested gas fees.")]
    SuggestedGasFees,

    #[serde(rename = "Could not fetch the current price in USD.")]
    CurrentPriceUsd,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn medium_serializes_with_verbatim_label() {
        let sut = CostResult::from(MediumGasCost::from(Usd::from(0.195)));
        assert_eq!(
            serde_json::to_string(&sut).unwrap(),
            r#"{"Total medium gas cost in USD (for 21000 gas used)":0.195}"#
        );
    }

    #[test]
    fn gas_fee_failure_serializes_as_fixed_string() {
        let sut = CostResult::from(UpstreamFailure::SuggestedGasFees);
        assert_eq!(
            serde_json::to_string(&sut).unwrap(),
            r#""Could not fetch suggested gas fees.""#
        );
    }

    #[test]
    fn price_failure_serializes_as_fixed_string() {
        let sut = CostResult::from(UpstreamFailure::CurrentPriceUsd);
        assert_eq!(
            serde_json::to_string(&sut).unwrap(),
            r#""Could not fetch the current price in USD.""#
        );
    }

    #[test]
    fn deserialize_picks_the_right_variant() {
        let medium: CostResult = serde_json::from_str(
            r#"{"Total medium gas cost in USD (for 21000 gas used)":0.039}"#,
        )
        .unwrap();
        assert!(medium.is_medium());

        let failure: CostResult =
            serde_json::from_str(r#""Could not fetch the current price in USD.""#).unwrap();
        assert_eq!(failure, CostResult::from(UpstreamFailure::CurrentPriceUsd));
    }
}
