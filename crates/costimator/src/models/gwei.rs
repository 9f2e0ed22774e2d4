use crate::prelude::*;

/// A per gas fee denominated in gwei, i.e. one billionth (1e-9) of the
/// chain's native currency unit.
///
/// The gas fee endpoint encodes gwei amounts either as a bare JSON number
/// or as a decimal string, so deserialization accepts both.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    PartialOrd,
    Serialize,
    Deserialize,
    derive_more::Deref,
    derive_more::From,
    derive_more::Display,
)]
#[serde(try_from = "GweiRepr")]
pub struct Gwei(f64);

#[derive(Deserialize)]
#[serde(untagged)]
enum GweiRepr {
    Number(f64),
    Text(String),
}

impl TryFrom<GweiRepr> for Gwei {
    type Error = String;

    fn try_from(repr: GweiRepr) -> Result<Self, Self::Error> {
        match repr {
            GweiRepr::Number(number) => Ok(Self(number)),
            GweiRepr::Text(text) => text
                .trim()
                .parse::<f64>()
                .map(Self)
                .map_err(|_| format!("not a decimal gwei amount: `{text}`")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_json_string() {
        let sut: Gwei = serde_json::from_str(r#""5""#).unwrap();
        assert_eq!(*sut, 5.0);
    }

    #[test]
    fn from_json_string_with_decimals() {
        let sut: Gwei = serde_json::from_str(r#""32.25""#).unwrap();
        assert_eq!(*sut, 32.25);
    }

    #[test]
    fn from_json_number() {
        let sut: Gwei = serde_json::from_str("1.5").unwrap();
        assert_eq!(*sut, 1.5);
    }

    #[test]
    fn from_non_numeric_string_fails() {
        let result = serde_json::from_str::<Gwei>(r#""five""#);
        assert!(result.is_err());
    }
}
