use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;

use crate::prelude::*;

/// The aggregated `chain name -> cost result` map, assembled fresh on every
/// request and never persisted.
///
/// Backed by an insertion ordered list of entries so the JSON object keeps
/// the configured chain order. Lookups scan linearly; the chain set is tiny.
#[derive(Debug, Clone, PartialEq, Default, derive_more::Deref)]
pub struct GasCostReport(Vec<(String, CostResult)>);

// ========================================
// Public Implementation
// ========================================
impl GasCostReport {
    pub fn insert(&mut self, chain_name: impl Into<String>, result: impl Into<CostResult>) {
        self.0.push((chain_name.into(), result.into()));
    }

    pub fn get(&self, chain_name: &str) -> Option<&CostResult> {
        self.0
            .iter()
            .find(|(name, _)| name == chain_name)
            .map(|(_, result)| result)
    }

    /// Chain names in report order.
    pub fn chain_names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(name, _)| name.as_str())
    }
}

impl Serialize for GasCostReport {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (chain_name, result) in &self.0 {
            map.serialize_entry(chain_name, result)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for GasCostReport {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct ReportVisitor;

        impl<'de> Visitor<'de> for ReportVisitor {
            type Value = GasCostReport;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("a map of chain name to cost result")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut report = GasCostReport::default();
                while let Some((chain_name, result)) = access.next_entry::<String, CostResult>()? {
                    report.insert(chain_name, result);
                }
                Ok(report)
            }
        }

        deserializer.deserialize_map(ReportVisitor)
    }
}
