use serde::Deserialize;
use std::collections::BTreeMap;

use wrapped_stats::ContributionDay;

/// Payload returned by the contributions provider for `/{username}?y={year}`.
#[derive(Debug, Deserialize, Default)]
pub struct ProviderResponse {
    #[serde(default)]
    pub contributions: Vec<ContributionDay>,
    /// Yearly totals keyed by year, plus whatever other buckets the provider adds
    #[serde(default)]
    pub total: BTreeMap<String, serde_json::Value>,
}

impl ProviderResponse {
    /// Total for `year`, 0 when the provider has no non-negative number for it.
    pub fn total_for(&self, year: i32) -> u64 {
        self.total
            .get(&year.to_string())
            .and_then(|value| {
                value.as_u64().or_else(|| {
                    value
                        .as_f64()
                        .filter(|n| n.is_finite() && *n >= 0.0)
                        .map(|n| n as u64)
                })
            })
            .unwrap_or(0)
    }
}
