//! Investment recommendation value object

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// A single investment recommendation produced by a guru agent.
///
/// Immutable once constructed; grouped under the producing guru's output and
/// serialized into the analysis envelope handed back to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub company_name: String,
    pub ticker: String,
    pub sector: String,
    pub investment_thesis: String,
    pub competitive_advantage: String,
    pub financial_analysis: String,
    pub risk_factors: String,
    #[serde(default)]
    pub target_price: Option<String>,
    #[serde(default = "default_time_horizon")]
    pub time_horizon: String,
}

fn default_time_horizon() -> String {
    "3-5년".to_string()
}

impl Recommendation {
    /// Convert to an ordered key-value mapping, preserving field order.
    ///
    /// A missing `target_price` maps to JSON null so the shape is stable.
    pub fn to_map(&self) -> IndexMap<String, Value> {
        let mut map = IndexMap::new();
        map.insert("company_name".to_string(), json!(self.company_name));
        map.insert("ticker".to_string(), json!(self.ticker));
        map.insert("sector".to_string(), json!(self.sector));
        map.insert(
            "investment_thesis".to_string(),
            json!(self.investment_thesis),
        );
        map.insert(
            "competitive_advantage".to_string(),
            json!(self.competitive_advantage),
        );
        map.insert(
            "financial_analysis".to_string(),
            json!(self.financial_analysis),
        );
        map.insert("risk_factors".to_string(), json!(self.risk_factors));
        map.insert("target_price".to_string(), json!(self.target_price));
        map.insert("time_horizon".to_string(), json!(self.time_horizon));
        map
    }
}
