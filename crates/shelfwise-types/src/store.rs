//! Store location registry types.

use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

/// Format of a physical store location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreType {
    Flagship,
    Standard,
    Outlet,
    Boutique,
}

impl fmt::Display for StoreType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreType::Flagship => write!(f, "flagship"),
            StoreType::Standard => write!(f, "standard"),
            StoreType::Outlet => write!(f, "outlet"),
            StoreType::Boutique => write!(f, "boutique"),
        }
    }
}

impl FromStr for StoreType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "flagship" => Ok(StoreType::Flagship),
            "standard" => Ok(StoreType::Standard),
            "outlet" => Ok(StoreType::Outlet),
            "boutique" => Ok(StoreType::Boutique),
            other => Err(format!("invalid store type: '{other}'")),
        }
    }
}

/// A registered store location with its headline figures.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreLocation {
    pub id: String,
    pub name: String,
    pub location: String,
    pub manager: String,
    pub store_type: StoreType,
    /// Monthly revenue in whole pounds.
    pub revenue: u64,
    /// Monthly customer count.
    pub customers: u64,
    /// Performance score, 0-100.
    pub performance: u8,
    pub active: bool,
}

/// Fields required to register a store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewStore {
    pub name: String,
    pub location: String,
    pub manager: String,
    pub store_type: Option<StoreType>,
}

/// Aggregate KPIs over a set of stores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreKpis {
    pub total_revenue: u64,
    pub total_customers: u64,
    pub average_performance: f64,
    pub store_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_type_roundtrip() {
        for store_type in [
            StoreType::Flagship,
            StoreType::Standard,
            StoreType::Outlet,
            StoreType::Boutique,
        ] {
            let s = store_type.to_string();
            let parsed: StoreType = s.parse().unwrap();
            assert_eq!(store_type, parsed);
        }
    }

    #[test]
    fn test_store_type_serde() {
        let json = serde_json::to_string(&StoreType::Boutique).unwrap();
        assert_eq!(json, "\"boutique\"");
        let parsed: StoreType = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, StoreType::Boutique);
    }
}
