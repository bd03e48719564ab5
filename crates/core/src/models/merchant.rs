use serde::{Deserialize, Serialize};

/// A merchant's share of total processed volume (one pie-chart slice).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MerchantVolumeShare {
    /// Merchant display name ("Others" groups the long tail)
    pub name: String,

    /// Processed volume for the period
    pub volume: f64,

    /// Share of total volume, in [0, 100]
    pub percentage: f64,
}

impl MerchantVolumeShare {
    pub fn new(name: impl Into<String>, volume: f64, percentage: f64) -> Self {
        Self {
            name: name.into(),
            volume,
            percentage,
        }
    }
}

/// A merchant ranked by revenue in the top-merchants table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopMerchant {
    pub name: String,

    /// Revenue for the period
    pub revenue: f64,

    /// Transaction count for the period
    pub transactions: u64,
}

impl TopMerchant {
    pub fn new(name: impl Into<String>, revenue: f64, transactions: u64) -> Self {
        Self {
            name: name.into(),
            revenue,
            transactions,
        }
    }
}

/// Distribution of transactions across a payment method.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethod {
    /// Method display name (e.g., "Credit Card")
    pub method: String,

    /// Transaction count using this method
    pub count: u64,

    /// Share of all transactions, in [0, 100]
    pub percentage: f64,
}

impl PaymentMethod {
    pub fn new(method: impl Into<String>, count: u64, percentage: f64) -> Self {
        Self {
            method: method.into(),
            count,
            percentage,
        }
    }
}
