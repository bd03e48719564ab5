use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Terminal state of a payment transaction.
///
/// Serialized lowercase, the token the frontend's status badges key on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    /// Settled successfully
    Success,
    /// Permanently failed
    Failed,
    /// Still awaiting a terminal state
    Pending,
}

impl std::fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransactionStatus::Success => write!(f, "Success"),
            TransactionStatus::Failed => write!(f, "Failed"),
            TransactionStatus::Pending => write!(f, "Pending"),
        }
    }
}

/// A single row in the transactions table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Unique identifier
    pub id: Uuid,

    /// Human-facing reference shown and searched in the UI
    /// (e.g., "TXN-2024-00123")
    pub reference: String,

    /// Merchant the payment was made to
    pub merchant: String,

    /// Transaction amount
    pub amount: f64,

    /// Terminal (or pending) state
    pub status: TransactionStatus,

    /// Payment method display name
    pub payment_method: String,

    /// When the transaction happened
    pub timestamp: DateTime<Utc>,
}

impl Transaction {
    pub fn new(
        reference: impl Into<String>,
        merchant: impl Into<String>,
        amount: f64,
        status: TransactionStatus,
        payment_method: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            reference: reference.into(),
            merchant: merchant.into(),
            amount,
            status,
            payment_method: payment_method.into(),
            timestamp,
        }
    }
}
