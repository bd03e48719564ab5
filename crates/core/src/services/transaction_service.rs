use chrono::{DateTime, Duration, Utc};

use crate::models::transaction::{Transaction, TransactionStatus};

/// Serves the transactions page: recent rows, search, and CSV export.
pub struct TransactionService;

impl TransactionService {
    pub fn new() -> Self {
        Self
    }

    /// The most recent transactions, newest first, timestamped relative
    /// to `now`. Fixture data until a live backend exists.
    #[must_use]
    pub fn recent_transactions(&self, now: DateTime<Utc>) -> Vec<Transaction> {
        vec![
            Transaction::new(
                "TXN-2024-00123",
                "TechStore Pro",
                299.99,
                TransactionStatus::Success,
                "Credit Card",
                now - Duration::minutes(5),
            ),
            Transaction::new(
                "TXN-2024-00122",
                "Fashion Hub",
                89.50,
                TransactionStatus::Success,
                "Debit Card",
                now - Duration::minutes(12),
            ),
            Transaction::new(
                "TXN-2024-00121",
                "Electronics World",
                1_299.00,
                TransactionStatus::Pending,
                "Bank Transfer",
                now - Duration::minutes(18),
            ),
            Transaction::new(
                "TXN-2024-00120",
                "Home Essentials",
                45.00,
                TransactionStatus::Failed,
                "Credit Card",
                now - Duration::minutes(23),
            ),
            Transaction::new(
                "TXN-2024-00119",
                "Sports Gear Co",
                156.75,
                TransactionStatus::Success,
                "Digital Wallet",
                now - Duration::minutes(35),
            ),
        ]
    }

    /// Search transactions by matching query against reference and
    /// merchant (case-insensitive).
    #[must_use]
    pub fn search<'a>(
        &self,
        transactions: &'a [Transaction],
        query: &str,
    ) -> Vec<&'a Transaction> {
        let q = query.to_lowercase();
        transactions
            .iter()
            .filter(|t| {
                t.reference.to_lowercase().contains(&q)
                    || t.merchant.to_lowercase().contains(&q)
            })
            .collect()
    }

    /// Export transactions as a CSV string.
    /// Columns: reference, merchant, amount, status, payment_method, timestamp
    #[must_use]
    pub fn export_to_csv(&self, transactions: &[Transaction]) -> String {
        let mut csv = String::from("reference,merchant,amount,status,payment_method,timestamp\n");
        for txn in transactions {
            // Escape CSV: quote fields containing commas or quotes
            let escaped_merchant =
                if txn.merchant.contains(',') || txn.merchant.contains('"') {
                    format!("\"{}\"", txn.merchant.replace('"', "\"\""))
                } else {
                    txn.merchant.clone()
                };
            csv.push_str(&format!(
                "{},{},{},{},{},{}\n",
                txn.reference,
                escaped_merchant,
                txn.amount,
                txn.status,
                txn.payment_method,
                txn.timestamp.to_rfc3339(),
            ));
        }
        csv
    }
}

impl Default for TransactionService {
    fn default() -> Self {
        Self::new()
    }
}
