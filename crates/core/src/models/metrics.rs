use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::range::DateRange;

/// One calendar day of synthetic payment metrics.
///
/// The core generates these; the frontend just renders them.
/// A series is ordered oldest-first, one record per day, no gaps,
/// no duplicate dates.
///
/// Serialized field names are camelCase, matching what the dashboard
/// frontend consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyMetricRecord {
    /// Day key, unique within a generated series
    pub date: NaiveDate,

    /// Synthetic daily revenue
    pub revenue: f64,

    /// Synthetic transaction count
    pub transactions: u64,

    /// Share of successful transactions, in [0, 100]
    pub success_rate: f64,

    /// Revenue divided by transaction count for the day
    pub avg_transaction_amount: f64,

    /// Transactions implied failed by `success_rate`
    pub failed_transactions: u64,

    /// Volume of all payment attempts, including declines and pending
    pub gross_payment_volume: f64,

    /// Count of all payment attempts
    pub gross_payment_count: u64,

    /// Volume of the successful-only payment subset
    pub total_payment_volume: f64,

    /// Count of the successful-only payment subset (never above gross)
    pub total_payment_count: u64,

    /// Volume of all withdrawal attempts
    pub gross_withdrawals_volume: f64,

    /// Count of all withdrawal attempts
    pub gross_withdrawals_count: u64,

    /// Volume of the fully-paid withdrawal subset
    pub total_withdrawals_volume: f64,

    /// Count of the fully-paid withdrawal subset (never above gross)
    pub total_withdrawals_count: u64,

    /// Successful attempts over all attempts, in [0, 100]
    pub gross_success_rate: f64,

    /// Successful attempts over (all attempts minus hard declines).
    /// Can exceed 100 when the reduced denominator is small.
    pub net_success_rate: f64,

    /// All payment attempts counted for rate purposes
    pub all_attempts: u64,

    /// Attempts that reached a successful terminal state
    pub successful_attempts: u64,

    /// Attempts permanently rejected; excluded from the net-rate denominator.
    /// Always below `all_attempts`.
    pub hard_declines: u64,
}

/// Sums of the eight payment/withdrawal volume and count fields over a
/// contiguous slice of daily records.
///
/// Every field is `f64`, counts included: a synthesized previous period
/// scales each total by a fractional multiplier, so aggregate counts are
/// not necessarily integral.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodAggregate {
    pub gross_payment_volume: f64,
    pub gross_payment_count: f64,
    pub total_payment_volume: f64,
    pub total_payment_count: f64,
    pub gross_withdrawals_volume: f64,
    pub gross_withdrawals_count: f64,
    pub total_withdrawals_volume: f64,
    pub total_withdrawals_count: f64,
}

impl std::ops::Add for PeriodAggregate {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            gross_payment_volume: self.gross_payment_volume + rhs.gross_payment_volume,
            gross_payment_count: self.gross_payment_count + rhs.gross_payment_count,
            total_payment_volume: self.total_payment_volume + rhs.total_payment_volume,
            total_payment_count: self.total_payment_count + rhs.total_payment_count,
            gross_withdrawals_volume: self.gross_withdrawals_volume + rhs.gross_withdrawals_volume,
            gross_withdrawals_count: self.gross_withdrawals_count + rhs.gross_withdrawals_count,
            total_withdrawals_volume: self.total_withdrawals_volume + rhs.total_withdrawals_volume,
            total_withdrawals_count: self.total_withdrawals_count + rhs.total_withdrawals_count,
        }
    }
}

/// Signed percentage change per metric pair between a current-period
/// aggregate and its synthesized previous period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodComparison {
    pub gross_payment_volume_change: f64,
    pub gross_payment_count_change: f64,
    pub total_payment_volume_change: f64,
    pub total_payment_count_change: f64,
    pub gross_withdrawals_volume_change: f64,
    pub gross_withdrawals_count_change: f64,
    pub total_withdrawals_volume_change: f64,
    pub total_withdrawals_count_change: f64,
}

/// Headline revenue/transaction summary over a slice of daily records.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodSummary {
    /// Sum of daily revenue
    pub total_revenue: f64,

    /// Sum of daily transaction counts
    pub total_transactions: u64,

    /// Mean of daily success rates
    pub avg_success_rate: f64,

    /// Mean of daily average transaction amounts
    pub avg_transaction_amount: f64,
}

/// Change between two period summaries.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryComparison {
    /// Relative revenue change, percent
    pub revenue_change: f64,

    /// Relative transaction-count change, percent
    pub transactions_change: f64,

    /// Success-rate change in percentage points (a difference of averages,
    /// not a relative change)
    pub success_rate_change: f64,

    /// Relative change of the average transaction amount, percent
    pub avg_amount_change: f64,
}

/// Everything the overview page needs for one selected range: the daily
/// series plus current totals, synthesized previous totals, and the
/// per-field changes between them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewSnapshot {
    /// The range this snapshot was built for
    pub range: DateRange,

    /// Daily records, oldest first
    pub series: Vec<DailyMetricRecord>,

    /// Totals over `series`
    pub current_period: PeriodAggregate,

    /// Synthesized comparison totals, stable for this range across re-renders
    pub previous_period: PeriodAggregate,

    /// Percentage changes from previous to current
    pub changes: PeriodComparison,
}
