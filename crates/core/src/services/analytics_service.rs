use log::debug;

use crate::models::metrics::{
    DailyMetricRecord, PeriodAggregate, PeriodComparison, PeriodSummary, SummaryComparison,
};

/// Lower bound of the previous-period multiplier range.
const MULTIPLIER_BASE: f64 = 0.92;

/// Width of the previous-period multiplier range.
const MULTIPLIER_SPAN: f64 = 0.15;

/// Derives period totals and comparisons from generated metric series.
///
/// There is no historical data behind the "previous period": it is
/// synthesized by scaling the current totals with multipliers keyed on
/// `(seed, field index)`. Keying on the selected range keeps the
/// comparison numbers identical across re-renders of that range.
pub struct AnalyticsService;

impl AnalyticsService {
    pub fn new() -> Self {
        Self
    }

    /// Sum the eight payment/withdrawal totals over a slice of records.
    /// An empty slice yields the all-zero aggregate.
    #[must_use]
    pub fn period_totals(&self, records: &[DailyMetricRecord]) -> PeriodAggregate {
        let mut totals = PeriodAggregate::default();
        for day in records {
            totals.gross_payment_volume += day.gross_payment_volume;
            totals.gross_payment_count += day.gross_payment_count as f64;
            totals.total_payment_volume += day.total_payment_volume;
            totals.total_payment_count += day.total_payment_count as f64;
            totals.gross_withdrawals_volume += day.gross_withdrawals_volume;
            totals.gross_withdrawals_count += day.gross_withdrawals_count as f64;
            totals.total_withdrawals_volume += day.total_withdrawals_volume;
            totals.total_withdrawals_count += day.total_withdrawals_count as f64;
        }
        totals
    }

    /// Synthesize the previous period's totals from the current ones.
    ///
    /// Each field is scaled by a stable multiplier in [0.92, 1.07) derived
    /// from `seed` plus the field's position, so the same seed always
    /// yields the same comparison while different windows differ visibly.
    #[must_use]
    pub fn previous_period(&self, current: &PeriodAggregate, seed: u64) -> PeriodAggregate {
        debug!("Synthesizing previous-period totals with seed {seed}");
        PeriodAggregate {
            gross_payment_volume: current.gross_payment_volume * stability_multiplier(seed, 1),
            gross_payment_count: current.gross_payment_count * stability_multiplier(seed, 2),
            total_payment_volume: current.total_payment_volume * stability_multiplier(seed, 3),
            total_payment_count: current.total_payment_count * stability_multiplier(seed, 4),
            gross_withdrawals_volume: current.gross_withdrawals_volume
                * stability_multiplier(seed, 5),
            gross_withdrawals_count: current.gross_withdrawals_count
                * stability_multiplier(seed, 6),
            total_withdrawals_volume: current.total_withdrawals_volume
                * stability_multiplier(seed, 7),
            total_withdrawals_count: current.total_withdrawals_count
                * stability_multiplier(seed, 8),
        }
    }

    /// Signed percentage change from each previous-period field to its
    /// current counterpart.
    #[must_use]
    pub fn compare_periods(
        &self,
        current: &PeriodAggregate,
        previous: &PeriodAggregate,
    ) -> PeriodComparison {
        PeriodComparison {
            gross_payment_volume_change: percentage_change(
                current.gross_payment_volume,
                previous.gross_payment_volume,
            ),
            gross_payment_count_change: percentage_change(
                current.gross_payment_count,
                previous.gross_payment_count,
            ),
            total_payment_volume_change: percentage_change(
                current.total_payment_volume,
                previous.total_payment_volume,
            ),
            total_payment_count_change: percentage_change(
                current.total_payment_count,
                previous.total_payment_count,
            ),
            gross_withdrawals_volume_change: percentage_change(
                current.gross_withdrawals_volume,
                previous.gross_withdrawals_volume,
            ),
            gross_withdrawals_count_change: percentage_change(
                current.gross_withdrawals_count,
                previous.gross_withdrawals_count,
            ),
            total_withdrawals_volume_change: percentage_change(
                current.total_withdrawals_volume,
                previous.total_withdrawals_volume,
            ),
            total_withdrawals_count_change: percentage_change(
                current.total_withdrawals_count,
                previous.total_withdrawals_count,
            ),
        }
    }

    /// Headline summary over a slice of records.
    /// An empty slice yields the all-zero summary.
    #[must_use]
    pub fn summarize(&self, records: &[DailyMetricRecord]) -> PeriodSummary {
        if records.is_empty() {
            return PeriodSummary::default();
        }
        let len = records.len() as f64;
        PeriodSummary {
            total_revenue: records.iter().map(|d| d.revenue).sum(),
            total_transactions: records.iter().map(|d| d.transactions).sum(),
            avg_success_rate: records.iter().map(|d| d.success_rate).sum::<f64>() / len,
            avg_transaction_amount: records
                .iter()
                .map(|d| d.avg_transaction_amount)
                .sum::<f64>()
                / len,
        }
    }

    /// Compare two summaries. Success rate is reported as a
    /// percentage-point difference; the other fields as relative changes.
    #[must_use]
    pub fn compare_summaries(
        &self,
        current: &PeriodSummary,
        previous: &PeriodSummary,
    ) -> SummaryComparison {
        SummaryComparison {
            revenue_change: percentage_change(current.total_revenue, previous.total_revenue),
            transactions_change: percentage_change(
                current.total_transactions as f64,
                previous.total_transactions as f64,
            ),
            success_rate_change: current.avg_success_rate - previous.avg_success_rate,
            avg_amount_change: percentage_change(
                current.avg_transaction_amount,
                previous.avg_transaction_amount,
            ),
        }
    }
}

impl Default for AnalyticsService {
    fn default() -> Self {
        Self::new()
    }
}

/// Signed percentage change from `previous` to `current`.
///
/// A zero previous value yields 0, never NaN or infinity. No rounding
/// happens here; display formatting rounds separately.
#[must_use]
pub fn percentage_change(current: f64, previous: f64) -> f64 {
    if previous == 0.0 {
        return 0.0;
    }
    (current - previous) / previous * 100.0
}

/// Stable multiplier in [0.92, 1.07) for a `(seed, field index)` pair.
#[must_use]
pub fn stability_multiplier(seed: u64, index: u64) -> f64 {
    MULTIPLIER_BASE + stable_unit(seed.wrapping_add(index)) * MULTIPLIER_SPAN
}

/// Map an integer to a uniform f64 in [0, 1) with the splitmix64
/// finalizer. Same input, same output, on every platform.
fn stable_unit(x: u64) -> f64 {
    let mut z = x.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^= z >> 31;
    (z >> 11) as f64 / (1u64 << 53) as f64
}
