use chrono::{Duration, NaiveDate};
use log::debug;
use rand::Rng;

use crate::errors::CoreError;
use crate::models::metrics::DailyMetricRecord;
use crate::MAX_SERIES_DAYS;

/// Synthesizes daily payment-metrics series.
///
/// There is no live backend; every record is drawn fresh from uniform
/// ranges chosen so the derived fields stay internally consistent:
/// successful subsets never exceed their gross totals and hard declines
/// never swallow the whole net-rate denominator. Only the shape is
/// deterministic; repeated calls draw new values.
pub struct MetricsService;

impl MetricsService {
    pub fn new() -> Self {
        Self
    }

    /// Generate `days` records ending at `today`, oldest first.
    ///
    /// `days` must be between 1 and `MAX_SERIES_DAYS`. The caller supplies
    /// `today` so tests can pin the clock; the facade passes the wall clock
    /// in its convenience methods.
    pub fn generate_series(
        &self,
        days: u32,
        today: NaiveDate,
    ) -> Result<Vec<DailyMetricRecord>, CoreError> {
        if days == 0 {
            return Err(CoreError::ValidationError(
                "Series length must be at least 1 day".to_string(),
            ));
        }
        if days > MAX_SERIES_DAYS {
            return Err(CoreError::ValidationError(format!(
                "Series length of {days} days exceeds maximum of {MAX_SERIES_DAYS} days"
            )));
        }

        debug!("Generating {days}-day metrics series ending {today}");

        let mut rng = rand::thread_rng();
        let mut series = Vec::with_capacity(days as usize);

        for offset in (0..i64::from(days)).rev() {
            let date = today - Duration::days(offset);
            series.push(Self::generate_day(&mut rng, date));
        }

        Ok(series)
    }

    /// Draw one internally-consistent day of metrics.
    fn generate_day<R: Rng>(rng: &mut R, date: NaiveDate) -> DailyMetricRecord {
        let base_revenue: f64 = rng.gen_range(45_000.0..70_000.0);
        let base_transactions: f64 = rng.gen_range(800.0..1_200.0);
        let success_rate = rng.gen_range(92.0..99.0);
        let failed_transactions =
            (base_transactions * (1.0 - success_rate / 100.0)).floor() as u64;

        // Payments: the successful subset is 85-97% of gross attempts.
        let gross_payment_count: u64 = rng.gen_range(1_200..1_800);
        let total_payment_count =
            (gross_payment_count as f64 * rng.gen_range(0.85..0.97)).floor() as u64;
        let gross_payment_volume =
            (gross_payment_count as f64 * rng.gen_range(150.0..250.0)).floor();
        let total_payment_volume =
            (total_payment_count as f64 * rng.gen_range(150.0..250.0)).floor();

        // Withdrawals: 88-98% end up fully paid.
        let gross_withdrawals_count: u64 = rng.gen_range(300..500);
        let total_withdrawals_count =
            (gross_withdrawals_count as f64 * rng.gen_range(0.88..0.98)).floor() as u64;
        let gross_withdrawals_volume =
            (gross_withdrawals_count as f64 * rng.gen_range(200.0..350.0)).floor();
        let total_withdrawals_volume =
            (total_withdrawals_count as f64 * rng.gen_range(200.0..350.0)).floor();

        // Attempt-level rates. Hard declines stay at 3-5% of attempts, so
        // the net-rate denominator is always positive.
        let all_attempts = gross_payment_count;
        let successful_attempts = total_payment_count;
        let hard_declines = (all_attempts as f64 * rng.gen_range(0.03..0.05)).floor() as u64;
        let gross_success_rate =
            two_decimals(successful_attempts as f64 / all_attempts as f64 * 100.0);
        let net_success_rate = two_decimals(
            successful_attempts as f64 / (all_attempts - hard_declines) as f64 * 100.0,
        );

        DailyMetricRecord {
            date,
            revenue: base_revenue.floor(),
            transactions: base_transactions.floor() as u64,
            success_rate: two_decimals(success_rate),
            avg_transaction_amount: two_decimals(base_revenue / base_transactions),
            failed_transactions,
            gross_payment_volume,
            gross_payment_count,
            total_payment_volume,
            total_payment_count,
            gross_withdrawals_volume,
            gross_withdrawals_count,
            total_withdrawals_volume,
            total_withdrawals_count,
            gross_success_rate,
            net_success_rate,
            all_attempts,
            successful_attempts,
            hard_declines,
        }
    }
}

impl Default for MetricsService {
    fn default() -> Self {
        Self::new()
    }
}

/// Truncate (not round) to two decimal places.
fn two_decimals(value: f64) -> f64 {
    (value * 100.0).floor() / 100.0
}
