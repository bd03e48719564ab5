pub mod errors;
pub mod format;
pub mod models;
pub mod services;

use chrono::{DateTime, NaiveDate, Utc};

use errors::CoreError;
use models::{
    merchant::{MerchantVolumeShare, PaymentMethod, TopMerchant},
    metrics::{
        DailyMetricRecord, OverviewSnapshot, PeriodAggregate, PeriodComparison, PeriodSummary,
        SummaryComparison,
    },
    range::DateRange,
    settings::{Settings, Theme},
    transaction::Transaction,
};
use services::{
    analytics_service::AnalyticsService, merchant_service::MerchantService,
    metrics_service::MetricsService, transaction_service::TransactionService,
};

/// Maximum series length in days (one year).
pub const MAX_SERIES_DAYS: u32 = 365;

/// Main entry point for the PayDash core library.
/// Holds the UI preferences and all services the dashboard pages call.
///
/// Every series is synthesized on demand when a page asks for it; nothing
/// is pre-computed or cached at module scope.
#[must_use]
pub struct PayDash {
    metrics_service: MetricsService,
    analytics_service: AnalyticsService,
    merchant_service: MerchantService,
    transaction_service: TransactionService,
    settings: Settings,
}

impl PayDash {
    /// Create a dashboard core with default settings (light theme).
    pub fn new() -> Self {
        Self {
            metrics_service: MetricsService::new(),
            analytics_service: AnalyticsService::new(),
            merchant_service: MerchantService::new(),
            transaction_service: TransactionService::new(),
            settings: Settings::default(),
        }
    }

    // ── Metric Series ───────────────────────────────────────────────

    /// Synthesize the daily series for a selected range, ending today.
    pub fn daily_metrics(&self, range: DateRange) -> Result<Vec<DailyMetricRecord>, CoreError> {
        self.daily_metrics_as_of(range, Utc::now().date_naive())
    }

    /// Synthesize the daily series for a selected range, ending at `today`.
    pub fn daily_metrics_as_of(
        &self,
        range: DateRange,
        today: NaiveDate,
    ) -> Result<Vec<DailyMetricRecord>, CoreError> {
        self.metrics_service.generate_series(range.days(), today)
    }

    /// Synthesize a series of arbitrary length, ending at `today`.
    /// Fails for `days == 0` or `days > MAX_SERIES_DAYS`.
    pub fn daily_metrics_for_days(
        &self,
        days: u32,
        today: NaiveDate,
    ) -> Result<Vec<DailyMetricRecord>, CoreError> {
        self.metrics_service.generate_series(days, today)
    }

    // ── Overview ────────────────────────────────────────────────────

    /// Build everything the overview page needs for one range: the daily
    /// series, current-period totals, synthesized previous-period totals,
    /// and the per-field percentage changes.
    pub fn overview(&self, range: DateRange) -> Result<OverviewSnapshot, CoreError> {
        self.overview_as_of(range, Utc::now().date_naive())
    }

    /// Like `overview`, with an explicit generation date.
    pub fn overview_as_of(
        &self,
        range: DateRange,
        today: NaiveDate,
    ) -> Result<OverviewSnapshot, CoreError> {
        let series = self.metrics_service.generate_series(range.days(), today)?;
        let current_period = self.analytics_service.period_totals(&series);
        let previous_period = self
            .analytics_service
            .previous_period(&current_period, range.seed());
        let changes = self
            .analytics_service
            .compare_periods(&current_period, &previous_period);

        Ok(OverviewSnapshot {
            range,
            series,
            current_period,
            previous_period,
            changes,
        })
    }

    // ── Aggregation ─────────────────────────────────────────────────

    /// Totals over a slice of daily records.
    #[must_use]
    pub fn period_totals(&self, records: &[DailyMetricRecord]) -> PeriodAggregate {
        self.analytics_service.period_totals(records)
    }

    /// Synthesized previous-period totals for a range's current totals.
    #[must_use]
    pub fn previous_period_totals(
        &self,
        current: &PeriodAggregate,
        range: DateRange,
    ) -> PeriodAggregate {
        self.analytics_service.previous_period(current, range.seed())
    }

    /// Per-field percentage changes between two aggregates.
    #[must_use]
    pub fn period_comparison(
        &self,
        current: &PeriodAggregate,
        previous: &PeriodAggregate,
    ) -> PeriodComparison {
        self.analytics_service.compare_periods(current, previous)
    }

    /// Headline revenue/transaction summary over a slice of records.
    #[must_use]
    pub fn period_summary(&self, records: &[DailyMetricRecord]) -> PeriodSummary {
        self.analytics_service.summarize(records)
    }

    /// Change between two headline summaries.
    #[must_use]
    pub fn summary_comparison(
        &self,
        current: &PeriodSummary,
        previous: &PeriodSummary,
    ) -> SummaryComparison {
        self.analytics_service.compare_summaries(current, previous)
    }

    // ── Merchants & Payment Methods ─────────────────────────────────

    /// Merchant share of total processed volume for the pie chart.
    #[must_use]
    pub fn merchant_volume_distribution(&self) -> Vec<MerchantVolumeShare> {
        self.merchant_service.volume_distribution()
    }

    /// Top merchants ranked by revenue.
    #[must_use]
    pub fn top_merchants(&self) -> Vec<TopMerchant> {
        self.merchant_service.top_merchants()
    }

    /// Transaction distribution across payment methods.
    #[must_use]
    pub fn payment_methods(&self) -> Vec<PaymentMethod> {
        self.merchant_service.payment_methods()
    }

    /// Merchants with activity in the current period.
    #[must_use]
    pub fn total_active_merchants(&self) -> u32 {
        self.merchant_service.total_active_merchants()
    }

    // ── Transactions ────────────────────────────────────────────────

    /// The most recent transactions, newest first, relative to now.
    #[must_use]
    pub fn recent_transactions(&self) -> Vec<Transaction> {
        self.transaction_service.recent_transactions(Utc::now())
    }

    /// Like `recent_transactions`, with an explicit clock.
    #[must_use]
    pub fn recent_transactions_as_of(&self, now: DateTime<Utc>) -> Vec<Transaction> {
        self.transaction_service.recent_transactions(now)
    }

    /// Search transactions by reference or merchant (case-insensitive).
    #[must_use]
    pub fn search_transactions<'a>(
        &self,
        transactions: &'a [Transaction],
        query: &str,
    ) -> Vec<&'a Transaction> {
        self.transaction_service.search(transactions, query)
    }

    /// Export transactions as a CSV string for download.
    #[must_use]
    pub fn export_transactions_to_csv(&self, transactions: &[Transaction]) -> String {
        self.transaction_service.export_to_csv(transactions)
    }

    // ── Export ──────────────────────────────────────────────────────

    /// Export a metrics series as a JSON string for download or debugging.
    pub fn export_metrics_to_json(
        &self,
        records: &[DailyMetricRecord],
    ) -> Result<String, CoreError> {
        serde_json::to_string_pretty(records).map_err(|e| {
            CoreError::Serialization(format!("Failed to serialize metrics to JSON: {e}"))
        })
    }

    // ── Settings ────────────────────────────────────────────────────

    /// The currently selected theme.
    #[must_use]
    pub fn theme(&self) -> Theme {
        self.settings.theme
    }

    /// Select a theme.
    pub fn set_theme(&mut self, theme: Theme) {
        self.settings.theme = theme;
    }

    /// Flip between light and dark. Returns the new theme so the caller
    /// can persist its token.
    pub fn toggle_theme(&mut self) -> Theme {
        self.settings.theme = self.settings.theme.toggled();
        self.settings.theme
    }

    /// Current settings.
    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}

impl Default for PayDash {
    fn default() -> Self {
        Self::new()
    }
}
