use chrono::{NaiveDate, TimeZone, Utc};
use paydash_core::models::merchant::{MerchantVolumeShare, PaymentMethod, TopMerchant};
use paydash_core::models::metrics::{DailyMetricRecord, PeriodAggregate};
use paydash_core::models::range::DateRange;
use paydash_core::models::settings::{Settings, Theme};
use paydash_core::models::transaction::{Transaction, TransactionStatus};
use std::str::FromStr;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn sample_record(date: NaiveDate) -> DailyMetricRecord {
    DailyMetricRecord {
        date,
        revenue: 50_000.0,
        transactions: 1_000,
        success_rate: 95.5,
        avg_transaction_amount: 50.0,
        failed_transactions: 45,
        gross_payment_volume: 300_000.0,
        gross_payment_count: 1_500,
        total_payment_volume: 270_000.0,
        total_payment_count: 1_350,
        gross_withdrawals_volume: 100_000.0,
        gross_withdrawals_count: 400,
        total_withdrawals_volume: 95_000.0,
        total_withdrawals_count: 380,
        gross_success_rate: 90.0,
        net_success_rate: 93.75,
        all_attempts: 1_500,
        successful_attempts: 1_350,
        hard_declines: 60,
    }
}

// ═══════════════════════════════════════════════════════════════════
//  DateRange
// ═══════════════════════════════════════════════════════════════════

mod date_range {
    use super::*;

    #[test]
    fn days_per_variant() {
        assert_eq!(DateRange::Last7Days.days(), 7);
        assert_eq!(DateRange::Last30Days.days(), 30);
        assert_eq!(DateRange::Last90Days.days(), 90);
    }

    #[test]
    fn seed_matches_window_length() {
        assert_eq!(DateRange::Last7Days.seed(), 7);
        assert_eq!(DateRange::Last30Days.seed(), 30);
        assert_eq!(DateRange::Last90Days.seed(), 90);
    }

    #[test]
    fn display_tokens() {
        assert_eq!(DateRange::Last7Days.to_string(), "7d");
        assert_eq!(DateRange::Last30Days.to_string(), "30d");
        assert_eq!(DateRange::Last90Days.to_string(), "90d");
    }

    #[test]
    fn default_is_30d() {
        assert_eq!(DateRange::default(), DateRange::Last30Days);
    }

    #[test]
    fn parse_known_tokens() {
        assert_eq!(DateRange::from_str("7d").unwrap(), DateRange::Last7Days);
        assert_eq!(DateRange::from_str("30d").unwrap(), DateRange::Last30Days);
        assert_eq!(DateRange::from_str("90d").unwrap(), DateRange::Last90Days);
    }

    #[test]
    fn parse_rejects_unknown_token() {
        assert!(DateRange::from_str("14d").is_err());
        assert!(DateRange::from_str("").is_err());
        assert!(DateRange::from_str("7D").is_err());
    }

    #[test]
    fn display_parse_roundtrip() {
        for range in [
            DateRange::Last7Days,
            DateRange::Last30Days,
            DateRange::Last90Days,
        ] {
            assert_eq!(DateRange::from_str(&range.to_string()).unwrap(), range);
        }
    }

    #[test]
    fn serde_uses_ui_tokens() {
        assert_eq!(
            serde_json::to_string(&DateRange::Last7Days).unwrap(),
            "\"7d\""
        );
        let back: DateRange = serde_json::from_str("\"90d\"").unwrap();
        assert_eq!(back, DateRange::Last90Days);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Theme & Settings
// ═══════════════════════════════════════════════════════════════════

mod theme {
    use super::*;

    #[test]
    fn display_lowercase() {
        assert_eq!(Theme::Light.to_string(), "light");
        assert_eq!(Theme::Dark.to_string(), "dark");
    }

    #[test]
    fn parse_persisted_tokens() {
        assert_eq!(Theme::from_str("light").unwrap(), Theme::Light);
        assert_eq!(Theme::from_str("dark").unwrap(), Theme::Dark);
    }

    #[test]
    fn parse_rejects_unknown_token() {
        assert!(Theme::from_str("solarized").is_err());
        assert!(Theme::from_str("Light").is_err());
    }

    #[test]
    fn toggled_flips_both_ways() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
    }

    #[test]
    fn serde_lowercase() {
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
        let back: Theme = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(back, Theme::Light);
    }

    #[test]
    fn default_settings_are_light() {
        assert_eq!(Settings::default().theme, Theme::Light);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  TransactionStatus & Transaction
// ═══════════════════════════════════════════════════════════════════

mod transaction {
    use super::*;

    #[test]
    fn status_display_capitalized() {
        assert_eq!(TransactionStatus::Success.to_string(), "Success");
        assert_eq!(TransactionStatus::Failed.to_string(), "Failed");
        assert_eq!(TransactionStatus::Pending.to_string(), "Pending");
    }

    #[test]
    fn status_serde_lowercase() {
        assert_eq!(
            serde_json::to_string(&TransactionStatus::Pending).unwrap(),
            "\"pending\""
        );
        let back: TransactionStatus = serde_json::from_str("\"failed\"").unwrap();
        assert_eq!(back, TransactionStatus::Failed);
    }

    #[test]
    fn new_sets_all_fields() {
        let ts = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let txn = Transaction::new(
            "TXN-2024-00001",
            "TechStore Pro",
            299.99,
            TransactionStatus::Success,
            "Credit Card",
            ts,
        );
        assert_eq!(txn.reference, "TXN-2024-00001");
        assert_eq!(txn.merchant, "TechStore Pro");
        assert_eq!(txn.amount, 299.99);
        assert_eq!(txn.status, TransactionStatus::Success);
        assert_eq!(txn.payment_method, "Credit Card");
        assert_eq!(txn.timestamp, ts);
    }

    #[test]
    fn new_assigns_unique_ids() {
        let ts = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let a = Transaction::new("A", "M", 1.0, TransactionStatus::Success, "Card", ts);
        let b = Transaction::new("B", "M", 1.0, TransactionStatus::Success, "Card", ts);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn serde_camel_case_keys() {
        let ts = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let txn = Transaction::new(
            "TXN-2024-00001",
            "TechStore Pro",
            299.99,
            TransactionStatus::Success,
            "Credit Card",
            ts,
        );
        let json = serde_json::to_string(&txn).unwrap();
        assert!(json.contains("\"paymentMethod\":\"Credit Card\""));
        assert!(json.contains("\"status\":\"success\""));
    }
}

// ═══════════════════════════════════════════════════════════════════
//  DailyMetricRecord
// ═══════════════════════════════════════════════════════════════════

mod daily_metric_record {
    use super::*;

    #[test]
    fn serde_camel_case_keys() {
        let json = serde_json::to_string(&sample_record(d(2024, 5, 1))).unwrap();
        assert!(json.contains("\"date\":\"2024-05-01\""));
        assert!(json.contains("\"grossPaymentVolume\":300000.0"));
        assert!(json.contains("\"successRate\":95.5"));
        assert!(json.contains("\"avgTransactionAmount\":50.0"));
        assert!(json.contains("\"hardDeclines\":60"));
    }

    #[test]
    fn serde_roundtrip() {
        let record = sample_record(d(2024, 5, 1));
        let json = serde_json::to_string(&record).unwrap();
        let back: DailyMetricRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  PeriodAggregate
// ═══════════════════════════════════════════════════════════════════

mod period_aggregate {
    use super::*;

    #[test]
    fn default_is_all_zero() {
        let zero = PeriodAggregate::default();
        assert_eq!(zero.gross_payment_volume, 0.0);
        assert_eq!(zero.gross_payment_count, 0.0);
        assert_eq!(zero.total_payment_volume, 0.0);
        assert_eq!(zero.total_payment_count, 0.0);
        assert_eq!(zero.gross_withdrawals_volume, 0.0);
        assert_eq!(zero.gross_withdrawals_count, 0.0);
        assert_eq!(zero.total_withdrawals_volume, 0.0);
        assert_eq!(zero.total_withdrawals_count, 0.0);
    }

    #[test]
    fn add_is_field_wise() {
        let a = PeriodAggregate {
            gross_payment_volume: 100.0,
            gross_payment_count: 10.0,
            total_payment_volume: 90.0,
            total_payment_count: 9.0,
            gross_withdrawals_volume: 50.0,
            gross_withdrawals_count: 5.0,
            total_withdrawals_volume: 45.0,
            total_withdrawals_count: 4.0,
        };
        let b = PeriodAggregate {
            gross_payment_volume: 1.0,
            gross_payment_count: 2.0,
            total_payment_volume: 3.0,
            total_payment_count: 4.0,
            gross_withdrawals_volume: 5.0,
            gross_withdrawals_count: 6.0,
            total_withdrawals_volume: 7.0,
            total_withdrawals_count: 8.0,
        };
        let sum = a + b;
        assert_eq!(sum.gross_payment_volume, 101.0);
        assert_eq!(sum.gross_payment_count, 12.0);
        assert_eq!(sum.total_payment_volume, 93.0);
        assert_eq!(sum.total_payment_count, 13.0);
        assert_eq!(sum.gross_withdrawals_volume, 55.0);
        assert_eq!(sum.gross_withdrawals_count, 11.0);
        assert_eq!(sum.total_withdrawals_volume, 52.0);
        assert_eq!(sum.total_withdrawals_count, 12.0);
    }

    #[test]
    fn adding_zero_is_identity() {
        let a = PeriodAggregate {
            gross_payment_volume: 100.0,
            gross_payment_count: 10.0,
            total_payment_volume: 90.0,
            total_payment_count: 9.0,
            gross_withdrawals_volume: 50.0,
            gross_withdrawals_count: 5.0,
            total_withdrawals_volume: 45.0,
            total_withdrawals_count: 4.0,
        };
        assert_eq!(a + PeriodAggregate::default(), a);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Merchant models
// ═══════════════════════════════════════════════════════════════════

mod merchant {
    use super::*;

    #[test]
    fn volume_share_constructor() {
        let share = MerchantVolumeShare::new("TechStore Pro", 5_234_500.0, 28.5);
        assert_eq!(share.name, "TechStore Pro");
        assert_eq!(share.volume, 5_234_500.0);
        assert_eq!(share.percentage, 28.5);
    }

    #[test]
    fn top_merchant_constructor() {
        let merchant = TopMerchant::new("Fashion Hub", 198_300.0, 5_234);
        assert_eq!(merchant.name, "Fashion Hub");
        assert_eq!(merchant.revenue, 198_300.0);
        assert_eq!(merchant.transactions, 5_234);
    }

    #[test]
    fn payment_method_constructor() {
        let method = PaymentMethod::new("Credit Card", 18_420, 52.3);
        assert_eq!(method.method, "Credit Card");
        assert_eq!(method.count, 18_420);
        assert_eq!(method.percentage, 52.3);
    }
}
