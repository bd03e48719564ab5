use paydash_core::format::{format_currency, format_number, format_percentage};

// ═══════════════════════════════════════════════════════════════════
//  format_currency
// ═══════════════════════════════════════════════════════════════════

mod currency {
    use super::*;

    #[test]
    fn whole_dollars_with_separators() {
        assert_eq!(format_currency(45_231.0), "$45,231");
        assert_eq!(format_currency(1_000_000.0), "$1,000,000");
    }

    #[test]
    fn rounds_to_whole_dollars() {
        assert_eq!(format_currency(999.4), "$999");
        assert_eq!(format_currency(45_231.7), "$45,232");
    }

    #[test]
    fn zero() {
        assert_eq!(format_currency(0.0), "$0");
    }

    #[test]
    fn small_amounts_have_no_separator() {
        assert_eq!(format_currency(299.99), "$300");
        assert_eq!(format_currency(45.0), "$45");
    }

    #[test]
    fn negative_sign_precedes_dollar() {
        assert_eq!(format_currency(-1_234.0), "-$1,234");
    }
}

// ═══════════════════════════════════════════════════════════════════
//  format_percentage
// ═══════════════════════════════════════════════════════════════════

mod percentage {
    use super::*;

    #[test]
    fn positive_gets_explicit_plus() {
        assert_eq!(format_percentage(5.04, 1), "+5.0%");
        assert_eq!(format_percentage(50.0, 0), "+50%");
    }

    #[test]
    fn zero_counts_as_positive() {
        assert_eq!(format_percentage(0.0, 1), "+0.0%");
    }

    #[test]
    fn negative_keeps_its_minus() {
        assert_eq!(format_percentage(-3.21, 1), "-3.2%");
    }

    #[test]
    fn respects_decimal_count() {
        assert_eq!(format_percentage(12.34, 2), "+12.34%");
    }
}

// ═══════════════════════════════════════════════════════════════════
//  format_number
// ═══════════════════════════════════════════════════════════════════

mod number {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_number(18_420), "18,420");
        assert_eq!(format_number(1_000), "1,000");
        assert_eq!(format_number(1_234_567), "1,234,567");
    }

    #[test]
    fn short_numbers_untouched() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(100), "100");
        assert_eq!(format_number(999), "999");
    }
}
