use crate::models::merchant::{MerchantVolumeShare, PaymentMethod, TopMerchant};

/// Serves the merchant and payment-method breakdowns shown on the
/// overview page. Fixture data until a live backend exists.
pub struct MerchantService;

impl MerchantService {
    pub fn new() -> Self {
        Self
    }

    /// Merchant share of total processed volume, largest first, with the
    /// long tail grouped under "Others".
    #[must_use]
    pub fn volume_distribution(&self) -> Vec<MerchantVolumeShare> {
        vec![
            MerchantVolumeShare::new("TechStore Pro", 5_234_500.0, 28.5),
            MerchantVolumeShare::new("Fashion Hub", 4_198_300.0, 22.8),
            MerchantVolumeShare::new("Electronics World", 3_187_600.0, 17.3),
            MerchantVolumeShare::new("Home Essentials", 2_756_700.0, 15.0),
            MerchantVolumeShare::new("Sports Gear Co", 2_142_300.0, 11.6),
            MerchantVolumeShare::new("Others", 898_600.0, 4.8),
        ]
    }

    /// Top merchants ranked by revenue.
    #[must_use]
    pub fn top_merchants(&self) -> Vec<TopMerchant> {
        vec![
            TopMerchant::new("TechStore Pro", 234_500.0, 3_421),
            TopMerchant::new("Fashion Hub", 198_300.0, 5_234),
            TopMerchant::new("Electronics World", 187_600.0, 2_987),
            TopMerchant::new("Home Essentials", 156_700.0, 4_123),
            TopMerchant::new("Sports Gear Co", 142_300.0, 3_456),
        ]
    }

    /// Transaction distribution across payment methods, largest first.
    #[must_use]
    pub fn payment_methods(&self) -> Vec<PaymentMethod> {
        vec![
            PaymentMethod::new("Credit Card", 18_420, 52.3),
            PaymentMethod::new("Debit Card", 10_234, 29.1),
            PaymentMethod::new("Bank Transfer", 4_521, 12.8),
            PaymentMethod::new("Digital Wallet", 2_045, 5.8),
        ]
    }

    /// Merchants with activity in the current period.
    #[must_use]
    pub fn total_active_merchants(&self) -> u32 {
        247
    }
}

impl Default for MerchantService {
    fn default() -> Self {
        Self::new()
    }
}
