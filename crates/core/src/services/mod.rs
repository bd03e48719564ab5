pub mod analytics_service;
pub mod merchant_service;
pub mod metrics_service;
pub mod transaction_service;
