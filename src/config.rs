use std::env;
use std::path::PathBuf;

use rust_decimal::Decimal;

use crate::models::Language;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub storage_dir: PathBuf,
    pub tax_rate: Decimal,
    pub default_language: Language,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let storage_dir = env::var("STOREFRONT_STORAGE_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(".storefront"));
        let tax_rate = env::var("STOREFRONT_TAX_RATE")
            .ok()
            .and_then(|v| v.parse::<Decimal>().ok())
            .filter(|rate| !rate.is_sign_negative())
            .unwrap_or_else(default_tax_rate);
        let default_language = env::var("STOREFRONT_LANGUAGE")
            .ok()
            .and_then(|code| Language::from_code(&code))
            .unwrap_or_default();
        Ok(Self {
            storage_dir,
            tax_rate,
            default_language,
        })
    }
}

/// 8% sales tax, matching the rate baked into the checkout summary.
pub fn default_tax_rate() -> Decimal {
    Decimal::new(8, 2)
}
