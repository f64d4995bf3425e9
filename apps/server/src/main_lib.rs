use std::sync::Arc;

use crate::config::Config;
use exchanger_core::{
    currencies::{CurrencyService, CurrencyServiceTrait},
    fx::{ConversionService, ConversionServiceTrait, FxService, FxServiceTrait},
};
use exchanger_storage_sqlite::{
    currencies::CurrencyRepository,
    db::{self, write_actor},
    fx::FxRepository,
};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub currency_service: Arc<dyn CurrencyServiceTrait>,
    pub fx_service: Arc<dyn FxServiceTrait>,
    pub conversion_service: Arc<dyn ConversionServiceTrait>,
}

pub fn init_tracing(log_format: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let writer = write_actor::spawn_writer((*pool).clone());

    let currency_repo = Arc::new(CurrencyRepository::new(pool.clone(), writer.clone()));
    let fx_repo = Arc::new(FxRepository::new(pool.clone(), writer.clone()));

    let currency_service: Arc<dyn CurrencyServiceTrait> =
        Arc::new(CurrencyService::new(currency_repo));
    let fx_service: Arc<dyn FxServiceTrait> =
        Arc::new(FxService::new(fx_repo.clone(), currency_service.clone()));
    let conversion_service: Arc<dyn ConversionServiceTrait> = Arc::new(
        ConversionService::new(currency_service.clone(), fx_repo)
            .with_anchor_currency(config.anchor_currency.clone()),
    );
    tracing::info!("Bridging conversions through {}", config.anchor_currency);

    Ok(Arc::new(AppState {
        currency_service,
        fx_service,
        conversion_service,
    }))
}
