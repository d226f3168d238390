//! Connectivity probe walking every admin screen's first page.
//!
//! Useful after deploys and config changes: loads the dashboard
//! configuration, builds the authenticated client and fetches each screen's
//! list and stats once, logging what comes back.

use std::env;
use std::sync::Arc;

use config::Config;
use dotenvy::dotenv;

use valygo_admin::api::{ApiClient, DashboardReader, MemorySession, SessionStore, TeamReader};
use valygo_admin::domain::kyc::VerificationTrack;
use valygo_admin::listview::ViewState;
use valygo_admin::models::config::DashboardConfig;
use valygo_admin::services::{kyc, subscriptions, transactions, users};

fn report<T>(screen: &str, state: &ViewState<T>) {
    match state {
        ViewState::Loaded(page) => {
            log::info!(
                "{screen}: page {}/{} ({} rows, {} total)",
                page.page(),
                page.page_count(),
                page.rows().len(),
                page.total()
            );
        }
        ViewState::Failed(err) => {
            log::error!("{screen}: fetch failed: {err}");
        }
        ViewState::Idle | ViewState::Loading(_) => {
            log::warn!("{screen}: fetch did not settle");
        }
    }
}

#[tokio::main]
async fn main() {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    // Select config profile (defaults to `local`).
    let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());

    let settings = Config::builder()
        // Add `./config/default.yaml`
        .add_source(config::File::with_name("config/default"))
        // Add environment-specific overrides
        .add_source(config::File::with_name(&format!("config/{}", app_env)).required(false))
        // Add settings from the environment (with a prefix of APP)
        .add_source(config::Environment::with_prefix("APP"))
        .build();

    let settings = match settings {
        Ok(settings) => settings,
        Err(err) => {
            log::error!("Error loading settings: {}", err);
            std::process::exit(1);
        }
    };

    let dashboard_config = match settings.try_deserialize::<DashboardConfig>() {
        Ok(dashboard_config) => dashboard_config,
        Err(err) => {
            log::error!("Error loading dashboard config: {}", err);
            std::process::exit(1);
        }
    };

    let session: Arc<dyn SessionStore> = Arc::new(MemorySession::default());
    let api = match ApiClient::new(&dashboard_config, session.clone()) {
        Ok(api) => api,
        Err(err) => {
            log::error!("Failed to build API client: {err}");
            std::process::exit(1);
        }
    };

    log::info!("Checking backend at {}", dashboard_config.api_url);

    let mut users_view = users::users_view(api.clone());
    report("users", users_view.refresh().await);

    let mut transactions_view = transactions::transactions_view(api.clone());
    report("transactions", transactions_view.refresh().await);

    let mut subscriptions_view = subscriptions::subscriptions_view(api.clone());
    report("subscriptions", subscriptions_view.refresh().await);

    let mut kyc_view = kyc::verifications_view(api.clone(), VerificationTrack::Kyc);
    report("kyc", kyc_view.refresh().await);

    let mut kyb_view = kyc::verifications_view(api.clone(), VerificationTrack::Kyb);
    report("kyb", kyb_view.refresh().await);

    match api.list_team().await {
        Ok(members) => log::info!("sales team: {} members", members.len()),
        Err(err) => log::error!("sales team: fetch failed: {err}"),
    }

    match api.dashboard_stats().await {
        Ok(stats) => log::info!(
            "dashboard: {} users, {} transactions",
            stats.total_users,
            stats.total_transactions
        ),
        Err(err) => log::error!("dashboard: fetch failed: {err}"),
    }

    if !session.is_valid() {
        log::warn!("Session was invalidated during the probe; token is missing or expired");
    }
}
