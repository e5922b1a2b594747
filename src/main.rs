// src/main.rs
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use auth_smoke::config::Config;
use auth_smoke::error::AppResult;
use auth_smoke::Scenario;

#[tokio::main]
async fn main() -> AppResult<()> {
    // トレーシングの設定
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "auth_smoke=info".into()))
        .with(fmt::layer())
        .init();

    tracing::info!("Starting AuthSystem API tests...");

    // 設定を読み込む
    let config = Config::from_env()?;
    tracing::info!("Configuration loaded: {:?}", config);

    let report_path = config.report_path.clone();
    let report = Scenario::new(config).run().await?;

    report.save(&report_path)?;
    tracing::info!("Test report saved to {}", report_path.display());

    tracing::info!("All tests completed.");
    Ok(())
}
