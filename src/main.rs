use semrush_scraper::keywords::KEYWORDS;
use semrush_scraper::{ExportRequest, ExportService, SemrushConfig};
use tower::Service;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // ログ設定
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // .envがあれば読み込む
    if let Ok(path) = dotenvy::dotenv() {
        info!("Loaded environment from {:?}", path);
    }

    // 認証情報がなければネットワークアクセス前に終了
    let config = SemrushConfig::from_env()?;
    info!("Config: {:?}", config);

    let mut service = ExportService::new(config);
    let report = service.call(ExportRequest::new(KEYWORDS)).await?;

    info!(
        "Data fetching and CSV export completed: {} files (timestamp {})",
        report.artifacts.len(),
        report.timestamp
    );
    Ok(())
}
