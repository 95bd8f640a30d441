//! SEMrush データ取得ライブラリ
//!
//! - キーワードごとにオーガニック検索結果を取得
//! - 結果に出現したドメインごとにキーワード（オーガニック/広告）またはトラフィックソースを取得
//! - テーブルごとにタイムスタンプ付きCSVへ書き出し
//!
//! # 使用例
//!
//! ```rust,ignore
//! use semrush_scraper::{ExportRequest, ExportService, SemrushConfig};
//! use tower::Service;
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = SemrushConfig::from_env().unwrap();
//!     let mut service = ExportService::new(config);
//!
//!     let request = ExportRequest::new(["AYVAKIT side effects"]);
//!     let report = service.call(request).await.unwrap();
//!     for artifact in report.artifacts {
//!         println!("{}: {:?}", artifact.table, artifact.path);
//!     }
//! }
//! ```

pub mod aggregator;
pub mod config;
pub mod error;
pub mod export;
pub mod keywords;
pub mod semrush;
pub mod service;
pub mod table;
pub mod traits;

// 主要な型をリエクスポート
pub use aggregator::{Aggregator, Run};
pub use config::{DatasetProfile, SemrushConfig};
pub use error::{FailureKind, FetchFailure, ScraperError};
pub use export::CsvExporter;
pub use semrush::{Endpoint, Query, SemrushClient};
pub use service::{Artifact, ExportReport, ExportRequest, ExportService};
pub use table::{Accumulator, Table};
pub use traits::AnalyticsClient;
