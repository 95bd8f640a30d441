use std::future::Future;
use std::path::PathBuf;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use tower::Service;
use tracing::info;

use crate::aggregator::{Aggregator, Run};
use crate::config::SemrushConfig;
use crate::error::ScraperError;
use crate::export::CsvExporter;
use crate::semrush::SemrushClient;

/// エクスポートリクエスト
#[derive(Debug, Clone)]
pub struct ExportRequest {
    pub keywords: Vec<String>,
    pub timestamp: Option<String>,
}

impl ExportRequest {
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keywords: keywords.into_iter().map(Into::into).collect(),
            timestamp: None,
        }
    }

    /// 出力ファイル名のタイムスタンプを固定する
    pub fn with_timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = Some(timestamp.into());
        self
    }
}

/// 出力した1ファイル分の情報
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub table: &'static str,
    pub path: PathBuf,
    pub rows: usize,
}

/// エクスポート結果
#[derive(Debug, Clone)]
pub struct ExportReport {
    pub timestamp: String,
    pub artifacts: Vec<Artifact>,
}

/// 実行済みの Run をすべて書き出す
pub fn export_run(run: &Run, exporter: &CsvExporter) -> Result<ExportReport, ScraperError> {
    let mut artifacts = Vec::new();
    for accumulator in run.outputs() {
        let path = exporter.export(accumulator, &run.artifact_name(accumulator))?;
        artifacts.push(Artifact {
            table: accumulator.name(),
            path,
            rows: accumulator.len(),
        });
    }

    Ok(ExportReport {
        timestamp: run.timestamp.clone(),
        artifacts,
    })
}

/// tower::Serviceを実装したエクスポートサービス
#[derive(Debug, Clone)]
pub struct ExportService {
    config: Arc<SemrushConfig>,
}

impl ExportService {
    pub fn new(config: SemrushConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

impl Service<ExportRequest> for ExportService {
    type Response = ExportReport;
    type Error = ScraperError;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: ExportRequest) -> Self::Future {
        info!("Export request received: {} keywords", req.keywords.len());
        let config = self.config.clone();

        Box::pin(async move {
            let client = SemrushClient::new(&config)?;
            let aggregator = Aggregator::new(client, config.profile);

            let run = match req.timestamp {
                Some(timestamp) => aggregator.run_with_timestamp(&req.keywords, timestamp).await,
                None => aggregator.run(&req.keywords).await,
            };

            let exporter = CsvExporter::new(&config.output_dir);
            let report = export_run(&run, &exporter)?;

            for artifact in &report.artifacts {
                info!("{}: {} rows -> {:?}", artifact.table, artifact.rows, artifact.path);
            }
            Ok(report)
        })
    }
}
