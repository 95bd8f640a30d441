use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use tracing::debug;

use crate::config::SemrushConfig;
use crate::error::{FailureKind, FetchFailure, ScraperError};
use crate::table::Table;
use crate::traits::AnalyticsClient;

use super::decode::decode;
use super::query::Query;

/// SEMrush API クライアント
///
/// リトライ・タイムアウト上書きはしない。失敗はそのまま呼び出し元に返す。
pub struct SemrushClient {
    http: Client,
    api_key: String,
    base_url: String,
}

impl SemrushClient {
    pub fn new(config: &SemrushConfig) -> Result<Self, ScraperError> {
        let http = Client::builder()
            .build()
            .map_err(|e| ScraperError::HttpClient(e.to_string()))?;

        Ok(Self {
            http,
            api_key: config.api_key.clone(),
            base_url: config.base_url.clone(),
        })
    }

    /// リクエストURLを組み立てる
    pub fn build_url(&self, query: &Query) -> Result<Url, FailureKind> {
        let endpoint = format!("{}{}", self.base_url, query.endpoint.path());
        let mut params = query.params();
        params.push(("key", self.api_key.clone()));

        Url::parse_with_params(&endpoint, &params)
            .map_err(|e| FailureKind::Transport(format!("invalid url {}: {}", endpoint, e)))
    }

    async fn fetch(&self, query: &Query) -> Result<(StatusCode, String), FailureKind> {
        let url = self.build_url(query)?;
        debug!("Requesting: {}", redact_key(&url));

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| FailureKind::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Ok((status, String::new()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| FailureKind::Transport(e.to_string()))?;
        Ok((status, body))
    }
}

#[async_trait]
impl AnalyticsClient for SemrushClient {
    async fn call(&self, query: &Query) -> Result<Table, FetchFailure> {
        match self.fetch(query).await {
            Ok((status, body)) => interpret_response(query, status, &body),
            Err(kind) => Err(FetchFailure::new(query.clone(), kind)),
        }
    }
}

/// ステータスと本文からクエリの結果を決める
///
/// 非2xxの場合は本文をデコードしない。成功した表の全行にクエリの主語を出所列として付与する。
pub fn interpret_response(
    query: &Query,
    status: StatusCode,
    body: &str,
) -> Result<Table, FetchFailure> {
    if !status.is_success() {
        return Err(FetchFailure::new(
            query.clone(),
            FailureKind::HttpError(status.as_u16()),
        ));
    }

    let mut table = decode(body).map_err(|kind| FetchFailure::new(query.clone(), kind))?;
    table.stamp(query.endpoint.subject_role().provenance_column(), &query.subject);
    Ok(table)
}

/// ログ出力用にAPIキーを伏せたURL
fn redact_key(url: &Url) -> String {
    let mut redacted = url.clone();
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let v = if k == "key" { "***".into() } else { v.into_owned() };
            (k.into_owned(), v)
        })
        .collect();
    redacted.query_pairs_mut().clear().extend_pairs(pairs);
    redacted.to_string()
}
