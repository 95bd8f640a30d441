use thiserror::Error;

use crate::semrush::Query;

#[derive(Error, Debug)]
pub enum ScraperError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("HTTPクライアント初期化エラー: {0}")]
    HttpClient(String),

    #[error("ファイル操作エラー: {0}")]
    FileIO(#[from] std::io::Error),

    #[error("CSV書き込みエラー: {0}")]
    Csv(#[from] csv::Error),
}

/// 1回のAPI呼び出しが使えるデータを返さなかった理由
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    #[error("HTTPエラー: status={0}")]
    HttpError(u16),

    #[error("データなし")]
    EmptyResponse,

    #[error("レスポンス解析エラー: {0}")]
    ParseError(String),

    #[error("通信エラー: {0}")]
    Transport(String),
}

impl FailureKind {
    /// プレースホルダー行の Message 列に入れる文言
    pub fn placeholder_message(&self) -> String {
        match self {
            FailureKind::HttpError(status) => format!("Error {}", status),
            FailureKind::EmptyResponse => "No data found".to_string(),
            FailureKind::ParseError(detail) => detail.clone(),
            FailureKind::Transport(detail) => format!("Request failed: {}", detail),
        }
    }
}

/// 失敗理由と、それを発生させたクエリ
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{query}: {kind}")]
pub struct FetchFailure {
    pub query: Query,
    pub kind: FailureKind,
}

impl FetchFailure {
    pub fn new(query: Query, kind: FailureKind) -> Self {
        Self { query, kind }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::semrush::Endpoint;

    #[test]
    fn test_placeholder_messages() {
        assert_eq!(FailureKind::HttpError(429).placeholder_message(), "Error 429");
        assert_eq!(FailureKind::EmptyResponse.placeholder_message(), "No data found");
        assert_eq!(
            FailureKind::ParseError("found record with 3 fields".into()).placeholder_message(),
            "found record with 3 fields"
        );
        assert_eq!(
            FailureKind::Transport("connection refused".into()).placeholder_message(),
            "Request failed: connection refused"
        );
    }

    #[test]
    fn test_fetch_failure_display_names_query() {
        let failure = FetchFailure::new(
            Query::new(Endpoint::PaidKeywords, "c.com"),
            FailureKind::EmptyResponse,
        );
        let text = failure.to_string();
        assert!(text.contains("domain_adwords"));
        assert!(text.contains("c.com"));
    }
}
