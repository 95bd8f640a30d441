//! クエリ定義とエンドポイントごとのパラメータテンプレート

use std::fmt;

/// データベース（市場）コード
const DATABASE: &str = "us";
/// organic-results の取得件数
const ORGANIC_RESULTS_LIMIT: &str = "10";

/// トラフィックソースAPIのパス
const TRAFFIC_SOURCES_PATH: &str = "/analytics/ta/api/v3/sources";
const TRAFFIC_SOURCES_COLUMNS: &str =
    "target,from_target,display_date,country,traffic_share,traffic,channel";

/// クエリの主語がキーワードかドメインか
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubjectRole {
    Keyword,
    Domain,
}

impl SubjectRole {
    /// 成功した表の全行に付与する出所列の名前
    pub fn provenance_column(self) -> &'static str {
        match self {
            SubjectRole::Keyword => "Keyword",
            SubjectRole::Domain => "Domain",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// キーワードのオーガニック検索結果 (phrase_organic)
    OrganicResults,
    /// ドメインのオーガニックキーワード (domain_organic)
    OrganicKeywords,
    /// ドメインの広告キーワード (domain_adwords)
    PaidKeywords,
    /// ドメインのトラフィックソース (Traffic Analytics)
    TrafficSources,
}

impl Endpoint {
    pub fn subject_role(self) -> SubjectRole {
        match self {
            Endpoint::OrganicResults => SubjectRole::Keyword,
            _ => SubjectRole::Domain,
        }
    }

    /// ログ表示用の名前（`type` パラメータと同じ）
    pub fn name(self) -> &'static str {
        match self {
            Endpoint::OrganicResults => "phrase_organic",
            Endpoint::OrganicKeywords => "domain_organic",
            Endpoint::PaidKeywords => "domain_adwords",
            Endpoint::TrafficSources => "traffic_sources",
        }
    }

    /// ベースURLからのパス
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::TrafficSources => TRAFFIC_SOURCES_PATH,
            _ => "/",
        }
    }
}

/// 1回分のAPIリクエスト
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Query {
    pub endpoint: Endpoint,
    pub subject: String,
}

impl Query {
    pub fn new(endpoint: Endpoint, subject: impl Into<String>) -> Self {
        Self {
            endpoint,
            subject: subject.into(),
        }
    }

    pub fn organic_results(keyword: impl Into<String>) -> Self {
        Self::new(Endpoint::OrganicResults, keyword)
    }

    /// APIキーを除いたクエリパラメータ
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let subject = self.subject.clone();
        let fixed = |pairs: &[(&'static str, &str)]| {
            pairs
                .iter()
                .map(|(k, v)| (*k, v.to_string()))
                .collect::<Vec<_>>()
        };

        match self.endpoint {
            Endpoint::OrganicResults => {
                let mut params = fixed(&[("type", "phrase_organic")]);
                params.push(("phrase", subject));
                params.extend(fixed(&[
                    ("database", DATABASE),
                    ("display_limit", ORGANIC_RESULTS_LIMIT),
                ]));
                params
            }
            Endpoint::OrganicKeywords | Endpoint::PaidKeywords => {
                let mut params = fixed(&[("type", self.endpoint.name())]);
                params.push(("domain", subject));
                params.extend(fixed(&[("display_sort", "po_asc"), ("database", DATABASE)]));
                params
            }
            Endpoint::TrafficSources => {
                let mut params = vec![("target", subject)];
                params.extend(fixed(&[
                    ("device_type", "mobile"),
                    ("display_limit", "5"),
                    ("display_offset", "0"),
                    ("country", DATABASE),
                    ("sort_order", "traffic_diff"),
                    ("traffic_channel", "referral"),
                    ("traffic_type", "organic"),
                    ("display_date", "2020-06-01"),
                    ("export_columns", TRAFFIC_SOURCES_COLUMNS),
                ]));
                params
            }
        }
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.endpoint.name(), self.subject)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn param<'a>(params: &'a [(&'static str, String)], key: &str) -> Option<&'a str> {
        params
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    #[test]
    fn test_organic_results_params() {
        let params = Query::organic_results("AYVAKIT side effects").params();
        assert_eq!(param(&params, "type"), Some("phrase_organic"));
        assert_eq!(param(&params, "phrase"), Some("AYVAKIT side effects"));
        assert_eq!(param(&params, "database"), Some("us"));
        assert_eq!(param(&params, "display_limit"), Some("10"));
        assert_eq!(param(&params, "domain"), None);
    }

    #[test]
    fn test_domain_keyword_params() {
        let organic = Query::new(Endpoint::OrganicKeywords, "a.com").params();
        assert_eq!(param(&organic, "type"), Some("domain_organic"));
        assert_eq!(param(&organic, "domain"), Some("a.com"));
        assert_eq!(param(&organic, "display_sort"), Some("po_asc"));

        let paid = Query::new(Endpoint::PaidKeywords, "a.com").params();
        assert_eq!(param(&paid, "type"), Some("domain_adwords"));
        assert_eq!(param(&paid, "database"), Some("us"));
    }

    #[test]
    fn test_traffic_sources_targets_subject() {
        let query = Query::new(Endpoint::TrafficSources, "b.com");
        let params = query.params();
        assert_eq!(param(&params, "target"), Some("b.com"));
        assert_eq!(param(&params, "device_type"), Some("mobile"));
        assert_eq!(param(&params, "type"), None);
        assert_eq!(query.endpoint.path(), "/analytics/ta/api/v3/sources");
    }

    #[test]
    fn test_subject_roles() {
        assert_eq!(
            Endpoint::OrganicResults.subject_role().provenance_column(),
            "Keyword"
        );
        for endpoint in [
            Endpoint::OrganicKeywords,
            Endpoint::PaidKeywords,
            Endpoint::TrafficSources,
        ] {
            assert_eq!(endpoint.subject_role().provenance_column(), "Domain");
        }
    }
}
