//! キーワード → ドメイン → ドメイン別データセットの2段ファンアウト
//!
//! 呼び出しは1件ずつ順番に await する（同時に実行中のリクエストは常に1つ）。
//! キーワード単位の失敗はプレースホルダー行として残し、
//! ドメイン単位の失敗はログのみで行は残さない。

use chrono::Local;
use tracing::{info, warn};

use crate::config::DatasetProfile;
use crate::semrush::{Endpoint, Query};
use crate::table::{Accumulator, Table};
use crate::traits::AnalyticsClient;

/// ドメイン別データセットの行に付与する列
pub const DOMAIN_STAMP_COLUMN: &str = "domain";

const ORGANIC_DOMAIN_COLUMN: &str = "Domain";
const KEYWORD_COLUMN: &str = "Keyword";
const MESSAGE_COLUMN: &str = "Message";
const NO_DATA_MESSAGE: &str = "No data found";

/// 出力ファイル名用のタイムスタンプ (`YYYYMMDD_HHMMSS`)
pub fn current_timestamp() -> String {
    Local::now().format("%Y%m%d_%H%M%S").to_string()
}

/// プロファイルごとにドメインに対して発行するクエリ（発行順）
pub fn domain_endpoints(profile: DatasetProfile) -> &'static [Endpoint] {
    match profile {
        DatasetProfile::DomainKeywords => &[Endpoint::OrganicKeywords, Endpoint::PaidKeywords],
        DatasetProfile::TrafficSources => &[Endpoint::TrafficSources],
    }
}

/// 1回の実行分の状態
#[derive(Debug, Clone)]
pub struct Run {
    pub timestamp: String,
    pub keywords: Vec<String>,
    pub profile: DatasetProfile,
    pub organic_results: Accumulator,
    pub organic_keywords: Accumulator,
    pub paid_keywords: Accumulator,
    pub traffic_sources: Accumulator,
}

impl Run {
    pub fn new(keywords: Vec<String>, profile: DatasetProfile, timestamp: String) -> Self {
        Self {
            timestamp,
            keywords,
            profile,
            organic_results: Accumulator::new("organic_results"),
            organic_keywords: Accumulator::new("organic_search_keywords"),
            paid_keywords: Accumulator::new("paid_search_keywords"),
            traffic_sources: Accumulator::new("traffic_sources"),
        }
    }

    /// このプロファイルで出力する表（出力順）
    pub fn outputs(&self) -> Vec<&Accumulator> {
        let mut outputs = vec![&self.organic_results];
        for endpoint in domain_endpoints(self.profile) {
            outputs.push(self.accumulator(*endpoint));
        }
        outputs
    }

    /// `<table_name>_<timestamp>.csv`
    pub fn artifact_name(&self, accumulator: &Accumulator) -> String {
        format!("{}_{}.csv", accumulator.name(), self.timestamp)
    }

    pub fn accumulator(&self, endpoint: Endpoint) -> &Accumulator {
        match endpoint {
            Endpoint::OrganicResults => &self.organic_results,
            Endpoint::OrganicKeywords => &self.organic_keywords,
            Endpoint::PaidKeywords => &self.paid_keywords,
            Endpoint::TrafficSources => &self.traffic_sources,
        }
    }

    fn accumulator_mut(&mut self, endpoint: Endpoint) -> &mut Accumulator {
        match endpoint {
            Endpoint::OrganicResults => &mut self.organic_results,
            Endpoint::OrganicKeywords => &mut self.organic_keywords,
            Endpoint::PaidKeywords => &mut self.paid_keywords,
            Endpoint::TrafficSources => &mut self.traffic_sources,
        }
    }
}

pub struct Aggregator<C> {
    client: C,
    profile: DatasetProfile,
}

impl<C: AnalyticsClient> Aggregator<C> {
    pub fn new(client: C, profile: DatasetProfile) -> Self {
        Self { client, profile }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// 全キーワードを入力順に処理する
    pub async fn run(&self, keywords: &[String]) -> Run {
        self.run_with_timestamp(keywords, current_timestamp()).await
    }

    pub async fn run_with_timestamp(&self, keywords: &[String], timestamp: String) -> Run {
        let mut run = Run::new(keywords.to_vec(), self.profile, timestamp);
        info!(
            "Starting run {}: {} keywords, profile={:?}",
            run.timestamp,
            keywords.len(),
            self.profile
        );

        for (i, keyword) in keywords.iter().enumerate() {
            info!("Keyword {}/{}: {}", i + 1, keywords.len(), keyword);
            self.process_keyword(&mut run, keyword).await;
        }

        run
    }

    async fn process_keyword(&self, run: &mut Run, keyword: &str) {
        let results = match self.client.call(&Query::organic_results(keyword)).await {
            Ok(table) if table.has_column(ORGANIC_DOMAIN_COLUMN) => table,
            Ok(_) => {
                warn!("No {} column in results for '{}'", ORGANIC_DOMAIN_COLUMN, keyword);
                push_placeholder(run, keyword, NO_DATA_MESSAGE.to_string());
                return;
            }
            Err(failure) => {
                warn!("Failed to fetch organic results: {}", failure);
                push_placeholder(run, keyword, failure.kind.placeholder_message());
                return;
            }
        };

        run.organic_results.append(&results);

        let domains = results.distinct_values(ORGANIC_DOMAIN_COLUMN);
        info!("'{}': {} distinct domains", keyword, domains.len());
        for domain in &domains {
            self.process_domain(run, domain).await;
        }
    }

    async fn process_domain(&self, run: &mut Run, domain: &str) {
        for &endpoint in domain_endpoints(self.profile) {
            match self.client.call(&Query::new(endpoint, domain)).await {
                Ok(mut table) if !table.is_empty() => {
                    table.stamp(DOMAIN_STAMP_COLUMN, domain);
                    run.accumulator_mut(endpoint).append(&table);
                }
                Ok(_) => {}
                // ドメイン単位の失敗は行を残さない
                Err(failure) => warn!("Dropping domain dataset: {}", failure),
            }
        }
    }
}

fn push_placeholder(run: &mut Run, keyword: &str, message: String) {
    let row = Table::single_row([(KEYWORD_COLUMN, keyword.to_string()), (MESSAGE_COLUMN, message)]);
    run.organic_results.append(&row);
}
