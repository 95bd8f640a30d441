use std::fmt;
use std::path::PathBuf;

use serde::de::value::{Error as ValueError, StrDeserializer};
use serde::de::IntoDeserializer;
use serde::Deserialize;

use crate::error::ScraperError;

pub const API_KEY_VAR: &str = "API_KEY";
pub const BASE_URL_VAR: &str = "BASE_URL";
pub const OUTPUT_DIR_VAR: &str = "OUTPUT_DIR";
pub const DATASET_PROFILE_VAR: &str = "DATASET_PROFILE";

/// ドメインごとに取得する二次データセットの組み合わせ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DatasetProfile {
    /// オーガニック・広告キーワード（出力3ファイル）
    #[default]
    DomainKeywords,
    /// トラフィックソースのみ（旧版、出力2ファイル）
    TrafficSources,
}

impl DatasetProfile {
    pub fn parse(value: &str) -> Result<Self, ScraperError> {
        let de: StrDeserializer<'_, ValueError> = value.trim().into_deserializer();
        Self::deserialize(de).map_err(|e| {
            ScraperError::Config(format!("{} の値が不正です: {}", DATASET_PROFILE_VAR, e))
        })
    }
}

#[derive(Clone)]
pub struct SemrushConfig {
    pub api_key: String,
    pub base_url: String,
    pub output_dir: PathBuf,
    pub profile: DatasetProfile,
}

impl fmt::Debug for SemrushConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SemrushConfig")
            .field("api_key", &"***")
            .field("base_url", &self.base_url)
            .field("output_dir", &self.output_dir)
            .field("profile", &self.profile)
            .finish()
    }
}

impl SemrushConfig {
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            output_dir: PathBuf::from("."),
            profile: DatasetProfile::default(),
        }
    }

    pub fn with_output_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_dir = path.into();
        self
    }

    pub fn with_profile(mut self, profile: DatasetProfile) -> Self {
        self.profile = profile;
        self
    }

    /// 環境変数から設定を読み込む
    ///
    /// `API_KEY` と `BASE_URL` は必須。未設定・空文字の場合はエラー。
    pub fn from_env() -> Result<Self, ScraperError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ScraperError> {
        let required = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or_else(|| ScraperError::Config(format!("{} が設定されていません", name)))
        };

        let mut config = Self::new(required(API_KEY_VAR)?, required(BASE_URL_VAR)?);

        if let Some(dir) = lookup(OUTPUT_DIR_VAR).filter(|v| !v.trim().is_empty()) {
            config = config.with_output_dir(dir.trim());
        }
        if let Some(profile) = lookup(DATASET_PROFILE_VAR).filter(|v| !v.trim().is_empty()) {
            config = config.with_profile(DatasetProfile::parse(&profile)?);
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn test_config_builder() {
        let config = SemrushConfig::new("key", "https://api.semrush.com/")
            .with_output_dir("/tmp/out")
            .with_profile(DatasetProfile::TrafficSources);

        assert_eq!(config.base_url, "https://api.semrush.com");
        assert_eq!(config.output_dir, PathBuf::from("/tmp/out"));
        assert_eq!(config.profile, DatasetProfile::TrafficSources);
    }

    #[test]
    fn test_from_lookup_defaults() {
        let config = SemrushConfig::from_lookup(lookup(&[
            ("API_KEY", "abc"),
            ("BASE_URL", "https://api.semrush.com"),
        ]))
        .unwrap();

        assert_eq!(config.api_key, "abc");
        assert_eq!(config.output_dir, PathBuf::from("."));
        assert_eq!(config.profile, DatasetProfile::DomainKeywords);
    }

    #[test]
    fn test_from_lookup_missing_or_blank_is_fatal() {
        let missing = SemrushConfig::from_lookup(lookup(&[("BASE_URL", "https://x")]));
        assert!(matches!(missing, Err(ScraperError::Config(_))));

        let blank = SemrushConfig::from_lookup(lookup(&[("API_KEY", "k"), ("BASE_URL", "  ")]));
        assert!(matches!(blank, Err(ScraperError::Config(_))));
    }

    #[test]
    fn test_profile_parse() {
        assert_eq!(
            DatasetProfile::parse("traffic_sources").unwrap(),
            DatasetProfile::TrafficSources
        );
        assert_eq!(
            DatasetProfile::parse(" domain_keywords ").unwrap(),
            DatasetProfile::DomainKeywords
        );
        assert!(DatasetProfile::parse("everything").is_err());
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = SemrushConfig::new("super-secret", "https://x");
        assert!(!format!("{:?}", config).contains("super-secret"));
    }
}
