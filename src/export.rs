use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::ScraperError;
use crate::table::Accumulator;

/// 累積表をCSVファイルに書き出す
#[derive(Debug, Clone)]
pub struct CsvExporter {
    output_dir: PathBuf,
}

impl CsvExporter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// `artifact_name` で書き出し、保存先パスを返す
    ///
    /// 同名ファイルは上書き。列がない（一度も行が追加されていない）場合は空ファイルになる。
    pub fn export(
        &self,
        accumulator: &Accumulator,
        artifact_name: &str,
    ) -> Result<PathBuf, ScraperError> {
        std::fs::create_dir_all(&self.output_dir)?;
        let path = self.output_dir.join(artifact_name);

        let mut writer = csv::Writer::from_path(&path)?;
        if !accumulator.columns().is_empty() {
            writer.write_record(accumulator.columns())?;
            for row in accumulator.rows() {
                writer.write_record(row)?;
            }
        }
        writer.flush()?;

        info!("Exported {} rows to {:?}", accumulator.len(), path);
        Ok(path)
    }
}
