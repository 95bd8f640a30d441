//! 表形式データ
//!
//! APIのレスポンスはエンドポイントごとに列構成が異なるため、
//! 列は固定の構造体ではなく名前付きの可変列として扱う。

/// 1回のAPIレスポンスを正規化した表
///
/// すべての行は `columns` と同じ長さを持つ。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// 1行だけの表を作成（プレースホルダー行用）
    pub fn single_row<K, V>(cells: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let (columns, row): (Vec<String>, Vec<String>) = cells
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .unzip();
        Self {
            columns,
            rows: vec![row],
        }
    }

    /// 行を追加する。列数が合わない場合は行を返す
    pub fn push_row(&mut self, row: Vec<String>) -> Result<(), Vec<String>> {
        if row.len() != self.columns.len() {
            return Err(row);
        }
        self.rows.push(row);
        Ok(())
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// 全行の `name` 列に同じ値を設定する。列がなければ末尾に追加
    pub fn stamp(&mut self, name: &str, value: &str) {
        match self.column_index(name) {
            Some(idx) => {
                for row in &mut self.rows {
                    row[idx] = value.to_string();
                }
            }
            None => {
                self.columns.push(name.to_string());
                for row in &mut self.rows {
                    row.push(value.to_string());
                }
            }
        }
    }

    /// `name` 列の値を初出順に重複なしで返す（完全一致で比較、空文字は除外）
    pub fn distinct_values(&self, name: &str) -> Vec<String> {
        let Some(idx) = self.column_index(name) else {
            return Vec::new();
        };

        let mut seen: Vec<String> = Vec::new();
        for row in &self.rows {
            let value = &row[idx];
            if !value.is_empty() && !seen.iter().any(|v| v == value) {
                seen.push(value.clone());
            }
        }
        seen
    }
}

/// 実行中に行が追加され続け、最終的に1つの出力ファイルになる表
///
/// 列は今までに見たすべての列の和集合（初出順）。
/// 列が少ないレスポンス由来の行の不足セルは空文字で埋める。
#[derive(Debug, Clone)]
pub struct Accumulator {
    name: &'static str,
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Accumulator {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            columns: Vec::new(),
            rows: Vec::new(),
        }
    }

    /// 出力ファイル名のベース（例: `organic_results`）
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// 表の全行を末尾に追加する
    pub fn append(&mut self, table: &Table) {
        let mapping: Vec<usize> = table
            .columns()
            .iter()
            .map(|column| self.ensure_column(column))
            .collect();

        let width = self.columns.len();
        for source in table.rows() {
            let mut row = vec![String::new(); width];
            for (value, &idx) in source.iter().zip(&mapping) {
                row[idx] = value.clone();
            }
            self.rows.push(row);
        }
    }

    /// 指定した行・列の値。列がない場合は `None`
    pub fn cell(&self, row: usize, column: &str) -> Option<&str> {
        let idx = self.columns.iter().position(|c| c == column)?;
        self.rows.get(row).map(|r| r[idx].as_str())
    }

    fn ensure_column(&mut self, name: &str) -> usize {
        if let Some(idx) = self.columns.iter().position(|c| c == name) {
            return idx;
        }
        self.columns.push(name.to_string());
        for row in &mut self.rows {
            row.push(String::new());
        }
        self.columns.len() - 1
    }
}
