//! レスポンスデコーダ
//!
//! `;` 区切りテキストを先頭行をヘッダーとして [`Table`] に変換する。

use crate::error::FailureKind;
use crate::table::Table;

const DELIMITER: u8 = b';';

pub fn decode(raw_text: &str) -> Result<Table, FailureKind> {
    if raw_text.trim().is_empty() {
        return Err(FailureKind::EmptyResponse);
    }

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(DELIMITER)
        .has_headers(true)
        .flexible(false)
        .from_reader(raw_text.as_bytes());

    let columns: Vec<String> = reader
        .headers()
        .map_err(|e| FailureKind::ParseError(e.to_string()))?
        .iter()
        .map(str::to_string)
        .collect();

    let mut table = Table::new(columns);
    for record in reader.records() {
        let record = record.map_err(|e| FailureKind::ParseError(e.to_string()))?;
        table
            .push_row(record.iter().map(str::to_string).collect())
            .map_err(|row| {
                FailureKind::ParseError(format!(
                    "row has {} fields, header has {}",
                    row.len(),
                    table.columns().len()
                ))
            })?;
    }

    // "ERROR 50 :: NOTHING FOUND" のような1行のみの応答もここに来る
    if table.is_empty() {
        return Err(FailureKind::EmptyResponse);
    }

    if table.columns().len() < 2 {
        return Err(FailureKind::ParseError(
            "no delimiter found in response header".to_string(),
        ));
    }

    Ok(table)
}
