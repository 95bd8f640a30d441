//! SEMrush API モジュール
//!
//! クエリ組み立て、HTTP呼び出し、`;` 区切りレスポンスのデコードを行う

mod client;
mod decode;
mod query;

pub use client::{interpret_response, SemrushClient};
pub use decode::decode;
pub use query::{Endpoint, Query, SubjectRole};
