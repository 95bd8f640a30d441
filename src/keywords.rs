/// 取得対象のキーワード（入力順に処理される）
pub const KEYWORDS: [&str; 10] = [
    "Systemic Mastocytosis community support",
    "Systemic Mastocytosis resources",
    "AYVAKIT patient reviews",
    "AYVAKIT side effects",
    "Managing Systemic Mastocytosis symptoms",
    "Living with Systemic Mastocytosis",
    "Systemic Mastocytosis symptom management",
    "Systemic Mastocytosis patient experience",
    "Effective treatments for Systemic Mastocytosis",
    "Advanced Systemic Mastocytosis treatments",
];
