use label_core::Priority;

use super::owned;

/// Priority patterns. Compilation reorders these into
/// `Priority::DETECTION_ORDER` regardless of the order given here.
pub fn default_sources() -> Vec<(Priority, Vec<String>)> {
    vec![
        (
            Priority::High,
            owned(&[
                r"(?:至急|緊急|即座)",
                r"(?:最優先|重要|critical)",
                r"(?:今すぐ|直ちに)",
                r"(?:期限厳守|必須)",
            ]),
        ),
        (
            Priority::Medium,
            owned(&[
                r"(?:通常|標準|normal)",
                r"(?:今週中|今月中)",
                r"(?:できるだけ早く|なるべく)",
            ]),
        ),
        (
            Priority::Low,
            owned(&[
                r"(?:後回し|余裕がある時)",
                r"(?:急がない|ゆっくり)",
                r"(?:参考|FYI)",
            ]),
        ),
    ]
}
