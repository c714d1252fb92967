//! Fixed-format extractors for dates, monetary amounts, percentages, and
//! named locations. Every non-overlapping match becomes one rule tag.

use label_core::constants::{
    CATEGORY_AMOUNT, CATEGORY_DATE, CATEGORY_LOCATION, CATEGORY_PERCENTAGE, METADATA_END,
    METADATA_START,
};
use label_core::{LabelError, LabelResult, Tag};
use regex::{Captures, Regex};

// 3月15日, 3/15, 12月1
const RE_DATE: &str = r"\d{1,2}[月/]\d{1,2}日?";
// 500万円, 1,200円, 3.5億円 (value is the numeric part)
const RE_AMOUNT: &str = r"(\d{1,3}(?:,\d{3})*(?:\.\d+)?)\s*(?:円|万円|億円)";
// 15%, 2.5 ％
const RE_PERCENTAGE: &str = r"(\d+(?:\.\d+)?)\s*[%％]";
// Rooms, sites, and floor numbers
const RE_LOCATION: &str = r"(?:会議室|事務所|現場|工場|倉庫|\d+階)";

/// One compiled extractor.
pub struct Extractor {
    pub category: &'static str,
    regex: Regex,
    render: fn(&Captures<'_>) -> String,
}

impl Extractor {
    fn compile(
        category: &'static str,
        source: &str,
        render: fn(&Captures<'_>) -> String,
    ) -> LabelResult<Self> {
        let regex = Regex::new(source).map_err(|e| LabelError::Pattern {
            name: format!("extractor:{category}"),
            reason: e.to_string(),
        })?;
        Ok(Self {
            category,
            regex,
            render,
        })
    }

    /// Append one tag per match, in text order.
    pub fn extract_into(&self, text: &str, out: &mut Vec<Tag>) {
        for caps in self.regex.captures_iter(text) {
            let Some(whole) = caps.get(0) else { continue };
            out.push(
                Tag::rule(self.category, (self.render)(&caps))
                    .with_metadata(METADATA_START, whole.start().into())
                    .with_metadata(METADATA_END, whole.end().into()),
            );
        }
    }
}

fn whole_match(caps: &Captures<'_>) -> String {
    caps.get(0).map_or_else(String::new, |m| m.as_str().to_string())
}

fn first_group(caps: &Captures<'_>) -> String {
    caps.get(1).map_or_else(String::new, |m| m.as_str().to_string())
}

fn percentage(caps: &Captures<'_>) -> String {
    format!("{}%", first_group(caps))
}

/// Compile the extractors in emission order: dates, amounts, percentages,
/// locations.
pub fn compile_all() -> LabelResult<Vec<Extractor>> {
    Ok(vec![
        Extractor::compile(CATEGORY_DATE, RE_DATE, whole_match)?,
        Extractor::compile(CATEGORY_AMOUNT, RE_AMOUNT, first_group)?,
        Extractor::compile(CATEGORY_PERCENTAGE, RE_PERCENTAGE, percentage)?,
        Extractor::compile(CATEGORY_LOCATION, RE_LOCATION, whole_match)?,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(text: &str) -> Vec<Tag> {
        let mut out = Vec::new();
        for ex in compile_all().unwrap() {
            ex.extract_into(text, &mut out);
        }
        out
    }

    fn values<'a>(tags: &'a [Tag], category: &str) -> Vec<&'a str> {
        tags.iter()
            .filter(|t| t.category == category)
            .map(|t| t.value.as_str())
            .collect()
    }

    #[test]
    fn extracts_every_date() {
        let tags = run("3月15日に着工、4/1に検査、12月1までに完了");
        assert_eq!(values(&tags, "date"), vec!["3月15日", "4/1", "12月1"]);
    }

    #[test]
    fn amount_keeps_numeric_part() {
        let tags = run("見積金額は約500万円、追加で1,200円");
        assert_eq!(values(&tags, "amount"), vec!["500", "1,200"]);
    }

    #[test]
    fn percentage_appends_sign() {
        let tags = run("進捗は75%、残り2.5 ％です");
        assert_eq!(values(&tags, "percentage"), vec!["75%", "2.5%"]);
    }

    #[test]
    fn locations_include_floors() {
        let tags = run("3階の作業エリアと会議室、現場事務所");
        assert_eq!(
            values(&tags, "location"),
            vec!["3階", "会議室", "現場", "事務所"]
        );
    }

    #[test]
    fn emission_order_is_by_kind_then_position() {
        let tags = run("会議室で3月1日に20%の値引き");
        let cats: Vec<&str> = tags.iter().map(|t| t.category.as_str()).collect();
        assert_eq!(cats, vec!["date", "percentage", "location"]);
    }

    #[test]
    fn metadata_records_byte_span() {
        let text = "期限は5/20です";
        let tags = run(text);
        let meta = tags[0].metadata.as_ref().unwrap();
        let start = meta["start"].as_u64().unwrap() as usize;
        let end = meta["end"].as_u64().unwrap() as usize;
        assert_eq!(&text[start..end], "5/20");
    }

    #[test]
    fn empty_text_extracts_nothing() {
        assert!(run("").is_empty());
    }
}
