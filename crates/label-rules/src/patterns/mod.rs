pub mod content_type;
pub mod domain;
pub mod extractors;
pub mod priority;
pub mod stakeholder;

use label_core::{
    ContentType, Domain, LabelError, LabelResult, Priority, Stakeholder, Vocabulary,
};
use regex::{Regex, RegexBuilder};

pub use extractors::Extractor;

pub(crate) fn owned(patterns: &[&str]) -> Vec<String> {
    patterns.iter().map(|p| p.to_string()).collect()
}

/// Uncompiled pattern sources per category: enum value to pattern strings.
#[derive(Debug, Clone)]
pub struct PatternSources {
    pub content_types: Vec<(ContentType, Vec<String>)>,
    pub domains: Vec<(Domain, Vec<String>)>,
    pub priorities: Vec<(Priority, Vec<String>)>,
    pub stakeholders: Vec<(Stakeholder, Vec<String>)>,
}

impl PatternSources {
    /// The construction-meeting vocabulary patterns.
    pub fn construction_defaults() -> Self {
        Self {
            content_types: content_type::default_sources(),
            domains: domain::default_sources(),
            priorities: priority::default_sources(),
            stakeholders: stakeholder::default_sources(),
        }
    }
}

/// A compiled pattern for one enum value: all of the value's patterns joined
/// into a single case-insensitive alternation.
#[derive(Debug, Clone)]
pub struct CompiledPattern<T> {
    pub value: T,
    pub regex: Regex,
}

/// Immutable compiled pattern table owned by one `RuleTagger`.
pub struct PatternTable {
    pub(crate) content_types: Vec<CompiledPattern<ContentType>>,
    pub(crate) domains: Vec<CompiledPattern<Domain>>,
    /// Stored in `Priority::DETECTION_ORDER`.
    pub(crate) priorities: Vec<CompiledPattern<Priority>>,
    pub(crate) stakeholders: Vec<CompiledPattern<Stakeholder>>,
    pub(crate) extractors: Vec<Extractor>,
}

impl PatternTable {
    /// Compile every source. Any pattern that fails to compile aborts
    /// construction with `LabelError::Pattern`.
    pub fn compile(sources: &PatternSources) -> LabelResult<Self> {
        let content_types = compile_category("content_type", &sources.content_types)?;
        let domains = compile_category("domain", &sources.domains)?;
        let stakeholders = compile_category("stakeholder", &sources.stakeholders)?;

        let mut priorities = compile_category("priority", &sources.priorities)?;
        priorities.sort_by_key(|p| {
            Priority::DETECTION_ORDER
                .iter()
                .position(|&d| d == p.value)
                .unwrap_or(usize::MAX)
        });

        Ok(Self {
            content_types,
            domains,
            priorities,
            stakeholders,
            extractors: extractors::compile_all()?,
        })
    }

    /// Compile the construction-meeting defaults.
    pub fn construction_defaults() -> LabelResult<Self> {
        Self::compile(&PatternSources::construction_defaults())
    }

    /// Number of compiled alternations across all categories.
    pub fn len(&self) -> usize {
        self.content_types.len()
            + self.domains.len()
            + self.priorities.len()
            + self.stakeholders.len()
            + self.extractors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn compile_category<T: Vocabulary>(
    category: &str,
    sources: &[(T, Vec<String>)],
) -> LabelResult<Vec<CompiledPattern<T>>> {
    sources
        .iter()
        .map(|(value, patterns)| {
            let name = format!("{category}:{}", value.key());
            compile_alternation(&name, patterns).map(|regex| CompiledPattern {
                value: *value,
                regex,
            })
        })
        .collect()
}

fn compile_alternation(name: &str, patterns: &[String]) -> LabelResult<Regex> {
    if patterns.is_empty() {
        return Err(LabelError::Pattern {
            name: name.to_string(),
            reason: "no patterns given".to_string(),
        });
    }
    let combined = patterns
        .iter()
        .map(|p| format!("(?:{p})"))
        .collect::<Vec<_>>()
        .join("|");
    RegexBuilder::new(&combined)
        .case_insensitive(true)
        .build()
        .map_err(|e| LabelError::Pattern {
            name: name.to_string(),
            reason: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_compile() {
        let table = PatternTable::construction_defaults().unwrap();
        assert_eq!(table.content_types.len(), 5);
        assert_eq!(table.domains.len(), 8);
        assert_eq!(table.priorities.len(), 3);
        assert_eq!(table.stakeholders.len(), 5);
        assert_eq!(table.extractors.len(), 4);
    }

    #[test]
    fn priorities_reordered_high_first() {
        let mut sources = PatternSources::construction_defaults();
        sources.priorities.reverse();
        let table = PatternTable::compile(&sources).unwrap();
        let order: Vec<Priority> = table.priorities.iter().map(|p| p.value).collect();
        assert_eq!(order, Priority::DETECTION_ORDER.to_vec());
    }

    #[test]
    fn invalid_pattern_is_reported_by_name() {
        let mut sources = PatternSources::construction_defaults();
        sources.domains[0].1.push("(unclosed".to_string());
        let err = PatternTable::compile(&sources).err().unwrap();
        match err {
            LabelError::Pattern { name, .. } => assert_eq!(name, "domain:structure"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_pattern_list_is_rejected() {
        let mut sources = PatternSources::construction_defaults();
        sources.stakeholders[0].1.clear();
        assert!(PatternTable::compile(&sources).is_err());
    }

    #[test]
    fn alternation_is_case_insensitive() {
        let re = compile_alternation("t", &owned(&["fyi", "critical"])).unwrap();
        assert!(re.is_match("FYI only"));
        assert!(re.is_match("CRITICAL path"));
    }
}
