use std::collections::BTreeSet;

use label_core::models::TagContext;
use label_core::traits::ITagger;
use label_core::{
    ContentType, Domain, EngineOutput, LabelResult, Priority, Stakeholder, Tag, TagSource,
};
use tracing::{debug, info};

use crate::patterns::{PatternSources, PatternTable};

/// Rule engine that labels text purely from lexical evidence.
///
/// Deterministic: the same text always yields the same `EngineOutput`.
/// Cannot fail on any input; empty text yields an empty output.
pub struct RuleTagger {
    table: PatternTable,
}

impl RuleTagger {
    /// Build a tagger over the construction-meeting pattern defaults.
    pub fn new() -> LabelResult<Self> {
        Self::from_sources(&PatternSources::construction_defaults())
    }

    /// Build a tagger over custom pattern sources.
    pub fn from_sources(sources: &PatternSources) -> LabelResult<Self> {
        let table = PatternTable::compile(sources)?;
        info!(patterns = table.len(), "RuleTagger initialized");
        Ok(Self { table })
    }

    /// Apply every rule category to `text`.
    pub fn tag_content(&self, text: &str) -> EngineOutput {
        let output = EngineOutput {
            source: TagSource::Rule,
            content_type: self.detect_content_type(text),
            domains: self.detect_domains(text),
            priority: self.detect_priority(text),
            stakeholders: self.detect_stakeholders(text),
            custom_tags: self.extract_custom_tags(text),
        };
        debug!(
            content_type = ?output.content_type,
            domains = output.domains.len(),
            priority = ?output.priority,
            stakeholders = output.stakeholders.len(),
            custom_tags = output.custom_tags.len(),
            "rule tagging complete"
        );
        output
    }

    /// The content type with the strictly highest match count. Ties go to the
    /// value declared first; no match at all leaves the type unset.
    pub fn detect_content_type(&self, text: &str) -> Option<ContentType> {
        let mut best: Option<(ContentType, usize)> = None;
        for pattern in &self.table.content_types {
            let count = pattern.regex.find_iter(text).count();
            if count == 0 {
                continue;
            }
            if best.map_or(true, |(_, best_count)| count > best_count) {
                best = Some((pattern.value, count));
            }
        }
        best.map(|(value, _)| value)
    }

    /// Every domain whose pattern occurs anywhere in the text.
    pub fn detect_domains(&self, text: &str) -> BTreeSet<Domain> {
        self.table
            .domains
            .iter()
            .filter(|p| p.regex.is_match(text))
            .map(|p| p.value)
            .collect()
    }

    /// The first priority (HIGH, MEDIUM, LOW) whose pattern matches.
    pub fn detect_priority(&self, text: &str) -> Option<Priority> {
        self.table
            .priorities
            .iter()
            .find(|p| p.regex.is_match(text))
            .map(|p| p.value)
    }

    /// Every stakeholder whose pattern occurs anywhere in the text.
    pub fn detect_stakeholders(&self, text: &str) -> BTreeSet<Stakeholder> {
        self.table
            .stakeholders
            .iter()
            .filter(|p| p.regex.is_match(text))
            .map(|p| p.value)
            .collect()
    }

    /// Dates, amounts, percentages, then locations; every match is kept.
    pub fn extract_custom_tags(&self, text: &str) -> Vec<Tag> {
        let mut tags = Vec::new();
        for extractor in &self.table.extractors {
            extractor.extract_into(text, &mut tags);
        }
        tags
    }

    pub fn table(&self) -> &PatternTable {
        &self.table
    }
}

impl ITagger for RuleTagger {
    fn source(&self) -> TagSource {
        TagSource::Rule
    }

    fn tag_content(&self, text: &str, _context: Option<&TagContext>) -> LabelResult<EngineOutput> {
        Ok(RuleTagger::tag_content(self, text))
    }

    fn name(&self) -> &str {
        "rule-tagger"
    }
}
