//! Deterministic embedding providers for tests.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use label_core::traits::IEmbeddingProvider;
use label_core::{EmbeddingError, LabelResult};

/// One dimension per keyword: component `i` is 1.0 when the text contains
/// `keywords[i]`, else 0.0. Similarities are therefore easy to reason about
/// in tests that pair it with a custom reference set.
pub struct KeywordProvider {
    keywords: Vec<String>,
    calls: AtomicUsize,
}

impl KeywordProvider {
    pub fn new(keywords: &[&str]) -> Self {
        Self {
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of `embed` / `embed_batch` calls served so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }

    fn vectorize(&self, text: &str) -> Vec<f32> {
        self.keywords
            .iter()
            .map(|k| if text.contains(k.as_str()) { 1.0 } else { 0.0 })
            .collect()
    }
}

impl IEmbeddingProvider for KeywordProvider {
    fn embed(&self, text: &str) -> LabelResult<Vec<f32>> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        Ok(self.vectorize(text))
    }

    fn embed_batch(&self, texts: &[String]) -> LabelResult<Vec<Vec<f32>>> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        Ok(texts.iter().map(|t| self.vectorize(t)).collect())
    }

    fn dimensions(&self) -> usize {
        self.keywords.len()
    }

    fn name(&self) -> &str {
        "keyword-stub"
    }

    fn is_available(&self) -> bool {
        true
    }
}

/// Always fails with `InferenceFailed`.
pub struct FailingProvider {
    available: bool,
    dimensions: usize,
}

impl FailingProvider {
    /// A provider that reports itself available but fails every call.
    pub fn new(dimensions: usize) -> Self {
        Self {
            available: true,
            dimensions,
        }
    }

    /// A provider that reports itself unavailable.
    pub fn unavailable(dimensions: usize) -> Self {
        Self {
            available: false,
            dimensions,
        }
    }
}

impl IEmbeddingProvider for FailingProvider {
    fn embed(&self, _text: &str) -> LabelResult<Vec<f32>> {
        Err(EmbeddingError::InferenceFailed {
            reason: "simulated embedding backend failure".to_string(),
        }
        .into())
    }

    fn embed_batch(&self, _texts: &[String]) -> LabelResult<Vec<Vec<f32>>> {
        Err(EmbeddingError::InferenceFailed {
            reason: "simulated embedding backend failure".to_string(),
        }
        .into())
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        "failing-stub"
    }

    fn is_available(&self) -> bool {
        self.available
    }
}

/// Delegates to an inner provider until `fail()` is called, then fails
/// every call. Lets a classifier initialize successfully and then lose its
/// backend mid-run.
pub struct SwitchableProvider<P> {
    inner: P,
    failing: AtomicBool,
}

impl<P: IEmbeddingProvider> SwitchableProvider<P> {
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            failing: AtomicBool::new(false),
        }
    }

    pub fn fail(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    pub fn recover(&self) {
        self.failing.store(false, Ordering::SeqCst);
    }

    fn check(&self) -> LabelResult<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(EmbeddingError::ProviderUnavailable {
                provider: self.inner.name().to_string(),
            }
            .into());
        }
        Ok(())
    }
}

impl<P: IEmbeddingProvider> IEmbeddingProvider for SwitchableProvider<P> {
    fn embed(&self, text: &str) -> LabelResult<Vec<f32>> {
        self.check()?;
        self.inner.embed(text)
    }

    fn embed_batch(&self, texts: &[String]) -> LabelResult<Vec<Vec<f32>>> {
        self.check()?;
        self.inner.embed_batch(texts)
    }

    fn dimensions(&self) -> usize {
        self.inner.dimensions()
    }

    fn name(&self) -> &str {
        self.inner.name()
    }

    fn is_available(&self) -> bool {
        !self.failing.load(Ordering::SeqCst) && self.inner.is_available()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_provider_marks_present_keywords() {
        let p = KeywordProvider::new(&["安全", "品質", "工程"]);
        assert_eq!(p.embed("安全と工程").unwrap(), vec![1.0, 0.0, 1.0]);
        assert_eq!(p.dimensions(), 3);
        assert_eq!(p.calls(), 1);
    }

    #[test]
    fn switchable_provider_fails_after_switch() {
        let p = SwitchableProvider::new(KeywordProvider::new(&["a"]));
        assert!(p.embed("a").is_ok());
        p.fail();
        assert!(p.embed("a").is_err());
        assert!(!p.is_available());
        p.recover();
        assert!(p.embed("a").is_ok());
    }

    #[test]
    fn failing_provider_always_errs() {
        let p = FailingProvider::new(4);
        assert!(p.embed("x").is_err());
        assert!(p.embed_batch(&["x".to_string()]).is_err());
        assert!(!FailingProvider::unavailable(4).is_available());
    }
}
