//! Hashed term-frequency fallback provider.
//!
//! Generates fixed-dimension vectors by hashing terms into buckets. Japanese
//! text has no word boundaries, so runs of kana/kanji are split into
//! character bigrams; other scripts split on non-alphanumerics. Needs no
//! model server and is always available.

use std::collections::HashMap;

use label_core::traits::IEmbeddingProvider;
use label_core::LabelResult;

/// Hashing fallback embedding provider.
///
/// Deterministic and far less semantic than a sentence model, but keeps the
/// classifier usable when no embedding server is reachable.
pub struct HashingFallback {
    dimensions: usize,
}

impl HashingFallback {
    pub fn new(dimensions: usize) -> Self {
        Self {
            dimensions: dimensions.max(1),
        }
    }

    /// Hash a term into a bucket index using FNV-1a.
    fn hash_term(term: &str, dims: usize) -> usize {
        let mut h: u64 = 0xcbf29ce484222325;
        for b in term.as_bytes() {
            h ^= *b as u64;
            h = h.wrapping_mul(0x100000001b3);
        }
        (h as usize) % dims
    }

    fn is_cjk(c: char) -> bool {
        matches!(c,
            '\u{3040}'..='\u{30FF}'   // hiragana, katakana
            | '\u{3400}'..='\u{4DBF}' // CJK extension A
            | '\u{4E00}'..='\u{9FFF}' // CJK unified ideographs
            | '\u{FF66}'..='\u{FF9F}' // halfwidth katakana
        )
    }

    /// Split text into lowercase words (two chars or more) and CJK bigrams.
    fn tokenize(text: &str) -> Vec<String> {
        let mut tokens = Vec::new();
        let mut word = String::new();
        let mut run: Vec<char> = Vec::new();

        fn flush_word(word: &mut String, tokens: &mut Vec<String>) {
            if word.chars().count() >= 2 {
                tokens.push(word.to_lowercase());
            }
            word.clear();
        }

        fn flush_run(run: &mut Vec<char>, tokens: &mut Vec<String>) {
            match run.len() {
                0 => {}
                1 => tokens.push(run[0].to_string()),
                _ => tokens.extend(run.windows(2).map(|w| w.iter().collect::<String>())),
            }
            run.clear();
        }

        for c in text.chars() {
            if Self::is_cjk(c) {
                flush_word(&mut word, &mut tokens);
                run.push(c);
            } else if c.is_alphanumeric() || c == '_' {
                flush_run(&mut run, &mut tokens);
                word.push(c);
            } else {
                flush_word(&mut word, &mut tokens);
                flush_run(&mut run, &mut tokens);
            }
        }
        flush_word(&mut word, &mut tokens);
        flush_run(&mut run, &mut tokens);
        tokens
    }

    fn hashed_vector(&self, text: &str) -> Vec<f32> {
        let tokens = Self::tokenize(text);
        if tokens.is_empty() {
            return vec![0.0; self.dimensions];
        }

        let mut tf: HashMap<&str, f32> = HashMap::new();
        for tok in &tokens {
            *tf.entry(tok.as_str()).or_default() += 1.0;
        }

        let total = tokens.len() as f32;
        let mut vec = vec![0.0f32; self.dimensions];

        for (term, count) in &tf {
            let freq = count / total;
            // Longer terms carry more signal than single characters.
            let idf = 1.0 + (term.chars().count() as f32).ln();
            let bucket = Self::hash_term(term, self.dimensions);
            vec[bucket] += freq * idf;
        }

        // L2 normalize.
        let norm: f32 = vec.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > f32::EPSILON {
            for v in &mut vec {
                *v /= norm;
            }
        }

        vec
    }
}

impl IEmbeddingProvider for HashingFallback {
    fn embed(&self, text: &str) -> LabelResult<Vec<f32>> {
        Ok(self.hashed_vector(text))
    }

    fn embed_batch(&self, texts: &[String]) -> LabelResult<Vec<Vec<f32>>> {
        Ok(texts.iter().map(|t| self.hashed_vector(t)).collect())
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        "hashing-fallback"
    }

    fn is_available(&self) -> bool {
        true
    }
}
