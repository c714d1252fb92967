// Single source of truth for all default values.

// --- Embeddings ---
pub const DEFAULT_EMBEDDING_PROVIDER: &str = "http";
pub const DEFAULT_EMBEDDING_BASE_URL: &str = "http://localhost:11434";
pub const DEFAULT_EMBEDDING_MODEL: &str = "sonoisa/sentence-bert-base-ja-mean-tokens-v2";
pub const DEFAULT_EMBEDDING_DIMENSIONS: usize = 768;
pub const DEFAULT_FALLBACK_MODEL: &str =
    "sentence-transformers/paraphrase-multilingual-MiniLM-L12-v2";
pub const DEFAULT_FALLBACK_DIMENSIONS: usize = 384;
pub const DEFAULT_HASHING_FALLBACK: bool = true;
pub const DEFAULT_HASHING_DIMENSIONS: usize = 256;
pub const DEFAULT_HEALTH_CHECK_TIMEOUT_MS: u64 = 5_000;

// --- Classifier ---
pub const DEFAULT_CONTENT_TYPE_THRESHOLD: f64 = 0.6;
pub const DEFAULT_PRIORITY_THRESHOLD: f64 = 0.5;
pub const DEFAULT_DOMAIN_THRESHOLD: f64 = 0.5;
pub const DEFAULT_STAKEHOLDER_THRESHOLD: f64 = 0.5;
pub const DEFAULT_MAX_MULTI_LABELS: usize = 3;

// --- Fusion ---
pub const DEFAULT_FUSION_ENABLE_ML: bool = true;
pub const DEFAULT_CONTENT_TYPE_OVERRIDE_THRESHOLD: f64 = 0.7;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
