// Tag categories and well-known tag values shared across engines.

// --- Rule extraction categories ---
pub const CATEGORY_DATE: &str = "date";
pub const CATEGORY_AMOUNT: &str = "amount";
pub const CATEGORY_PERCENTAGE: &str = "percentage";
pub const CATEGORY_LOCATION: &str = "location";

// --- Classifier diagnostics ---
pub const CATEGORY_ML_CONFIDENCE: &str = "ml_confidence";
pub const CONFIDENCE_KEY_CONTENT_TYPE: &str = "content_type";
pub const CONFIDENCE_KEY_PRIORITY: &str = "priority";
pub const CONFIDENCE_KEY_DOMAIN: &str = "domain";
pub const CONFIDENCE_KEY_STAKEHOLDER: &str = "stakeholder";
pub const CONFIDENCE_KEY_OVERALL: &str = "overall";

// --- System diagnostics ---
pub const CATEGORY_ERROR: &str = "error";
pub const ERROR_ML_TAGGING_FAILED: &str = "ml_tagging_failed";

// --- Metadata keys ---
pub const METADATA_START: &str = "start";
pub const METADATA_END: &str = "end";

/// Component name used in degradation events emitted by the provider chain.
pub const EMBEDDINGS_COMPONENT: &str = "embeddings";
