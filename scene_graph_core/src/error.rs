// Error type for the fallible edges of the crate.
//
// Graph construction itself never fails: oracle misses and malformed scene
// data are absorbed as "no room" / "no connection". Errors only come from
// parsing JSON input (config, semantic scene) and serializing exports.

/// Errors from config/scene parsing and export serialization.
#[derive(thiserror::Error, Debug)]
pub enum GraphError {
    /// Malformed JSON on input, or a serializer failure on output.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A config value outside its meaningful range.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}
