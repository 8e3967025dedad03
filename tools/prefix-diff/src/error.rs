use std::path::PathBuf;
use std::process::ExitCode;

/// All errors produced by prefix-diff.
///
/// Variants are split into two categories:
/// - **Infrastructure errors** (exit code 2): unreadable files, bad config, I/O failures
/// - **Operational errors** (exit code 1): input the engines cannot do anything with
#[derive(thiserror::Error, Debug)]
pub enum PrefixDiffError {
    // ── Infrastructure errors (exit code 2) ──────────────────────────

    #[error("Config parse error: {0}")]
    ConfigParse(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ── Operational errors (exit code 1) ─────────────────────────────

    #[error("Nothing to compile in {path}")]
    EmptySource { path: PathBuf },

    #[error("Parse error in {path}: {message}")]
    ParseFailed { path: PathBuf, message: String },
}

impl PrefixDiffError {
    /// Map each error variant to its process exit code.
    ///
    /// - `2`: infrastructure error (bad config, I/O)
    /// - `1`: operational failure (unusable input)
    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.exit_code_num())
    }

    /// Raw numeric exit code.
    pub fn exit_code_num(&self) -> u8 {
        match self {
            Self::ConfigParse(_) | Self::InvalidConfig(_) | Self::Io(_) | Self::Json(_) => 2,
            Self::EmptySource { .. } | Self::ParseFailed { .. } => 1,
        }
    }
}

impl From<toml::de::Error> for PrefixDiffError {
    fn from(e: toml::de::Error) -> Self {
        Self::ConfigParse(e.to_string())
    }
}

impl From<prefix_engine::EngineError> for PrefixDiffError {
    fn from(e: prefix_engine::EngineError) -> Self {
        Self::InvalidConfig(e.to_string())
    }
}
