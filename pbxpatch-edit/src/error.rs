//! Error types for pbxpatch-edit.
//!
//! Two tiers:
//! - Anchor miss (exit code 2): one or more steps failed to locate their
//!   anchor or old-block text, and the run aborted before writing.
//! - Runtime errors (exit code 1): I/O errors, invalid arguments.

use pbxpatch_types::ops::StepId;
use thiserror::Error;

/// The top-level error type for patch runs.
#[derive(Debug, Error)]
pub enum PatchError {
    /// At least one step's lookup text was absent from the document.
    /// The target file was left untouched.
    #[error("anchor miss: {message}")]
    AnchorMiss {
        /// The steps that failed to match, in catalog order.
        missing: Vec<StepId>,
        /// A descriptive message naming each missed step and its anchor.
        message: String,
    },

    /// A runtime/tool error occurred (I/O, invalid path, bad config).
    #[error("runtime error: {0}")]
    Runtime(#[from] anyhow::Error),
}

impl PatchError {
    /// Returns true if this is an anchor-miss abort (exit code 2).
    pub fn is_anchor_miss(&self) -> bool {
        matches!(self, PatchError::AnchorMiss { .. })
    }

    /// Returns the recommended exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            PatchError::AnchorMiss { .. } => 2,
            PatchError::Runtime(_) => 1,
        }
    }
}

/// Result type alias using PatchError.
pub type PatchResult<T> = Result<T, PatchError>;

#[cfg(test)]
mod tests {
    use super::PatchError;
    use pbxpatch_types::ops::StepId;

    #[test]
    fn anchor_miss_reports_exit_code_2() {
        let err = PatchError::AnchorMiss {
            missing: vec![StepId::ProductsGroupChild],
            message: "products-group-child".to_string(),
        };
        assert!(err.is_anchor_miss());
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().contains("anchor miss"));
        assert!(err.to_string().contains("products-group-child"));
    }

    #[test]
    fn runtime_error_reports_exit_code_1() {
        let err = PatchError::from(anyhow::anyhow!("boom"));
        assert!(!err.is_anchor_miss());
        assert_eq!(err.exit_code(), 1);
        assert!(err.to_string().contains("runtime error"));
    }
}
