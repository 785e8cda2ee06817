//! Analysis error taxonomy.

use mira_builtins::BuiltinsError;
use mira_platform::PlatformKind;
use thiserror::Error;

/// Errors surfaced by the platform resolution subsystem.
///
/// Every variant indicates a configuration or data inconsistency rather
/// than a transient condition: failures propagate synchronously to the
/// caller and are never retried here. A failed built-ins construction
/// leaves its cache key unpopulated.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// A platform operation received input meant for a different platform.
    #[error("{platform} resolution expected {expected}, got {actual}")]
    Configuration {
        /// Platform whose contract was violated.
        platform: PlatformKind,
        /// What the platform expected.
        expected: &'static str,
        /// What was actually supplied.
        actual: String,
    },

    /// Dependency-derived built-ins construction could not assemble the
    /// core type vocabulary from the module's classpath.
    #[error(
        "missing core declarations for module `{module}` against runtime environment `{environment}`: {reason}"
    )]
    MissingCoreDeclarations {
        /// Module whose built-ins were requested.
        module: String,
        /// Runtime environment the module compiles against.
        environment: String,
        /// Why the vocabulary could not be assembled.
        #[source]
        reason: MissingCoreReason,
    },

    /// No resolution is registered for the requested platform kind.
    #[error("no platform resolution registered for {0}")]
    UnsupportedPlatform(PlatformKind),
}

/// Cause of a [`AnalysisError::MissingCoreDeclarations`] failure.
#[derive(Debug, Error)]
pub enum MissingCoreReason {
    /// No standard library was found among the module's dependencies.
    #[error("no standard library on the classpath")]
    NoStandardLibrary,

    /// The standard library's exported type index is incomplete.
    #[error(transparent)]
    IncompleteIndex(#[from] BuiltinsError),
}
