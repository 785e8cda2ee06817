//! The per-platform capability contract.

use crate::cache::BuiltinsCacheKey;
use crate::context::AnalysisContext;
use crate::error::AnalysisError;
use crate::library::{LibraryDescriptor, PersistedLibraryKind};
use crate::params::AnalysisParameters;
use crate::resolver::{ResolverFactory, TargetEnvironment};
use mira_builtins::BuiltinDeclarations;
use mira_platform::{PlatformKind, TargetPlatform};
use mira_project::{Library, ModuleInfo, RuntimeEnvironment};
use std::fmt;
use std::path::Path;
use std::sync::Arc;

/// Everything one target platform plugs into the analysis engine.
///
/// One implementation per platform kind, registered once at session start
/// and looked up for every module and library the engine encounters. The
/// default method bodies cover platforms whose core vocabulary ships with
/// the compiler; platforms whose vocabulary comes from an installed
/// runtime override the built-ins pair (see the JVM variant).
pub trait PlatformResolution: fmt::Debug + Send + Sync {
    /// Platform kind this implementation serves.
    fn kind(&self) -> PlatformKind;

    /// Classify a binary dependency.
    ///
    /// Total: every library maps to at least one descriptor, and libraries
    /// matching no identity predicate map to
    /// [`Generic`](crate::LibraryRole::Generic).
    fn classify_library(&self, library: &Arc<Library>) -> Vec<LibraryDescriptor>;

    /// Whether a loose binary file belongs to this platform's library
    /// search path.
    ///
    /// Pure predicate with no side effects. Platforms with no
    /// distinguishing file convention return `false`.
    fn is_library_file_for_platform(&self, file: &Path) -> bool;

    /// Persisted classification tag for host storage, if the platform
    /// defines one.
    fn library_kind(&self) -> Option<PersistedLibraryKind> {
        None
    }

    /// Construct a fresh resolver factory bound to `platform` and
    /// `environment`.
    ///
    /// Fails with [`AnalysisError::Configuration`] when `params` is not
    /// the variant this platform expects; no factory is constructed in
    /// that case.
    fn create_resolver_factory(
        &self,
        params: &dyn AnalysisParameters,
        environment: TargetEnvironment,
        platform: &TargetPlatform,
    ) -> Result<Box<dyn ResolverFactory>, AnalysisError>;

    /// Cache key selecting the built-ins instance for `module`.
    ///
    /// Derivation is deterministic: equal `(module, runtime_environment)`
    /// inputs always produce equal keys.
    fn builtins_cache_key(
        &self,
        module: &dyn ModuleInfo,
        runtime_environment: Option<&RuntimeEnvironment>,
    ) -> BuiltinsCacheKey {
        let _ = (module, runtime_environment);
        BuiltinsCacheKey::Default
    }

    /// Produce the built-ins instance for `module`.
    ///
    /// Called once per cache key by the session's built-ins cache; must
    /// agree with [`Self::builtins_cache_key`] on when the default
    /// instance applies.
    fn create_builtins(
        &self,
        module: &dyn ModuleInfo,
        context: &AnalysisContext,
        runtime_environment: Option<&RuntimeEnvironment>,
    ) -> Result<Arc<BuiltinDeclarations>, AnalysisError> {
        let _ = (module, runtime_environment);
        Ok(context.default_builtins())
    }
}
