//! Analysis session tying registry, context, and cache together.

use crate::cache::BuiltinsCache;
use crate::context::AnalysisContext;
use crate::error::AnalysisError;
use crate::library::LibraryDescriptor;
use crate::params::AnalysisParameters;
use crate::registry::PlatformResolutionRegistry;
use crate::resolution::PlatformResolution;
use crate::resolver::{ResolverFactory, TargetEnvironment};
use mira_builtins::BuiltinDeclarations;
use mira_platform::{PlatformKind, TargetPlatform};
use mira_project::{Library, ModuleInfo};
use std::fmt;
use std::sync::Arc;

/// One analysis session over a project snapshot.
///
/// Owns the platform registry, the session context, and the built-ins
/// cache; dropping the session tears all three down together. Sessions are
/// shared across threads (`&self` throughout) and read concurrently.
pub struct AnalysisSession {
    registry: PlatformResolutionRegistry,
    context: AnalysisContext,
    builtins: BuiltinsCache,
}

impl AnalysisSession {
    /// Session dispatching through `registry`.
    pub fn new(registry: PlatformResolutionRegistry) -> Self {
        AnalysisSession {
            registry,
            context: AnalysisContext::new(),
            builtins: BuiltinsCache::new(),
        }
    }

    /// Session with the four shipped platforms registered.
    pub fn with_default_platforms() -> Self {
        Self::new(PlatformResolutionRegistry::with_default_platforms())
    }

    /// The platform registry.
    pub fn registry(&self) -> &PlatformResolutionRegistry {
        &self.registry
    }

    /// The session context.
    pub fn context(&self) -> &AnalysisContext {
        &self.context
    }

    /// The built-ins cache.
    pub fn builtins_cache(&self) -> &BuiltinsCache {
        &self.builtins
    }

    /// Built-in declarations for `module`.
    ///
    /// Looks up the module's platform resolution, derives the cache key,
    /// and returns the cached instance, constructing it on first access.
    /// Equal keys observe the identical instance for the whole session.
    pub fn builtins_for(
        &self,
        module: &dyn ModuleInfo,
    ) -> Result<Arc<BuiltinDeclarations>, AnalysisError> {
        let resolution = self.registry.resolution_for(module.platform().kind())?;
        let environment = module.runtime_environment();
        let key = resolution.builtins_cache_key(module, environment);
        self.builtins.get_or_create(key, || {
            resolution.create_builtins(module, &self.context, environment)
        })
    }

    /// Fresh resolver factory for modules of `platform`.
    pub fn resolver_factory_for(
        &self,
        platform: &TargetPlatform,
        params: &dyn AnalysisParameters,
        environment: TargetEnvironment,
    ) -> Result<Box<dyn ResolverFactory>, AnalysisError> {
        let resolution = self.registry.resolution_for(platform.kind())?;
        resolution.create_resolver_factory(params, environment, platform)
    }

    /// Classify `library` under the platform `kind`.
    pub fn classify_library(
        &self,
        kind: PlatformKind,
        library: &Arc<Library>,
    ) -> Result<Vec<LibraryDescriptor>, AnalysisError> {
        Ok(self.registry.resolution_for(kind)?.classify_library(library))
    }
}

impl fmt::Debug for AnalysisSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnalysisSession")
            .field("registry", &self.registry)
            .field("cached_builtins", &self.builtins.len())
            .finish()
    }
}
