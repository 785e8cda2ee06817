//! Resolver factories and the declarations they produce.

use crate::error::AnalysisError;
use mira_platform::TargetPlatform;
use mira_project::ModuleInfo;
use std::fmt;

/// Flavor of analysis host a factory is constructed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetEnvironment {
    /// Interactive analysis with incremental invalidation.
    Interactive,
    /// One-shot batch analysis.
    Batch,
}

/// Declarations visible to one module, as resolved by a platform factory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleDeclarations {
    /// Module the resolution was performed for.
    pub module: String,
    /// Platform the factory is bound to.
    pub platform: TargetPlatform,
    /// Sorted, deduplicated type names visible on the module's classpath.
    pub types: Vec<String>,
}

/// A constructed strategy resolving declarations of modules on one
/// platform.
///
/// Factories are created fresh per resolution request, bound to one
/// platform and one parameter set; this subsystem never caches them.
pub trait ResolverFactory: fmt::Debug + Send + Sync {
    /// Platform this factory serves.
    fn platform(&self) -> &TargetPlatform;

    /// Environment the factory was constructed for.
    fn environment(&self) -> TargetEnvironment;

    /// Resolve the type names visible to `module`.
    ///
    /// Fails with [`AnalysisError::Configuration`] when `module` targets a
    /// different platform than the factory.
    fn resolve_declarations(
        &self,
        module: &dyn ModuleInfo,
    ) -> Result<ModuleDeclarations, AnalysisError>;
}

/// Collect the sorted, deduplicated classpath type names for `module`.
pub(crate) fn classpath_declarations(module: &dyn ModuleInfo) -> Vec<String> {
    let mut types: Vec<String> = module
        .library_dependencies()
        .iter()
        .flat_map(|library| library.declared_types().iter().cloned())
        .collect();
    types.sort();
    types.dedup();
    types
}

/// Refuse modules of a platform other than the factory's.
pub(crate) fn ensure_same_platform(
    factory_platform: &TargetPlatform,
    module: &dyn ModuleInfo,
) -> Result<(), AnalysisError> {
    if module.platform().kind() == factory_platform.kind() {
        Ok(())
    } else {
        Err(AnalysisError::Configuration {
            platform: factory_platform.kind(),
            expected: "a module of the factory's platform",
            actual: format!(
                "module `{}` targeting {}",
                module.name(),
                module.platform().kind()
            ),
        })
    }
}
