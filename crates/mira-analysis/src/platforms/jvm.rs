//! JVM platform resolution.
//!
//! The JVM is the one shipped platform whose core vocabulary depends on an
//! installed runtime: modules compiled against different JDKs must not
//! share a built-ins instance, so the cache key carries the runtime
//! environment and the vocabulary is assembled from the module's
//! classpath.

use crate::cache::BuiltinsCacheKey;
use crate::context::AnalysisContext;
use crate::error::{AnalysisError, MissingCoreReason};
use crate::library::{is_reflection_library, is_standard_library, LibraryDescriptor};
use crate::params::{expect_parameters, AnalysisParameters, JvmAnalysisParams};
use crate::resolution::PlatformResolution;
use crate::resolver::{
    classpath_declarations, ensure_same_platform, ModuleDeclarations, ResolverFactory,
    TargetEnvironment,
};
use mira_builtins::BuiltinDeclarations;
use mira_platform::{PlatformKind, TargetPlatform};
use mira_project::{Library, ModuleInfo, RuntimeEnvironment};
use std::path::Path;
use std::sync::Arc;

/// Artifact name of the JVM standard library.
pub const JVM_STDLIB_ARTIFACT: &str = "mira-stdlib";

/// Resolution for modules and libraries targeting the JVM.
#[derive(Debug, Default)]
pub struct JvmResolution;

impl JvmResolution {
    /// Create the JVM resolution.
    pub fn new() -> Self {
        JvmResolution
    }

    fn dependency_builtins(
        module: &dyn ModuleInfo,
        environment: &RuntimeEnvironment,
    ) -> Result<Arc<BuiltinDeclarations>, AnalysisError> {
        let missing = |reason| AnalysisError::MissingCoreDeclarations {
            module: module.name().to_string(),
            environment: environment.name().to_string(),
            reason,
        };

        let libraries = module.library_dependencies();
        let stdlib = libraries
            .iter()
            .find(|library| is_standard_library(library, JVM_STDLIB_ARTIFACT))
            .ok_or_else(|| missing(MissingCoreReason::NoStandardLibrary))?;

        let declarations =
            BuiltinDeclarations::from_exported_types(stdlib.declared_types().iter().cloned())
                .map_err(|error| missing(MissingCoreReason::IncompleteIndex(error)))?;
        Ok(Arc::new(declarations))
    }
}

impl PlatformResolution for JvmResolution {
    fn kind(&self) -> PlatformKind {
        PlatformKind::JVM
    }

    fn classify_library(&self, library: &Arc<Library>) -> Vec<LibraryDescriptor> {
        let platform = TargetPlatform::jvm();
        if is_standard_library(library, JVM_STDLIB_ARTIFACT) {
            vec![LibraryDescriptor::standard(Arc::clone(library), platform)]
        } else if is_reflection_library(library) {
            vec![LibraryDescriptor::reflection(Arc::clone(library), platform)]
        } else {
            vec![LibraryDescriptor::generic(Arc::clone(library), platform)]
        }
    }

    fn is_library_file_for_platform(&self, _file: &Path) -> bool {
        // JVM archives are attached through the project model, not found by
        // extension scanning. TODO: revisit once loose-jar discovery lands.
        false
    }

    fn create_resolver_factory(
        &self,
        params: &dyn AnalysisParameters,
        environment: TargetEnvironment,
        platform: &TargetPlatform,
    ) -> Result<Box<dyn ResolverFactory>, AnalysisError> {
        let params = expect_parameters::<JvmAnalysisParams>(
            PlatformKind::JVM,
            "JvmAnalysisParams",
            params,
        )?;
        Ok(Box::new(JvmResolverFactory::new(
            params.clone(),
            environment,
            platform.clone(),
        )))
    }

    fn builtins_cache_key(
        &self,
        module: &dyn ModuleInfo,
        runtime_environment: Option<&RuntimeEnvironment>,
    ) -> BuiltinsCacheKey {
        match runtime_environment {
            Some(environment) if module.as_runtime_environment().is_none() => {
                BuiltinsCacheKey::ForRuntimeEnvironment(environment.clone())
            }
            _ => BuiltinsCacheKey::Default,
        }
    }

    fn create_builtins(
        &self,
        module: &dyn ModuleInfo,
        context: &AnalysisContext,
        runtime_environment: Option<&RuntimeEnvironment>,
    ) -> Result<Arc<BuiltinDeclarations>, AnalysisError> {
        match runtime_environment {
            Some(environment) if module.as_runtime_environment().is_none() => {
                Self::dependency_builtins(module, environment)
            }
            _ => Ok(context.default_builtins()),
        }
    }
}

/// Factory resolving declarations of JVM modules.
#[derive(Debug)]
pub struct JvmResolverFactory {
    params: JvmAnalysisParams,
    environment: TargetEnvironment,
    platform: TargetPlatform,
}

impl JvmResolverFactory {
    /// Bind a factory to `platform` under `environment`.
    pub fn new(
        params: JvmAnalysisParams,
        environment: TargetEnvironment,
        platform: TargetPlatform,
    ) -> Self {
        JvmResolverFactory {
            params,
            environment,
            platform,
        }
    }

    /// JVM release the factory was configured with.
    pub fn target_release(&self) -> u32 {
        self.params.target_release
    }
}

impl ResolverFactory for JvmResolverFactory {
    fn platform(&self) -> &TargetPlatform {
        &self.platform
    }

    fn environment(&self) -> TargetEnvironment {
        self.environment
    }

    fn resolve_declarations(
        &self,
        module: &dyn ModuleInfo,
    ) -> Result<ModuleDeclarations, AnalysisError> {
        ensure_same_platform(&self.platform, module)?;
        Ok(ModuleDeclarations {
            module: module.name().to_string(),
            platform: self.platform.clone(),
            types: classpath_declarations(module),
        })
    }
}
