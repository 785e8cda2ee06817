//! JS platform resolution.

use crate::error::AnalysisError;
use crate::library::{is_standard_library, LibraryDescriptor, PersistedLibraryKind};
use crate::params::{expect_parameters, AnalysisParameters, JsAnalysisParams, JsModuleSystem};
use crate::resolution::PlatformResolution;
use crate::resolver::{
    classpath_declarations, ensure_same_platform, ModuleDeclarations, ResolverFactory,
    TargetEnvironment,
};
use mira_platform::{PlatformKind, TargetPlatform};
use mira_project::{Library, ModuleInfo};
use std::path::Path;
use std::sync::Arc;

/// Artifact name of the JS standard library.
pub const JS_STDLIB_ARTIFACT: &str = "mira-stdlib-js";

/// File extension of packed JS libraries.
pub const JS_LIBRARY_EXTENSION: &str = "jslib";

/// Persisted tag for JS libraries in host storage.
pub const JS_LIBRARY_KIND: PersistedLibraryKind =
    PersistedLibraryKind::from_static("mira.js.library");

/// Resolution for modules and libraries targeting JS.
///
/// The JS core vocabulary ships with the compiler, so built-ins come from
/// the session default (the trait's default built-ins methods apply).
#[derive(Debug, Default)]
pub struct JsResolution;

impl JsResolution {
    /// Create the JS resolution.
    pub fn new() -> Self {
        JsResolution
    }
}

impl PlatformResolution for JsResolution {
    fn kind(&self) -> PlatformKind {
        PlatformKind::JS
    }

    fn classify_library(&self, library: &Arc<Library>) -> Vec<LibraryDescriptor> {
        let platform = TargetPlatform::js();
        if is_standard_library(library, JS_STDLIB_ARTIFACT) {
            vec![LibraryDescriptor::standard(Arc::clone(library), platform)]
        } else {
            vec![LibraryDescriptor::generic(Arc::clone(library), platform)]
        }
    }

    fn is_library_file_for_platform(&self, file: &Path) -> bool {
        file.extension()
            .map_or(false, |extension| extension == JS_LIBRARY_EXTENSION)
    }

    fn library_kind(&self) -> Option<PersistedLibraryKind> {
        Some(JS_LIBRARY_KIND)
    }

    fn create_resolver_factory(
        &self,
        params: &dyn AnalysisParameters,
        environment: TargetEnvironment,
        platform: &TargetPlatform,
    ) -> Result<Box<dyn ResolverFactory>, AnalysisError> {
        let params =
            expect_parameters::<JsAnalysisParams>(PlatformKind::JS, "JsAnalysisParams", params)?;
        Ok(Box::new(JsResolverFactory::new(
            params.clone(),
            environment,
            platform.clone(),
        )))
    }
}

/// Factory resolving declarations of JS modules.
#[derive(Debug)]
pub struct JsResolverFactory {
    params: JsAnalysisParams,
    environment: TargetEnvironment,
    platform: TargetPlatform,
}

impl JsResolverFactory {
    /// Bind a factory to `platform` under `environment`.
    pub fn new(
        params: JsAnalysisParams,
        environment: TargetEnvironment,
        platform: TargetPlatform,
    ) -> Self {
        JsResolverFactory {
            params,
            environment,
            platform,
        }
    }

    /// Module system the factory was configured with.
    pub fn module_system(&self) -> JsModuleSystem {
        self.params.module_system
    }
}

impl ResolverFactory for JsResolverFactory {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::BuiltinsCacheKey;
    use crate::library::{LibraryRole, TOOLCHAIN_GROUP};
    use mira_project::{DependencyGraph, LibraryCoordinates, RuntimeEnvironment, SourceModule};

    #[test]
    fn test_library_file_predicate_matches_the_extension() {
        let resolution = JsResolution::new();
        assert!(resolution.is_library_file_for_platform(Path::new("/deps/widgets.jslib")));
        assert!(!resolution.is_library_file_for_platform(Path::new("/deps/widgets.jar")));
        assert!(!resolution.is_library_file_for_platform(Path::new("/deps/jslib")));
    }

    #[test]
    fn test_persisted_kind() {
        assert_eq!(
            JsResolution::new().library_kind().unwrap().id(),
            "mira.js.library"
        );
    }

    #[test]
    fn test_stdlib_js_classifies_as_standard() {
        let resolution = JsResolution::new();
        let stdlib = Arc::new(Library::new(LibraryCoordinates::new(
            TOOLCHAIN_GROUP,
            JS_STDLIB_ARTIFACT,
            "1.4.0",
        )));
        let descriptors = resolution.classify_library(&stdlib);
        assert_eq!(descriptors.len(), 1);
        assert_eq!(descriptors[0].role(), LibraryRole::Standard);
        assert_eq!(descriptors[0].platform().kind(), PlatformKind::JS);
    }

    #[test]
    fn test_factory_carries_the_module_system() {
        let factory = JsResolverFactory::new(
            JsAnalysisParams {
                module_system: JsModuleSystem::CommonJs,
            },
            TargetEnvironment::Interactive,
            TargetPlatform::js(),
        );
        assert_eq!(factory.module_system(), JsModuleSystem::CommonJs);
        assert_eq!(factory.environment(), TargetEnvironment::Interactive);
    }

    #[test]
    fn test_builtins_key_ignores_runtime_environments() {
        let resolution = JsResolution::new();
        let module = SourceModule::new(
            "web",
            TargetPlatform::js(),
            Arc::new(DependencyGraph::new()),
        );
        let environment = RuntimeEnvironment::new("Node 20", "/opt/node-20");
        assert_eq!(
            resolution.builtins_cache_key(&module, Some(&environment)),
            BuiltinsCacheKey::Default
        );
    }
}
