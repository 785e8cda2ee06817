//! Native platform resolution.

use crate::error::AnalysisError;
use crate::library::{is_standard_library, LibraryDescriptor, PersistedLibraryKind};
use crate::params::{expect_parameters, AnalysisParameters, NativeAnalysisParams};
use crate::resolution::PlatformResolution;
use crate::resolver::{
    classpath_declarations, ensure_same_platform, ModuleDeclarations, ResolverFactory,
    TargetEnvironment,
};
use mira_platform::{PlatformKind, TargetPlatform};
use mira_project::{Library, ModuleInfo};
use std::path::Path;
use std::sync::Arc;

/// Artifact name of the native standard library.
pub const NATIVE_STDLIB_ARTIFACT: &str = "mira-stdlib-native";

/// File extension of packed native libraries.
pub const NATIVE_LIBRARY_EXTENSION: &str = "nlib";

/// Persisted tag for native libraries in host storage.
pub const NATIVE_LIBRARY_KIND: PersistedLibraryKind =
    PersistedLibraryKind::from_static("mira.native.library");

/// Resolution for modules and libraries targeting native backends.
///
/// The native core vocabulary ships with the compiler, so built-ins come
/// from the session default (the trait's default built-ins methods apply).
#[derive(Debug, Default)]
pub struct NativeResolution;

impl NativeResolution {
    /// Create the native resolution.
    pub fn new() -> Self {
        NativeResolution
    }
}

impl PlatformResolution for NativeResolution {
    fn kind(&self) -> PlatformKind {
        PlatformKind::NATIVE
    }

    fn classify_library(&self, library: &Arc<Library>) -> Vec<LibraryDescriptor> {
        let platform = TargetPlatform::native();
        if is_standard_library(library, NATIVE_STDLIB_ARTIFACT) {
            vec![LibraryDescriptor::standard(Arc::clone(library), platform)]
        } else {
            vec![LibraryDescriptor::generic(Arc::clone(library), platform)]
        }
    }

    fn is_library_file_for_platform(&self, file: &Path) -> bool {
        file.extension()
            .map_or(false, |extension| extension == NATIVE_LIBRARY_EXTENSION)
    }

    fn library_kind(&self) -> Option<PersistedLibraryKind> {
        Some(NATIVE_LIBRARY_KIND)
    }

    fn create_resolver_factory(
        &self,
        params: &dyn AnalysisParameters,
        environment: TargetEnvironment,
        platform: &TargetPlatform,
    ) -> Result<Box<dyn ResolverFactory>, AnalysisError> {
        let params = expect_parameters::<NativeAnalysisParams>(
            PlatformKind::NATIVE,
            "NativeAnalysisParams",
            params,
        )?;
        Ok(Box::new(NativeResolverFactory::new(
            params.clone(),
            environment,
            platform.clone(),
        )))
    }
}

/// Factory resolving declarations of native modules.
#[derive(Debug)]
pub struct NativeResolverFactory {
    params: NativeAnalysisParams,
    environment: TargetEnvironment,
    platform: TargetPlatform,
}

impl NativeResolverFactory {
    /// Bind a factory to `platform` under `environment`.
    pub fn new(
        params: NativeAnalysisParams,
        environment: TargetEnvironment,
        platform: TargetPlatform,
    ) -> Self {
        NativeResolverFactory {
            params,
            environment,
            platform,
        }
    }

    /// Target triple the factory was configured with.
    pub fn target_triple(&self) -> &str {
        &self.params.target_triple
    }
}

impl ResolverFactory for NativeResolverFactory {
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
