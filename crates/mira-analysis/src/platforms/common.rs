//! Common (shared source set) platform resolution.

use crate::error::AnalysisError;
use crate::library::{is_standard_library, LibraryDescriptor};
use crate::params::{expect_parameters, AnalysisParameters, CommonAnalysisParams};
use crate::resolution::PlatformResolution;
use crate::resolver::{
    classpath_declarations, ensure_same_platform, ModuleDeclarations, ResolverFactory,
    TargetEnvironment,
};
use mira_platform::{PlatformKind, TargetPlatform};
use mira_project::{Library, ModuleInfo};
use std::path::Path;
use std::sync::Arc;

/// Artifact name of the common standard library.
pub const COMMON_STDLIB_ARTIFACT: &str = "mira-stdlib-common";

/// Resolution for shared source sets analyzed against every constituent
/// platform.
#[derive(Debug, Default)]
pub struct CommonResolution;

impl CommonResolution {
    /// Create the common resolution.
    pub fn new() -> Self {
        CommonResolution
    }
}

impl PlatformResolution for CommonResolution {
    fn kind(&self) -> PlatformKind {
        PlatformKind::COMMON
    }

    fn classify_library(&self, library: &Arc<Library>) -> Vec<LibraryDescriptor> {
        let platform = TargetPlatform::common();
        if is_standard_library(library, COMMON_STDLIB_ARTIFACT) {
            vec![LibraryDescriptor::standard(Arc::clone(library), platform)]
        } else {
            vec![LibraryDescriptor::generic(Arc::clone(library), platform)]
        }
    }

    fn is_library_file_for_platform(&self, _file: &Path) -> bool {
        // Common metadata libraries are attached by the project model;
        // there is no file convention to match.
        false
    }

    fn create_resolver_factory(
        &self,
        params: &dyn AnalysisParameters,
        environment: TargetEnvironment,
        platform: &TargetPlatform,
    ) -> Result<Box<dyn ResolverFactory>, AnalysisError> {
        let params = expect_parameters::<CommonAnalysisParams>(
            PlatformKind::COMMON,
            "CommonAnalysisParams",
            params,
        )?;
        Ok(Box::new(CommonResolverFactory::new(
            params.clone(),
            environment,
            platform.clone(),
        )))
    }
}

/// Factory resolving declarations of common modules.
#[derive(Debug)]
pub struct CommonResolverFactory {
    params: CommonAnalysisParams,
    environment: TargetEnvironment,
    platform: TargetPlatform,
}

impl CommonResolverFactory {
    /// Bind a factory to `platform` under `environment`.
    pub fn new(
        params: CommonAnalysisParams,
        environment: TargetEnvironment,
        platform: TargetPlatform,
    ) -> Self {
        CommonResolverFactory {
            params,
            environment,
            platform,
        }
    }

    /// Platforms the common code is analyzed against.
    pub fn constituent_platforms(&self) -> &[PlatformKind] {
        &self.params.constituent_platforms
    }
}

impl ResolverFactory for CommonResolverFactory {
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
    use crate::library::LibraryRole;
    use mira_project::LibraryCoordinates;

    #[test]
    fn test_no_file_convention_and_no_persisted_kind() {
        let resolution = CommonResolution::new();
        assert!(!resolution.is_library_file_for_platform(Path::new("/deps/shared.mlib")));
        assert!(resolution.library_kind().is_none());
    }

    #[test]
    fn test_common_stdlib_classifies_as_standard() {
        let resolution = CommonResolution::new();
        let stdlib = Arc::new(Library::new(LibraryCoordinates::new(
            "org.mira",
            COMMON_STDLIB_ARTIFACT,
            "1.4.0",
        )));
        let descriptors = resolution.classify_library(&stdlib);
        assert_eq!(descriptors.len(), 1);
        assert_eq!(descriptors[0].role(), LibraryRole::Standard);
    }

    #[test]
    fn test_factory_records_constituents() {
        let factory = CommonResolverFactory::new(
            CommonAnalysisParams {
                constituent_platforms: vec![PlatformKind::JVM, PlatformKind::JS],
            },
            TargetEnvironment::Interactive,
            TargetPlatform::common(),
        );
        assert_eq!(factory.platform().kind(), PlatformKind::COMMON);
        assert_eq!(
            factory.constituent_platforms(),
            [PlatformKind::JVM, PlatformKind::JS]
        );
    }
}
