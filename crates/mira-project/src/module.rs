//! Module handles consumed by the analysis engine.

use crate::deps::DependencyGraph;
use crate::library::Library;
use crate::runtime::RuntimeEnvironment;
use mira_platform::TargetPlatform;
use std::fmt;
use std::sync::Arc;

/// Read-only view of a unit of source or binary code under analysis.
///
/// Implementations are owned by the host project model. The analysis engine
/// reads the declared target platform, the optional runtime-environment
/// dependency, and a snapshot of the visible classpath; it never mutates
/// the module.
pub trait ModuleInfo: fmt::Debug + Send + Sync {
    /// Stable module name.
    fn name(&self) -> &str;

    /// Declared compilation target.
    fn platform(&self) -> &TargetPlatform;

    /// The runtime environment this module compiles against, if any.
    fn runtime_environment(&self) -> Option<&RuntimeEnvironment> {
        None
    }

    /// `Some` iff this module is the canonical representation of an
    /// installed runtime environment (the environment's own core modules).
    fn as_runtime_environment(&self) -> Option<&RuntimeEnvironment> {
        None
    }

    /// Point-in-time snapshot of the libraries visible to this module, in
    /// stable order.
    fn library_dependencies(&self) -> Vec<Arc<Library>>;
}

/// A source module declared by the host project.
#[derive(Debug, Clone)]
pub struct SourceModule {
    name: String,
    platform: TargetPlatform,
    runtime_environment: Option<RuntimeEnvironment>,
    graph: Arc<DependencyGraph>,
}

impl SourceModule {
    /// Create a module resolving its classpath through `graph`.
    pub fn new(
        name: impl Into<String>,
        platform: TargetPlatform,
        graph: Arc<DependencyGraph>,
    ) -> Self {
        SourceModule {
            name: name.into(),
            platform,
            runtime_environment: None,
            graph,
        }
    }

    /// Declare the runtime environment this module compiles against.
    pub fn with_runtime_environment(mut self, environment: RuntimeEnvironment) -> Self {
        self.runtime_environment = Some(environment);
        self
    }
}

impl ModuleInfo for SourceModule {
    fn name(&self) -> &str {
        &self.name
    }

    fn platform(&self) -> &TargetPlatform {
        &self.platform
    }

    fn runtime_environment(&self) -> Option<&RuntimeEnvironment> {
        self.runtime_environment.as_ref()
    }

    fn library_dependencies(&self) -> Vec<Arc<Library>> {
        self.graph.transitive_libraries(&self.name)
    }
}

/// The canonical module representation of an installed runtime environment.
///
/// Analyzing an environment's own core libraries goes through this handle.
#[derive(Debug, Clone)]
pub struct SdkModule {
    environment: RuntimeEnvironment,
    platform: TargetPlatform,
    core_libraries: Vec<Arc<Library>>,
}

impl SdkModule {
    /// Represent `environment` as an analyzable module.
    pub fn new(environment: RuntimeEnvironment, platform: TargetPlatform) -> Self {
        SdkModule {
            environment,
            platform,
            core_libraries: Vec::new(),
        }
    }

    /// Attach one of the environment's own core libraries.
    pub fn with_core_library(mut self, library: Arc<Library>) -> Self {
        self.core_libraries.push(library);
        self
    }

    /// The environment this module represents.
    pub fn environment(&self) -> &RuntimeEnvironment {
        &self.environment
    }
}

impl ModuleInfo for SdkModule {
    fn name(&self) -> &str {
        self.environment.name()
    }

    fn platform(&self) -> &TargetPlatform {
        &self.platform
    }

    fn runtime_environment(&self) -> Option<&RuntimeEnvironment> {
        Some(&self.environment)
    }

    fn as_runtime_environment(&self) -> Option<&RuntimeEnvironment> {
        Some(&self.environment)
    }

    fn library_dependencies(&self) -> Vec<Arc<Library>> {
        self.core_libraries.clone()
    }
}
