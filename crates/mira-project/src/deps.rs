//! Dependency graph snapshots provided by the project model.

use crate::library::Library;
use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::VecDeque;
use std::sync::Arc;

/// Module dependency edges plus per-module library attachments.
///
/// The graph is owned by the host project model and handed to the analysis
/// engine as a read-only, point-in-time snapshot: one built-ins
/// construction sees one consistent state.
#[derive(Debug, Default, Clone)]
pub struct DependencyGraph {
    /// Adjacency list: module -> modules it depends on.
    edges: FxHashMap<String, Vec<String>>,
    /// Libraries attached directly to a module.
    libraries: FxHashMap<String, Vec<Arc<Library>>>,
}

impl DependencyGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a module without dependencies.
    pub fn add_module(&mut self, module: impl Into<String>) {
        self.edges.entry(module.into()).or_default();
    }

    /// Record that `module` depends on `depends_on`.
    ///
    /// Both endpoints are added to the graph if missing.
    pub fn add_dependency(&mut self, module: impl Into<String>, depends_on: impl Into<String>) {
        let depends_on = depends_on.into();
        self.edges.entry(depends_on.clone()).or_default();
        self.edges.entry(module.into()).or_default().push(depends_on);
    }

    /// Attach `library` directly to `module`.
    pub fn add_library(&mut self, module: impl Into<String>, library: Arc<Library>) {
        let module = module.into();
        self.edges.entry(module.clone()).or_default();
        self.libraries.entry(module).or_default().push(library);
    }

    /// Modules `module` depends on directly.
    pub fn direct_dependencies(&self, module: &str) -> &[String] {
        self.edges.get(module).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Libraries attached directly to `module`.
    pub fn direct_libraries(&self, module: &str) -> &[Arc<Library>] {
        self.libraries.get(module).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All modules known to the graph, in unspecified order.
    pub fn modules(&self) -> impl Iterator<Item = &str> {
        self.edges.keys().map(String::as_str)
    }

    /// Libraries reachable from `module` through its dependency closure.
    ///
    /// Breadth-first, deduplicated by coordinates, in discovery order. Each
    /// module is visited once, so cyclic edges terminate.
    pub fn transitive_libraries(&self, module: &str) -> Vec<Arc<Library>> {
        let mut visited: FxHashSet<&str> = FxHashSet::default();
        let mut seen_coordinates = FxHashSet::default();
        let mut queue: VecDeque<&str> = VecDeque::new();
        let mut result = Vec::new();

        visited.insert(module);
        queue.push_back(module);

        while let Some(current) = queue.pop_front() {
            if let Some(libraries) = self.libraries.get(current) {
                for library in libraries {
                    if seen_coordinates.insert(library.coordinates().clone()) {
                        result.push(Arc::clone(library));
                    }
                }
            }
            if let Some(dependencies) = self.edges.get(current) {
                for dependency in dependencies {
                    if visited.insert(dependency.as_str()) {
                        queue.push_back(dependency);
                    }
                }
            }
        }

        result
    }
}
