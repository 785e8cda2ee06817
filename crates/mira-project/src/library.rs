//! Binary library model and identity metadata.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Coordinates identifying a published library.
///
/// Classification is a pure function of these coordinates; they are read
/// from the library's persisted metadata and never change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LibraryCoordinates {
    group: String,
    name: String,
    version: String,
}

impl LibraryCoordinates {
    /// Create coordinates from group, artifact name, and version.
    pub fn new(
        group: impl Into<String>,
        name: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        LibraryCoordinates {
            group: group.into(),
            name: name.into(),
            version: version.into(),
        }
    }

    /// Publishing group (e.g. `org.mira`).
    pub fn group(&self) -> &str {
        &self.group
    }

    /// Artifact name (e.g. `mira-stdlib`).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Published version.
    pub fn version(&self) -> &str {
        &self.version
    }
}

impl fmt::Display for LibraryCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group, self.name, self.version)
    }
}

/// A binary dependency visible on some module's classpath.
///
/// Libraries are owned by the host project model; the analysis engine reads
/// their coordinates and the persisted index of type names they declare.
#[derive(Debug, Clone)]
pub struct Library {
    coordinates: LibraryCoordinates,
    roots: Vec<PathBuf>,
    declared_types: Vec<String>,
}

impl Library {
    /// Create a library with the given identity.
    pub fn new(coordinates: LibraryCoordinates) -> Self {
        Library {
            coordinates,
            roots: Vec::new(),
            declared_types: Vec::new(),
        }
    }

    /// Attach a binary root.
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.roots.push(root.into());
        self
    }

    /// Attach the type names this library declares.
    pub fn with_declared_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.declared_types.extend(types.into_iter().map(Into::into));
        self
    }

    /// Identity metadata.
    pub fn coordinates(&self) -> &LibraryCoordinates {
        &self.coordinates
    }

    /// Binary roots of the library.
    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    /// Type names this library declares, from its persisted metadata index.
    pub fn declared_types(&self) -> &[String] {
        &self.declared_types
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinates_display() {
        let coords = LibraryCoordinates::new("org.mira", "mira-stdlib", "1.4.0");
        assert_eq!(coords.to_string(), "org.mira:mira-stdlib:1.4.0");
    }

    #[test]
    fn test_library_builder() {
        let library = Library::new(LibraryCoordinates::new("com.acme", "acme-http", "2.0.1"))
            .with_root("/deps/acme-http-2.0.1.jar")
            .with_declared_types(["HttpClient", "HttpRequest"]);

        assert_eq!(library.coordinates().name(), "acme-http");
        assert_eq!(library.roots().len(), 1);
        assert_eq!(library.declared_types(), ["HttpClient", "HttpRequest"]);
    }

    #[test]
    fn test_coordinates_equality_ignores_roots() {
        let a = Library::new(LibraryCoordinates::new("org.mira", "mira-stdlib", "1.4.0"))
            .with_root("/a/mira-stdlib.jar");
        let b = Library::new(LibraryCoordinates::new("org.mira", "mira-stdlib", "1.4.0"))
            .with_root("/b/mira-stdlib.jar");
        assert_eq!(a.coordinates(), b.coordinates());
    }
}
