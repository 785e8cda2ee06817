//! Library classification: roles, descriptors, and persisted kinds.

use mira_platform::TargetPlatform;
use mira_project::Library;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// Group under which the toolchain publishes its own libraries.
pub const TOOLCHAIN_GROUP: &str = "org.mira";

/// Artifact name of the JVM reflection-support library.
pub const REFLECT_ARTIFACT: &str = "mira-reflect";

/// Role a binary dependency plays for its platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LibraryRole {
    /// The platform's standard runtime library.
    Standard,
    /// The platform's reflection-support library.
    Reflection,
    /// Any other library.
    Generic,
}

/// A classified binary dependency carrying its owning target platform.
///
/// Classification happens once per library, when discovery first sees it,
/// and the descriptor is immutable afterwards.
#[derive(Debug, Clone)]
pub struct LibraryDescriptor {
    library: Arc<Library>,
    role: LibraryRole,
    platform: TargetPlatform,
}

impl LibraryDescriptor {
    /// Wrap `library` with an explicit role.
    pub fn new(library: Arc<Library>, role: LibraryRole, platform: TargetPlatform) -> Self {
        LibraryDescriptor {
            library,
            role,
            platform,
        }
    }

    /// Descriptor for a platform's standard library.
    pub fn standard(library: Arc<Library>, platform: TargetPlatform) -> Self {
        Self::new(library, LibraryRole::Standard, platform)
    }

    /// Descriptor for a platform's reflection-support library.
    pub fn reflection(library: Arc<Library>, platform: TargetPlatform) -> Self {
        Self::new(library, LibraryRole::Reflection, platform)
    }

    /// Descriptor for an ordinary library.
    pub fn generic(library: Arc<Library>, platform: TargetPlatform) -> Self {
        Self::new(library, LibraryRole::Generic, platform)
    }

    /// The wrapped library.
    pub fn library(&self) -> &Arc<Library> {
        &self.library
    }

    /// Classified role.
    pub fn role(&self) -> LibraryRole {
        self.role
    }

    /// Platform owning this library.
    pub fn platform(&self) -> &TargetPlatform {
        &self.platform
    }
}

/// Persisted classification tag accepted by host library storage.
///
/// Written once per library; the subsystem never reads it back.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersistedLibraryKind {
    id: Cow<'static, str>,
}

impl PersistedLibraryKind {
    /// Tag with a stable id.
    pub const fn from_static(id: &'static str) -> Self {
        PersistedLibraryKind {
            id: Cow::Borrowed(id),
        }
    }

    /// Stable id of the tag.
    pub fn id(&self) -> &str {
        &self.id
    }
}

impl fmt::Display for PersistedLibraryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}

/// Whether `library` is the standard runtime library published under
/// `artifact`.
pub fn is_standard_library(library: &Library, artifact: &str) -> bool {
    let coordinates = library.coordinates();
    coordinates.group() == TOOLCHAIN_GROUP && coordinates.name() == artifact
}

/// Whether `library` is the JVM reflection-support library.
pub fn is_reflection_library(library: &Library) -> bool {
    let coordinates = library.coordinates();
    coordinates.group() == TOOLCHAIN_GROUP && coordinates.name() == REFLECT_ARTIFACT
}
