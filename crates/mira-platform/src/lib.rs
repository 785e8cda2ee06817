//! Target platform tags for the Mira analysis engine.
//!
//! A [`TargetPlatform`] is an immutable value identifying the compilation
//! target a module or library belongs to. Modules, libraries, and resolver
//! factories all carry one; the analysis engine dispatches on its
//! [`PlatformKind`] to find the matching platform resolution.

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

use std::borrow::Cow;
use std::fmt;

/// Identifier for a family of compilation targets.
///
/// The set of kinds is open: the engine ships JVM, JS, Native, and Common,
/// and embedders can introduce further kinds with [`PlatformKind::new`] and
/// register a resolution for them at session start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlatformKind(&'static str);

impl PlatformKind {
    /// The JVM backend.
    pub const JVM: PlatformKind = PlatformKind::new("jvm");

    /// The JavaScript backend.
    pub const JS: PlatformKind = PlatformKind::new("js");

    /// The native (LLVM) backend.
    pub const NATIVE: PlatformKind = PlatformKind::new("native");

    /// Shared source sets analyzed against every constituent platform.
    pub const COMMON: PlatformKind = PlatformKind::new("common");

    /// Create a kind from a stable tag id.
    pub const fn new(id: &'static str) -> Self {
        PlatformKind(id)
    }

    /// Stable tag id, used for registry lookup and diagnostics.
    pub fn id(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for PlatformKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// An immutable compilation-target tag shared by modules and libraries.
///
/// Values are cheap to clone and never mutated after construction; many
/// modules reference the same platform value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TargetPlatform {
    kind: PlatformKind,
    description: Cow<'static, str>,
}

impl TargetPlatform {
    /// Create a platform of `kind` with a human-readable description.
    pub fn new(kind: PlatformKind, description: impl Into<Cow<'static, str>>) -> Self {
        TargetPlatform {
            kind,
            description: description.into(),
        }
    }

    /// The default JVM platform.
    pub fn jvm() -> Self {
        TargetPlatform::new(PlatformKind::JVM, "JVM")
    }

    /// A JVM platform pinned to a concrete release.
    pub fn jvm_release(release: u32) -> Self {
        TargetPlatform::new(PlatformKind::JVM, format!("JVM {release}"))
    }

    /// The default JS platform.
    pub fn js() -> Self {
        TargetPlatform::new(PlatformKind::JS, "JS")
    }

    /// The default native platform.
    pub fn native() -> Self {
        TargetPlatform::new(PlatformKind::NATIVE, "Native")
    }

    /// A native platform pinned to a concrete target triple.
    pub fn native_triple(triple: &str) -> Self {
        TargetPlatform::new(PlatformKind::NATIVE, format!("Native {triple}"))
    }

    /// The common (shared source set) platform.
    pub fn common() -> Self {
        TargetPlatform::new(PlatformKind::COMMON, "Common")
    }

    /// Kind of this platform, the registry dispatch tag.
    pub fn kind(&self) -> PlatformKind {
        self.kind
    }

    /// Human-readable description.
    pub fn description(&self) -> &str {
        &self.description
    }
}

impl fmt::Display for TargetPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description)
    }
}
