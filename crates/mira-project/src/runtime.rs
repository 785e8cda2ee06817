//! Installed runtime environment ("SDK") descriptors.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};

/// Identifies one installed runtime/toolchain instance a module compiles
/// against.
///
/// Identity is the installation home: two descriptors pointing at the same
/// home are the same environment, whatever their display names say. The
/// built-ins cache key delegates to this equality and must never redefine
/// it.
#[derive(Debug, Clone)]
pub struct RuntimeEnvironment {
    name: String,
    home: PathBuf,
}

impl RuntimeEnvironment {
    /// Describe an installed environment by display name and home path.
    pub fn new(name: impl Into<String>, home: impl Into<PathBuf>) -> Self {
        RuntimeEnvironment {
            name: name.into(),
            home: home.into(),
        }
    }

    /// Display name (e.g. `OpenJDK 17`).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Installation home path.
    pub fn home(&self) -> &Path {
        &self.home
    }
}

impl PartialEq for RuntimeEnvironment {
    fn eq(&self, other: &Self) -> bool {
        self.home == other.home
    }
}

impl Eq for RuntimeEnvironment {}

impl Hash for RuntimeEnvironment {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.home.hash(state);
    }
}

impl fmt::Display for RuntimeEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.home.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of(env: &RuntimeEnvironment) -> u64 {
        let mut hasher = DefaultHasher::new();
        env.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_identity_is_the_home_path() {
        let a = RuntimeEnvironment::new("OpenJDK 17", "/opt/jdk-17");
        let b = RuntimeEnvironment::new("Temurin 17 (renamed)", "/opt/jdk-17");
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn test_distinct_homes_are_distinct_environments() {
        let a = RuntimeEnvironment::new("OpenJDK 17", "/opt/jdk-17");
        let b = RuntimeEnvironment::new("OpenJDK 17", "/usr/lib/jvm/jdk-17");
        assert_ne!(a, b);
    }
}
