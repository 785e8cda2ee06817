//! Built-ins cache keyed by runtime-environment identity.

use crate::error::AnalysisError;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use mira_builtins::BuiltinDeclarations;
use mira_project::RuntimeEnvironment;
use std::sync::Arc;

/// Cache key selecting which shared built-ins instance a module sees.
///
/// Two keys are equal iff they must resolve to the identical instance.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BuiltinsCacheKey {
    /// The platform-agnostic fallback: one instance per session.
    Default,

    /// One instance per distinct installed runtime environment. Equality
    /// follows the environment's own identity contract.
    ForRuntimeEnvironment(RuntimeEnvironment),
}

/// Concurrent map from cache key to the shared built-ins instance.
///
/// Lives for the analysis session; entries are invalidated only by
/// dropping the session.
#[derive(Debug, Default)]
pub struct BuiltinsCache {
    entries: DashMap<BuiltinsCacheKey, Arc<BuiltinDeclarations>>,
}

impl BuiltinsCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the instance for `key`, building it with `build` on first
    /// access.
    ///
    /// At most one construction runs per key: concurrent first requests for
    /// the same key serialize on its entry, and every caller observes the
    /// one published instance. A failed construction publishes nothing, so
    /// a later corrected request can populate the key.
    ///
    /// `build` runs while the entry is held and must not call back into
    /// this cache.
    pub fn get_or_create<F>(
        &self,
        key: BuiltinsCacheKey,
        build: F,
    ) -> Result<Arc<BuiltinDeclarations>, AnalysisError>
    where
        F: FnOnce() -> Result<Arc<BuiltinDeclarations>, AnalysisError>,
    {
        if let Some(existing) = self.entries.get(&key) {
            return Ok(existing.clone());
        }
        match self.entries.entry(key) {
            Entry::Occupied(entry) => Ok(entry.get().clone()),
            Entry::Vacant(entry) => {
                let built = build()?;
                entry.insert(built.clone());
                Ok(built)
            }
        }
    }

    /// Instance for `key`, if already populated.
    pub fn get(&self, key: &BuiltinsCacheKey) -> Option<Arc<BuiltinDeclarations>> {
        self.entries.get(key).map(|entry| entry.clone())
    }

    /// Whether `key` has been populated.
    pub fn contains(&self, key: &BuiltinsCacheKey) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of populated keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no key has been populated yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MissingCoreReason;

    fn environment(home: &str) -> RuntimeEnvironment {
        RuntimeEnvironment::new("OpenJDK 17", home)
    }

    #[test]
    fn test_keys_follow_environment_identity() {
        let a = BuiltinsCacheKey::ForRuntimeEnvironment(environment("/opt/jdk-17"));
        let b = BuiltinsCacheKey::ForRuntimeEnvironment(environment("/opt/jdk-17"));
        let c = BuiltinsCacheKey::ForRuntimeEnvironment(environment("/opt/jdk-21"));
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, BuiltinsCacheKey::Default);
    }

    #[test]
    fn test_get_or_create_returns_the_same_instance() {
        let cache = BuiltinsCache::new();
        let first = cache
            .get_or_create(BuiltinsCacheKey::Default, || {
                Ok(Arc::new(BuiltinDeclarations::bootstrap()))
            })
            .unwrap();
        let second = cache
            .get_or_create(BuiltinsCacheKey::Default, || {
                panic!("already populated");
            })
            .unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_failed_construction_leaves_the_key_unpopulated() {
        let cache = BuiltinsCache::new();
        let key = BuiltinsCacheKey::ForRuntimeEnvironment(environment("/opt/jdk-17"));

        let result = cache.get_or_create(key.clone(), || {
            Err(AnalysisError::MissingCoreDeclarations {
                module: "app".to_string(),
                environment: "OpenJDK 17".to_string(),
                reason: MissingCoreReason::NoStandardLibrary,
            })
        });
        assert!(result.is_err());
        assert!(!cache.contains(&key));
        assert!(cache.is_empty());

        let retried = cache
            .get_or_create(key.clone(), || Ok(Arc::new(BuiltinDeclarations::bootstrap())))
            .unwrap();
        assert!(cache.contains(&key));
        assert!(Arc::ptr_eq(&retried, &cache.get(&key).unwrap()));
    }
}
