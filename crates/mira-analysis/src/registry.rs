//! Platform resolution registry.

use crate::error::AnalysisError;
use crate::platforms::{CommonResolution, JsResolution, JvmResolution, NativeResolution};
use crate::resolution::PlatformResolution;
use mira_platform::PlatformKind;
use rustc_hash::FxHashMap;
use std::fmt;
use std::sync::Arc;

/// Read-only mapping from platform kind to its resolution implementation.
///
/// Built once at session start via [`RegistryBuilder`]; afterwards it is
/// only read, concurrently and without synchronization, by analysis
/// requests.
pub struct PlatformResolutionRegistry {
    entries: FxHashMap<PlatformKind, Arc<dyn PlatformResolution>>,
}

impl PlatformResolutionRegistry {
    /// Start collecting registrations.
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Registry with the four shipped platforms.
    pub fn with_default_platforms() -> Self {
        Self::builder()
            .register(JvmResolution::new())
            .register(JsResolution::new())
            .register(NativeResolution::new())
            .register(CommonResolution::new())
            .build()
    }

    /// Resolution for `kind`, if registered.
    pub fn get(&self, kind: PlatformKind) -> Option<&Arc<dyn PlatformResolution>> {
        self.entries.get(&kind)
    }

    /// Resolution for `kind`, or
    /// [`UnsupportedPlatform`](AnalysisError::UnsupportedPlatform).
    pub fn resolution_for(
        &self,
        kind: PlatformKind,
    ) -> Result<&Arc<dyn PlatformResolution>, AnalysisError> {
        self.get(kind)
            .ok_or(AnalysisError::UnsupportedPlatform(kind))
    }

    /// Registered platform kinds, in unspecified order.
    pub fn kinds(&self) -> impl Iterator<Item = PlatformKind> + '_ {
        self.entries.keys().copied()
    }

    /// Number of registered platforms.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no platform is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for PlatformResolutionRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut kinds: Vec<_> = self.entries.keys().map(|kind| kind.id()).collect();
        kinds.sort_unstable();
        f.debug_struct("PlatformResolutionRegistry")
            .field("platforms", &kinds)
            .finish()
    }
}

/// Builder collecting registrations before the registry is frozen.
#[derive(Default)]
pub struct RegistryBuilder {
    entries: FxHashMap<PlatformKind, Arc<dyn PlatformResolution>>,
}

impl RegistryBuilder {
    /// Register one platform's resolution.
    ///
    /// # Panics
    ///
    /// Panics when a resolution for the same kind is already registered;
    /// registration happens once at session start, so a duplicate is a
    /// programmer error.
    pub fn register<R: PlatformResolution + 'static>(mut self, resolution: R) -> Self {
        let kind = resolution.kind();
        let previous = self.entries.insert(kind, Arc::new(resolution));
        assert!(
            previous.is_none(),
            "duplicate platform resolution registered for {kind}"
        );
        self
    }

    /// Freeze the collected registrations.
    pub fn build(self) -> PlatformResolutionRegistry {
        PlatformResolutionRegistry {
            entries: self.entries,
        }
    }
}
