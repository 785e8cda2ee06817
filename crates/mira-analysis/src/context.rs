//! Session-scoped analysis context.

use mira_builtins::BuiltinDeclarations;
use once_cell::sync::OnceCell;
use std::sync::Arc;

/// Shared state owned by one analysis session.
///
/// Holds the default built-in declarations: one instance per session,
/// created lazily on first request and dropped when the session is torn
/// down. Every module whose cache key is
/// [`BuiltinsCacheKey::Default`](crate::BuiltinsCacheKey::Default) shares
/// it.
#[derive(Debug, Default)]
pub struct AnalysisContext {
    default_builtins: OnceCell<Arc<BuiltinDeclarations>>,
}

impl AnalysisContext {
    /// Create the context for a fresh session.
    pub fn new() -> Self {
        Self::default()
    }

    /// The session-wide default vocabulary.
    pub fn default_builtins(&self) -> Arc<BuiltinDeclarations> {
        self.default_builtins
            .get_or_init(|| Arc::new(BuiltinDeclarations::bootstrap()))
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mira_builtins::BuiltinsOrigin;

    #[test]
    fn test_default_builtins_is_a_singleton() {
        let context = AnalysisContext::new();
        let first = context.default_builtins();
        let second = context.default_builtins();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(first.origin(), BuiltinsOrigin::Bootstrap);
    }

    #[test]
    fn test_sessions_do_not_share_the_default() {
        let a = AnalysisContext::new();
        let b = AnalysisContext::new();
        assert!(!Arc::ptr_eq(&a.default_builtins(), &b.default_builtins()));
    }
}
