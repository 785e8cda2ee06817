//! Core type vocabulary shared across analyzed Mira modules.
//!
//! [`BuiltinDeclarations`] exposes the language's fundamental types. One
//! instance is shared by every module that maps to the same built-ins cache
//! key; callers rely on reference identity of the instance, so construction
//! happens once per key and the result is cached for the analysis session.
//!
//! Two constructions exist: the compiler-bundled [`bootstrap`]
//! vocabulary, and [`from_exported_types`], which assembles the vocabulary
//! from the type index a standard library exports on a module's classpath.
//!
//! [`bootstrap`]: BuiltinDeclarations::bootstrap
//! [`from_exported_types`]: BuiltinDeclarations::from_exported_types

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

use rustc_hash::FxHashSet;
use thiserror::Error;

/// The fundamental types every vocabulary must declare.
pub const CORE_TYPE_NAMES: &[&str] = &[
    "Any", "Nothing", "Unit", "Bool", "Char", "Int", "Long", "Float", "Double", "String", "Array",
    "Function",
];

/// Where a vocabulary instance came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuiltinsOrigin {
    /// The compiler-bundled bootstrap vocabulary.
    Bootstrap,
    /// Assembled from a standard library found among a module's
    /// dependencies.
    Dependencies,
}

/// Errors from vocabulary construction.
#[derive(Debug, Error)]
pub enum BuiltinsError {
    /// The exported type index lacks part of the core vocabulary.
    #[error("standard library type index is missing core declarations: {missing}")]
    MissingDeclarations {
        /// Comma-separated names absent from the index.
        missing: String,
    },
}

/// The shared built-in declarations object.
#[derive(Debug)]
pub struct BuiltinDeclarations {
    origin: BuiltinsOrigin,
    names: Vec<String>,
    index: FxHashSet<String>,
}

impl BuiltinDeclarations {
    /// The compiler-bundled vocabulary: exactly [`CORE_TYPE_NAMES`].
    pub fn bootstrap() -> Self {
        let names: Vec<String> = CORE_TYPE_NAMES.iter().map(|n| n.to_string()).collect();
        let index = names.iter().cloned().collect();
        BuiltinDeclarations {
            origin: BuiltinsOrigin::Bootstrap,
            names,
            index,
        }
    }

    /// Assemble a vocabulary from the type index a standard library exports.
    ///
    /// Every name in [`CORE_TYPE_NAMES`] must be present; an incomplete
    /// index fails the construction and produces nothing. Names beyond the
    /// core set are kept, deduplicated, in index order.
    pub fn from_exported_types<I>(types: I) -> Result<Self, BuiltinsError>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut names = Vec::new();
        let mut index = FxHashSet::default();
        for name in types {
            let name = name.into();
            if index.insert(name.clone()) {
                names.push(name);
            }
        }

        let missing: Vec<&str> = CORE_TYPE_NAMES
            .iter()
            .copied()
            .filter(|name| !index.contains(*name))
            .collect();
        if !missing.is_empty() {
            return Err(BuiltinsError::MissingDeclarations {
                missing: missing.join(", "),
            });
        }

        Ok(BuiltinDeclarations {
            origin: BuiltinsOrigin::Dependencies,
            names,
            index,
        })
    }

    /// Provenance of this instance.
    pub fn origin(&self) -> BuiltinsOrigin {
        self.origin
    }

    /// Whether `name` is part of the vocabulary.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains(name)
    }

    /// Type names in the vocabulary, in declaration order.
    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Number of declared types.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the vocabulary is empty. Never true for a constructed
    /// instance; present for completeness of the collection API.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
