//! Project-model boundary consumed by the Mira analysis engine.
//!
//! The host project model owns modules, libraries, dependency graphs, and
//! installed runtime environments. The analysis engine only reads them:
//! this crate defines the value types and the [`ModuleInfo`] handle the
//! engine consumes, without reimplementing the model itself.

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

mod deps;
mod library;
mod module;
mod runtime;

pub use deps::DependencyGraph;
pub use library::{Library, LibraryCoordinates};
pub use module::{ModuleInfo, SdkModule, SourceModule};
pub use runtime::RuntimeEnvironment;
