//! Platform resolution for the Mira analysis engine.
//!
//! The engine analyzes modules and libraries of several compilation
//! targets uniformly; each target plugs its behavior in through
//! [`PlatformResolution`], registered once per session in a
//! [`PlatformResolutionRegistry`]. Per platform the contract supplies:
//!
//! - **Library classification**: is a binary dependency the platform's
//!   standard library, its reflection-support library, or ordinary?
//! - **Resolver-factory dispatch**: construct the platform-specific
//!   strategy that resolves a module's declarations.
//! - **Built-ins cache key + provider**: which shared
//!   [`BuiltinDeclarations`](mira_builtins::BuiltinDeclarations) instance a
//!   module sees, keyed so that modules compiled against different
//!   installed runtimes never share one.
//!
//! # Example
//!
//! ```rust,ignore
//! use mira_analysis::{AnalysisSession, JvmAnalysisParams, TargetEnvironment};
//! use mira_platform::TargetPlatform;
//!
//! let session = AnalysisSession::with_default_platforms();
//!
//! let builtins = session.builtins_for(&module)?;
//! let factory = session.resolver_factory_for(
//!     &TargetPlatform::jvm(),
//!     &JvmAnalysisParams::default(),
//!     TargetEnvironment::Interactive,
//! )?;
//! let declarations = factory.resolve_declarations(&module)?;
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

/// Built-ins cache and its keys.
pub mod cache;

/// Session-scoped context.
pub mod context;

/// Error taxonomy.
pub mod error;

/// Library roles, descriptors, and identity predicates.
pub mod library;

/// Per-platform analysis parameters.
pub mod params;

/// Shipped platform resolutions.
pub mod platforms;

/// The platform resolution registry.
pub mod registry;

/// The per-platform capability contract.
pub mod resolution;

/// Resolver factories.
pub mod resolver;

/// The analysis session facade.
pub mod session;

pub use cache::{BuiltinsCache, BuiltinsCacheKey};
pub use context::AnalysisContext;
pub use error::{AnalysisError, MissingCoreReason};
pub use library::{
    is_reflection_library, is_standard_library, LibraryDescriptor, LibraryRole,
    PersistedLibraryKind, REFLECT_ARTIFACT, TOOLCHAIN_GROUP,
};
pub use params::{
    AnalysisParameters, CommonAnalysisParams, JsAnalysisParams, JsModuleSystem, JvmAnalysisParams,
    NativeAnalysisParams,
};
pub use registry::{PlatformResolutionRegistry, RegistryBuilder};
pub use resolution::PlatformResolution;
pub use resolver::{ModuleDeclarations, ResolverFactory, TargetEnvironment};
pub use session::AnalysisSession;
