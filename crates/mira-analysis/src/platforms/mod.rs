//! Shipped platform resolutions.

mod common;
mod js;
mod jvm;
mod native;

pub use common::{CommonResolution, CommonResolverFactory, COMMON_STDLIB_ARTIFACT};
pub use js::{
    JsResolution, JsResolverFactory, JS_LIBRARY_EXTENSION, JS_LIBRARY_KIND, JS_STDLIB_ARTIFACT,
};
pub use jvm::{JvmResolution, JvmResolverFactory, JVM_STDLIB_ARTIFACT};
pub use native::{
    NativeResolution, NativeResolverFactory, NATIVE_LIBRARY_EXTENSION, NATIVE_LIBRARY_KIND,
    NATIVE_STDLIB_ARTIFACT,
};
