//! Per-platform analysis parameter variants.

use crate::error::AnalysisError;
use mira_platform::PlatformKind;
use std::any::Any;
use std::fmt;

/// Parameter bundle accepted by a platform's resolver-factory constructor.
///
/// Each platform expects its own concrete variant; handing platform A the
/// parameters of platform B is a configuration error, detected by downcast
/// at the dispatch boundary.
pub trait AnalysisParameters: Any + fmt::Debug + Send + Sync {
    /// Self as `Any`, for variant checks at the dispatch boundary.
    fn as_any(&self) -> &dyn Any;

    /// Variant name used in configuration diagnostics.
    fn kind_name(&self) -> &'static str;
}

/// Downcast `params` to the variant a platform expects.
pub(crate) fn expect_parameters<'p, T: AnalysisParameters>(
    platform: PlatformKind,
    expected: &'static str,
    params: &'p dyn AnalysisParameters,
) -> Result<&'p T, AnalysisError> {
    params
        .as_any()
        .downcast_ref::<T>()
        .ok_or_else(|| AnalysisError::Configuration {
            platform,
            expected,
            actual: params.kind_name().to_string(),
        })
}

/// Parameters for JVM resolution.
#[derive(Debug, Clone)]
pub struct JvmAnalysisParams {
    /// JVM release the analyzed modules compile against.
    pub target_release: u32,
}

impl Default for JvmAnalysisParams {
    fn default() -> Self {
        JvmAnalysisParams { target_release: 17 }
    }
}

impl AnalysisParameters for JvmAnalysisParams {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn kind_name(&self) -> &'static str {
        "JvmAnalysisParams"
    }
}

/// Module system the JS backend emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsModuleSystem {
    /// ECMAScript modules.
    #[default]
    EsModule,
    /// CommonJS modules.
    CommonJs,
    /// UMD wrappers.
    Umd,
}

/// Parameters for JS resolution.
#[derive(Debug, Clone, Default)]
pub struct JsAnalysisParams {
    /// Module system of the produced code.
    pub module_system: JsModuleSystem,
}

impl AnalysisParameters for JsAnalysisParams {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn kind_name(&self) -> &'static str {
        "JsAnalysisParams"
    }
}

/// Parameters for native resolution.
#[derive(Debug, Clone)]
pub struct NativeAnalysisParams {
    /// Target triple the analyzed modules compile for.
    pub target_triple: String,
}

impl NativeAnalysisParams {
    /// Parameters for `target_triple`.
    pub fn new(target_triple: impl Into<String>) -> Self {
        NativeAnalysisParams {
            target_triple: target_triple.into(),
        }
    }
}

impl AnalysisParameters for NativeAnalysisParams {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn kind_name(&self) -> &'static str {
        "NativeAnalysisParams"
    }
}

/// Parameters for common-code resolution.
#[derive(Debug, Clone, Default)]
pub struct CommonAnalysisParams {
    /// Platforms the common module is analyzed against.
    pub constituent_platforms: Vec<PlatformKind>,
}

impl AnalysisParameters for CommonAnalysisParams {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn kind_name(&self) -> &'static str {
        "CommonAnalysisParams"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expect_parameters_accepts_the_right_variant() {
        let params = JvmAnalysisParams { target_release: 21 };
        let got = expect_parameters::<JvmAnalysisParams>(
            PlatformKind::JVM,
            "JvmAnalysisParams",
            &params,
        )
        .unwrap();
        assert_eq!(got.target_release, 21);
    }

    #[test]
    fn test_expect_parameters_rejects_a_foreign_variant() {
        let params = JsAnalysisParams::default();
        let error = expect_parameters::<JvmAnalysisParams>(
            PlatformKind::JVM,
            "JvmAnalysisParams",
            &params,
        )
        .unwrap_err();
        match error {
            AnalysisError::Configuration {
                platform, actual, ..
            } => {
                assert_eq!(platform, PlatformKind::JVM);
                assert_eq!(actual, "JsAnalysisParams");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
