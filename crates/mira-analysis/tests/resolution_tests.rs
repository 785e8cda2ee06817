//! Integration tests for classification, dispatch, and the registry.

use mira_analysis::platforms::{JS_LIBRARY_KIND, NATIVE_LIBRARY_KIND};
use mira_analysis::{
    AnalysisError, AnalysisSession, JsAnalysisParams, JvmAnalysisParams, LibraryRole,
    PlatformResolution, TargetEnvironment, TOOLCHAIN_GROUP,
};
use mira_platform::{PlatformKind, TargetPlatform};
use mira_project::{DependencyGraph, Library, LibraryCoordinates, SourceModule};
use std::path::Path;
use std::sync::Arc;

fn toolchain_library(artifact: &str) -> Arc<Library> {
    Arc::new(Library::new(LibraryCoordinates::new(
        TOOLCHAIN_GROUP,
        artifact,
        "1.4.0",
    )))
}

#[test]
fn test_stdlib_classification_is_exclusive() {
    let session = AnalysisSession::with_default_platforms();
    let descriptors = session
        .classify_library(PlatformKind::JVM, &toolchain_library("mira-stdlib"))
        .unwrap();

    assert_eq!(descriptors.len(), 1);
    assert_eq!(descriptors[0].role(), LibraryRole::Standard);
}

#[test]
fn test_unmatched_libraries_classify_as_generic() {
    let session = AnalysisSession::with_default_platforms();
    let library = Arc::new(Library::new(LibraryCoordinates::new(
        "com.acme",
        "acme-http",
        "2.0.1",
    )));

    for kind in [
        PlatformKind::JVM,
        PlatformKind::JS,
        PlatformKind::NATIVE,
        PlatformKind::COMMON,
    ] {
        let descriptors = session.classify_library(kind, &library).unwrap();
        assert_eq!(descriptors.len(), 1, "{}", kind);
        assert_eq!(descriptors[0].role(), LibraryRole::Generic, "{}", kind);
    }
}

#[test]
fn test_parameter_mismatch_constructs_no_factory() {
    let session = AnalysisSession::with_default_platforms();
    let error = session
        .resolver_factory_for(
            &TargetPlatform::jvm(),
            &JsAnalysisParams::default(),
            TargetEnvironment::Interactive,
        )
        .unwrap_err();

    match error {
        AnalysisError::Configuration {
            platform,
            expected,
            actual,
        } => {
            assert_eq!(platform, PlatformKind::JVM);
            assert_eq!(expected, "JvmAnalysisParams");
            assert_eq!(actual, "JsAnalysisParams");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_factory_resolves_classpath_declarations() {
    let session = AnalysisSession::with_default_platforms();
    let mut graph = DependencyGraph::new();
    graph.add_library(
        "app",
        Arc::new(
            Library::new(LibraryCoordinates::new("com.acme", "acme-http", "2.0.1"))
                .with_declared_types(["HttpClient", "HttpRequest"]),
        ),
    );
    graph.add_dependency("app", "core");
    graph.add_library(
        "core",
        Arc::new(
            Library::new(LibraryCoordinates::new("com.acme", "acme-json", "1.1.0"))
                .with_declared_types(["JsonValue"]),
        ),
    );
    let module = SourceModule::new("app", TargetPlatform::jvm(), Arc::new(graph));

    let factory = session
        .resolver_factory_for(
            &TargetPlatform::jvm(),
            &JvmAnalysisParams::default(),
            TargetEnvironment::Batch,
        )
        .unwrap();
    let declarations = factory.resolve_declarations(&module).unwrap();

    assert_eq!(declarations.module, "app");
    assert_eq!(
        declarations.types,
        ["HttpClient", "HttpRequest", "JsonValue"]
    );
}

#[test]
fn test_factory_rejects_modules_of_another_platform() {
    let session = AnalysisSession::with_default_platforms();
    let module = SourceModule::new(
        "web",
        TargetPlatform::js(),
        Arc::new(DependencyGraph::new()),
    );

    let factory = session
        .resolver_factory_for(
            &TargetPlatform::jvm(),
            &JvmAnalysisParams::default(),
            TargetEnvironment::Interactive,
        )
        .unwrap();
    let error = factory.resolve_declarations(&module).unwrap_err();
    assert!(matches!(error, AnalysisError::Configuration { .. }));
}

#[test]
fn test_persisted_library_kinds_per_platform() {
    let session = AnalysisSession::with_default_platforms();
    let registry = session.registry();

    assert!(registry
        .resolution_for(PlatformKind::JVM)
        .unwrap()
        .library_kind()
        .is_none());
    assert_eq!(
        registry
            .resolution_for(PlatformKind::JS)
            .unwrap()
            .library_kind(),
        Some(JS_LIBRARY_KIND)
    );
    assert_eq!(
        registry
            .resolution_for(PlatformKind::NATIVE)
            .unwrap()
            .library_kind(),
        Some(NATIVE_LIBRARY_KIND)
    );
    assert!(registry
        .resolution_for(PlatformKind::COMMON)
        .unwrap()
        .library_kind()
        .is_none());
}

#[test]
fn test_library_file_predicates_per_platform() {
    let session = AnalysisSession::with_default_platforms();
    let registry = session.registry();
    let cases = [
        (PlatformKind::JVM, "/deps/acme.jar", false),
        (PlatformKind::JS, "/deps/widgets.jslib", true),
        (PlatformKind::JS, "/deps/acme.jar", false),
        (PlatformKind::NATIVE, "/deps/sockets.nlib", true),
        (PlatformKind::NATIVE, "/deps/widgets.jslib", false),
        (PlatformKind::COMMON, "/deps/shared.mlib", false),
    ];

    for (kind, path, expected) in cases {
        let resolution = registry.resolution_for(kind).unwrap();
        assert_eq!(
            resolution.is_library_file_for_platform(Path::new(path)),
            expected,
            "{} / {}",
            kind,
            path
        );
    }
}

#[test]
fn test_unregistered_platform_is_unsupported() {
    let session = AnalysisSession::with_default_platforms();
    let wasm = TargetPlatform::new(PlatformKind::new("wasm"), "Wasm");
    let module = SourceModule::new("edge", wasm.clone(), Arc::new(DependencyGraph::new()));

    let error = session.builtins_for(&module).unwrap_err();
    assert!(matches!(error, AnalysisError::UnsupportedPlatform(kind) if kind.id() == "wasm"));

    let error = session
        .resolver_factory_for(&wasm, &JvmAnalysisParams::default(), TargetEnvironment::Batch)
        .unwrap_err();
    assert!(matches!(error, AnalysisError::UnsupportedPlatform(_)));
}
