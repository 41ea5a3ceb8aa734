//! Engine and module discovery tests through the public API

mod common;

use arzpatch::{
    DiagnosticBag, DiagnosticId, EngineClass, EngineDiscoverer, Module, discover_engine,
    discover_module,
};

#[test]
fn test_itemartifact_identifies_tqit() {
    let module = common::TestModule::new("tqit");
    module.write_resource("mod1", "database/templates/itemartifact.tpl", "");

    let info = discover_engine(&module.file("mod1")).unwrap();
    assert_eq!(info.engine_class(), Some(EngineClass::Tqit));
    assert!(!info.is_ambiguous());
}

#[test]
fn test_both_fingerprints_are_ambiguous() {
    let module = common::TestModule::new("mixed");
    module
        .write_file("database/templates/devotionskilltree.tpl", "")
        .write_file("database/templates/itemartifact.tpl", "");

    let info = discover_engine(&module.path).unwrap();
    assert!(info.is_ambiguous());
    assert_eq!(info.engine_class(), None);
}

#[test]
fn test_no_fingerprint_is_unknown_not_error() {
    let module = common::TestModule::new("plain");
    module.write_file("resources/ui/a.tpl", "");

    let info = discover_engine(&module.path).unwrap();
    assert_eq!(info.engine_class(), None);
    assert!(!info.is_ambiguous());
}

#[test]
fn test_classification_is_repeatable() {
    let module = common::TestModule::new("repeat");
    module.write_file("database/templates/devotionskilltree.tpl", "");

    let discoverer = EngineDiscoverer::default();
    let first = discoverer.discover(&module.path).unwrap();
    for _ in 0..5 {
        let again = discoverer.discover(&module.path).unwrap();
        assert_eq!(again.engine_class(), first.engine_class());
        assert_eq!(again.is_ambiguous(), first.is_ambiguous());
    }
}

#[test]
fn test_missing_module_root_fails() {
    let module = common::TestModule::new("root");
    let mut bag = DiagnosticBag::new();
    assert!(discover_module(&module.file("absent"), &mut bag).is_err());
    assert!(discover_engine(&module.file("absent")).is_err());
}

#[test]
fn test_module_engine_from_bundle_fingerprint() {
    let module = common::TestModule::new("bundled");
    module
        .write_file("bundled.arz", "")
        .write_resource("templates", "database/templates/itemartifactformula.tpl", "");

    let mut bag = DiagnosticBag::new();
    let info = discover_module(&module.path, &mut bag).unwrap();
    assert_eq!(info.engine_class(), Some(EngineClass::Tqit));
    assert_eq!(info.engine.artifacts.len(), 1);
    assert!(
        info.engine.artifacts[0]
            .physical_location
            .starts_with(module.file("templates").canonicalize().unwrap())
    );
}

#[test]
fn test_module_descriptor_serializes() {
    let module = common::TestModule::new("json");
    module
        .write_file("json.arz", "")
        .write_resource("xpack1_de", "a.txt", "");

    let mut bag = DiagnosticBag::new();
    let info = discover_module(&module.path, &mut bag).unwrap();
    let json: serde_json::Value = serde_json::to_value(&info).unwrap();

    assert_eq!(json["name"], "json");
    assert_eq!(json["database"]["status"], "found");
    assert_eq!(json["engine"]["classification"]["status"], "not_found");
    assert_eq!(json["bundles"][0]["language"], "de");
    assert_eq!(json["bundles"][0]["priority"], 110);
}

#[test]
fn test_ambiguous_module_warns() {
    let module = common::TestModule::new("warn");
    module
        .write_file("a.arz", "")
        .write_file("b.ARZ", "")
        .write_file("database/templates/devotionskilltree.tpl", "")
        .write_file("database/templates/itemartifact.tpl", "");

    let mut bag = DiagnosticBag::new();
    let info = discover_module(&module.path, &mut bag).unwrap();

    assert!(info.is_ambiguous());
    assert!(info.database_path().is_none());
    assert_eq!(bag.with_id(DiagnosticId::MultipleDatabases).len(), 1);
    assert_eq!(bag.with_id(DiagnosticId::AmbiguousEngine).len(), 1);
    assert!(!bag.has_errors());
}

#[test]
fn test_module_exclusion_is_fixed_after_resolution() {
    let module = common::TestModule::new("lazy");
    module
        .write_resource("resources", "a.tpl", "")
        .write_resource("xpack1", "a.tpl", "");

    let mut bag = DiagnosticBag::new();
    let mut lazy = Module::new(discover_module(&module.path, &mut bag).unwrap());
    lazy.exclude_bundle("xpack1").unwrap();

    let resolver = lazy.resolver(&mut bag).unwrap();
    let a = resolver.resolve(&resolver.path("a.tpl").unwrap()).unwrap();
    assert_eq!(a.bundle, "resources");

    assert!(lazy.exclude_bundle("resources").is_err());
}
