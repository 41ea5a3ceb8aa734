//! Overlay resolution tests through the public API

mod common;

use arzpatch::{
    Bundle, DiagnosticBag, DiagnosticId, DirectoryProvider, PatchError, ResourcePath,
    ResourceResolver, ResourceType, discover_module,
};

fn directory_bundle(module: &common::TestModule, name: &str, priority: i32) -> Bundle<DirectoryProvider> {
    let root = module.file(name);
    Bundle::new(
        name,
        &root,
        priority,
        DirectoryProvider::new(&root).expect("provider"),
    )
}

#[test]
fn test_patch_bundle_overrides_base() {
    let module = common::TestModule::new("scenario");
    module
        .write_resource("base", "a.tpl", "base")
        .write_resource("patch", "a.tpl", "patch");

    let mut bag = DiagnosticBag::new();
    let resolver = ResourceResolver::build(
        vec![
            directory_bundle(&module, "base", 0),
            directory_bundle(&module, "patch", 10),
        ],
        &mut bag,
    )
    .unwrap();

    let a = resolver.resolve(&ResourcePath::new("a.tpl").unwrap()).unwrap();
    assert_eq!(a.bundle, "patch");
    assert_eq!(std::fs::read_to_string(&a.physical_location).unwrap(), "patch");
    assert_eq!(resolver.resources().count(), 1);
    assert!(bag.is_empty());
}

#[test]
fn test_equal_priority_conflict_is_reported_not_raised() {
    let module = common::TestModule::new("conflict");
    module
        .write_resource("first", "ui/a.tpl", "first")
        .write_resource("second", "UI/A.tpl", "second");

    for _ in 0..2 {
        let mut bag = DiagnosticBag::new();
        let resolver = ResourceResolver::build(
            vec![
                directory_bundle(&module, "first", 5),
                directory_bundle(&module, "second", 5),
            ],
            &mut bag,
        )
        .unwrap();

        let a = resolver.resolve(&ResourcePath::new("ui/a.tpl").unwrap()).unwrap();
        assert_eq!(a.bundle, "first");

        let conflicts = bag.with_id(DiagnosticId::OverrideConflict);
        assert_eq!(conflicts.len(), 1);
        assert!(conflicts[0].message().contains("'first'"));
        assert!(conflicts[0].message().contains("'second'"));
        assert_eq!(conflicts[0].id().code(), "RES0001");
    }
}

#[test]
fn test_missing_resource() {
    let module = common::TestModule::new("missing");
    module.write_resource("base", "a.tpl", "");

    let mut bag = DiagnosticBag::new();
    let resolver =
        ResourceResolver::build(vec![directory_bundle(&module, "base", 0)], &mut bag).unwrap();
    let missing = ResourcePath::new("missing.tpl").unwrap();

    assert!(matches!(
        resolver.resolve(&missing),
        Err(PatchError::ResourceNotFound { .. })
    ));
    assert!(resolver.resolve_or_default(&missing).is_none());
}

#[test]
fn test_module_resolution_layers_expansions_and_languages() {
    let module = common::TestModule::new("layered");
    module
        .write_file("layered.arz", "")
        .write_resource("resources", "ui/a.tpl", "base")
        .write_resource("resources", "ui/b.tpl", "base")
        .write_resource("resources_fr", "ui/b.tpl", "fr")
        .write_resource("xpack1", "ui/a.tpl", "xpack1")
        .write_resource("text", "tags.txt", "tags")
        .write_resource("text", "readme.md", "ignored");

    let mut bag = DiagnosticBag::new();
    let info = discover_module(&module.path, &mut bag).unwrap();
    let resolver = info.resolve(arzpatch::PathForm::RESOURCE, &mut bag).unwrap();

    let bundle_of = |p: &str| resolver.resolve(&resolver.path(p).unwrap()).unwrap().bundle.clone();
    assert_eq!(bundle_of("ui/a.tpl"), "xpack1");
    assert_eq!(bundle_of("UI\\B.TPL"), "resources_fr");
    assert_eq!(bundle_of("tags.txt"), "text");
    assert!(resolver.try_resolve(&resolver.path("readme.md").unwrap()).is_none());

    let texts: Vec<_> = resolver.resources_of_type(ResourceType::Text).collect();
    assert_eq!(texts.len(), 1);
    assert!(bag.is_empty());
}
