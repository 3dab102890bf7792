use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_default_module_file() {
    let config = LocatorConfig::default();
    assert_eq!(config.module_file("Module"), "tests/Module.elm");
    assert_eq!(config.module_file("Nested.Module"), "tests/Nested/Module.elm");
    assert_eq!(config.module_file("A.B.C"), "tests/A/B/C.elm");
}

#[test]
fn test_custom_tests_dir() {
    let config = LocatorConfig::default().with_tests_dir("spec/");
    assert_eq!(config.tests_dir, "spec");
    assert_eq!(config.module_file("Nested.Module"), "spec/Nested/Module.elm");
}

#[test]
fn test_empty_tests_dir() {
    let config = LocatorConfig::default().with_tests_dir("");
    assert_eq!(config.module_file("Nested.Module"), "Nested/Module.elm");
}

#[test]
fn test_custom_extension() {
    let config = LocatorConfig::default().with_extension(".elm18");
    assert_eq!(config.module_file("Module"), "tests/Module.elm18");
}
