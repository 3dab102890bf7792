use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_describe_test_url() {
    let config = LocatorConfig::default();
    assert_eq!(
        describe("elmTestTest://Nested.Module/suite/test+%2F+stuff", &config),
        Ok("test tests/Nested/Module.elm suite/test / stuff".to_string())
    );
}

#[test]
fn test_describe_suite_url_custom_dir() {
    let config = LocatorConfig::default().with_tests_dir("spec");
    assert_eq!(
        describe("elmTestDescribe://Module/suite", &config),
        Ok("suite spec/Module.elm suite".to_string())
    );
}

#[test]
fn test_describe_error_url() {
    let config = LocatorConfig::default();
    assert_eq!(
        describe("elmTestError://my/path/file::1313::13", &config),
        Ok("error my/path/file 1313 13".to_string())
    );
}

#[test]
fn test_describe_rejects_malformed() {
    let config = LocatorConfig::default();
    assert_eq!(
        describe("elmTestError://my/path/file", &config),
        Err(LabelError::MalformedErrorLocation("my/path/file".into()))
    );
    assert_eq!(
        describe("file:///tmp/x", &config),
        Err(LabelError::UnrecognizedScheme("file".into()))
    );
}
