//! Property-based tests for label paths and location URLs.
//!
//! These check, over generated module names and free-text labels:
//! 1. Escaping round-trips every label and never leaves a `/` behind
//! 2. Test and suite URLs decode back to the file and test path of the input
//! 3. `common_parent` is symmetric and a prefix of both inputs
//! 4. `sub_parents` yields the in-between prefixes in root-to-leaf order

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::doc_markdown,
    clippy::redundant_closure_for_method_calls,
    reason = "Proptest macros generate code with these patterns"
)]

use elmtest_labels::{
    common_parent, from_error_location_url_path, from_location_url_path, path_string,
    sub_parents, to_error_location_url, to_path, to_suite_location_url, to_test_location_url,
    LabelEscape, LabelPath, Location, SCHEME_SEPARATOR,
};
use proptest::prelude::*;

// -- Strategies --

/// Dotted Elm module name, e.g. `Nested.Module`.
fn module_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::string::string_regex("[A-Z][a-zA-Z0-9_]{0,8}").expect("valid regex"),
        1..4,
    )
    .prop_map(|parts| parts.join("."))
}

/// Free-text test or describe label, biased towards separators and escapes.
fn label_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::string::string_regex("[a-z /+%:.]{0,12}").expect("valid regex"),
        any::<String>(),
    ]
}

fn path_strategy() -> impl Strategy<Value = LabelPath> {
    (module_strategy(), prop::collection::vec(label_strategy(), 0..5)).prop_map(
        |(module, labels)| to_path(std::iter::once(module).chain(labels)),
    )
}

/// Two paths that share a module and possibly some suites.
fn related_paths_strategy() -> impl Strategy<Value = (LabelPath, LabelPath)> {
    (
        path_strategy(),
        prop::collection::vec(label_strategy(), 0..3),
        prop::collection::vec(label_strategy(), 0..3),
    )
        .prop_map(|(base, a, b)| {
            let extend = |labels: Vec<String>| {
                labels
                    .into_iter()
                    .fold(base.clone(), |path, label| path.child(label))
            };
            (extend(a), extend(b))
        })
}

fn after_scheme(url: &str) -> &str {
    let (_, rest) = url.split_once(SCHEME_SEPARATOR).expect("url has a scheme");
    rest
}

proptest! {
    #[test]
    fn escape_round_trips(label in any::<String>()) {
        let encoded = LabelEscape::encode(&label);
        prop_assert!(!encoded.contains('/'));
        prop_assert_eq!(LabelEscape::decode(&encoded).unwrap(), label);
    }

    #[test]
    fn location_url_round_trips(path in path_strategy()) {
        let module = path.module().unwrap().to_string();
        let expected_file = format!("tests/{}.elm", module.replace('.', "/"));
        let expected_test_path = path.labels().join("/");

        for url in [to_test_location_url(&path), to_suite_location_url(&path)] {
            let (file, test_path) = from_location_url_path(after_scheme(&url)).unwrap();
            prop_assert_eq!(&file, &expected_file);
            prop_assert_eq!(&test_path, &expected_test_path);
        }
    }

    #[test]
    fn full_url_parse_round_trips(path in path_strategy()) {
        let test = Location::Test(path.clone());
        let suite = Location::Suite(path);
        prop_assert_eq!(Location::parse(&test.to_url()).unwrap(), test);
        prop_assert_eq!(Location::parse(&suite.to_url()).unwrap(), suite);
    }

    #[test]
    fn error_url_round_trips(
        file in prop::string::string_regex("[a-zA-Z0-9_./-]{1,30}").expect("valid regex"),
        line in any::<u32>(),
        column in any::<u32>(),
    ) {
        let url = to_error_location_url(&file, line, column);
        let decoded = from_error_location_url_path(after_scheme(&url)).unwrap();
        prop_assert_eq!(decoded, (file, (line, column)));
    }

    #[test]
    fn common_parent_symmetric(a in path_strategy(), b in path_strategy()) {
        prop_assert_eq!(common_parent(&a, &b), common_parent(&b, &a));
    }

    #[test]
    fn common_parent_is_longest_shared_prefix((a, b) in related_paths_strategy()) {
        let parent = common_parent(&a, &b);
        prop_assert!(parent.is_ancestor_of(&a));
        prop_assert!(parent.is_ancestor_of(&b));
        prop_assert!(!parent.is_root());

        // Extending by the next segment of either side breaks the shared prefix.
        if let (Some(next_a), Some(next_b)) =
            (a.segments().get(parent.len()), b.segments().get(parent.len()))
        {
            prop_assert_ne!(next_a, next_b);
        }
    }

    #[test]
    fn sub_parents_fill_the_gap((a, b) in related_paths_strategy()) {
        let ancestor = common_parent(&a, &b);
        let between: Vec<LabelPath> = sub_parents(&a, &ancestor).collect();

        prop_assert_eq!(between.len(), a.len().saturating_sub(ancestor.len() + 1));
        for (i, p) in between.iter().enumerate() {
            prop_assert_eq!(p.len(), ancestor.len() + 1 + i);
            prop_assert!(p.is_ancestor_of(&a));
            prop_assert!(p != &a);
        }
        if let Some(last) = between.last() {
            prop_assert_eq!(Some(path_string(last)), a.parent().map(|p| path_string(&p)));
        }
    }
}
