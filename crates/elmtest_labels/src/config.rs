//! Locator configuration.
//!
//! elm-test keeps test modules under `tests/`, one `.elm` file per module,
//! with the dotted module name mapped onto directories.

/// Where test modules live relative to the project root.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LocatorConfig {
    /// Directory holding test modules, without trailing slash.
    pub tests_dir: String,
    /// Source file extension, without the dot.
    pub extension: String,
}

impl Default for LocatorConfig {
    fn default() -> Self {
        LocatorConfig {
            tests_dir: "tests".to_string(),
            extension: "elm".to_string(),
        }
    }
}

impl LocatorConfig {
    /// Use a different tests directory.
    #[must_use]
    pub fn with_tests_dir(mut self, tests_dir: impl Into<String>) -> Self {
        let tests_dir: String = tests_dir.into();
        self.tests_dir = tests_dir.trim_end_matches('/').to_string();
        self
    }

    /// Use a different source file extension.
    #[must_use]
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        let extension: String = extension.into();
        self.extension = extension.trim_start_matches('.').to_string();
        self
    }

    /// Source file of a module: `Nested.Module` becomes `tests/Nested/Module.elm`.
    pub fn module_file(&self, module: &str) -> String {
        let relative = module.replace('.', "/");
        if self.tests_dir.is_empty() {
            format!("{relative}.{}", self.extension)
        } else {
            format!("{}/{relative}.{}", self.tests_dir, self.extension)
        }
    }
}

#[cfg(test)]
mod tests;
