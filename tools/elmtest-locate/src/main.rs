//! elm-test location decoder
//!
//! Turns the location URLs an IDE test tree stores for elm-test nodes back
//! into the source file, test path and position they point at.

use std::sync::Once;

use elmtest_labels::{is_elm_test_url, LabelError, Location, LocatorConfig};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing once.
///
/// Off unless `RUST_LOG` is set or `-v` is passed; `-v` switches to the
/// hierarchical layer and defaults the filter to `debug`.
fn init_tracing(verbose: bool) {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let from_env = std::env::var("RUST_LOG").is_ok();
        if !from_env && !verbose {
            return;
        }
        let filter = if from_env {
            EnvFilter::from_default_env()
        } else {
            EnvFilter::new("debug")
        };

        if verbose {
            tracing_subscriber::registry()
                .with(tracing_tree::HierarchicalLayer::new(2).with_targets(true))
                .with(filter)
                .init();
        } else {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(std::io::stderr),
                )
                .with(filter)
                .init();
        }
    });
}

fn print_usage() {
    eprintln!("Usage: elmtest-locate [options] <url>...");
    eprintln!();
    eprintln!("Decodes elmTestTest://, elmTestDescribe:// and elmTestError:// URLs.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --tests-dir=<dir>    Directory holding test modules (default: tests)");
    eprintln!("  --extension=<ext>    Source file extension (default: elm)");
    eprintln!("  -v, --verbose        Debug logging");
    eprintln!("  -h, --help           Show this message");
}

/// One output line for a decoded URL.
///
/// `test <file> <test path>`, `suite <file> <test path>` or
/// `error <file> <line> <column>`.
fn describe(url: &str, config: &LocatorConfig) -> Result<String, LabelError> {
    if !is_elm_test_url(url) {
        tracing::debug!(url, "not an elm-test url");
    }
    let location = Location::parse(url)?;
    let line = match &location {
        Location::Test(_) | Location::Suite(_) => {
            let kind = if matches!(location, Location::Test(_)) {
                "test"
            } else {
                "suite"
            };
            format!(
                "{kind} {} {}",
                location.source_file(config).unwrap_or_default(),
                location.test_path().unwrap_or_default()
            )
        }
        Location::Error(error) => {
            format!("error {} {} {}", error.file, error.line, error.column)
        }
    };
    Ok(line)
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let mut config = LocatorConfig::default();
    let mut verbose = false;
    let mut urls = Vec::new();

    for arg in &args {
        if let Some(dir) = arg.strip_prefix("--tests-dir=") {
            config = config.with_tests_dir(dir);
        } else if let Some(ext) = arg.strip_prefix("--extension=") {
            config = config.with_extension(ext);
        } else if arg == "-v" || arg == "--verbose" {
            verbose = true;
        } else if arg == "-h" || arg == "--help" {
            print_usage();
            return;
        } else if arg.starts_with('-') {
            eprintln!("error: unknown option '{arg}'");
            print_usage();
            std::process::exit(1);
        } else {
            urls.push(arg.as_str());
        }
    }

    if urls.is_empty() {
        print_usage();
        std::process::exit(1);
    }

    init_tracing(verbose);

    let mut failures = 0usize;
    for url in urls {
        match describe(url, &config) {
            Ok(line) => println!("{line}"),
            Err(error) => {
                tracing::warn!(url, %error, "cannot decode location url");
                eprintln!("error: {url}: {error}");
                failures += 1;
            }
        }
    }

    if failures > 0 {
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests;
