//! Check command - validate configuration and fixtures

use std::path::Path;

use clubsite_core::{Catalog, Config, RecordKind};
use color_eyre::eyre::{Result, bail};

/// Validation result.
#[derive(Debug, Default)]
struct ValidationResult {
    errors: Vec<String>,
    warnings: Vec<String>,
}

impl ValidationResult {
    fn add_error(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    fn add_warning(&mut self, msg: impl Into<String>) {
        self.warnings.push(msg.into());
    }

    fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Run the check command.
///
/// Validates the configuration, then loads and validates every fixture file.
pub fn run(config_path: &Path, strict: bool) -> Result<()> {
    let result = validate(config_path);
    report(&result);

    if result.has_errors() {
        bail!("Validation failed with {} error(s)", result.errors.len());
    }

    if strict && result.has_warnings() {
        bail!(
            "Validation failed with {} warning(s) (strict mode)",
            result.warnings.len()
        );
    }

    println!();
    println!("✓ All checks passed");

    Ok(())
}

fn validate(config_path: &Path) -> ValidationResult {
    tracing::info!(?config_path, "Checking configuration and fixtures");

    let mut result = ValidationResult::default();

    println!("Checking configuration...");
    let config = match Config::load_with_env(config_path) {
        Ok(c) => {
            println!("  ✓ Configuration valid");
            c
        }
        Err(e) => {
            result.add_error(format!("Configuration error: {e}"));
            println!("  ✗ Configuration invalid: {e}");
            return result;
        }
    };
    check_config_values(&config, &mut result);

    println!("\nChecking fixture files...");
    for kind in RecordKind::ALL {
        let path = config.data.path_for(kind);
        if path.is_file() {
            println!("  ✓ {}", path.display());
        } else {
            result.add_warning(format!("Fixture file missing: {}", path.display()));
            println!("  ⚠ {} missing, {kind} listing will be empty", path.display());
        }
    }

    println!("\nChecking records...");
    let catalog = match Catalog::load(&config.data) {
        Ok(catalog) => catalog,
        Err(e) => {
            result.add_error(e.to_string());
            println!("  ✗ {e}");
            return result;
        }
    };

    let issues = catalog.validate();
    for issue in &issues {
        result.add_error(issue.to_string());
    }
    if issues.is_empty() {
        for kind in RecordKind::ALL {
            println!("  ✓ {} {}", catalog.count(kind), kind.noun_for(catalog.count(kind)));
        }
    } else {
        println!("  ✗ {} record issue(s)", issues.len());
    }

    result
}

/// Check configuration values for common issues.
fn check_config_values(config: &Config, result: &mut ValidationResult) {
    if !config.site.base_url.starts_with("http") {
        result.add_warning("site.base_url should start with http:// or https://");
    }

    if config.site.base_url.ends_with('/') {
        result.add_warning("site.base_url should not have a trailing slash");
    }

    if !config.data.dir.is_dir() {
        result.add_warning(format!(
            "Data directory does not exist: {}",
            config.data.dir.display()
        ));
    }
}

fn report(result: &ValidationResult) {
    println!();
    println!("Summary:");
    println!("  Errors:   {}", result.errors.len());
    println!("  Warnings: {}", result.warnings.len());

    if result.has_errors() {
        println!();
        println!("Errors:");
        for err in &result.errors {
            println!("  ✗ {err}");
        }
    }

    if result.has_warnings() {
        println!();
        println!("Warnings:");
        for warn in &result.warnings {
            println!("  ⚠ {warn}");
        }
    }
}
