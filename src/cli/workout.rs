//! Workout commands (parse, check, fmt)

use std::fs;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

use super::output::Output;
use crate::config::Config;
use crate::domain::HashIdGenerator;
use crate::parser::{self, ParseFailure, ParseResult};
use crate::render;

/// Reads a workout from a file, or from stdin when the path is `-`
fn read_source(file: &Path) -> Result<String> {
    if file.as_os_str() == "-" {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .context("Failed to read workout from stdin")?;
        return Ok(content);
    }

    fs::read_to_string(file)
        .with_context(|| format!("Failed to read workout file: {}", file.display()))
}

fn parse_file(output: &Output, config: &Config, file: &Path) -> Result<ParseResult> {
    let source = read_source(file)?;
    output.verbose_ctx("parse", &format!("Read {} bytes", source.len()));

    let ids = HashIdGenerator::new();
    Ok(parser::parse_with(&source, &ids, &config.project.parser))
}

/// Prints every diagnostic of a failed parse and returns an error
fn report_failure(output: &Output, failure: &ParseFailure) -> Result<()> {
    if output.is_json() {
        output.data(&serde_json::json!({
            "success": false,
            "errors": failure.errors,
            "warnings": failure.warnings,
        }));
    } else {
        for error in &failure.errors {
            output.parse_error(error);
        }
        for warning in &failure.warnings {
            output.parse_warning(warning);
        }
    }

    anyhow::bail!(
        "Workout has {} error{}",
        failure.errors.len(),
        if failure.errors.len() == 1 { "" } else { "s" }
    )
}

/// Parse a workout and print the template
pub fn parse(output: &Output, config: &Config, file: &Path) -> Result<()> {
    let parsed = match parse_file(output, config, file)? {
        Ok(parsed) => parsed,
        Err(failure) => return report_failure(output, &failure),
    };

    output.verbose_ctx(
        "parse",
        &format!(
            "Parsed '{}': {} exercises, {} sets",
            parsed.template.name,
            parsed.template.exercises.len(),
            parsed.template.total_sets()
        ),
    );

    if output.is_json() {
        output.data(&parsed);
    } else {
        print!("{}", render::summary(&parsed.template));
        for warning in &parsed.warnings {
            output.parse_warning(warning);
        }
    }

    Ok(())
}

/// Validate a workout without printing the template
pub fn check(output: &Output, config: &Config, file: &Path, deny_warnings: bool) -> Result<()> {
    let parsed = match parse_file(output, config, file)? {
        Ok(parsed) => parsed,
        Err(failure) => return report_failure(output, &failure),
    };

    let template = &parsed.template;
    let passed = !(deny_warnings && !parsed.warnings.is_empty());

    if output.is_json() {
        output.data(&serde_json::json!({
            "success": passed,
            "name": template.name,
            "exercises": template.exercises.len(),
            "sets": template.total_sets(),
            "warnings": parsed.warnings,
        }));
    } else {
        for warning in &parsed.warnings {
            output.parse_warning(warning);
        }
        if passed {
            output.success(&format!(
                "OK: {} ({} exercises, {} sets)",
                template.name,
                template.exercises.len(),
                template.total_sets()
            ));
        }
    }

    if !passed {
        anyhow::bail!(
            "Workout has {} warning{} (warnings are denied)",
            parsed.warnings.len(),
            if parsed.warnings.len() == 1 { "" } else { "s" }
        );
    }

    Ok(())
}

/// Print a workout in canonical LMWF form
pub fn fmt(output: &Output, config: &Config, file: &Path) -> Result<()> {
    let parsed = match parse_file(output, config, file)? {
        Ok(parsed) => parsed,
        Err(failure) => return report_failure(output, &failure),
    };

    let text = render::to_lmwf(&parsed.template);
    if output.is_json() {
        output.data(&serde_json::json!({ "lmwf": text }));
    } else {
        print!("{}", text);
    }

    Ok(())
}
