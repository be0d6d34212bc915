//! Local configuration commands

use colored::Colorize;

use crate::cli::OutputFormat;
use crate::cli::args::GlobalOptions;
use crate::config::{Config, DEFAULT_API_URL};
use crate::error::{Result, ValidationError};
use crate::output::json::format_json;
use crate::output::table::format_card;

/// Print the effective configuration and where each value comes from
pub fn show(opts: &GlobalOptions) -> Result<()> {
    let config = Config::load_at(opts.config_ref())?;
    let path = Config::resolve_path(opts.config_ref())?;

    if opts.format == Some(OutputFormat::Json) {
        println!("{}", format_json(&config)?);
        return Ok(());
    }

    let url_source = if opts.api_url.is_some() {
        "flag/env"
    } else if config.api_url.is_some() {
        "config"
    } else {
        "default"
    };

    println!("Config file: {}", path.display().to_string().cyan());
    println!(
        "{}",
        format_card(&[
            (
                "API URL",
                format!("{} ({})", config.api_url(opts.api_url_ref()), url_source)
            ),
            (
                "Format",
                config
                    .preferences
                    .format
                    .clone()
                    .unwrap_or_else(|| "pretty (default)".to_string())
            ),
            (
                "Limit",
                config
                    .preferences
                    .limit
                    .map(|l| l.to_string())
                    .unwrap_or_else(|| "none".to_string())
            ),
        ])
    );
    Ok(())
}

pub fn set_url(opts: &GlobalOptions, url: &str) -> Result<()> {
    let url = validate_url(url)?;
    update(opts, |config| config.api_url = Some(url.clone()))?;
    println!("{} API URL set to {}", "✓".green(), url.cyan());
    if url == DEFAULT_API_URL {
        println!("  {}", "(same as the built-in default)".dimmed());
    }
    Ok(())
}

pub fn set_format(opts: &GlobalOptions, format: OutputFormat) -> Result<()> {
    let value = match format {
        OutputFormat::Pretty => "pretty",
        OutputFormat::Table => "table",
        OutputFormat::Json => "json",
    };
    update(opts, |config| config.preferences.format = Some(value.to_string()))?;
    println!("{} Default format set to {}", "✓".green(), value.bold());
    Ok(())
}

pub fn set_limit(opts: &GlobalOptions, limit: usize) -> Result<()> {
    if limit == 0 {
        return Err(ValidationError::InvalidValue {
            field: "limit",
            reason: "must be at least 1".to_string(),
        }
        .into());
    }
    update(opts, |config| config.preferences.limit = Some(limit))?;
    println!("{} Default limit set to {}", "✓".green(), limit);
    Ok(())
}

fn update(opts: &GlobalOptions, change: impl FnOnce(&mut Config)) -> Result<()> {
    let mut config = Config::load_at(opts.config_ref())?;
    change(&mut config);
    config.save_at(opts.config_ref())
}

/// Require an http(s) scheme and drop trailing slashes
fn validate_url(url: &str) -> Result<String> {
    let url = url.trim().trim_end_matches('/');
    let has_host = url
        .split_once("://")
        .is_some_and(|(scheme, rest)| matches!(scheme, "http" | "https") && !rest.is_empty());

    if has_host {
        Ok(url.to_string())
    } else {
        Err(ValidationError::InvalidValue {
            field: "url",
            reason: format!("'{}' must start with http:// or https://", url),
        }
        .into())
    }
}
