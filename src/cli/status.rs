//! Status command implementation

use chrono::{DateTime, Utc};
use colored::Colorize;

use crate::cli::CommandContext;
use crate::cli::args::GlobalOptions;
use crate::config::Config;
use crate::error::Result;
use crate::output::formatters::format_remaining;
use crate::session::storage::LEGACY_ROLE_KEY;
use crate::session::{SessionStorage, jwt};

/// Show local configuration and session state. Makes no request.
pub fn run(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    println!("{}\n", "CareLink Status".bold());

    let config_path = Config::resolve_path(opts.config_ref())?;
    if config_path.exists() {
        println!("Config file: {}", config_path.display().to_string().cyan());
    } else {
        println!(
            "Config file: {} {}",
            config_path.display().to_string().cyan(),
            "(not created, using defaults)".dimmed()
        );
    }
    println!("API URL: {}", ctx.client.base_url().cyan());
    println!(
        "Session file: {}",
        ctx.session.storage().path().display().to_string().cyan()
    );
    println!();

    let Some(session) = ctx.session.current() else {
        println!("{} Not logged in", "✗".red());
        println!("  → Run 'carelink login' to sign in");
        println!();
        return Ok(());
    };

    println!("{} Logged in as {}", "✓".green(), session.username.bold());
    if !session.email.is_empty() {
        println!("{} Email: {}", "○".dimmed(), session.email);
    }
    match session.role {
        Some(role) => println!("{} Role: {}", "✓".green(), role),
        None => println!(
            "{} Role not recognized (patient dashboard will be used)",
            "⚠".yellow()
        ),
    }

    println!("{}", token_line(jwt::expiry(&session.access_token), Utc::now()));

    if session.refresh_token.is_some() {
        println!("{} Refresh token stored", "✓".green());
    } else {
        println!("{} No refresh token stored", "○".dimmed());
    }

    if ctx.session.storage().get(LEGACY_ROLE_KEY).is_some() {
        println!(
            "{} Legacy 'userRole' key present (rewritten on next login)",
            "○".dimmed()
        );
    }

    println!();
    Ok(())
}

/// Describe the access token's lifetime, as far as its payload says
fn token_line(expiry: Option<DateTime<Utc>>, now: DateTime<Utc>) -> String {
    match expiry {
        Some(expires) if expires > now => format!(
            "{} Access token valid (expires in {})",
            "✓".green(),
            format_remaining(expires - now)
        ),
        Some(_) => format!(
            "{} Access token expired (run 'carelink refresh' or 'carelink login')",
            "⚠".yellow()
        ),
        None => format!("{} Access token expiry unknown", "○".dimmed()),
    }
}
