//! Authentication commands: login, signup, OTP and password flows

use colored::Colorize;
use dialoguer::{Input, Password, theme::ColorfulTheme};
use log::debug;

use crate::cli::args::GlobalOptions;
use crate::cli::{CommandContext, OutputFormat};
use crate::client::AuthApi;
use crate::client::models::{MessageResponse, SignupRequest};
use crate::error::{Result, ValidationError};
use crate::output::json::format_json;
use crate::output::table::format_card;
use crate::router::{self, DASHBOARD_ROUTE};
use crate::session::Role;

/// Seconds the backend asks clients to wait between resend requests
pub const RESEND_COOLDOWN_SECS: u64 = 30;

const OTP_LENGTH: usize = 6;

/// Log in, persist the session and report which dashboard it opens
pub async fn login(
    opts: &GlobalOptions,
    username: Option<String>,
    password: Option<String>,
) -> Result<()> {
    let mut ctx = CommandContext::new(opts)?;

    let username = match username {
        Some(u) => u,
        None => Input::<String>::with_theme(&ColorfulTheme::default())
            .with_prompt("Username")
            .interact_text()?,
    };
    let password = match password {
        Some(p) => p,
        None => Password::with_theme(&ColorfulTheme::default())
            .with_prompt("Password")
            .interact()?,
    };

    let session = ctx.session.login(&ctx.client, &username, &password).await?;

    if ctx.format == OutputFormat::Json {
        println!("{}", format_json(session)?);
        return Ok(());
    }

    let role = session
        .role
        .map(|r| r.to_string())
        .unwrap_or_else(|| "unknown role".to_string());
    println!(
        "{} Logged in as {} ({})",
        "✓".green(),
        session.username.bold(),
        role
    );

    let view = router::resolve(Some(session), DASHBOARD_ROUTE);
    println!("  → Run {} to see your {}", "carelink open".cyan(), view);
    Ok(())
}

/// Clear the stored session; no server call
pub fn logout(opts: &GlobalOptions) -> Result<()> {
    let mut ctx = CommandContext::new(opts)?;
    let was_logged_in = ctx.session.is_authenticated();
    let next = ctx.session.logout()?;

    if was_logged_in {
        println!("{} Logged out", "✓".green());
    } else {
        println!("{} No active session", "○".dimmed());
    }
    println!("  → Next: {}", next.dimmed());
    Ok(())
}

/// Register an account; the password is prompted twice
pub async fn signup(
    opts: &GlobalOptions,
    username: String,
    email: String,
    phone: Option<String>,
    role: Role,
) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let password = prompt_new_password()?;

    let request = SignupRequest {
        username,
        email,
        phone: phone.filter(|p| !p.trim().is_empty()),
        role: role.as_str().to_string(),
        password,
    };
    validate_signup(&request)?;

    let profile = ctx.client.signup(&request).await?;
    debug!("Created user {} with id {}", profile.username, profile.id);

    if ctx.format == OutputFormat::Json {
        println!("{}", format_json(&profile)?);
        return Ok(());
    }

    println!("{} Account created for {}", "✓".green(), profile.username.bold());
    println!(
        "  → Check {} for a code, then run {}",
        profile.email.cyan(),
        format!("carelink verify-otp --email {} --code <CODE>", profile.email).cyan()
    );
    Ok(())
}

pub async fn verify_otp(opts: &GlobalOptions, email: &str, code: &str) -> Result<()> {
    validate_otp(code)?;
    let ctx = CommandContext::new(opts)?;
    let response = ctx.client.verify_otp(email, code.trim()).await?;
    print_message(ctx.format, &response, "Code verified")
}

pub async fn resend_otp(opts: &GlobalOptions, email: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let response = ctx.client.resend_otp(email).await?;
    print_message(ctx.format, &response, "A new code has been sent")?;

    if ctx.format != OutputFormat::Json {
        println!(
            "  {}",
            format!("You can request another code in {}s.", RESEND_COOLDOWN_SECS).dimmed()
        );
    }
    Ok(())
}

pub async fn forgot_password(opts: &GlobalOptions, email: &str) -> Result<()> {
    if email.trim().is_empty() {
        return Err(ValidationError::MissingField("email").into());
    }
    let ctx = CommandContext::new(opts)?;
    let response = ctx.client.forgot_password(email).await?;
    print_message(ctx.format, &response, "Reset instructions sent")?;

    if ctx.format != OutputFormat::Json {
        if let Some(ref link) = response.reset_link {
            println!("  Reset link: {}", link.cyan());
        }
        if let Some(ref token) = response.reset_token {
            println!(
                "  → Run {}",
                format!("carelink reset-password --token {}", token).cyan()
            );
        }
    }
    Ok(())
}

/// Set a new password; the password is prompted twice
pub async fn reset_password(opts: &GlobalOptions, token: &str) -> Result<()> {
    if token.trim().is_empty() {
        return Err(ValidationError::InvalidValue {
            field: "token",
            reason: "reset token is empty".to_string(),
        }
        .into());
    }
    let ctx = CommandContext::new(opts)?;
    let password = prompt_new_password()?;
    let response = ctx.client.reset_password(token, &password).await?;
    print_message(ctx.format, &response, "Password updated")?;

    if ctx.format != OutputFormat::Json {
        println!("  → Run {} with your new password", "carelink login".cyan());
    }
    Ok(())
}

pub async fn refresh(opts: &GlobalOptions) -> Result<()> {
    let mut ctx = CommandContext::new(opts)?;
    let session = ctx.session.refresh(&ctx.client).await?;
    println!("{} Access token refreshed for {}", "✓".green(), session.username.bold());
    Ok(())
}

/// Show the server's view of the logged-in user
pub async fn whoami(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let profile = ctx.client.me(ctx.token()?).await?;

    match ctx.format {
        OutputFormat::Json => println!("{}", format_json(&profile)?),
        OutputFormat::Pretty | OutputFormat::Table => {
            println!(
                "{}",
                format_card(&[
                    ("ID", profile.id.to_string()),
                    ("Username", profile.username.clone()),
                    ("Email", profile.email.clone()),
                    ("Phone", profile.phone.clone().unwrap_or_else(|| "--".to_string())),
                    ("Role", profile.role.clone()),
                ])
            );
        }
    }
    Ok(())
}

fn print_message(format: OutputFormat, response: &MessageResponse, fallback: &str) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", format_json(response)?),
        OutputFormat::Pretty | OutputFormat::Table => {
            let message = response.message.as_deref().unwrap_or(fallback);
            println!("{} {}", "✓".green(), message);
        }
    }
    Ok(())
}

fn prompt_new_password() -> Result<String> {
    let theme = ColorfulTheme::default();
    let password = Password::with_theme(&theme)
        .with_prompt("New password")
        .interact()?;
    let confirmation = Password::with_theme(&theme)
        .with_prompt("Confirm password")
        .interact()?;

    confirm_password(password, &confirmation)
}

/// Both entries must match and be non-empty
pub fn confirm_password(password: String, confirmation: &str) -> Result<String> {
    if password.is_empty() {
        return Err(ValidationError::MissingField("password").into());
    }
    if password != confirmation {
        return Err(ValidationError::PasswordMismatch.into());
    }
    Ok(password)
}

/// Exactly six ASCII digits, surrounding whitespace ignored
pub fn validate_otp(code: &str) -> Result<()> {
    let code = code.trim();
    if code.len() == OTP_LENGTH && code.chars().all(|c| c.is_ascii_digit()) {
        Ok(())
    } else {
        Err(ValidationError::InvalidOtp.into())
    }
}

fn validate_signup(request: &SignupRequest) -> Result<()> {
    if request.username.trim().is_empty() {
        return Err(ValidationError::MissingField("username").into());
    }
    if !request.email.contains('@') {
        return Err(ValidationError::InvalidValue {
            field: "email",
            reason: format!("'{}' is not an email address", request.email),
        }
        .into());
    }
    Ok(())
}
