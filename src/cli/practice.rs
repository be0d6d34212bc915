//! Doctor practice commands: request queue, live consultation and the
//! weekly patient list

use chrono::Local;
use colored::Colorize;
use dialoguer::Confirm;
use dialoguer::theme::ColorfulTheme;
use log::debug;

use crate::cli::args::GlobalOptions;
use crate::cli::{CommandContext, LimitArgs, OutputFormat};
use crate::client::PracticeApi;
use crate::client::models::{LiveConsultation, RequestAction, RequestStatus};
use crate::dashboard::insights;
use crate::error::Result;
use crate::models::{PatientRecordDisplay, RequestDisplay};
use crate::output::Formattable;
use crate::output::json::format_json;

pub async fn list_requests(opts: &GlobalOptions, status: RequestStatus, limit: LimitArgs) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let requests = ctx.client.list_requests(ctx.token()?, status).await?;
    debug!("{} {} requests", requests.len(), status);

    let rows: Vec<RequestDisplay> = limit
        .apply(requests, ctx.limit_preference())
        .into_iter()
        .map(Into::into)
        .collect();
    rows.print(ctx.format)
}

/// Approve or reject a request. Rejecting asks for confirmation unless
/// `yes` is set.
pub async fn decide(opts: &GlobalOptions, id: i64, action: RequestAction, yes: bool) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let token = ctx.token()?;

    if action == RequestAction::Reject && !yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(format!("Reject request #{}?", id))
            .default(false)
            .interact()?;
        if !confirmed {
            println!("{} Aborted", "○".dimmed());
            return Ok(());
        }
    }

    let response = ctx.client.decide_request(token, id, action).await?;
    if ctx.format == OutputFormat::Json {
        println!("{}", format_json(&response)?);
        return Ok(());
    }

    let message = response
        .message
        .unwrap_or_else(|| format!("Request #{} {}", id, action.outcome()));
    println!("{} {}", "✓".green(), message);
    Ok(())
}

pub async fn consultation(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let live = ctx.client.live_consultation(ctx.token()?).await?;

    if ctx.format == OutputFormat::Json {
        println!("{}", format_json(&live)?);
        return Ok(());
    }

    match live {
        Some(live) => println!("{}", live_card(&live)),
        None => println!("{} No consultation in progress", "○".dimmed()),
    }
    Ok(())
}

pub async fn patients(opts: &GlobalOptions, limit: LimitArgs) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let records = ctx.client.practice_records(ctx.token()?).await?;
    let week = insights::weekly_patients(&records, Local::now().date_naive());

    let rows: Vec<PatientRecordDisplay> = limit
        .apply(week, ctx.limit_preference())
        .iter()
        .map(PatientRecordDisplay::from)
        .collect();
    rows.print(ctx.format)
}

pub fn live_card(live: &LiveConsultation) -> String {
    let mut lines = vec![format!("{} {}", "●".red(), live.patient_name.bold())];
    if let Some(ref kind) = live.kind {
        lines.push(format!("  Type:    {}", kind));
    }
    if !live.tags.is_empty() {
        lines.push(format!("  Tags:    {}", live.tags.join(", ")));
    }
    if let Some(ref start) = live.timer_start {
        lines.push(format!("  Started: {}", start));
    }
    lines.join("\n")
}
