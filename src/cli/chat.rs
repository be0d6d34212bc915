//! Chat commands

use colored::Colorize;

use crate::cli::args::GlobalOptions;
use crate::cli::{CommandContext, LimitArgs, OutputFormat};
use crate::dashboard::{ChatThread, sender_for};
use crate::error::Result;
use crate::models::ChatDisplay;
use crate::output::Formattable;
use crate::output::json::format_json;

pub async fn history(opts: &GlobalOptions, patient_id: i64, limit: LimitArgs) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let thread = ChatThread::load(&ctx.client, ctx.token()?, patient_id).await?;

    let rows: Vec<ChatDisplay> = limit
        .apply(thread.messages().to_vec(), ctx.limit_preference())
        .iter()
        .map(ChatDisplay::from)
        .collect();
    rows.print(ctx.format)
}

/// Send one message. The sending side follows the stored role.
pub async fn send(opts: &GlobalOptions, patient_id: i64, text: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let token = ctx.token()?;
    let sender = sender_for(ctx.session.current().and_then(|s| s.role));

    let mut thread = ChatThread::new(patient_id, Vec::new());
    let sent = thread.send(&ctx.client, token, sender, text).await?;

    if ctx.format == OutputFormat::Json {
        println!("{}", format_json(sent)?);
    } else {
        println!("{} Sent to patient #{} as {}", "✓".green(), patient_id, sender.as_str());
    }
    Ok(())
}
