//! Doctor notification commands

use colored::Colorize;
use log::debug;

use crate::cli::args::GlobalOptions;
use crate::cli::{CommandContext, LimitArgs, OutputFormat};
use crate::client::NotificationApi;
use crate::client::models::Notification;
use crate::dashboard::NotificationFeed;
use crate::error::Result;
use crate::models::NotificationDisplay;
use crate::output::Formattable;

pub async fn list(opts: &GlobalOptions, unread_only: bool, limit: LimitArgs) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let mut notifications = ctx.client.list_notifications(ctx.token()?).await?;
    if unread_only {
        notifications.retain(|n| !n.is_read);
    }

    print_notifications(&ctx, limit.apply(notifications, ctx.limit_preference()))
}

/// Mark one notification read. The local feed is updated first and rolled
/// back if the server refuses.
pub async fn read(opts: &GlobalOptions, id: i64) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let token = ctx.token()?;

    let mut feed = NotificationFeed::new(ctx.client.list_notifications(token).await?);
    if !feed.items().iter().any(|n| n.id == id) {
        debug!("Notification {} not in the current feed", id);
    }
    feed.mark_read(&ctx.client, token, id).await?;

    report(&ctx, &feed, &format!("Notification #{} marked read", id))
}

pub async fn read_all(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let token = ctx.token()?;

    let mut feed = NotificationFeed::new(ctx.client.list_notifications(token).await?);
    feed.mark_all_read(&ctx.client, token).await?;

    report(&ctx, &feed, "All notifications marked read")
}

fn report(ctx: &CommandContext, feed: &NotificationFeed, message: &str) -> Result<()> {
    if ctx.format == OutputFormat::Json {
        return print_notifications(ctx, feed.items().to_vec());
    }

    println!("{} {}", "✓".green(), message);
    println!("  {} unread", feed.unread_count());
    Ok(())
}

fn print_notifications(ctx: &CommandContext, notifications: Vec<Notification>) -> Result<()> {
    let rows: Vec<NotificationDisplay> = notifications.into_iter().map(Into::into).collect();
    rows.print(ctx.format)
}
