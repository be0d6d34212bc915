//! Doctor earnings commands

use chrono::{Local, NaiveDate};
use colored::Colorize;

use crate::cli::args::GlobalOptions;
use crate::cli::{CommandContext, DateRangeArgs, LimitArgs, OutputFormat};
use crate::client::EarningsApi;
use crate::client::models::{Payment, PaymentQuery, PaymentStatus};
use crate::dashboard::doctor::EARNINGS_WINDOW_DAYS;
use crate::dashboard::insights::{self, EarningsBreakdown};
use crate::error::{Result, ValidationError};
use crate::models::PaymentDisplay;
use crate::output::Formattable;
use crate::output::formatters::format_amount;
use crate::output::json::format_json;
use crate::output::table::format_card;

pub async fn summary(opts: &GlobalOptions, range: DateRangeArgs) -> Result<()> {
    let query = to_query(range, None)?;
    let ctx = CommandContext::new(opts)?;
    let summary = ctx.client.earnings_summary(ctx.token()?, &query).await?;

    match ctx.format {
        OutputFormat::Json => println!("{}", format_json(&summary)?),
        OutputFormat::Pretty | OutputFormat::Table => println!(
            "{}",
            format_card(&[
                ("Total", format_amount(summary.total_amount)),
                ("Completed payments", summary.completed_count.to_string()),
                ("Pending payments", summary.pending_count.to_string()),
            ])
        ),
    }
    Ok(())
}

/// Payment history. The range is sent to the server and applied locally
/// as whole, inclusive days; with no range the last 30 days are shown.
pub async fn payments(
    opts: &GlobalOptions,
    range: DateRangeArgs,
    pending_only: bool,
    limit: LimitArgs,
) -> Result<()> {
    let today = Local::now().date_naive();
    let query = to_query(range, Some(today))?;

    let ctx = CommandContext::new(opts)?;
    let payments = ctx.client.payment_history(ctx.token()?, &query).await?;
    let payments = select_payments(&payments, &query, pending_only);

    let rows: Vec<PaymentDisplay> = limit
        .apply(payments, ctx.limit_preference())
        .into_iter()
        .map(Into::into)
        .collect();
    rows.print(ctx.format)
}

/// Earnings card over the last 30 days
pub async fn breakdown(opts: &GlobalOptions) -> Result<()> {
    let today = Local::now().date_naive();
    let ctx = CommandContext::new(opts)?;
    let payments = ctx
        .client
        .payment_history(ctx.token()?, &PaymentQuery::last_days(today, EARNINGS_WINDOW_DAYS))
        .await?;

    let breakdown = insights::earnings_breakdown(&payments, today);
    match ctx.format {
        OutputFormat::Json => println!("{}", format_json(&breakdown)?),
        OutputFormat::Pretty | OutputFormat::Table => {
            println!("{}", "Earnings (last 30 days)".bold());
            println!("{}", breakdown_card(&breakdown));
        }
    }
    Ok(())
}

pub fn breakdown_card(breakdown: &EarningsBreakdown) -> String {
    format_card(&[
        ("Today", format_amount(breakdown.today_amount)),
        ("This month", format_amount(breakdown.month_amount)),
        (
            "Pending",
            format!(
                "{} ({} payments)",
                format_amount(breakdown.pending_amount),
                breakdown.pending_count
            ),
        ),
    ])
}

/// Build the server query; `default_today` fills in the 30-day window when
/// no bound is given
fn to_query(range: DateRangeArgs, default_today: Option<NaiveDate>) -> Result<PaymentQuery> {
    if let (Some(from), Some(to)) = (range.from, range.to) {
        if from > to {
            return Err(ValidationError::InvalidValue {
                field: "date range",
                reason: format!("--from {} is after --to {}", from, to),
            }
            .into());
        }
    }

    Ok(match (range.from, range.to, default_today) {
        (None, None, Some(today)) => PaymentQuery::last_days(today, EARNINGS_WINDOW_DAYS),
        (from_date, to_date, _) => PaymentQuery { from_date, to_date },
    })
}

fn select_payments(payments: &[Payment], query: &PaymentQuery, pending_only: bool) -> Vec<Payment> {
    let mut selected = insights::filter_payments_by_range(payments, query.from_date, query.to_date);
    if pending_only {
        selected.retain(|p| p.status == PaymentStatus::Pending);
    }
    selected
}
