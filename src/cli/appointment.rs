//! Appointment commands

use chrono::{Local, NaiveDate, NaiveTime};
use colored::Colorize;
use dialoguer::{Confirm, theme::ColorfulTheme};
use log::debug;

use crate::cli::args::GlobalOptions;
use crate::cli::{CommandContext, LimitArgs, OutputFormat};
use crate::client::AppointmentApi;
use crate::client::models::{
    Appointment, AppointmentStats, AppointmentStatus, AppointmentUpdate, NewAppointment,
};
use crate::dashboard::insights;
use crate::error::{Result, ValidationError};
use crate::models::AppointmentDisplay;
use crate::output::Formattable;
use crate::output::json::format_json;
use crate::output::table::format_card;

/// Statuses a user may set with `appointment update`
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum StatusArg {
    Pending,
    Scheduled,
    Confirmed,
    Completed,
    Cancelled,
    Rescheduled,
}

impl From<StatusArg> for AppointmentStatus {
    fn from(arg: StatusArg) -> Self {
        match arg {
            StatusArg::Pending => AppointmentStatus::Pending,
            StatusArg::Scheduled => AppointmentStatus::Scheduled,
            StatusArg::Confirmed => AppointmentStatus::Confirmed,
            StatusArg::Completed => AppointmentStatus::Completed,
            StatusArg::Cancelled => AppointmentStatus::Cancelled,
            StatusArg::Rescheduled => AppointmentStatus::Rescheduled,
        }
    }
}

/// Which slice of the patient's own appointments to list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListScope {
    All,
    Upcoming,
    Past,
}

impl ListScope {
    pub fn from_flags(upcoming: bool, past: bool) -> Self {
        match (upcoming, past) {
            (true, _) => ListScope::Upcoming,
            (false, true) => ListScope::Past,
            (false, false) => ListScope::All,
        }
    }
}

/// Which admin listing endpoint to call
#[derive(Debug, Clone, Copy)]
pub enum AdminList {
    Today,
    Upcoming,
    Past,
}

pub async fn list(opts: &GlobalOptions, scope: ListScope, limit: LimitArgs) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let appointments = ctx.client.list_my_appointments(ctx.token()?).await?;
    debug!("Fetched {} appointments", appointments.len());

    let today = Local::now().date_naive();
    let selected = select(appointments, scope, today);

    print_appointments(&ctx, limit.apply(selected, ctx.limit_preference()))
}

pub async fn get(opts: &GlobalOptions, id: i64) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let appointment = ctx.client.get_appointment(ctx.token()?, id).await?;
    print_detail(ctx.format, &appointment)
}

pub async fn book(
    opts: &GlobalOptions,
    doctor_id: i64,
    date: NaiveDate,
    time: &str,
    reason: Option<String>,
) -> Result<()> {
    let request = NewAppointment {
        doctor_id,
        appointment_date: date,
        appointment_time: normalize_time(time)?,
        reason: reason.filter(|r| !r.trim().is_empty()),
    };

    let ctx = CommandContext::new(opts)?;
    let appointment = ctx.client.create_appointment(ctx.token()?, &request).await?;

    if ctx.format == OutputFormat::Json {
        println!("{}", format_json(&appointment)?);
    } else {
        println!(
            "{} Booked appointment #{} on {} at {}",
            "✓".green(),
            appointment.id,
            appointment.appointment_date,
            appointment.appointment_time
        );
    }
    Ok(())
}

pub async fn update(
    opts: &GlobalOptions,
    id: i64,
    status: StatusArg,
    date: Option<NaiveDate>,
    time: Option<&str>,
) -> Result<()> {
    let update = AppointmentUpdate {
        status: status.into(),
        appointment_date: date,
        appointment_time: time.map(normalize_time).transpose()?,
    };

    let ctx = CommandContext::new(opts)?;
    let appointment = ctx.client.update_appointment(ctx.token()?, id, &update).await?;

    if ctx.format == OutputFormat::Json {
        println!("{}", format_json(&appointment)?);
    } else {
        println!(
            "{} Appointment #{} is now {}",
            "✓".green(),
            appointment.id,
            appointment.status.to_string().bold()
        );
    }
    Ok(())
}

pub async fn cancel(opts: &GlobalOptions, id: i64, yes: bool) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let token = ctx.token()?;

    if !yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(format!("Cancel appointment #{}?", id))
            .default(false)
            .interact()?;
        if !confirmed {
            println!("{} Aborted", "○".dimmed());
            return Ok(());
        }
    }

    let response = ctx.client.cancel_appointment(token, id).await?;
    let message = response
        .message
        .unwrap_or_else(|| format!("Appointment #{} cancelled", id));
    println!("{} {}", "✓".green(), message);
    Ok(())
}

pub async fn stats(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let stats = ctx.client.admin_appointment_stats(ctx.token()?).await?;

    match ctx.format {
        OutputFormat::Json => println!("{}", format_json(&stats)?),
        OutputFormat::Pretty | OutputFormat::Table => println!("{}", stats_card(&stats)),
    }
    Ok(())
}

pub async fn admin_list(opts: &GlobalOptions, which: AdminList, limit: LimitArgs) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let token = ctx.token()?;

    let appointments = match which {
        AdminList::Today => ctx.client.admin_today_appointments(token).await?,
        AdminList::Upcoming => ctx.client.admin_upcoming_appointments(token).await?,
        AdminList::Past => ctx.client.admin_past_appointments(token).await?,
    };
    debug!("Fetched {} {:?} appointments", appointments.len(), which);

    print_appointments(&ctx, limit.apply(appointments, ctx.limit_preference()))
}

/// Counters as a two-column card
pub fn stats_card(stats: &AppointmentStats) -> String {
    format_card(&[
        ("Today (scheduled)", stats.today.to_string()),
        ("Today (all)", stats.total_today.to_string()),
        ("Upcoming", stats.upcoming.to_string()),
        ("Completed", stats.completed.to_string()),
        ("Cancelled", stats.cancelled.to_string()),
        ("Rescheduled", stats.rescheduled.to_string()),
    ])
}

fn select(appointments: Vec<Appointment>, scope: ListScope, today: NaiveDate) -> Vec<Appointment> {
    match scope {
        ListScope::All => appointments,
        ListScope::Upcoming => insights::split_appointments(appointments, today).upcoming,
        ListScope::Past => insights::split_appointments(appointments, today).past,
    }
}

fn print_appointments(ctx: &CommandContext, appointments: Vec<Appointment>) -> Result<()> {
    let rows: Vec<AppointmentDisplay> = appointments.into_iter().map(Into::into).collect();
    rows.print(ctx.format)
}

fn print_detail(format: OutputFormat, a: &Appointment) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", format_json(a)?),
        OutputFormat::Pretty | OutputFormat::Table => {
            let row = AppointmentDisplay::from(a);
            println!(
                "{}",
                format_card(&[
                    ("ID", row.id.to_string()),
                    ("Date", row.date),
                    ("Time", row.time),
                    ("Patient", row.patient),
                    ("Doctor", row.doctor),
                    ("Status", row.status),
                    ("Reason", a.reason.clone().unwrap_or_else(|| "--".to_string())),
                ])
            );
        }
    }
    Ok(())
}

/// Accept `H:MM` or `HH:MM` on a 24-hour clock and return `HH:MM`
pub fn normalize_time(time: &str) -> Result<String> {
    NaiveTime::parse_from_str(time.trim(), "%H:%M")
        .map(|t| t.format("%H:%M").to_string())
        .map_err(|_| {
            ValidationError::InvalidValue {
                field: "time",
                reason: format!("'{}' is not a 24-hour HH:MM time", time),
            }
            .into()
        })
}
