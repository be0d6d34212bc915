//! `open`: route to a view and render it

use std::time::Duration;

use chrono::Local;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use log::debug;

use crate::cli::appointment::stats_card;
use crate::cli::args::GlobalOptions;
use crate::cli::earnings::breakdown_card;
use crate::cli::practice::live_card;
use crate::cli::{CommandContext, OutputFormat};
use crate::client::AdminOverview;
use crate::client::models::Appointment;
use crate::dashboard::{self, Dashboard, DoctorDashboard, PatientDashboard};
use crate::error::Result;
use crate::models::{
    AppointmentDisplay, FamilyDisplay, NotificationDisplay, PatientRecordDisplay, RequestDisplay,
};
use crate::output::json::format_json;
use crate::output::table::format_table;
use crate::router::{self, View};

/// Rows shown per section before pointing at the full listing command
const SECTION_ROWS: usize = 10;

pub async fn run(opts: &GlobalOptions, route: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let view = router::resolve(ctx.session.current(), route);
    debug!("Route {:?} resolved to {:?}", route, view);

    if !view.requires_session() {
        print_auth_view(ctx.format, view)?;
        return Ok(());
    }

    let token = ctx.token()?;
    let today = Local::now().date_naive();

    let progress = spinner(ctx.format, view);
    let loaded = dashboard::load(&ctx.client, view, token, today).await;
    if let Some(ref pb) = progress {
        pb.finish_and_clear();
    }

    let Some(dashboard) = loaded? else {
        return Ok(());
    };

    if ctx.format == OutputFormat::Json {
        println!("{}", format_json(&dashboard)?);
        return Ok(());
    }

    if let Some(session) = ctx.session.current() {
        println!(
            "{} {}\n",
            capitalize(&view.to_string()).bold(),
            format!("· {}", session.username).dimmed()
        );
    }

    match dashboard {
        Dashboard::Admin(overview) => render_admin(&overview),
        Dashboard::Doctor(doctor) => render_doctor(&doctor),
        Dashboard::Patient(patient) => render_patient(&patient),
    }
    Ok(())
}

fn spinner(format: OutputFormat, view: View) -> Option<ProgressBar> {
    if format == OutputFormat::Json {
        return None;
    }

    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(format!("Loading {}...", view));
    pb.enable_steady_tick(Duration::from_millis(100));
    Some(pb)
}

fn print_auth_view(format: OutputFormat, view: View) -> Result<()> {
    if format == OutputFormat::Json {
        println!(
            "{}",
            format_json(&serde_json::json!({ "view": view, "route": view.route() }))?
        );
        return Ok(());
    }

    let (headline, command) = match view {
        View::Signup => ("Create an account", "carelink signup --username <U> --email <E>"),
        View::ForgotPassword => ("Reset your password", "carelink forgot-password --email <E>"),
        _ => ("You are not logged in", "carelink login"),
    };
    println!("{} {}", "○".dimmed(), headline);
    println!("  → Run {}", command.cyan());
    Ok(())
}

fn render_admin(overview: &AdminOverview) {
    println!("{}", stats_card(&overview.stats));
    section("Today", &overview.today, "carelink appointment today");
    section("Upcoming", &overview.upcoming, "carelink appointment upcoming");
    section("Past", &overview.past, "carelink appointment past");
}

fn render_doctor(doctor: &DoctorDashboard) {
    if let Some(ref live) = doctor.live {
        println!("{}", "Live consultation".bold());
        println!("{}\n", live_card(live));
    }

    println!("{}", "Earnings (last 30 days)".bold());
    println!("{}", breakdown_card(&doctor.breakdown));

    let unread = doctor.notifications.unread_count();
    println!(
        "\n{} ({} unread)",
        "Notifications".bold(),
        if unread > 0 {
            unread.to_string().yellow()
        } else {
            unread.to_string().normal()
        }
    );
    let rows: Vec<NotificationDisplay> = doctor
        .notifications
        .items()
        .iter()
        .filter(|n| !n.is_read)
        .take(SECTION_ROWS)
        .map(NotificationDisplay::from)
        .collect();
    if !rows.is_empty() {
        println!("{}", format_table(&rows));
    }

    println!("\n{} ({})", "Pending requests".bold(), doctor.requests.len());
    let rows: Vec<RequestDisplay> = doctor
        .requests
        .iter()
        .take(SECTION_ROWS)
        .map(RequestDisplay::from)
        .collect();
    println!("{}", format_table(&rows));
    more_hint(doctor.requests.len(), "carelink request list");

    println!("\n{} ({})", "This week".bold(), doctor.this_week.len());
    let rows: Vec<PatientRecordDisplay> = doctor
        .this_week
        .iter()
        .take(SECTION_ROWS)
        .map(PatientRecordDisplay::from)
        .collect();
    println!("{}", format_table(&rows));
    more_hint(doctor.this_week.len(), "carelink patients");
}

fn render_patient(patient: &PatientDashboard) {
    section(
        "Upcoming appointments",
        &patient.appointments.upcoming,
        "carelink appointment list --upcoming",
    );
    section(
        "Past appointments",
        &patient.appointments.past,
        "carelink appointment list --past",
    );

    println!("\n{}", "Family members".bold());
    let rows: Vec<FamilyDisplay> = patient.family.iter().cloned().map(Into::into).collect();
    println!("{}", format_table(&rows));
}

fn section(title: &str, appointments: &[Appointment], more: &str) {
    println!("\n{} ({})", title.bold(), appointments.len());

    let rows: Vec<AppointmentDisplay> = appointments
        .iter()
        .take(SECTION_ROWS)
        .map(AppointmentDisplay::from)
        .collect();
    println!("{}", format_table(&rows));
    more_hint(appointments.len(), more);
}

fn more_hint(total: usize, more: &str) {
    if total > SECTION_ROWS {
        println!("  {} {}", "… see".dimmed(), more.cyan());
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
