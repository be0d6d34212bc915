//! CareLink CLI - terminal companion for the CareLink telemedicine platform

use clap::Parser;

mod cli;
mod client;
mod config;
mod dashboard;
mod error;
mod models;
mod optimistic;
mod output;
mod router;
mod session;

use cli::appointment::{AdminList, ListScope};
use cli::args::GlobalOptions;
use cli::{
    AppointmentCommands, ChatCommands, Cli, Commands, ConfigCommands, EarningsCommands,
    FamilyCommands, NotificationCommands, RequestCommands,
};
use client::models::{NewFamilyMember, RequestAction};
use error::{Error, Result};

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        if let Error::Api(ref api) = err {
            if api.status() == Some(401) {
                eprintln!("  → Run `carelink refresh` or `carelink login` to renew the session");
            }
        }
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Login { username, password } => cli::auth::login(&opts, username, password).await,
        Commands::Logout => cli::auth::logout(&opts),
        Commands::Signup {
            username,
            email,
            phone,
            role,
        } => cli::auth::signup(&opts, username, email, phone, role).await,
        Commands::VerifyOtp { email, code } => cli::auth::verify_otp(&opts, &email, &code).await,
        Commands::ResendOtp { email } => cli::auth::resend_otp(&opts, &email).await,
        Commands::ForgotPassword { email } => cli::auth::forgot_password(&opts, &email).await,
        Commands::ResetPassword { token } => cli::auth::reset_password(&opts, &token).await,
        Commands::Refresh => cli::auth::refresh(&opts).await,
        Commands::Whoami => cli::auth::whoami(&opts).await,
        Commands::Status => cli::status::run(&opts),
        Commands::Open { route } => cli::open::run(&opts, &route).await,
        Commands::Appointment(cmd) => match cmd {
            AppointmentCommands::List {
                upcoming,
                past,
                limit,
            } => cli::appointment::list(&opts, ListScope::from_flags(upcoming, past), limit).await,
            AppointmentCommands::Get { id } => cli::appointment::get(&opts, id).await,
            AppointmentCommands::Book {
                doctor_id,
                date,
                time,
                reason,
            } => cli::appointment::book(&opts, doctor_id, date, &time, reason).await,
            AppointmentCommands::Update {
                id,
                status,
                date,
                time,
            } => cli::appointment::update(&opts, id, status, date, time.as_deref()).await,
            AppointmentCommands::Cancel { id, yes } => cli::appointment::cancel(&opts, id, yes).await,
            AppointmentCommands::Stats => cli::appointment::stats(&opts).await,
            AppointmentCommands::Today { limit } => {
                cli::appointment::admin_list(&opts, AdminList::Today, limit).await
            }
            AppointmentCommands::Upcoming { limit } => {
                cli::appointment::admin_list(&opts, AdminList::Upcoming, limit).await
            }
            AppointmentCommands::Past { limit } => {
                cli::appointment::admin_list(&opts, AdminList::Past, limit).await
            }
        },
        Commands::Earnings(cmd) => match cmd {
            EarningsCommands::Summary { range } => cli::earnings::summary(&opts, range).await,
            EarningsCommands::Payments {
                range,
                pending,
                limit,
            } => cli::earnings::payments(&opts, range, pending, limit).await,
            EarningsCommands::Breakdown => cli::earnings::breakdown(&opts).await,
        },
        Commands::Notification(cmd) => match cmd {
            NotificationCommands::List { unread, limit } => {
                cli::notification::list(&opts, unread, limit).await
            }
            NotificationCommands::Read { id } => cli::notification::read(&opts, id).await,
            NotificationCommands::ReadAll => cli::notification::read_all(&opts).await,
        },
        Commands::Request(cmd) => match cmd {
            RequestCommands::List { status, limit } => {
                cli::practice::list_requests(&opts, status, limit).await
            }
            RequestCommands::Approve { id } => {
                cli::practice::decide(&opts, id, RequestAction::Approve, true).await
            }
            RequestCommands::Reject { id, yes } => {
                cli::practice::decide(&opts, id, RequestAction::Reject, yes).await
            }
        },
        Commands::Consultation => cli::practice::consultation(&opts).await,
        Commands::Patients { limit } => cli::practice::patients(&opts, limit).await,
        Commands::Chat(cmd) => match cmd {
            ChatCommands::History { patient_id, limit } => {
                cli::chat::history(&opts, patient_id, limit).await
            }
            ChatCommands::Send {
                patient_id,
                message,
            } => cli::chat::send(&opts, patient_id, &message).await,
        },
        Commands::Family(cmd) => match cmd {
            FamilyCommands::List => cli::family::list(&opts).await,
            FamilyCommands::Add {
                name,
                relation,
                age,
                gender,
            } => {
                let member = NewFamilyMember {
                    name,
                    relation,
                    age,
                    gender,
                };
                cli::family::add(&opts, member).await
            }
        },
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => cli::config::show(&opts),
            ConfigCommands::SetUrl { url } => cli::config::set_url(&opts, &url),
            ConfigCommands::SetFormat { format } => cli::config::set_format(&opts, format),
            ConfigCommands::SetLimit { limit } => cli::config::set_limit(&opts, limit),
        },
        Commands::Completion { shell } => {
            cli::completions::run(shell);
            Ok(())
        }
    }
}

/// `--debug` forces debug output; otherwise `RUST_LOG` applies, defaulting to warn
fn init_logging(debug: bool) {
    let default_filter = if debug { "debug" } else { "warn" };
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter));
    if debug {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.format_timestamp(None).init();
}
