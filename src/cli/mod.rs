//! CLI command definitions and handlers

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
pub use clap_complete::Shell;

pub mod appointment;
pub mod args;
pub mod auth;
pub mod chat;
pub mod completions;
pub mod config;
pub mod context;
pub mod earnings;
pub mod family;
pub mod notification;
pub mod open;
pub mod practice;
pub mod status;

pub use args::{DateRangeArgs, LimitArgs, OutputFormat};
pub use context::CommandContext;

use crate::client::models::RequestStatus;
use crate::router::DASHBOARD_ROUTE;
use crate::session::Role;
use appointment::StatusArg;

/// CareLink CLI - terminal companion for the CareLink telemedicine platform
#[derive(Parser, Debug)]
#[command(name = "carelink")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (pretty, table, json)
    #[arg(
        long,
        global = true,
        env = "CARELINK_FORMAT",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: Option<OutputFormat>,

    /// Override config file location
    #[arg(long, global = true, env = "CARELINK_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Override session file location
    #[arg(long, global = true, env = "CARELINK_SESSION", hide_env = true)]
    pub session: Option<String>,

    /// Backend base URL (default http://localhost:8000)
    #[arg(long = "api-url", global = true, env = "CARELINK_API_URL", hide_env = true)]
    pub api_url: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "CARELINK_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Log in and store the session
    Login {
        /// Username (prompted when omitted)
        #[arg(long, short = 'u')]
        username: Option<String>,

        /// Password (prompted when omitted)
        #[arg(long, env = "CARELINK_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },

    /// Forget the stored session
    Logout,

    /// Create an account (password is prompted twice)
    Signup {
        #[arg(long)]
        username: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        phone: Option<String>,

        #[arg(long, value_enum, default_value = "patient")]
        role: Role,
    },

    /// Confirm the one-time code sent by email
    VerifyOtp {
        #[arg(long)]
        email: String,

        /// Six-digit code
        #[arg(long)]
        code: String,
    },

    /// Send a fresh one-time code
    ResendOtp {
        #[arg(long)]
        email: String,
    },

    /// Start a password reset
    ForgotPassword {
        #[arg(long)]
        email: String,
    },

    /// Set a new password with a reset token
    ResetPassword {
        #[arg(long)]
        token: String,
    },

    /// Trade the stored refresh token for a new access token
    Refresh,

    /// Show the profile behind the stored token
    Whoami,

    /// Show local session and configuration state
    Status,

    /// Open the view the router selects for ROUTE
    Open {
        /// Route fragment, e.g. /dashboard or #/signup
        #[arg(default_value = DASHBOARD_ROUTE)]
        route: String,
    },

    /// Book and manage appointments
    #[command(subcommand, visible_alias = "appt")]
    Appointment(AppointmentCommands),

    /// Doctor earnings and payments
    #[command(subcommand)]
    Earnings(EarningsCommands),

    /// Doctor notifications
    #[command(subcommand)]
    Notification(NotificationCommands),

    /// Doctor: appointment request queue
    #[command(subcommand)]
    Request(RequestCommands),

    /// Doctor: show the consultation in progress
    Consultation,

    /// Doctor: this week's patients from the schedule and request history
    Patients {
        #[command(flatten)]
        limit: LimitArgs,
    },

    /// Doctor-patient chat
    #[command(subcommand)]
    Chat(ChatCommands),

    /// Patient family members
    #[command(subcommand)]
    Family(FamilyCommands),

    /// View or change local configuration
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    #[command(after_help = "\
Examples:
  bash:   carelink completion bash > /etc/bash_completion.d/carelink
  zsh:    carelink completion zsh > \"${fpath[1]}/_carelink\"
  fish:   carelink completion fish > ~/.config/fish/completions/carelink.fish")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Appointment subcommands
#[derive(Subcommand, Debug)]
pub enum AppointmentCommands {
    /// List your appointments
    #[command(visible_alias = "ls")]
    List {
        /// Only today and later
        #[arg(long, conflicts_with = "past")]
        upcoming: bool,

        /// Only before today
        #[arg(long)]
        past: bool,

        #[command(flatten)]
        limit: LimitArgs,
    },

    /// Show one appointment
    Get { id: i64 },

    /// Book an appointment
    Book {
        #[arg(long)]
        doctor_id: i64,

        /// Day of the appointment (YYYY-MM-DD)
        #[arg(long)]
        date: NaiveDate,

        /// Time of day (HH:MM, 24-hour)
        #[arg(long)]
        time: String,

        #[arg(long)]
        reason: Option<String>,
    },

    /// Change status or reschedule
    Update {
        id: i64,

        #[arg(long, value_enum)]
        status: StatusArg,

        #[arg(long)]
        date: Option<NaiveDate>,

        #[arg(long)]
        time: Option<String>,
    },

    /// Cancel an appointment
    Cancel {
        id: i64,

        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Admin: appointment counters
    Stats,

    /// Admin: today's appointments
    Today {
        #[command(flatten)]
        limit: LimitArgs,
    },

    /// Admin: upcoming appointments
    Upcoming {
        #[command(flatten)]
        limit: LimitArgs,
    },

    /// Admin: past appointments
    Past {
        #[command(flatten)]
        limit: LimitArgs,
    },
}

/// Earnings subcommands
#[derive(Subcommand, Debug)]
pub enum EarningsCommands {
    /// Server-side totals
    Summary {
        #[command(flatten)]
        range: DateRangeArgs,
    },

    /// Payment history (last 30 days unless a range is given)
    Payments {
        #[command(flatten)]
        range: DateRangeArgs,

        /// Only pending payments
        #[arg(long)]
        pending: bool,

        #[command(flatten)]
        limit: LimitArgs,
    },

    /// Today, this month and pending totals from the last 30 days
    Breakdown,
}

/// Notification subcommands
#[derive(Subcommand, Debug)]
pub enum NotificationCommands {
    /// List notifications
    #[command(visible_alias = "ls")]
    List {
        /// Only unread notifications
        #[arg(long)]
        unread: bool,

        #[command(flatten)]
        limit: LimitArgs,
    },

    /// Mark one notification read
    Read { id: i64 },

    /// Mark every notification read
    ReadAll,
}

/// Request queue subcommands
#[derive(Subcommand, Debug)]
pub enum RequestCommands {
    /// List requests
    #[command(visible_alias = "ls")]
    List {
        #[arg(long, value_enum, default_value = "pending")]
        status: RequestStatus,

        #[command(flatten)]
        limit: LimitArgs,
    },

    /// Approve a pending request
    Approve { id: i64 },

    /// Reject a pending request
    Reject {
        id: i64,

        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

/// Chat subcommands
#[derive(Subcommand, Debug)]
pub enum ChatCommands {
    /// Show the conversation with a patient
    History {
        patient_id: i64,

        #[command(flatten)]
        limit: LimitArgs,
    },

    /// Send a message to a patient's thread
    Send { patient_id: i64, message: String },
}

/// Family member subcommands
#[derive(Subcommand, Debug)]
pub enum FamilyCommands {
    /// List family members
    #[command(visible_alias = "ls")]
    List,

    /// Add a family member
    Add {
        #[arg(long)]
        name: String,

        /// e.g. spouse, child, parent
        #[arg(long)]
        relation: String,

        #[arg(long)]
        age: u32,

        #[arg(long)]
        gender: String,
    },
}

/// Configuration subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print the resolved configuration
    Show,

    /// Store the backend base URL
    SetUrl { url: String },

    /// Store the default output format
    SetFormat {
        #[arg(value_enum)]
        format: OutputFormat,
    },

    /// Store the default row limit for list commands
    SetLimit { limit: usize },
}
