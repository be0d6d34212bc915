//! Common CLI types shared across commands

use chrono::NaiveDate;
use clap::Args;

/// Output format options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Pretty format - human-optimized rich formatting (default)
    #[default]
    Pretty,
    /// Table format - one row per entry
    Table,
    /// JSON format - structured for scripts
    Json,
}

impl OutputFormat {
    /// Parse a config preference such as `json`; unknown values are ignored
    pub fn from_preference(value: &str) -> Option<Self> {
        <Self as clap::ValueEnum>::from_str(value.trim(), true).ok()
    }
}

/// Row limit for list commands
#[derive(Debug, Clone, Copy, Args, Default)]
pub struct LimitArgs {
    /// Show at most N rows (defaults to `preferences.limit` from config)
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,
}

impl LimitArgs {
    /// Truncate `items` to the flag, falling back to `preference`
    pub fn apply<T>(&self, mut items: Vec<T>, preference: Option<usize>) -> Vec<T> {
        if let Some(limit) = self.limit.or(preference) {
            items.truncate(limit);
        }
        items
    }
}

/// Inclusive date window
#[derive(Debug, Clone, Copy, Args, Default)]
pub struct DateRangeArgs {
    /// First day to include (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<NaiveDate>,

    /// Last day to include (YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<NaiveDate>,
}
