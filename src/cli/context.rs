//! Command execution context
//!
//! Bundles what every command needs: loaded config, the restored session,
//! an API client pointed at the resolved base URL, and the output format.

use log::debug;

use crate::cli::OutputFormat;
use crate::cli::args::GlobalOptions;
use crate::client::CareClient;
use crate::config::Config;
use crate::error::Result;
use crate::session::{FileStorage, SessionStore};

pub struct CommandContext {
    pub config: Config,
    pub session: SessionStore<FileStorage>,
    pub client: CareClient,
    pub format: OutputFormat,
}

impl CommandContext {
    /// Load config, restore the session from disk and build the client.
    ///
    /// No request is made; a missing session is only an error once a
    /// command asks for [`CommandContext::token`].
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let config = Config::load_at(opts.config_ref())?;

        let session_path = match opts.session_ref() {
            Some(path) => path.into(),
            None => FileStorage::default_path()?,
        };
        let session = SessionStore::restore(FileStorage::open(session_path)?);

        let api_url = config.api_url(opts.api_url_ref());
        debug!("Using API at {}", api_url);
        let client = CareClient::new(api_url)?;

        let format = resolve_format(opts.format, &config);

        Ok(Self {
            config,
            session,
            client,
            format,
        })
    }

    /// Access token of the logged-in user
    pub fn token(&self) -> Result<&str> {
        self.session.access_token()
    }

    /// Configured default row limit
    pub fn limit_preference(&self) -> Option<usize> {
        self.config.preferences.limit
    }
}

/// Flag or env wins, then the config preference, then pretty
fn resolve_format(flag: Option<OutputFormat>, config: &Config) -> OutputFormat {
    flag.or_else(|| {
        config
            .preferences
            .format
            .as_deref()
            .and_then(OutputFormat::from_preference)
    })
    .unwrap_or_default()
}
