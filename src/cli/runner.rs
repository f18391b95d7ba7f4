//! CLI runner - executes the fetch flow

use crate::auth::{Authenticator, Credentials};
use crate::cli::commands::{Cli, OutputFormat};
use crate::error::Result;
use crate::http::{api_base, HttpClient, HttpClientConfig};
use crate::machines::{self, MachinesQuery};
use crate::types::{ProxyConfig, Record};
use futures::{pin_mut, TryStreamExt};
use serde_json::Value;
use tracing::{error, warn};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the fetch flow: login, then stream machine records to stdout
    pub async fn run(&self) -> Result<()> {
        let mut client = self.build_client()?;

        let credentials = self.credentials();
        let authenticator = Authenticator::new(credentials);
        let token = match authenticator.login(&client).await {
            Ok(token) => token,
            Err(e) => {
                error!("Error during logon: {e}");
                return Err(e);
            }
        };
        client.set_bearer_token(token.into_inner());

        let mut query = MachinesQuery::new();
        if let Some(machine) = &self.cli.machine {
            query = query.with_computer_name(machine);
        }

        let record_stream = machines::stream(&client, query);
        pin_mut!(record_stream);

        let mut count: u64 = 0;
        loop {
            match record_stream.try_next().await {
                Ok(Some(record)) => {
                    self.print_record(&record)?;
                    count += 1;
                }
                Ok(None) => break,
                Err(e) => {
                    error!("Error during machines retrieval: {e}");
                    return Err(e);
                }
            }
        }

        if count == 0 {
            println!("No results found");
        }

        Ok(())
    }

    /// Build the session client from the CLI arguments
    fn build_client(&self) -> Result<HttpClient> {
        let base = api_base(&self.cli.hostname)?;
        let mut config = HttpClientConfig::json_session(base.as_str());

        if let Some(proxies) = self.parse_proxies() {
            config.proxies = Some(proxies);
        }

        HttpClient::with_config(config)
    }

    /// Parse the --proxies JSON value.
    ///
    /// A malformed value is reported and ignored; the run continues without
    /// proxy routing.
    fn parse_proxies(&self) -> Option<ProxyConfig> {
        let raw = self.cli.proxies.as_deref()?;
        match serde_json::from_str::<ProxyConfig>(raw) {
            Ok(proxies) if proxies.is_empty() => None,
            Ok(proxies) => Some(proxies),
            Err(e) => {
                warn!("Failure parsing proxies: {e}: proxies provided: {raw}");
                None
            }
        }
    }

    fn credentials(&self) -> Credentials {
        let mut credentials = Credentials::new(&self.cli.username, &self.cli.password);
        if let Some(domain) = &self.cli.domain {
            credentials = credentials.with_domain(domain);
        }
        credentials
    }

    fn print_record(&self, record: &Record) -> Result<()> {
        let value = Value::Object(record.clone());
        let rendered = match self.cli.format {
            OutputFormat::Json => serde_json::to_string(&value)?,
            OutputFormat::Pretty => serde_json::to_string_pretty(&value)?,
        };
        println!("{rendered}");
        Ok(())
    }
}
