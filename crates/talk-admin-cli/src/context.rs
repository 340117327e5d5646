use talk_admin_client::{AdminApi, HttpAdminClient};
use talk_admin_core::{AdminConfig, AdminResult};

use crate::cli::Cli;

/// Backend connection shared by the online commands.
pub struct CliContext {
    pub config: AdminConfig,
    client: HttpAdminClient,
}

impl CliContext {
    pub fn load(cli: &Cli) -> AdminResult<Self> {
        let config = match &cli.config {
            Some(path) => AdminConfig::load_from(path)?,
            None => AdminConfig::load(),
        }
        .with_overrides(cli.base_url.clone(), cli.session.clone());

        let client = HttpAdminClient::from_config(&config)?;
        tracing::debug!(base_url = client.base_url(), "Using admin backend");
        Ok(Self { config, client })
    }

    pub fn api(&self) -> &dyn AdminApi {
        &self.client
    }

    pub fn per_page(&self) -> u32 {
        self.config.effective_items_per_page()
    }
}
