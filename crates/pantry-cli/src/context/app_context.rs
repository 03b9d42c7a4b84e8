use std::time::Duration;

use pantry_client::ApiClient;
use pantry_config::PantryConfig;

use super::Notifier;
use crate::cli::GlobalFlags;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: PantryConfig,
    pub client: ApiClient,
    pub notifier: Notifier,
}

impl AppContext {
    pub fn init(mut config: PantryConfig, flags: &GlobalFlags) -> anyhow::Result<Self> {
        if let Some(base_url) = &flags.base_url {
            config.api.base_url.clone_from(base_url);
        }
        let client = ApiClient::from_config(&config)?;
        if !client.is_authenticated() {
            tracing::debug!("no auth.token configured; requests are sent without credentials");
        }
        let notifier = Notifier::new(
            Duration::from_millis(config.general.toast_duration_ms),
            flags.quiet,
        );
        Ok(Self {
            config,
            client,
            notifier,
        })
    }
}
