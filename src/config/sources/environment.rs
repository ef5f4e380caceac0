//! Environment source: `CLINVIEW_<SECTION>__<KEY>` plus the `CLINVIEW_API_URL` shorthand.

use crate::config::API_URL_ENV;
use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::Environment;

pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let api_url = std::env::var(API_URL_ENV).ok().filter(|v| !v.trim().is_empty());
    builder
        .add_source(
            Environment::with_prefix("CLINVIEW")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .set_override_option("api.base_url", api_url)
}
