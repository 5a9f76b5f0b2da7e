// config/mod.rs
use crate::error::AppError;
use ::config::{Config, ConfigBuilder, Environment, File, builder::DefaultState};
use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct Settings {
    #[validate(nested)]
    pub log: LogSettings,
    #[validate(nested)]
    pub panel: PanelSettings,
}

#[derive(Debug, Deserialize, Validate)]
pub struct LogSettings {
    /// `tracing_subscriber::EnvFilter` directive.
    #[validate(length(min = 1))]
    pub filter: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct PanelSettings {
    #[validate(length(min = 1))]
    pub title: String,
}

impl Settings {
    pub fn new() -> Result<Self, AppError> {
        Self::load(
            Config::builder()
                .add_source(File::with_name("config/config").required(false))
                .add_source(
                    Environment::with_prefix("APP")
                        .prefix_separator("_")
                        .separator("__"),
                ),
        )
    }

    fn load(builder: ConfigBuilder<DefaultState>) -> Result<Self, AppError> {
        let settings: Settings = builder
            .set_default("log.filter", "warn")?
            .set_default("panel.title", "Smart Home Control Panel")?
            .build()?
            .try_deserialize()?;

        settings.validate()?;
        Ok(settings)
    }
}
