use crate::error::{config::ConfigError, AppError};

pub struct Config {
    pub database_url: String,

    pub discord_token: String,
    pub discord_guild_id: u64,

    pub coc_api_token: String,
    pub clan_tag: String,

    pub twitch_client_id: String,
    pub twitch_client_secret: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let guild_id = require("DISCORD_GUILD_ID")?;
        let discord_guild_id =
            guild_id
                .parse::<u64>()
                .map_err(|e| ConfigError::InvalidValue {
                    name: "DISCORD_GUILD_ID".to_string(),
                    message: e.to_string(),
                })?;

        Ok(Self {
            database_url: require("DATABASE_URL")?,
            discord_token: require("DISCORD_TOKEN")?,
            discord_guild_id,
            coc_api_token: require("COC_API_TOKEN")?,
            clan_tag: require("CLAN_TAG")?,
            twitch_client_id: require("TWITCH_CLIENT_ID")?,
            twitch_client_secret: require("TWITCH_CLIENT_SECRET")?,
        })
    }
}

fn require(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}
