
use crate::{Error, Result};
use std::{env, str::FromStr, sync::OnceLock};

pub fn config() -> &'static Config {
    static INSTANCE: OnceLock<Config> = OnceLock::new();

    INSTANCE.get_or_init(|| {
        Config::load_from_env().unwrap_or_else(|e| {
            panic!("FATAL - UNABLE TO LOAD CONFIG - Cause: {e:?}")
        })
    })
}

#[allow(non_snake_case)]
pub struct Config {
    // -- Web
    pub WEB_FOLDER: String,

    // -- Mongo
    pub MONGO_HOST: String,
    pub MONGO_PORT: u16,
    pub MONGO_USERNAME: String,
    pub MONGO_PASSWORD: String,
    pub MONGO_DATABASE: String,
}

impl Config {
    fn load_from_env() -> Result<Config> {
        Ok(Config {
            WEB_FOLDER: get_env("SERVICE_WEB_FOLDER")?,

            MONGO_HOST: get_env("MONGO_HOST")?,
            MONGO_PORT: get_env_parse("MONGO_PORT")?,
            MONGO_USERNAME: get_env("MONGO_USERNAME")?,
            MONGO_PASSWORD: get_env("MONGO_PASSWORD")?,
            MONGO_DATABASE: get_env("MONGO_DATABASE")?,
        })
    }

    pub fn mongo_uri(&self) -> String {
        format!(
            "mongodb://{}:{}@{}:{}/{}",
            self.MONGO_USERNAME,
            self.MONGO_PASSWORD,
            self.MONGO_HOST,
            self.MONGO_PORT,
            self.MONGO_DATABASE
        )
    }
}

impl core::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("WEB_FOLDER", &self.WEB_FOLDER)
            .field("MONGO_HOST", &self.MONGO_HOST)
            .field("MONGO_PORT", &self.MONGO_PORT)
            .field("MONGO_USERNAME", &self.MONGO_USERNAME)
            .field("MONGO_PASSWORD", &"[redacted]")
            .field("MONGO_DATABASE", &self.MONGO_DATABASE)
            .finish()
    }
}

fn get_env(name: &'static str) -> Result<String> {
    env::var(name).map_err(|_| Error::ConfigMissingEnv(name))
}

fn get_env_parse<T: FromStr>(name: &'static str) -> Result<T> {
    let val = get_env(name)?;
    val.parse::<T>().map_err(|_| Error::ConfigWrongFormat(name))
}
