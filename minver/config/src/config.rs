pub mod from_env;
pub mod source;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("value {0:?} for {1:?} is invalid.")]
    InvalidValue(String, &'static str),
}

pub type Result<T, E = ConfigError> = std::result::Result<T, E>;
