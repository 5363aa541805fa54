use std::{marker::PhantomData, str::FromStr};

use crate::config::{source::ConfigSource, ConfigError, Result};

/// Reads and parses the environment variable named by the first field.
#[derive(Clone)]
pub struct FromEnv<T>(&'static str, PhantomData<T>);

impl<T> FromEnv<T> {
    pub fn new(env: &'static str) -> Self {
        FromEnv(env, PhantomData::<T>)
    }
}

impl<T> ConfigSource for FromEnv<T>
where
    T: FromStr,
{
    type Value = T;

    fn source_value(self) -> Option<Result<Self::Value>> {
        std::env::var(self.0).ok().map(|var| {
            var.parse()
                .map_err(|_| ConfigError::InvalidValue(var.to_string(), self.0))
        })
    }
}
