// src/movies/runtime.rs
//! Movie runtime in minutes, rendered on the wire as `"<N> mins"`

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RuntimeError {
    #[error("invalid runtime format")]
    InvalidFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Runtime(pub i32);

impl Runtime {
    pub fn minutes(self) -> i32 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl From<i32> for Runtime {
    fn from(minutes: i32) -> Self {
        Runtime(minutes)
    }
}

impl fmt::Display for Runtime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} mins", self.0)
    }
}

impl FromStr for Runtime {
    type Err = RuntimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (minutes, unit) = s.split_once(' ').ok_or(RuntimeError::InvalidFormat)?;
        if unit != "mins" {
            return Err(RuntimeError::InvalidFormat);
        }

        minutes
            .parse::<i32>()
            .map(Runtime)
            .map_err(|_| RuntimeError::InvalidFormat)
    }
}

impl Serialize for Runtime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

struct RuntimeVisitor;

impl<'de> Visitor<'de> for RuntimeVisitor {
    type Value = Runtime;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a runtime such as \"107 mins\" or an integer number of minutes")
    }

    fn visit_str<E>(self, value: &str) -> Result<Runtime, E>
    where
        E: de::Error,
    {
        value.parse().map_err(E::custom)
    }

    // null decodes to zero so that validation reports it as missing
    fn visit_unit<E>(self) -> Result<Runtime, E>
    where
        E: de::Error,
    {
        Ok(Runtime(0))
    }

    fn visit_i64<E>(self, value: i64) -> Result<Runtime, E>
    where
        E: de::Error,
    {
        i32::try_from(value)
            .map(Runtime)
            .map_err(|_| E::custom(RuntimeError::InvalidFormat))
    }

    fn visit_u64<E>(self, value: u64) -> Result<Runtime, E>
    where
        E: de::Error,
    {
        i32::try_from(value)
            .map(Runtime)
            .map_err(|_| E::custom(RuntimeError::InvalidFormat))
    }
}

impl<'de> Deserialize<'de> for Runtime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(RuntimeVisitor)
    }
}
