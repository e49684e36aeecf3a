//! Explicit JSON and YAML helpers.
//!
//! The serde impls on [`SecretBox`](crate::SecretBox) already mask secrets
//! wherever a structure is encoded. These helpers wrap `serde_json` and
//! `serde_yaml` behind the crate [`Error`] type and add file loading for
//! config structs that carry secret fields.

use crate::error::{Error, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::any::type_name;
use std::fs;
use std::path::Path;
use tracing::{debug, trace};

fn read_file(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(Error::NotFound(path.to_path_buf()));
    }

    let content = fs::read_to_string(path)?;
    trace!(path = %path.display(), bytes = content.len(), "read file");
    Ok(content)
}

/// Encode a value as compact JSON. Secret fields become `"******"`.
#[cfg(feature = "json")]
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    trace!(ty = type_name::<T>(), "encoding json");
    Ok(serde_json::to_string(value)?)
}

/// Encode a value as pretty-printed JSON.
#[cfg(feature = "json")]
pub fn to_json_pretty<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    trace!(ty = type_name::<T>(), "encoding json");
    Ok(serde_json::to_string_pretty(value)?)
}

/// Decode a value from JSON. Secret fields receive the real input.
#[cfg(feature = "json")]
pub fn from_json<T: DeserializeOwned>(content: &str) -> Result<T> {
    serde_json::from_str(content).map_err(|e| {
        // The message can quote input, so only the position is logged.
        debug!(
            ty = type_name::<T>(),
            line = e.line(),
            column = e.column(),
            "json decode failed"
        );
        Error::Json(e)
    })
}

/// Load a value from a JSON file.
#[cfg(feature = "json")]
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    debug!(path = %path.display(), ty = type_name::<T>(), "loading json");
    let content = read_file(path)?;
    from_json(&content)
}

/// Encode a value as YAML. Secret fields become `"******"`.
#[cfg(feature = "yaml")]
pub fn to_yaml<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    trace!(ty = type_name::<T>(), "encoding yaml");
    Ok(serde_yaml::to_string(value)?)
}

/// Decode a value from YAML. Secret fields receive the real input.
#[cfg(feature = "yaml")]
pub fn from_yaml<T: DeserializeOwned>(content: &str) -> Result<T> {
    serde_yaml::from_str(content).map_err(|e| {
        debug!(
            ty = type_name::<T>(),
            line = e.location().map(|l| l.line()),
            "yaml decode failed"
        );
        Error::Yaml(e)
    })
}

/// Load a value from a YAML file.
#[cfg(feature = "yaml")]
pub fn load_yaml<T: DeserializeOwned>(path: &Path) -> Result<T> {
    debug!(path = %path.display(), ty = type_name::<T>(), "loading yaml");
    let content = read_file(path)?;
    from_yaml(&content)
}
