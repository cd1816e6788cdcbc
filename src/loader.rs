//! Loading JSON config files named after the running program.
//!
//! [`Loader`] holds the two inputs of the path convention explicitly (the
//! invocation name and the prefix), so the same code path serves the
//! argv-driven free functions and tests that supply arbitrary names.
//!
//! # Destinations
//!
//! - [`Loader::load`] decodes into a fresh value of any `DeserializeOwned` type.
//! - [`Loader::load_into`] overlays the document onto an existing value: keys
//!   present in the file replace the matching fields, nested objects are
//!   overlaid recursively, `null` leaves a set value alone, and everything
//!   else keeps its prior value. The destination is only assigned once the
//!   merged document decodes, so it is untouched on any error. This requires
//!   `Serialize` to round-trip through `Deserialize` (see [`Loader::load_into`]).
//!
//! # Example
//!
//! ```no_run
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, Default, Serialize, Deserialize)]
//! struct Settings {
//!     port: u16,
//! }
//!
//! let mut settings = Settings { port: 80 };
//! jetconf::load(&mut settings)?; // reads /etc/<program>.conf
//! # Ok::<(), jetconf::ConfigError>(())
//! ```

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{ConfigError, ConfigResult};
use crate::path;

/// Resolves and reads `{prefix}/etc/{basename}.conf` for one invocation name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Loader {
    invocation_name: String,
    prefix: String,
}

impl Loader {
    /// Creates a loader for an explicit invocation name with an empty prefix.
    pub fn new(invocation_name: impl Into<String>) -> Self {
        Self {
            invocation_name: invocation_name.into(),
            prefix: String::new(),
        }
    }

    /// Creates a loader for the current process's `argv[0]`.
    pub fn from_env() -> ConfigResult<Self> {
        path::invocation_name().map(Self::new)
    }

    /// Sets the path prefix placed before `/etc/`.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn invocation_name(&self) -> &str {
        &self.invocation_name
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// The config file this loader reads. Recomputed on every call.
    pub fn config_path(&self) -> PathBuf {
        path::config_path(&self.prefix, &self.invocation_name)
    }

    /// Reads and decodes the config file into a new value.
    pub fn load<T: DeserializeOwned>(&self) -> ConfigResult<T> {
        let path = self.config_path();
        let bytes = read_bytes(&path)?;

        let value = serde_json::from_slice(&bytes).map_err(|source| ConfigError::Decode {
            path: path.clone(),
            source,
        })?;

        tracing::debug!("Decoded config file: {}", path.display());
        Ok(value)
    }

    /// Reads the config file and overlays it onto `dest`.
    ///
    /// Fields absent from the file keep their current values, and so do
    /// fields the file sets to `null` unless they are already null.
    ///
    /// `T`'s `Serialize` impl must mirror its `Deserialize` impl: the current
    /// value is serialized, overlaid, and decoded back. A field that is
    /// skipped when serializing but required when deserializing fails with
    /// [`ConfigError::Decode`] even if it was set.
    pub fn load_into<T>(&self, dest: &mut T) -> ConfigResult<()>
    where
        T: Serialize + DeserializeOwned,
    {
        let path = self.config_path();
        let bytes = read_bytes(&path)?;

        let overlay: Value =
            serde_json::from_slice(&bytes).map_err(|source| ConfigError::Decode {
                path: path.clone(),
                source,
            })?;

        let mut current = serde_json::to_value(&*dest).map_err(ConfigError::Encode)?;
        merge(&mut current, overlay);

        let merged = serde_json::from_value(current).map_err(|merge_err| {
            // Errors from a Value have no position; decoding the raw bytes
            // usually hits the same field and reports where it is.
            let source = match serde_json::from_slice::<T>(&bytes) {
                Err(file_err) if file_err.is_data() && file_err.line() > 0 => file_err,
                _ => merge_err,
            };
            ConfigError::Decode {
                path: path.clone(),
                source,
            }
        })?;
        *dest = merged;

        tracing::debug!("Applied config file: {}", path.display());
        Ok(())
    }
}

fn read_bytes(path: &Path) -> ConfigResult<Vec<u8>> {
    tracing::debug!("Reading config file: {}", path.display());

    std::fs::read(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Overlays `overlay` onto `base`. Objects merge key by key, `null` never
/// replaces a non-null value, and any other value replaces what was there.
fn merge(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (base, Value::Null) if !base.is_null() => {}
        (Value::Object(base), Value::Object(overlay)) => {
            for (key, value) in overlay {
                match base.get_mut(&key) {
                    Some(existing) => merge(existing, value),
                    None => {
                        base.insert(key, value);
                    }
                }
            }
        }
        (base, overlay) => *base = overlay,
    }
}

/// Loads `/etc/$(basename $0).conf` into `dest`.
///
/// Same overlay rules and `Serialize` round-trip requirement as
/// [`Loader::load_into`].
pub fn load<T>(dest: &mut T) -> ConfigResult<()>
where
    T: Serialize + DeserializeOwned,
{
    load_at_prefix("", dest)
}

/// Loads `$prefix/etc/$(basename $0).conf` into `dest`.
///
/// Same overlay rules and `Serialize` round-trip requirement as
/// [`Loader::load_into`].
pub fn load_at_prefix<T>(prefix: &str, dest: &mut T) -> ConfigResult<()>
where
    T: Serialize + DeserializeOwned,
{
    Loader::from_env()?.with_prefix(prefix).load_into(dest)
}

/// Decodes `$prefix/etc/$(basename $0).conf` into a new value.
pub fn read_config<T: DeserializeOwned>(prefix: &str) -> ConfigResult<T> {
    Loader::from_env()?.with_prefix(prefix).load()
}

/// Same as [`load`], but panics on error.
pub fn must_load<T>(dest: &mut T)
where
    T: Serialize + DeserializeOwned,
{
    must_load_at_prefix("", dest);
}

/// Same as [`load_at_prefix`], but panics on error.
pub fn must_load_at_prefix<T>(prefix: &str, dest: &mut T)
where
    T: Serialize + DeserializeOwned,
{
    if let Err(e) = load_at_prefix(prefix, dest) {
        panic!("{e}");
    }
}
