//! jetconf: JSON configuration files in `/etc`.
//!
//! The config filename is derived from the program's own name: a program
//! started as `/usr/local/bin/widget` reads `/etc/widget.conf`, or
//! `{prefix}/etc/widget.conf` when a prefix is given.
//!
//! # Modules
//!
//! - **path**: invocation name lookup and config path derivation
//! - **loader**: reading and decoding, both into new values and in place
//! - **error**: the [`ConfigError`] type shared by every operation
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
//! let mut settings = Settings::default();
//! match jetconf::load_at_prefix("/srv", &mut settings) {
//!     Ok(()) => {}
//!     Err(e) if e.is_not_found() => {} // keep defaults
//!     Err(e) => return Err(e),
//! }
//! # Ok::<(), jetconf::ConfigError>(())
//! ```

pub mod error;
pub mod loader;
pub mod path;

pub use error::{ConfigError, ConfigResult};
pub use loader::{Loader, load, load_at_prefix, must_load, must_load_at_prefix, read_config};
