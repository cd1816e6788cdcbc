//! Config path derivation from the program's invocation name.
//!
//! The path convention is `{prefix}/etc/{basename}.conf`, built by plain
//! string concatenation. `/` is the only separator recognised, and nothing
//! is normalized: an empty prefix yields `/etc/...`, a trailing `/` in the
//! invocation name yields an empty basename.
//!
//! ```
//! use jetconf::path::{base_name, config_path};
//! use std::path::Path;
//!
//! assert_eq!(base_name("/usr/local/bin/widget"), "widget");
//! assert_eq!(config_path("/srv", "widget"), Path::new("/srv/etc/widget.conf"));
//! ```

use std::path::PathBuf;

use crate::error::{ConfigError, ConfigResult};

/// Returns the text after the last `/`, or the whole name if there is none.
pub fn base_name(invocation_name: &str) -> &str {
    match invocation_name.rfind('/') {
        Some(idx) => &invocation_name[idx + 1..],
        None => invocation_name,
    }
}

/// Computes `{prefix}/etc/{base_name(invocation_name)}.conf`.
pub fn config_path(prefix: &str, invocation_name: &str) -> PathBuf {
    PathBuf::from(format!(
        "{}/etc/{}.conf",
        prefix,
        base_name(invocation_name)
    ))
}

/// Reads the current process's invocation name (`argv[0]`).
///
/// Non-UTF-8 names are converted lossily.
pub fn invocation_name() -> ConfigResult<String> {
    std::env::args_os()
        .next()
        .map(|arg| arg.to_string_lossy().into_owned())
        .ok_or(ConfigError::MissingInvocationName)
}
