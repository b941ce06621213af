//! SSH public key discovery for the `core` user.
//!
//! Best effort and silent: a missing home directory, a missing key or an
//! unreadable key all mean "no key". Nothing here logs or returns an error.

use std::fs;
use std::path::Path;

/// Key path relative to the invoking user's home directory.
pub const SSH_PUBKEY_PATH: &str = ".ssh/id_rsa.pub";

/// Read the invoking user's RSA public key, if there is one.
pub fn discover_ssh_key() -> Option<String> {
    ssh_key_from_home(dirs::home_dir().as_deref())
}

/// Read [`SSH_PUBKEY_PATH`] under `home`.
///
/// The key is returned verbatim, trailing newline included. Bytes that are
/// not valid UTF-8 are replaced with U+FFFD.
pub fn ssh_key_from_home(home: Option<&Path>) -> Option<String> {
    fs::read(home?.join(SSH_PUBKEY_PATH))
        .ok()
        .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
}
