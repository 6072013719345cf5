use crate::error::{Error, Result};
use std::env;
use std::path::PathBuf;

/// Base seqname config directory (~/.config/seqname/ on Unix-like systems)
pub fn seqname() -> Result<PathBuf> {
    #[cfg(windows)]
    {
        let appdata = env::var("APPDATA").map_err(|_| {
            Error::internal_unexpected(
                "APPDATA environment variable not set on Windows".to_string(),
            )
        })?;
        Ok(PathBuf::from(appdata).join("seqname"))
    }

    #[cfg(not(windows))]
    {
        let home = env::var("HOME").map_err(|_| {
            Error::internal_unexpected(
                "HOME environment variable not set on Unix-like system".to_string(),
            )
        })?;
        Ok(PathBuf::from(home).join(".config").join("seqname"))
    }
}

/// Global seqname.json config file path
pub fn seqname_json() -> Result<PathBuf> {
    Ok(seqname()?.join("seqname.json"))
}

/// Expand a leading `~` in a user-supplied directory argument. `$` is literal.
pub fn expand_user_path(raw: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(raw).to_string())
}
