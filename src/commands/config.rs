use clap::{Args, Subcommand};
use serde::Serialize;
use serde_json::Value;

use seqname::defaults::{self, Defaults, SeqnameConfig};

use super::{CmdResult, GlobalArgs};

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display configuration (merged defaults + file)
    Show {
        /// Show only built-in defaults (ignore seqname.json)
        #[arg(long)]
        builtin: bool,
    },
    /// Set a configuration value at a JSON pointer path
    Set {
        /// JSON pointer path (e.g., /defaults/prefix)
        pointer: String,
        /// Value to set (JSON; bare words are taken as strings)
        value: String,
    },
    /// Reset configuration to built-in defaults (deletes seqname.json)
    Reset,
    /// Show the path to seqname.json
    Path,
}

#[derive(Debug, Serialize)]
pub struct ConfigOutput {
    command: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    config: Option<SeqnameConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    defaults: Option<Defaults>,
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    exists: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pointer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    deleted: Option<bool>,
}

impl ConfigOutput {
    fn new(command: &str) -> Self {
        Self {
            command: command.to_string(),
            config: None,
            defaults: None,
            path: None,
            exists: None,
            pointer: None,
            value: None,
            deleted: None,
        }
    }
}

pub fn run(args: ConfigArgs, _global: &GlobalArgs) -> CmdResult<ConfigOutput> {
    match args.command {
        ConfigCommand::Show { builtin } => show(builtin),
        ConfigCommand::Set { pointer, value } => set(&pointer, &value),
        ConfigCommand::Reset => reset(),
        ConfigCommand::Path => path(),
    }
}

fn show(builtin: bool) -> CmdResult<ConfigOutput> {
    let mut output = ConfigOutput::new("config.show");
    if builtin {
        output.defaults = Some(defaults::builtin_defaults());
    } else {
        output.config = Some(defaults::try_load_config()?);
    }
    Ok((output, 0))
}

/// Parse a value argument: JSON first, otherwise a plain string.
fn parse_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

fn set(pointer: &str, raw_value: &str) -> CmdResult<ConfigOutput> {
    let value = parse_value(raw_value);

    let current = defaults::try_load_config()?;
    let config = defaults::set_config_value(&current, pointer, value.clone())?;
    defaults::save_config(&config)?;

    crate::tty::status(&format!("Saved {}", defaults::config_path()?));

    let mut output = ConfigOutput::new("config.set");
    output.config = Some(config);
    output.pointer = Some(pointer.to_string());
    output.value = Some(value);
    Ok((output, 0))
}

fn reset() -> CmdResult<ConfigOutput> {
    let deleted = defaults::reset_config()?;

    let mut output = ConfigOutput::new("config.reset");
    output.defaults = Some(defaults::builtin_defaults());
    output.path = Some(defaults::config_path()?);
    output.deleted = Some(deleted);
    Ok((output, 0))
}

fn path() -> CmdResult<ConfigOutput> {
    let path = seqname::paths::seqname_json()?;

    let mut output = ConfigOutput::new("config.path");
    output.exists = Some(path.exists());
    output.path = Some(path.display().to_string());
    Ok((output, 0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_value_accepts_json_and_bare_words() {
        assert_eq!(parse_value("\"clip_\""), Value::String("clip_".to_string()));
        assert_eq!(parse_value("clip_"), Value::String("clip_".to_string()));
        assert_eq!(
            parse_value("[\"*.part\"]"),
            serde_json::json!(["*.part"])
        );
    }
}
