//! Loading rules and intent scripts from disk.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use rampart_core::config::RulesConfig;

use crate::input::ScriptedInput;

/// Rules from a JSON file, or the built-in defaults when no file is given.
pub fn load_rules(path: Option<&Path>) -> Result<RulesConfig> {
    let Some(path) = path else {
        return Ok(RulesConfig::default());
    };
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read rules file at {}", path.display()))?;
    parse_rules(&contents).with_context(|| format!("invalid rules file {}", path.display()))
}

/// Parse a (possibly partial) rules document and sanity-check it.
pub fn parse_rules(contents: &str) -> Result<RulesConfig> {
    let rules: RulesConfig =
        serde_json::from_str(contents).context("failed to parse rules json")?;

    rules.validate().context("rules out of range")?;
    Ok(rules)
}

/// Intent script from a JSON file.
pub fn load_script(path: &Path) -> Result<ScriptedInput> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read script at {}", path.display()))?;
    ScriptedInput::from_json(&contents)
        .with_context(|| format!("failed to parse script {}", path.display()))
}
