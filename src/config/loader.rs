//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ReloError, ReloResult};
use crate::signal::Signal;

use super::env_validator::{suggest, EnvVarValidator};
use super::types::{Config, ConfigWarning, LoadedConfig, OutputFormat, Verbosity};

/// Project config file, looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "relo.toml";

const SIGNAL_VALUES: &[&str] = &["SIGHUP", "SIGINT", "SIGTERM", "SIGKILL"];
const BOOL_VALUES: &[&str] = &["true", "false", "1", "0", "yes", "no", "on", "off"];
const VERBOSITY_VALUES: &[&str] = &["quiet", "normal", "verbose", "debug"];
const FORMAT_VALUES: &[&str] = &["text", "json"];

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> ReloResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ReloError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|key| ConfigWarning::UnknownKey {
            line: find_line_number(&content, &key),
            suggestion: suggest_key(&key),
            file: path.to_path_buf(),
            key,
        })
        .collect();

    Ok((config, warnings))
}

/// Load from project config, user config, or defaults, then apply `RELO_*`
///
/// The first config file found wins; files are not merged.
pub fn load_or_default(project_root: Option<&Path>) -> ReloResult<LoadedConfig> {
    load_from(project_root, dirs_config_dir().as_deref(), |var| {
        std::env::var(var).ok()
    })
}

/// [`load_or_default`] with explicit locations and environment
pub fn load_from<F>(
    project_root: Option<&Path>,
    user_config_dir: Option<&Path>,
    lookup: F,
) -> ReloResult<LoadedConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let candidates = [
        project_root.map(|root| root.join(PROJECT_CONFIG_FILE)),
        user_config_dir.map(|dir| dir.join("relo").join("config.toml")),
    ];

    let mut loaded = LoadedConfig::default();
    if let Some(path) = candidates.into_iter().flatten().find(|p| p.is_file()) {
        let (config, warnings) = load_with_warnings(&path)?;
        loaded.config = config;
        loaded.warnings = warnings;
        loaded.source = Some(path);
    }

    let (config, env_warnings) = with_env_overrides_from(loaded.config, lookup);
    loaded.config = config;
    loaded.warnings.extend(env_warnings);

    Ok(loaded)
}

/// Apply `RELO_*` overrides read through `lookup`
///
/// Invalid values leave the setting untouched and produce a warning.
pub fn with_env_overrides_from<F>(mut config: Config, lookup: F) -> (Config, Vec<ConfigWarning>)
where
    F: Fn(&str) -> Option<String>,
{
    let mut warnings = Vec::new();

    // RELO_SIGNAL
    if let Some(value) = lookup("RELO_SIGNAL") {
        match EnvVarValidator::new("RELO_SIGNAL", SIGNAL_VALUES)
            .parse(&value, |v| v.parse::<Signal>().ok())
        {
            Ok(signal) => config.defaults.signal = signal,
            Err(warning) => warnings.push(warning),
        }
    }

    // RELO_WAIT, RELO_GROUP, RELO_PARALLEL
    let flags = [
        ("RELO_WAIT", &mut config.defaults.wait),
        ("RELO_GROUP", &mut config.defaults.group),
        ("RELO_PARALLEL", &mut config.defaults.parallel),
    ];
    for (var, slot) in flags {
        if let Some(value) = lookup(var) {
            match EnvVarValidator::new(var, BOOL_VALUES).parse(&value, parse_bool) {
                Ok(flag) => *slot = flag,
                Err(warning) => warnings.push(warning),
            }
        }
    }

    // RELO_VERBOSITY
    if let Some(value) = lookup("RELO_VERBOSITY") {
        let parsed = EnvVarValidator::new("RELO_VERBOSITY", VERBOSITY_VALUES).parse(&value, |v| {
            match v.to_lowercase().as_str() {
                "quiet" => Some(Verbosity::Quiet),
                "normal" => Some(Verbosity::Normal),
                "verbose" => Some(Verbosity::Verbose),
                "debug" => Some(Verbosity::Debug),
                _ => None,
            }
        });
        match parsed {
            Ok(verbosity) => config.output.verbosity = verbosity,
            Err(warning) => warnings.push(warning),
        }
    }

    // RELO_FORMAT
    if let Some(value) = lookup("RELO_FORMAT") {
        let parsed = EnvVarValidator::new("RELO_FORMAT", FORMAT_VALUES).parse(&value, |v| {
            match v.to_lowercase().as_str() {
                "text" => Some(OutputFormat::Text),
                "json" => Some(OutputFormat::Json),
                _ => None,
            }
        });
        match parsed {
            Ok(format) => config.output.format = format,
            Err(warning) => warnings.push(warning),
        }
    }

    (config, warnings)
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Get XDG config directory
fn dirs_config_dir() -> Option<PathBuf> {
    std::env::var("XDG_CONFIG_HOME")
        .ok()
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from)
        .or_else(|| {
            std::env::var("HOME")
                .ok()
                .map(|h| PathBuf::from(h).join(".config"))
        })
}

/// Every key relo reads, as dotted paths
const KNOWN_KEYS: &[&str] = &[
    "defaults",
    "defaults.wait",
    "defaults.group",
    "defaults.parallel",
    "defaults.signal",
    "output",
    "output.verbosity",
    "output.format",
];

/// Split a dotted path into its table and final key; top-level keys have
/// an empty table.
fn split_key(path: &str) -> (&str, &str) {
    path.rsplit_once('.').unwrap_or(("", path))
}

/// 1-based line of `path`'s assignment, searched only inside its own table
fn find_line_number(content: &str, path: &str) -> Option<usize> {
    let (table, key) = split_key(path);
    let mut current = "";

    for (i, line) in content.lines().enumerate() {
        let line = line.split('#').next().unwrap_or("").trim();
        if let Some(header) = line.strip_prefix('[').and_then(|h| h.strip_suffix(']')) {
            current = header.trim();
            if current == path {
                return Some(i + 1);
            }
            continue;
        }
        let assigns = line
            .strip_prefix(key)
            .is_some_and(|rest| rest.trim_start().starts_with('='));
        if current == table && assigns {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(path: &str) -> Option<String> {
    let (table, key) = split_key(path);

    // Right name, wrong table: point at where it belongs.
    if let Some(known) = KNOWN_KEYS
        .iter()
        .find(|known| split_key(known).1 == key && **known != path)
    {
        return Some(known.to_string());
    }

    let siblings: Vec<&str> = KNOWN_KEYS
        .iter()
        .map(|known| split_key(known))
        .filter(|(t, _)| *t == table)
        .map(|(_, k)| k)
        .collect();
    suggest(key, &siblings)
}
