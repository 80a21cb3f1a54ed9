/// Configuration: `[tool.cpitd]` TOML section merged with CLI overrides.
///
/// CLI values win over file values, except for the three list fields
/// (`ignore`, `languages`, `suppress`) where file entries are concatenated
/// *before* CLI entries rather than replaced. A malformed config file is a
/// host-level error (reported, then the process exits) — it never reaches
/// the detection engine.
use std::path::Path;

use crate::lexer::NormalizationLevel;

/// Where a clone report should be written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Human,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "human" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            other => Err(format!("invalid output format '{other}' (expected human or json)")),
        }
    }
}

/// Runtime configuration for a cpitd scan.
#[derive(Debug, Clone)]
pub struct Config {
    pub min_tokens: usize,
    pub normalize: NormalizationLevel,
    pub output_format: OutputFormat,
    pub ignore_patterns: Vec<String>,
    pub languages: Vec<String>,
    pub suppress_patterns: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            min_tokens: 50,
            normalize: NormalizationLevel::Exact,
            output_format: OutputFormat::Human,
            ignore_patterns: Vec::new(),
            languages: Vec::new(),
            suppress_patterns: Vec::new(),
        }
    }
}

/// Values explicitly set on the command line. `None`/empty means "not
/// provided", so the file value (or default) should be used instead.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub min_tokens: Option<usize>,
    pub normalize: Option<NormalizationLevel>,
    pub output_format: Option<OutputFormat>,
    pub ignore_patterns: Vec<String>,
    pub languages: Vec<String>,
    pub suppress_patterns: Vec<String>,
}

/// Values read from a `[tool.cpitd]` TOML section, already validated.
#[derive(Debug, Clone, Default)]
struct FileOverrides {
    min_tokens: Option<usize>,
    normalize: Option<NormalizationLevel>,
    output_format: Option<OutputFormat>,
    ignore_patterns: Vec<String>,
    languages: Vec<String>,
    suppress_patterns: Vec<String>,
}

/// Read `[tool.cpitd]` from a TOML file. Returns defaults (no overrides)
/// if the file doesn't exist or has no such section.
fn load_file_config(path: &Path) -> Result<FileOverrides, Box<dyn std::error::Error>> {
    if !path.is_file() {
        return Ok(FileOverrides::default());
    }
    let text = std::fs::read_to_string(path).map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    let document: toml::Value = text.parse().map_err(|e| format!("invalid TOML in {}: {e}", path.display()))?;

    let Some(section) = document.get("tool").and_then(|t| t.get("cpitd")) else {
        return Ok(FileOverrides::default());
    };
    let table = section
        .as_table()
        .ok_or_else(|| format!("[tool.cpitd] in {} must be a table", path.display()))?;

    let mut overrides = FileOverrides::default();
    for (key, value) in table {
        match key.as_str() {
            "min-tokens" => overrides.min_tokens = Some(require_strict_int(key, value)?),
            "normalize" => {
                let n = require_strict_int(key, value)?;
                overrides.normalize = Some(
                    NormalizationLevel::from_u8(n as u8)
                        .ok_or_else(|| format!("[tool.cpitd] 'normalize' must be 0, 1, or 2, got {n}"))?,
                );
            }
            "format" => {
                let s = value
                    .as_str()
                    .ok_or_else(|| format!("[tool.cpitd] 'format' must be a string, got {value}"))?;
                overrides.output_format =
                    Some(s.parse().map_err(|e: String| format!("[tool.cpitd] 'format' {e}"))?);
            }
            "ignore" => overrides.ignore_patterns = require_string_list(key, value)?,
            "languages" => overrides.languages = require_string_list(key, value)?,
            "suppress" => overrides.suppress_patterns = require_string_list(key, value)?,
            other => return Err(format!("[tool.cpitd] unknown key '{other}'").into()),
        }
    }
    Ok(overrides)
}

fn require_strict_int(key: &str, value: &toml::Value) -> Result<usize, Box<dyn std::error::Error>> {
    value
        .as_integer()
        .filter(|_| !matches!(value, toml::Value::Boolean(_)))
        .and_then(|n| usize::try_from(n).ok())
        .ok_or_else(|| format!("[tool.cpitd] '{key}' must be a non-negative integer, got {value}").into())
}

fn require_string_list(key: &str, value: &toml::Value) -> Result<Vec<String>, Box<dyn std::error::Error>> {
    let array = value
        .as_array()
        .ok_or_else(|| format!("[tool.cpitd] '{key}' must be a list of strings"))?;
    array
        .iter()
        .map(|v| {
            v.as_str()
                .map(str::to_string)
                .ok_or_else(|| format!("[tool.cpitd] '{key}' must be a list of strings").into())
        })
        .collect()
}

/// Merge file config and CLI overrides into a final `Config`. List fields
/// are concatenated with file entries first; scalar fields prefer the CLI
/// value, falling back to the file value, falling back to the default.
pub fn build_config(path: &Path, cli: CliOverrides) -> Result<Config, Box<dyn std::error::Error>> {
    let file = load_file_config(path)?;
    let defaults = Config::default();

    Ok(Config {
        min_tokens: cli.min_tokens.or(file.min_tokens).unwrap_or(defaults.min_tokens),
        normalize: cli.normalize.or(file.normalize).unwrap_or(defaults.normalize),
        output_format: cli.output_format.or(file.output_format).unwrap_or(defaults.output_format),
        ignore_patterns: concat(file.ignore_patterns, cli.ignore_patterns),
        languages: concat(file.languages, cli.languages),
        suppress_patterns: concat(file.suppress_patterns, cli.suppress_patterns),
    })
}

fn concat(mut file_values: Vec<String>, cli_values: Vec<String>) -> Vec<String> {
    file_values.extend(cli_values);
    file_values
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
