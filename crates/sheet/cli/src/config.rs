//! CLI configuration loaded from the environment and command line.
use std::env;
use std::path::PathBuf;

/// Where the derivation request is read from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum InputSource {
    #[default]
    Stdin,
    File(PathBuf),
}

impl InputSource {
    /// `-` and the empty string mean stdin.
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "" | "-" => Self::Stdin,
            path => Self::File(PathBuf::from(path)),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CliConfig {
    pub input: InputSource,
    /// Pretty-print the JSON written to stdout.
    pub pretty: bool,
    /// Wrap the sheet as `{ "sheet": ..., "issues": [...] }`.
    pub include_issues: bool,
}

impl CliConfig {
    /// Construct configuration from process environment variables.
    ///
    /// - `SHEET_INPUT`: request path, `-` for stdin
    /// - `SHEET_PRETTY`: pretty-print output
    /// - `SHEET_INCLUDE_ISSUES`: include resolution issues in the output
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(input) = lookup("SHEET_INPUT") {
            config.input = InputSource::parse(&input);
        }
        if let Some(pretty) = lookup("SHEET_PRETTY").as_deref().and_then(parse_flag) {
            config.pretty = pretty;
        }
        if let Some(include) = lookup("SHEET_INCLUDE_ISSUES")
            .as_deref()
            .and_then(parse_flag)
        {
            config.include_issues = include;
        }

        config
    }

    /// A first positional argument overrides `SHEET_INPUT`.
    #[must_use]
    pub fn with_args(mut self, mut args: impl Iterator<Item = String>) -> Self {
        if let Some(input) = args.next() {
            self.input = InputSource::parse(&input);
        }
        self
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
