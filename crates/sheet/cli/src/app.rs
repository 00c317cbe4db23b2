//! Reads a derivation request, runs the calculators, renders the sheet.
use std::io::{Read, Write};

use anyhow::{Context, Result};
use serde::Serialize;
use sheet_core::{ResolutionIssue, ResourceSheet, SheetInputs, derive_resources};

use crate::config::{CliConfig, InputSource};

/// Output envelope used when resolution issues are requested.
#[derive(Debug, Serialize)]
struct SheetReport<'a> {
    sheet: &'a ResourceSheet,
    issues: &'a [ResolutionIssue],
}

pub struct SheetApp {
    config: CliConfig,
}

impl SheetApp {
    pub fn new(config: CliConfig) -> Self {
        Self { config }
    }

    pub fn run(&self) -> Result<()> {
        let request = self.read_request()?;
        let rendered = self.render(&request)?;

        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{rendered}").context("Failed to write sheet to stdout")?;
        Ok(())
    }

    fn read_request(&self) -> Result<String> {
        match &self.config.input {
            InputSource::Stdin => {
                let mut buffer = String::new();
                std::io::stdin()
                    .read_to_string(&mut buffer)
                    .context("Failed to read request from stdin")?;
                Ok(buffer)
            }
            InputSource::File(path) => std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read request {}", path.display())),
        }
    }

    /// Derives the resource sheet for a JSON request and renders it as JSON.
    pub fn render(&self, request: &str) -> Result<String> {
        let inputs: SheetInputs =
            serde_json::from_str(request).context("Failed to parse derivation request")?;
        tracing::info!(
            classes = inputs.character.classes.len(),
            powers = inputs.powers.len(),
            maneuvers = inputs.maneuvers.len(),
            "Deriving resource sheet"
        );

        let (sheet, issues) = derive_resources(&inputs)
            .context("Failed to derive resource sheet")?
            .into_parts();

        if !issues.is_empty() {
            tracing::warn!("{} content reference(s) could not be resolved", issues.len());
        }

        let rendered = if self.config.include_issues {
            self.to_json(&SheetReport {
                sheet: &sheet,
                issues: &issues,
            })?
        } else {
            self.to_json(&sheet)?
        };
        Ok(rendered)
    }

    fn to_json<T: Serialize>(&self, value: &T) -> Result<String> {
        let rendered = if self.config.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        };
        rendered.context("Failed to serialize resource sheet")
    }
}
