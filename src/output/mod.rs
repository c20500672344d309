use anyhow::Result;
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::engine::SourcePos;
use crate::scanner::ScanResult;

/// One snake_case violation, anchored at the most specific source
/// position available (the literal, the identifier use, or the table
/// row's field value).
#[derive(Debug, Clone, Serialize)]
pub struct Diagnostic {
    pub file: String,
    pub line: usize,
    pub column: usize,
    pub test_name: String,
    pub message: String,
}

impl Diagnostic {
    pub fn new(file: &str, pos: SourcePos, test_name: &str) -> Self {
        Self {
            file: file.to_string(),
            line: pos.line,
            column: pos.column,
            test_name: test_name.to_string(),
            message: format!(
                "test name \"{test_name}\" should use snake_case (e.g., \"my_test_case\")"
            ),
        }
    }

    /// Compiler-style one-liner.
    pub fn render(&self) -> String {
        format!(
            "{}:{}:{}: {}",
            self.file, self.line, self.column, self.message
        )
    }
}

#[derive(Debug, Serialize)]
pub struct JsonOutput {
    pub files_scanned: usize,
    pub total_diagnostics: usize,
    pub diagnostics: Vec<Diagnostic>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

pub struct OutputFormatter;

impl OutputFormatter {
    pub fn format(results: &[ScanResult], format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(Self::render_text(results)),
            OutputFormat::Json => {
                let output = Self::build_output(results);
                Ok(serde_json::to_string_pretty(&output)?)
            }
        }
    }

    fn render_text(results: &[ScanResult]) -> String {
        results
            .iter()
            .flat_map(|r| r.diagnostics.iter().map(Diagnostic::render))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn build_output(results: &[ScanResult]) -> JsonOutput {
        let diagnostics: Vec<Diagnostic> = results
            .iter()
            .flat_map(|r| r.diagnostics.iter().cloned())
            .collect();
        let errors: Vec<String> = results.iter().flat_map(|r| r.errors.iter().cloned()).collect();

        JsonOutput {
            files_scanned: results.len(),
            total_diagnostics: diagnostics.len(),
            diagnostics,
            errors,
        }
    }
}
