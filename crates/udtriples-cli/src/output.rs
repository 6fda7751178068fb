//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};
use udtriples_domain::Triple;
use udtriples_extractor::ExtractionStats;
use udtriples_io::ConversionReport;

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Selected output format.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Format a conversion report.
    pub fn format_report(&self, report: &ConversionReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
            OutputFormat::Table => Ok(self.format_report_table(report)),
            OutputFormat::Quiet => Ok(self.format_report_quiet(report)),
        }
    }

    /// Format a report as a table with a totals row.
    fn format_report_table(&self, report: &ConversionReport) -> String {
        if report.splits.is_empty() {
            return self.colorize("No splits converted.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record([
            "Split", "Input", "Output", "Sentences", "Tokens", "Triples", "Duplicates", "Stripped",
        ]);

        for split in &report.splits {
            let input = split.input.display().to_string();
            let output = split.output.display().to_string();
            let mut row = vec![split.split.clone(), input, output];
            row.extend(stats_cells(&split.stats));
            builder.push_record(row);
        }

        let mut total = vec!["total".to_string(), String::new(), String::new()];
        total.extend(stats_cells(&report.total));
        builder.push_record(total);

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    /// Format a report in quiet mode (output paths only).
    fn format_report_quiet(&self, report: &ConversionReport) -> String {
        let paths: Vec<String> = report
            .splits
            .iter()
            .map(|s| s.output.display().to_string())
            .collect();
        paths.join("\n")
    }

    /// Format triples for preview.
    ///
    /// JSON renders an array of three-element arrays; the other formats
    /// print the same tab-separated lines the output files contain.
    pub fn format_triples(&self, triples: &[Triple]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let rows: Vec<[&str; 3]> = triples
                    .iter()
                    .map(|t| [t.first(), t.second(), t.features()])
                    .collect();
                Ok(serde_json::to_string_pretty(&rows)?)
            }
            OutputFormat::Table | OutputFormat::Quiet => Ok(triples
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

fn stats_cells(stats: &ExtractionStats) -> [String; 5] {
    [
        stats.sentences.to_string(),
        stats.tokens.to_string(),
        stats.triples.to_string(),
        stats.duplicates_dropped.to_string(),
        stats.lemmas_stripped.to_string(),
    ]
}
