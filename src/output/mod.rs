//! Output formatting and writing functionality

mod formatters;
mod writers;

pub use self::writers::{create_writer, FileWriter, OutputWriter, StdoutWriter};

use crate::error::Result;
use crate::models::config::OutputFormat;
use crate::models::module::WalkReport;

/// Trait for different output formatters
pub trait Formatter {
    /// Format a walk report into a string
    fn format(&self, report: &WalkReport) -> Result<String>;
}

/// Text formatter for human-readable output
pub struct TextFormatter {
    pub use_colors: bool,
    pub verbose: bool,
    pub quiet: bool,
}

impl TextFormatter {
    /// Create a new text formatter
    pub fn new(use_colors: bool, verbose: bool, quiet: bool) -> Self {
        Self {
            use_colors,
            verbose,
            quiet,
        }
    }
}

impl Formatter for TextFormatter {
    fn format(&self, report: &WalkReport) -> Result<String> {
        // quiet mode prints bare module lines only
        if self.quiet {
            let mut output = String::new();
            for module in &report.modules {
                output.push_str(&format!("{}\t{}\n", module.dep_type, module.path.display()));
            }
            return Ok(output);
        }

        let mut output = String::new();
        for module in &report.modules {
            output.push_str(&formatters::format_module_text(
                module,
                self.use_colors,
                self.verbose,
            ));
        }
        output.push('\n');
        output.push_str(&formatters::format_summary_text(report, self.use_colors));

        Ok(output)
    }
}

/// JSON formatter for machine-readable output
pub struct JsonFormatter {
    pub pretty: bool,
}

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl Formatter for JsonFormatter {
    fn format(&self, report: &WalkReport) -> Result<String> {
        formatters::format_report_json(report, self.pretty)
    }
}

/// CSV formatter for spreadsheet analysis
pub struct CsvFormatter;

impl Formatter for CsvFormatter {
    fn format(&self, report: &WalkReport) -> Result<String> {
        formatters::format_report_csv(report)
    }
}

/// Create a formatter based on the output format
pub fn create_formatter(
    format: OutputFormat,
    use_colors: bool,
    verbose: bool,
    quiet: bool,
) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(use_colors, verbose, quiet)),
        OutputFormat::Json => Box::new(JsonFormatter::new(true)),
        OutputFormat::Csv => Box::new(CsvFormatter),
    }
}
