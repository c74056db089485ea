//! Output formatting functionality
//!
//! This module provides formatters for different output formats.

use crate::error::{Result, WalkerError};
use crate::models::dep_type::DepType;
use crate::models::module::{Module, NativeModuleType, WalkReport};
use ansi_term::Colour::{Blue, Cyan, Green, Purple, Red, Yellow};
use ansi_term::Style;

fn paint_dep_type(dep_type: DepType, use_colors: bool) -> String {
    let label = format!("{:<12}", dep_type.as_str());
    if !use_colors {
        return label;
    }

    match dep_type {
        DepType::Root => Blue.bold().paint(label).to_string(),
        DepType::Prod => Green.paint(label).to_string(),
        DepType::Optional => Cyan.paint(label).to_string(),
        DepType::Dev => Yellow.paint(label).to_string(),
        DepType::DevOptional => Purple.paint(label).to_string(),
    }
}

/// Format a single module as one line of text
pub fn format_module_text(module: &Module, use_colors: bool, verbose: bool) -> String {
    let mut output = paint_dep_type(module.dep_type, use_colors);
    output.push(' ');

    let name = if module.name.is_empty() { "<unnamed>" } else { module.name.as_str() };
    if use_colors {
        output.push_str(&Style::new().bold().paint(name).to_string());
    } else {
        output.push_str(name);
    }

    if module.native_module_type != NativeModuleType::None {
        let marker = format!(" [{}]", module.native_module_type);
        if use_colors {
            output.push_str(&Red.paint(marker).to_string());
        } else {
            output.push_str(&marker);
        }
    }

    if verbose {
        let path = module.path.display().to_string();
        if use_colors {
            output.push_str(&format!("\n    {}", Style::new().dimmed().paint(path)));
        } else {
            output.push_str(&format!("\n    {}", path));
        }
    }

    output.push('\n');
    output
}

/// Format the per-classification counts of a report
pub fn format_summary_text(report: &WalkReport, use_colors: bool) -> String {
    let mut output = String::new();
    let summary = &report.summary;

    let header = format!("Dependency summary for {}", report.root.display());
    if use_colors {
        output.push_str(&format!("{}\n", Blue.bold().paint(header)));
    } else {
        output.push_str(&format!("{}\n", header));
    }

    output.push_str(&format!("Total modules: {}\n", summary.total));
    output.push_str(&format!("  PROD: {}\n", summary.prod));
    output.push_str(&format!("  OPTIONAL: {}\n", summary.optional));
    output.push_str(&format!("  DEV: {}\n", summary.dev));
    output.push_str(&format!("  DEV_OPTIONAL: {}\n", summary.dev_optional));

    let native = format!("Native modules: {}", summary.native);
    if use_colors && summary.native > 0 {
        output.push_str(&format!("{}\n", Red.bold().paint(native)));
    } else {
        output.push_str(&format!("{}\n", native));
    }

    output
}

/// Format a report as JSON
pub fn format_report_json(report: &WalkReport, pretty: bool) -> Result<String> {
    let formatted = if pretty {
        serde_json::to_string_pretty(report)
    } else {
        serde_json::to_string(report)
    };

    formatted.map_err(|e| WalkerError::Serialize {
        message: e.to_string(),
    })
}

/// Format a report as CSV, one row per module
pub fn format_report_csv(report: &WalkReport) -> Result<String> {
    let csv_error = |e: csv::Error| WalkerError::Serialize {
        message: e.to_string(),
    };

    let mut writer = csv::Writer::from_writer(vec![]);
    writer
        .write_record(["path", "name", "depType", "nativeModuleType"])
        .map_err(csv_error)?;

    for module in &report.modules {
        writer
            .write_record([
                module.path.display().to_string().as_str(),
                module.name.as_str(),
                module.dep_type.as_str(),
                module.native_module_type.as_str(),
            ])
            .map_err(csv_error)?;
    }

    let bytes = writer.into_inner().map_err(|e| WalkerError::Serialize {
        message: e.to_string(),
    })?;

    String::from_utf8(bytes).map_err(|e| WalkerError::Serialize {
        message: e.to_string(),
    })
}
