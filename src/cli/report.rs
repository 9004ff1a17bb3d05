//! Report formatting and printing.
//!
//! Renders an [`Analysis`] to the terminal. Separate from core logic so the
//! analysis itself stays free of formatting and color codes.

use std::io::{self, Write};

use colored::Colorize;

use crate::core::{Analysis, ReportKind};

const METER_SIZE: usize = 10;

/// Print the selected report facets to stdout.
pub fn print(analysis: &Analysis, report: &[ReportKind]) {
    report_to(analysis, report, &mut io::stdout().lock());
}

/// Print to a custom writer. Useful for testing or redirecting output.
pub fn report_to<W: Write>(analysis: &Analysis, report: &[ReportKind], writer: &mut W) {
    let _ = writeln!(
        writer,
        "Scanned {} files in {:.1} seconds",
        analysis.filenames.len(),
        analysis.elapsed_time
    );

    if report.contains(&ReportKind::Usage) {
        print_component_usage(analysis, writer);
    }
    if report.contains(&ReportKind::Props) {
        print_prop_usage(analysis, writer);
    }
    if report.contains(&ReportKind::Lines) {
        print_line_usage(analysis, writer);
    }
    print_errors(analysis, writer);
}

fn heading<W: Write>(writer: &mut W, text: &str) {
    let _ = writeln!(writer);
    let _ = writeln!(writer, "{}", text.cyan());
}

/// Ten-cell meter: filled cells scale with count/total, rounded up so any
/// non-zero count shows at least one cell.
fn text_meter(total: usize, count: usize) -> String {
    let filled = if total == 0 {
        0
    } else {
        ((count as f64 / total as f64) * METER_SIZE as f64).ceil() as usize
    };
    let filled = filled.min(METER_SIZE);
    format!(
        "{}{}",
        "*".repeat(filled).green().bold(),
        "-".repeat(METER_SIZE - filled).red().bold()
    )
}

/// Pad counts to at least 4 digits so most columns line up.
fn max_digits<I: Iterator<Item = usize>>(counts: I) -> usize {
    counts
        .map(|count| count.to_string().len())
        .fold(4, usize::max)
}

fn print_component_usage<W: Write>(analysis: &Analysis, writer: &mut W) {
    if analysis.component_total == 0 {
        return;
    }
    heading(
        writer,
        &format!(
            "{} components used {} times:",
            analysis.component_total, analysis.component_usage_total
        ),
    );
    let width = max_digits(analysis.component_usage.values().copied());
    for (name, count) in &analysis.component_usage {
        let _ = writeln!(
            writer,
            "  {}   {}   {}",
            format!("{count:>width$}").bold(),
            text_meter(analysis.component_usage_total, *count),
            format!("<{name}>").bold()
        );
    }
}

fn print_prop_usage<W: Write>(analysis: &Analysis, writer: &mut W) {
    for (name, props) in &analysis.prop_usage {
        let usage = analysis.component_usage.get(name).copied().unwrap_or(0);
        let times = if usage == 1 { "time" } else { "times" };

        if props.is_empty() {
            heading(
                writer,
                &format!("<{name}> was used {usage} {times} without any props"),
            );
            continue;
        }

        heading(
            writer,
            &format!("<{name}> was used {usage} {times} with the following prop usage:"),
        );
        let width = max_digits(props.values().copied());
        for (prop, count) in props {
            let _ = writeln!(
                writer,
                "  {}   {}   {}",
                format!("{count:>width$}").bold(),
                text_meter(usage, *count),
                prop.bold()
            );
        }
    }
}

fn print_line_usage<W: Write>(analysis: &Analysis, writer: &mut W) {
    for (name, props) in &analysis.line_usage {
        for records in props.values() {
            for record in records {
                heading(
                    writer,
                    &format!(
                        "<{}> {}:{}:{}",
                        name,
                        record.filename,
                        record.start.line,
                        record.start.column + 1
                    ),
                );
                let _ = writeln!(writer, "{}", record.excerpt);
            }
        }
    }
}

fn print_errors<W: Write>(analysis: &Analysis, writer: &mut W) {
    if analysis.errors.is_empty() {
        return;
    }
    let count = analysis.errors.len();
    let _ = writeln!(writer);
    let _ = writeln!(
        writer,
        "{} parse {}",
        count,
        if count == 1 { "error" } else { "errors" }
    );
    for (filename, error) in &analysis.errors {
        let _ = writeln!(
            writer,
            "  {}:{}:{} {}",
            filename,
            error.location.line,
            error.location.column + 1,
            error.message.red().bold()
        );
    }
    if !analysis.suggested_syntax.is_empty() {
        let _ = writeln!(writer, "Try adding these syntax extensions as arguments:");
        for name in &analysis.suggested_syntax {
            let _ = writeln!(writer, "  {} {}", "--syntax".cyan().bold(), name);
        }
    }
}
