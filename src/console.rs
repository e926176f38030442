//! Console presentation: styled status lines and the audit summary.

use colored::*;

use crate::audit::AuditSummary;

/// How many duplicate passwords the summary lists before truncating.
pub const DUPLICATE_PREVIEW_LIMIT: usize = 10;

/// Print the application banner
pub fn print_banner() {
    println!(
        "{}",
        format!("\n  password-audit v{}", env!("CARGO_PKG_VERSION"))
            .green()
            .bold()
    );
    println!(
        "{}",
        "  entropy scoring, tier classification and duplicate detection".green()
    );
}

/// Print a section header
pub fn print_header(text: &str) {
    println!("\n{} {}", "▶".green(), text.green().bold());
}

/// Print an info message
pub fn print_info(text: &str) {
    println!("  {} {}", "ℹ".cyan(), text);
}

/// Print a success message
pub fn print_success(text: &str) {
    println!("  {} {}", "✔".green(), text.green());
}

/// Print a warning message
pub fn print_warning(text: &str) {
    println!("  {} {}", "⚠".yellow(), text.yellow());
}

/// Print an error message
pub fn print_error(text: &str) {
    eprintln!("  {} {}", "✖".red(), text.red());
}

/// Prints the end-of-run summary: totals, per-tier counts and a short
/// duplicate preview.
pub fn print_summary(summary: &AuditSummary) {
    println!();
    println!("{}", "═".repeat(58).green());
    println!("{}", "                     AUDIT COMPLETE".green().bold());
    println!("{}", "═".repeat(58).green());
    println!();

    println!("  {} {}", "Total passwords:".green(), summary.total);
    println!(
        "  {} {}   {} {}   {} {}",
        "Weak:".red(),
        summary.weak.to_string().red().bold(),
        "Moderate:".yellow(),
        summary.moderate.to_string().yellow().bold(),
        "Strong:".green(),
        summary.strong.to_string().green().bold(),
    );

    let preview = format_duplicate_preview(&summary.duplicates);
    if preview.is_empty() {
        println!("  {} {}", "Duplicate passwords:".green(), 0);
    } else {
        println!(
            "  {} {} {}",
            "Duplicate passwords:".yellow(),
            summary.duplicates.len(),
            preview.yellow(),
        );
    }
    println!();
}

/// Formats up to the first ten distinct duplicates in first-occurrence
/// order, with a marker when more were found.
pub fn format_duplicate_preview(duplicates: &[String]) -> String {
    if duplicates.is_empty() {
        return String::new();
    }

    let shown: Vec<&str> = duplicates
        .iter()
        .take(DUPLICATE_PREVIEW_LIMIT)
        .map(String::as_str)
        .collect();

    let mut preview = format!("-> [{}]", shown.join(", "));
    if duplicates.len() > DUPLICATE_PREVIEW_LIMIT {
        preview.push_str(&format!(
            " (+{} more)",
            duplicates.len() - DUPLICATE_PREVIEW_LIMIT
        ));
    }
    preview
}
