//! Password Audit - password-strength auditing for security reviews
//!
//! Main entry point for the command-line application.

use clap::Parser;
use std::process;

use anyhow::Context;
use bytesize::ByteSize;
use password_audit::audit::audit;
use password_audit::blacklist::Blacklist;
use password_audit::cli::Args;
use password_audit::console::{
    print_banner, print_error, print_header, print_info, print_success, print_summary,
    print_warning,
};
use password_audit::input::read_password_lines;
use password_audit::report::{ensure_output_dir, write_reports};

fn main() {
    // Parse command-line arguments
    let args = Args::parse();

    // Set up logging
    if args.verbose {
        std::env::set_var("RUST_LOG", "debug");
    } else if !args.quiet {
        std::env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    // Run the application
    if let Err(e) = run(args) {
        print_error(&format!("{}", e));

        // Print chain of errors
        let mut source = e.source();
        while let Some(err) = source {
            print_error(&format!("  Caused by: {}", err));
            source = err.source();
        }

        process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    // Print banner unless quiet mode
    if !args.quiet {
        print_banner();
    }

    // Build the blacklist before touching the input
    let blacklist = match &args.blacklist {
        Some(path) => Blacklist::from_file(path)
            .with_context(|| format!("failed to load blacklist file: {}", path.display()))?,
        None => Blacklist::builtin(),
    };

    // Show configuration
    if !args.quiet && args.verbose {
        print_config(&args, &blacklist);
    }

    // Read passwords
    if !args.quiet {
        print_header("Reading passwords");
    }
    let passwords = read_password_lines(&args.input)?;
    if !args.quiet {
        print_info(&format!(
            "{} passwords loaded from {}",
            passwords.len(),
            args.input.display()
        ));
    }

    // Score, classify and count
    let report = audit(&passwords, &blacklist);

    // Write both reports, then the summary
    let paths = args.report_paths();
    ensure_output_dir(&args.output)?;
    write_reports(&paths, &report.records)?;

    print_summary(&report.summary);

    if !args.quiet {
        if report.summary.weak > 0 {
            print_warning(&format!(
                "{} weak password(s) should be rotated",
                report.summary.weak
            ));
        }
        print_success(&format!(
            "Report written: {}, {}",
            paths.csv.display(),
            paths.json.display()
        ));
    }

    Ok(())
}

/// Print configuration summary
fn print_config(args: &Args, blacklist: &Blacklist) {
    print_header("Configuration");

    let input_size = std::fs::metadata(&args.input).map(|m| m.len()).unwrap_or(0);
    print_info(&format!(
        "Input:       {} ({})",
        args.input.display(),
        ByteSize(input_size)
    ));
    print_info(&format!("Output dir:  {}", args.output.display()));
    print_info(&format!("CSV report:  {}", args.csv_name));
    print_info(&format!("JSON report: {}", args.json_name));
    print_info(&format!("Blacklist:   {} entries", blacklist.len()));
}
