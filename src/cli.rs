//! Command-line interface definition for password-audit
//!
//! Provides argument parsing and report-path resolution for the audit tool.

use clap::Parser;
use std::path::PathBuf;

use crate::report::ReportPaths;

/// Password-strength auditor for security reviews
///
/// Score each password in a file, classify it into Weak / Moderate / Strong,
/// flag known-common values and duplicates, and export CSV + JSON reports.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "password-audit",
    author = "m0h1nd4",
    version,
    about = "Password-strength auditor with entropy scoring and duplicate detection",
    long_about = r#"
Audit a password list: estimate per-password entropy from character-class
coverage, classify every entry into Weak / Moderate / Strong, flag values
from a known-common blacklist, count duplicates, and write a CSV and a JSON
report next to a console summary.

Only audit files you own or are authorized to test.

EXAMPLES:
    # Audit a password file, reports land in the current directory
    password-audit passwords.txt

    # Put audit_report.csv / audit_report.json somewhere else
    password-audit passwords.txt -o ./reports

    # Custom report filenames
    password-audit passwords.txt --csv-name leaked.csv --json-name leaked.json

    # Extend the built-in common-password blacklist
    password-audit passwords.txt --blacklist rockyou-top100.txt

CLASSIFICATION RULES (first match wins):
    Weak      blacklisted, shorter than 6 chars, or under 28 bits
    Moderate  under 50 bits or shorter than 10 chars
    Strong    everything else
"#,
    after_help = "For more information, visit: https://github.com/m0h1nd4/password-audit"
)]
pub struct Args {
    /// Password file to audit (one password per line)
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output directory for the reports (default: current directory)
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub output: PathBuf,

    /// Filename for the CSV report
    #[arg(long, value_name = "NAME", default_value = "audit_report.csv")]
    pub csv_name: String,

    /// Filename for the JSON report
    #[arg(long, value_name = "NAME", default_value = "audit_report.json")]
    pub json_name: String,

    /// File with extra blacklist entries, one per line, merged with built-ins
    #[arg(long, value_name = "FILE")]
    pub blacklist: Option<PathBuf>,

    /// Quiet mode - summary only
    #[arg(short, long, default_value_t = false, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose mode - detailed logging
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

impl Args {
    /// Resolve where the two reports will be written
    pub fn report_paths(&self) -> ReportPaths {
        ReportPaths {
            csv: self.output.join(&self.csv_name),
            json: self.output.join(&self.json_name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args_for(input: &str) -> Args {
        Args {
            input: PathBuf::from(input),
            output: PathBuf::from("."),
            csv_name: "audit_report.csv".to_string(),
            json_name: "audit_report.json".to_string(),
            blacklist: None,
            quiet: false,
            verbose: false,
        }
    }

    #[test]
    fn test_default_report_paths() {
        let paths = args_for("passwords.txt").report_paths();
        assert_eq!(paths.csv, PathBuf::from("./audit_report.csv"));
        assert_eq!(paths.json, PathBuf::from("./audit_report.json"));
    }

    #[test]
    fn test_custom_output_dir_and_names() {
        let mut args = args_for("passwords.txt");
        args.output = PathBuf::from("/tmp/reports");
        args.csv_name = "pw.csv".to_string();
        args.json_name = "pw.json".to_string();

        let paths = args.report_paths();
        assert_eq!(paths.csv, PathBuf::from("/tmp/reports/pw.csv"));
        assert_eq!(paths.json, PathBuf::from("/tmp/reports/pw.json"));
    }

    #[test]
    fn test_parses_minimal_invocation() {
        let args = Args::try_parse_from(["password-audit", "passwords.txt"]).unwrap();
        assert_eq!(args.input, PathBuf::from("passwords.txt"));
        assert_eq!(args.output, PathBuf::from("."));
        assert_eq!(args.csv_name, "audit_report.csv");
        assert!(!args.quiet);
    }

    #[test]
    fn test_rejects_missing_input() {
        assert!(Args::try_parse_from(["password-audit"]).is_err());
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Args::try_parse_from(["password-audit", "pw.txt", "-q", "-v"]).is_err());
    }
}
