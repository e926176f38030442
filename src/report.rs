//! Report writers: CSV and JSON exports.
//!
//! Both exports are rendered in memory before either file is touched, so a
//! serialization failure leaves nothing half-written on disk. Rows appear in
//! input order and the JSON export keeps non-ASCII passwords literal.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::audit::PasswordRecord;

/// Where the two exports land. Resolved from CLI options and passed
/// explicitly; the engine itself never decides paths.
#[derive(Debug, Clone)]
pub struct ReportPaths {
    pub csv: PathBuf,
    pub json: PathBuf,
}

/// Renders the tabular export: a header row plus one row per record.
pub fn render_csv(records: &[PasswordRecord]) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    {
        let mut writer = csv::Writer::from_writer(&mut buf);
        for record in records {
            writer.serialize(record)?;
        }
        writer.flush()?;
    }
    Ok(buf)
}

/// Renders the structured export: a pretty-printed array of records.
pub fn render_json(records: &[PasswordRecord]) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec_pretty(records)?)
}

/// Writes both exports, rendering everything before touching the filesystem.
pub fn write_reports(paths: &ReportPaths, records: &[PasswordRecord]) -> Result<()> {
    let csv_bytes = render_csv(records)?;
    let json_bytes = render_json(records)?;

    fs::write(&paths.csv, csv_bytes)
        .with_context(|| format!("failed to write CSV report: {}", paths.csv.display()))?;
    fs::write(&paths.json, json_bytes)
        .with_context(|| format!("failed to write JSON report: {}", paths.json.display()))?;

    log::debug!(
        "reports written: {} and {}",
        paths.csv.display(),
        paths.json.display()
    );

    Ok(())
}

/// Ensures the output directory exists.
pub fn ensure_output_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)
            .with_context(|| format!("failed to create output directory: {}", path.display()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::audit;
    use crate::blacklist::Blacklist;
    use crate::classify::Strength;
    use tempfile::TempDir;

    fn sample_records() -> Vec<PasswordRecord> {
        let passwords: Vec<String> = ["abc123", "abc123", "pässwörd", "correct-Horse7battery"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        audit(&passwords, &Blacklist::builtin()).records
    }

    #[test]
    fn test_csv_header_and_row_order() {
        let bytes = render_csv(&sample_records()).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let mut lines = text.lines();

        assert_eq!(
            lines.next().unwrap(),
            "password,length,entropy,classification,is_common,count"
        );
        assert_eq!(lines.next().unwrap(), "abc123,6,31.02,Weak,true,2");
        assert_eq!(text.lines().count(), 5);
    }

    #[test]
    fn test_csv_quotes_embedded_separators() {
        let records = vec![PasswordRecord {
            password: "pass,word\"x".to_string(),
            length: 11,
            entropy: 51.7,
            classification: Strength::Moderate,
            is_common: false,
            count: 1,
        }];
        let bytes = render_csv(&records).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.contains("\"pass,word\"\"x\""));
    }

    #[test]
    fn test_json_preserves_non_ascii() {
        let bytes = render_json(&sample_records()).unwrap();
        let text = String::from_utf8(bytes).unwrap();

        assert!(text.contains("pässwörd"));
        assert!(!text.contains("\\u00e4"));

        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        let rows = value.as_array().unwrap();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0]["classification"], "Weak");
        assert_eq!(rows[0]["count"], 2);
    }

    #[test]
    fn test_csv_round_trips() {
        let records = sample_records();
        let bytes = render_csv(&records).unwrap();
        let mut reader = csv::Reader::from_reader(bytes.as_slice());
        let parsed: Vec<PasswordRecord> =
            reader.deserialize().collect::<Result<_, _>>().unwrap();
        assert_eq!(parsed, records);
    }

    #[test]
    fn test_json_round_trips() {
        let records = sample_records();
        let bytes = render_json(&records).unwrap();
        let parsed: Vec<PasswordRecord> = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(parsed, records);
    }

    #[test]
    fn test_write_reports_creates_both_files() {
        let dir = TempDir::new().unwrap();
        let paths = ReportPaths {
            csv: dir.path().join("audit_report.csv"),
            json: dir.path().join("audit_report.json"),
        };

        write_reports(&paths, &sample_records()).unwrap();

        assert!(paths.csv.exists());
        assert!(paths.json.exists());
        let csv_text = std::fs::read_to_string(&paths.csv).unwrap();
        assert!(csv_text.starts_with("password,length,entropy"));
    }

    #[test]
    fn test_ensure_output_dir_creates_missing() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a").join("b");
        ensure_output_dir(&nested).unwrap();
        assert!(nested.is_dir());
    }
}
