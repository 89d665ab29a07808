//! # Command Output
//!
//! File: cli/src/common/output.rs
//!
//! Handlers print either a one-line confirmation or, with `--json`, the whole
//! parsed CMCI response. `get` prints the returned records instead.
//!
use crate::core::error::Result;
use anyhow::Context;
use cicsrs_cmci::{CmciResponse, Record};

/// Confirmation for a mutating action, or the raw response as JSON.
pub fn report(response: &CmciResponse, json: bool, message: &str) -> Result<()> {
    if json {
        print_json(response)
    } else {
        println!("{}", message);
        Ok(())
    }
}

/// Records returned by a read, or the raw response as JSON.
pub fn report_records(response: &CmciResponse, json: bool) -> Result<()> {
    if json {
        return print_json(response);
    }
    print!("{}", render_records(response));
    Ok(())
}

/// Success line naming the resource, e.g. `The program 'PGM1' was defined successfully.`
pub fn success(kind: &str, name: &str, verb: &str) -> String {
    format!("The {} '{}' was {} successfully.", kind, name, verb)
}

fn print_json(response: &CmciResponse) -> Result<()> {
    let rendered =
        serde_json::to_string_pretty(response).context("Failed to render response as JSON")?;
    println!("{}", rendered);
    Ok(())
}

fn render_records(response: &CmciResponse) -> String {
    let mut out = String::new();
    if response.records.is_empty() {
        out.push_str("No records found.\n");
        return out;
    }
    for (index, record) in response.records.iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        render_record(&mut out, record);
    }
    out.push_str(&format!(
        "\n{} of {} record(s) displayed.\n",
        response.records.len(),
        response.result_summary.recordcount
    ));
    out
}

fn render_record(out: &mut String, record: &Record) {
    out.push_str(&format!("{}:\n", record.resource));
    let width = record.attributes.keys().map(|k| k.len()).max().unwrap_or(0);
    for (key, value) in &record.attributes {
        out.push_str(&format!("  {:<width$}  {}\n", key, value, width = width));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cicsrs_cmci::ResultSummary;
    use std::collections::BTreeMap;

    fn record(program: &str, status: &str) -> Record {
        let mut attributes = BTreeMap::new();
        attributes.insert("program".to_string(), program.to_string());
        attributes.insert("status".to_string(), status.to_string());
        Record {
            resource: "cicsprogram".into(),
            attributes,
        }
    }

    #[test]
    fn test_success_message() {
        assert_eq!(
            success("program", "PGM1", "defined"),
            "The program 'PGM1' was defined successfully."
        );
    }

    #[test]
    fn test_render_records() {
        let response = CmciResponse {
            result_summary: ResultSummary {
                api_response1: 1024,
                recordcount: 3,
                ..Default::default()
            },
            records: vec![record("PGM1", "ENABLED"), record("PGM2", "DISABLED")],
            errors: vec![],
        };
        let rendered = render_records(&response);
        assert!(rendered.starts_with("cicsprogram:\n  program  PGM1\n  status   ENABLED\n"));
        assert!(rendered.contains("  program  PGM2\n"));
        assert!(rendered.ends_with("2 of 3 record(s) displayed.\n"));
    }

    #[test]
    fn test_render_single_record_exact() {
        let response = CmciResponse {
            result_summary: ResultSummary {
                api_response1: 1024,
                recordcount: 1,
                ..Default::default()
            },
            records: vec![record("PGM1", "ENABLED")],
            errors: vec![],
        };
        assert_eq!(
            render_records(&response),
            "cicsprogram:\n  program  PGM1\n  status   ENABLED\n\n1 of 1 record(s) displayed.\n"
        );
    }

    #[test]
    fn test_render_no_records() {
        assert_eq!(
            render_records(&CmciResponse::default()),
            "No records found.\n"
        );
    }
}
