//! Integration tests for the CLI commands.

use std::fs;
use std::io::Write;
use std::net::TcpListener;
use std::path::PathBuf;

use fieldcheck_cli::cli::{NormalizeArgs, ValidateArgs};
use fieldcheck_cli::commands::{normalize_options, run_normalize, run_validate, validation_options};
use fieldcheck_cli::summary::{changes_table, report_table, tags_table};
use fieldcheck_model::{FieldValue, Record};
use fieldcheck_service::ServiceConfig;
use serde_json::{Value, json};
use tempfile::NamedTempFile;

fn record_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

/// Configuration pointing at a port nothing listens on.
fn offline_config() -> ServiceConfig {
    let endpoint = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        format!("http://{}", listener.local_addr().unwrap())
    };
    ServiceConfig {
        endpoint,
        timeout_secs: 2,
        ..ServiceConfig::default()
    }
}

const RECORD: &str = r#"{
  "fields": [
    {"name": "first", "type": "FirstName", "value": "ADA"},
    {"name": "last", "type": "LastName", "value": "  o'brien"},
    {"name": "email", "type": "EmailAddress", "value": " Ada@Example.COM "},
    {"name": "phone", "type": "PhoneNumber", "value": " 07700 900123 "},
    {"name": "ref", "type": "Reference", "read_only": true, "value": "  keep  "}
  ]
}"#;

#[test]
fn normalize_reports_changes_without_writing() {
    let file = record_file(RECORD);
    let path = file.path();
    let args = NormalizeArgs {
        record: path.to_path_buf(),
        write: false,
        locale: None,
    };

    let changes = run_normalize(&args, &offline_config()).unwrap();

    let fields: Vec<&str> = changes.iter().map(|c| c.field.as_str()).collect();
    assert_eq!(fields, ["first", "last", "email", "phone"]);
    assert_eq!(changes[3].new_value, "07700 900123");
    assert_eq!(fs::read_to_string(path).unwrap(), RECORD);
}

#[test]
fn normalize_write_updates_record_file() {
    let file = record_file(RECORD);
    let path = file.path();
    let args = NormalizeArgs {
        record: path.to_path_buf(),
        write: true,
        locale: Some("en-US".to_string()),
    };

    run_normalize(&args, &offline_config()).unwrap();

    let record = Record::from_json_file(path).unwrap();
    assert_eq!(record.field("last").unwrap().value, FieldValue::from("O'Brien"));
    assert_eq!(
        record.field("email").unwrap().value,
        FieldValue::from("ada@example.com")
    );
    assert_eq!(record.field("ref").unwrap().value, FieldValue::from("  keep  "));
}

#[test]
fn normalize_write_keeps_non_text_values() {
    let file = record_file(
        r#"{"fields": [
            {"name": "first", "type": "FirstName", "value": "grace"},
            {"name": "age", "value": 42},
            {"name": "id", "value": 12345678901234567890},
            {"name": "meta", "value": {"source": "import", "rank": [1, 2]}}
        ]}"#,
    );
    let args = NormalizeArgs {
        record: file.path().to_path_buf(),
        write: true,
        locale: None,
    };

    run_normalize(&args, &offline_config()).unwrap();

    let written = fs::read_to_string(file.path()).unwrap();
    assert!(written.contains("\"value\": 42\n"));
    assert!(written.contains("\"value\": 12345678901234567890\n"));
    let written: Value = serde_json::from_str(&written).unwrap();
    assert_eq!(written["fields"][0]["value"], "Grace");
    assert_eq!(
        written["fields"][3]["value"],
        json!({"source": "import", "rank": [1, 2]})
    );
}

#[test]
fn duplicate_field_names_fail_to_load() {
    let file = record_file(
        r#"{"fields": [
            {"name": "email", "type": "EmailAddress", "value": "a@b.com"},
            {"name": "email", "type": "EmailAddress", "value": "c@d.com"}
        ]}"#,
    );
    let args = NormalizeArgs {
        record: file.path().to_path_buf(),
        write: true,
        locale: None,
    };

    let error = run_normalize(&args, &offline_config()).unwrap_err();

    assert!(format!("{error:#}").contains("duplicate field name"));
}

#[test]
fn invalid_locale_is_an_error() {
    let error = normalize_options(&ServiceConfig::default(), Some("english")).unwrap_err();
    assert!(format!("{error:#}").contains("english"));
}

#[test]
fn unreachable_service_validates_as_inconclusive() {
    let file = record_file(RECORD);
    let path = file.path();
    let args = ValidateArgs {
        record: path.to_path_buf(),
        treat_no_coverage_as_invalid: true,
        treat_unavailable_as_invalid: true,
        message_template: None,
    };

    let report = run_validate(&args, &offline_config()).unwrap();

    assert!(report.is_valid());
    assert_eq!(report.results.len(), 2);
    assert_eq!(report.inconclusive_count(), 2);
    let rendered = report_table(&report).to_string();
    assert!(rendered.contains("inconclusive"));
}

#[test]
fn validation_options_follow_flags() {
    let args = ValidateArgs {
        record: PathBuf::from("unused.json"),
        treat_no_coverage_as_invalid: true,
        treat_unavailable_as_invalid: false,
        message_template: Some("Bad {name}".to_string()),
    };
    let options = validation_options(&args);
    assert!(options.policy.treat_no_coverage_as_invalid);
    assert!(!options.policy.treat_unavailable_as_invalid);
    assert_eq!(options.message_template.as_deref(), Some("Bad {name}"));
}

#[test]
fn tables_render_content() {
    let tags = tags_table().to_string();
    for expected in ["EmailAddress", "Lowercase email", "Format phone", "(other)"] {
        assert!(tags.contains(expected), "missing {expected}");
    }

    let changes = changes_table(&[fieldcheck_model::FieldChange {
        field: "email".to_string(),
        old_value: " A@B.COM ".to_string(),
        new_value: "a@b.com".to_string(),
    }])
    .to_string();
    assert!(changes.contains("email"));
    assert!(changes.contains("\"a@b.com\""));
}
