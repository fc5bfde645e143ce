//! Tests for record-level validation.

mod common;

use common::{FakeVerifier, Reply};
use fieldcheck_model::{FieldDescriptor, FieldValue, Record, ResultCode, StrictnessPolicy};
use fieldcheck_validate::{RecordValidator, ValidationOptions};

fn signup_record() -> Record {
    Record::default()
        .with_field(
            FieldDescriptor::new("email", "EmailAddress")
                .with_value("bad@example")
                .with_display_name("Email address"),
        )
        .with_field(
            FieldDescriptor::new("mobile", "PhoneNumber")
                .with_value("07700 900123")
                .with_default_country("FR"),
        )
        .with_field(FieldDescriptor::new("landline", "PhoneNumber").with_value("01632 960000"))
        .with_field(FieldDescriptor::new("country", "Country").with_value("GB"))
        .with_field(FieldDescriptor::new("first", "FirstName").with_value("ada"))
}

#[test]
fn report_lists_verdicts_in_field_order() {
    let verifier = FakeVerifier::new()
        .reply("bad@example", Reply::Code(ResultCode::Invalid))
        .reply("07700 900123", Reply::Code(ResultCode::Unavailable))
        .reply("01632 960000", Reply::Transport);
    let options = ValidationOptions::default().with_policy(StrictnessPolicy::strict());

    let report = RecordValidator::new(&verifier, options).validate(&signup_record());

    insta::assert_json_snapshot!(report, @r#"
    {
      "results": [
        {
          "field": "email",
          "kind": "Email",
          "accept": false,
          "message": "Email address is not a valid email address",
          "inconclusive": false
        },
        {
          "field": "mobile",
          "kind": "Phone",
          "accept": false,
          "message": "mobile is not a valid telephone number",
          "inconclusive": false
        },
        {
          "field": "landline",
          "kind": "Phone",
          "accept": true,
          "message": null,
          "inconclusive": true
        }
      ]
    }
    "#);
    assert!(!report.is_valid());
    assert_eq!(report.failure_count(), 2);
    assert_eq!(report.inconclusive_count(), 1);
}

#[test]
fn sibling_country_wins_over_field_default() {
    let verifier = FakeVerifier::new();
    RecordValidator::new(&verifier, ValidationOptions::default())
        .with_process_default_country(Some("DE".to_string()))
        .validate(&signup_record());

    let calls = verifier.calls();
    assert_eq!(calls.len(), 3);
    assert_eq!(calls[1].country.as_deref(), Some("GB"));
    assert_eq!(calls[2].country.as_deref(), Some("GB"));
}

#[test]
fn field_and_process_defaults_apply_without_sibling() {
    let record = Record::default()
        .with_field(
            FieldDescriptor::new("mobile", "PhoneNumber")
                .with_value("0612345678")
                .with_default_country("FR"),
        )
        .with_field(FieldDescriptor::new("other", "PhoneNumber").with_value("030123456"));
    let verifier = FakeVerifier::new();

    RecordValidator::new(&verifier, ValidationOptions::default())
        .with_process_default_country(Some("DE".to_string()))
        .validate(&record);

    let calls = verifier.calls();
    assert_eq!(calls[0].country.as_deref(), Some("FR"));
    assert_eq!(calls[1].country.as_deref(), Some("DE"));
}

#[test]
fn skips_read_only_non_text_and_untagged_fields() {
    let record = Record::default()
        .with_field(
            FieldDescriptor::new("email", "EmailAddress")
                .with_value("bad@example")
                .read_only(),
        )
        .with_field(FieldDescriptor::new("phone", "PhoneNumber").with_value(FieldValue::Other(serde_json::json!(7))))
        .with_field(FieldDescriptor::new("notes", "Comment").with_value("bad@example"));
    let verifier = FakeVerifier::new().reply("bad@example", Reply::Code(ResultCode::Invalid));

    let report = RecordValidator::new(&verifier, ValidationOptions::default()).validate(&record);

    assert!(report.results.is_empty());
    assert!(report.is_valid());
    assert!(verifier.calls().is_empty());
}

#[test]
fn empty_values_are_accepted_without_calls() {
    let record = Record::default()
        .with_field(FieldDescriptor::new("email", "EmailAddress"))
        .with_field(FieldDescriptor::new("phone", "PhoneNumber").with_value(""));
    let verifier = FakeVerifier::new();

    let report = RecordValidator::new(&verifier, ValidationOptions::default()).validate(&record);

    assert_eq!(report.results.len(), 2);
    assert!(report.is_valid());
    assert!(verifier.calls().is_empty());
}

#[test]
fn custom_message_template() {
    let record = Record::default()
        .with_field(FieldDescriptor::new("email", "EmailAddress").with_value("bad@example"));
    let verifier = FakeVerifier::new().reply("bad@example", Reply::Code(ResultCode::Invalid));
    let options = ValidationOptions::default().with_message_template("Check your {name}");

    let report = RecordValidator::new(&verifier, options).validate(&record);

    assert_eq!(
        report.get("email").and_then(|r| r.message.as_deref()),
        Some("Check your email")
    );
}

#[test]
fn non_transport_errors_are_also_inconclusive() {
    let record = Record::default()
        .with_field(FieldDescriptor::new("email", "EmailAddress").with_value("a@b.com"))
        .with_field(FieldDescriptor::new("phone", "PhoneNumber").with_value("01632 960000"));
    let verifier = FakeVerifier::new()
        .reply("a@b.com", Reply::Misconfigured)
        .reply("01632 960000", Reply::Transport);

    let report = RecordValidator::new(&verifier, ValidationOptions::default()).validate(&record);

    assert!(report.is_valid());
    assert_eq!(report.inconclusive_count(), 2);
    assert_eq!(report.get("email").unwrap().message, None);
}
