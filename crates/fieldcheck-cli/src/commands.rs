use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info_span, trace};

use fieldcheck_model::{FieldChange, Locale, Record, StrictnessPolicy};
use fieldcheck_normalize::{NormalizeOptions, Normalizer};
use fieldcheck_service::{HttpVerificationService, ServiceConfig, config};
use fieldcheck_validate::{RecordValidator, ValidationOptions, ValidationReport};

use crate::cli::{NormalizeArgs, ValidateArgs};
use crate::logging::redact_value;

/// Load configuration from `path` (if any) plus environment and install it.
pub fn load_config(path: Option<&Path>) -> Result<&'static ServiceConfig> {
    let base = match path {
        Some(path) => ServiceConfig::from_json_file(path)?,
        None => ServiceConfig::default(),
    };
    config::init(base.with_env()).context("initialize service configuration")
}

pub fn normalize_options(config: &ServiceConfig, locale: Option<&str>) -> Result<NormalizeOptions> {
    let tag = locale.unwrap_or(&config.locale);
    let locale = Locale::parse(tag).with_context(|| format!("parse locale {tag:?}"))?;
    Ok(NormalizeOptions::default()
        .with_locale(locale)
        .with_process_default_country(config.default_country.clone())
        .with_application_tag(config.application_tag.clone()))
}

pub fn validation_options(args: &ValidateArgs) -> ValidationOptions {
    let policy = StrictnessPolicy {
        treat_no_coverage_as_invalid: args.treat_no_coverage_as_invalid,
        treat_unavailable_as_invalid: args.treat_unavailable_as_invalid,
        ..StrictnessPolicy::default()
    };
    let options = ValidationOptions::default().with_policy(policy);
    match &args.message_template {
        Some(template) => options.with_message_template(template.clone()),
        None => options,
    }
}

fn load_record(path: &Path) -> Result<Record> {
    Record::from_json_file(path).with_context(|| format!("read record {}", path.display()))
}

pub fn run_normalize(args: &NormalizeArgs, config: &ServiceConfig) -> Result<Vec<FieldChange>> {
    let span = info_span!("normalize_command", record = %args.record.display());
    let _guard = span.enter();

    let mut record = load_record(&args.record)?;
    let service = HttpVerificationService::new(config)?;
    let normalizer = Normalizer::new(&service, normalize_options(config, args.locale.as_deref())?);

    let changes = if args.write {
        let changes = normalizer.normalize_in_place(&mut record);
        if !changes.is_empty() {
            fs::write(&args.record, record.to_json_pretty()?)
                .with_context(|| format!("write record {}", args.record.display()))?;
        }
        changes
    } else {
        normalizer.normalize(&record)
    };

    for change in &changes {
        trace!(
            field = %change.field,
            old = redact_value(&change.old_value),
            new = redact_value(&change.new_value),
            "field changed"
        );
    }
    Ok(changes)
}

pub fn run_validate(args: &ValidateArgs, config: &ServiceConfig) -> Result<ValidationReport> {
    let span = info_span!("validate_command", record = %args.record.display());
    let _guard = span.enter();

    let record = load_record(&args.record)?;
    let service = HttpVerificationService::new(config)?;
    let validator = RecordValidator::new(&service, validation_options(args))
        .with_process_default_country(config.default_country.clone());
    Ok(validator.validate(&record))
}
