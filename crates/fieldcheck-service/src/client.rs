//! Blocking HTTP client for the verification service.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT};
use serde::Serialize;
use serde::de::DeserializeOwned;

use fieldcheck_model::{
    PhoneFormatRequest, PhoneFormatResponse, PhoneFormatter, ResultCode, ServiceCredentials,
    ServiceError, ServiceResult, ServiceStatus, ValidationKind, VerificationOutcome,
    VerificationRequest, Verifier,
};

use crate::config::ServiceConfig;
use crate::types::{
    FormatPhoneBody, FormatPhoneOptions, FormatPhoneResponseDto, ValidateBody,
    ValidateResponseDto,
};

const FORMAT_PHONE_PATH: &str = "PhoneValidation/FormatPhoneNumber";
const VALIDATE_PHONE_PATH: &str = "PhoneValidation/IsValid";
const VALIDATE_EMAIL_PATH: &str = "EmailValidation/IsValid";

const USER_AGENT_VALUE: &str = concat!("fieldcheck/", env!("CARGO_PKG_VERSION"));

/// [`PhoneFormatter`] and [`Verifier`] backed by the service's JSON API.
#[derive(Debug, Clone)]
pub struct HttpVerificationService {
    client: Client,
    endpoint: String,
    credentials: ServiceCredentials,
}

impl HttpVerificationService {
    /// Build a client from the process configuration.
    pub fn new(config: &ServiceConfig) -> ServiceResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));

        let client = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ServiceError::Config(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            credentials: config.credentials.clone(),
        })
    }

    fn post<B: Serialize, R: DeserializeOwned>(&self, path: &str, body: &B) -> ServiceResult<R> {
        let url = format!("{}/{}", self.endpoint, path);
        tracing::debug!("Calling verification service at {}", url);

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .map_err(|e| ServiceError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ServiceError::Http {
                status: status.as_u16(),
            });
        }

        response
            .json::<R>()
            .map_err(|e| ServiceError::Decode(e.to_string()))
    }
}

impl PhoneFormatter for HttpVerificationService {
    fn format_phone_number(
        &self,
        request: &PhoneFormatRequest,
    ) -> ServiceResult<PhoneFormatResponse> {
        let body = FormatPhoneBody {
            username: self.credentials.username(),
            password: self.credentials.password(),
            telephone_number: &request.number,
            default_country: &request.default_country,
            options: FormatPhoneOptions {
                application_name: &request.application,
            },
        };
        let dto: FormatPhoneResponseDto = self.post(FORMAT_PHONE_PATH, &body)?;
        let status = ServiceStatus::from(dto.status);
        if let Some(credits) = status.credits_remaining {
            tracing::trace!(credits, "credits remaining after format");
        }

        Ok(PhoneFormatResponse {
            formatted_number: dto.result.unwrap_or_default(),
            status,
        })
    }
}

impl Verifier for HttpVerificationService {
    fn verify(&self, request: &VerificationRequest) -> ServiceResult<VerificationOutcome> {
        let (path, telephone_number, email) = match request.kind {
            ValidationKind::Phone => (VALIDATE_PHONE_PATH, Some(request.subject.as_str()), None),
            ValidationKind::Email => (VALIDATE_EMAIL_PATH, None, Some(request.subject.as_str())),
        };
        let body = ValidateBody {
            username: self.credentials.username(),
            password: self.credentials.password(),
            telephone_number,
            email,
            default_country: request.country.as_deref(),
            options: &request.flags,
        };
        let dto: ValidateResponseDto = self.post(path, &body)?;

        Ok(VerificationOutcome::from_status(
            dto.status.into(),
            dto.result.unwrap_or(ResultCode::Unknown),
        ))
    }
}
