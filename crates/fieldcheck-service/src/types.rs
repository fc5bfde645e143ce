//! Wire types for the verification service's JSON API.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use fieldcheck_model::{ResultCode, ServiceStatus};

#[derive(Debug, Clone, Serialize)]
pub struct FormatPhoneBody<'a> {
    pub username: String,
    pub password: &'a str,
    #[serde(rename = "telephoneNumber")]
    pub telephone_number: &'a str,
    #[serde(rename = "defaultCountry")]
    pub default_country: &'a str,
    pub options: FormatPhoneOptions<'a>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct FormatPhoneOptions<'a> {
    pub application_name: &'a str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ValidateBody<'a> {
    pub username: String,
    pub password: &'a str,
    #[serde(rename = "telephoneNumber", skip_serializing_if = "Option::is_none")]
    pub telephone_number: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<&'a str>,
    #[serde(rename = "defaultCountry", skip_serializing_if = "Option::is_none")]
    pub default_country: Option<&'a str>,
    pub options: &'a BTreeMap<String, bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StatusDto {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub credits_remaining: Option<i64>,
}

impl From<StatusDto> for ServiceStatus {
    fn from(dto: StatusDto) -> Self {
        Self {
            success: dto.success,
            error_message: dto.error_message,
            credits_remaining: dto.credits_remaining,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FormatPhoneResponseDto {
    #[serde(default)]
    pub status: StatusDto,
    #[serde(default)]
    pub result: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ValidateResponseDto {
    #[serde(default)]
    pub status: StatusDto,
    #[serde(default)]
    pub result: Option<ResultCode>,
}
