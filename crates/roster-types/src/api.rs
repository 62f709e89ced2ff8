use facet::Facet;

use crate::CompanyView;

pub mod error_code {
    pub const BAD_REQUEST: &str = "BAD_REQUEST";
    pub const NOT_FOUND: &str = "NOT_FOUND";
}

/// Error body: `{ "error": { "code": ..., "message": ... } }`.
#[derive(Facet, Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub error: ApiErrorDetail,
}

#[derive(Facet, Debug, Clone, PartialEq, Eq)]
pub struct ApiErrorDetail {
    pub code: String,
    pub message: String,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: ApiErrorDetail {
                code: code.into(),
                message: message.into(),
            },
        }
    }
}

/// Single-company lookup response.
#[derive(Facet, Debug, Clone, PartialEq)]
pub struct CompanyEnvelope {
    pub data: CompanyView,
}

#[derive(Facet, Debug, Clone, Copy, PartialEq, Eq)]
pub struct HealthResponse {
    pub ok: bool,
}
