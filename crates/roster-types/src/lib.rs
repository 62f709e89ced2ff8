//! Types shared between the roster loader, query engine, and HTTP API.
//!
//! Everything here derives [`Facet`](facet::Facet) so it can be encoded with
//! `facet-json` at the HTTP boundary.

mod api;
mod objects;

pub use api::{ApiError, ApiErrorDetail, CompanyEnvelope, HealthResponse, error_code};
pub use objects::company::{Company, CompanyView};
pub use objects::employee::Employee;
pub use objects::page::{CompanyPage, PageMetadata};
