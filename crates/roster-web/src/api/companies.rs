use std::fmt;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Response;
use roster_types::{CompanyEnvelope, error_code};

use crate::app::AppState;
use crate::query::{CompanyFilters, QueryEngine};
use crate::util::http::{json_error, json_ok};
use crate::util::number::{parse_js_number, whole_number};

/// Sent to the engine when the request has no `limit`; clamps to the maximum.
const LIMIT_WHEN_ABSENT: &str = "200";
const OFFSET_WHEN_ABSENT: &str = "0";
pub const MAX_IDS_PER_REQUEST: usize = 50;

/// Raw `GET /companies` query string. Every occurrence of a key is kept, so a
/// repeated key never rejects the request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListCompaniesQuery {
    pub limit: Vec<String>,
    pub offset: Vec<String>,
    pub company_name: Vec<String>,
    pub employee_name: Vec<String>,
    pub active: Vec<String>,
}

impl ListCompaniesQuery {
    /// Groups decoded `key=value` pairs by key. Unknown keys are ignored.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "limit" => &mut query.limit,
                "offset" => &mut query.offset,
                "companyName" => &mut query.company_name,
                "employeeName" => &mut query.employee_name,
                "active" => &mut query.active,
                _ => continue,
            };
            slot.push(value);
        }
        query
    }

    /// A repeated numeric key is not a number, a repeated `active` is never
    /// exactly `"true"`, and repeated text filters are comma-joined.
    pub fn into_filters(self) -> CompanyFilters {
        CompanyFilters {
            limit: Some(numeric_param(&self.limit, LIMIT_WHEN_ABSENT)),
            offset: Some(numeric_param(&self.offset, OFFSET_WHEN_ABSENT)),
            company_name: text_param(self.company_name),
            employee_name: text_param(self.employee_name),
            active: match self.active.as_slice() {
                [] => None,
                [only] => Some(only == "true"),
                _ => Some(false),
            },
        }
    }
}

fn numeric_param(values: &[String], when_absent: &str) -> f64 {
    match values {
        [] => parse_js_number(when_absent),
        [only] => parse_js_number(only),
        _ => f64::NAN,
    }
}

fn text_param(values: Vec<String>) -> Option<String> {
    (!values.is_empty()).then(|| values.join(","))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdListError {
    Invalid,
    TooMany { max: usize },
}

impl fmt::Display for IdListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Invalid => write!(f, "Invalid company id(s)."),
            Self::TooMany { max } => write!(f, "Too many ids (max {max})."),
        }
    }
}

impl std::error::Error for IdListError {}

/// Parses `"1, 2,3"` into ids. Blank entries are ignored; every other entry
/// must be a non-negative integer, and there must be 1 to 50 of them.
pub fn parse_id_list(raw: &str) -> Result<Vec<u64>, IdListError> {
    let ids = raw
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| whole_number(parse_js_number(token)).ok_or(IdListError::Invalid))
        .collect::<Result<Vec<u64>, _>>()?;

    if ids.is_empty() {
        return Err(IdListError::Invalid);
    }
    if ids.len() > MAX_IDS_PER_REQUEST {
        return Err(IdListError::TooMany {
            max: MAX_IDS_PER_REQUEST,
        });
    }
    Ok(ids)
}

pub async fn api_list_companies(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Response {
    let filters = ListCompaniesQuery::from_pairs(pairs).into_filters();
    let page = QueryEngine::new(&state.snapshot).list_companies(&filters);
    json_ok(&page)
}

pub async fn api_companies_by_ids(
    State(state): State<AppState>,
    Path(raw_ids): Path<String>,
) -> Response {
    let ids = match parse_id_list(&raw_ids) {
        Ok(ids) => ids,
        Err(error) => {
            tracing::debug!(%raw_ids, %error, "rejected company id list");
            return json_error(StatusCode::BAD_REQUEST, error_code::BAD_REQUEST, error.to_string());
        }
    };

    let mut views = QueryEngine::new(&state.snapshot).get_by_ids(&ids);
    if ids.len() == 1 {
        return match views.pop().flatten() {
            Some(view) => json_ok(&CompanyEnvelope { data: view }),
            None => json_error(
                StatusCode::NOT_FOUND,
                error_code::NOT_FOUND,
                "Company not found.",
            ),
        };
    }
    json_ok(&views)
}
