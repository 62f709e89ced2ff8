//! Listing and lookup over a loaded [`Snapshot`].

use roster_types::{Company, CompanyPage, CompanyView, Employee, PageMetadata};

use crate::store::Snapshot;

pub const DEFAULT_LIMIT: usize = 20;
pub const MIN_LIMIT: usize = 1;
pub const MAX_LIMIT: usize = 100;

/// Listing filters. Unset filters impose no constraint.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompanyFilters {
    /// Clamped to `MIN_LIMIT..=MAX_LIMIT`; missing or non-finite means `DEFAULT_LIMIT`.
    pub limit: Option<f64>,
    /// Clamped to `>= 0`; missing or non-finite means `0`.
    pub offset: Option<f64>,
    pub company_name: Option<String>,
    pub employee_name: Option<String>,
    pub active: Option<bool>,
}

impl CompanyFilters {
    pub fn effective_limit(&self) -> usize {
        match self.limit.filter(|limit| limit.is_finite()) {
            Some(limit) => limit.clamp(MIN_LIMIT as f64, MAX_LIMIT as f64) as usize,
            None => DEFAULT_LIMIT,
        }
    }

    pub fn effective_offset(&self) -> usize {
        match self.offset.filter(|offset| offset.is_finite()) {
            Some(offset) => offset.max(0.0) as usize,
            None => 0,
        }
    }
}

/// Lowercased query, or `None` when the filter is unset or empty.
fn needle(query: Option<&str>) -> Option<String> {
    query
        .filter(|query| !query.is_empty())
        .map(str::to_lowercase)
}

fn employee_matches(employee: &Employee, needle: &str) -> bool {
    employee.first_name.to_lowercase().contains(needle)
        || employee.last_name.to_lowercase().contains(needle)
        || employee.full_name().to_lowercase().contains(needle)
}

/// Read-only queries against a borrowed snapshot.
#[derive(Debug, Clone, Copy)]
pub struct QueryEngine<'a> {
    snapshot: &'a Snapshot,
}

impl<'a> QueryEngine<'a> {
    pub fn new(snapshot: &'a Snapshot) -> Self {
        Self { snapshot }
    }

    /// Filters companies in load order, then pages the result.
    ///
    /// `metadata.total` counts every match regardless of the page window.
    pub fn list_companies(&self, filters: &CompanyFilters) -> CompanyPage {
        let limit = filters.effective_limit();
        let offset = filters.effective_offset();
        let company_needle = needle(filters.company_name.as_deref());
        let employee_needle = needle(filters.employee_name.as_deref());

        let matching: Vec<&Company> = self
            .snapshot
            .companies()
            .iter()
            .filter(|company| {
                filters
                    .active
                    .is_none_or(|active| company.active == Some(active))
            })
            .filter(|company| {
                company_needle
                    .as_deref()
                    .is_none_or(|needle| company.name.to_lowercase().contains(needle))
            })
            .filter(|company| {
                employee_needle.as_deref().is_none_or(|needle| {
                    self.snapshot
                        .employees_of(company.id)
                        .iter()
                        .any(|employee| employee_matches(employee, needle))
                })
            })
            .collect();

        let total = matching.len();
        let data: Vec<CompanyView> = matching
            .into_iter()
            .skip(offset)
            .take(limit)
            .map(|company| self.view(company))
            .collect();

        CompanyPage {
            metadata: PageMetadata {
                limit,
                offset,
                count: data.len(),
                total,
            },
            data,
        }
    }

    /// One slot per requested id, in request order; unknown ids give `None`.
    pub fn get_by_ids(&self, ids: &[u64]) -> Vec<Option<CompanyView>> {
        ids.iter()
            .map(|id| self.snapshot.company(*id).map(|company| self.view(company)))
            .collect()
    }

    fn view(&self, company: &Company) -> CompanyView {
        CompanyView::new(company, self.snapshot.employees_of(company.id))
    }
}
