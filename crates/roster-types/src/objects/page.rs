use facet::Facet;

use crate::CompanyView;

/// One page of the company listing.
#[derive(Facet, Debug, Clone, PartialEq)]
pub struct CompanyPage {
    pub data: Vec<CompanyView>,
    pub metadata: PageMetadata,
}

#[derive(Facet, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageMetadata {
    /// Effective page size after clamping.
    pub limit: usize,
    /// Effective offset after clamping.
    pub offset: usize,
    /// Number of items in `data`.
    pub count: usize,
    /// Number of companies that matched the filters, ignoring pagination.
    pub total: usize,
}
