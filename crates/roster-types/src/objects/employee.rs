use facet::Facet;

/// A person working at a company.
///
/// `company_id` is not checked against the loaded companies: an employee may
/// point at a company that does not exist.
#[derive(Facet, Debug, Clone, PartialEq)]
pub struct Employee {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    #[facet(skip_unless_truthy)]
    pub email: Option<String>,
    pub role: String,
    pub company_id: u64,
}

impl Employee {
    /// `"first last"`, used for full-name matching.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
