use facet::Facet;

use crate::Employee;

#[derive(Facet, Debug, Clone, PartialEq)]
pub struct Company {
    pub id: u64,
    pub name: String,
    #[facet(skip_unless_truthy)]
    pub industry: Option<String>,
    /// Tri-state: `None` means the source did not say.
    ///
    /// Unlike the text optionals this is never omitted from JSON: `false` must
    /// survive encoding, so unknown is written as `null`.
    pub active: Option<bool>,
    #[facet(skip_unless_truthy)]
    pub website: Option<String>,
    #[facet(skip_unless_truthy)]
    pub telephone: Option<String>,
    #[facet(skip_unless_truthy)]
    pub slogan: Option<String>,
    #[facet(skip_unless_truthy)]
    pub address: Option<String>,
    #[facet(skip_unless_truthy)]
    pub city: Option<String>,
    #[facet(skip_unless_truthy)]
    pub country: Option<String>,
}

impl Company {
    /// Company with only the required fields set.
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            industry: None,
            active: None,
            website: None,
            telephone: None,
            slogan: None,
            address: None,
            city: None,
            country: None,
        }
    }
}

/// A company joined with its employees, as returned by the API.
#[derive(Facet, Debug, Clone, PartialEq)]
pub struct CompanyView {
    pub id: u64,
    pub name: String,
    #[facet(skip_unless_truthy)]
    pub industry: Option<String>,
    /// Written as `null` when unknown, never omitted.
    pub active: Option<bool>,
    #[facet(skip_unless_truthy)]
    pub website: Option<String>,
    #[facet(skip_unless_truthy)]
    pub telephone: Option<String>,
    #[facet(skip_unless_truthy)]
    pub slogan: Option<String>,
    #[facet(skip_unless_truthy)]
    pub address: Option<String>,
    #[facet(skip_unless_truthy)]
    pub city: Option<String>,
    #[facet(skip_unless_truthy)]
    pub country: Option<String>,
    /// In load order.
    pub employees: Vec<Employee>,
}

impl CompanyView {
    pub fn new(company: &Company, employees: &[Employee]) -> Self {
        Self {
            id: company.id,
            name: company.name.clone(),
            industry: company.industry.clone(),
            active: company.active,
            website: company.website.clone(),
            telephone: company.telephone.clone(),
            slogan: company.slogan.clone(),
            address: company.address.clone(),
            city: company.city.clone(),
            country: company.country.clone(),
            employees: employees.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_carries_company_fields_and_employees_in_order() {
        let mut company = Company::new(1, "Acme");
        company.active = Some(true);
        company.city = Some("Springfield".to_string());
        let employees = vec![
            Employee {
                id: 10,
                first_name: "Jane".to_string(),
                last_name: "Doe".to_string(),
                email: None,
                role: "Eng".to_string(),
                company_id: 1,
            },
            Employee {
                id: 11,
                first_name: "John".to_string(),
                last_name: "Roe".to_string(),
                email: Some("john@acme.test".to_string()),
                role: "Ops".to_string(),
                company_id: 1,
            },
        ];

        let view = CompanyView::new(&company, &employees);
        assert_eq!(view.id, 1);
        assert_eq!(view.name, "Acme");
        assert_eq!(view.active, Some(true));
        assert_eq!(view.city.as_deref(), Some("Springfield"));
        let ids: Vec<u64> = view.employees.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![10, 11]);
    }

    #[test]
    fn view_encodes_employees_as_json_array() {
        let view = CompanyView::new(&Company::new(7, "Beta"), &[]);
        let json = facet_json::to_string(&view).expect("view must encode");
        assert!(json.contains("\"id\":7"));
        assert!(json.contains("\"name\":\"Beta\""));
        assert!(json.contains("\"employees\":[]"));
    }

    #[test]
    fn inactive_survives_encoding_and_unknown_is_neither_flag() {
        let mut company = Company::new(2, "Beta");
        company.active = Some(false);
        let json = facet_json::to_string(&CompanyView::new(&company, &[]))
            .expect("view must encode");
        assert!(json.contains("\"active\":false"));

        company.active = None;
        let json = facet_json::to_string(&CompanyView::new(&company, &[]))
            .expect("view must encode");
        assert!(!json.contains("\"active\":false"));
        assert!(!json.contains("\"active\":true"));
    }
}
