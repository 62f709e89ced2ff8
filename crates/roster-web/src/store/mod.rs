//! The in-memory dataset.
//!
//! A [`Snapshot`] is built once from the source directories and never changes
//! afterwards. Malformed files are logged and skipped; malformed records are
//! dropped without a log line.

use std::collections::HashMap;
use std::path::Path;

use roster_types::{Company, Employee};
use tracing::info;

mod normalize;
mod source;

pub use normalize::{coerce_bool, coerce_id, coerce_number, normalize_company, normalize_employee};
pub use source::{RawRecord, extract_records, read_source_dir};

pub const COMPANIES_SUBDIR: &str = "companies";
pub const EMPLOYEES_SUBDIR: &str = "employees";

#[derive(Debug, Default)]
pub struct Snapshot {
    companies: Vec<Company>,
    employees: Vec<Employee>,
    companies_by_id: HashMap<u64, Company>,
    employees_by_company: HashMap<u64, Vec<Employee>>,
}

impl Snapshot {
    /// Builds both indexes. A later company wins over an earlier one with the
    /// same id; employees are grouped per company in the order given.
    pub fn from_records(companies: Vec<Company>, employees: Vec<Employee>) -> Self {
        let mut companies_by_id = HashMap::with_capacity(companies.len());
        for company in &companies {
            companies_by_id.insert(company.id, company.clone());
        }

        let mut employees_by_company: HashMap<u64, Vec<Employee>> = HashMap::new();
        for employee in &employees {
            employees_by_company
                .entry(employee.company_id)
                .or_default()
                .push(employee.clone());
        }

        Self {
            companies,
            employees,
            companies_by_id,
            employees_by_company,
        }
    }

    /// Companies in load order, duplicates included.
    pub fn companies(&self) -> &[Company] {
        &self.companies
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn company(&self, id: u64) -> Option<&Company> {
        self.companies_by_id.get(&id)
    }

    /// Employees whose `company_id` is `company_id`, in load order. Also answers
    /// for ids with no loaded company.
    pub fn employees_of(&self, company_id: u64) -> &[Employee] {
        self.employees_by_company
            .get(&company_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// Loads `companies_dir` and `employees_dir` into a snapshot. Never fails: an
/// unusable directory contributes nothing.
pub fn load_snapshot(companies_dir: &Path, employees_dir: &Path) -> Snapshot {
    let companies: Vec<Company> = read_source_dir(companies_dir)
        .iter()
        .filter_map(normalize_company)
        .collect();
    let employees: Vec<Employee> = read_source_dir(employees_dir)
        .iter()
        .filter_map(normalize_employee)
        .collect();

    info!(
        companies = companies.len(),
        employees = employees.len(),
        companies_dir = %companies_dir.display(),
        employees_dir = %employees_dir.display(),
        "dataset loaded"
    );
    Snapshot::from_records(companies, employees)
}

/// Loads `<data_dir>/companies` and `<data_dir>/employees`.
pub fn load_data_dir(data_dir: &Path) -> Snapshot {
    load_snapshot(
        &data_dir.join(COMPANIES_SUBDIR),
        &data_dir.join(EMPLOYEES_SUBDIR),
    )
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn employee(id: u64, company_id: u64, first: &str, last: &str) -> Employee {
        Employee {
            id,
            first_name: first.to_string(),
            last_name: last.to_string(),
            email: None,
            role: "Eng".to_string(),
            company_id,
        }
    }

    fn write_fixture(root: &Path) {
        let companies = root.join(COMPANIES_SUBDIR);
        let employees = root.join(EMPLOYEES_SUBDIR);
        fs::create_dir_all(&companies).expect("companies dir");
        fs::create_dir_all(&employees).expect("employees dir");

        fs::write(
            companies.join("01.json"),
            r#"{"company":{"id":1,"name":"Acme","active":true}}"#,
        )
        .expect("write 01");
        fs::write(
            companies.join("02.json"),
            r#"[{"id":2,"name":"Beta","active":"false"},{"id":3,"industry":"no name"}]"#,
        )
        .expect("write 02");
        fs::write(companies.join("03.json"), "[1, 2,").expect("write 03");
        fs::write(
            employees.join("all.json"),
            r#"[
                {"id":10,"company_id":1,"first_name":"Jane","last_name":"Doe","role":"Eng"},
                {"id":11,"company_id":"1","first_name":"John","last_name":"Roe","role":"Ops"},
                {"id":12,"company_id":404,"first_name":"Orphan","last_name":"Annie","role":"Eng"},
                {"id":13,"company_id":2,"first_name":"","last_name":"Nobody","role":"Eng"}
            ]"#,
        )
        .expect("write employees");
    }

    #[test]
    fn primary_index_resolves_each_company() {
        let snapshot = Snapshot::from_records(
            vec![Company::new(1, "Acme"), Company::new(2, "Beta")],
            Vec::new(),
        );
        assert_eq!(snapshot.company(1).map(|c| c.name.as_str()), Some("Acme"));
        assert_eq!(snapshot.company(2).map(|c| c.name.as_str()), Some("Beta"));
        assert!(snapshot.company(3).is_none());
    }

    #[test]
    fn later_duplicate_company_wins_in_index_only() {
        let snapshot = Snapshot::from_records(
            vec![Company::new(1, "Old"), Company::new(1, "New")],
            Vec::new(),
        );
        assert_eq!(snapshot.company(1).map(|c| c.name.as_str()), Some("New"));
        assert_eq!(snapshot.companies().len(), 2);
    }

    #[test]
    fn employees_are_grouped_in_encounter_order() {
        let snapshot = Snapshot::from_records(
            vec![Company::new(1, "Acme")],
            vec![
                employee(11, 1, "John", "Roe"),
                employee(20, 2, "Other", "Person"),
                employee(10, 1, "Jane", "Doe"),
            ],
        );
        let ids: Vec<u64> = snapshot.employees_of(1).iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![11, 10]);
        assert!(snapshot.employees_of(99).is_empty());
    }

    #[test]
    fn load_drops_bad_records_and_files() {
        let dir = tempfile::tempdir().expect("tempdir");
        write_fixture(dir.path());

        let snapshot = load_data_dir(dir.path());
        let names: Vec<&str> = snapshot.companies().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Acme", "Beta"]);
        assert_eq!(snapshot.company(2).and_then(|c| c.active), Some(false));
        assert!(snapshot.company(3).is_none());

        let employee_ids: Vec<u64> = snapshot.employees().iter().map(|e| e.id).collect();
        assert_eq!(employee_ids, vec![10, 11, 12]);
        assert_eq!(snapshot.employees_of(1).len(), 2);
    }

    #[test]
    fn orphaned_employees_stay_in_foreign_key_index() {
        let dir = tempfile::tempdir().expect("tempdir");
        write_fixture(dir.path());

        let snapshot = load_data_dir(dir.path());
        assert!(snapshot.company(404).is_none());
        let orphans: Vec<u64> = snapshot.employees_of(404).iter().map(|e| e.id).collect();
        assert_eq!(orphans, vec![12]);
    }

    #[test]
    fn loading_twice_is_identical() {
        let dir = tempfile::tempdir().expect("tempdir");
        write_fixture(dir.path());

        let first = load_data_dir(dir.path());
        let second = load_data_dir(dir.path());
        assert_eq!(first.companies(), second.companies());
        assert_eq!(first.employees(), second.employees());
    }

    #[test]
    fn overflowing_id_drops_only_that_record() {
        let dir = tempfile::tempdir().expect("tempdir");
        let companies = dir.path().join(COMPANIES_SUBDIR);
        fs::create_dir_all(&companies).expect("companies dir");
        fs::write(
            companies.join("mixed.json"),
            r#"[{"id":1,"name":"A"},{"id":1e400,"name":"B"}]"#,
        )
        .expect("write mixed");

        let snapshot = load_data_dir(dir.path());
        let names: Vec<&str> = snapshot.companies().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["A"]);
    }

    #[test]
    fn missing_data_dir_gives_empty_snapshot() {
        let dir = tempfile::tempdir().expect("tempdir");
        let snapshot = load_data_dir(&dir.path().join("nowhere"));
        assert!(snapshot.companies().is_empty());
        assert!(snapshot.employees().is_empty());
    }
}
