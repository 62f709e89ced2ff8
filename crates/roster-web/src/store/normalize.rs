use roster_types::{Company, Employee};
use serde_json::Value;

use crate::store::source::RawRecord;
use crate::util::number::{parse_js_number, positive_id};

/// A JSON number, or a string holding one. Non-finite results are rejected.
pub fn coerce_number(value: Option<&Value>) -> Option<f64> {
    let number = match value? {
        Value::Number(number) => number.as_f64()?,
        Value::String(text) => parse_js_number(text),
        _ => return None,
    };
    number.is_finite().then_some(number)
}

pub fn coerce_id(value: Option<&Value>) -> Option<u64> {
    coerce_number(value).and_then(positive_id)
}

/// `true`/`false`, their case-insensitive string forms, or `1`/`0`.
/// Everything else is unknown.
pub fn coerce_bool(value: Option<&Value>) -> Option<bool> {
    match value? {
        Value::Bool(flag) => Some(*flag),
        Value::String(text) if text.eq_ignore_ascii_case("true") => Some(true),
        Value::String(text) if text.eq_ignore_ascii_case("false") => Some(false),
        Value::Number(number) => {
            let number = number.as_f64()?;
            if number == 1.0 {
                Some(true)
            } else if number == 0.0 {
                Some(false)
            } else {
                None
            }
        }
        _ => None,
    }
}

fn text(value: Option<&Value>) -> Option<String> {
    value?.as_str().map(str::to_owned)
}

fn required_text(value: Option<&Value>) -> Option<String> {
    text(value).filter(|text| !text.is_empty())
}

pub fn normalize_company(record: &RawRecord) -> Option<Company> {
    let id = coerce_id(record.field("id"))?;
    let name = required_text(record.field("name"))?;

    Some(Company {
        id,
        name,
        industry: text(record.field("industry")),
        active: coerce_bool(record.field("active")),
        website: text(record.field("website")),
        telephone: text(record.field("telephone")),
        slogan: text(record.field("slogan")),
        address: text(record.field("address")),
        city: text(record.field("city")),
        country: text(record.field("country")),
    })
}

pub fn normalize_employee(record: &RawRecord) -> Option<Employee> {
    Some(Employee {
        id: coerce_id(record.field("id"))?,
        company_id: coerce_id(record.field("company_id"))?,
        first_name: required_text(record.field("first_name"))?,
        last_name: required_text(record.field("last_name"))?,
        role: required_text(record.field("role"))?,
        email: text(record.field("email")),
    })
}
