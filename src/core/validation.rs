use std::collections::HashMap;
use chrono::NaiveDate;
use serde_json::Value;
use crate::core::library::{LibraryError, LibraryResult};
use crate::utils::date::{parse_date, today};

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum FieldValue {
    Text(String),
    Integer(i64),
    Date(NaiveDate),
}

pub(crate) type FieldParser = fn(&Value) -> Result<FieldValue, String>;
pub(crate) type FieldCheck = fn(&FieldValue) -> bool;

// FieldRule describes one required request attribute: where to find it,
// how to convert it and what the converted value must satisfy.
pub(crate) struct FieldRule {
    pub name: &'static str,
    pub parse: FieldParser,
    pub check: FieldCheck,
}

const fn rule(name: &'static str, parse: FieldParser, check: FieldCheck) -> FieldRule {
    FieldRule { name, parse, check }
}

pub(crate) const BOOK_FIELDS: &[FieldRule] = &[
    rule("title", text, non_empty),
    rule("author", text, non_empty),
    rule("isbn", text, non_empty),
    rule("copies", integer, non_negative),
];

pub(crate) const CUSTOMER_FIELDS: &[FieldRule] = &[
    rule("name", text, non_empty),
    rule("email", text, non_empty),
    rule("customer_id", text, non_empty),
];

pub(crate) const CHECKOUT_FIELDS: &[FieldRule] = &[
    rule("isbn", text, non_empty),
    rule("customer_id", text, non_empty),
    rule("due_date", date, not_before_today),
];

pub(crate) const RETURN_FIELDS: &[FieldRule] = &[
    rule("isbn", text, non_empty),
    rule("customer_id", text, non_empty),
];

fn text(value: &Value) -> Result<FieldValue, String> {
    match value {
        Value::String(s) => Ok(FieldValue::Text(s.to_string())),
        other => Err(format!("expected a string but got {}", other)),
    }
}

fn integer(value: &Value) -> Result<FieldValue, String> {
    match value {
        Value::Number(n) => n.as_i64().map(FieldValue::Integer)
            .ok_or_else(|| format!("expected an integer but got {}", n)),
        Value::String(s) => s.trim().parse::<i64>().map(FieldValue::Integer)
            .map_err(|err| format!("{} is not an integer: {}", s, err)),
        other => Err(format!("expected an integer but got {}", other)),
    }
}

fn date(value: &Value) -> Result<FieldValue, String> {
    match value {
        Value::String(s) => parse_date(s).map(FieldValue::Date)
            .map_err(|err| format!("{} is not a YYYY-MM-DD date: {}", s, err)),
        other => Err(format!("expected a date string but got {}", other)),
    }
}

fn non_empty(value: &FieldValue) -> bool {
    matches!(value, FieldValue::Text(s) if !s.trim().is_empty())
}

fn non_negative(value: &FieldValue) -> bool {
    matches!(value, FieldValue::Integer(n) if *n >= 0)
}

fn not_before_today(value: &FieldValue) -> bool {
    matches!(value, FieldValue::Date(d) if *d >= today())
}

// ValidatedFields holds converted attributes keyed by rule name.
#[derive(Debug, Default)]
pub(crate) struct ValidatedFields {
    values: HashMap<&'static str, FieldValue>,
}

impl ValidatedFields {
    pub fn text(&self, name: &str) -> LibraryResult<String> {
        match self.values.get(name) {
            Some(FieldValue::Text(s)) => Ok(s.to_string()),
            _ => Err(Self::missing(name, "text")),
        }
    }

    pub fn integer(&self, name: &str) -> LibraryResult<i64> {
        match self.values.get(name) {
            Some(FieldValue::Integer(n)) => Ok(*n),
            _ => Err(Self::missing(name, "integer")),
        }
    }

    pub fn date(&self, name: &str) -> LibraryResult<NaiveDate> {
        match self.values.get(name) {
            Some(FieldValue::Date(d)) => Ok(*d),
            _ => Err(Self::missing(name, "date")),
        }
    }

    fn missing(name: &str, kind: &str) -> LibraryError {
        LibraryError::runtime(format!("no validated {} attribute {}", kind, name).as_str(), None)
    }
}

/// Runs `rules` in order against a JSON object body and stops at the first
/// attribute that is missing, cannot be converted or fails its check.
pub(crate) fn validate(body: &Value, rules: &[FieldRule]) -> LibraryResult<ValidatedFields> {
    let object = body.as_object().ok_or_else(|| LibraryError::validation(
        format!("request body must be a JSON object but got {}", body).as_str(), Some("400".to_string())))?;
    let mut fields = ValidatedFields::default();
    for rule in rules {
        let raw = object.get(rule.name).ok_or_else(|| LibraryError::validation(
            format!("Attribute retrieval failed! {} not in request body", rule.name).as_str(), Some("400".to_string())))?;
        let value = (rule.parse)(raw).map_err(|err| LibraryError::validation(
            format!("Attribute transform failed! {}: {}", rule.name, err).as_str(), Some("400".to_string())))?;
        if !(rule.check)(&value) {
            return Err(LibraryError::validation(
                format!("Attribute validation failed! {} = {} failed check", rule.name, raw).as_str(), Some("400".to_string())));
        }
        fields.values.insert(rule.name, value);
    }
    Ok(fields)
}
