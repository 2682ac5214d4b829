//! Declarative payload schemas
//!
//! A [`Schema`] is plain data: a list of [`FieldSpec`]s naming each accepted
//! field, its kind, whether it is required, and its bounds. One routine,
//! [`Schema::validate`], checks any JSON payload against it.

use serde_json::{Map, Value};

use crate::shared::types::{DomainError, DomainResult};

/// Type and bounds of a single field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    /// Non-empty string, optionally capped at `max_len` characters.
    Text { max_len: Option<usize> },
    /// Whole number with inclusive bounds.
    Integer { min: Option<i64>, max: Option<i64> },
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldSpec {
    pub fn required(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: true,
        }
    }

    pub fn optional(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: false,
        }
    }

    fn check(&self, value: &Value) -> DomainResult<()> {
        match &self.kind {
            FieldKind::Text { max_len } => {
                let Some(text) = value.as_str() else {
                    return Err(invalid(format!("\"{}\" must be a string", self.name)));
                };
                if text.is_empty() {
                    return Err(invalid(format!(
                        "\"{}\" is not allowed to be empty",
                        self.name
                    )));
                }
                if let Some(max) = max_len {
                    if text.chars().count() > *max {
                        return Err(invalid(format!(
                            "\"{}\" length must be less than or equal to {} characters long",
                            self.name, max
                        )));
                    }
                }
            }
            FieldKind::Integer { min, max } => {
                let Some(number) = whole_number(value) else {
                    return Err(invalid(format!("\"{}\" must be an integer", self.name)));
                };
                if let Some(min) = min {
                    if number < *min {
                        return Err(invalid(format!(
                            "\"{}\" must be greater than or equal to {}",
                            self.name, min
                        )));
                    }
                }
                if let Some(max) = max {
                    if number > *max {
                        return Err(invalid(format!(
                            "\"{}\" must be less than or equal to {}",
                            self.name, max
                        )));
                    }
                }
            }
        }
        Ok(())
    }
}

/// Ordered set of field specs for one payload kind.
#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    pub entity: &'static str,
    pub fields: Vec<FieldSpec>,
}

impl Schema {
    pub fn new(entity: &'static str, fields: Vec<FieldSpec>) -> Self {
        Self { entity, fields }
    }

    /// Check `payload` against every field, in declaration order, then
    /// reject keys the schema does not know. The first violation wins.
    ///
    /// `null` on an optional field is treated as absent.
    pub fn validate(&self, payload: &Value) -> DomainResult<()> {
        let Some(object) = payload.as_object() else {
            return Err(invalid(format!(
                "{} payload must be a JSON object",
                self.entity
            )));
        };

        for field in &self.fields {
            match object.get(field.name) {
                None | Some(Value::Null) if field.required => {
                    return Err(invalid(format!("\"{}\" is required", field.name)));
                }
                None | Some(Value::Null) => {}
                Some(value) => field.check(value)?,
            }
        }

        self.reject_unknown(object)
    }

    fn reject_unknown(&self, object: &Map<String, Value>) -> DomainResult<()> {
        match object
            .keys()
            .find(|key| !self.fields.iter().any(|f| f.name == key.as_str()))
        {
            Some(key) => Err(invalid(format!("\"{}\" is not allowed", key))),
            None => Ok(()),
        }
    }
}

fn invalid(message: String) -> DomainError {
    DomainError::Validation(message)
}

/// JSON has one number type: `1969.0` is the integer 1969, `1969.5` is not.
fn whole_number(value: &Value) -> Option<i64> {
    if let Some(n) = value.as_i64() {
        return Some(n);
    }
    let f = value.as_f64()?;
    let in_range = f >= i64::MIN as f64 && f < i64::MAX as f64;
    (f.fract() == 0.0 && in_range).then_some(f as i64)
}

/// Rewrite every whole-valued float in `value` as an integer, so that a
/// document that passed [`Schema::validate`] also deserializes into integer
/// fields.
pub fn normalize_whole_numbers(value: &mut Value) {
    if value.is_f64() {
        if let Some(i) = whole_number(value) {
            *value = Value::from(i);
        }
        return;
    }
    match value {
        Value::Array(items) => items.iter_mut().for_each(normalize_whole_numbers),
        Value::Object(map) => map.values_mut().for_each(normalize_whole_numbers),
        _ => {}
    }
}
