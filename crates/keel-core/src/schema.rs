//! Declarative request validation.
//!
//! A [`Schema`] describes one slice of a request (path parameters, query
//! parameters, or body) as an ordered list of field constraints. Validation
//! is all-or-nothing: it either produces a new object with coercions applied
//! and undeclared fields stripped, or the ordered list of raw issues.
//!
//! Issue messages may be literal strings or translation keys; resolution
//! happens later in [`crate::i18n`].

use serde_json::{Map, Value};
use uuid::Uuid;

/// Which slice of the request a schema is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestPart {
    Params,
    Query,
    Body,
}

impl RequestPart {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Params => "params",
            Self::Query => "query",
            Self::Body => "body",
        }
    }
}

/// A raw, untranslated validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawIssue {
    /// Path segments into the validated object, empty for object-level
    /// failures.
    pub path: Vec<String>,
    /// Literal message or translation key.
    pub message: String,
}

impl RawIssue {
    fn for_field(name: &str, message: impl Into<String>) -> Self {
        Self {
            path: vec![name.to_string()],
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone)]
enum FieldKind {
    /// UTF-8 string with a minimum character count.
    String { min_len: usize },
    /// String that must parse as a UUID.
    Uuid,
    /// Integer, coerced from a string when necessary.
    Number { min: Option<i64>, max: Option<i64> },
}

/// Constraint for a single named field.
#[derive(Debug, Clone)]
pub struct Field {
    name: &'static str,
    required: bool,
    kind: FieldKind,
    /// Overrides the default message for every failure of this field.
    message: Option<&'static str>,
}

impl Field {
    pub fn string(name: &'static str) -> Self {
        Self {
            name,
            required: true,
            kind: FieldKind::String { min_len: 0 },
            message: None,
        }
    }

    pub fn uuid(name: &'static str) -> Self {
        Self {
            name,
            required: true,
            kind: FieldKind::Uuid,
            message: None,
        }
    }

    pub fn number(name: &'static str) -> Self {
        Self {
            name,
            required: true,
            kind: FieldKind::Number {
                min: None,
                max: None,
            },
            message: None,
        }
    }

    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Require at least one character (string fields).
    pub fn non_empty(mut self) -> Self {
        if let FieldKind::String { min_len } = &mut self.kind {
            *min_len = (*min_len).max(1);
        }
        self
    }

    /// Lower bound (number fields).
    pub fn min(mut self, bound: i64) -> Self {
        if let FieldKind::Number { min, .. } = &mut self.kind {
            *min = Some(bound);
        }
        self
    }

    /// Upper bound (number fields).
    pub fn max(mut self, bound: i64) -> Self {
        if let FieldKind::Number { max, .. } = &mut self.kind {
            *max = Some(bound);
        }
        self
    }

    /// Custom failure message: a literal string or a translation key.
    pub fn message(mut self, message: &'static str) -> Self {
        self.message = Some(message);
        self
    }

    /// Check one present value. Returns the coerced value or the failure
    /// message.
    fn check(&self, value: &Value) -> Result<Value, String> {
        match &self.kind {
            FieldKind::String { min_len } => {
                let s = value
                    .as_str()
                    .ok_or_else(|| self.fail("Expected a string"))?;
                if s.chars().count() < *min_len {
                    return Err(self.fail_fmt(|| {
                        if *min_len == 1 {
                            "Must not be empty".to_string()
                        } else {
                            format!("Must be at least {min_len} characters")
                        }
                    }));
                }
                Ok(Value::String(s.to_string()))
            }
            FieldKind::Uuid => {
                let s = value
                    .as_str()
                    .ok_or_else(|| self.fail("Expected a string"))?;
                Uuid::parse_str(s).map_err(|_| self.fail("Must be a valid UUID"))?;
                Ok(Value::String(s.to_string()))
            }
            FieldKind::Number { min, max } => {
                let n = match value {
                    Value::Number(n) => n.as_i64().ok_or_else(|| self.fail("Expected an integer")),
                    Value::String(s) => s
                        .trim()
                        .parse::<i64>()
                        .map_err(|_| self.fail("Expected a number")),
                    _ => Err(self.fail("Expected a number")),
                }?;
                if let Some(min) = min
                    && n < *min
                {
                    return Err(self.fail_fmt(|| format!("Must be at least {min}")));
                }
                if let Some(max) = max
                    && n > *max
                {
                    return Err(self.fail_fmt(|| format!("Must be at most {max}")));
                }
                Ok(Value::from(n))
            }
        }
    }

    fn fail(&self, default: &str) -> String {
        self.message.unwrap_or(default).to_string()
    }

    fn fail_fmt(&self, default: impl FnOnce() -> String) -> String {
        match self.message {
            Some(message) => message.to_string(),
            None => default(),
        }
    }
}

/// Outcome of validating one request part. No partial success.
pub type ValidationOutcome = Result<Map<String, Value>, Vec<RawIssue>>;

/// An ordered set of field constraints for one request part.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    fields: Vec<Field>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Validate a raw candidate object.
    ///
    /// On success the returned object contains only declared fields, with
    /// coercions applied (e.g. the query string `"10"` becomes the number
    /// `10`). On failure, one issue per offending field, in declaration
    /// order.
    pub fn validate(&self, raw: &Value) -> ValidationOutcome {
        let empty = Map::new();
        let object = match raw {
            Value::Object(map) => map,
            Value::Null => &empty,
            _ => {
                return Err(vec![RawIssue {
                    path: Vec::new(),
                    message: "Expected an object".to_string(),
                }]);
            }
        };

        let mut output = Map::new();
        let mut issues = Vec::new();

        for field in &self.fields {
            match object.get(field.name) {
                None | Some(Value::Null) => {
                    if field.required {
                        issues.push(RawIssue::for_field(field.name, field.fail("Required")));
                    }
                }
                Some(value) => match field.check(value) {
                    Ok(coerced) => {
                        output.insert(field.name.to_string(), coerced);
                    }
                    Err(message) => issues.push(RawIssue::for_field(field.name, message)),
                },
            }
        }

        if issues.is_empty() {
            Ok(output)
        } else {
            Err(issues)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn pagination() -> Schema {
        Schema::new()
            .field(Field::number("page").optional().min(1))
            .field(Field::number("limit").optional().min(1).max(100))
    }

    fn create_sample() -> Schema {
        Schema::new().field(
            Field::string("name")
                .non_empty()
                .message("validation.sample.nameRequired"),
        )
    }

    #[test]
    fn valid_input_passes_with_declared_types() {
        let validated = create_sample()
            .validate(&json!({"name": "First"}))
            .unwrap();
        assert_eq!(validated.get("name"), Some(&json!("First")));
    }

    #[test]
    fn numeric_strings_are_coerced() {
        let validated = pagination()
            .validate(&json!({"page": "10", "limit": 25}))
            .unwrap();
        assert_eq!(validated.get("page"), Some(&json!(10)));
        assert_eq!(validated.get("limit"), Some(&json!(25)));
    }

    #[test]
    fn missing_required_field_yields_exactly_one_issue() {
        let issues = create_sample().validate(&json!({})).unwrap_err();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].path, vec!["name".to_string()]);
        assert_eq!(issues[0].message, "validation.sample.nameRequired");
    }

    #[test]
    fn empty_strings_fail_non_empty_fields() {
        let issues = create_sample().validate(&json!({"name": ""})).unwrap_err();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].message, "validation.sample.nameRequired");
    }

    #[test]
    fn invalid_uuids_are_rejected() {
        let schema = Schema::new().field(Field::uuid("id").message("validation.sample.invalidId"));

        let issues = schema.validate(&json!({"id": "not-a-uuid"})).unwrap_err();
        assert_eq!(issues[0].path, vec!["id".to_string()]);
        assert_eq!(issues[0].message, "validation.sample.invalidId");

        let validated = schema
            .validate(&json!({"id": "123e4567-e89b-12d3-a456-426614174000"}))
            .unwrap();
        assert_eq!(
            validated.get("id"),
            Some(&json!("123e4567-e89b-12d3-a456-426614174000"))
        );
    }

    #[test]
    fn optional_fields_may_be_absent() {
        let validated = pagination().validate(&json!({})).unwrap();
        assert!(validated.is_empty());
    }

    #[test]
    fn undeclared_fields_are_stripped() {
        let validated = create_sample()
            .validate(&json!({"name": "kept", "extra": "dropped"}))
            .unwrap();
        assert!(!validated.contains_key("extra"));
    }

    #[test]
    fn bounds_are_enforced_with_default_messages() {
        let issues = pagination()
            .validate(&json!({"page": "0", "limit": "500"}))
            .unwrap_err();
        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].path, vec!["page".to_string()]);
        assert_eq!(issues[0].message, "Must be at least 1");
        assert_eq!(issues[1].path, vec!["limit".to_string()]);
        assert_eq!(issues[1].message, "Must be at most 100");
    }

    #[test]
    fn non_numeric_strings_fail_number_fields() {
        let issues = pagination().validate(&json!({"page": "abc"})).unwrap_err();
        assert_eq!(issues[0].message, "Expected a number");
    }

    #[test]
    fn non_object_roots_fail_with_an_object_level_issue() {
        let issues = create_sample().validate(&json!("nope")).unwrap_err();
        assert_eq!(issues.len(), 1);
        assert!(issues[0].path.is_empty());
    }

    #[test]
    fn null_roots_behave_like_empty_objects() {
        let issues = create_sample().validate(&Value::Null).unwrap_err();
        assert_eq!(issues[0].path, vec!["name".to_string()]);
    }

    #[test]
    fn issues_follow_declaration_order() {
        let schema = Schema::new()
            .field(Field::string("first").non_empty())
            .field(Field::number("second"));
        let issues = schema.validate(&json!({})).unwrap_err();
        assert_eq!(issues[0].path, vec!["first".to_string()]);
        assert_eq!(issues[1].path, vec!["second".to_string()]);
    }
}
