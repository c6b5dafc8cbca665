//! Constraint validation of request shapes.

use std::collections::HashMap;
use std::fmt::{self, Debug, Display, Formatter};

use lazy_static::lazy_static;
use regex::Regex;
use spin::Mutex;

use crate::{Member, Shape, StringEnum};

/// A shape whose members can be checked against their constraints.
pub trait Validate: Shape {
    /// Reports every member of `self` to the validator.
    fn validate(&self, v: &mut Validator);
}

/// Validates `value` and all shapes nested in it.
pub fn validate<T: Validate>(value: &T) -> Result<(), ValidationErrors> {
    let mut v = Validator::new();
    value.validate(&mut v);
    v.finish()
}

/// One member value that failed a constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintViolation {
    path: String,
    value: Option<String>,
    constraint: String,
}

impl ConstraintViolation {
    /// Dotted path of the member, e.g. `globalSecondaryIndexUpdates.1.member.update.indexName`.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The offending value, `None` when the member was absent.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn constraint(&self) -> &str {
        &self.constraint
    }
}

impl Display for ConstraintViolation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "Value '{}'", value)?,
            None => write!(f, "Value null")?,
        }
        write!(
            f,
            " at '{}' failed to satisfy constraint: {}",
            self.path, self.constraint
        )
    }
}

/// All constraint violations found in one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(Vec<ConstraintViolation>);

impl ValidationErrors {
    pub fn violations(&self) -> &[ConstraintViolation] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Display for ValidationErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let n = self.0.len();
        write!(
            f,
            "{} validation error{} detected: ",
            n,
            if n == 1 { "" } else { "s" }
        )?;
        for (i, violation) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}", violation)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

lazy_static! {
    static ref PATTERNS: Mutex<HashMap<&'static str, Option<Regex>>> = Mutex::new(HashMap::new());
}

/// Compiles `pattern` anchored at both ends, once per process.
fn compiled(pattern: &'static str) -> Option<Regex> {
    let mut cache = PATTERNS.lock();
    cache
        .entry(pattern)
        .or_insert_with(|| Regex::new(&format!("^(?:{})$", pattern)).ok())
        .clone()
}

/// Walks a request and collects constraint violations.
#[derive(Debug, Default)]
pub struct Validator {
    path: Vec<String>,
    violations: Vec<ConstraintViolation>,
}

impl Validator {
    pub fn new() -> Self {
        Validator::default()
    }

    /// Checks a string member.
    pub fn string(&mut self, member: &Member, value: Option<&str>) {
        let Some(value) = value else {
            self.missing(member);
            return;
        };
        if let Some((min, max)) = member.length_bounds() {
            self.check_length(member, value, value.chars().count(), min, max);
        }
        if let Some(pattern) = member.pattern_source() {
            match compiled(pattern) {
                Some(re) if re.is_match(value) => {}
                Some(_) => self.violate(
                    member,
                    Some(value.to_string()),
                    format!("Member must satisfy regular expression pattern: {}", pattern),
                ),
                None => self.violate(
                    member,
                    Some(value.to_string()),
                    format!("Member has an invalid pattern: {}", pattern),
                ),
            }
        }
    }

    /// Checks an integral member.
    pub fn long(&mut self, member: &Member, value: Option<i64>) {
        let Some(value) = value else {
            self.missing(member);
            return;
        };
        if let Some((min, max)) = member.value_range() {
            if value < min {
                self.violate(
                    member,
                    Some(value.to_string()),
                    format!("Member must have value greater than or equal to {}", min),
                );
            } else if value > max {
                self.violate(
                    member,
                    Some(value.to_string()),
                    format!("Member must have value less than or equal to {}", max),
                );
            }
        }
    }

    /// Checks an enumerated member.
    pub fn enum_value<E: StringEnum>(&mut self, member: &Member, value: Option<&E>) {
        let Some(value) = value else {
            self.missing(member);
            return;
        };
        if !value.is_known() {
            self.violate(
                member,
                Some(value.as_str().to_string()),
                format!(
                    "Member must satisfy enum value set: [{}]",
                    E::values().join(", ")
                ),
            );
        }
    }

    /// Checks a nested structure and descends into it.
    pub fn structure<T: Validate>(&mut self, member: &Member, value: Option<&T>) {
        let Some(value) = value else {
            self.missing(member);
            return;
        };
        self.path.push(member.path_name());
        value.validate(self);
        self.path.pop();
    }

    /// Checks a list of structures and descends into each element.
    pub fn list<T: Validate + Debug>(&mut self, member: &Member, value: Option<&[T]>) {
        let Some(items) = value else {
            self.missing(member);
            return;
        };
        if let Some((min, max)) = member.length_bounds() {
            self.check_length(member, &format!("{:?}", items), items.len(), min, max);
        }
        self.path.push(member.path_name());
        for (i, item) in items.iter().enumerate() {
            self.path.push(format!("{}.member", i + 1));
            item.validate(self);
            self.path.pop();
        }
        self.path.pop();
    }

    /// Checks a list of strings; `item` constrains every element.
    pub fn string_list(&mut self, member: &Member, item: &Member, value: Option<&[String]>) {
        let Some(items) = value else {
            self.missing(member);
            return;
        };
        if let Some((min, max)) = member.length_bounds() {
            self.check_length(member, &format!("{:?}", items), items.len(), min, max);
        }
        self.path.push(member.path_name());
        for (i, s) in items.iter().enumerate() {
            self.path.push(format!("{}", i + 1));
            self.string(item, Some(s));
            self.path.pop();
        }
        self.path.pop();
    }

    pub fn violations(&self) -> &[ConstraintViolation] {
        &self.violations
    }

    pub fn finish(self) -> Result<(), ValidationErrors> {
        if self.violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors(self.violations))
        }
    }

    fn check_length(&mut self, member: &Member, shown: &str, len: usize, min: usize, max: usize) {
        if len < min {
            self.violate(
                member,
                Some(shown.to_string()),
                format!("Member must have length greater than or equal to {}", min),
            );
        } else if len > max {
            self.violate(
                member,
                Some(shown.to_string()),
                format!("Member must have length less than or equal to {}", max),
            );
        }
    }

    fn missing(&mut self, member: &Member) {
        if member.is_required() {
            self.violate(member, None, "Member must not be null".to_string());
        }
    }

    fn violate(&mut self, member: &Member, value: Option<String>, constraint: String) {
        let mut path = self.path.join(".");
        if !path.is_empty() {
            path.push('.');
        }
        path.push_str(&member.path_name());
        self.violations.push(ConstraintViolation {
            path,
            value,
            constraint,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    crate::string_enum! {
        enum Kind {
            Hash = "HASH",
            Range = "RANGE",
        }
    }

    const NAME: Member = Member::new("AttributeName").required().length(1, 255);
    const KIND: Member = Member::new("KeyType").required();
    const TABLE: Member = Member::new("TableName")
        .required()
        .length(3, 255)
        .pattern("[a-zA-Z0-9_.-]+");
    const UNITS: Member = Member::new("ReadCapacityUnits").required().range(1, i64::MAX);
    const KEYS: Member = Member::new("KeySchema").required().length(1, 2);
    const EXTRA: Member = Member::new("NonKeyAttributes").length(1, 20);

    #[derive(Debug)]
    struct Key {
        name: Option<String>,
        kind: Option<Kind>,
    }

    impl Shape for Key {
        const NAME: &'static str = "KeySchemaElement";
        const MEMBERS: &'static [&'static Member] = &[&NAME, &KIND];
    }

    impl Validate for Key {
        fn validate(&self, v: &mut Validator) {
            v.string(&NAME, self.name.as_deref());
            v.enum_value(&KIND, self.kind.as_ref());
        }
    }

    struct Table {
        name: Option<String>,
        units: Option<i64>,
        keys: Option<Vec<Key>>,
        extra: Option<Vec<String>>,
    }

    impl Shape for Table {
        const NAME: &'static str = "Table";
        const MEMBERS: &'static [&'static Member] = &[&TABLE, &UNITS, &KEYS, &EXTRA];
    }

    impl Validate for Table {
        fn validate(&self, v: &mut Validator) {
            v.string(&TABLE, self.name.as_deref());
            v.long(&UNITS, self.units);
            v.list(&KEYS, self.keys.as_deref());
            v.string_list(&EXTRA, &NAME, self.extra.as_deref());
        }
    }

    fn key(name: &str, kind: &str) -> Key {
        Key {
            name: Some(name.to_string()),
            kind: Some(kind.into()),
        }
    }

    #[test]
    fn valid() {
        let table = Table {
            name: Some("orders.v2".to_string()),
            units: Some(5),
            keys: Some(vec![key("pk", "HASH"), key("sk", "RANGE")]),
            extra: None,
        };
        assert_eq!(validate(&table), Ok(()));
    }

    #[test]
    fn missing_required() {
        let table = Table {
            name: None,
            units: None,
            keys: None,
            extra: None,
        };
        let err = validate(&table).unwrap_err();
        let paths: Vec<_> = err.violations().iter().map(|v| v.path()).collect();
        assert_eq!(paths, ["tableName", "readCapacityUnits", "keySchema"]);
        assert!(err.violations().iter().all(|v| v.value().is_none()));
        assert!(err.to_string().starts_with("3 validation errors detected: "));
        assert!(err
            .to_string()
            .contains("Value null at 'tableName' failed to satisfy constraint: Member must not be null"));
    }

    #[test]
    fn length_pattern_and_range() {
        let table = Table {
            name: Some("a!".to_string()),
            units: Some(0),
            keys: Some(vec![]),
            extra: Some(vec![String::new()]),
        };
        let err = validate(&table).unwrap_err();
        let constraints: Vec<_> = err.violations().iter().map(|v| v.constraint()).collect();
        assert_eq!(
            constraints,
            [
                "Member must have length greater than or equal to 3",
                "Member must satisfy regular expression pattern: [a-zA-Z0-9_.-]+",
                "Member must have value greater than or equal to 1",
                "Member must have length greater than or equal to 1",
                "Member must have length greater than or equal to 1",
            ]
        );
        assert_eq!(err.violations()[4].path(), "nonKeyAttributes.1.attributeName");
    }

    #[test]
    fn pattern_matches_whole_string() {
        let table = Table {
            name: Some("good name".to_string()),
            units: Some(1),
            keys: Some(vec![key("pk", "HASH")]),
            extra: None,
        };
        let err = validate(&table).unwrap_err();
        assert_eq!(err.len(), 1);
        assert_eq!(err.violations()[0].value(), Some("good name"));
    }

    #[test]
    fn nested_paths() {
        let table = Table {
            name: Some("orders".to_string()),
            units: Some(1),
            keys: Some(vec![
                key("pk", "HASH"),
                Key {
                    name: None,
                    kind: Some("SORT".into()),
                },
            ]),
            extra: None,
        };
        let err = validate(&table).unwrap_err();
        assert_eq!(err.len(), 2);
        assert_eq!(err.violations()[0].path(), "keySchema.2.member.attributeName");
        assert_eq!(err.violations()[1].path(), "keySchema.2.member.keyType");
        assert_eq!(
            err.violations()[1].constraint(),
            "Member must satisfy enum value set: [HASH, RANGE]"
        );
    }

    #[test]
    fn too_long() {
        let table = Table {
            name: Some("x".repeat(256)),
            units: Some(1),
            keys: Some(vec![key("a", "HASH"), key("b", "RANGE"), key("c", "RANGE")]),
            extra: None,
        };
        let err = validate(&table).unwrap_err();
        assert_eq!(err.len(), 2);
        assert_eq!(
            err.violations()[0].constraint(),
            "Member must have length less than or equal to 255"
        );
        assert_eq!(err.violations()[1].path(), "keySchema");
    }

    #[test]
    fn bad_pattern_is_reported() {
        const BROKEN: Member = Member::new("Broken").pattern("[unclosed");
        let mut v = Validator::new();
        v.string(&BROKEN, Some("x"));
        assert_eq!(v.violations().len(), 1);
        assert!(v.violations()[0].constraint().starts_with("Member has an invalid pattern"));
    }

    #[test]
    fn unicode_length_counts_chars() {
        const SHORT: Member = Member::new("Short").length(1, 2);
        let mut v = Validator::new();
        v.string(&SHORT, Some("éé"));
        assert!(v.finish().is_ok());
    }
}
