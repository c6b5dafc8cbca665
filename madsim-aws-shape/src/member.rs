/// Constraints on one member of a shape.
///
/// Members are declared as constants next to the type they describe:
///
/// ```
/// use madsim_aws_shape::Member;
///
/// const TABLE_NAME: Member = Member::new("TableName")
///     .required()
///     .length(3, 255)
///     .pattern("[a-zA-Z0-9_.-]+");
///
/// assert_eq!(TABLE_NAME.path_name(), "tableName");
/// assert_eq!(TABLE_NAME.length_bounds(), Some((3, 255)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Member {
    name: &'static str,
    required: bool,
    length: Option<(usize, usize)>,
    range: Option<(i64, i64)>,
    pattern: Option<&'static str>,
}

impl Member {
    /// Creates an optional, unconstrained member with the given wire name.
    pub const fn new(name: &'static str) -> Self {
        Member {
            name,
            required: false,
            length: None,
            range: None,
            pattern: None,
        }
    }

    /// Marks the member as required.
    pub const fn required(self) -> Self {
        Member {
            required: true,
            ..self
        }
    }

    /// Bounds the length of a string (in characters) or a list (in elements).
    pub const fn length(self, min: usize, max: usize) -> Self {
        Member {
            length: Some((min, max)),
            ..self
        }
    }

    /// Bounds a numeric value, both ends inclusive.
    pub const fn range(self, min: i64, max: i64) -> Self {
        Member {
            range: Some((min, max)),
            ..self
        }
    }

    /// Requires a string to match `pattern` in full.
    pub const fn pattern(self, pattern: &'static str) -> Self {
        Member {
            pattern: Some(pattern),
            ..self
        }
    }

    /// The wire name, e.g. `TableName`.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub const fn is_required(&self) -> bool {
        self.required
    }

    pub const fn length_bounds(&self) -> Option<(usize, usize)> {
        self.length
    }

    pub const fn value_range(&self) -> Option<(i64, i64)> {
        self.range
    }

    pub const fn pattern_source(&self) -> Option<&'static str> {
        self.pattern
    }

    /// The name used in error paths: the wire name with a lowercase initial.
    pub fn path_name(&self) -> String {
        let mut chars = self.name.chars();
        match chars.next() {
            Some(first) => first.to_lowercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

/// Schema metadata of a structure.
pub trait Shape {
    /// The shape name in the service model.
    const NAME: &'static str;

    /// All members, in model order.
    const MEMBERS: &'static [&'static Member];

    /// Looks up a member by wire name.
    fn member(name: &str) -> Option<&'static Member> {
        Self::MEMBERS.iter().copied().find(|m| m.name() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ID: Member = Member::new("PipelineId").required().length(1, 1024);
    const VALUES: Member = Member::new("ParameterValues");

    struct Request;

    impl Shape for Request {
        const NAME: &'static str = "Request";
        const MEMBERS: &'static [&'static Member] = &[&ID, &VALUES];
    }

    #[test]
    fn builder() {
        assert!(ID.is_required());
        assert_eq!(ID.length_bounds(), Some((1, 1024)));
        assert_eq!(ID.value_range(), None);
        assert_eq!(ID.pattern_source(), None);
        assert!(!VALUES.is_required());
        assert_eq!(VALUES.length_bounds(), None);
    }

    #[test]
    fn path_name() {
        assert_eq!(ID.path_name(), "pipelineId");
        assert_eq!(Member::new("S").path_name(), "s");
        assert_eq!(Member::new("").path_name(), "");
    }

    #[test]
    fn lookup() {
        assert_eq!(Request::member("PipelineId"), Some(&ID));
        assert_eq!(Request::member("pipelineId"), None);
        assert_eq!(Request::MEMBERS.len(), 2);
    }
}
