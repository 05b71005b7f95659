use std::fmt;

/// Hierarchical cache key, e.g. `["user"]` or `["project", "p1"]`.
///
/// Invalidating a key also invalidates every key it is a prefix of.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct QueryKey(Vec<String>);

impl QueryKey {
    pub fn new<I, S>(parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(parts.into_iter().map(Into::into).collect())
    }

    /// The signed-in user.
    pub fn user() -> Self {
        Self::new(["user"])
    }

    pub fn parts(&self) -> &[String] {
        &self.0
    }

    /// Whether `self` equals `other` or is one of its ancestors.
    pub fn is_prefix_of(&self, other: &QueryKey) -> bool {
        other.0.starts_with(&self.0)
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix() {
        let project = QueryKey::new(["project"]);
        let one = QueryKey::new(["project", "p1"]);
        assert!(project.is_prefix_of(&one));
        assert!(one.is_prefix_of(&one));
        assert!(!one.is_prefix_of(&project));
        assert!(!QueryKey::user().is_prefix_of(&one));
        assert_eq!(one.to_string(), "[project, p1]");
    }
}
