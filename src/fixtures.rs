//! Sample data backing the fixture-based template test. The field values
//! are arbitrary template content, not meaningful constants.

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleData {
    pub name: String,
    pub role: String,
}

impl SampleData {
    pub fn new(name: impl Into<String>, role: impl Into<String>) -> Self {
        Self { name: name.into(), role: role.into() }
    }
}

/// Zero-argument producer registered as the `sample_data` fixture in the
/// template tests.
pub fn sample_data() -> SampleData {
    SampleData::new("Silver", "engineer")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn producer_is_stable() {
        let a = sample_data();
        let b = sample_data();
        assert_eq!(a, b);
        assert_eq!(a.name, "Silver");
        assert_eq!(a.role, "engineer");
    }
}
