//! Full Name Value Object
//!
//! First and last name as entered. The display name stored with the
//! provider is `"{first} {last}"`.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FullName {
    first: String,
    last: String,
}

impl FullName {
    /// `None` if either part is blank
    pub fn new(first: impl Into<String>, last: impl Into<String>) -> Option<Self> {
        let first = first.into();
        let last = last.into();

        if kernel::validation::is_blank(&first) || kernel::validation::is_blank(&last) {
            return None;
        }

        Some(Self { first, last })
    }

    pub fn first(&self) -> &str {
        &self.first
    }

    pub fn last(&self) -> &str {
        &self.last
    }

    pub fn display(&self) -> String {
        format!("{} {}", self.first, self.last)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name() {
        let name = FullName::new("John", "Doe").unwrap();
        assert_eq!(name.display(), "John Doe");
        assert_eq!(name.first(), "John");
        assert_eq!(name.last(), "Doe");
    }

    #[test]
    fn test_blank_parts_rejected() {
        assert!(FullName::new("", "Doe").is_none());
        assert!(FullName::new("John", "  ").is_none());
    }
}
