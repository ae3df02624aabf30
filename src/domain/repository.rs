//! Name repository.

/// Remembers the last name looked up.
#[derive(Debug, Clone, Default)]
pub struct Repository {
    last: Option<String>,
}

impl Repository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalize `name` to upper case, record it, and return it.
    ///
    /// Any previously recorded name is overwritten. The empty string is
    /// recorded like any other name.
    pub fn find(&mut self, name: &str) -> String {
        let normalized = name.to_uppercase();
        self.last = Some(normalized.clone());
        normalized
    }

    /// Most recently recorded name, or `None` before the first `find`.
    pub fn last(&self) -> Option<&str> {
        self.last.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_is_none_before_find() {
        let repo = Repository::new();
        assert_eq!(repo.last(), None);
    }

    #[test]
    fn test_find_returns_and_records_upper_case() {
        let mut repo = Repository::new();
        assert_eq!(repo.find("alice"), "ALICE");
        assert_eq!(repo.last(), Some("ALICE"));
    }

    #[test]
    fn test_find_overwrites_previous() {
        let mut repo = Repository::new();
        repo.find("a");
        repo.find("b");
        assert_eq!(repo.last(), Some("B"));
    }

    #[test]
    fn test_find_empty_string() {
        let mut repo = Repository::new();
        repo.find("x");
        assert_eq!(repo.find(""), "");
        assert_eq!(repo.last(), Some(""));
    }

    #[test]
    fn test_find_unicode() {
        let mut repo = Repository::new();
        assert_eq!(repo.find("straße"), "STRASSE");
        assert_eq!(repo.find("ünïcode"), "ÜNÏCODE");
        assert_eq!(repo.last(), Some("ÜNÏCODE"));
    }
}
