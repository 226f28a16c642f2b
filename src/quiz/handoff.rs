use std::collections::HashMap;

/// One-shot transfer of the final score to the results view.
pub trait ResultHandoff {
    fn store(&mut self, key: &str, score: u32);
    /// One-way; the quiz does not come back after this.
    fn navigate(&mut self, destination: &str);
}

/// Browser-session style storage: string values that live as long as the
/// process does.
#[derive(Debug, Default)]
pub struct SessionStorage {
    items: HashMap<String, String>,
    destination: Option<String>,
}

impl SessionStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.items.get(key).map(String::as_str)
    }

    /// Reads a stored value back as a score.
    pub fn score(&self, key: &str) -> Option<u32> {
        self.get(key)?.parse().ok()
    }

    pub fn destination(&self) -> Option<&str> {
        self.destination.as_deref()
    }
}

impl ResultHandoff for SessionStorage {
    fn store(&mut self, key: &str, score: u32) {
        self.items.insert(key.to_string(), score.to_string());
    }

    fn navigate(&mut self, destination: &str) {
        self.destination = Some(destination.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::{RESULTS_DESTINATION, RESULT_KEY};

    #[test]
    fn stores_score_as_text() {
        let mut storage = SessionStorage::new();
        assert_eq!(storage.score(RESULT_KEY), None);

        storage.store(RESULT_KEY, 300);
        assert_eq!(storage.get(RESULT_KEY), Some("300"));
        assert_eq!(storage.score(RESULT_KEY), Some(300));

        storage.store(RESULT_KEY, 0);
        assert_eq!(storage.score(RESULT_KEY), Some(0));
    }

    #[test]
    fn records_navigation() {
        let mut storage = SessionStorage::new();
        assert_eq!(storage.destination(), None);
        storage.navigate(RESULTS_DESTINATION);
        assert_eq!(storage.destination(), Some("/end.html"));
    }
}
