//! Translation service
//!
//! Minimal lookup-table translator for titles and labels. A missing key is
//! not fatal: the raw key is returned so the page still renders.

use std::collections::HashMap;

/// Translates (domain, key) pairs into display strings
pub struct Translator {
    catalog: HashMap<String, HashMap<String, String>>,
}

impl Translator {
    /// Create an empty translator
    pub fn new() -> Self {
        Self {
            catalog: HashMap::new(),
        }
    }

    /// Add a translation entry
    pub fn insert(&mut self, domain: &str, key: &str, text: &str) {
        self.catalog
            .entry(domain.to_string())
            .or_default()
            .insert(key.to_string(), text.to_string());
    }

    /// Look up a translation, falling back to the raw key on a miss
    pub fn t(&self, domain: &str, key: &str) -> String {
        match self.catalog.get(domain).and_then(|entries| entries.get(key)) {
            Some(text) => text.clone(),
            None => {
                tracing::debug!(domain, key, "Missing translation, using raw key");
                key.to_string()
            }
        }
    }
}

impl Default for Translator {
    fn default() -> Self {
        let mut translator = Self::new();

        translator.insert("app", "info.create.title", "New Info");
        translator.insert("app", "info.create.label", "Create Info");
        translator.insert("app", "info.page.title", "Info");
        translator.insert("app", "questionnaire.create.title", "New Questionnaire");
        translator.insert("app", "questionnaire.create.label", "Create Questionnaire");
        translator.insert("app", "questionnaire.page.title", "Questionnaires");

        translator
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_hits_catalog() {
        let translator = Translator::default();
        assert_eq!(translator.t("app", "info.create.title"), "New Info");
    }

    #[test]
    fn test_missing_key_falls_back_to_raw_key() {
        let translator = Translator::default();
        assert_eq!(translator.t("app", "info.delete.label"), "info.delete.label");
        assert_eq!(translator.t("mail", "info.create.title"), "info.create.title");
    }

    #[test]
    fn test_insert_overrides_default() {
        let mut translator = Translator::default();
        translator.insert("app", "info.create.title", "Neue Info");
        assert_eq!(translator.t("app", "info.create.title"), "Neue Info");
    }
}
