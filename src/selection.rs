//! Language selection for enrolling a deck's cards.

/// The languages chosen for the next enrollment.
///
/// A card needs two sides, so a selection is only usable with at least two
/// languages. The account's primary language, when known, is always part of
/// the selection and cannot be toggled off; that invariant lives here rather
/// than in the UI.
#[derive(Debug, Clone)]
pub struct LanguageSelection {
    primary: Option<String>,
    chosen: Vec<String>,
}

impl LanguageSelection {
    pub fn new(primary: Option<String>) -> Self {
        let chosen = primary.iter().cloned().collect();
        Self { primary, chosen }
    }

    /// Add or remove a language. Removing the primary language is refused.
    pub fn toggle(&mut self, language: &str) {
        if self.primary.as_deref() == Some(language) {
            return;
        }
        if let Some(pos) = self.chosen.iter().position(|l| l == language) {
            self.chosen.remove(pos);
        } else {
            self.chosen.push(language.to_string());
        }
    }

    pub fn contains(&self, language: &str) -> bool {
        self.chosen.iter().any(|l| l == language)
    }

    pub fn len(&self) -> usize {
        self.chosen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chosen.is_empty()
    }

    /// Whether the selection can form front/back card pairs.
    pub fn is_valid_pair(&self) -> bool {
        self.chosen.len() >= 2
    }

    pub fn languages(&self) -> &[String] {
        &self.chosen
    }

    pub fn primary(&self) -> Option<&str> {
        self.primary.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_adds_and_removes() {
        let mut sel = LanguageSelection::new(None);
        sel.toggle("Spanish");
        sel.toggle("French");
        assert!(sel.contains("Spanish"));
        assert!(sel.is_valid_pair());

        sel.toggle("Spanish");
        assert!(!sel.contains("Spanish"));
        assert!(!sel.is_valid_pair());
    }

    #[test]
    fn primary_language_cannot_be_deselected() {
        let mut sel = LanguageSelection::new(Some("English".into()));
        assert!(sel.contains("English"));

        // No sequence of toggles removes the primary
        sel.toggle("English");
        sel.toggle("Spanish");
        sel.toggle("English");
        sel.toggle("English");
        assert!(sel.contains("English"));
        assert!(sel.contains("Spanish"));
        assert_eq!(sel.len(), 2);
    }

    #[test]
    fn single_language_is_not_a_pair() {
        let sel = LanguageSelection::new(Some("English".into()));
        assert_eq!(sel.len(), 1);
        assert!(!sel.is_valid_pair());
    }
}
