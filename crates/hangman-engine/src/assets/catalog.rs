use crate::api::error::CatalogError;
use crate::core::phrase::PhraseList;

/// Phrase lists loaded from a standalone JSON document.
///
/// The document is an array of lists:
/// `[{ "theme": "Birds", "phrases": [{ "value": "owl", "hints": ["hoots"] }] }]`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PhraseCatalog {
    lists: Vec<PhraseList>,
}

impl PhraseCatalog {
    /// Parse and validate a catalog. Every phrase must have at least one word.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let lists: Vec<PhraseList> = serde_json::from_str(json)?;
        for list in &lists {
            if let Some(index) = list.iter().position(|phrase| phrase.word_count() == 0) {
                return Err(CatalogError::EmptyPhrase {
                    theme: list.theme().to_owned(),
                    index,
                });
            }
        }
        log::info!(
            "Loaded {} phrase lists ({} phrases)",
            lists.len(),
            lists.iter().map(PhraseList::count).sum::<usize>()
        );
        Ok(Self { lists })
    }

    /// The loaded lists, in document order.
    pub fn lists(&self) -> &[PhraseList] {
        &self.lists
    }

    /// Take the loaded lists.
    pub fn into_lists(self) -> Vec<PhraseList> {
        self.lists
    }

    /// Look up a list by theme.
    pub fn theme(&self, theme: &str) -> Option<&PhraseList> {
        self.lists.iter().find(|list| list.theme() == theme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_catalog() {
        let json = r#"[
            { "theme": "Birds", "phrases": [
                { "value": "owl", "hints": ["hoots"] },
                { "value": "blue jay", "descriptions": ["noisy"] }
            ]},
            { "theme": "Empty" }
        ]"#;
        let catalog = PhraseCatalog::from_json(json).unwrap();
        assert_eq!(catalog.lists().len(), 2);

        let birds = catalog.theme("Birds").unwrap();
        assert_eq!(birds.count(), 2);
        assert_eq!(birds.get(1).and_then(|p| p.first_hint()), Some("noisy"));
        assert!(catalog.theme("Empty").unwrap().is_empty());
        assert!(catalog.theme("Fish").is_none());
    }

    #[test]
    fn exposure_outside_the_phrase_is_dropped() {
        let json = r#"[{ "theme": "Birds", "phrases": [{ "value": "owl", "exposedLetters": ["e", "w"] }] }]"#;
        let catalog = PhraseCatalog::from_json(json).unwrap();
        let owl = catalog.lists()[0].get(0).unwrap();
        assert_eq!(owl.exposed_letters().iter().collect::<Vec<_>>(), vec![&'w']);
    }

    #[test]
    fn blank_phrase_is_rejected() {
        let json = r#"[{ "theme": "Birds", "phrases": [{ "value": "owl" }, { "value": "  " }] }]"#;
        match PhraseCatalog::from_json(json) {
            Err(CatalogError::EmptyPhrase { theme, index }) => {
                assert_eq!(theme, "Birds");
                assert_eq!(index, 1);
            }
            other => panic!("expected EmptyPhrase, got {other:?}"),
        }
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(
            PhraseCatalog::from_json(r#"{"theme": "Birds"}"#),
            Err(CatalogError::Parse(_))
        ));
    }
}
