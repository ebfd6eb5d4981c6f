//! Document store keyed by id, with stable insertion order.

use ahash::AHashMap;

use crate::document::document::Document;

/// Dense position of a document inside a [`DocumentStore`].
pub type DocOrd = usize;

/// Documents in first-insertion order.
///
/// Inserting a document whose id is already present replaces the earlier
/// document in place, so ids stay unique and ordinals stay stable.
#[derive(Debug, Clone, Default)]
pub struct DocumentStore {
    documents: Vec<Document>,
    ords: AHashMap<String, DocOrd>,
}

impl DocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a document. Returns its ordinal and whether it replaced one.
    pub fn insert(&mut self, document: Document) -> (DocOrd, bool) {
        match self.ords.get(&document.id) {
            Some(&ord) => {
                self.documents[ord] = document;
                (ord, true)
            }
            None => {
                let ord = self.documents.len();
                self.ords.insert(document.id.clone(), ord);
                self.documents.push(document);
                (ord, false)
            }
        }
    }

    pub fn get(&self, ord: DocOrd) -> Option<&Document> {
        self.documents.get(ord)
    }

    pub fn get_by_id(&self, id: &str) -> Option<&Document> {
        self.ords.get(id).and_then(|&ord| self.documents.get(ord))
    }

    pub fn iter(&self) -> impl Iterator<Item = (DocOrd, &Document)> {
        self.documents.iter().enumerate()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::corpus::VocabularyDoc;

    fn doc(id: &str, word: &str) -> Document {
        Document::from_vocabulary(VocabularyDoc::new(id, word, "x", "c", "A1")).unwrap()
    }

    #[test]
    fn test_insert_and_lookup() {
        let mut store = DocumentStore::new();
        assert_eq!(store.insert(doc("v1", "hello")), (0, false));
        assert_eq!(store.insert(doc("v2", "world")), (1, false));

        assert_eq!(store.len(), 2);
        assert_eq!(store.get(1).unwrap().title, "world");
        assert_eq!(store.get_by_id("v1").unwrap().title, "hello");
        assert!(store.get_by_id("v3").is_none());
    }

    #[test]
    fn test_colliding_id_overwrites_in_place() {
        let mut store = DocumentStore::new();
        store.insert(doc("v1", "hello"));
        store.insert(doc("v2", "world"));
        assert_eq!(store.insert(doc("v1", "hallo")), (0, true));

        assert_eq!(store.len(), 2);
        assert_eq!(store.get(0).unwrap().title, "hallo");
    }
}
