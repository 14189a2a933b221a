use crate::processing::dedup::Merge;

use super::Span;

/// A tagged piece of text.
///
/// `id` is local to the record the entity comes from and is only used to resolve relation endpoints.
/// `sentence_ids` holds provenance (ids of the records the entity has been seen in),
/// and `descriptions` free-text annotations attached to those records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    id: i64,
    value: String,
    entity_type: String,
    span: Option<Span>,
    sentence_ids: Vec<String>,
    descriptions: Vec<String>,
}

impl Entity {
    pub fn new(id: i64, value: String, entity_type: String) -> Self {
        Self {
            id,
            value,
            entity_type,
            span: None,
            sentence_ids: Vec::new(),
            descriptions: Vec::new(),
        }
    }

    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    pub fn with_sentence_id(mut self, sentence_id: String) -> Self {
        self.sentence_ids.push(sentence_id);
        self
    }

    pub fn with_descriptions(mut self, descriptions: Vec<String>) -> Self {
        self.descriptions = descriptions;
        self
    }

    /// Get the entity's local id.
    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn value(&self) -> &str {
        self.value.as_ref()
    }

    pub fn entity_type(&self) -> &str {
        self.entity_type.as_ref()
    }

    pub fn span(&self) -> Option<&Span> {
        self.span.as_ref()
    }

    pub fn sentence_ids(&self) -> &[String] {
        self.sentence_ids.as_ref()
    }

    pub fn descriptions(&self) -> &[String] {
        self.descriptions.as_ref()
    }

    /// Two entities are the same if they share value and type, whatever their ids and spans.
    pub fn same_identity(&self, other: &Entity) -> bool {
        self.value == other.value && self.entity_type == other.entity_type
    }
}

impl Merge for Entity {
    fn same_record(&self, other: &Self) -> bool {
        self.same_identity(other)
    }

    fn merge(&mut self, other: Self) {
        self.sentence_ids.extend(other.sentence_ids);
        self.descriptions.extend(other.descriptions);
    }
}
