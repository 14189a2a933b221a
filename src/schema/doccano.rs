/*! Schema B: doccano style JSON-Lines exports

One record per line:

```json
{"id": 12, "text": "...", "entities": [{"id": 1, "start_offset": 0, "end_offset": 4, "label": "drug"}],
 "relations": [{"id": 3, "from_id": 1, "to_id": 2, "type": "treats"}]}
```

Two labels are reserved for free-text descriptions of the record: spans tagged with them are not entities,
but their text is attached to every entity (resp. relation) extracted from the same record.
!*/
use std::fmt;

use serde::Deserialize;

use crate::annotation::{Entity, LinkedRelation, Span};

/// Default label of entity description spans.
pub const ENTITY_DESCRIPTION: &str = "实体描述";

/// Default label of relation description spans.
pub const RELATION_DESCRIPTION: &str = "关系描述";

/// Schema B extraction options.
///
/// When `with_descriptions` is false, description spans are still kept out of the entities
/// but nothing is attached to the extracted records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DoccanoOptions {
    pub with_descriptions: bool,
    pub entity_description_label: String,
    pub relation_description_label: String,
}

impl Default for DoccanoOptions {
    fn default() -> Self {
        Self {
            with_descriptions: true,
            entity_description_label: ENTITY_DESCRIPTION.to_string(),
            relation_description_label: RELATION_DESCRIPTION.to_string(),
        }
    }
}

impl DoccanoOptions {
    fn is_reserved(&self, label: &str) -> bool {
        label == self.entity_description_label || label == self.relation_description_label
    }
}

/// Record id, which is numeric in exports but may be a string.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum RecordId {
    Int(i64),
    Str(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Int(id) => write!(f, "{}", id),
            RecordId::Str(id) => write!(f, "{}", id),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct DoccanoRecord {
    pub id: RecordId,
    pub text: String,
    #[serde(default)]
    pub entities: Vec<LabeledSpan>,
    #[serde(default)]
    pub relations: Vec<RelationEdge>,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct LabeledSpan {
    pub id: i64,
    pub start_offset: usize,
    pub end_offset: usize,
    pub label: String,
}

impl LabeledSpan {
    pub fn span(&self) -> Span {
        Span::new(self.start_offset, self.end_offset)
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct RelationEdge {
    pub from_id: i64,
    pub to_id: i64,
    #[serde(rename = "type")]
    pub relation_type: String,
}

/// Records extracted from a whole file, before deduplication.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Extraction {
    pub entities: Vec<Entity>,
    pub relations: Vec<LinkedRelation>,
    /// ids of the records that had no entity.
    pub skipped: Vec<String>,
}

impl DoccanoRecord {
    /// Extract entities and relations from the record.
    ///
    /// Returns [None] if the record has no entity at all, in which case nothing (not even its relations)
    /// is extracted.
    pub fn extract(&self, options: &DoccanoOptions) -> Option<(Vec<Entity>, Vec<LinkedRelation>)> {
        if self.entities.is_empty() {
            return None;
        }

        let sentence_id = self.id.to_string();
        let (entity_descriptions, relation_descriptions) = if options.with_descriptions {
            (
                self.descriptions(&options.entity_description_label),
                self.descriptions(&options.relation_description_label),
            )
        } else {
            (Vec::new(), Vec::new())
        };

        let entities: Vec<Entity> = self
            .entities
            .iter()
            .filter(|span| !options.is_reserved(&span.label))
            .map(|span| {
                let value = span.span().slice(&self.text).replace(' ', "");
                Entity::new(span.id, value, span.label.clone())
                    .with_span(span.span())
                    .with_sentence_id(sentence_id.clone())
                    .with_descriptions(entity_descriptions.clone())
            })
            .collect();

        // endpoints are looked up in this record only.
        // to_id is the subject and from_id the object.
        let find = |id: i64| entities.iter().find(|e| e.id() == id).cloned();
        let relations = self
            .relations
            .iter()
            .map(|edge| {
                LinkedRelation::new(
                    sentence_id.clone(),
                    find(edge.to_id),
                    find(edge.from_id),
                    edge.relation_type.clone(),
                    relation_descriptions.clone(),
                )
            })
            .collect();

        Some((entities, relations))
    }

    /// texts of the spans tagged with `label`, in record order.
    fn descriptions(&self, label: &str) -> Vec<String> {
        self.entities
            .iter()
            .filter(|span| span.label == label)
            .map(|span| span.span().slice(&self.text).to_string())
            .collect()
    }
}

/// Extract entities and relations of all the provided records, in order.
pub fn extract<'a, I>(records: I, options: &DoccanoOptions) -> Extraction
where
    I: IntoIterator<Item = &'a DoccanoRecord>,
{
    let mut extraction = Extraction::default();
    for record in records {
        match record.extract(options) {
            Some((entities, relations)) => {
                extraction.entities.extend(entities);
                extraction.relations.extend(relations);
            }
            None => extraction.skipped.push(record.id.to_string()),
        }
    }
    extraction
}
