//! Training documents.
//!
//! Normalized form of parsed schema A sentences, where relations carry their full entities
//! instead of local ids.
use serde::{Deserialize, Serialize};

use crate::annotation::{Entity, Relation, Sentence, Span};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
pub struct TrainingDocument {
    pub sentence_list: Vec<TrainingSentence>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
pub struct TrainingSentence {
    pub text: String,
    pub feature: String,
    pub entities: Vec<TrainingEntity>,
    pub relations: Vec<TrainingRelation>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct TrainingEntity {
    pub id: i64,
    #[serde(rename = "type")]
    pub entity_type: String,
    pub value: String,
    pub start: usize,
    pub end: usize,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct TrainingRelation {
    pub subjects: Vec<TrainingEntity>,
    pub objects: Vec<TrainingEntity>,
    pub relation_name: String,
}

impl TrainingDocument {
    pub fn from_sentences(sentences: &[Sentence]) -> Self {
        Self {
            sentence_list: sentences.iter().map(TrainingSentence::from).collect(),
        }
    }

    /// Get back the sentences the document was built from.
    pub fn into_sentences(self) -> Vec<Sentence> {
        self.sentence_list.into_iter().map(Sentence::from).collect()
    }
}

impl From<&Entity> for TrainingEntity {
    fn from(e: &Entity) -> Self {
        let span = e.span().copied().unwrap_or_default();
        Self {
            id: e.id(),
            entity_type: e.entity_type().to_string(),
            value: e.value().to_string(),
            start: span.start(),
            end: span.end(),
        }
    }
}

impl From<TrainingEntity> for Entity {
    fn from(e: TrainingEntity) -> Self {
        Entity::new(e.id, e.value, e.entity_type).with_span(Span::new(e.start, e.end))
    }
}

impl From<&Relation> for TrainingRelation {
    fn from(r: &Relation) -> Self {
        Self {
            subjects: r.subjects().iter().map(TrainingEntity::from).collect(),
            objects: r.objects().iter().map(TrainingEntity::from).collect(),
            relation_name: r.name().to_string(),
        }
    }
}

impl From<TrainingRelation> for Relation {
    fn from(r: TrainingRelation) -> Self {
        Relation::new(
            r.subjects.into_iter().map(Entity::from).collect(),
            r.objects.into_iter().map(Entity::from).collect(),
            r.relation_name,
        )
    }
}

impl From<&Sentence> for TrainingSentence {
    fn from(s: &Sentence) -> Self {
        Self {
            text: s.text.clone(),
            feature: s.feature.clone(),
            entities: s.entities.iter().map(TrainingEntity::from).collect(),
            relations: s.relations.iter().map(TrainingRelation::from).collect(),
        }
    }
}

impl From<TrainingSentence> for Sentence {
    fn from(s: TrainingSentence) -> Self {
        Sentence::new(
            s.text,
            s.feature,
            s.entities.into_iter().map(Entity::from).collect(),
            s.relations.into_iter().map(Relation::from).collect(),
        )
    }
}
