use itertools::Itertools;

use crate::processing::dedup::Merge;

use super::Entity;

/// A relation between groups of entities of a same sentence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relation {
    subjects: Vec<Entity>,
    objects: Vec<Entity>,
    name: String,
}

impl Relation {
    pub fn new(subjects: Vec<Entity>, objects: Vec<Entity>, name: String) -> Self {
        Self {
            subjects,
            objects,
            name,
        }
    }

    pub fn subjects(&self) -> &[Entity] {
        self.subjects.as_ref()
    }

    pub fn objects(&self) -> &[Entity] {
        self.objects.as_ref()
    }

    pub fn name(&self) -> &str {
        self.name.as_ref()
    }

    /// Iterate over every (subject, object) couple.
    pub fn pairs(&self) -> impl Iterator<Item = (&Entity, &Entity)> {
        self.subjects.iter().cartesian_product(self.objects.iter())
    }
}

/// Side of a [LinkedRelation] that could not be resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Subject,
    Object,
    Both,
}

/// A relation linking two entities by id.
///
/// Endpoints are optional since the ids may not match any entity of the record.
/// Such relations are kept around but are never rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkedRelation {
    sentence_ids: Vec<String>,
    subject: Option<Entity>,
    object: Option<Entity>,
    name: String,
    descriptions: Vec<String>,
}

impl LinkedRelation {
    pub fn new(
        sentence_id: String,
        subject: Option<Entity>,
        object: Option<Entity>,
        name: String,
        descriptions: Vec<String>,
    ) -> Self {
        Self {
            sentence_ids: vec![sentence_id],
            subject,
            object,
            name,
            descriptions,
        }
    }

    pub fn sentence_ids(&self) -> &[String] {
        self.sentence_ids.as_ref()
    }

    pub fn subject(&self) -> Option<&Entity> {
        self.subject.as_ref()
    }

    pub fn object(&self) -> Option<&Entity> {
        self.object.as_ref()
    }

    pub fn name(&self) -> &str {
        self.name.as_ref()
    }

    pub fn descriptions(&self) -> &[String] {
        self.descriptions.as_ref()
    }

    /// Get both endpoints, if they are resolved.
    pub fn endpoints(&self) -> Option<(&Entity, &Entity)> {
        self.subject.as_ref().zip(self.object.as_ref())
    }

    /// Get the unresolved side, if any.
    pub fn missing(&self) -> Option<Endpoint> {
        match (&self.subject, &self.object) {
            (Some(_), Some(_)) => None,
            (None, Some(_)) => Some(Endpoint::Subject),
            (Some(_), None) => Some(Endpoint::Object),
            (None, None) => Some(Endpoint::Both),
        }
    }
}

fn same_endpoint(a: Option<&Entity>, b: Option<&Entity>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a.same_identity(b),
        (None, None) => true,
        _ => false,
    }
}

impl Merge for LinkedRelation {
    fn same_record(&self, other: &Self) -> bool {
        self.name == other.name
            && same_endpoint(self.subject(), other.subject())
            && same_endpoint(self.object(), other.object())
    }

    fn merge(&mut self, other: Self) {
        self.sentence_ids.extend(other.sentence_ids);
        self.descriptions.extend(other.descriptions);
    }
}
