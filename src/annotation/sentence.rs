use super::{Entity, Relation};

/// An annotated example from a schema A document.
///
/// `feature` is the text tagged with the feature marker, which is kept out of `entities`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Sentence {
    pub text: String,
    pub feature: String,
    pub entities: Vec<Entity>,
    pub relations: Vec<Relation>,
}

impl Sentence {
    pub fn new(
        text: String,
        feature: String,
        entities: Vec<Entity>,
        relations: Vec<Relation>,
    ) -> Self {
        Self {
            text,
            feature,
            entities,
            relations,
        }
    }
}
