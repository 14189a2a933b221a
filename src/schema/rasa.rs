/*! Schema A: rasa style annotation documents

```json
{"rasa_nlu_data": {"common_examples": [
    {"text": "...", "intent": "(1,2)->(3)->causes", "entities": [{"start": 0, "end": 4, "value": "E-1", "entity": "drug"}]}
]}}
```

Each tagged span carries a local id in its `value` (`E-1` has id `1`), except spans tagged with the feature marker
whose text goes into [Sentence::feature].

A non-empty `intent` encodes exactly one relation: `(subject ids)->(object ids)->relation name`.
!*/
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::annotation::{Entity, Relation, Sentence, Span};

/// Default value of spans that hold the sentence's feature.
pub const FEATURE_MARKER: &str = "特性";

const ARROW: &str = "->";

/// Schema A parsing options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasaOptions {
    pub feature_marker: String,
}

impl Default for RasaOptions {
    fn default() -> Self {
        Self {
            feature_marker: FEATURE_MARKER.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
pub struct RasaDocument {
    pub rasa_nlu_data: RasaNluData,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
pub struct RasaNluData {
    pub common_examples: Vec<Example>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
pub struct Example {
    pub text: String,
    #[serde(default)]
    pub intent: String,
    #[serde(default)]
    pub entities: Vec<TaggedSpan>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct TaggedSpan {
    pub start: usize,
    pub end: usize,
    pub value: String,
    pub entity: String,
}

impl Example {
    /// An example with no annotation, ready to be annotated.
    pub fn unannotated(text: String) -> Self {
        Self {
            text,
            ..Default::default()
        }
    }
}

impl RasaDocument {
    /// Build a pre-annotation document holding one empty example per text.
    pub fn skeleton<I>(texts: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        Self {
            rasa_nlu_data: RasaNluData {
                common_examples: texts.into_iter().map(Example::unannotated).collect(),
            },
        }
    }

    pub fn examples(&self) -> &[Example] {
        self.rasa_nlu_data.common_examples.as_ref()
    }

    /// Parse every example into a [Sentence].
    ///
    /// Stops at the first malformed example.
    pub fn sentences(&self, options: &RasaOptions) -> Result<Vec<Sentence>, AnnotationError> {
        self.examples()
            .iter()
            .enumerate()
            .map(|(idx, example)| parse_example(example, options).map_err(|e| e.at(idx)))
            .collect()
    }
}

/// Why an example could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnnotationErrorKind {
    /// Tag value has no integer id after its first dash.
    EntityTag,
    /// Intent does not have exactly three `->` separated segments.
    SegmentCount(usize),
    /// An id list is too short to be wrapped in delimiters.
    Delimiters,
    /// An id does not belong to any entity of the example.
    UnknownEntity(String),
}

/// Malformed schema A example.
///
/// `input` is the offending tag value or intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotationError {
    example: usize,
    input: String,
    kind: AnnotationErrorKind,
}

impl AnnotationError {
    fn new(input: &str, kind: AnnotationErrorKind) -> Self {
        Self {
            example: 0,
            input: input.to_string(),
            kind,
        }
    }

    fn at(mut self, example: usize) -> Self {
        self.example = example;
        self
    }

    /// Get the index of the faulty example.
    pub fn example(&self) -> usize {
        self.example
    }

    pub fn input(&self) -> &str {
        self.input.as_ref()
    }

    pub fn kind(&self) -> &AnnotationErrorKind {
        &self.kind
    }
}

/// parse a single example.
pub fn parse_example(example: &Example, options: &RasaOptions) -> Result<Sentence, AnnotationError> {
    let text = &example.text;
    let mut feature = String::new();
    let mut entities = Vec::with_capacity(example.entities.len());

    // local id -> position in entities
    let mut index: HashMap<&str, usize> = HashMap::new();

    for tag in &example.entities {
        let span = Span::new(tag.start, tag.end);
        if tag.value == options.feature_marker {
            feature = span.slice(text).to_string();
            continue;
        }

        let id_str = tag
            .value
            .split('-')
            .nth(1)
            .ok_or_else(|| AnnotationError::new(&tag.value, AnnotationErrorKind::EntityTag))?;
        let id: i64 = id_str
            .trim()
            .parse()
            .map_err(|_| AnnotationError::new(&tag.value, AnnotationErrorKind::EntityTag))?;

        index.insert(id_str, entities.len());
        entities.push(
            Entity::new(id, span.slice(text).to_string(), tag.entity.clone()).with_span(span),
        );
    }

    let mut relations = Vec::new();
    if !example.intent.is_empty() {
        let intent = example.intent.trim();
        let relation = parse_intent(intent, &index, &entities)
            .map_err(|kind| AnnotationError::new(intent, kind))?;
        relations.push(relation);
    }

    Ok(Sentence::new(text.clone(), feature, entities, relations))
}

/// parse an intent of the `(1,2)->(3)->name` form.
fn parse_intent(
    intent: &str,
    index: &HashMap<&str, usize>,
    entities: &[Entity],
) -> Result<Relation, AnnotationErrorKind> {
    let segments: Vec<&str> = intent.split(ARROW).collect();
    if segments.len() != 3 {
        return Err(AnnotationErrorKind::SegmentCount(segments.len()));
    }

    let subjects = resolve_ids(segments[0], index, entities)?;
    let objects = resolve_ids(segments[1], index, entities)?;

    Ok(Relation::new(subjects, objects, segments[2].to_string()))
}

/// resolve a parenthesized, comma separated id list.
///
/// Delimiters are stripped by position, whatever they are.
fn resolve_ids(
    segment: &str,
    index: &HashMap<&str, usize>,
    entities: &[Entity],
) -> Result<Vec<Entity>, AnnotationErrorKind> {
    let mut chars = segment.chars();
    if chars.next().is_none() || chars.next_back().is_none() {
        return Err(AnnotationErrorKind::Delimiters);
    }

    chars
        .as_str()
        .split(',')
        .map(|id| {
            index
                .get(id)
                .map(|pos| entities[*pos].clone())
                .ok_or_else(|| AnnotationErrorKind::UnknownEntity(id.to_string()))
        })
        .collect()
}
