/*! Tables

Rendering of extracted records as rectangular tables, ready to be written as CSV.

- [entity_pivot] and [relation_table] work on schema A [Sentence]s,
- [entity_table] and [linked_relation_table] work on deduplicated schema B records.
!*/
use itertools::Itertools;

use crate::annotation::{Entity, LinkedRelation, Sentence};

/// Header of [relation_table].
pub const RELATION_HEADER: [&str; 5] = ["关系名称", "主体类型", "主体名称", "客体类型", "客体名称"];

/// Fixed columns of [entity_table].
pub const ENTITY_COLUMNS: [&str; 3] = ["sentence_id", "entity_type", "value"];

/// Fixed columns of [linked_relation_table]. Objects come before subjects.
pub const LINKED_RELATION_COLUMNS: [&str; 6] = [
    "sentence_id",
    "object_type",
    "object",
    "relation_type",
    "subject_type",
    "subject",
];

/// A header and rows, each row having the header's width.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Table {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<I, S>(header: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            header: header.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Add a row, padding it with empty cells up to the header's width.
    pub fn push_row(&mut self, mut row: Vec<String>) {
        if row.len() < self.header.len() {
            row.resize(self.header.len(), String::new());
        }
        self.rows.push(row);
    }

    pub fn header(&self) -> &[String] {
        self.header.as_ref()
    }

    pub fn rows(&self) -> &[Vec<String>] {
        self.rows.as_ref()
    }
}

/// Build a table with one column per entity type, listing the distinct values of each type.
///
/// Types and values are kept in first-seen order.
/// `legacy` reproduces the historical output, which has one row less than the widest column
/// (the last value of the widest types is lost).
pub fn entity_pivot(sentences: &[Sentence], legacy: bool) -> Table {
    let mut columns: Vec<(&str, Vec<&str>)> = Vec::new();
    for entity in sentences.iter().flat_map(|s| s.entities.iter()) {
        match columns
            .iter_mut()
            .find(|(entity_type, _)| *entity_type == entity.entity_type())
        {
            Some((_, values)) => {
                if !values.contains(&entity.value()) {
                    values.push(entity.value());
                }
            }
            None => columns.push((entity.entity_type(), vec![entity.value()])),
        }
    }

    let widest = columns.iter().map(|(_, values)| values.len()).max().unwrap_or(0);
    let nb_rows = if legacy { widest.max(1) - 1 } else { widest };

    let mut table = Table::new(columns.iter().map(|(entity_type, _)| *entity_type));
    for idx in 0..nb_rows {
        table.push_row(
            columns
                .iter()
                .map(|(_, values)| values.get(idx).copied().unwrap_or_default().to_string())
                .collect(),
        );
    }
    table
}

/// Build a table with a row for each (subject, object) couple of each relation.
pub fn relation_table(sentences: &[Sentence]) -> Table {
    let mut table = Table::new(RELATION_HEADER);
    for relation in sentences.iter().flat_map(|s| s.relations.iter()) {
        for (subject, object) in relation.pairs() {
            table.push_row(vec![
                relation.name().to_string(),
                subject.entity_type().to_string(),
                subject.value().to_string(),
                object.entity_type().to_string(),
                object.value().to_string(),
            ]);
        }
    }
    table
}

/// `description0`, `description1`... up to `width`.
fn description_columns(width: usize) -> impl Iterator<Item = String> {
    (0..width).map(|i| format!("description{}", i))
}

/// Build a table with a row per entity, grouped by type.
pub fn entity_table(entities: &[Entity]) -> Table {
    let width = entities
        .iter()
        .map(|e| e.descriptions().len())
        .max()
        .unwrap_or(0);

    let header = ENTITY_COLUMNS
        .iter()
        .map(|c| c.to_string())
        .chain(description_columns(width));
    let mut table = Table::new(header);

    let types: Vec<&str> = entities.iter().map(Entity::entity_type).unique().collect();
    for entity_type in types {
        for entity in entities.iter().filter(|e| e.entity_type() == entity_type) {
            let row = [
                entity.sentence_ids().join("-"),
                entity_type.to_string(),
                entity.value().to_string(),
            ]
            .into_iter()
            .chain(entity.descriptions().iter().cloned())
            .collect();
            table.push_row(row);
        }
    }
    table
}

/// Build a table with a row per relation, grouped by relation type.
///
/// Relations with a missing endpoint are left out.
pub fn linked_relation_table(relations: &[LinkedRelation]) -> Table {
    let rendered: Vec<_> = relations
        .iter()
        .filter_map(|r| r.endpoints().map(|(subject, object)| (r, subject, object)))
        .collect();

    let width = rendered
        .iter()
        .map(|(r, _, _)| r.descriptions().len())
        .max()
        .unwrap_or(0);

    let header = LINKED_RELATION_COLUMNS
        .iter()
        .map(|c| c.to_string())
        .chain(description_columns(width));
    let mut table = Table::new(header);

    let names: Vec<&str> = rendered.iter().map(|(r, _, _)| r.name()).unique().collect();
    for name in names {
        for (relation, subject, object) in rendered.iter().filter(|(r, _, _)| r.name() == name) {
            let row = [
                relation.sentence_ids().join("-"),
                object.entity_type().to_string(),
                object.value().to_string(),
                name.to_string(),
                subject.entity_type().to_string(),
                subject.value().to_string(),
            ]
            .into_iter()
            .chain(relation.descriptions().iter().cloned())
            .collect();
            table.push_row(row);
        }
    }
    table
}
