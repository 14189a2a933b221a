/*! Annotation records

Shared record shapes produced by both annotation schemas:
[Entity] and [Span] for tagged text, [Relation] (schema A, list endpoints)
and [LinkedRelation] (schema B, single nullable endpoints), and [Sentence]
which only exists for schema A.
!*/
mod entity;
mod relation;
mod sentence;
mod span;

pub use entity::Entity;
pub use relation::{Endpoint, LinkedRelation, Relation};
pub use sentence::Sentence;
pub use span::Span;
