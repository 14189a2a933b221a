/*! Deduplication

Records coming from annotation exports are deduplicated by structural equality:
the first record seen is kept, and every later equal record is merged into it
(provenance and descriptions are appended) before being discarded.

Comparison is done by a linear scan of the kept records, which is fine for annotation files.
!*/

/// Trait for records that can be deduplicated with [dedup].
pub trait Merge {
    /// Structural equality used for deduplication.
    fn same_record(&self, other: &Self) -> bool;

    /// Absorb a duplicate. `self` is the kept record.
    fn merge(&mut self, other: Self);
}

/// deduplicates `records` using `same` as equality predicate and `merge` to fold duplicates
/// into the first equal record.
///
/// Output keeps arrival order of the first occurrences.
pub fn dedup_by<T, I, E, M>(records: I, mut same: E, mut merge: M) -> Vec<T>
where
    I: IntoIterator<Item = T>,
    E: FnMut(&T, &T) -> bool,
    M: FnMut(&mut T, T),
{
    let mut kept: Vec<T> = Vec::new();
    for record in records {
        match kept.iter().position(|k| same(k, &record)) {
            Some(idx) => merge(&mut kept[idx], record),
            None => kept.push(record),
        }
    }
    kept
}

/// deduplicates [Merge] records.
pub fn dedup<T, I>(records: I) -> Vec<T>
where
    T: Merge,
    I: IntoIterator<Item = T>,
{
    dedup_by(records, T::same_record, T::merge)
}
