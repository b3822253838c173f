//! Path-addressed updates — the only mutation channel into a `ResumeRecord`.
//!
//! An edit is expressed as a sequence of keys/indices locating one field
//! (e.g. `["experience", 2, "description", 0]`) plus the new value. The
//! update is a pure function: the record is deep-copied into a
//! `serde_json::Value` tree, a single leaf is replaced, and the tree is
//! deserialized back. No caller-held reference ever observes a partial
//! write, and applying the same `(path, value)` twice is a no-op.
//!
//! Index segments may arrive as JSON numbers or numeric strings — the
//! upstream editor addresses array elements with stringified indices.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::models::resume::ResumeRecord;

/// One step of a field path: an object key or a sequence index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathSegment {
    Index(usize),
    Key(String),
}

/// A full path from the record root to one editable field.
pub type FieldPath = Vec<PathSegment>;

#[derive(Debug, Error)]
pub enum UpdateError {
    #[error("empty update path")]
    EmptyPath,
    #[error("path segment `{0}` does not address an existing field")]
    BadSegment(String),
    #[error("index {index} out of bounds for a sequence of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
    #[error("updated value no longer matches the resume shape: {0}")]
    Shape(#[from] serde_json::Error),
}

/// Applies a single text edit, returning a new record.
///
/// Copy-then-replace: the input is never mutated. Intermediate segments
/// must address existing containers; the final segment may introduce an
/// optional leaf (e.g. setting `linkedin` on a record that had none).
pub fn apply(record: &ResumeRecord, path: &[PathSegment], value: &str) -> Result<ResumeRecord, UpdateError> {
    set_leaf(record, path, Value::String(value.to_string()))
}

/// List-valued variant used when a joined line is committed back as items
/// (the skills line re-split).
pub fn apply_items(
    record: &ResumeRecord,
    path: &[PathSegment],
    items: Vec<String>,
) -> Result<ResumeRecord, UpdateError> {
    let leaf = Value::Array(items.into_iter().map(Value::String).collect());
    set_leaf(record, path, leaf)
}

fn set_leaf(record: &ResumeRecord, path: &[PathSegment], leaf: Value) -> Result<ResumeRecord, UpdateError> {
    let (last, parents) = path.split_last().ok_or(UpdateError::EmptyPath)?;

    let mut tree = serde_json::to_value(record)?;
    let mut node = &mut tree;
    for segment in parents {
        node = descend(node, segment)?;
    }
    place(node, last, leaf)?;

    Ok(serde_json::from_value(tree)?)
}

/// Steps into an existing child. Numeric-string keys address array elements.
fn descend<'a>(node: &'a mut Value, segment: &PathSegment) -> Result<&'a mut Value, UpdateError> {
    match (node, segment) {
        (Value::Object(map), PathSegment::Key(key)) => map
            .get_mut(key)
            .ok_or_else(|| UpdateError::BadSegment(key.clone())),
        (Value::Array(seq), segment) => {
            let index = array_index(segment, seq.len())?;
            Ok(&mut seq[index])
        }
        (_, PathSegment::Key(key)) => Err(UpdateError::BadSegment(key.clone())),
        (_, PathSegment::Index(index)) => Err(UpdateError::BadSegment(index.to_string())),
    }
}

/// Writes the leaf. Object keys may be inserted (optional fields); array
/// slots must already exist — edits never grow a sequence.
fn place(node: &mut Value, segment: &PathSegment, leaf: Value) -> Result<(), UpdateError> {
    match (node, segment) {
        (Value::Object(map), PathSegment::Key(key)) => {
            map.insert(key.clone(), leaf);
            Ok(())
        }
        (Value::Array(seq), segment) => {
            let index = array_index(segment, seq.len())?;
            seq[index] = leaf;
            Ok(())
        }
        (_, PathSegment::Key(key)) => Err(UpdateError::BadSegment(key.clone())),
        (_, PathSegment::Index(index)) => Err(UpdateError::BadSegment(index.to_string())),
    }
}

fn array_index(segment: &PathSegment, len: usize) -> Result<usize, UpdateError> {
    let index = match segment {
        PathSegment::Index(i) => *i,
        PathSegment::Key(key) => key
            .parse::<usize>()
            .map_err(|_| UpdateError::BadSegment(key.clone()))?,
    };
    if index >= len {
        return Err(UpdateError::IndexOutOfBounds { index, len });
    }
    Ok(index)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
