//! Record diffing.
//!
//! Two records are compared by reconstructing each into a canonical plain
//! text form and word-diffing the results. The reconstruction is verbatim:
//! empty bullets and odd whitespace inside fields survive, so the diff
//! reflects exactly what the user would see change, not a cleaned-up
//! version of it.

pub mod handlers;

use serde::Serialize;
use similar::{ChangeTag, TextDiff};

use crate::models::resume::ResumeRecord;

/// Canonical plain-text form of a record, independent of any template.
pub fn reconstruct_plain_text(record: &ResumeRecord) -> String {
    let mut sections = Vec::new();

    let mut header = vec![record.full_name.clone()];
    let contact: Vec<&str> = [
        record.location.as_str(),
        record.email.as_str(),
        record.phone.as_str(),
        record.linkedin.as_deref().unwrap_or(""),
    ]
    .into_iter()
    .filter(|v| !v.trim().is_empty())
    .collect();
    if !contact.is_empty() {
        header.push(contact.join(" | "));
    }
    sections.push(header.join("\n"));

    sections.push(format!("SUMMARY\n{}", record.summary));

    let entries: Vec<String> = record
        .experience
        .iter()
        .map(|e| {
            let mut lines = vec![format!("{} at {} ({})", e.role, e.company, e.period)];
            lines.extend(e.description.iter().cloned());
            lines.join("\n")
        })
        .collect();
    sections.push(format!("EXPERIENCE\n{}", entries.join("\n\n")));

    sections.push(format!("SKILLS\n{}", record.skills.join(", ")));

    let education: Vec<String> = record
        .education
        .iter()
        .map(|e| format!("{}, {} ({})", e.degree, e.institution, e.period))
        .collect();
    sections.push(format!("EDUCATION\n{}", education.join("\n")));

    sections.join("\n\n")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffKind {
    Added,
    Removed,
    Unchanged,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiffSegment {
    pub kind: DiffKind,
    pub text: String,
}

/// Word-level diff of two plain texts. Adjacent tokens with the same fate
/// are merged into one segment.
pub fn word_diff(old: &str, new: &str) -> Vec<DiffSegment> {
    let diff = TextDiff::from_words(old, new);
    let mut segments: Vec<DiffSegment> = Vec::new();
    for change in diff.iter_all_changes() {
        let kind = match change.tag() {
            ChangeTag::Delete => DiffKind::Removed,
            ChangeTag::Insert => DiffKind::Added,
            ChangeTag::Equal => DiffKind::Unchanged,
        };
        match segments.last_mut() {
            Some(last) if last.kind == kind => last.text.push_str(change.value()),
            _ => segments.push(DiffSegment {
                kind,
                text: change.value().to_string(),
            }),
        }
    }
    segments
}

/// Diff of two records via their canonical plain texts.
pub fn diff_records(old: &ResumeRecord, new: &ResumeRecord) -> Vec<DiffSegment> {
    word_diff(&reconstruct_plain_text(old), &reconstruct_plain_text(new))
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
