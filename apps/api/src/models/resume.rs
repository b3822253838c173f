//! The canonical, format-agnostic resume record.
//!
//! This is the single source of truth every renderer consumes. Field names
//! follow the upstream collaborator's JSON shape (camelCase), and sequence
//! fields tolerate `null` or missing values — upstream AI output and manual
//! edits are not fully trusted, so absent arrays become empty ones instead
//! of failing deserialization.

use serde::{Deserialize, Deserializer, Serialize};

/// One resume, held in memory for the session.
///
/// `experience`, `education`, `skills` and bullet `description` lists are
/// ordered; order is display order and no renderer may re-sort them.
/// `linkedin` may be a bare handle, a URL fragment, or a full URL — it is
/// normalized at render time and never rewritten in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeRecord {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub summary: String,
    #[serde(default, deserialize_with = "nullable_seq")]
    pub skills: Vec<String>,
    #[serde(default, deserialize_with = "nullable_seq")]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default, deserialize_with = "nullable_seq")]
    pub education: Vec<EducationEntry>,
}

/// One experience entry. `description` bullets are ordered; an empty bullet
/// is legal and renders as an empty line, never dropped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceEntry {
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub period: String,
    #[serde(default, deserialize_with = "nullable_seq")]
    pub description: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationEntry {
    #[serde(default)]
    pub institution: String,
    #[serde(default)]
    pub degree: String,
    #[serde(default)]
    pub period: String,
}

impl ResumeRecord {
    /// True when the record carries a usable LinkedIn value. Renderers omit
    /// the field entirely (no placeholder, no broken link) when this is false.
    pub fn has_linkedin(&self) -> bool {
        self.linkedin
            .as_deref()
            .is_some_and(|v| !v.trim().is_empty())
    }
}

/// Deserializes a sequence field that may be missing or explicitly `null`.
fn nullable_seq<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let opt = Option::<Vec<T>>::deserialize(deserializer)?;
    Ok(opt.unwrap_or_default())
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
