//! The interactive preview renderer.
//!
//! Rendering is a two-step pipeline: a `ResumeRecord` plus a template
//! becomes a `PreviewDocument` (an ordered list of blocks, each editable
//! region tagged with the field path it writes back to), and the document
//! is then serialized to HTML by `html::render_html`. The block layer is
//! what tests and the edit round-trip reason about; the HTML layer is pure
//! presentation.

pub mod handlers;
pub mod html;
pub mod session;

use serde::Serialize;

use crate::layout::contract::{self, Section};
use crate::models::resume::ResumeRecord;
use crate::models::update::{FieldPath, PathSegment};
use crate::templates::{TemplateConfig, TemplateId};

/// One editable span: the visible text plus the field path an edit to it
/// commits back through.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EditableRegion {
    pub path: FieldPath,
    pub text: String,
}

impl EditableRegion {
    fn new(path: FieldPath, text: impl Into<String>) -> Self {
        Self {
            path,
            text: text.into(),
        }
    }
}

/// One item on the contact line.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ContactItem {
    /// Plain editable field (email, phone, location).
    Text { region: EditableRegion },
    /// The LinkedIn entry: rendered as a fixed-label hyperlink, edited via
    /// the raw stored value.
    Link {
        region: EditableRegion,
        href: String,
        label: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum PreviewBlock {
    Header {
        name: EditableRegion,
        contact: Vec<ContactItem>,
    },
    SectionHeading {
        section: Section,
        text: String,
    },
    Paragraph {
        region: EditableRegion,
    },
    /// The joined skills line. Committing an edit to it re-splits the text
    /// back into the list.
    SkillsLine {
        region: EditableRegion,
    },
    ExperienceEntry {
        role: EditableRegion,
        company: EditableRegion,
        period: EditableRegion,
        bullets: Vec<EditableRegion>,
    },
    EducationEntry {
        degree: EditableRegion,
        institution: EditableRegion,
        period: EditableRegion,
    },
}

/// The renderer-agnostic preview: template plus ordered blocks.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewDocument {
    pub template: TemplateId,
    pub blocks: Vec<PreviewBlock>,
}

fn key(k: &str) -> PathSegment {
    PathSegment::Key(k.to_string())
}

/// Builds the block list for a record under a template.
///
/// All four section headings are always emitted, populated or not, so the
/// preview's text content lines up with the two export backends.
pub fn render(record: &ResumeRecord, config: &'static TemplateConfig) -> PreviewDocument {
    let mut blocks = Vec::new();

    blocks.push(header_block(record));

    blocks.push(PreviewBlock::SectionHeading {
        section: Section::Summary,
        text: Section::Summary.title(),
    });
    blocks.push(PreviewBlock::Paragraph {
        region: EditableRegion::new(vec![key("summary")], &record.summary),
    });

    blocks.push(PreviewBlock::SectionHeading {
        section: Section::Skills,
        text: Section::Skills.title(),
    });
    blocks.push(PreviewBlock::SkillsLine {
        region: EditableRegion::new(vec![key("skills")], contract::join_skills(&record.skills)),
    });

    blocks.push(PreviewBlock::SectionHeading {
        section: Section::Experience,
        text: Section::Experience.title(),
    });
    for (i, entry) in record.experience.iter().enumerate() {
        let base = |field: &str| vec![key("experience"), PathSegment::Index(i), key(field)];
        let bullets = entry
            .description
            .iter()
            .enumerate()
            .map(|(j, bullet)| {
                EditableRegion::new(
                    vec![
                        key("experience"),
                        PathSegment::Index(i),
                        key("description"),
                        PathSegment::Index(j),
                    ],
                    bullet,
                )
            })
            .collect();
        blocks.push(PreviewBlock::ExperienceEntry {
            role: EditableRegion::new(base("role"), &entry.role),
            company: EditableRegion::new(base("company"), &entry.company),
            period: EditableRegion::new(base("period"), &entry.period),
            bullets,
        });
    }

    blocks.push(PreviewBlock::SectionHeading {
        section: Section::Education,
        text: Section::Education.title(),
    });
    for (i, entry) in record.education.iter().enumerate() {
        let base = |field: &str| vec![key("education"), PathSegment::Index(i), key(field)];
        blocks.push(PreviewBlock::EducationEntry {
            degree: EditableRegion::new(base("degree"), &entry.degree),
            institution: EditableRegion::new(base("institution"), &entry.institution),
            period: EditableRegion::new(base("period"), &entry.period),
        });
    }

    PreviewDocument {
        template: config.id,
        blocks,
    }
}

/// Name line plus the contact line: phone, email, location, then LinkedIn.
/// Empty fields are skipped, and LinkedIn appears only when the record
/// actually carries one, never as a placeholder.
fn header_block(record: &ResumeRecord) -> PreviewBlock {
    let mut contact = Vec::new();
    for (field, value) in [
        ("phone", &record.phone),
        ("email", &record.email),
        ("location", &record.location),
    ] {
        if !value.trim().is_empty() {
            contact.push(ContactItem::Text {
                region: EditableRegion::new(vec![key(field)], value),
            });
        }
    }
    if record.has_linkedin() {
        let raw = record.linkedin.as_deref().unwrap_or_default();
        contact.push(ContactItem::Link {
            region: EditableRegion::new(vec![key("linkedin")], raw),
            href: contract::normalize_link(raw),
            label: contract::LINKEDIN_LABEL,
        });
    }
    PreviewBlock::Header {
        name: EditableRegion::new(vec![key("fullName")], &record.full_name),
        contact,
    }
}

impl PreviewDocument {
    /// Linearizes the visible text in reading order. Used to check that the
    /// three backends agree on content for a given record and template.
    pub fn plain_text(&self) -> String {
        let mut out = Vec::new();
        for block in &self.blocks {
            match block {
                PreviewBlock::Header { name, contact } => {
                    out.push(name.text.clone());
                    let items: Vec<&str> = contact
                        .iter()
                        .map(|item| match item {
                            ContactItem::Text { region } => region.text.as_str(),
                            ContactItem::Link { label, .. } => label,
                        })
                        .collect();
                    if !items.is_empty() {
                        out.push(items.join(" | "));
                    }
                }
                PreviewBlock::SectionHeading { text, .. } => out.push(text.clone()),
                PreviewBlock::Paragraph { region } | PreviewBlock::SkillsLine { region } => {
                    out.push(region.text.clone())
                }
                PreviewBlock::ExperienceEntry {
                    role,
                    company,
                    period,
                    bullets,
                } => {
                    out.push(format!(
                        "{}{}{} ({})",
                        contract::display_company(&company.text),
                        contract::ENTRY_SEPARATOR,
                        role.text,
                        period.text
                    ));
                    for bullet in bullets {
                        out.push(bullet.text.clone());
                    }
                }
                PreviewBlock::EducationEntry {
                    degree,
                    institution,
                    period,
                } => {
                    out.push(format!(
                        "{}{}{} ({})",
                        institution.text,
                        contract::ENTRY_SEPARATOR,
                        degree.text,
                        period.text
                    ));
                }
            }
        }
        out.join("\n")
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
