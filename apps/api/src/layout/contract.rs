//! The Unit/Layout Contract — the one place physical layout is defined.
//!
//! Every renderer reproduces these values in its own unit system: the
//! preview in CSS mm/pt, the DOCX exporter in twips and half-points, the
//! PDF exporter in PostScript points. Given the same record and template,
//! the text content and reading order of all three outputs must be
//! identical; exact placement may differ only by renderer-specific
//! rounding and the named overrides below.

use serde::Serialize;

use crate::templates::HeaderAlignment;

// ────────────────────────────────────────────────────────────────────────────
// Page geometry (ISO A4, 12.7mm margins on all sides)
// ────────────────────────────────────────────────────────────────────────────

pub const PAGE_WIDTH_MM: f32 = 210.0;
pub const PAGE_HEIGHT_MM: f32 = 297.0;
pub const MARGIN_MM: f32 = 12.7;

/// A4 in PostScript points (1pt = 1/72in).
pub const PAGE_WIDTH_PT: f32 = 595.28;
pub const PAGE_HEIGHT_PT: f32 = 841.89;
/// 12.7mm = 0.5in = 36pt.
pub const MARGIN_PT: f32 = 36.0;

/// A4 in twips (1/20pt), for the word-processor backend.
pub const PAGE_WIDTH_TWIPS: u32 = 11906;
pub const PAGE_HEIGHT_TWIPS: u32 = 16838;
/// 0.5in = 720 twips.
pub const MARGIN_TWIPS: i32 = 720;

// ────────────────────────────────────────────────────────────────────────────
// Type sizes and spacing
// ────────────────────────────────────────────────────────────────────────────

pub const BODY_SIZE_PT: f32 = 10.0;
pub const HEADING_SIZE_PT: f32 = 11.0;
pub const CONTACT_SIZE_PT: f32 = 9.5;
pub const PERIOD_SIZE_PT: f32 = 9.0;
pub const TITLE_SIZE_PT: f32 = 20.0;

/// Single line spacing for the cursor-based backend.
pub const LINE_HEIGHT_PT: f32 = 13.0;

/// Vertical offset (from the page top) of the advisory page-break indicator
/// drawn by the interactive preview. Purely visual; never affects exports.
pub const PAGE_BREAK_HINT_MM: f32 = 290.0;

/// Light divider drawn under the contact line, all templates.
pub const HEADER_RULE_COLOR: &str = "E2E8F0";
/// Background fill for the `shaded` section-header treatment.
pub const SHADED_FILL: &str = "F3F4F6";

// ────────────────────────────────────────────────────────────────────────────
// Per-renderer overrides
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Renderer {
    Preview,
    Docx,
    Pdf,
}

/// The named, accepted deviations from the shared contract.
///
/// The page-description backend targets a denser single-page layout and
/// renders the name/title at 12pt instead of 20pt. This is a deliberate
/// divergence carried over from the shipping output, not a bug; any new
/// deviation belongs here, never inline in a renderer.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RendererOverrides {
    pub title_size_pt: f32,
}

pub fn overrides(renderer: Renderer) -> RendererOverrides {
    match renderer {
        Renderer::Preview | Renderer::Docx => RendererOverrides {
            title_size_pt: TITLE_SIZE_PT,
        },
        Renderer::Pdf => RendererOverrides { title_size_pt: 12.0 },
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Separators and shared text rules
// ────────────────────────────────────────────────────────────────────────────

/// Skills are always one separator-joined line, never per-item bullets.
pub const SKILLS_SEPARATOR: &str = "  •  ";
const SKILLS_SPLIT_GLYPH: char = '•';

/// Separator between populated contact fields; centered/classic templates
/// use a pipe, left-aligned templates a bullet.
pub fn contact_separator(alignment: HeaderAlignment) -> &'static str {
    match alignment {
        HeaderAlignment::Center => " | ",
        HeaderAlignment::Left => " • ",
    }
}

/// Separator between company/institution and role/degree on an entry line.
pub const ENTRY_SEPARATOR: &str = " | ";

/// Company names render upper-cased in entry headers. Display rule only;
/// the stored value keeps its casing.
pub fn display_company(raw: &str) -> String {
    raw.to_uppercase()
}

pub fn join_skills(skills: &[String]) -> String {
    skills.join(SKILLS_SEPARATOR)
}

/// Re-splits a hand-edited skills line. Lossy round-trip by design: the
/// list is only as good as the retyped line, items are trimmed, and blank
/// fragments (doubled or trailing separators) are dropped.
pub fn split_skills(line: &str) -> Vec<String> {
    line.split(SKILLS_SPLIT_GLYPH)
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Normalizes a stored LinkedIn value into a clickable URL without
/// mutating the stored field: bare handles/fragments get an `https://`
/// prefix, full URLs pass through.
pub fn normalize_link(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    }
}

/// Fixed display label for the LinkedIn hyperlink; the raw URL is never
/// shown in rendered output.
pub const LINKEDIN_LABEL: &str = "LinkedIn";

/// The four fixed resume sections, in reading order. Every renderer emits
/// all four headings even when a section is empty, so the text content of
/// the three outputs stays identical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Summary,
    Skills,
    Experience,
    Education,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Summary,
        Section::Skills,
        Section::Experience,
        Section::Education,
    ];

    pub fn base_title(&self) -> &'static str {
        match self {
            Section::Summary => "Professional Summary",
            Section::Skills => "Core Competencies",
            Section::Experience => "Professional Experience",
            Section::Education => "Education",
        }
    }

    /// Heading text as rendered: bold all-caps under every template style.
    /// Shared here so all three backends uppercase the same way.
    pub fn title(&self) -> String {
        self.base_title().to_uppercase()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_margins_agree_across_unit_systems() {
        // 12.7mm = 36pt = 720 twips
        assert!((MARGIN_MM * 72.0 / 25.4 - MARGIN_PT).abs() < 0.01);
        assert_eq!((MARGIN_PT * 20.0) as i32, MARGIN_TWIPS);
    }

    #[test]
    fn test_pdf_title_override_is_the_only_deviation() {
        assert_eq!(overrides(Renderer::Preview).title_size_pt, 20.0);
        assert_eq!(overrides(Renderer::Docx).title_size_pt, 20.0);
        assert_eq!(overrides(Renderer::Pdf).title_size_pt, 12.0);
    }

    #[test]
    fn test_join_skills_matches_contract_text() {
        let skills = vec!["Go".to_string(), "Rust".to_string(), "SQL".to_string()];
        assert_eq!(join_skills(&skills), "Go  •  Rust  •  SQL");
    }

    #[test]
    fn test_skills_round_trip_modulo_whitespace() {
        let skills = vec![
            "Go".to_string(),
            "Rust".to_string(),
            "Distributed Systems".to_string(),
        ];
        let rejoined = split_skills(&join_skills(&skills));
        assert_eq!(rejoined, skills);
    }

    #[test]
    fn test_split_skills_trims_and_drops_blank_fragments() {
        assert_eq!(
            split_skills("  Go •• Rust  •  SQL • "),
            vec!["Go", "Rust", "SQL"]
        );
    }

    #[test]
    fn test_contact_separator_per_alignment() {
        assert_eq!(contact_separator(HeaderAlignment::Left), " • ");
        assert_eq!(contact_separator(HeaderAlignment::Center), " | ");
    }

    #[test]
    fn test_section_titles_are_all_caps_for_every_style() {
        assert_eq!(Section::Experience.title(), "PROFESSIONAL EXPERIENCE");
        assert_eq!(Section::Summary.title(), "PROFESSIONAL SUMMARY");
        assert_eq!(Section::Skills.title(), "CORE COMPETENCIES");
        assert_eq!(Section::Education.title(), "EDUCATION");
    }

    #[test]
    fn test_sections_read_skills_before_experience() {
        let skills = Section::ALL.iter().position(|s| *s == Section::Skills);
        let experience = Section::ALL.iter().position(|s| *s == Section::Experience);
        assert!(skills < experience, "skills section precedes experience");
    }

    #[test]
    fn test_normalize_link_prefixes_bare_values() {
        assert_eq!(
            normalize_link("linkedin.com/in/jane"),
            "https://linkedin.com/in/jane"
        );
        assert_eq!(
            normalize_link("https://linkedin.com/in/jane"),
            "https://linkedin.com/in/jane"
        );
        assert_eq!(
            normalize_link("http://linkedin.com/in/jane"),
            "http://linkedin.com/in/jane"
        );
    }
}
