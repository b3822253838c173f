//! The fixed template registry.
//!
//! A `TemplateConfig` is an immutable, named visual style. The registry is
//! the only source of instances — the renderers never construct one ad hoc,
//! which guarantees all three backends are driven by exactly the same
//! values for a given template id. Palette entries are hex triples without
//! a leading marker; each renderer prefixes them per its own color syntax.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateId {
    Modern,
    Classic,
    Minimalist,
}

impl TemplateId {
    /// Parses a caller-supplied id. `None` means the caller asked for a
    /// template outside the registry — that is the caller's error.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "modern" => Some(Self::Modern),
            "classic" => Some(Self::Classic),
            "minimalist" => Some(Self::Minimalist),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Modern => "modern",
            Self::Classic => "classic",
            Self::Minimalist => "minimalist",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeaderAlignment {
    Left,
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionHeaderStyle {
    BorderBottom,
    UppercaseBold,
    Shaded,
}

#[derive(Debug, Clone, Serialize)]
pub struct FontPairing {
    pub heading: &'static str,
    pub body: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutFlags {
    pub header_alignment: HeaderAlignment,
    pub section_header_style: SectionHeaderStyle,
}

/// 3-color palette, stored as hex triples without a `#`.
#[derive(Debug, Clone, Serialize)]
pub struct Palette {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub text: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct TemplateConfig {
    pub id: TemplateId,
    pub name: &'static str,
    pub description: &'static str,
    pub fonts: FontPairing,
    pub layout: LayoutFlags,
    pub colors: Palette,
}

static MODERN: TemplateConfig = TemplateConfig {
    id: TemplateId::Modern,
    name: "Modern Tech",
    description: "Clean, sans-serif, left-aligned. Perfect for startups and tech roles.",
    fonts: FontPairing {
        heading: "Arial",
        body: "Arial",
    },
    layout: LayoutFlags {
        header_alignment: HeaderAlignment::Left,
        section_header_style: SectionHeaderStyle::UppercaseBold,
    },
    colors: Palette {
        primary: "2563EB",
        secondary: "64748B",
        text: "0F172A",
    },
};

static CLASSIC: TemplateConfig = TemplateConfig {
    id: TemplateId::Classic,
    name: "Executive Classic",
    description: "Serif fonts, centered layout. Best for Finance, Law, and C-Suite.",
    fonts: FontPairing {
        heading: "Times New Roman",
        body: "Times New Roman",
    },
    layout: LayoutFlags {
        header_alignment: HeaderAlignment::Center,
        section_header_style: SectionHeaderStyle::BorderBottom,
    },
    colors: Palette {
        primary: "000000",
        secondary: "000000",
        text: "000000",
    },
};

static MINIMALIST: TemplateConfig = TemplateConfig {
    id: TemplateId::Minimalist,
    name: "Clean Minimalist",
    description: "High whitespace, efficient. Great for general corporate roles.",
    fonts: FontPairing {
        heading: "Calibri",
        body: "Calibri",
    },
    layout: LayoutFlags {
        header_alignment: HeaderAlignment::Left,
        section_header_style: SectionHeaderStyle::BorderBottom,
    },
    colors: Palette {
        primary: "333333",
        secondary: "666666",
        text: "222222",
    },
};

/// Returns the config for a registered template id.
pub fn get(id: TemplateId) -> &'static TemplateConfig {
    match id {
        TemplateId::Modern => &MODERN,
        TemplateId::Classic => &CLASSIC,
        TemplateId::Minimalist => &MINIMALIST,
    }
}

/// Looks up a caller-supplied raw id against the registry.
pub fn lookup(raw: &str) -> Option<&'static TemplateConfig> {
    TemplateId::parse(raw).map(get)
}

/// Enumerates the full registry, in presentation order.
pub fn all() -> [&'static TemplateConfig; 3] {
    [&MODERN, &CLASSIC, &MINIMALIST]
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_ids() {
        assert_eq!(lookup("modern").map(|c| c.id), Some(TemplateId::Modern));
        assert_eq!(lookup("classic").map(|c| c.id), Some(TemplateId::Classic));
        assert_eq!(
            lookup("minimalist").map(|c| c.id),
            Some(TemplateId::Minimalist)
        );
    }

    #[test]
    fn test_lookup_unknown_id_is_none() {
        assert!(lookup("brutalist").is_none());
        assert!(lookup("").is_none());
        assert!(lookup("Modern").is_none(), "ids are case-sensitive");
    }

    #[test]
    fn test_registry_is_stable() {
        // The same id must always resolve to the same values — the three
        // renderers rely on this to stay visually consistent.
        let a = get(TemplateId::Modern);
        let b = get(TemplateId::Modern);
        assert_eq!(a.colors.primary, b.colors.primary);
        assert_eq!(a.fonts.body, "Arial");
        assert_eq!(a.layout.header_alignment, HeaderAlignment::Left);
    }

    #[test]
    fn test_classic_is_centered_serif() {
        let classic = get(TemplateId::Classic);
        assert_eq!(classic.layout.header_alignment, HeaderAlignment::Center);
        assert_eq!(classic.fonts.body, "Times New Roman");
        assert_eq!(
            classic.layout.section_header_style,
            SectionHeaderStyle::BorderBottom
        );
    }

    #[test]
    fn test_palettes_are_bare_hex_triples() {
        for config in all() {
            for hex in [config.colors.primary, config.colors.secondary, config.colors.text] {
                assert_eq!(hex.len(), 6, "{hex} must be RRGGBB without a marker");
                assert!(hex.chars().all(|c| c.is_ascii_hexdigit()));
            }
        }
    }

    #[test]
    fn test_template_id_serde_matches_parse() {
        let id: TemplateId = serde_json::from_str(r#""modern""#).expect("parse");
        assert_eq!(id, TemplateId::Modern);
        assert_eq!(serde_json::to_string(&id).expect("serialize"), r#""modern""#);
    }
}
