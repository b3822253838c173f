//! HTML serialization of a `PreviewDocument`.
//!
//! The output is a self-contained fragment: one A4-sized container with an
//! inline stylesheet derived from the template config. In interactive mode
//! every editable region becomes a `contenteditable` span whose `data-path`
//! attribute carries the field path as JSON; the embedding editor reads it
//! back verbatim when committing an edit. Non-interactive mode renders the
//! same text without edit affordances, for thumbnails and read-only views.

use std::fmt::Write;

use crate::layout::contract::{
    self, Renderer, HEADER_RULE_COLOR, MARGIN_MM, PAGE_BREAK_HINT_MM, PAGE_HEIGHT_MM,
    PAGE_WIDTH_MM, SHADED_FILL,
};
use crate::preview::{ContactItem, EditableRegion, PreviewBlock, PreviewDocument};
use crate::templates::{self, HeaderAlignment, SectionHeaderStyle};

/// Renders a preview document to an HTML fragment.
pub fn render_html(doc: &PreviewDocument, interactive: bool) -> String {
    let config = templates::get(doc.template);
    let align = match config.layout.header_alignment {
        HeaderAlignment::Left => "left",
        HeaderAlignment::Center => "center",
    };
    let title_pt = contract::overrides(Renderer::Preview).title_size_pt;
    let heading_css = match config.layout.section_header_style {
        SectionHeaderStyle::UppercaseBold => format!(
            "color: #{}; letter-spacing: 0.05em;",
            config.colors.primary
        ),
        SectionHeaderStyle::BorderBottom => format!(
            "color: #{}; border-bottom: 1px solid #{};",
            config.colors.primary, config.colors.primary
        ),
        SectionHeaderStyle::Shaded => format!(
            "color: #{}; background: #{SHADED_FILL}; padding: 1px 4px;",
            config.colors.primary
        ),
    };

    // Advisory only, so the rule ships with the edit affordances.
    let page_hint_css = if interactive {
        format!(
            ".resume-page .page-hint {{ position: absolute; left: 0; right: 0; top: {PAGE_BREAK_HINT_MM}mm; \
             border-top: 1px dashed #94a3b8; font-size: 7pt; color: #94a3b8; text-align: right; }}"
        )
    } else {
        String::new()
    };

    let mut out = String::new();
    let _ = write!(
        out,
        "<div class=\"resume-page\" data-template=\"{}\">",
        doc.template.as_str()
    );
    let _ = write!(
        out,
        "<style>\
         .resume-page {{ position: relative; width: {PAGE_WIDTH_MM}mm; min-height: {PAGE_HEIGHT_MM}mm; \
         padding: {MARGIN_MM}mm; box-sizing: border-box; background: #fff; \
         font-family: '{body}', sans-serif; font-size: {body_pt}pt; line-height: 1.3; color: #{text}; }}\
         .resume-page .name {{ font-family: '{heading}', sans-serif; font-size: {title_pt}pt; \
         font-weight: bold; text-align: {align}; color: #{primary}; }}\
         .resume-page .contact {{ font-size: {contact_pt}pt; text-align: {align}; color: #{secondary}; \
         border-bottom: 1px solid #{rule}; padding-bottom: 4px; }}\
         .resume-page .contact a {{ color: #{primary}; }}\
         .resume-page h2 {{ font-family: '{heading}', sans-serif; font-size: {heading_pt}pt; \
         font-weight: bold; margin: 10px 0 4px; {heading_css} }}\
         .resume-page .entry-head {{ display: flex; justify-content: space-between; }}\
         .resume-page .company {{ font-weight: bold; color: #{primary}; text-transform: uppercase; }}\
         .resume-page .institution {{ font-weight: bold; color: #{primary}; }}\
         .resume-page .role {{ font-style: italic; }}\
         .resume-page .period {{ font-size: {period_pt}pt; color: #{secondary}; }}\
         .resume-page ul {{ margin: 2px 0; padding-left: 14pt; }}\
         {page_hint_css}\
         </style>",
        body = config.fonts.body,
        heading = config.fonts.heading,
        body_pt = contract::BODY_SIZE_PT,
        heading_pt = contract::HEADING_SIZE_PT,
        contact_pt = contract::CONTACT_SIZE_PT,
        period_pt = contract::PERIOD_SIZE_PT,
        text = config.colors.text,
        primary = config.colors.primary,
        secondary = config.colors.secondary,
        rule = HEADER_RULE_COLOR,
    );

    let separator = contract::contact_separator(config.layout.header_alignment);
    for block in &doc.blocks {
        match block {
            PreviewBlock::Header { name, contact } => {
                let _ = write!(out, "<div class=\"name\">{}</div>", span(name, interactive));
                out.push_str("<div class=\"contact\">");
                for (i, item) in contact.iter().enumerate() {
                    if i > 0 {
                        out.push_str(&escape_text(separator));
                    }
                    match item {
                        ContactItem::Text { region } => out.push_str(&span(region, interactive)),
                        ContactItem::Link { region, href, label } => {
                            let _ = write!(
                                out,
                                "<a href=\"{}\">{}</a>",
                                escape_attr(href),
                                escape_text(label)
                            );
                            // Raw stored value rides along, hidden, so the
                            // link stays editable without exposing the URL.
                            if interactive {
                                let _ = write!(
                                    out,
                                    "<span contenteditable=\"true\" data-path=\"{}\" hidden>{}</span>",
                                    escape_attr(&path_json(region)),
                                    escape_text(&region.text)
                                );
                            }
                        }
                    }
                }
                out.push_str("</div>");
            }
            PreviewBlock::SectionHeading { text, .. } => {
                let _ = write!(out, "<h2>{}</h2>", escape_text(text));
            }
            PreviewBlock::Paragraph { region } | PreviewBlock::SkillsLine { region } => {
                let _ = write!(out, "<p>{}</p>", span(region, interactive));
            }
            PreviewBlock::ExperienceEntry {
                role,
                company,
                period,
                bullets,
            } => {
                // Company is upper-cased by the stylesheet; the editable
                // region keeps the stored casing.
                let _ = write!(
                    out,
                    "<div class=\"entry-head\"><span><span class=\"company\">{}</span>\
                     {}<span class=\"role\">{}</span></span>\
                     <span class=\"period\">{}</span></div>",
                    span(company, interactive),
                    escape_text(contract::ENTRY_SEPARATOR),
                    span(role, interactive),
                    span(period, interactive)
                );
                if !bullets.is_empty() {
                    out.push_str("<ul>");
                    for bullet in bullets {
                        let _ = write!(out, "<li>{}</li>", span(bullet, interactive));
                    }
                    out.push_str("</ul>");
                }
            }
            PreviewBlock::EducationEntry {
                degree,
                institution,
                period,
            } => {
                let _ = write!(
                    out,
                    "<div class=\"entry-head\"><span><span class=\"institution\">{}</span>\
                     {}<span class=\"role\">{}</span></span>\
                     <span class=\"period\">{}</span></div>",
                    span(institution, interactive),
                    escape_text(contract::ENTRY_SEPARATOR),
                    span(degree, interactive),
                    span(period, interactive)
                );
            }
        }
    }

    if interactive {
        out.push_str("<div class=\"page-hint\">page 1 ends near here</div>");
    }
    out.push_str("</div>");
    out
}

fn span(region: &EditableRegion, interactive: bool) -> String {
    if interactive {
        format!(
            "<span contenteditable=\"true\" data-path=\"{}\">{}</span>",
            escape_attr(&path_json(region)),
            escape_text(&region.text)
        )
    } else {
        escape_text(&region.text)
    }
}

fn path_json(region: &EditableRegion) -> String {
    // FieldPath serializes keys as strings and indices as numbers; the
    // resulting array is exactly what the edits endpoint accepts back.
    serde_json::to_string(&region.path).unwrap_or_else(|_| "[]".to_string())
}

fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

fn escape_attr(s: &str) -> String {
    escape_text(s).replace('"', "&quot;")
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
