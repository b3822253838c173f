//! Page-description export.
//!
//! A cursor-based composer: `y` tracks the distance from the page top to
//! the current baseline, every block checks remaining space before drawing,
//! and a block that doesn't fit moves the cursor to a fresh page. Breaks
//! only happen between blocks — a section heading is never left orphaned
//! at the bottom of a page, and an entry header always keeps its first
//! bullet with it.
//!
//! Text is drawn with the base-14 fonts in WinAnsi encoding; widths come
//! from the static metric tables, which double as the wrap and alignment
//! measurements.

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};

use crate::export::ExportError;
use crate::layout::contract::{
    self, Renderer, Section, BODY_SIZE_PT, CONTACT_SIZE_PT, HEADER_RULE_COLOR, HEADING_SIZE_PT,
    LINE_HEIGHT_PT, MARGIN_PT, PAGE_HEIGHT_PT, PAGE_WIDTH_PT, PERIOD_SIZE_PT, SHADED_FILL,
};
use crate::layout::font_metrics::{get_metrics, metric_font_for, FontMetricTable, MetricFont};
use crate::layout::wrap::wrap_text;
use crate::models::resume::ResumeRecord;
use crate::templates::{HeaderAlignment, SectionHeaderStyle, TemplateConfig};

const CONTENT_WIDTH_PT: f32 = PAGE_WIDTH_PT - 2.0 * MARGIN_PT;
/// Hanging indent for bullet text.
const BULLET_INDENT_PT: f32 = 10.0;

/// What got drawn, in order. Pagination decisions are tested against this
/// log rather than by parsing content streams back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Name,
    Contact,
    Heading(Section),
    Paragraph,
    EntryHeader,
    Bullet,
    Education,
    PageBreak,
}

/// One drawn text face: content-stream resource name plus metric table.
#[derive(Clone, Copy)]
struct Face {
    resource: &'static str,
    metrics: MetricFont,
}

fn face_for(family: &str, bold: bool, italic: bool) -> Face {
    // Italic faces share their regular metrics; close enough for wrapping.
    let metrics = metric_font_for(family, bold);
    let resource = match (metrics, italic) {
        (MetricFont::Helvetica, false) => "F1",
        (MetricFont::HelveticaBold, _) => "F2",
        (MetricFont::Helvetica, true) => "F3",
        (MetricFont::TimesRoman, false) => "F4",
        (MetricFont::TimesBold, _) => "F5",
        (MetricFont::TimesRoman, true) => "F6",
    };
    Face { resource, metrics }
}

struct LinkRect {
    rect: [f32; 4],
    uri: String,
}

#[derive(Default)]
struct PageContent {
    ops: Vec<Operation>,
    links: Vec<LinkRect>,
}

pub struct ComposedDocument {
    pages: Vec<PageContent>,
    pub block_log: Vec<BlockKind>,
}

impl ComposedDocument {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}

struct Composer {
    config: &'static TemplateConfig,
    done: Vec<PageContent>,
    current: PageContent,
    /// Distance from page top to the current baseline.
    y: f32,
    block_log: Vec<BlockKind>,
}

impl Composer {
    fn new(config: &'static TemplateConfig) -> Self {
        Self {
            config,
            done: Vec::new(),
            current: PageContent::default(),
            y: MARGIN_PT + LINE_HEIGHT_PT,
            block_log: Vec::new(),
        }
    }

    fn metrics(&self, face: Face) -> &'static FontMetricTable {
        get_metrics(face.metrics)
    }

    fn body_face(&self, bold: bool, italic: bool) -> Face {
        face_for(self.config.fonts.body, bold, italic)
    }

    fn heading_face(&self, bold: bool) -> Face {
        face_for(self.config.fonts.heading, bold, false)
    }

    fn new_page(&mut self) {
        let finished = std::mem::take(&mut self.current);
        self.done.push(finished);
        self.y = MARGIN_PT + LINE_HEIGHT_PT;
        self.block_log.push(BlockKind::PageBreak);
    }

    /// Moves to a fresh page unless `needed` points still fit above the
    /// bottom margin.
    fn ensure_space(&mut self, needed: f32) {
        if self.y + needed > PAGE_HEIGHT_PT - MARGIN_PT {
            self.new_page();
        }
    }

    fn advance(&mut self, dy: f32) {
        self.y += dy;
    }

    /// Draws one already-wrapped line at `x`, baseline at the cursor.
    fn draw_text(&mut self, x: f32, text: &str, face: Face, size: f32, color: &str) {
        let (r, g, b) = rgb(color);
        let baseline = PAGE_HEIGHT_PT - self.y;
        self.current.ops.push(Operation::new("BT", vec![]));
        self.current.ops.push(Operation::new(
            "Tf",
            vec![face.resource.into(), size.into()],
        ));
        self.current
            .ops
            .push(Operation::new("rg", vec![r.into(), g.into(), b.into()]));
        self.current
            .ops
            .push(Operation::new("Td", vec![x.into(), baseline.into()]));
        self.current.ops.push(Operation::new(
            "Tj",
            vec![Object::string_literal(encode_winansi(text))],
        ));
        self.current.ops.push(Operation::new("ET", vec![]));
    }

    /// Horizontal rule across the content width, just under the baseline.
    fn rule(&mut self, color: &str) {
        let (r, g, b) = rgb(color);
        let y = PAGE_HEIGHT_PT - self.y - 2.0;
        self.current
            .ops
            .push(Operation::new("RG", vec![r.into(), g.into(), b.into()]));
        self.current.ops.push(Operation::new("w", vec![0.5.into()]));
        self.current
            .ops
            .push(Operation::new("m", vec![MARGIN_PT.into(), y.into()]));
        self.current.ops.push(Operation::new(
            "l",
            vec![(PAGE_WIDTH_PT - MARGIN_PT).into(), y.into()],
        ));
        self.current.ops.push(Operation::new("S", vec![]));
    }

    /// Filled band behind the current line, for shaded headings.
    fn shade(&mut self, height: f32) {
        let (r, g, b) = rgb(SHADED_FILL);
        let y = PAGE_HEIGHT_PT - self.y - 3.0;
        self.current
            .ops
            .push(Operation::new("rg", vec![r.into(), g.into(), b.into()]));
        self.current.ops.push(Operation::new(
            "re",
            vec![
                MARGIN_PT.into(),
                y.into(),
                CONTENT_WIDTH_PT.into(),
                height.into(),
            ],
        ));
        self.current.ops.push(Operation::new("f", vec![]));
    }

    fn link(&mut self, x: f32, width: f32, size: f32, uri: String) {
        let baseline = PAGE_HEIGHT_PT - self.y;
        self.current.links.push(LinkRect {
            rect: [x, baseline - 2.0, x + width, baseline + size],
            uri,
        });
    }

    fn finish(mut self) -> ComposedDocument {
        self.done.push(self.current);
        ComposedDocument {
            pages: self.done,
            block_log: self.block_log,
        }
    }
}

/// Lays a record out into pages of content operations.
pub fn compose(record: &ResumeRecord, config: &'static TemplateConfig) -> ComposedDocument {
    let mut c = Composer::new(config);
    let style = config.layout.section_header_style;

    draw_name(&mut c, record);
    draw_contact(&mut c, record);

    draw_heading(&mut c, Section::Summary, style);
    draw_paragraph(&mut c, &record.summary, BlockKind::Paragraph);

    draw_heading(&mut c, Section::Skills, style);
    draw_paragraph(&mut c, &contract::join_skills(&record.skills), BlockKind::Paragraph);

    draw_heading(&mut c, Section::Experience, style);
    for entry in &record.experience {
        draw_experience(&mut c, entry);
    }

    draw_heading(&mut c, Section::Education, style);
    for entry in &record.education {
        draw_education(&mut c, entry);
    }

    c.finish()
}

/// Renders a record under a template to PDF bytes.
pub fn render_pdf(
    record: &ResumeRecord,
    config: &'static TemplateConfig,
) -> Result<Vec<u8>, ExportError> {
    let composed = compose(record, config);
    tracing::debug!(
        pages = composed.page_count(),
        blocks = composed.block_log.len(),
        template = config.id.as_str(),
        "composed page-description output"
    );
    assemble(composed)
}

fn draw_name(c: &mut Composer, record: &ResumeRecord) {
    let size = contract::overrides(Renderer::Pdf).title_size_pt;
    let face = c.heading_face(true);
    let x = aligned_x(c, &record.full_name, face, size);
    let primary = c.config.colors.primary;
    c.draw_text(x, &record.full_name, face, size, primary);
    c.block_log.push(BlockKind::Name);
    c.advance(size + 4.0);
}

fn draw_contact(c: &mut Composer, record: &ResumeRecord) {
    let face = c.body_face(false, false);
    let size = CONTACT_SIZE_PT;
    let separator = contract::contact_separator(c.config.layout.header_alignment);
    let secondary = c.config.colors.secondary;
    let primary = c.config.colors.primary;

    enum Item<'a> {
        Plain(&'a str),
        Link { label: &'static str, uri: String },
    }
    // Reading order: phone, email, location, then the LinkedIn link.
    let mut items = Vec::new();
    for value in [&record.phone, &record.email, &record.location] {
        if !value.trim().is_empty() {
            items.push(Item::Plain(value));
        }
    }
    if record.has_linkedin() {
        let raw = record.linkedin.as_deref().unwrap_or_default();
        items.push(Item::Link {
            label: contract::LINKEDIN_LABEL,
            uri: contract::normalize_link(raw),
        });
    }

    // Measure the whole line once so centered templates can offset it.
    let line_text: Vec<&str> = items
        .iter()
        .map(|item| match item {
            Item::Plain(v) => *v,
            Item::Link { label, .. } => *label,
        })
        .collect();
    let full = line_text.join(separator);
    let mut x = aligned_x(c, &full, face, size);

    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            c.draw_text(x, separator, face, size, secondary);
            x += c.metrics(face).measure_pt(separator, size);
        }
        match item {
            Item::Plain(value) => {
                c.draw_text(x, value, face, size, secondary);
                x += c.metrics(face).measure_pt(value, size);
            }
            Item::Link { label, uri } => {
                let width = c.metrics(face).measure_pt(label, size);
                c.draw_text(x, label, face, size, primary);
                c.link(x, width, size, uri.clone());
                x += width;
            }
        }
    }
    c.advance(4.0);
    c.rule(HEADER_RULE_COLOR);
    c.block_log.push(BlockKind::Contact);
    c.advance(LINE_HEIGHT_PT);
}

/// A heading is only drawn when its first block also fits under it. The
/// largest opener is an experience entry group (header plus first bullet),
/// so reserving three lines keeps a heading off the bottom of a page in
/// every case.
fn draw_heading(c: &mut Composer, section: Section, style: SectionHeaderStyle) {
    c.advance(4.0);
    c.ensure_space(LINE_HEIGHT_PT * 3.0);
    let face = c.heading_face(true);
    let text = section.title();
    if style == SectionHeaderStyle::Shaded {
        c.shade(HEADING_SIZE_PT + 3.0);
    }
    let primary = c.config.colors.primary;
    c.draw_text(MARGIN_PT, &text, face, HEADING_SIZE_PT, primary);
    if style == SectionHeaderStyle::BorderBottom {
        c.rule(primary);
    }
    c.block_log.push(BlockKind::Heading(section));
    c.advance(LINE_HEIGHT_PT);
}

/// Wrapped body text at the left margin. Empty text still takes one line,
/// keeping the vertical rhythm of the other backends.
fn draw_paragraph(c: &mut Composer, text: &str, kind: BlockKind) {
    let face = c.body_face(false, false);
    let color = c.config.colors.text;
    let lines = wrap_text(text, c.metrics(face), BODY_SIZE_PT, CONTENT_WIDTH_PT);
    if lines.is_empty() {
        c.ensure_space(LINE_HEIGHT_PT);
        c.block_log.push(kind);
        c.advance(LINE_HEIGHT_PT);
        return;
    }
    c.block_log.push(kind);
    for line in lines {
        c.ensure_space(LINE_HEIGHT_PT);
        c.draw_text(MARGIN_PT, &line, face, BODY_SIZE_PT, color);
        c.advance(LINE_HEIGHT_PT);
    }
}

fn draw_experience(c: &mut Composer, entry: &crate::models::resume::ExperienceEntry) {
    // Keep the header line and the first bullet line together.
    c.ensure_space(LINE_HEIGHT_PT * 2.0);

    let bold = c.body_face(true, false);
    let italic = c.body_face(false, true);
    let regular = c.body_face(false, false);
    let text_color = c.config.colors.text;
    let primary = c.config.colors.primary;
    let secondary = c.config.colors.secondary;

    let company = contract::display_company(&entry.company);
    let mut x = MARGIN_PT;
    c.draw_text(x, &company, bold, BODY_SIZE_PT, primary);
    x += c.metrics(bold).measure_pt(&company, BODY_SIZE_PT);
    c.draw_text(x, contract::ENTRY_SEPARATOR, regular, BODY_SIZE_PT, text_color);
    x += c
        .metrics(regular)
        .measure_pt(contract::ENTRY_SEPARATOR, BODY_SIZE_PT);
    c.draw_text(x, &entry.role, italic, BODY_SIZE_PT, text_color);

    let period_width = c.metrics(regular).measure_pt(&entry.period, PERIOD_SIZE_PT);
    c.draw_text(
        PAGE_WIDTH_PT - MARGIN_PT - period_width,
        &entry.period,
        regular,
        PERIOD_SIZE_PT,
        secondary,
    );
    c.block_log.push(BlockKind::EntryHeader);
    c.advance(LINE_HEIGHT_PT);

    for bullet in &entry.description {
        draw_bullet(c, bullet);
    }
    c.advance(3.0);
}

fn draw_bullet(c: &mut Composer, text: &str) {
    let face = c.body_face(false, false);
    let color = c.config.colors.text;
    let text_x = MARGIN_PT + BULLET_INDENT_PT;
    let width = CONTENT_WIDTH_PT - BULLET_INDENT_PT;
    let lines = wrap_text(text, c.metrics(face), BODY_SIZE_PT, width);

    c.ensure_space(LINE_HEIGHT_PT);
    c.draw_text(MARGIN_PT, "•", face, BODY_SIZE_PT, color);
    c.block_log.push(BlockKind::Bullet);
    if lines.is_empty() {
        c.advance(LINE_HEIGHT_PT);
        return;
    }
    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            c.ensure_space(LINE_HEIGHT_PT);
        }
        c.draw_text(text_x, line, face, BODY_SIZE_PT, color);
        c.advance(LINE_HEIGHT_PT);
    }
}

fn draw_education(c: &mut Composer, entry: &crate::models::resume::EducationEntry) {
    c.ensure_space(LINE_HEIGHT_PT);
    let bold = c.body_face(true, false);
    let italic = c.body_face(false, true);
    let regular = c.body_face(false, false);
    let text_color = c.config.colors.text;
    let primary = c.config.colors.primary;
    let secondary = c.config.colors.secondary;

    let mut x = MARGIN_PT;
    c.draw_text(x, &entry.institution, bold, BODY_SIZE_PT, primary);
    x += c.metrics(bold).measure_pt(&entry.institution, BODY_SIZE_PT);
    c.draw_text(x, contract::ENTRY_SEPARATOR, regular, BODY_SIZE_PT, text_color);
    x += c
        .metrics(regular)
        .measure_pt(contract::ENTRY_SEPARATOR, BODY_SIZE_PT);
    c.draw_text(x, &entry.degree, italic, BODY_SIZE_PT, text_color);

    let period_width = c.metrics(regular).measure_pt(&entry.period, PERIOD_SIZE_PT);
    c.draw_text(
        PAGE_WIDTH_PT - MARGIN_PT - period_width,
        &entry.period,
        regular,
        PERIOD_SIZE_PT,
        secondary,
    );
    c.block_log.push(BlockKind::Education);
    c.advance(LINE_HEIGHT_PT);
}

fn aligned_x(c: &Composer, text: &str, face: Face, size: f32) -> f32 {
    match c.config.layout.header_alignment {
        HeaderAlignment::Left => MARGIN_PT,
        HeaderAlignment::Center => {
            let width = c.metrics(face).measure_pt(text, size);
            ((PAGE_WIDTH_PT - width) / 2.0).max(MARGIN_PT)
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Document assembly
// ────────────────────────────────────────────────────────────────────────────

fn assemble(composed: ComposedDocument) -> Result<Vec<u8>, ExportError> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_ids: Vec<_> = [
        "Helvetica",
        "Helvetica-Bold",
        "Helvetica-Oblique",
        "Times-Roman",
        "Times-Bold",
        "Times-Italic",
    ]
    .into_iter()
    .map(|base| {
        doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => base,
            "Encoding" => "WinAnsiEncoding",
        })
    })
    .collect();

    let font_dict = dictionary! {
        "F1" => font_ids[0],
        "F2" => font_ids[1],
        "F3" => font_ids[2],
        "F4" => font_ids[3],
        "F5" => font_ids[4],
        "F6" => font_ids[5],
    };
    let resources_id = doc.add_object(dictionary! { "Font" => font_dict });

    let mut kids = Vec::new();
    let page_count = composed.pages.len();
    for page in composed.pages {
        let content = Content {
            operations: page.ops,
        };
        let encoded = content
            .encode()
            .map_err(|e| ExportError::Serialization(e.to_string()))?;
        let content_id = doc.add_object(Stream::new(dictionary! {}, encoded));

        let mut page_dict = dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![0.into(), 0.into(), PAGE_WIDTH_PT.into(), PAGE_HEIGHT_PT.into()],
            "Contents" => content_id,
            "Resources" => resources_id,
        };

        if !page.links.is_empty() {
            let annots: Vec<Object> = page
                .links
                .into_iter()
                .map(|link| {
                    let id = doc.add_object(dictionary! {
                        "Type" => "Annot",
                        "Subtype" => "Link",
                        "Rect" => vec![
                            link.rect[0].into(),
                            link.rect[1].into(),
                            link.rect[2].into(),
                            link.rect[3].into(),
                        ],
                        "Border" => vec![0.into(), 0.into(), 0.into()],
                        "A" => dictionary! {
                            "Type" => "Action",
                            "S" => "URI",
                            "URI" => Object::string_literal(link.uri),
                        },
                    });
                    Object::Reference(id)
                })
                .collect();
            page_dict.set("Annots", annots);
        }

        let page_id = doc.add_object(page_dict);
        kids.push(Object::Reference(page_id));
    }

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => page_count as i64,
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut buffer = Vec::new();
    doc.save_to(&mut std::io::Cursor::new(&mut buffer))
        .map_err(|e| ExportError::Serialization(e.to_string()))?;
    Ok(buffer)
}

/// WinAnsi (CP1252) encoding: ASCII and Latin-1 pass through, the common
/// typographic characters map into 0x80..0x9F, everything else becomes `?`.
fn encode_winansi(s: &str) -> Vec<u8> {
    s.chars()
        .map(|c| match c {
            '\u{20}'..='\u{7E}' => c as u8,
            '\u{2022}' => 0x95, // bullet
            '\u{2013}' => 0x96, // en dash
            '\u{2014}' => 0x97, // em dash
            '\u{2018}' => 0x91,
            '\u{2019}' => 0x92,
            '\u{201C}' => 0x93,
            '\u{201D}' => 0x94,
            '\u{2026}' => 0x85,
            '\u{20AC}' => 0x80,
            '\u{A0}'..='\u{FF}' => c as u8,
            _ => b'?',
        })
        .collect()
}

fn rgb(hex: &str) -> (f32, f32, f32) {
    let channel = |i: usize| {
        u8::from_str_radix(&hex[i..i + 2], 16)
            .map(|v| f32::from(v) / 255.0)
            .unwrap_or(0.0)
    };
    if hex.len() != 6 {
        return (0.0, 0.0, 0.0);
    }
    (channel(0), channel(2), channel(4))
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{EducationEntry, ExperienceEntry};
    use crate::templates::{self, TemplateId};

    fn sample_record() -> ResumeRecord {
        ResumeRecord {
            full_name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            phone: "+1 555 0100".to_string(),
            location: "Berlin".to_string(),
            linkedin: Some("linkedin.com/in/jane".to_string()),
            summary: "Backend engineer focused on billing and payments.".to_string(),
            skills: vec!["Go".to_string(), "Rust".to_string(), "SQL".to_string()],
            experience: vec![ExperienceEntry {
                company: "ACME".to_string(),
                role: "Staff Engineer".to_string(),
                period: "2020 – 2024".to_string(),
                description: vec!["Led the payments replatform.".to_string()],
            }],
            education: vec![EducationEntry {
                institution: "TU Berlin".to_string(),
                degree: "BSc Computer Science".to_string(),
                period: "2012 – 2016".to_string(),
            }],
        }
    }

    fn long_record(entries: usize) -> ResumeRecord {
        let mut record = sample_record();
        record.experience = (0..entries)
            .map(|i| ExperienceEntry {
                company: format!("Company {i}"),
                role: format!("Engineer {i}"),
                period: "2010 – 2012".to_string(),
                description: vec![
                    "Designed and operated a data ingestion pipeline handling clickstream \
                     events at forty thousand requests per second across three regions."
                        .to_string();
                    4
                ],
            })
            .collect();
        record
    }

    #[test]
    fn test_output_starts_with_pdf_magic() {
        let bytes =
            render_pdf(&sample_record(), templates::get(TemplateId::Modern)).expect("render");
        assert_eq!(&bytes[..5], b"%PDF-");
    }

    #[test]
    fn test_short_record_fits_one_page() {
        let composed = compose(&sample_record(), templates::get(TemplateId::Modern));
        assert_eq!(composed.page_count(), 1);
        assert!(!composed.block_log.contains(&BlockKind::PageBreak));
    }

    #[test]
    fn test_long_record_flows_onto_further_pages() {
        let composed = compose(&long_record(10), templates::get(TemplateId::Modern));
        assert!(
            composed.page_count() >= 2,
            "10 four-bullet entries cannot fit one A4 page"
        );
    }

    #[test]
    fn test_no_heading_is_orphaned_at_a_page_bottom() {
        for entries in 1..=14 {
            let composed = compose(&long_record(entries), templates::get(TemplateId::Modern));
            for window in composed.block_log.windows(2) {
                assert!(
                    !(matches!(window[0], BlockKind::Heading(_))
                        && window[1] == BlockKind::PageBreak),
                    "heading directly before a page break with {entries} entries: {:?}",
                    composed.block_log
                );
            }
        }
    }

    #[test]
    fn test_entry_header_keeps_its_first_bullet() {
        for entries in 1..=14 {
            let composed = compose(&long_record(entries), templates::get(TemplateId::Modern));
            for window in composed.block_log.windows(2) {
                assert!(
                    !(window[0] == BlockKind::EntryHeader && window[1] == BlockKind::PageBreak),
                    "entry header split from its body with {entries} entries"
                );
            }
        }
    }

    #[test]
    fn test_all_sections_logged_even_for_empty_record() {
        let composed = compose(&ResumeRecord::default(), templates::get(TemplateId::Classic));
        let headings: Vec<_> = composed
            .block_log
            .iter()
            .filter_map(|b| match b {
                BlockKind::Heading(section) => Some(*section),
                _ => None,
            })
            .collect();
        assert_eq!(headings, Section::ALL.to_vec());
    }

    #[test]
    fn test_linkedin_produces_one_link_annotation() {
        let composed = compose(&sample_record(), templates::get(TemplateId::Modern));
        let links: Vec<_> = composed.pages.iter().flat_map(|p| &p.links).collect();
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].uri, "https://linkedin.com/in/jane");
    }

    #[test]
    fn test_no_linkedin_means_no_annotation() {
        let mut record = sample_record();
        record.linkedin = None;
        let composed = compose(&record, templates::get(TemplateId::Modern));
        assert!(composed.pages.iter().all(|p| p.links.is_empty()));
    }

    #[test]
    fn test_winansi_maps_typographic_characters() {
        assert_eq!(encode_winansi("a•b"), vec![b'a', 0x95, b'b']);
        assert_eq!(encode_winansi("2020 – 2024"), b"2020 \x96 2024".to_vec());
        assert_eq!(encode_winansi("日本"), vec![b'?', b'?']);
        assert_eq!(encode_winansi("café"), vec![b'c', b'a', b'f', 0xE9]);
    }

    #[test]
    fn test_rgb_parses_palette_hex() {
        let (r, g, b) = rgb("2563EB");
        assert!((r - 0x25 as f32 / 255.0).abs() < 1e-6);
        assert!((g - 0x63 as f32 / 255.0).abs() < 1e-6);
        assert!((b - 0xEB as f32 / 255.0).abs() < 1e-6);
        assert_eq!(rgb("xyz"), (0.0, 0.0, 0.0));
    }
}
