//! Word-processor export.
//!
//! Everything here is in the format's native units: font sizes in
//! half-points, distances in twips (1/20pt). The layout contract's point
//! values convert exactly, so the .docx page mirrors the preview: A4, half
//! inch margins, one bullet list style with a hanging indent, a right tab
//! stop carrying each entry's period to the margin.

use std::io::Cursor;

use docx_rs::{
    AbstractNumbering, AlignmentType, BorderType, Docx, Hyperlink, HyperlinkType, IndentLevel,
    Level, LevelJc, LevelText, LineSpacing, Numbering, NumberingId, NumberFormat, PageMargin,
    Paragraph, ParagraphBorder, ParagraphBorderPosition, ParagraphBorders, Run, RunFonts,
    SpecialIndentType, Start, Tab, TabValueType,
};

use crate::export::ExportError;
use crate::layout::contract::{
    self, Renderer, Section, BODY_SIZE_PT, CONTACT_SIZE_PT, HEADER_RULE_COLOR, HEADING_SIZE_PT,
    MARGIN_TWIPS, PAGE_HEIGHT_TWIPS, PAGE_WIDTH_TWIPS, PERIOD_SIZE_PT,
};
use crate::models::resume::ResumeRecord;
use crate::templates::{HeaderAlignment, SectionHeaderStyle, TemplateConfig};

const BULLET_NUM_ID: usize = 1;
/// Right tab stop: page width minus both margins, in twips.
const RIGHT_TAB_POS: usize = (PAGE_WIDTH_TWIPS as usize) - 2 * (MARGIN_TWIPS as usize);

fn half_points(pt: f32) -> usize {
    (pt * 2.0).round() as usize
}

/// Renders a record under a template to .docx bytes.
pub fn render_docx(
    record: &ResumeRecord,
    config: &'static TemplateConfig,
) -> Result<Vec<u8>, ExportError> {
    let fonts = RunFonts::new()
        .ascii(config.fonts.body)
        .hi_ansi(config.fonts.body);

    let mut docx = Docx::new()
        .page_size(PAGE_WIDTH_TWIPS, PAGE_HEIGHT_TWIPS)
        .page_margin(
            PageMargin::new()
                .top(MARGIN_TWIPS)
                .bottom(MARGIN_TWIPS)
                .left(MARGIN_TWIPS)
                .right(MARGIN_TWIPS),
        )
        .default_fonts(fonts)
        .default_size(half_points(BODY_SIZE_PT))
        .add_abstract_numbering(bullet_numbering())
        .add_numbering(Numbering::new(BULLET_NUM_ID, BULLET_NUM_ID));

    docx = docx.add_paragraph(name_paragraph(record, config));
    docx = docx.add_paragraph(contact_paragraph(record, config));

    docx = docx.add_paragraph(section_heading(Section::Summary, config));
    docx = docx.add_paragraph(
        Paragraph::new()
            .line_spacing(LineSpacing::new().after(120))
            .add_run(body_run(&record.summary, config)),
    );

    docx = docx.add_paragraph(section_heading(Section::Skills, config));
    docx = docx.add_paragraph(
        Paragraph::new()
            .line_spacing(LineSpacing::new().after(120))
            .add_run(body_run(&contract::join_skills(&record.skills), config)),
    );

    docx = docx.add_paragraph(section_heading(Section::Experience, config));
    for entry in &record.experience {
        docx = docx.add_paragraph(
            Paragraph::new()
                .add_tab(Tab::new().val(TabValueType::Right).pos(RIGHT_TAB_POS))
                .line_spacing(LineSpacing::new().before(80).after(40))
                .add_run(
                    Run::new()
                        .add_text(contract::display_company(&entry.company))
                        .size(half_points(BODY_SIZE_PT))
                        .bold()
                        .color(config.colors.primary),
                )
                .add_run(body_run(contract::ENTRY_SEPARATOR, config))
                .add_run(body_run(&entry.role, config).italic())
                .add_run(
                    Run::new()
                        .add_tab()
                        .add_text(&entry.period)
                        .size(half_points(PERIOD_SIZE_PT))
                        .color(config.colors.secondary),
                ),
        );
        // Empty bullets stay: the list shape is part of the record.
        for bullet in &entry.description {
            docx = docx.add_paragraph(
                Paragraph::new()
                    .numbering(NumberingId::new(BULLET_NUM_ID), IndentLevel::new(0))
                    .add_run(body_run(bullet, config)),
            );
        }
    }

    docx = docx.add_paragraph(section_heading(Section::Education, config));
    for entry in &record.education {
        docx = docx.add_paragraph(
            Paragraph::new()
                .add_tab(Tab::new().val(TabValueType::Right).pos(RIGHT_TAB_POS))
                .add_run(
                    Run::new()
                        .add_text(&entry.institution)
                        .size(half_points(BODY_SIZE_PT))
                        .bold()
                        .color(config.colors.primary),
                )
                .add_run(body_run(contract::ENTRY_SEPARATOR, config))
                .add_run(body_run(&entry.degree, config).italic())
                .add_run(
                    Run::new()
                        .add_tab()
                        .add_text(&entry.period)
                        .size(half_points(PERIOD_SIZE_PT))
                        .color(config.colors.secondary),
                ),
        );
    }

    let mut cursor = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut cursor)
        .map_err(|e| ExportError::Serialization(e.to_string()))?;
    Ok(cursor.into_inner())
}

fn alignment(config: &TemplateConfig) -> AlignmentType {
    match config.layout.header_alignment {
        HeaderAlignment::Left => AlignmentType::Left,
        HeaderAlignment::Center => AlignmentType::Center,
    }
}

fn body_run(text: &str, config: &TemplateConfig) -> Run {
    Run::new()
        .add_text(text)
        .size(half_points(BODY_SIZE_PT))
        .color(config.colors.text)
}

fn name_paragraph(record: &ResumeRecord, config: &'static TemplateConfig) -> Paragraph {
    let title_pt = contract::overrides(Renderer::Docx).title_size_pt;
    Paragraph::new()
        .align(alignment(config))
        .line_spacing(LineSpacing::new().after(40))
        .add_run(
            Run::new()
                .add_text(&record.full_name)
                .size(half_points(title_pt))
                .bold()
                .color(config.colors.primary),
        )
}

/// Contact line: phone, email, location, then LinkedIn, populated fields
/// joined by the template separator, a thin rule underneath. Email becomes
/// a mailto link; LinkedIn a fixed-label link. Neither URL is printed as
/// visible text.
fn contact_paragraph(record: &ResumeRecord, config: &'static TemplateConfig) -> Paragraph {
    let separator = contract::contact_separator(config.layout.header_alignment);
    let contact_run = |text: &str| {
        Run::new()
            .add_text(text)
            .size(half_points(CONTACT_SIZE_PT))
            .color(config.colors.secondary)
    };
    let link_run = |text: &str| {
        Run::new()
            .add_text(text)
            .size(half_points(CONTACT_SIZE_PT))
            .color(config.colors.primary)
    };

    let mut paragraph = Paragraph::new()
        .align(alignment(config))
        .line_spacing(LineSpacing::new().after(160))
        .set_borders(ParagraphBorders::with_empty().set(
            ParagraphBorder::new(ParagraphBorderPosition::Bottom)
                .val(BorderType::Single)
                .size(4)
                .color(HEADER_RULE_COLOR),
        ));

    let mut first = true;
    let mut sep = |p: Paragraph, first: &mut bool| {
        if *first {
            *first = false;
            p
        } else {
            p.add_run(contact_run(separator))
        }
    };

    if !record.phone.trim().is_empty() {
        paragraph = sep(paragraph, &mut first).add_run(contact_run(&record.phone));
    }
    if !record.email.trim().is_empty() {
        paragraph = sep(paragraph, &mut first).add_hyperlink(
            Hyperlink::new(format!("mailto:{}", record.email), HyperlinkType::External)
                .add_run(link_run(&record.email)),
        );
    }
    if !record.location.trim().is_empty() {
        paragraph = sep(paragraph, &mut first).add_run(contact_run(&record.location));
    }
    if record.has_linkedin() {
        let raw = record.linkedin.as_deref().unwrap_or_default();
        paragraph = sep(paragraph, &mut first).add_hyperlink(
            Hyperlink::new(contract::normalize_link(raw), HyperlinkType::External)
                .add_run(link_run(contract::LINKEDIN_LABEL)),
        );
    }
    paragraph
}

fn section_heading(section: Section, config: &'static TemplateConfig) -> Paragraph {
    let style = config.layout.section_header_style;
    let mut run = Run::new()
        .add_text(section.title())
        .size(half_points(HEADING_SIZE_PT))
        .bold()
        .color(config.colors.primary);
    if style == SectionHeaderStyle::Shaded {
        run = run.highlight("lightGray");
    }
    let mut paragraph = Paragraph::new()
        .line_spacing(LineSpacing::new().before(200).after(80))
        .add_run(run);
    if style == SectionHeaderStyle::BorderBottom {
        paragraph = paragraph.set_borders(ParagraphBorders::with_empty().set(
            ParagraphBorder::new(ParagraphBorderPosition::Bottom)
                .val(BorderType::Single)
                .size(4)
                .color(config.colors.primary),
        ));
    }
    paragraph
}

fn bullet_numbering() -> AbstractNumbering {
    AbstractNumbering::new(BULLET_NUM_ID).add_level(
        Level::new(
            0,
            Start::new(1),
            NumberFormat::new("bullet"),
            LevelText::new("•"),
            LevelJc::new("left"),
        )
        .indent(Some(240), Some(SpecialIndentType::Hanging(160)), None, None),
    )
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{EducationEntry, ExperienceEntry};
    use crate::templates::{self, TemplateId};
    use std::io::Read;

    fn sample_record() -> ResumeRecord {
        ResumeRecord {
            full_name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            phone: "+1 555 0100".to_string(),
            location: "Berlin".to_string(),
            linkedin: Some("linkedin.com/in/jane".to_string()),
            summary: "Backend engineer with a decade of billing systems.".to_string(),
            skills: vec!["Go".to_string(), "Rust".to_string(), "SQL".to_string()],
            experience: vec![ExperienceEntry {
                company: "ACME".to_string(),
                role: "Staff Engineer".to_string(),
                period: "2020 – 2024".to_string(),
                description: vec![
                    "Led the payments replatform.".to_string(),
                    "Cut invoice latency by 40%.".to_string(),
                ],
            }],
            education: vec![EducationEntry {
                institution: "TU Berlin".to_string(),
                degree: "BSc Computer Science".to_string(),
                period: "2012 – 2016".to_string(),
            }],
        }
    }

    fn zip_entry(bytes: &[u8], name: &str) -> String {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).expect("valid zip container");
        let mut file = archive.by_name(name).expect(name);
        let mut content = String::new();
        file.read_to_string(&mut content).expect("utf-8 entry");
        content
    }

    #[test]
    fn test_output_is_a_zip_container() {
        let bytes =
            render_docx(&sample_record(), templates::get(TemplateId::Modern)).expect("render");
        assert_eq!(&bytes[..2], b"PK", "docx must start with the zip magic");
        zip_entry(&bytes, "word/document.xml");
    }

    #[test]
    fn test_skills_are_one_joined_line() {
        let bytes =
            render_docx(&sample_record(), templates::get(TemplateId::Modern)).expect("render");
        let xml = zip_entry(&bytes, "word/document.xml");
        assert!(
            xml.contains("Go  •  Rust  •  SQL"),
            "skills must be a single separator-joined paragraph"
        );
    }

    #[test]
    fn test_headings_are_all_caps_for_every_template() {
        for id in [TemplateId::Modern, TemplateId::Classic, TemplateId::Minimalist] {
            let bytes = render_docx(&sample_record(), templates::get(id)).expect("render");
            let xml = zip_entry(&bytes, "word/document.xml");
            assert!(xml.contains("PROFESSIONAL EXPERIENCE"), "caps heading for {id:?}");
            assert!(!xml.contains("Professional Experience"), "no title case for {id:?}");
        }
    }

    #[test]
    fn test_skills_section_precedes_experience() {
        let bytes =
            render_docx(&sample_record(), templates::get(TemplateId::Modern)).expect("render");
        let xml = zip_entry(&bytes, "word/document.xml");
        let skills = xml.find("CORE COMPETENCIES").expect("skills heading");
        let experience = xml.find("PROFESSIONAL EXPERIENCE").expect("experience heading");
        assert!(skills < experience, "skills section renders before experience");
    }

    #[test]
    fn test_contact_line_reads_phone_before_email() {
        let bytes =
            render_docx(&sample_record(), templates::get(TemplateId::Modern)).expect("render");
        let xml = zip_entry(&bytes, "word/document.xml");
        let phone = xml.find("+1 555 0100").expect("phone present");
        let email = xml.find("jane@example.com").expect("email present");
        assert!(
            phone < email,
            "phone must precede email; got phone at {phone}, email at {email}"
        );
    }

    #[test]
    fn test_hyperlinks_use_normalized_targets() {
        let bytes =
            render_docx(&sample_record(), templates::get(TemplateId::Modern)).expect("render");
        let rels = zip_entry(&bytes, "word/_rels/document.xml.rels");
        assert!(rels.contains("https://linkedin.com/in/jane"));
        assert!(rels.contains("mailto:jane@example.com"));
        let xml = zip_entry(&bytes, "word/document.xml");
        assert!(xml.contains("LinkedIn"), "link shows the fixed label");
        assert!(
            !xml.contains("linkedin.com/in/jane"),
            "raw URL never appears as visible text"
        );
    }

    #[test]
    fn test_absent_linkedin_leaves_no_trace() {
        let mut record = sample_record();
        record.linkedin = None;
        let bytes = render_docx(&record, templates::get(TemplateId::Modern)).expect("render");
        let xml = zip_entry(&bytes, "word/document.xml");
        let rels = zip_entry(&bytes, "word/_rels/document.xml.rels");
        assert!(!xml.contains("LinkedIn"));
        assert!(!rels.contains("linkedin"));
    }

    #[test]
    fn test_company_displays_upper_cased() {
        let mut record = sample_record();
        record.experience[0].company = "Acme Logistics".to_string();
        let bytes = render_docx(&record, templates::get(TemplateId::Modern)).expect("render");
        let xml = zip_entry(&bytes, "word/document.xml");
        assert!(xml.contains("ACME LOGISTICS"));
        assert!(!xml.contains("Acme Logistics"), "stored casing never printed");
    }

    #[test]
    fn test_empty_record_still_emits_all_headings() {
        let bytes =
            render_docx(&ResumeRecord::default(), templates::get(TemplateId::Classic))
                .expect("render");
        let xml = zip_entry(&bytes, "word/document.xml");
        for heading in [
            "PROFESSIONAL SUMMARY",
            "CORE COMPETENCIES",
            "PROFESSIONAL EXPERIENCE",
            "EDUCATION",
        ] {
            assert!(xml.contains(heading), "missing heading {heading}");
        }
    }

    #[test]
    fn test_page_geometry_is_a4_with_half_inch_margins() {
        let bytes =
            render_docx(&sample_record(), templates::get(TemplateId::Modern)).expect("render");
        let xml = zip_entry(&bytes, "word/document.xml");
        assert!(xml.contains("11906"));
        assert!(xml.contains("16838"));
        assert!(xml.contains("720"));
    }

    #[test]
    fn test_empty_bullet_is_preserved() {
        let mut record = sample_record();
        record.experience[0].description.push(String::new());
        let bytes = render_docx(&record, templates::get(TemplateId::Modern)).expect("render");
        let xml = zip_entry(&bytes, "word/document.xml");
        // Three numbered paragraphs, not two.
        assert_eq!(xml.matches("<w:numPr>").count(), 3);
    }
}
