use std::fs;
use std::path::Path;

use docx_rs::{
    AbstractNumbering, Docx, IndentLevel, Level, LevelJc, LevelText, NumberFormat, Numbering,
    NumberingId, Paragraph, Run, Start, Style, StyleType,
};

use crate::error::{AppError, AppResult};

const BULLET_NUMBERING: usize = 1;

/// One classified report line. The classifier is a single pass over line
/// prefixes; adding an element kind means adding a variant and a match arm.
#[derive(Debug, Clone, PartialEq)]
pub enum DocElement {
    Heading1(String),
    Heading2(String),
    Bullet(String),
    Paragraph(String),
    Blank,
}

pub fn classify_line(line: &str) -> DocElement {
    if let Some(rest) = line.strip_prefix("## ") {
        DocElement::Heading2(rest.to_string())
    } else if let Some(rest) = line.strip_prefix("# ") {
        DocElement::Heading1(rest.to_string())
    } else if let Some(rest) = line.strip_prefix("- ") {
        DocElement::Bullet(rest.to_string())
    } else if line.trim().is_empty() {
        DocElement::Blank
    } else {
        DocElement::Paragraph(line.to_string())
    }
}

/// Maps the classified report lines onto a word-processor document and saves
/// it at `path`. Blank lines carry no element.
pub fn write_docx(report_text: &str, path: &Path) -> AppResult<()> {
    let mut docx = Docx::new()
        .add_style(
            Style::new("Heading1", StyleType::Paragraph)
                .name("Heading 1")
                .size(32)
                .bold(),
        )
        .add_style(
            Style::new("Heading2", StyleType::Paragraph)
                .name("Heading 2")
                .size(26)
                .bold(),
        )
        .add_abstract_numbering(AbstractNumbering::new(BULLET_NUMBERING).add_level(Level::new(
            0,
            Start::new(1),
            NumberFormat::new("bullet"),
            LevelText::new("•"),
            LevelJc::new("left"),
        )))
        .add_numbering(Numbering::new(BULLET_NUMBERING, BULLET_NUMBERING));

    for element in report_text.lines().map(classify_line) {
        docx = match element {
            DocElement::Heading1(text) => docx.add_paragraph(
                Paragraph::new()
                    .add_run(Run::new().add_text(text))
                    .style("Heading1"),
            ),
            DocElement::Heading2(text) => docx.add_paragraph(
                Paragraph::new()
                    .add_run(Run::new().add_text(text))
                    .style("Heading2"),
            ),
            DocElement::Bullet(text) => docx.add_paragraph(
                Paragraph::new()
                    .add_run(Run::new().add_text(text))
                    .numbering(NumberingId::new(BULLET_NUMBERING), IndentLevel::new(0)),
            ),
            DocElement::Paragraph(text) => {
                docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text(text)))
            }
            DocElement::Blank => docx,
        };
    }

    let file = fs::File::create(path).map_err(|e| AppError::write(path, e))?;
    docx.build()
        .pack(file)
        .map_err(|e| AppError::write(path, e))?;

    Ok(())
}
