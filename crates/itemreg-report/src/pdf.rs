//! PDF backend: serializes a [`ReportDocument`] with the standard Helvetica
//! fonts, so no font data is embedded.

use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, Stream, StringFormat, dictionary};

use crate::layout::{Align, DrawOp, Font, PAGE_HEIGHT, PAGE_WIDTH, ReportDocument, Rgb};
use crate::metrics::text_width;
use crate::{Error, Result};

const PT_PER_MM: f32 = 72.0 / 25.4;

fn pt(mm: f32) -> f32 {
    mm * PT_PER_MM
}

/// Layout y grows downwards from the top edge; PDF y grows upwards
fn flip_y(mm: f32) -> f32 {
    pt(PAGE_HEIGHT - mm)
}

fn font_resource(font: Font) -> &'static str {
    match font {
        Font::Regular => "F1",
        Font::Bold => "F2",
        Font::Italic => "F3",
    }
}

fn fill_color(color: Rgb) -> Operation {
    Operation::new(
        "rg",
        vec![
            (f32::from(color.0) / 255.0).into(),
            (f32::from(color.1) / 255.0).into(),
            (f32::from(color.2) / 255.0).into(),
        ],
    )
}

/// Encode text for a WinAnsiEncoding font.
///
/// Latin-1 maps one to one; the few typographic characters the report uses
/// live in the 0x80..0x9F block. Anything else becomes `?`.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            '\u{20}'..='\u{7e}' | '\u{a0}'..='\u{ff}' => c as u8,
            '\u{20ac}' => 0x80,
            '\u{2026}' => 0x85,
            '\u{2018}' => 0x91,
            '\u{2019}' => 0x92,
            '\u{201c}' => 0x93,
            '\u{201d}' => 0x94,
            '\u{2022}' => 0x95,
            '\u{2013}' => 0x96,
            '\u{2014}' => 0x97,
            _ => b'?',
        })
        .collect()
}

fn draw_ops(op: &DrawOp) -> Vec<Operation> {
    match op {
        DrawOp::Text {
            x,
            y,
            text,
            style,
            align,
        } => {
            let x_pt = match align {
                Align::Left => pt(*x),
                Align::Center => pt(*x) - text_width(text, style.font, style.size) / 2.0,
            };
            vec![
                Operation::new("BT", vec![]),
                Operation::new(
                    "Tf",
                    vec![font_resource(style.font).into(), style.size.into()],
                ),
                fill_color(style.color),
                Operation::new("Td", vec![x_pt.into(), flip_y(*y).into()]),
                Operation::new(
                    "Tj",
                    vec![Object::String(encode_win_ansi(text), StringFormat::Literal)],
                ),
                Operation::new("ET", vec![]),
            ]
        }
        DrawOp::FillRect {
            x,
            y,
            width,
            height,
            color,
        } => vec![
            fill_color(*color),
            Operation::new(
                "re",
                vec![
                    pt(*x).into(),
                    flip_y(y + height).into(),
                    pt(*width).into(),
                    pt(*height).into(),
                ],
            ),
            Operation::new("f", vec![]),
        ],
        DrawOp::Line {
            x1,
            y1,
            x2,
            y2,
            width,
        } => vec![
            Operation::new("w", vec![pt(*width).into()]),
            Operation::new("G", vec![0.into()]),
            Operation::new("m", vec![pt(*x1).into(), flip_y(*y1).into()]),
            Operation::new("l", vec![pt(*x2).into(), flip_y(*y2).into()]),
            Operation::new("S", vec![]),
        ],
    }
}

/// Serialize the document to PDF bytes
pub fn render_pdf(report: &ReportDocument) -> Result<Vec<u8>> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let mut fonts = lopdf::Dictionary::new();
    for (name, base_font) in [
        ("F1", "Helvetica"),
        ("F2", "Helvetica-Bold"),
        ("F3", "Helvetica-Oblique"),
    ] {
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => base_font,
            "Encoding" => "WinAnsiEncoding",
        });
        fonts.set(name, font_id);
    }
    let resources_id = doc.add_object(dictionary! {
        "Font" => fonts,
    });

    let mut kids: Vec<Object> = Vec::with_capacity(report.pages.len());
    for page in &report.pages {
        let content: Content<Vec<Operation>> = Content {
            operations: page.ops.iter().flat_map(draw_ops).collect(),
        };
        let encoded = content.encode().map_err(|e| Error::Pdf(e.to_string()))?;
        let content_id = doc.add_object(Stream::new(dictionary! {}, encoded));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    let page_count = kids.len() as i64;
    let pages = dictionary! {
        "Type" => "Pages",
        "Kids" => kids,
        "Count" => page_count,
        "Resources" => resources_id,
        "MediaBox" => vec![0.into(), 0.into(), pt(PAGE_WIDTH).into(), pt(PAGE_HEIGHT).into()],
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages));

    let info_id = doc.add_object(dictionary! {
        "Title" => Object::String(encode_win_ansi(&report.title), StringFormat::Literal),
        "Producer" => Object::string_literal("itemreg"),
    });
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc.trailer.set("Info", info_id);
    doc.compress();

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes)
        .map_err(|e| Error::Pdf(e.to_string()))?;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_win_ansi() {
        assert_eq!(encode_win_ansi("Órgão"), vec![0xd3, b'r', b'g', 0xe3, b'o']);
        assert_eq!(encode_win_ansi("a \u{2022} b"), vec![b'a', b' ', 0x95, b' ', b'b']);
        assert_eq!(encode_win_ansi("R$\u{a0}1"), vec![b'R', b'$', 0xa0, b'1']);
        assert_eq!(encode_win_ansi("日"), vec![b'?']);
    }

    #[test]
    fn test_flip_y() {
        assert!((flip_y(PAGE_HEIGHT) - 0.0).abs() < 1e-3);
        assert!((flip_y(0.0) - 841.89).abs() < 0.01);
    }
}
