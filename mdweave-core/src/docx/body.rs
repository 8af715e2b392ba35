//! word/document.xml generation
//!
//! One WordprocessingML paragraph per block, in block order. Text runs
//! carry explicit fonts for body and code paragraphs; headings and list
//! items defer to their paragraph styles.

use super::parts::escape;
use super::EMU_PER_INCH;
use crate::document::{Block, Document, EmbeddedImage, StyleSettings};

/// Relationship ids rId1/rId2 are taken by styles and numbering; image
/// relationships start after them.
pub(crate) const FIRST_IMAGE_REL: usize = 3;

pub(crate) fn document_xml(doc: &Document, styles: &StyleSettings) -> String {
    let mut body = String::new();
    let mut image_index = 0usize;

    for block in &doc.blocks {
        match block {
            Block::Heading { level, text } => {
                body.push_str(&format!(
                    "<w:p><w:pPr><w:pStyle w:val=\"Heading{level}\"/></w:pPr>{}</w:p>",
                    text_run(text, None)
                ));
            }
            Block::Paragraph(text) => {
                body.push_str(&format!(
                    "<w:p>{}</w:p>",
                    text_run(text, Some((&styles.body_font, styles.body_size_pt)))
                ));
            }
            Block::Code(code) => {
                body.push_str(&code_paragraph(code, styles));
            }
            Block::BulletItem(text) => {
                body.push_str(&list_paragraph("ListBullet", 1, text));
            }
            Block::NumberedItem(text) => {
                body.push_str(&list_paragraph("ListNumber", 2, text));
            }
            Block::Image(image) => {
                image_index += 1;
                body.push_str(&image_paragraph(image, image_index, styles));
            }
            Block::Blank => {
                body.push_str("<w:p/>");
            }
        }
    }

    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\n\
         <w:document \
         xmlns:w=\"http://schemas.openxmlformats.org/wordprocessingml/2006/main\" \
         xmlns:r=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships\" \
         xmlns:wp=\"http://schemas.openxmlformats.org/drawingml/2006/wordprocessingDrawing\">\
         <w:body>{body}\
         <w:sectPr>\
         <w:pgSz w:w=\"12240\" w:h=\"15840\"/>\
         <w:pgMar w:top=\"1440\" w:right=\"1440\" w:bottom=\"1440\" w:left=\"1440\"/>\
         </w:sectPr>\
         </w:body></w:document>"
    )
}

/// A single run, optionally with explicit font/size run properties.
fn text_run(text: &str, font: Option<(&str, u32)>) -> String {
    let props = match font {
        Some((name, size_pt)) => run_props(name, size_pt),
        None => String::new(),
    };
    format!(
        "<w:r>{props}<w:t xml:space=\"preserve\">{}</w:t></w:r>",
        escape(text)
    )
}

fn run_props(font: &str, size_pt: u32) -> String {
    let half_points = size_pt * 2;
    format!(
        "<w:rPr><w:rFonts w:ascii=\"{font}\" w:hAnsi=\"{font}\"/>\
         <w:sz w:val=\"{half_points}\"/><w:szCs w:val=\"{half_points}\"/></w:rPr>",
        font = escape(font)
    )
}

/// The whole code block is one paragraph: one monospace run with the lines
/// separated by explicit breaks.
fn code_paragraph(code: &str, styles: &StyleSettings) -> String {
    let mut run = String::from("<w:r>");
    run.push_str(&run_props(&styles.code_font, styles.code_size_pt));
    for (i, line) in code.split('\n').enumerate() {
        if i > 0 {
            run.push_str("<w:br/>");
        }
        run.push_str(&format!(
            "<w:t xml:space=\"preserve\">{}</w:t>",
            escape(line)
        ));
    }
    run.push_str("</w:r>");
    format!("<w:p>{run}</w:p>")
}

fn list_paragraph(style: &str, num_id: usize, text: &str) -> String {
    format!(
        "<w:p><w:pPr><w:pStyle w:val=\"{style}\"/>\
         <w:numPr><w:ilvl w:val=\"0\"/><w:numId w:val=\"{num_id}\"/></w:numPr></w:pPr>\
         {}</w:p>",
        text_run(text, None)
    )
}

/// Inline drawing scaled to the configured width, aspect ratio preserved.
fn image_paragraph(image: &EmbeddedImage, index: usize, styles: &StyleSettings) -> String {
    let rel_id = FIRST_IMAGE_REL + index - 1;
    let cx = (styles.image_width_in * EMU_PER_INCH as f64).round() as u64;
    let width = u64::from(image.width_px.max(1));
    let cy = cx * u64::from(image.height_px) / width;
    let name = if image.alt.is_empty() {
        format!("Picture {index}")
    } else {
        image.alt.clone()
    };

    format!(
        "<w:p><w:r><w:drawing>\
         <wp:inline distT=\"0\" distB=\"0\" distL=\"0\" distR=\"0\">\
         <wp:extent cx=\"{cx}\" cy=\"{cy}\"/>\
         <wp:docPr id=\"{index}\" name=\"{name}\"/>\
         <a:graphic xmlns:a=\"http://schemas.openxmlformats.org/drawingml/2006/main\">\
         <a:graphicData uri=\"http://schemas.openxmlformats.org/drawingml/2006/picture\">\
         <pic:pic xmlns:pic=\"http://schemas.openxmlformats.org/drawingml/2006/picture\">\
         <pic:nvPicPr><pic:cNvPr id=\"{index}\" name=\"{name}\"/><pic:cNvPicPr/></pic:nvPicPr>\
         <pic:blipFill><a:blip r:embed=\"rId{rel_id}\"/><a:stretch><a:fillRect/></a:stretch></pic:blipFill>\
         <pic:spPr><a:xfrm><a:off x=\"0\" y=\"0\"/><a:ext cx=\"{cx}\" cy=\"{cy}\"/></a:xfrm>\
         <a:prstGeom prst=\"rect\"><a:avLst/></a:prstGeom></pic:spPr>\
         </pic:pic></a:graphicData></a:graphic>\
         </wp:inline></w:drawing></w:r></w:p>",
        name = escape(&name)
    )
}
