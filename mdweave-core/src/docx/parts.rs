//! Static and style-driven package parts: content types, relationships,
//! styles and numbering definitions.

use crate::document::{EmbeddedImage, ImageKind, StyleSettings};

const XML_DECL: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\n";

/// Half-point sizes for Heading1..Heading4 (16, 14, 13, 12 pt).
const HEADING_SIZES: [u32; 4] = [32, 28, 26, 24];

/// Escape text content for XML.
pub(crate) fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}

pub(crate) fn content_types(images: &[&EmbeddedImage]) -> String {
    let mut kinds: Vec<ImageKind> = Vec::new();
    for image in images {
        if !kinds.contains(&image.kind) {
            kinds.push(image.kind);
        }
    }
    let image_defaults: String = kinds
        .iter()
        .map(|kind| {
            format!(
                "  <Default Extension=\"{}\" ContentType=\"{}\"/>\n",
                kind.extension(),
                kind.content_type()
            )
        })
        .collect();

    format!(
        "{XML_DECL}\
         <Types xmlns=\"http://schemas.openxmlformats.org/package/2006/content-types\">\n\
         \x20 <Default Extension=\"rels\" ContentType=\"application/vnd.openxmlformats-package.relationships+xml\"/>\n\
         \x20 <Default Extension=\"xml\" ContentType=\"application/xml\"/>\n\
         {image_defaults}\
         \x20 <Override PartName=\"/word/document.xml\" ContentType=\"application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml\"/>\n\
         \x20 <Override PartName=\"/word/styles.xml\" ContentType=\"application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml\"/>\n\
         \x20 <Override PartName=\"/word/numbering.xml\" ContentType=\"application/vnd.openxmlformats-officedocument.wordprocessingml.numbering+xml\"/>\n\
         </Types>"
    )
}

pub(crate) fn package_rels() -> String {
    format!(
        "{XML_DECL}\
         <Relationships xmlns=\"http://schemas.openxmlformats.org/package/2006/relationships\">\n\
         \x20 <Relationship Id=\"rId1\" Type=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument\" Target=\"word/document.xml\"/>\n\
         </Relationships>"
    )
}

pub(crate) fn document_rels(images: &[&EmbeddedImage]) -> String {
    let mut rels = String::new();
    rels.push_str(
        "  <Relationship Id=\"rId1\" Type=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles\" Target=\"styles.xml\"/>\n",
    );
    rels.push_str(
        "  <Relationship Id=\"rId2\" Type=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships/numbering\" Target=\"numbering.xml\"/>\n",
    );
    for (index, image) in images.iter().enumerate() {
        rels.push_str(&format!(
            "  <Relationship Id=\"rId{}\" Type=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships/image\" Target=\"media/image{}.{}\"/>\n",
            super::body::FIRST_IMAGE_REL + index,
            index + 1,
            image.kind.extension()
        ));
    }

    format!(
        "{XML_DECL}\
         <Relationships xmlns=\"http://schemas.openxmlformats.org/package/2006/relationships\">\n\
         {rels}\
         </Relationships>"
    )
}

pub(crate) fn styles_xml(styles: &StyleSettings) -> String {
    let body_font = escape(&styles.body_font);
    let body_half = styles.body_size_pt * 2;

    let headings: String = HEADING_SIZES
        .iter()
        .enumerate()
        .map(|(i, half_points)| {
            let level = i + 1;
            format!(
                "  <w:style w:type=\"paragraph\" w:styleId=\"Heading{level}\">\n\
                 \x20   <w:name w:val=\"heading {level}\"/>\n\
                 \x20   <w:basedOn w:val=\"Normal\"/>\n\
                 \x20   <w:qFormat/>\n\
                 \x20   <w:pPr><w:outlineLvl w:val=\"{outline}\"/></w:pPr>\n\
                 \x20   <w:rPr><w:b/><w:sz w:val=\"{half_points}\"/><w:szCs w:val=\"{half_points}\"/></w:rPr>\n\
                 \x20 </w:style>\n",
                outline = i
            )
        })
        .collect();

    format!(
        "{XML_DECL}\
         <w:styles xmlns:w=\"http://schemas.openxmlformats.org/wordprocessingml/2006/main\">\n\
         \x20 <w:docDefaults>\n\
         \x20   <w:rPrDefault>\n\
         \x20     <w:rPr><w:rFonts w:ascii=\"{body_font}\" w:hAnsi=\"{body_font}\"/><w:sz w:val=\"{body_half}\"/><w:szCs w:val=\"{body_half}\"/></w:rPr>\n\
         \x20   </w:rPrDefault>\n\
         \x20 </w:docDefaults>\n\
         \x20 <w:style w:type=\"paragraph\" w:default=\"1\" w:styleId=\"Normal\">\n\
         \x20   <w:name w:val=\"Normal\"/>\n\
         \x20   <w:qFormat/>\n\
         \x20   <w:rPr><w:rFonts w:ascii=\"{body_font}\" w:hAnsi=\"{body_font}\"/><w:sz w:val=\"{body_half}\"/><w:szCs w:val=\"{body_half}\"/></w:rPr>\n\
         \x20 </w:style>\n\
         {headings}\
         \x20 <w:style w:type=\"paragraph\" w:styleId=\"ListBullet\">\n\
         \x20   <w:name w:val=\"List Bullet\"/>\n\
         \x20   <w:basedOn w:val=\"Normal\"/>\n\
         \x20   <w:qFormat/>\n\
         \x20 </w:style>\n\
         \x20 <w:style w:type=\"paragraph\" w:styleId=\"ListNumber\">\n\
         \x20   <w:name w:val=\"List Number\"/>\n\
         \x20   <w:basedOn w:val=\"Normal\"/>\n\
         \x20   <w:qFormat/>\n\
         \x20 </w:style>\n\
         </w:styles>"
    )
}

pub(crate) fn numbering_xml() -> String {
    format!(
        "{XML_DECL}\
         <w:numbering xmlns:w=\"http://schemas.openxmlformats.org/wordprocessingml/2006/main\">\n\
         \x20 <w:abstractNum w:abstractNumId=\"0\">\n\
         \x20   <w:multiLevelType w:val=\"singleLevel\"/>\n\
         \x20   <w:lvl w:ilvl=\"0\">\n\
         \x20     <w:start w:val=\"1\"/>\n\
         \x20     <w:numFmt w:val=\"bullet\"/>\n\
         \x20     <w:lvlText w:val=\"\u{2022}\"/>\n\
         \x20     <w:lvlJc w:val=\"left\"/>\n\
         \x20     <w:pPr><w:ind w:left=\"720\" w:hanging=\"360\"/></w:pPr>\n\
         \x20   </w:lvl>\n\
         \x20 </w:abstractNum>\n\
         \x20 <w:abstractNum w:abstractNumId=\"1\">\n\
         \x20   <w:multiLevelType w:val=\"singleLevel\"/>\n\
         \x20   <w:lvl w:ilvl=\"0\">\n\
         \x20     <w:start w:val=\"1\"/>\n\
         \x20     <w:numFmt w:val=\"decimal\"/>\n\
         \x20     <w:lvlText w:val=\"%1.\"/>\n\
         \x20     <w:lvlJc w:val=\"left\"/>\n\
         \x20     <w:pPr><w:ind w:left=\"720\" w:hanging=\"360\"/></w:pPr>\n\
         \x20   </w:lvl>\n\
         \x20 </w:abstractNum>\n\
         \x20 <w:num w:numId=\"1\"><w:abstractNumId w:val=\"0\"/></w:num>\n\
         \x20 <w:num w:numId=\"2\"><w:abstractNumId w:val=\"1\"/></w:num>\n\
         </w:numbering>"
    )
}
