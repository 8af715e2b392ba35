//! DOCX serialization
//!
//! A `.docx` file is an OPC package: a ZIP archive of XML parts plus binary
//! media. We generate the WordprocessingML parts directly (see body.rs and
//! parts.rs) and package them with the `zip` crate. The writer is pure: it
//! consumes the finished document model and style settings and produces the
//! package bytes in one deterministic pass.

mod body;
mod parts;

use crate::document::{Block, Document, EmbeddedImage, StyleSettings};
use crate::error::ConvertError;

use std::io::{Cursor, Write};
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

/// English Metric Units per inch, the unit of drawing extents.
pub(crate) const EMU_PER_INCH: u64 = 914_400;

/// Serialize the document model to DOCX package bytes.
pub fn serialize(doc: &Document, styles: &StyleSettings) -> Result<Vec<u8>, ConvertError> {
    let images: Vec<&EmbeddedImage> = doc
        .blocks
        .iter()
        .filter_map(|b| match b {
            Block::Image(img) => Some(img),
            _ => None,
        })
        .collect();

    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let opt = SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    write_part(&mut zip, opt, "[Content_Types].xml", parts::content_types(&images).as_bytes())?;
    write_part(&mut zip, opt, "_rels/.rels", parts::package_rels().as_bytes())?;
    write_part(
        &mut zip,
        opt,
        "word/document.xml",
        body::document_xml(doc, styles).as_bytes(),
    )?;
    write_part(
        &mut zip,
        opt,
        "word/_rels/document.xml.rels",
        parts::document_rels(&images).as_bytes(),
    )?;
    write_part(&mut zip, opt, "word/styles.xml", parts::styles_xml(styles).as_bytes())?;
    write_part(&mut zip, opt, "word/numbering.xml", parts::numbering_xml().as_bytes())?;

    for (index, image) in images.iter().enumerate() {
        let name = format!("word/media/image{}.{}", index + 1, image.kind.extension());
        write_part(&mut zip, opt, &name, &image.data)?;
    }

    let cursor = zip
        .finish()
        .map_err(|e| ConvertError::Package(e.to_string()))?;
    Ok(cursor.into_inner())
}

fn write_part(
    zip: &mut ZipWriter<Cursor<Vec<u8>>>,
    opt: SimpleFileOptions,
    name: &str,
    data: &[u8],
) -> Result<(), ConvertError> {
    zip.start_file(name, opt)
        .map_err(|e| ConvertError::Package(format!("{name}: {e}")))?;
    zip.write_all(data)
        .map_err(|e| ConvertError::Package(format!("{name}: {e}")))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{ImageKind, StyleSettings};
    use std::io::Read;
    use zip::ZipArchive;

    fn read_part(bytes: &[u8], name: &str) -> String {
        let mut archive = ZipArchive::new(Cursor::new(bytes.to_vec())).expect("valid zip");
        let mut part = archive.by_name(name).expect("part present");
        let mut content = String::new();
        part.read_to_string(&mut content).expect("utf-8 part");
        content
    }

    fn doc_with(blocks: Vec<Block>) -> Document {
        Document { blocks }
    }

    #[test]
    fn package_contains_required_parts() {
        let bytes = serialize(&doc_with(vec![]), &StyleSettings::default()).expect("serialize");
        let mut archive = ZipArchive::new(Cursor::new(bytes)).expect("valid zip");
        for name in [
            "[Content_Types].xml",
            "_rels/.rels",
            "word/document.xml",
            "word/_rels/document.xml.rels",
            "word/styles.xml",
            "word/numbering.xml",
        ] {
            assert!(archive.by_name(name).is_ok(), "missing part {name}");
        }
    }

    #[test]
    fn heading_uses_heading_style() {
        let doc = doc_with(vec![Block::Heading {
            level: 2,
            text: "Overview".to_string(),
        }]);
        let bytes = serialize(&doc, &StyleSettings::default()).expect("serialize");
        let xml = read_part(&bytes, "word/document.xml");
        assert!(xml.contains(r#"<w:pStyle w:val="Heading2"/>"#));
        assert!(xml.contains("Overview"));
    }

    #[test]
    fn paragraph_carries_body_font_and_size() {
        let doc = doc_with(vec![Block::Paragraph("Hello world".to_string())]);
        let bytes = serialize(&doc, &StyleSettings::default()).expect("serialize");
        let xml = read_part(&bytes, "word/document.xml");
        assert!(xml.contains(r#"w:ascii="Times New Roman""#));
        assert!(xml.contains(r#"<w:sz w:val="24"/>"#));
        assert!(xml.contains("Hello world"));
    }

    #[test]
    fn code_block_uses_monospace_and_line_breaks() {
        let doc = doc_with(vec![Block::Code("one\ntwo".to_string())]);
        let bytes = serialize(&doc, &StyleSettings::default()).expect("serialize");
        let xml = read_part(&bytes, "word/document.xml");
        assert!(xml.contains(r#"w:ascii="Courier New""#));
        assert!(xml.contains(r#"<w:sz w:val="20"/>"#));
        assert!(xml.contains("<w:br/>"));
        assert!(xml.contains("one"));
        assert!(xml.contains("two"));
    }

    #[test]
    fn list_items_reference_numbering() {
        let doc = doc_with(vec![
            Block::BulletItem("item one".to_string()),
            Block::NumberedItem("first".to_string()),
        ]);
        let bytes = serialize(&doc, &StyleSettings::default()).expect("serialize");
        let xml = read_part(&bytes, "word/document.xml");
        assert!(xml.contains(r#"<w:pStyle w:val="ListBullet"/>"#));
        assert!(xml.contains(r#"<w:pStyle w:val="ListNumber"/>"#));
        assert!(xml.contains(r#"<w:numId w:val="1"/>"#));
        assert!(xml.contains(r#"<w:numId w:val="2"/>"#));

        let numbering = read_part(&bytes, "word/numbering.xml");
        assert!(numbering.contains(r#"<w:numFmt w:val="bullet"/>"#));
        assert!(numbering.contains(r#"<w:numFmt w:val="decimal"/>"#));
    }

    #[test]
    fn text_is_xml_escaped() {
        let doc = doc_with(vec![Block::Paragraph("a < b & c > d".to_string())]);
        let bytes = serialize(&doc, &StyleSettings::default()).expect("serialize");
        let xml = read_part(&bytes, "word/document.xml");
        assert!(xml.contains("a &lt; b &amp; c &gt; d"));
    }

    #[test]
    fn blank_block_is_empty_paragraph() {
        let doc = doc_with(vec![Block::Blank]);
        let bytes = serialize(&doc, &StyleSettings::default()).expect("serialize");
        let xml = read_part(&bytes, "word/document.xml");
        assert!(xml.contains("<w:p/>"));
    }

    #[test]
    fn image_block_embeds_media_and_relationship() {
        let mut png = Cursor::new(Vec::new());
        image::RgbaImage::new(8, 4)
            .write_to(&mut png, image::ImageFormat::Png)
            .expect("encode png");
        let doc = doc_with(vec![Block::Image(crate::document::EmbeddedImage {
            data: png.into_inner(),
            width_px: 8,
            height_px: 4,
            kind: ImageKind::Png,
            alt: "pixel".to_string(),
        })]);
        let bytes = serialize(&doc, &StyleSettings::default()).expect("serialize");

        let mut archive = ZipArchive::new(Cursor::new(bytes.clone())).expect("valid zip");
        assert!(archive.by_name("word/media/image1.png").is_ok());

        let xml = read_part(&bytes, "word/document.xml");
        // 6.0in wide at 8x4px: cx = 6 * 914400, cy = cx / 2.
        assert!(xml.contains(r#"<wp:extent cx="5486400" cy="2743200"/>"#));
        assert!(xml.contains(r#"r:embed="rId3""#));

        let rels = read_part(&bytes, "word/_rels/document.xml.rels");
        assert!(rels.contains(r#"Target="media/image1.png""#));

        let types = read_part(&bytes, "[Content_Types].xml");
        assert!(types.contains(r#"Extension="png""#));
    }

    #[test]
    fn serialization_is_deterministic_for_same_input() {
        let doc = doc_with(vec![
            Block::Heading {
                level: 1,
                text: "Title".to_string(),
            },
            Block::Paragraph("body".to_string()),
        ]);
        let styles = StyleSettings::default();
        let a = read_part(&serialize(&doc, &styles).expect("a"), "word/document.xml");
        let b = read_part(&serialize(&doc, &styles).expect("b"), "word/document.xml");
        assert_eq!(a, b);
    }

    #[test]
    fn configured_fonts_flow_into_styles_part() {
        let styles = StyleSettings {
            body_font: "Georgia".to_string(),
            body_size_pt: 11,
            ..StyleSettings::default()
        };
        let bytes = serialize(&doc_with(vec![]), &styles).expect("serialize");
        let xml = read_part(&bytes, "word/styles.xml");
        assert!(xml.contains(r#"w:ascii="Georgia""#));
        assert!(xml.contains(r#"<w:sz w:val="22"/>"#));
    }
}
