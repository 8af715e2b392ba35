//! Document sink
//!
//! Drives the line classifier over the source text and appends one block per
//! emitted tag, in input order. This is the only place that touches the
//! filesystem during model building: image references are resolved against
//! the asset root here, so a missing or unreadable image degrades to
//! placeholder text without stopping the conversion.

use crate::classify::{self, LineClass, ParseState};
use crate::document::{Block, Document, EmbeddedImage, ImageKind};

use image::GenericImageView;
use std::fs;
use std::path::Path;

/// Fold the classifier over `source` and assemble the output document.
///
/// Image paths are joined onto `assets_root`, which by convention is the
/// parent of the input file's directory (so `docs/`-resident markup can
/// reference `assets/x.png` rooted one level up).
///
/// An unterminated fence at end of input is flushed as a code block rather
/// than discarded.
pub fn build_document(source: &str, assets_root: &Path) -> Document {
    let mut doc = Document::new();
    let mut state = ParseState::default();

    for line in source.lines() {
        let (class, next) = classify::classify(line, state);
        state = next;
        match class {
            LineClass::FenceOpen | LineClass::CodeLine | LineClass::EmptyHeading => {}
            LineClass::FenceClose(code) => doc.push(Block::Code(code)),
            LineClass::Heading { level, text } => doc.push(Block::Heading { level, text }),
            LineClass::HorizontalRule | LineClass::Blank => doc.push(Block::Blank),
            LineClass::ImageRef { alt, path } => doc.push(resolve_image(&alt, &path, assets_root)),
            LineClass::BulletItem(text) => doc.push(Block::BulletItem(text)),
            LineClass::NumberedItem(text) => doc.push(Block::NumberedItem(text)),
            LineClass::Paragraph(text) => doc.push(Block::Paragraph(text)),
        }
    }

    if let Some(code) = classify::flush(state) {
        doc.push(Block::Code(code));
    }

    doc
}

/// Resolve one image reference to a block.
///
/// - path missing under the asset root  -> `[Missing image: <path>]`
/// - unreadable, corrupt or unsupported -> `[Image: <path>]`
/// - valid PNG/JPEG/GIF                 -> embedded image
fn resolve_image(alt: &str, path: &str, assets_root: &Path) -> Block {
    let resolved = assets_root.join(path);
    if !resolved.exists() {
        return Block::Paragraph(format!("[Missing image: {path}]"));
    }
    match load_image(&resolved, alt) {
        Ok(img) => Block::Image(img),
        Err(_) => Block::Paragraph(format!("[Image: {path}]")),
    }
}

fn load_image(path: &Path, alt: &str) -> Result<EmbeddedImage, String> {
    let data = fs::read(path).map_err(|e| e.to_string())?;
    let kind = match image::guess_format(&data).map_err(|e| e.to_string())? {
        image::ImageFormat::Png => ImageKind::Png,
        image::ImageFormat::Jpeg => ImageKind::Jpeg,
        image::ImageFormat::Gif => ImageKind::Gif,
        other => return Err(format!("unsupported image format {other:?}")),
    };
    // Full decode rather than a header probe: a truncated or corrupt file
    // must fall back to placeholder text, not produce a broken package.
    let decoded = image::load_from_memory(&data).map_err(|e| e.to_string())?;
    let (width_px, height_px) = decoded.dimensions();
    Ok(EmbeddedImage {
        data,
        width_px,
        height_px,
        kind,
        alt: alt.to_string(),
    })
}
