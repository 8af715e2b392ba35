//! Markdown to DOCX conversion for the mdweave toolchain
//!
//!     This crate converts a restricted Markdown dialect into a Word-processing
//!     (DOCX) document: headings, paragraphs, bullet and numbered list items,
//!     fenced code blocks, horizontal rules and embedded images. It is a single
//!     linear pass over the input lines; there is no lookahead and no
//!     whole-document buffering beyond the pending lines of an open code fence.
//!
//!     This is a pure lib, that is, it powers the mdweave binary but is shell
//!     agnostic: no code here prints, reads env vars or otherwise supposes a
//!     shell environment.
//!
//!     The file structure:
//!     .
//!     ├── error.rs          # ConvertError
//!     ├── classify.rs       # Line classifier (pure fold step over ParseState)
//!     ├── document.rs       # Block / Document model + StyleSettings
//!     ├── convert.rs        # Document sink: fold + image resolution
//!     ├── docx
//!     │   ├── mod.rs        # OPC/ZIP packaging
//!     │   ├── body.rs       # word/document.xml
//!     │   └── parts.rs      # content types, rels, styles, numbering
//!     └── lib.rs
//!
//! Architecture
//!
//!     Two components composed in a producer/consumer pipeline. The classifier
//!     (classify.rs) tags each raw line with exactly one variant of a sum type,
//!     threading an explicit ParseState through each step so the rules can be
//!     unit tested as pure functions. The sink (convert.rs) drives iteration,
//!     dispatches on the tag and appends one block per emitted tag to the
//!     document model. The DOCX serializer (docx/) turns the finished model
//!     into package bytes in one deterministic pass.
//!
//! Library Choices
//!
//!     The dialect is defined by a fixed set of line patterns, so classification
//!     uses `regex` directly rather than a CommonMark parser (a full parser
//!     would change the dialect's semantics, e.g. setext headings and lazy
//!     continuation). The DOCX container is an OPC ZIP package; we write the
//!     WordprocessingML parts ourselves and package them with the `zip` crate.
//!     Image probing (dimensions, format detection, corruption checks) is
//!     delegated to the `image` crate.

pub mod classify;
pub mod convert;
pub mod document;
pub mod docx;
pub mod error;

pub use convert::build_document;
pub use document::{Block, Document, StyleSettings};
pub use error::ConvertError;

use std::fs;
use std::path::Path;

/// End-to-end conversion: read `input`, build the document model, serialize
/// it to DOCX and write `output` (overwriting unconditionally).
///
/// Image references are resolved against `assets_root`. A missing or
/// unembeddable image degrades to placeholder text and never fails the
/// conversion; only I/O on the input/output files and packaging errors
/// propagate.
pub fn convert_file(
    input: &Path,
    output: &Path,
    assets_root: &Path,
    styles: &StyleSettings,
) -> Result<(), ConvertError> {
    let source = fs::read_to_string(input)
        .map_err(|e| ConvertError::Io(format!("reading '{}': {e}", input.display())))?;
    let doc = build_document(&source, assets_root);
    let bytes = docx::serialize(&doc, styles)?;
    fs::write(output, bytes)
        .map_err(|e| ConvertError::Io(format!("writing '{}': {e}", output.display())))?;
    Ok(())
}
