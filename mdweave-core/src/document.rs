//! Output document model
//!
//! An ordered, append-only sequence of blocks plus the document-wide style
//! defaults. Built incrementally by the sink and serialized once.

/// Image formats the DOCX package can embed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    Png,
    Jpeg,
    Gif,
}

impl ImageKind {
    /// File extension used for the media part.
    pub fn extension(&self) -> &'static str {
        match self {
            ImageKind::Png => "png",
            ImageKind::Jpeg => "jpeg",
            ImageKind::Gif => "gif",
        }
    }

    /// MIME type registered in `[Content_Types].xml`.
    pub fn content_type(&self) -> &'static str {
        match self {
            ImageKind::Png => "image/png",
            ImageKind::Jpeg => "image/jpeg",
            ImageKind::Gif => "image/gif",
        }
    }
}

/// A validated image ready for embedding.
///
/// Resolution and validation happen in the sink so the serializer never
/// touches the filesystem.
#[derive(Debug, Clone, PartialEq)]
pub struct EmbeddedImage {
    pub data: Vec<u8>,
    pub width_px: u32,
    pub height_px: u32,
    pub kind: ImageKind,
    /// Alt text from the markup, used as the drawing's name.
    pub alt: String,
}

/// One discrete structural unit of the output document.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    /// Heading text with level in 1..=4.
    Heading { level: usize, text: String },
    /// Body paragraph in the default font.
    Paragraph(String),
    /// Code block content, lines joined by newline, monospace font.
    Code(String),
    /// Bullet list item.
    BulletItem(String),
    /// Numbered list item.
    NumberedItem(String),
    /// Embedded image scaled to the configured width.
    Image(EmbeddedImage),
    /// Empty paragraph (blank line or horizontal rule).
    Blank,
}

/// The assembled output document: blocks in input order, never reordered.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    pub blocks: Vec<Block>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }
}

/// Document-wide style defaults applied at serialization.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleSettings {
    /// Font for the Normal style (paragraphs, list items).
    pub body_font: String,
    /// Body size in points.
    pub body_size_pt: u32,
    /// Monospace font for code blocks.
    pub code_font: String,
    /// Code size in points.
    pub code_size_pt: u32,
    /// Fixed width for embedded images, in inches.
    pub image_width_in: f64,
}

impl Default for StyleSettings {
    fn default() -> Self {
        StyleSettings {
            body_font: "Times New Roman".to_string(),
            body_size_pt: 12,
            code_font: "Courier New".to_string(),
            code_size_pt: 10,
            image_width_in: 6.0,
        }
    }
}
