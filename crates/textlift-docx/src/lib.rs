use std::io::{Cursor, Read};

use textlift_core::DecodeError;

pub mod body;

/// The packaged part holding the document body.
const DOCUMENT_PART: &str = "word/document.xml";

/// Decoder for DOCX byte buffers.
///
/// Treats the buffer as a zip-packaged document, locates the XML body part,
/// and extracts the raw text of its paragraphs — a "raw text" mode, not a
/// rich-text reconstruction. Paragraphs join with a single `\n`; the result
/// is trimmed of leading and trailing whitespace.
#[derive(Debug, Default)]
pub struct DocxDecoder;

impl DocxDecoder {
    pub fn new() -> Self {
        Self
    }

    /// Decode a DOCX buffer into its raw paragraph text.
    ///
    /// Fails when the buffer is not a valid zip package, when the document
    /// body part is missing, or when the body XML is corrupt.
    pub async fn decode(&self, bytes: &[u8]) -> Result<String, DecodeError> {
        let cursor = Cursor::new(bytes);
        let mut archive =
            zip::ZipArchive::new(cursor).map_err(|e| DecodeError::Malformed(e.to_string()))?;

        let mut part = match archive.by_name(DOCUMENT_PART) {
            Ok(part) => part,
            Err(zip::result::ZipError::FileNotFound) => {
                return Err(DecodeError::MissingPart(DOCUMENT_PART.to_string()));
            }
            Err(e) => return Err(DecodeError::Malformed(e.to_string())),
        };

        let mut xml = Vec::new();
        part.read_to_end(&mut xml)
            .map_err(|e| DecodeError::Malformed(e.to_string()))?;

        let paragraphs =
            body::parse_document_body(&xml).map_err(|e| DecodeError::Malformed(e.to_string()))?;
        tracing::debug!(paragraphs = paragraphs.len(), "docx body parsed");

        Ok(paragraphs.join("\n").trim().to_string())
    }
}
