use lopdf::content::Content;
use lopdf::{Document, Object, ObjectId};

use textlift_core::DecodeError;

pub mod content;

pub use content::{ContentItem, classify_operations};

/// Decoder for PDF byte buffers.
///
/// Parses the buffer as a PDF container and extracts a linear text stream,
/// page by page in document order. Each page's content stream is decoded
/// into typed [`ContentItem`]s; the text-bearing payloads are joined with
/// the configured separator and emitted under a `Page <n>:` header followed
/// by a blank line. Pages with no extractable text still emit their block,
/// so page-count parity with the source document holds.
///
/// Side-effect-free: configuration is fixed at construction, decoding reads
/// only the given buffer.
pub struct PdfDecoder {
    /// Separator placed between the payloads of a page's text items.
    item_separator: String,
}

impl Default for PdfDecoder {
    fn default() -> Self {
        Self {
            item_separator: " ".to_string(),
        }
    }
}

impl PdfDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the separator joining a page's text items (default `" "`).
    pub fn with_item_separator(mut self, separator: impl Into<String>) -> Self {
        self.item_separator = separator.into();
        self
    }

    /// Decode a PDF buffer into its extracted text.
    ///
    /// Fails with a container-level error when the buffer is not a
    /// well-formed PDF (bad header, truncated xref, encryption). A failure
    /// while processing an individual page aborts the whole extraction and
    /// reports the failing 1-based page index; no partial text is returned.
    pub async fn decode(&self, bytes: &[u8]) -> Result<String, DecodeError> {
        let doc = Document::load_mem(bytes).map_err(|e| DecodeError::Malformed(e.to_string()))?;
        if doc.trailer.get(b"Encrypt").is_ok() {
            return Err(DecodeError::Malformed(
                "encrypted documents are not supported".to_string(),
            ));
        }

        let pages = doc.get_pages();
        tracing::debug!(pages = pages.len(), "opened pdf container");

        // Strictly sequential: each page is awaited before the next begins,
        // so output ordering always matches document order.
        let mut out = String::new();
        for (index, (_, page_id)) in pages.iter().enumerate() {
            let number = index + 1;
            let page_text = self.page_text(&doc, *page_id, number).await?;
            out.push_str(&format!("Page {number}:\n{page_text}\n\n"));
        }
        Ok(out)
    }

    /// Extract the text of a single page from its content stream.
    async fn page_text(
        &self,
        doc: &Document,
        page_id: ObjectId,
        number: usize,
    ) -> Result<String, DecodeError> {
        let page_err = |e: lopdf::Error| DecodeError::Page {
            page: number,
            detail: e.to_string(),
        };

        // Resolve every content stream explicitly: a dangling or unreadable
        // Contents entry must fail the page, not decode as an empty block.
        let mut data = Vec::new();
        for content_id in doc.get_page_contents(page_id) {
            let stream = doc
                .get_object(content_id)
                .and_then(Object::as_stream)
                .map_err(page_err)?;
            let content = stream.decompressed_content().map_err(page_err)?;
            data.extend(content);
            // Keep a token boundary between concatenated streams
            data.push(b'\n');
        }
        let content = Content::decode(&data).map_err(page_err)?;

        let items = classify_operations(&content.operations);
        let text = items
            .iter()
            .filter_map(ContentItem::text)
            .collect::<Vec<_>>()
            .join(&self.item_separator);
        tracing::trace!(page = number, items = items.len(), "page decoded");
        Ok(text)
    }
}
