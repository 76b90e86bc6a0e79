pub mod text;

// Re-export domain types for convenience
pub use textlift_core::{
    Attempt, BeginError, DecodeError, ErrorKind, ExtractError, ExtractionOutcome, FormatTag,
    Phase, Session, UploadedFile,
};
pub use text::TextDecoder;
pub use textlift_docx::DocxDecoder;
pub use textlift_pdf::PdfDecoder;

/// Coordinator for a single extraction request.
///
/// Classifies the file by name, dispatches to exactly one format decoder,
/// and normalizes every decoder-level failure into [`ExtractError`] so
/// nothing escapes to the caller as a fault. No retries, no caching, no
/// deduplication — a second call while one is in flight is a caller error;
/// callers serialize requests (see [`Session::begin_extraction`]).
pub struct Extractor {
    pdf: PdfDecoder,
    docx: DocxDecoder,
    text: TextDecoder,
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new(PdfDecoder::new())
    }
}

impl Extractor {
    /// PDF parsing configuration is fixed here, at construction; the
    /// decoders are pure functions of their input bytes plus this value.
    pub fn new(pdf: PdfDecoder) -> Self {
        Self {
            pdf,
            docx: DocxDecoder::new(),
            text: TextDecoder::new(),
        }
    }

    /// Run one extraction.
    ///
    /// `None` fails immediately with `NoFileSelected` — a precondition
    /// failure, no decoder runs. An unclassifiable name fails with
    /// `UnsupportedFormat` before the file bytes are touched. Otherwise the
    /// matching decoder runs once; its failure detail is preserved verbatim
    /// inside `DecodeFailed`.
    pub async fn extract(&self, file: Option<&UploadedFile>) -> Result<String, ExtractError> {
        let file = file.ok_or(ExtractError::NoFileSelected)?;
        let Some(format) = FormatTag::from_name(&file.name) else {
            return Err(ExtractError::UnsupportedFormat(file.name.clone()));
        };
        tracing::debug!(name = %file.name, %format, bytes = file.data.len(), "dispatching extraction");

        match format {
            FormatTag::Pdf => self
                .pdf
                .decode(&file.data)
                .await
                .map_err(|e| ExtractError::decode_failed(format, &e)),
            FormatTag::Docx => self
                .docx
                .decode(&file.data)
                .await
                .map_err(|e| ExtractError::decode_failed(format, &e)),
            FormatTag::Txt => Ok(self.text.decode(&file.data)),
        }
    }
}
