use std::fmt;

use thiserror::Error;

pub mod session;

// Re-export for convenience
pub use session::{Attempt, BeginError, Phase, Session};

/// A file handed over by the upload boundary: a name (which must carry an
/// extension to be classifiable) and its full byte content.
///
/// Immutable once constructed; a session replaces it wholesale on
/// re-selection, it is never mutated in place.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub name: String,
    pub data: Vec<u8>,
}

impl UploadedFile {
    pub fn new(name: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            data,
        }
    }
}

/// The decoder a file is routed to. Closed set: every accepted file has
/// exactly one tag, derived from its name's extension, case-insensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatTag {
    Pdf,
    Docx,
    Txt,
}

impl FormatTag {
    /// Classify a file name by the substring after its last `.`, lower-cased.
    /// Names without a supported extension (or without any extension) are
    /// rejected with `None`; the caller owns any user-facing messaging.
    pub fn from_name(name: &str) -> Option<Self> {
        let (_, ext) = name.rsplit_once('.')?;
        Self::from_extension(&ext.to_lowercase())
    }

    fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            "pdf" => Some(Self::Pdf),
            "docx" => Some(Self::Docx),
            "txt" => Some(Self::Txt),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Docx => "docx",
            Self::Txt => "txt",
        }
    }
}

impl fmt::Display for FormatTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure raised by a format decoder.
///
/// Decoders validate structure and report what broke; the coordinator wraps
/// this into [`ExtractError::DecodeFailed`] with the message preserved
/// verbatim.
#[derive(Error, Debug)]
pub enum DecodeError {
    /// The buffer is not a well-formed document container (bad header,
    /// truncated xref, unsupported encryption, corrupt package).
    #[error("not a well-formed document: {0}")]
    Malformed(String),
    /// The container opened but a required part is absent or unreadable.
    #[error("missing document part: {0}")]
    MissingPart(String),
    /// A specific page failed mid-extraction; the whole attempt aborts
    /// rather than returning partial text.
    #[error("failed on page {page}: {detail}")]
    Page { page: usize, detail: String },
}

/// Classification of an extraction failure, for callers that branch on the
/// failure class rather than its display text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NoFileSelected,
    UnsupportedFormat,
    DecodeFailed,
}

/// A failed extraction attempt. The `Display` text is the human-readable
/// detail and is suitable for direct display to the user.
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("no file selected")]
    NoFileSelected,
    #[error("unsupported file format: {0}")]
    UnsupportedFormat(String),
    #[error("failed to decode {format} file: {detail}")]
    DecodeFailed { format: FormatTag, detail: String },
}

impl ExtractError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NoFileSelected => ErrorKind::NoFileSelected,
            Self::UnsupportedFormat(_) => ErrorKind::UnsupportedFormat,
            Self::DecodeFailed { .. } => ErrorKind::DecodeFailed,
        }
    }

    /// Wrap a decoder failure, preserving its message verbatim.
    pub fn decode_failed(format: FormatTag, err: &DecodeError) -> Self {
        Self::DecodeFailed {
            format,
            detail: err.to_string(),
        }
    }
}

/// Outcome of one extraction attempt. A new attempt replaces, never appends
/// to, the prior outcome.
pub type ExtractionOutcome = Result<String, ExtractError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_supported_extensions() {
        assert_eq!(FormatTag::from_name("report.pdf"), Some(FormatTag::Pdf));
        assert_eq!(FormatTag::from_name("notes.docx"), Some(FormatTag::Docx));
        assert_eq!(FormatTag::from_name("readme.txt"), Some(FormatTag::Txt));
    }

    #[test]
    fn classify_is_case_insensitive() {
        assert_eq!(FormatTag::from_name("REPORT.PDF"), Some(FormatTag::Pdf));
        assert_eq!(FormatTag::from_name("Notes.DocX"), Some(FormatTag::Docx));
        assert_eq!(
            FormatTag::from_name("report.pdf"),
            FormatTag::from_name("REPORT.PDF")
        );
    }

    #[test]
    fn classify_rejects_unsupported_and_missing_extensions() {
        assert_eq!(FormatTag::from_name("image.png"), None);
        assert_eq!(FormatTag::from_name("archive.tar.gz"), None);
        assert_eq!(FormatTag::from_name("noextension"), None);
        assert_eq!(FormatTag::from_name(""), None);
    }

    #[test]
    fn classify_uses_last_extension_segment() {
        // Only the substring after the last dot counts.
        assert_eq!(FormatTag::from_name("v1.2.report.pdf"), Some(FormatTag::Pdf));
        assert_eq!(FormatTag::from_name("report.pdf.bak"), None);
    }

    #[test]
    fn extract_error_kinds() {
        assert_eq!(ExtractError::NoFileSelected.kind(), ErrorKind::NoFileSelected);
        assert_eq!(
            ExtractError::UnsupportedFormat("x.png".into()).kind(),
            ErrorKind::UnsupportedFormat
        );
        let decode = DecodeError::Malformed("bad header".into());
        let err = ExtractError::decode_failed(FormatTag::Pdf, &decode);
        assert_eq!(err.kind(), ErrorKind::DecodeFailed);
        // Decoder detail is preserved verbatim inside the wrapped message.
        assert!(err.to_string().contains("bad header"));
    }

    #[test]
    fn page_error_carries_page_index() {
        let err = DecodeError::Page {
            page: 3,
            detail: "truncated content stream".into(),
        };
        assert_eq!(
            err.to_string(),
            "failed on page 3: truncated content stream"
        );
    }
}
