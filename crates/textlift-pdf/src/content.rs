//! Typed view over a page's content stream.
//!
//! Each operation is classified exactly once while the stream is parsed:
//! either it shows text (and carries the decoded payload) or it does not
//! (drawing, positioning, state — ignored). Concatenation later works on
//! the typed items alone, never re-inspecting operations.

use lopdf::Object;
use lopdf::content::Operation;

/// An atomic unit of a page's content stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentItem {
    /// A text-showing operation and its decoded string payload.
    Text(String),
    /// An operation with no text payload.
    NonText,
}

impl ContentItem {
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::NonText => None,
        }
    }
}

/// Classify every operation of a content stream.
///
/// Text-showing operators: `Tj` and `'` carry the string as their first
/// operand, `"` as their third; `TJ` interleaves strings with positioning
/// numbers, which are skipped.
pub fn classify_operations(operations: &[Operation]) -> Vec<ContentItem> {
    operations.iter().map(classify).collect()
}

fn classify(op: &Operation) -> ContentItem {
    match op.operator.as_str() {
        "Tj" | "'" => string_operand(op.operands.first()),
        "\"" => string_operand(op.operands.get(2)),
        "TJ" => match op.operands.first() {
            Some(Object::Array(elements)) => {
                let mut payload = String::new();
                let mut has_string = false;
                for element in elements {
                    if let Object::String(bytes, _) = element {
                        has_string = true;
                        payload.push_str(&decode_text_string(bytes));
                    }
                }
                // An array of bare kerning numbers shows no text at all
                if has_string {
                    ContentItem::Text(payload)
                } else {
                    ContentItem::NonText
                }
            }
            _ => ContentItem::NonText,
        },
        _ => ContentItem::NonText,
    }
}

fn string_operand(operand: Option<&Object>) -> ContentItem {
    match operand {
        Some(Object::String(bytes, _)) => ContentItem::Text(decode_text_string(bytes)),
        _ => ContentItem::NonText,
    }
}

/// Decode a PDF text string: UTF-16BE when BOM-prefixed, otherwise
/// PDFDocEncoding (Latin-1-compatible byte-to-char mapping). Font-specific
/// encodings are not consulted.
fn decode_text_string(bytes: &[u8]) -> String {
    if let Some(rest) = bytes.strip_prefix(&[0xFE, 0xFF]) {
        let units: Vec<u16> = rest
            .chunks_exact(2)
            .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
            .collect();
        String::from_utf16_lossy(&units)
    } else {
        bytes.iter().map(|&b| b as char).collect()
    }
}
