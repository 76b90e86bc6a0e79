/// Decoder for plain-text buffers.
///
/// Infallible by design: any byte sequence is accepted, invalid UTF-8 is
/// replaced with U+FFFD per the standard lossy decoding rules, and the
/// result is returned verbatim — no trimming, no transformation. This is a
/// deliberate simplification; the binary-format decoders are the ones that
/// validate structure.
#[derive(Debug, Default)]
pub struct TextDecoder;

impl TextDecoder {
    pub fn new() -> Self {
        Self
    }

    pub fn decode(&self, bytes: &[u8]) -> String {
        String::from_utf8_lossy(bytes).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_bytes_verbatim() {
        assert_eq!(TextDecoder::new().decode(b"hello\nworld"), "hello\nworld");
    }

    #[test]
    fn does_not_trim() {
        assert_eq!(TextDecoder::new().decode(b"  padded  \n"), "  padded  \n");
    }

    #[test]
    fn invalid_utf8_is_replaced_not_rejected() {
        let decoded = TextDecoder::new().decode(&[b'o', b'k', 0xFF, 0xFE, b'!']);
        assert_eq!(decoded, "ok\u{FFFD}\u{FFFD}!");
    }

    #[test]
    fn empty_input_is_empty_output() {
        assert_eq!(TextDecoder::new().decode(b""), "");
    }
}
