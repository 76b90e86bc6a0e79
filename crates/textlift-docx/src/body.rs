//! Parser for the WordprocessingML document body part.
//!
//! The body follows the structure:
//! ```xml
//! <w:document xmlns:w="...">
//!   <w:body>
//!     <w:p>
//!       <w:r><w:rPr><w:b/></w:rPr><w:t>Run text</w:t></w:r>
//!     </w:p>
//!   </w:body>
//! </w:document>
//! ```
//! Only the raw run text is collected; styling, images, and structural
//! markup are discarded.

use quick_xml::Reader;
use quick_xml::events::Event;

/// Stream the document body XML, returning paragraph texts in document
/// order. Runs within a paragraph concatenate directly; `w:tab` contributes
/// a tab, `w:br`/`w:cr` a line break.
pub fn parse_document_body(xml: &[u8]) -> Result<Vec<String>, quick_xml::Error> {
    let mut reader = Reader::from_reader(xml);

    let mut buf = Vec::new();
    let mut paragraphs: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut in_paragraph = false;
    let mut in_text = false;

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(ref e) => match e.name().as_ref() {
                b"w:p" => {
                    in_paragraph = true;
                    current.clear();
                }
                b"w:t" if in_paragraph => {
                    in_text = true;
                }
                b"w:tab" if in_paragraph => current.push('\t'),
                b"w:br" | b"w:cr" if in_paragraph => current.push('\n'),
                _ => {}
            },
            // Tabs and breaks are normally self-closing
            Event::Empty(ref e) => match e.name().as_ref() {
                b"w:tab" if in_paragraph => current.push('\t'),
                b"w:br" | b"w:cr" if in_paragraph => current.push('\n'),
                _ => {}
            },
            Event::Text(ref e) => {
                if in_text {
                    current.push_str(&e.unescape()?);
                }
            }
            Event::End(ref e) => match e.name().as_ref() {
                b"w:t" => {
                    in_text = false;
                }
                b"w:p" if in_paragraph => {
                    in_paragraph = false;
                    paragraphs.push(std::mem::take(&mut current));
                }
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(paragraphs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wrap_body(inner: &str) -> String {
        format!(
            concat!(
                "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>",
                "<w:document xmlns:w=\"http://schemas.openxmlformats.org/wordprocessingml/2006/main\">",
                "<w:body>{}</w:body></w:document>"
            ),
            inner
        )
    }

    #[test]
    fn paragraph_runs_concatenate() {
        let xml = wrap_body("<w:p><w:r><w:t>Hello </w:t></w:r><w:r><w:t>world</w:t></w:r></w:p>");
        let paragraphs = parse_document_body(xml.as_bytes()).unwrap();
        assert_eq!(paragraphs, vec!["Hello world"]);
    }

    #[test]
    fn styling_markup_is_discarded() {
        let xml = wrap_body(
            "<w:p><w:pPr><w:pStyle w:val=\"Heading1\"/></w:pPr>\
             <w:r><w:rPr><w:b/><w:i/></w:rPr><w:t>Title</w:t></w:r></w:p>",
        );
        let paragraphs = parse_document_body(xml.as_bytes()).unwrap();
        assert_eq!(paragraphs, vec!["Title"]);
    }

    #[test]
    fn tabs_and_breaks_become_whitespace() {
        let xml = wrap_body(
            "<w:p><w:r><w:t>a</w:t><w:tab/><w:t>b</w:t><w:br/><w:t>c</w:t></w:r></w:p>",
        );
        let paragraphs = parse_document_body(xml.as_bytes()).unwrap();
        assert_eq!(paragraphs, vec!["a\tb\nc"]);
    }

    #[test]
    fn entities_unescape() {
        let xml = wrap_body("<w:p><w:r><w:t>a &amp; b &lt;c&gt;</w:t></w:r></w:p>");
        let paragraphs = parse_document_body(xml.as_bytes()).unwrap();
        assert_eq!(paragraphs, vec!["a & b <c>"]);
    }

    #[test]
    fn empty_body_yields_no_paragraphs() {
        let xml = wrap_body("");
        assert!(parse_document_body(xml.as_bytes()).unwrap().is_empty());
    }

    #[test]
    fn unknown_entity_is_an_error_not_dropped_text() {
        let xml = wrap_body("<w:p><w:r><w:t>alpha &undef; omega</w:t></w:r></w:p>");
        assert!(parse_document_body(xml.as_bytes()).is_err());
    }

    #[test]
    fn mismatched_end_tag_is_an_error() {
        let xml = wrap_body("<w:p><w:r><w:t>text</w:r></w:t></w:p>");
        assert!(parse_document_body(xml.as_bytes()).is_err());
    }
}
