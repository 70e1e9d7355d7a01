// Split an existing page into a preserved header and footer around the
// content container, so the container's inner markup can be regenerated
// without disturbing anything else on the page.

use regex::Regex;
use thiserror::Error;

/// The preserved portions of the target document.
///
/// Invariant: `header + anything + footer` is a syntactically valid
/// document, and the split lands on the same container boundary on
/// every run.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentSplit {
    /// Everything up to and including the opening container tag.
    pub header: String,
    /// Everything from the closing boundary onward, including `</body>`.
    pub footer: String,
}

/// Structural boundaries that could not be located in the page.
///
/// Splitting never degrades silently: a page without recognizable
/// boundaries is an error the caller can act on, not a corrupted
/// document.
#[derive(Debug, Error)]
pub enum SplitError {
    #[error("page has no opening container tag <div class=\"{0}\">")]
    MissingContainer(String),

    #[error("page has no closing </div></div></body> boundary")]
    MissingFooter,
}

/// Locate the content container in `html` and split around it.
///
/// Primary strategy: independently match the opening container tag and
/// the first `</div> </div> </body>` sequence (arbitrary whitespace
/// between the tags); the footer starts at the whitespace preceding the
/// sequence. Fallback: plain substring search for the opening tag, with
/// the footer starting exactly at the first closing `</div>`.
pub fn split_document(html: &str, container_class: &str) -> Result<DocumentSplit, SplitError> {
    let open_tag = format!("<div class=\"{container_class}\">");

    let open_re = Regex::new(&regex::escape(&open_tag)).expect("valid literal pattern");
    let close_re = Regex::new(r"\s*</div>\s*</div>\s*</body>").expect("valid pattern");

    if let (Some(open), Some(close)) = (open_re.find(html), close_re.find(html)) {
        return Ok(DocumentSplit {
            header: html[..open.end()].to_string(),
            footer: html[close.start()..].to_string(),
        });
    }

    // Fallback: substring search for the opening tag, closing boundary
    // without the leading whitespace. The patterns above are literal,
    // so a page that gets here has lost one of the two boundaries and
    // this pass exists to report which. Its success return is kept for
    // parity with the two-pass search contract.
    let Some(start) = html.find(&open_tag) else {
        return Err(SplitError::MissingContainer(container_class.to_string()));
    };
    let end_re = Regex::new(r"</div>\s*</div>\s*</body>").expect("valid pattern");
    let Some(end) = end_re.find(html) else {
        return Err(SplitError::MissingFooter);
    };

    Ok(DocumentSplit {
        header: html[..start + open_tag.len()].to_string(),
        footer: html[end.start()..].to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = "<!DOCTYPE html>\n<html>\n<head><title>Videos</title></head>\n<body>\n    <div class=\"container\">\n        <div class=\"content\">\n            <p>OLD CONTENT</p>\n        </div>\n    </div>\n</body>\n</html>\n";

    #[test]
    fn test_split_basic() {
        let split = split_document(PAGE, "content").unwrap();
        assert!(split.header.ends_with("<div class=\"content\">"));
        assert!(split.footer.trim_start().starts_with("</div>"));
        assert!(split.footer.contains("</body>"));
        assert!(!split.header.contains("OLD CONTENT"));
        assert!(!split.footer.contains("OLD CONTENT"));
    }

    #[test]
    fn test_split_footer_starts_at_whitespace() {
        // Footer begins at the whitespace run preceding the closing tags
        let split = split_document(PAGE, "content").unwrap();
        assert!(split.footer.starts_with('\n'));
        assert_eq!(
            split.footer,
            "\n        </div>\n    </div>\n</body>\n</html>\n"
        );
    }

    #[test]
    fn test_split_idempotent_boundary() {
        // Reassembling with fresh content and re-splitting lands on the
        // same boundary.
        let split = split_document(PAGE, "content").unwrap();
        let regenerated = format!("{}NEW{}", split.header, split.footer);
        let again = split_document(&regenerated, "content").unwrap();
        assert_eq!(again.header, split.header);
        assert_eq!(again.footer, split.footer);
    }

    #[test]
    fn test_split_header_footer_reconstitute() {
        let split = split_document(PAGE, "content").unwrap();
        let empty = format!("{}{}", split.header, split.footer);
        assert!(empty.starts_with("<!DOCTYPE html>"));
        assert!(empty.ends_with("</html>\n"));
        assert!(!empty.contains("OLD CONTENT"));
    }

    #[test]
    fn test_split_missing_container() {
        let html = "<html><body><div class=\"other\"></div></div></body></html>";
        match split_document(html, "content") {
            Err(SplitError::MissingContainer(class)) => assert_eq!(class, "content"),
            other => panic!("expected MissingContainer, got {other:?}"),
        }
    }

    #[test]
    fn test_split_missing_footer() {
        let html = "<html><body><div class=\"content\"><p>x</p></div></body></html>";
        match split_document(html, "content") {
            Err(SplitError::MissingFooter) => {}
            other => panic!("expected MissingFooter, got {other:?}"),
        }
    }

    #[test]
    fn test_split_custom_container_class() {
        let html = "<body><div class=\"wrap\"><div class=\"videos\">x</div></div></body>";
        let split = split_document(html, "videos").unwrap();
        assert!(split.header.ends_with("<div class=\"videos\">"));
    }
}
