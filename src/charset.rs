//! Character set detection for fetched page bodies.

use encoding_rs::{Encoding, UTF_8};

/// Prescan window for `<meta charset>`, as browsers use.
const PRESCAN_BYTES: usize = 1024;

/// Decode a page body. The encoding comes from the `Content-Type` charset,
/// then from a `<meta>` tag near the start of the document, then defaults to
/// UTF-8. A byte order mark overrides all of them.
pub fn decode_body(bytes: &[u8], content_type: Option<&str>) -> String {
    let encoding = content_type
        .and_then(header_charset)
        .and_then(|label| Encoding::for_label(label.as_bytes()))
        .or_else(|| meta_charset(bytes))
        .unwrap_or(UTF_8);
    let (text, _, _) = encoding.decode(bytes);
    text.into_owned()
}

/// The `charset` parameter of a `Content-Type` value.
pub fn header_charset(content_type: &str) -> Option<&str> {
    content_type.split(';').skip(1).find_map(|param| {
        let (key, value) = param.split_once('=')?;
        key.trim()
            .eq_ignore_ascii_case("charset")
            .then(|| value.trim().trim_matches(|c| c == '"' || c == '\''))
    })
}

/// Find a charset declared by `<meta charset=..>` or
/// `<meta http-equiv="Content-Type" content="..; charset=..">`.
pub fn meta_charset(bytes: &[u8]) -> Option<&'static Encoding> {
    let head = &bytes[..bytes.len().min(PRESCAN_BYTES)];
    let head = String::from_utf8_lossy(head).to_ascii_lowercase();

    for tag in head.split("<meta").skip(1) {
        let tag = tag.split('>').next().unwrap_or_default();
        let mut rest = tag;
        while let Some(pos) = rest.find("charset") {
            rest = &rest[pos + "charset".len()..];
            let Some(value) = rest.trim_start().strip_prefix('=') else {
                continue;
            };
            let value = value.trim_start().trim_start_matches(['"', '\'']);
            let end = value
                .find(|c: char| matches!(c, '"' | '\'' | ';' | '/') || c.is_ascii_whitespace())
                .unwrap_or(value.len());
            if let Some(encoding) = Encoding::for_label(value[..end].as_bytes()) {
                // a document cannot declare itself UTF-16 from inside its own bytes
                return Some(encoding.output_encoding());
            }
        }
    }
    None
}
