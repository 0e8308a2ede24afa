//! Page text extraction and the non-ASCII word filter.

use scraper::Html;
use std::collections::HashSet;

const HIDDEN_ELEMENTS: &[&str] = &["script", "style", "template"];

/// Concatenate every visible text node of the document, in document order,
/// with no separator between nodes. Comments and the contents of `script`,
/// `style` and `template` are skipped.
pub fn extract_text(html: &str) -> String {
    document_text(&Html::parse_document(html))
}

/// Like [`extract_text`], but fails with the parser's own messages if the
/// document contained any parse errors.
pub fn extract_text_strict(html: &str) -> Result<String, String> {
    let document = Html::parse_document(html);
    if !document.errors.is_empty() {
        let message = document
            .errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ");
        return Err(message);
    }
    Ok(document_text(&document))
}

fn document_text(document: &Html) -> String {
    let mut text = String::new();
    for node in document.tree.root().descendants() {
        let Some(t) = node.value().as_text() else {
            continue;
        };
        let hidden = node.ancestors().any(|a| {
            a.value()
                .as_element()
                .is_some_and(|e| HIDDEN_ELEMENTS.contains(&e.name()))
        });
        if !hidden {
            text.push_str(t);
        }
    }
    text
}

pub fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
}

/// True when no character of `token` is ASCII.
pub fn is_non_ascii_word(token: &str) -> bool {
    token.chars().all(|c| c as u32 >= 128)
}

pub fn non_ascii_words(tokens: &HashSet<String>) -> impl Iterator<Item = &str> {
    tokens
        .iter()
        .map(String::as_str)
        .filter(|t| is_non_ascii_word(t))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_text_should_concat_text_nodes() {
        let html = "<html><head><title>शीर्षक</title></head>\
                    <body><p>नेपाल <b>hello</b></p><!-- टिप्पणी --><p>संसार</p></body></html>";
        assert_eq!(extract_text(html), "शीर्षकनेपाल helloसंसार");
    }

    #[test]
    fn extract_text_should_skip_script_and_style() {
        let html = "<html><head><style>p { content: 'शैली'; }</style></head><body>\
                    <p>नेपाल</p><script>var t = \"x\"; // को राजनीति\n</script></body></html>";
        let text = extract_text(html);
        assert_eq!(text, "नेपाल");
        let tokens = tokenize(&text).map(String::from).collect::<HashSet<_>>();
        assert_eq!(non_ascii_words(&tokens).collect::<Vec<_>>(), vec!["नेपाल"]);
    }

    #[test]
    fn extract_text_should_skip_template_contents() {
        let html = "<body><template><p>लुकेको</p></template><p>देखिने</p></body>";
        assert_eq!(extract_text(html), "देखिने");
    }

    #[test]
    fn extract_text_should_decode_entities() {
        let html = "<p>काठमाडौं&nbsp;पोखरा &amp; भक्तपुर</p>";
        let text = extract_text(html);
        let tokens = tokenize(&text).collect::<Vec<_>>();
        assert_eq!(tokens, vec!["काठमाडौं", "पोखरा", "&", "भक्तपुर"]);
    }

    #[test]
    fn strict_extract_should_reject_malformed_html() {
        let html = "<p>नेपाल</div></span>";
        assert!(extract_text_strict(html).is_err());
    }

    #[test]
    fn tokenize_should_split_on_whitespace_runs() {
        let text = "  नेपाल\thello\n\n संसार  2024\r\nकाठमाडौं ";
        let tokens = tokenize(text).collect::<Vec<_>>();
        assert_eq!(tokens, vec!["नेपाल", "hello", "संसार", "2024", "काठमाडौं"]);
    }

    #[test]
    fn tokenize_empty_text_should_yield_nothing() {
        assert_eq!(tokenize("").count(), 0);
        assert_eq!(tokenize(" \n\t ").count(), 0);
    }

    #[test]
    fn non_ascii_word_should_reject_any_ascii_char() {
        assert!(is_non_ascii_word("नेपाल"));
        assert!(is_non_ascii_word("काठमाडौं"));
        assert!(is_non_ascii_word("२०८०"));
        assert!(!is_non_ascii_word("hello"));
        assert!(!is_non_ascii_word("2024"));
        assert!(!is_non_ascii_word("नेपाल,"));
        assert!(!is_non_ascii_word("(संसार)"));
    }

    #[test]
    fn non_ascii_word_should_admit_other_scripts() {
        assert!(is_non_ascii_word("東京"));
        assert!(is_non_ascii_word("😀"));
        assert!(is_non_ascii_word("é"));
    }

    #[test]
    fn non_ascii_words_should_filter_set() {
        let tokens: HashSet<String> = ["नेपाल", "hello", "संसार", "2024", "काठमाडौं"]
            .into_iter()
            .map(String::from)
            .collect();
        let mut words = non_ascii_words(&tokens).collect::<Vec<_>>();
        words.sort();
        let mut expected = vec!["नेपाल", "संसार", "काठमाडौं"];
        expected.sort();
        assert_eq!(words, expected);
    }
}
