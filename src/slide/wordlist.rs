use crate::error::LayoutError;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct WordListDoc {
    #[serde(rename = "w", default)]
    words: Vec<WordDoc>,
}

#[derive(Debug, Deserialize)]
struct WordDoc {
    #[serde(rename = "$text", default)]
    text: String,
}

/// Parses `<wordlist><w f="…">word</w>…</wordlist>` into words, in document order.
/// Attributes such as the frequency are ignored.
pub fn parse_word_list(xml: &str) -> Result<Vec<String>, LayoutError> {
    let doc: WordListDoc = quick_xml::de::from_str(xml)?;
    Ok(doc.words.into_iter().map(|w| w.text).collect())
}

pub fn read_word_list<P: AsRef<Path>>(path: P) -> Result<Vec<String>, LayoutError> {
    let path = path.as_ref();
    let xml = fs::read_to_string(path).map_err(|source| LayoutError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_word_list(&xml)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_words_in_order() {
        let xml = r#"<?xml version="1.0"?>
<wordlist>
  <w f="255">the</w>
  <w f="200">Hello</w>
  <w f="10">don't</w>
</wordlist>"#;
        let words = parse_word_list(xml).unwrap();
        assert_eq!(words, vec!["the", "Hello", "don't"]);
    }

    #[test]
    fn test_empty_entry_is_kept() {
        let words = parse_word_list("<wordlist><w>a</w><w/><w>b</w></wordlist>").unwrap();
        assert_eq!(words, vec!["a", "", "b"]);
    }

    #[test]
    fn test_unrelated_elements_between_words() {
        let xml = "<wordlist><w>a</w><x/><w>b</w><!-- c --><meta k=\"v\"/><w>c</w></wordlist>";
        assert_eq!(parse_word_list(xml).unwrap(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_empty_list() {
        assert!(parse_word_list("<wordlist/>").unwrap().is_empty());
        assert!(parse_word_list("<wordlist><w>x</w>").is_err());
    }
}
