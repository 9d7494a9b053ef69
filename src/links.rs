// YouTube search-link construction
//
// Every rendered result links out to a YouTube results page. Query terms come
// from the model and are untrusted, so all reserved characters are
// percent-encoded; spaces use the conventional '+' form for query strings.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

const YOUTUBE_SEARCH_URL: &str = "https://www.youtube.com/results?search_query=";

/// Characters that must be percent-encoded in a search_query value.
/// '+' is included so a literal plus in a title survives the space-to-plus
/// convention unambiguously.
const QUERY_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'\'')
    .add(b'+')
    .add(b',')
    .add(b'/')
    .add(b':')
    .add(b';')
    .add(b'<')
    .add(b'=')
    .add(b'>')
    .add(b'?')
    .add(b'@')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Encode free text as a search_query value: reserved characters
/// percent-encoded, spaces as '+'.
fn encode_query(terms: &str) -> String {
    utf8_percent_encode(terms, QUERY_ENCODE_SET)
        .to_string()
        .replace(' ', "+")
}

/// Build a YouTube search URL for arbitrary query terms
pub fn search_url(terms: &str) -> String {
    format!("{}{}", YOUTUBE_SEARCH_URL, encode_query(terms))
}

/// Build a YouTube search URL for one recommended song
pub fn song_search_url(title: &str, artist: &str) -> String {
    search_url(&format!("{} {}", title, artist))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_literal_spaces() {
        let url = song_search_url("Don't Stop", "Journey");
        assert!(!url.contains(' '));
        assert!(url.starts_with("https://www.youtube.com/results?search_query="));
    }

    #[test]
    fn test_spaces_become_plus() {
        let url = search_url("calm piano music");
        assert!(url.ends_with("calm+piano+music"));
    }

    #[test]
    fn test_reserved_characters_are_encoded() {
        let url = search_url("rock & roll #1 100%");
        assert!(url.contains("%26")); // &
        assert!(url.contains("%23")); // #
        assert!(url.contains("%25")); // %
        assert!(!url.contains('&'));
        assert!(!url.contains('#'));
    }

    #[test]
    fn test_literal_plus_is_unambiguous() {
        let url = search_url("1+1 two");
        assert!(url.contains("1%2B1+two"));
    }

    #[test]
    fn test_apostrophe_encoded() {
        let url = song_search_url("Don't Stop", "Journey");
        assert!(url.contains("Don%27t+Stop+Journey"));
    }
}
