//! Cookie lookup for request authentication.

use std::borrow::Cow;

/// Find `name` in a `document.cookie` style string and return its decoded value.
///
/// Entries are split on `;` and trimmed; the first entry starting with `name=` wins.
/// Returns `None` for an empty cookie string or a missing cookie. A value that does
/// not percent-decode to valid UTF-8 is returned as-is.
pub fn get_cookie(cookies: &str, name: &str) -> Option<String> {
    if cookies.is_empty() {
        return None;
    }
    cookies.split(';').map(str::trim).find_map(|entry| {
        let value = entry.strip_prefix(name)?.strip_prefix('=')?;
        Some(percent_decode(value).unwrap_or_else(|| value.to_string()))
    })
}

/// Percent-decode a cookie value. `+` is kept literally, unlike form bodies, and
/// malformed escapes stay as written.
fn percent_decode(input: &str) -> Option<String> {
    urlencoding::decode(input).map(Cow::into_owned).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_named_cookie_among_others() {
        let jar = "sessionid=abc; csrftoken=Tok123; theme=dark";
        assert_eq!(get_cookie(jar, "csrftoken").as_deref(), Some("Tok123"));
        assert_eq!(get_cookie(jar, "theme").as_deref(), Some("dark"));
    }

    #[test]
    fn missing_or_empty_is_none() {
        assert_eq!(get_cookie("", "csrftoken"), None);
        assert_eq!(get_cookie("sessionid=abc", "csrftoken"), None);
    }

    #[test]
    fn prefix_of_longer_name_does_not_match() {
        assert_eq!(get_cookie("csrftokenx=1", "csrftoken"), None);
        assert_eq!(
            get_cookie("csrftokenx=1; csrftoken=2", "csrftoken").as_deref(),
            Some("2")
        );
    }

    #[test]
    fn value_is_percent_decoded() {
        assert_eq!(get_cookie("name=a%20b%3Dc", "name").as_deref(), Some("a b=c"));
        assert_eq!(
            get_cookie("name=%D0%B8%D0%B3%D1%80%D0%B0", "name").as_deref(),
            Some("игра")
        );
    }

    #[test]
    fn malformed_escape_keeps_raw_value() {
        assert_eq!(get_cookie("name=100%", "name").as_deref(), Some("100%"));
        assert_eq!(get_cookie("name=%zz", "name").as_deref(), Some("%zz"));
    }

    #[test]
    fn signed_hex_escape_is_not_decoded() {
        assert_eq!(get_cookie("csrftoken=%+1abc", "csrftoken").as_deref(), Some("%+1abc"));
        assert_eq!(get_cookie("csrftoken=%-1abc", "csrftoken").as_deref(), Some("%-1abc"));
    }

    #[test]
    fn invalid_utf8_keeps_raw_value() {
        assert_eq!(get_cookie("name=%FF%FE", "name").as_deref(), Some("%FF%FE"));
    }

    #[test]
    fn plus_is_not_a_space() {
        assert_eq!(get_cookie("name=a+b", "name").as_deref(), Some("a+b"));
    }

    #[test]
    fn empty_value_is_some_empty() {
        assert_eq!(get_cookie("csrftoken=; a=b", "csrftoken").as_deref(), Some(""));
    }
}
