//! Query-string URL construction for list and update requests.

/// Builds `base + "?" + query` from an ordered set of optional parameters.
///
/// Entries whose value is `None` are omitted entirely (not rendered as
/// `key=`); surviving entries are percent-encoded and rendered in iteration
/// order, joined by `&`. The `?` is appended even when every entry is
/// omitted. Duplicate keys are not deduplicated; callers must not supply
/// them.
pub fn build_url<'a>(
    base: &str,
    params: impl IntoIterator<Item = (&'a str, Option<&'a str>)>,
) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    for (key, value) in params {
        if let Some(value) = value {
            query.append_pair(key, value);
        }
    }
    format!("{}?{}", base, query.finish())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn omits_absent_values() {
        let url = build_url(
            "https://x",
            [("a", Some("1")), ("b", None), ("c", Some("2"))],
        );
        assert_eq!(url, "https://x?a=1&c=2");
    }

    #[test]
    fn encodes_reserved_characters() {
        let url = build_url("https://x", [("q", Some("a&b=c")), ("k/ey", Some("v"))]);
        assert_eq!(url, "https://x?q=a%26b%3Dc&k%2Fey=v");
    }

    #[test]
    fn keeps_question_mark_when_everything_is_omitted() {
        assert_eq!(build_url("https://x", [("a", None)]), "https://x?");
    }

    #[test]
    fn preserves_iteration_order() {
        let url = build_url(
            "https://x",
            [("z", Some("1")), ("a", Some("2")), ("m", Some("3"))],
        );
        assert_eq!(url, "https://x?z=1&a=2&m=3");
    }
}
