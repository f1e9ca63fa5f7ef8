/// Join a base URL and path segments with single slashes.
///
/// An empty trailing segment leaves a trailing slash on the result.
pub fn build_url(base: &str, segments: &[&str]) -> String {
    let mut url = base.trim_end_matches('/').to_string();
    for seg in segments {
        url.push('/');
        url.push_str(seg.trim_matches('/'));
    }
    url
}

/// Append an already encoded query string, if it is not empty.
pub fn with_query(mut url: String, query: &str) -> String {
    if !query.is_empty() {
        url.push('?');
        url.push_str(query);
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_segments() {
        assert_eq!(
            build_url("http://localhost:9000/", &["api", "v1", "video-channels"]),
            "http://localhost:9000/api/v1/video-channels"
        );
    }

    #[test]
    fn empty_last_segment_keeps_trailing_slash() {
        assert_eq!(
            build_url("http://localhost:9000", &["api", "v1", "accounts", "2", "video-channels", ""]),
            "http://localhost:9000/api/v1/accounts/2/video-channels/"
        );
    }

    #[test]
    fn query_is_only_added_when_present() {
        assert_eq!(with_query("http://h/p".into(), ""), "http://h/p");
        assert_eq!(with_query("http://h/p".into(), "a=1"), "http://h/p?a=1");
    }
}
