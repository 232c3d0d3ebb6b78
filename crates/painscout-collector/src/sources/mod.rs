//! Upstream search clients.

mod reddit;
mod reddit_helpers;
mod twitter;

pub(crate) use reddit::RedditSearchClient;
pub(crate) use reddit_helpers::normalize_community;
pub(crate) use twitter::TwitterClient;

/// Characters of body text kept when a platform has no native title.
const DERIVED_TITLE_CHARS: usize = 100;

/// Derive a title from a post body: the first 100 characters plus an ellipsis.
pub(crate) fn title_from_body(body: &str) -> String {
    let head: String = body.chars().take(DERIVED_TITLE_CHARS).collect();
    format!("{head}...")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_title_truncates_on_char_boundary() {
        let body = "é".repeat(150);
        let title = title_from_body(&body);
        assert_eq!(title.chars().count(), DERIVED_TITLE_CHARS + 3);
        assert!(title.ends_with("..."));
    }

    #[test]
    fn short_body_keeps_full_text() {
        assert_eq!(title_from_body("too slow"), "too slow...");
    }
}
