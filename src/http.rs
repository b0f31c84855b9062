/// Longest slice of an error response body kept in messages and logs.
const MAX_ERROR_BODY: usize = 512;

/// Body of a failed response, cut down to a loggable size.
pub async fn error_body(resp: reqwest::Response) -> String {
    truncate_body(&resp.text().await.unwrap_or_default())
}

fn truncate_body(body: &str) -> String {
    let body = body.trim();
    match body.char_indices().nth(MAX_ERROR_BODY) {
        Some((cut, _)) => format!("{}... ({} bytes total)", &body[..cut], body.len()),
        None => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_body_untouched() {
        assert_eq!(truncate_body(" {\"message\": \"Invalid API key\"}\n"), "{\"message\": \"Invalid API key\"}");
    }

    #[test]
    fn test_long_body_cut() {
        let page = format!("<html>{}</html>", "x".repeat(10_000));
        let cut = truncate_body(&page);
        assert!(cut.starts_with("<html>xxx"));
        assert!(cut.ends_with("... (10013 bytes total)"));
        assert!(cut.len() < 600);
    }

    #[test]
    fn test_cut_respects_char_boundaries() {
        let body = "é".repeat(MAX_ERROR_BODY + 10);
        let cut = truncate_body(&body);
        assert!(cut.starts_with(&"é".repeat(MAX_ERROR_BODY)));
    }
}
