use reqwest::header::{HeaderMap, HeaderName, HeaderValue, USER_AGENT};

/// Build the fixed header set approximating a standard browser client.
///
/// The portal serves pt-BR users; requests without an Accept-Language
/// header get flagged sooner.
pub(crate) fn portal_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();

    for (k, v) in header_pairs() {
        let name = HeaderName::from_lowercase(k.to_ascii_lowercase().as_bytes())
            .unwrap_or_else(|_| HeaderName::from_static("accept"));
        if let Ok(val) = HeaderValue::from_str(v) {
            headers.insert(name, val);
        }
    }

    headers.insert(
        USER_AGENT,
        HeaderValue::from_static(
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36",
        ),
    );

    headers
}

fn header_pairs() -> Vec<(&'static str, &'static str)> {
    vec![
        (
            "Accept",
            "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
        ),
        ("Accept-Language", "pt-BR,pt;q=0.9,en;q=0.8"),
        ("DNT", "1"),
        ("Connection", "keep-alive"),
    ]
}
