use reqwest::StatusCode;

const MIN_BODY_BYTES: usize = 256;

/// Check that an HTTP response looks like a live results page.
///
/// Returns `Err` with a reason for:
/// - non-success status codes
/// - bodies too short to be a rendered page
/// - non-HTML content
/// - script/cookie interstitials the transport strategy cannot get past
///
/// A rejection here is what triggers fallback to the rendering strategy.
pub(crate) fn validate_response(status: StatusCode, body: &str) -> Result<(), String> {
    if !status.is_success() {
        return Err(format!("HTTP status {}", status));
    }

    if body.len() < MIN_BODY_BYTES {
        return Err(format!("body is too short ({} bytes)", body.len()));
    }

    let body_lower = body.to_ascii_lowercase();

    if !body_lower.contains("<html") && !body_lower.contains("<!doctype") {
        return Err("missing HTML markers".to_string());
    }

    let gate_patterns = [
        "please enable javascript",
        "javascript is required",
        "habilite o javascript",
        "access denied",
        "acesso negado",
    ];
    for pattern in &gate_patterns {
        if body_lower.contains(pattern) {
            return Err(format!("gated response ({})", pattern));
        }
    }

    Ok(())
}
