use crate::error::Result;
use reqwest::{redirect, Client};
use std::time::Duration;

const REDIRECT_LIMIT: usize = 10;
const POOL_IDLE_TIMEOUT_SEC: u64 = 90;

/// Build a reqwest client tuned for the portal's session behavior.
///
/// Cookies stay on: the portal hands out a session cookie on the form GET
/// and expects it back on the POST.
pub(crate) fn build_portal_client(timeout: Duration) -> Result<Client> {
    let client = Client::builder()
        .cookie_store(true)
        .redirect(redirect::Policy::limited(REDIRECT_LIMIT))
        .gzip(true)
        .brotli(true)
        .deflate(true)
        .timeout(timeout)
        .pool_idle_timeout(Duration::from_secs(POOL_IDLE_TIMEOUT_SEC))
        .build()?;
    Ok(client)
}
