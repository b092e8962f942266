use anyhow::{anyhow, Context, Result};
use dioxus::logger::tracing::{debug, warn};
use once_cell::sync::Lazy;
use reqwest::header::{HeaderMap, HeaderValue, CACHE_CONTROL};
use reqwest::Client;
use std::error::Error as _;

use crate::shared::SnapshotCollection;

#[cfg(not(target_arch = "wasm32"))]
static CLIENT: Lazy<Client> = Lazy::new(|| {
    Client::builder()
        .connect_timeout(std::time::Duration::from_secs(2))
        .timeout(std::time::Duration::from_secs(10))
        .build()
        .unwrap_or_default()
});

// The browser owns timeouts on wasm.
#[cfg(target_arch = "wasm32")]
static CLIENT: Lazy<Client> = Lazy::new(Client::new);

/// Headers attached to every poll. In the browser the GET must stay a CORS simple request,
/// so nothing outside the safelisted set is added there.
pub fn poll_headers(in_browser: bool) -> HeaderMap {
    let mut headers = HeaderMap::new();
    if !in_browser {
        headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-store"));
    }
    headers
}

/// One poll of the data endpoint: `GET <url>` decoded into the full sensor collection.
pub async fn fetch_snapshots(url: &str) -> Result<SnapshotCollection> {
    debug!("[fetch] GET {}", url);
    let res = match CLIENT
        .get(url)
        .headers(poll_headers(cfg!(target_arch = "wasm32")))
        .send()
        .await
    {
        Ok(r) => r,
        Err(e) => {
            let mut chain = Vec::new();
            let mut src: Option<&dyn std::error::Error> = e.source();
            while let Some(s) = src {
                chain.push(s.to_string());
                src = s.source();
            }
            if !chain.is_empty() {
                warn!("[fetch] error chain: {}", chain.join(" -> "));
            }
            return Err(anyhow!("sending GET {}: {}", url, e));
        }
    };
    let status = res.status();
    if !status.is_success() {
        return Err(anyhow!("GET {} failed with status {}", url, status));
    }
    let bytes = res
        .bytes()
        .await
        .with_context(|| format!("reading body from GET {}", url))?;
    decode_snapshots(&bytes).with_context(|| format!("decoding snapshots from GET {}", url))
}

pub fn decode_snapshots(bytes: &[u8]) -> Result<SnapshotCollection> {
    serde_json::from_slice(bytes).map_err(|e| {
        let snip = String::from_utf8_lossy(bytes);
        let snip = snip.chars().take(300).collect::<String>();
        anyhow!("{}\nBody snippet: {}", e, snip)
    })
}
