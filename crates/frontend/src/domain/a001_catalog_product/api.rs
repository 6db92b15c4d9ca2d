use contracts::domain::a001_catalog_product::aggregate::{decode_catalog, Product};
use gloo_net::http::Request;

/// Fetch the full product catalog.
///
/// Malformed records are dropped with a warning; only a transport error, a
/// non-success status or a body that is not a JSON array fails the call.
pub async fn fetch_catalog(url: &str) -> Result<Vec<Product>, String> {
    let response = Request::get(url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch products: HTTP {}", response.status()));
    }

    let payload: serde_json::Value = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    let decoded = decode_catalog(payload).map_err(|e| e.to_string())?;
    for (index, reason) in &decoded.skipped {
        log::warn!("Skipping catalog record #{}: {}", index, reason);
    }

    Ok(decoded.products)
}
