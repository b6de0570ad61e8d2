use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Keys tried after the resource's own collection key.
const GENERIC_COLLECTION_KEYS: &[&str] = &["items", "data"];
const TOTAL_KEYS: &[&str] = &["total", "totalCount", "count"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageQuery {
    pub page: u32,
    pub limit: u32,
}

/// `max(1, ceil(total / page_size))`.
pub fn total_pages(total: u64, page_size: u32) -> u32 {
    let page_size = u64::from(page_size.max(1));
    let pages = total.div_ceil(page_size).max(1);
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// Pulls the record array out of a collection response.
///
/// Accepts a bare array or an object carrying the array under `key` (or a
/// generic `items` / `data` property). Returns `None` for any other shape.
pub fn extract_items(body: JsonValue, key: &str) -> Option<Vec<JsonValue>> {
    match body {
        JsonValue::Array(items) => Some(items),
        JsonValue::Object(mut map) => std::iter::once(key)
            .chain(GENERIC_COLLECTION_KEYS.iter().copied())
            .find_map(|k| match map.remove(k) {
                Some(JsonValue::Array(items)) => Some(items),
                _ => None,
            }),
        _ => None,
    }
}

/// Total record count advertised by a paginated envelope, if any.
pub fn extract_total(body: &JsonValue) -> Option<u64> {
    let map = body.as_object()?;
    TOTAL_KEYS.iter().find_map(|k| match map.get(*k)? {
        JsonValue::Number(n) => n.as_u64(),
        JsonValue::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}
