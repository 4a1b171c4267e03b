use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// A remote category row.
///
/// `content` is an opaque structured payload wrapping `{"items": [...]}`;
/// the exact item shape depends on the category name and is decoded by the
/// caller via [`decode_items`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    #[serde(default)]
    pub id: String,
    /// The session token that owns this category.
    #[serde(rename = "user_id")]
    pub owner_token: String,
    pub name: String,
    pub content: serde_json::Value,
}

/// Decode the `items` array out of a category content blob.
///
/// Lenient on purpose: a missing `items` key or a shape mismatch yields an
/// empty collection rather than an error. The local optimistic state is
/// authoritative; a malformed blob is logged and otherwise ignored.
pub fn decode_items<T: DeserializeOwned>(category: &Category) -> Vec<T> {
    let Some(items) = category.content.get("items") else {
        tracing::warn!(category = %category.name, "Category content has no items array");
        return Vec::new();
    };
    match serde_json::from_value(items.clone()) {
        Ok(items) => items,
        Err(e) => {
            tracing::warn!(category = %category.name, error = %e, "Failed to decode category items");
            Vec::new()
        }
    }
}
