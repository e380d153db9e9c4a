use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Server pagination envelope (`{content, totalElements, totalPages, ...}`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageEnvelope<T> {
    #[serde(default = "Vec::new")]
    pub content: Vec<T>,
    #[serde(default)]
    pub total_elements: u64,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub size: u32,
    #[serde(default)]
    pub first: bool,
    #[serde(default)]
    pub last: bool,
}

impl<T> PageEnvelope<T> {
    /// Wraps a bare list as a single page so callers can treat both shapes alike.
    pub fn single(content: Vec<T>) -> Self {
        let len = content.len();
        Self {
            content,
            total_elements: len as u64,
            total_pages: if len == 0 { 0 } else { 1 },
            page: 0,
            size: len as u32,
            first: true,
            last: true,
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PageEnvelope<U> {
        PageEnvelope {
            content: self.content.into_iter().map(f).collect(),
            total_elements: self.total_elements,
            total_pages: self.total_pages,
            page: self.page,
            size: self.size,
            first: self.first,
            last: self.last,
        }
    }
}

/// Unwraps a list response.
///
/// A bare array is returned unchanged, an object whose `content` field is an
/// array yields that array, and anything else is returned as is.
pub fn normalize_list(body: Value) -> Value {
    match body {
        Value::Array(_) => body,
        Value::Object(mut map) => match map.remove("content") {
            Some(content @ Value::Array(_)) => content,
            Some(other) => {
                map.insert("content".to_string(), other);
                Value::Object(map)
            }
            None => Value::Object(map),
        },
        other => other,
    }
}

/// Reads a list response as a page: envelope metadata is kept when present,
/// a bare array becomes a single page, anything else an empty page.
pub fn page_from_value(body: &Value) -> PageEnvelope<Value> {
    match body {
        Value::Array(items) => PageEnvelope::single(items.clone()),
        Value::Object(map) if matches!(map.get("content"), Some(Value::Array(_))) => {
            serde_json::from_value::<PageEnvelope<Value>>(body.clone())
                .unwrap_or_else(|_| PageEnvelope::single(Vec::new()))
        }
        _ => PageEnvelope::single(Vec::new()),
    }
}

/// Query string parameters accepted by the list endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    pub page: u32,
    pub size: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_dir: Option<String>,
}

impl ListQuery {
    pub const DEFAULT_SIZE: u32 = 50;

    pub fn new(page: u32, size: u32) -> Self {
        Self {
            page,
            size,
            search: None,
            status: None,
            role: None,
            vehicle_id: None,
            sort_by: None,
            sort_dir: None,
        }
    }

    /// Empty strings are treated as "no filter".
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        let search = search.into();
        self.search = if search.trim().is_empty() { None } else { Some(search) };
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        let status = status.into();
        self.status = if status.is_empty() { None } else { Some(status) };
        self
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        let role = role.into();
        self.role = if role.is_empty() { None } else { Some(role) };
        self
    }

    pub fn with_vehicle(mut self, vehicle_id: i64) -> Self {
        self.vehicle_id = Some(vehicle_id);
        self
    }

    pub fn with_sort(mut self, field: impl Into<String>, ascending: bool) -> Self {
        self.sort_by = Some(field.into());
        self.sort_dir = Some(if ascending { "ASC" } else { "DESC" }.to_string());
        self
    }
}

impl Default for ListQuery {
    fn default() -> Self {
        Self::new(0, Self::DEFAULT_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_normalize_envelope() {
        let body = json!({"content": [{"id": 3}, {"id": 1}], "totalElements": 2});
        assert_eq!(normalize_list(body), json!([{"id": 3}, {"id": 1}]));
    }

    #[test]
    fn test_normalize_bare_array() {
        let body = json!([{"id": 1}, {"id": 2}]);
        assert_eq!(normalize_list(body.clone()), body);
    }

    #[test]
    fn test_normalize_other_shapes_unchanged() {
        let object = json!({"content": "nope", "x": 1});
        assert_eq!(normalize_list(object.clone()), object);
        assert_eq!(normalize_list(json!({"id": 1})), json!({"id": 1}));
        assert_eq!(normalize_list(Value::Null), Value::Null);
        assert_eq!(normalize_list(json!(42)), json!(42));
    }

    #[test]
    fn test_page_from_envelope_keeps_totals() {
        let body = json!({"content": [{"id": 1}], "totalElements": 31, "totalPages": 4, "page": 2});
        let page = page_from_value(&body);
        assert_eq!(page.content.len(), 1);
        assert_eq!(page.total_elements, 31);
        assert_eq!(page.total_pages, 4);
        assert_eq!(page.page, 2);
    }

    #[test]
    fn test_page_from_bare_array() {
        let page = page_from_value(&json!([1, 2, 3]));
        assert_eq!(page.total_elements, 3);
        assert_eq!(page.total_pages, 1);
        assert!(page.first && page.last);
    }

    #[test]
    fn test_list_query_filters() {
        let query = ListQuery::default().with_search("  ").with_status("PENDING");
        assert_eq!(query.search, None);
        assert_eq!(query.status.as_deref(), Some("PENDING"));
        assert_eq!(query.size, 50);
    }
}
