//! Field-level edits used by the structured editor.
//!
//! Each function returns a modified copy of the document. Nothing here
//! touches the store; the caller commits the copy through
//! [`SpecStore::replace_from_object`](super::SpecStore::replace_from_object).

use serde_json::{json, Map, Value};

/// Editable fields of the `info` block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InfoField {
    Title,
    Version,
    Description,
}

impl InfoField {
    pub const ALL: [InfoField; 3] = [InfoField::Title, InfoField::Version, InfoField::Description];

    pub fn key(&self) -> &'static str {
        match self {
            InfoField::Title => "title",
            InfoField::Version => "version",
            InfoField::Description => "description",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            InfoField::Title => "Title",
            InfoField::Version => "Version",
            InfoField::Description => "Description",
        }
    }

    pub fn multiline(&self) -> bool {
        matches!(self, InfoField::Description)
    }
}

/// Editable fields of a server entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServerField {
    Url,
    Description,
}

impl ServerField {
    pub const ALL: [ServerField; 2] = [ServerField::Url, ServerField::Description];

    pub fn key(&self) -> &'static str {
        match self {
            ServerField::Url => "url",
            ServerField::Description => "description",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ServerField::Url => "URL",
            ServerField::Description => "Description",
        }
    }

    pub fn multiline(&self) -> bool {
        matches!(self, ServerField::Description)
    }
}

/// Current value of an info field, empty when absent.
pub fn info_field(doc: &Value, field: InfoField) -> String {
    doc.get("info")
        .and_then(|info| info.get(field.key()))
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// Current value of a server field, empty when absent.
pub fn server_field(doc: &Value, index: usize, field: ServerField) -> String {
    server_list(doc)
        .get(index)
        .and_then(|server| server.get(field.key()))
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// Number of entries in `servers`.
pub fn server_count(doc: &Value) -> usize {
    server_list(doc).len()
}

fn server_list(doc: &Value) -> Vec<Value> {
    doc.get("servers")
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default()
}

fn with_root(doc: &Value, f: impl FnOnce(&mut Map<String, Value>)) -> Value {
    let mut updated = doc.clone();
    if let Some(root) = updated.as_object_mut() {
        f(root);
    }
    updated
}

/// Copy of `doc` with one info field set.
pub fn with_info_field(doc: &Value, field: InfoField, value: &str) -> Value {
    with_root(doc, |root| {
        let info = root
            .entry("info")
            .or_insert_with(|| Value::Object(Map::new()));
        if !info.is_object() {
            *info = Value::Object(Map::new());
        }
        if let Some(info) = info.as_object_mut() {
            info.insert(field.key().to_string(), Value::String(value.to_string()));
        }
    })
}

/// Copy of `doc` with a placeholder server appended.
pub fn with_server_added(doc: &Value) -> Value {
    let mut servers = server_list(doc);
    servers.push(json!({"url": "https://", "description": "New server"}));
    with_root(doc, |root| {
        root.insert("servers".to_string(), Value::Array(servers));
    })
}

/// Copy of `doc` without the server at `index`. Out-of-range is a no-op.
pub fn with_server_removed(doc: &Value, index: usize) -> Value {
    let mut servers = server_list(doc);
    if index >= servers.len() {
        return doc.clone();
    }
    servers.remove(index);
    with_root(doc, |root| {
        root.insert("servers".to_string(), Value::Array(servers));
    })
}

/// Copy of `doc` with one field of the server at `index` set.
pub fn with_server_field(doc: &Value, index: usize, field: ServerField, value: &str) -> Value {
    let mut servers = server_list(doc);
    let Some(server) = servers.get_mut(index) else {
        return doc.clone();
    };
    if !server.is_object() {
        *server = Value::Object(Map::new());
    }
    if let Some(server) = server.as_object_mut() {
        server.insert(field.key().to_string(), Value::String(value.to_string()));
    }
    with_root(doc, |root| {
        root.insert("servers".to_string(), Value::Array(servers));
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::{is_minimal_shape, sample_document};

    #[test]
    fn test_with_info_field_keeps_other_fields() {
        let doc = sample_document();
        let updated = with_info_field(&doc, InfoField::Title, "Pet Store");
        assert_eq!(info_field(&updated, InfoField::Title), "Pet Store");
        assert_eq!(info_field(&updated, InfoField::Version), "1.0.0");
        assert_eq!(updated["paths"], doc["paths"]);
        assert_eq!(info_field(&doc, InfoField::Title), "My API");
    }

    #[test]
    fn test_empty_description_is_kept_as_empty_string() {
        let updated = with_info_field(&sample_document(), InfoField::Description, "");
        assert_eq!(updated["info"]["description"], "");
    }

    #[test]
    fn test_add_and_remove_servers() {
        let doc = sample_document();
        assert_eq!(server_count(&doc), 0);

        let one = with_server_added(&doc);
        let two = with_server_added(&one);
        assert_eq!(server_count(&two), 2);
        assert_eq!(server_field(&two, 1, ServerField::Url), "https://");
        assert_eq!(server_field(&two, 1, ServerField::Description), "New server");
        assert!(is_minimal_shape(&two));

        let edited = with_server_field(&two, 0, ServerField::Url, "https://api.example.com");
        let removed = with_server_removed(&edited, 1);
        assert_eq!(server_count(&removed), 1);
        assert_eq!(server_field(&removed, 0, ServerField::Url), "https://api.example.com");
    }

    #[test]
    fn test_out_of_range_server_edits_are_noops() {
        let doc = with_server_added(&sample_document());
        assert_eq!(with_server_removed(&doc, 5), doc);
        assert_eq!(with_server_field(&doc, 5, ServerField::Url, "x"), doc);
    }

    #[test]
    fn test_non_list_servers_treated_as_empty() {
        let mut doc = sample_document();
        doc["servers"] = json!({"url": "odd"});
        let updated = with_server_added(&doc);
        assert_eq!(server_count(&updated), 1);
    }
}
