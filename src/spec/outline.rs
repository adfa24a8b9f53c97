//! Read-only views over a document for the outline and header.
//!
//! The document is an open-ended value, so every accessor tolerates missing
//! or mistyped fields and simply leaves them out.

use serde_json::{Map, Value};

/// HTTP methods recognised as operations inside a path item.
pub const HTTP_METHODS: [&str; 8] = [
    "get", "put", "post", "delete", "options", "head", "patch", "trace",
];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InfoView {
    pub title: String,
    pub version: String,
    pub description: Option<String>,
    pub terms_of_service: Option<String>,
    pub contact: Option<ContactView>,
    pub license: Option<LicenseView>,
    pub logo_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactView {
    pub name: Option<String>,
    pub email: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LicenseView {
    pub name: String,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServerView {
    pub url: String,
    pub description: Option<String>,
    pub variables: Vec<ServerVariableView>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServerVariableView {
    pub name: String,
    pub default: String,
    pub options: Vec<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagView {
    pub name: String,
    pub description: Option<String>,
    pub external_docs: Option<String>,
}

/// One entry of the top-level `security` list: scheme name to scopes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SecurityRequirementView {
    pub schemes: Vec<(String, Vec<String>)>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathView {
    pub path: String,
    pub operations: Vec<OperationView>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OperationView {
    pub method: String,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub tags: Vec<String>,
    /// Status code and description, in document order.
    pub responses: Vec<(String, String)>,
}

/// The reusable component maps an OpenAPI document may define.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentKind {
    Schemas,
    SecuritySchemes,
    Parameters,
    Responses,
    RequestBodies,
    Headers,
}

impl ComponentKind {
    pub const ALL: [ComponentKind; 6] = [
        ComponentKind::Schemas,
        ComponentKind::SecuritySchemes,
        ComponentKind::Parameters,
        ComponentKind::Responses,
        ComponentKind::RequestBodies,
        ComponentKind::Headers,
    ];

    /// Key under `components`.
    pub fn key(&self) -> &'static str {
        match self {
            ComponentKind::Schemas => "schemas",
            ComponentKind::SecuritySchemes => "securitySchemes",
            ComponentKind::Parameters => "parameters",
            ComponentKind::Responses => "responses",
            ComponentKind::RequestBodies => "requestBodies",
            ComponentKind::Headers => "headers",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ComponentKind::Schemas => "Schemas",
            ComponentKind::SecuritySchemes => "Security Schemes",
            ComponentKind::Parameters => "Parameters",
            ComponentKind::Responses => "Responses",
            ComponentKind::RequestBodies => "Request Bodies",
            ComponentKind::Headers => "Headers",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentGroupView {
    pub kind: ComponentKind,
    pub entries: Vec<ComponentEntryView>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComponentEntryView {
    pub name: String,
    /// Short detail lines: property types for schemas, type/scheme for
    /// security schemes, the description otherwise.
    pub details: Vec<String>,
}

fn text(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(Value::as_str).map(str::to_string)
}

fn mapping<'a>(value: &'a Value, key: &str) -> Option<&'a Map<String, Value>> {
    value.get(key).and_then(Value::as_object)
}

fn list<'a>(value: &'a Value, key: &str) -> &'a [Value] {
    value
        .get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

fn strings(value: &Value) -> Vec<String> {
    value
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// The `info` block.
pub fn info(doc: &Value) -> InfoView {
    let Some(info) = doc.get("info") else {
        return InfoView::default();
    };
    let contact = info
        .get("contact")
        .filter(|c| c.as_object().is_some_and(|m| !m.is_empty()))
        .map(|c| ContactView {
            name: text(c, "name"),
            email: text(c, "email"),
            url: text(c, "url"),
        });
    let license = info.get("license").and_then(|l| {
        text(l, "name").map(|name| LicenseView {
            name,
            url: text(l, "url"),
        })
    });
    InfoView {
        title: text(info, "title").unwrap_or_default(),
        version: text(info, "version").unwrap_or_default(),
        description: text(info, "description"),
        terms_of_service: text(info, "termsOfService"),
        contact,
        license,
        logo_url: info.get("x-logo").and_then(|logo| text(logo, "url")),
    }
}

/// The `servers` list.
pub fn servers(doc: &Value) -> Vec<ServerView> {
    list(doc, "servers")
        .iter()
        .map(|server| ServerView {
            url: text(server, "url").unwrap_or_default(),
            description: text(server, "description"),
            variables: mapping(server, "variables")
                .map(|vars| {
                    vars.iter()
                        .map(|(name, var)| ServerVariableView {
                            name: name.clone(),
                            default: text(var, "default").unwrap_or_default(),
                            options: var.get("enum").map(strings).unwrap_or_default(),
                            description: text(var, "description"),
                        })
                        .collect()
                })
                .unwrap_or_default(),
        })
        .collect()
}

/// The `tags` list.
pub fn tags(doc: &Value) -> Vec<TagView> {
    list(doc, "tags")
        .iter()
        .filter_map(|tag| {
            Some(TagView {
                name: text(tag, "name")?,
                description: text(tag, "description"),
                external_docs: tag.get("externalDocs").and_then(|d| text(d, "url")),
            })
        })
        .collect()
}

/// The top-level `security` requirements.
pub fn security(doc: &Value) -> Vec<SecurityRequirementView> {
    list(doc, "security")
        .iter()
        .filter_map(Value::as_object)
        .map(|requirement| SecurityRequirementView {
            schemes: requirement
                .iter()
                .map(|(scheme, scopes)| (scheme.clone(), strings(scopes)))
                .collect(),
        })
        .collect()
}

/// Every path with its operations, in document order.
pub fn paths(doc: &Value) -> Vec<PathView> {
    let Some(paths) = mapping(doc, "paths") else {
        return Vec::new();
    };
    paths
        .iter()
        .map(|(path, item)| PathView {
            path: path.clone(),
            operations: item
                .as_object()
                .map(|methods| {
                    methods
                        .iter()
                        .filter(|(method, _)| HTTP_METHODS.contains(&method.as_str()))
                        .map(|(method, op)| operation(method, op))
                        .collect()
                })
                .unwrap_or_default(),
        })
        .collect()
}

fn operation(method: &str, op: &Value) -> OperationView {
    OperationView {
        method: method.to_string(),
        summary: text(op, "summary"),
        description: text(op, "description"),
        tags: op.get("tags").map(strings).unwrap_or_default(),
        responses: mapping(op, "responses")
            .map(|responses| {
                responses
                    .iter()
                    .map(|(code, response)| {
                        (
                            code.clone(),
                            text(response, "description")
                                .unwrap_or_else(|| "No description".to_string()),
                        )
                    })
                    .collect()
            })
            .unwrap_or_default(),
    }
}

/// Non-empty component groups, in [`ComponentKind::ALL`] order.
pub fn components(doc: &Value) -> Vec<ComponentGroupView> {
    let Some(components) = doc.get("components") else {
        return Vec::new();
    };
    ComponentKind::ALL
        .iter()
        .filter_map(|kind| {
            let items = mapping(components, kind.key()).filter(|m| !m.is_empty())?;
            Some(ComponentGroupView {
                kind: *kind,
                entries: items
                    .iter()
                    .map(|(name, item)| ComponentEntryView {
                        name: name.clone(),
                        details: component_details(*kind, item),
                    })
                    .collect(),
            })
        })
        .collect()
}

fn component_details(kind: ComponentKind, item: &Value) -> Vec<String> {
    match kind {
        ComponentKind::Schemas => mapping(item, "properties")
            .map(|props| {
                props
                    .iter()
                    .map(|(name, prop)| {
                        let ty = text(prop, "type").unwrap_or_else(|| "any".to_string());
                        match text(prop, "format") {
                            Some(format) => format!("{}: {} ({})", name, ty, format),
                            None => format!("{}: {}", name, ty),
                        }
                    })
                    .collect()
            })
            .unwrap_or_default(),
        ComponentKind::SecuritySchemes => {
            let mut details = Vec::new();
            if let Some(ty) = text(item, "type") {
                details.push(format!("Type: {}", ty));
            }
            if let Some(scheme) = text(item, "scheme") {
                details.push(format!("Scheme: {}", scheme));
            }
            if let Some(description) = text(item, "description") {
                details.push(description);
            }
            details
        }
        _ => vec![text(item, "description").unwrap_or_else(|| "No description".to_string())],
    }
}
