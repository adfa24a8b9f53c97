//! Text encodings for the specification document.

use std::fmt;
use std::str::FromStr;

use serde_json::Value;

use crate::error::{DocumentError, DocumentResult};

/// The textual encoding the editor shows and parses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SpecFormat {
    #[default]
    Yaml,
    Json,
}

impl SpecFormat {
    pub const ALL: [SpecFormat; 2] = [SpecFormat::Yaml, SpecFormat::Json];

    /// Lowercase identifier used on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            SpecFormat::Yaml => "yaml",
            SpecFormat::Json => "json",
        }
    }

    /// Uppercase label used in the UI.
    pub fn label(&self) -> &'static str {
        match self {
            SpecFormat::Yaml => "YAML",
            SpecFormat::Json => "JSON",
        }
    }

    /// The other format.
    pub fn toggled(self) -> Self {
        match self {
            SpecFormat::Yaml => SpecFormat::Json,
            SpecFormat::Json => SpecFormat::Yaml,
        }
    }

    /// Message shown when text in this format is rejected.
    pub fn invalid_message(&self) -> String {
        format!("Invalid {} format", self.label())
    }

    /// Parse `text` into a document value.
    ///
    /// YAML aliases are expanded; mapping keys are read as strings, so an
    /// unquoted `200:` response code becomes `"200"`.
    pub fn parse(&self, text: &str) -> DocumentResult<Value> {
        match self {
            SpecFormat::Json => {
                serde_json::from_str(text).map_err(|e| DocumentError::parse(*self, e))
            }
            SpecFormat::Yaml => {
                serde_yaml::from_str(text).map_err(|e| DocumentError::parse(*self, e))
            }
        }
    }

    /// Render `doc` as text.
    ///
    /// JSON is pretty-printed with two-space indentation. YAML is block style
    /// and never emits anchors or aliases.
    pub fn serialize(&self, doc: &Value) -> DocumentResult<String> {
        match self {
            SpecFormat::Json => {
                serde_json::to_string_pretty(doc).map_err(|e| DocumentError::serialize(*self, e))
            }
            SpecFormat::Yaml => {
                serde_yaml::to_string(doc).map_err(|e| DocumentError::serialize(*self, e))
            }
        }
    }
}

impl fmt::Display for SpecFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SpecFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "yaml" | "yml" => Ok(SpecFormat::Yaml),
            "json" => Ok(SpecFormat::Json),
            other => Err(format!("unknown format '{}', expected yaml or json", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::sample_document;
    use serde_json::json;

    #[test]
    fn test_json_uses_two_space_indent() {
        let text = SpecFormat::Json
            .serialize(&json!({"openapi": "3.0.0", "paths": {}}))
            .unwrap();
        assert_eq!(text, "{\n  \"openapi\": \"3.0.0\",\n  \"paths\": {}\n}");
    }

    #[test]
    fn test_yaml_is_block_style() {
        let text = SpecFormat::Yaml.serialize(&sample_document()).unwrap();
        assert!(text.starts_with("openapi: 3.0.0\n"));
        assert!(text.contains("\ninfo:\n  title: My API\n"));
        assert!(!text.contains('{'));
        assert!(!text.contains('&'));
    }

    #[test]
    fn test_round_trip_both_formats() {
        let doc = sample_document();
        for format in SpecFormat::ALL {
            let text = format.serialize(&doc).unwrap();
            assert_eq!(format.parse(&text).unwrap(), doc, "{} round trip", format);
        }
    }

    #[test]
    fn test_yaml_numeric_keys_become_strings() {
        let doc = SpecFormat::Yaml
            .parse("responses:\n  200:\n    description: ok\n")
            .unwrap();
        assert_eq!(doc["responses"]["200"]["description"], "ok");
    }

    #[test]
    fn test_yaml_aliases_are_expanded_and_not_emitted() {
        let doc = SpecFormat::Yaml
            .parse("base: &b\n  type: string\ncopy: *b\n")
            .unwrap();
        assert_eq!(doc["copy"], json!({"type": "string"}));
        let text = SpecFormat::Yaml.serialize(&doc).unwrap();
        assert!(!text.contains('&'));
        assert!(!text.contains('*'));
    }

    #[test]
    fn test_version_like_strings_survive_yaml() {
        let doc = json!({"a": "1.0", "b": "true", "c": "null", "d": "200"});
        let text = SpecFormat::Yaml.serialize(&doc).unwrap();
        assert_eq!(SpecFormat::Yaml.parse(&text).unwrap(), doc);
    }

    #[test]
    fn test_yaml_integer_beyond_u64_is_rejected() {
        let err = SpecFormat::Yaml
            .parse("big: 18446744073709551616\n")
            .unwrap_err();
        assert!(matches!(
            err,
            DocumentError::Parse {
                format: SpecFormat::Yaml,
                ..
            }
        ));
        let doc = SpecFormat::Yaml.parse("big: 18446744073709551615\n").unwrap();
        assert_eq!(doc["big"], json!(u64::MAX));
    }

    #[test]
    fn test_parse_errors_name_format() {
        let err = SpecFormat::Json.parse("not valid json or yaml: [[[").unwrap_err();
        assert!(matches!(
            err,
            DocumentError::Parse {
                format: SpecFormat::Json,
                ..
            }
        ));
        let err = SpecFormat::Yaml.parse("not valid json or yaml: [[[").unwrap_err();
        assert!(matches!(
            err,
            DocumentError::Parse {
                format: SpecFormat::Yaml,
                ..
            }
        ));
    }

    #[test]
    fn test_from_str_and_toggle() {
        assert_eq!("YAML".parse::<SpecFormat>(), Ok(SpecFormat::Yaml));
        assert_eq!("yml".parse::<SpecFormat>(), Ok(SpecFormat::Yaml));
        assert_eq!("json".parse::<SpecFormat>(), Ok(SpecFormat::Json));
        assert!("toml".parse::<SpecFormat>().is_err());
        assert_eq!(SpecFormat::Yaml.toggled(), SpecFormat::Json);
        assert_eq!(SpecFormat::Json.toggled(), SpecFormat::Yaml);
        assert_eq!(SpecFormat::Json.invalid_message(), "Invalid JSON format");
    }
}
