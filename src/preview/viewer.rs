//! Viewer selection for the documentation preview.

use std::fmt;
use std::str::FromStr;

/// Which external documentation renderer receives the specification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Viewer {
    #[default]
    Redoc,
    SwaggerUi,
    /// Kept selectable, but always renders an "unavailable" notice.
    RapiDoc,
}

impl Viewer {
    pub const ALL: [Viewer; 3] = [Viewer::Redoc, Viewer::SwaggerUi, Viewer::RapiDoc];

    /// Identifier used on the command line and in URLs.
    pub fn id(&self) -> &'static str {
        match self {
            Viewer::Redoc => "redoc",
            Viewer::SwaggerUi => "swagger",
            Viewer::RapiDoc => "rapidoc",
        }
    }

    /// Label shown on the selector.
    pub fn label(&self) -> &'static str {
        match self {
            Viewer::Redoc => "Redoc",
            Viewer::SwaggerUi => "Swagger UI",
            Viewer::RapiDoc => "RapiDoc",
        }
    }

    /// False for the placeholder viewer that never invokes a renderer.
    pub fn is_available(&self) -> bool {
        !matches!(self, Viewer::RapiDoc)
    }

    /// Selector position, 1-based, matching the number keys.
    pub fn from_index(index: usize) -> Option<Self> {
        index.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }
}

impl fmt::Display for Viewer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Viewer {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "redoc" => Ok(Viewer::Redoc),
            "swagger" | "swagger-ui" | "swaggerui" => Ok(Viewer::SwaggerUi),
            "rapidoc" => Ok(Viewer::RapiDoc),
            other => Err(format!(
                "unknown viewer '{}', expected redoc, swagger or rapidoc",
                other
            )),
        }
    }
}
