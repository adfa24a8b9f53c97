//! HTML pages served by the preview server.
//!
//! Each page loads the renderer bundle from a CDN and points it at
//! `/openapi.json`. A small poller on `/healthz` reloads the page when the
//! document revision or the selected viewer changes.

use super::viewer::Viewer;

/// Notice shown in place of the RapiDoc renderer.
pub const RAPIDOC_UNAVAILABLE: &str =
    "RapiDoc viewer is currently unavailable. Please use Redoc or Swagger UI instead.";

const RELOAD_SCRIPT: &str = r#"<script>
  (function () {
    var seen = null;
    setInterval(function () {
      fetch('/healthz').then(function (r) { return r.json(); }).then(function (s) {
        var key = s.revision + ':' + s.viewer;
        if (seen !== null && key !== seen) { window.location.reload(); }
        seen = key;
      }).catch(function () {});
    }, 1000);
  })();
</script>"#;

const REDOC_BODY: &str = r#"<div id="redoc-container"></div>
<script src="https://cdn.redoc.ly/redoc/latest/bundles/redoc.standalone.js"></script>
<script>
  Redoc.init('/openapi.json', {
    scrollYOffset: 50,
    hideDownloadButton: true,
    expandResponses: '200,201',
    theme: {
      colors: { primary: { main: '#2563eb' } },
      typography: {
        fontFamily: 'system-ui, -apple-system, sans-serif',
        headings: { fontFamily: 'system-ui, -apple-system, sans-serif' }
      },
      sidebar: { backgroundColor: '#f3f4f6' }
    }
  }, document.getElementById('redoc-container'));
</script>"#;

const SWAGGER_HEAD: &str =
    r#"<link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css">"#;

const SWAGGER_BODY: &str = r#"<div id="swagger-ui"></div>
<script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
<script>
  window.ui = SwaggerUIBundle({
    url: '/openapi.json',
    dom_id: '#swagger-ui',
    docExpansion: 'list',
    defaultModelsExpandDepth: -1
  });
</script>"#;

fn escape(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '&' => "&amp;".to_string(),
            '<' => "&lt;".to_string(),
            '>' => "&gt;".to_string(),
            '"' => "&quot;".to_string(),
            '\'' => "&#39;".to_string(),
            other => other.to_string(),
        })
        .collect()
}

fn unavailable_body() -> String {
    format!(
        r#"<div style="margin:2rem;padding:1rem;border:1px solid #fde68a;background:#fffbeb;border-radius:6px;font-family:system-ui,sans-serif">
  <div style="color:#92400e;font-weight:600">RapiDoc Viewer</div>
  <div style="color:#b45309;font-size:0.9rem;margin-top:0.25rem">{}</div>
</div>"#,
        RAPIDOC_UNAVAILABLE
    )
}

/// Full page for `viewer`, titled after the document.
pub fn render_page(viewer: Viewer, title: &str) -> String {
    let (head, body) = match viewer {
        Viewer::Redoc => ("", REDOC_BODY.to_string()),
        Viewer::SwaggerUi => (SWAGGER_HEAD, SWAGGER_BODY.to_string()),
        Viewer::RapiDoc => ("", unavailable_body()),
    };
    let title = if title.is_empty() { "API preview" } else { title };
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{title} - {viewer}</title>
{head}
</head>
<body style="margin:0">
{body}
{reload}
</body>
</html>
"#,
        title = escape(title),
        viewer = viewer.label(),
        head = head,
        body = body,
        reload = RELOAD_SCRIPT,
    )
}
