//! Preview server startup.

use tokio::sync::watch;

use super::config::AppConfig;
use crate::preview::{start_preview_server, PreviewServer};
use crate::spec::StoreSnapshot;

/// Start the preview server if enabled.
///
/// A bind failure is logged and the session continues without a preview.
pub async fn start_preview_system(
    config: &AppConfig,
    snapshots: watch::Receiver<StoreSnapshot>,
) -> Option<PreviewServer> {
    if !config.enable_preview_server {
        tracing::info!("preview server disabled");
        return None;
    }
    match start_preview_server(config.preview_addr(), snapshots).await {
        Ok(server) => Some(server),
        Err(e) => {
            tracing::warn!(code = e.error_code(), "preview server unavailable: {}", e);
            None
        }
    }
}
