//! The specification store.
//!
//! [`SpecStore`] is the single source of truth for the document being edited,
//! the active text format, and the selected preview viewer. It is owned by
//! the event loop and passed by reference to render functions; code that runs
//! elsewhere (the preview server) receives immutable [`StoreSnapshot`]s over a
//! `watch` channel instead of touching the store.
//!
//! Every mutator is atomic: a rejected document leaves the store exactly as
//! it was before the call.

use std::sync::Arc;

use serde_json::Value;
use tokio::sync::watch;

use super::format::SpecFormat;
use super::sample::sample_document;
use super::validate::check_minimal_shape;
use crate::error::{DocumentError, DocumentResult};
use crate::preview::Viewer;

/// What subscribers see after each published change.
#[derive(Debug, Clone)]
pub struct StoreSnapshot {
    pub document: Arc<Value>,
    pub viewer: Viewer,
    /// Document revision; unchanged by viewer switches.
    pub revision: u64,
}

/// Holds the current specification and its presentation selectors.
#[derive(Debug)]
pub struct SpecStore {
    document: Value,
    format: SpecFormat,
    viewer: Viewer,
    /// Bumped on every accepted replacement that changes the document.
    revision: u64,
    publisher: watch::Sender<StoreSnapshot>,
}

impl Default for SpecStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SpecStore {
    /// Create a store holding the sample document, YAML format, Redoc viewer.
    pub fn new() -> Self {
        Self::from_parts(sample_document(), SpecFormat::default(), Viewer::default())
    }

    /// Create a store holding `document`, which must satisfy the minimal shape.
    pub fn with_document(document: Value) -> DocumentResult<Self> {
        check_minimal_shape(&document)?;
        Ok(Self::from_parts(
            document,
            SpecFormat::default(),
            Viewer::default(),
        ))
    }

    fn from_parts(document: Value, format: SpecFormat, viewer: Viewer) -> Self {
        let (publisher, _) = watch::channel(StoreSnapshot {
            document: Arc::new(document.clone()),
            viewer,
            revision: 0,
        });
        Self {
            document,
            format,
            viewer,
            revision: 0,
            publisher,
        }
    }

    /// The current document.
    pub fn document(&self) -> &Value {
        &self.document
    }

    /// The active text format.
    pub fn format(&self) -> SpecFormat {
        self.format
    }

    /// The selected preview viewer.
    pub fn viewer(&self) -> Viewer {
        self.viewer
    }

    /// Revision counter for change detection by observers.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Serialize the document in the active format.
    pub fn formatted_text(&self) -> DocumentResult<String> {
        self.format.serialize(&self.document)
    }

    /// Switch the active format. The document is not touched.
    pub fn set_format(&mut self, format: SpecFormat) {
        if self.format != format {
            tracing::debug!(from = %self.format, to = %format, "switched text format");
            self.format = format;
        }
    }

    /// Switch the preview viewer. The document is not touched.
    pub fn set_viewer(&mut self, viewer: Viewer) {
        if self.viewer != viewer {
            tracing::debug!(from = %self.viewer, to = %viewer, "switched preview viewer");
            self.viewer = viewer;
            self.publish();
        }
    }

    /// Replace the document wholesale if it satisfies the minimal shape.
    ///
    /// Returns whether the document was accepted.
    pub fn replace_from_object(&mut self, document: Value) -> bool {
        self.try_replace_from_object(document).is_ok()
    }

    /// Parse `text` in the active format and replace the document with it.
    ///
    /// Parse failures and shape failures both return false with the store
    /// unchanged.
    pub fn replace_from_text(&mut self, text: &str) -> bool {
        self.try_replace_from_text(text).is_ok()
    }

    /// [`replace_from_object`](Self::replace_from_object) with the rejection cause.
    pub fn try_replace_from_object(&mut self, document: Value) -> DocumentResult<()> {
        if let Err(violation) = check_minimal_shape(&document) {
            tracing::debug!(%violation, "rejected specification object");
            return Err(violation.into());
        }
        if document != self.document {
            self.document = document;
            self.revision += 1;
            tracing::debug!(revision = self.revision, "accepted specification");
            self.publish();
        }
        Ok(())
    }

    /// [`replace_from_text`](Self::replace_from_text) with the rejection cause.
    pub fn try_replace_from_text(&mut self, text: &str) -> DocumentResult<()> {
        let document = self.format.parse(text).inspect_err(|err| {
            if let DocumentError::Parse { message, .. } = err {
                tracing::debug!(format = %self.format, %message, "rejected specification text");
            }
        })?;
        self.try_replace_from_object(document)
    }

    /// Subscribe to document and viewer changes.
    pub fn subscribe(&self) -> watch::Receiver<StoreSnapshot> {
        self.publisher.subscribe()
    }

    /// A snapshot of the current state.
    pub fn snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            document: Arc::new(self.document.clone()),
            viewer: self.viewer,
            revision: self.revision,
        }
    }

    fn publish(&self) {
        self.publisher.send_replace(self.snapshot());
    }
}
