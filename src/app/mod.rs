//! Application state and logic for the TUI.
//!
//! This module contains the core [`App`] struct and related types:
//! - [`Focus`] - Which pane has focus
//! - [`EditorTab`] - Which surface the left pane shows
//! - [`AppMessage`] - Messages from spawned tasks

mod actions;
mod editor;
mod handlers;
mod messages;
mod navigation;
mod types;

pub use messages::AppMessage;
pub use types::{
    EditorTab, FieldTarget, Focus, OutlineSection, OutlineState, VisualEditorState,
};

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::assistant::{AssistantPanel, CompletionClient, SessionCredential};
use crate::input::CommandRegistry;
use crate::spec::{SpecFormat, SpecStore};
use crate::startup::AppConfig;
use crate::traits::HttpClient;
use crate::widgets::TextAreaInput;

/// Ticks between spinner frames while a request is in flight.
const SPINNER_TICKS: u64 = 6;

/// Represents the state of the application
pub struct App {
    /// The document, its text format and the selected viewer
    pub store: SpecStore,
    pub focus: Focus,
    pub tab: EditorTab,
    /// Text form of the document in the active format
    pub code_editor: TextAreaInput<'static>,
    /// Question for the assistant
    pub prompt_input: TextAreaInput<'static>,
    /// Masked API key entry
    pub credential_input: TextAreaInput<'static>,
    /// Buffer for the visual editor field being edited
    pub field_input: TextAreaInput<'static>,
    pub visual: VisualEditorState,
    pub outline: OutlineState,
    pub assistant: AssistantPanel,
    pub client: CompletionClient,
    pub registry: CommandRegistry,
    /// Address of the running preview server, if any
    pub preview_url: Option<String>,
    /// Rejection message for the code editor buffer
    pub editor_error: Option<String>,
    /// One-line notice in the status bar
    pub status: Option<String>,
    /// Store revision and format the code editor buffer reflects
    synced_revision: u64,
    synced_format: SpecFormat,
    /// Receiver for async messages (taken by the event loop)
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Sender for async messages (cloned into spawned tasks)
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    pub should_quit: bool,
    /// Dirty flag for render optimization
    pub needs_redraw: bool,
    pub tick_count: u64,
}

impl App {
    /// Create an App around an existing store and assistant.
    pub fn new(store: SpecStore, assistant: AssistantPanel, client: CompletionClient) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        let synced_revision = store.revision();
        let synced_format = store.format();

        let mut app = Self {
            store,
            focus: Focus::default(),
            tab: EditorTab::default(),
            code_editor: TextAreaInput::new().with_line_numbers(),
            prompt_input: TextAreaInput::new()
                .with_placeholder("Ask the assistant to change the specification..."),
            credential_input: TextAreaInput::new()
                .masked('*')
                .with_placeholder("sk-..."),
            field_input: TextAreaInput::new(),
            visual: VisualEditorState::default(),
            outline: OutlineState::default(),
            assistant,
            client,
            registry: CommandRegistry::new(),
            preview_url: None,
            editor_error: None,
            status: None,
            synced_revision,
            synced_format,
            message_rx: Some(message_rx),
            message_tx,
            should_quit: false,
            needs_redraw: true,
            tick_count: 0,
        };
        app.reload_code_editor();
        app
    }

    /// Build the App described by `config`, talking to the provider over `http`.
    pub fn from_config(config: &AppConfig, http: Arc<dyn HttpClient>) -> Self {
        let mut store = SpecStore::new();
        store.set_format(config.initial_format);
        store.set_viewer(config.initial_viewer);

        let assistant = AssistantPanel::new(SessionCredential::new(config.api_key.clone()));
        let client = CompletionClient::new(http, config.api_base_url.clone(), config.model.clone());
        let mut app = Self::new(store, assistant, client);
        if app.assistant.credential_entry_open() {
            app.focus = Focus::Assistant;
        }
        app
    }

    /// Mark the UI as needing a redraw
    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Advance the animation clock.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        if self.assistant.is_busy() && self.tick_count % SPINNER_TICKS == 0 {
            self.mark_dirty();
        }
    }

    /// Spinner frame index for the busy indicator.
    pub fn spinner_frame(&self) -> usize {
        (self.tick_count / SPINNER_TICKS) as usize
    }

    pub fn synced_revision(&self) -> u64 {
        self.synced_revision
    }
}
