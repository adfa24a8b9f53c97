use specdeck::adapters::ReqwestHttpClient;
use specdeck::app::{App, AppMessage};
use specdeck::cli::{parse_args, run_cli_command};
use specdeck::input::Command;
use specdeck::startup::{init_logging, start_preview_system, AppConfig};
use specdeck::ui;

use color_eyre::Result;
use crossterm::{
    cursor::Show,
    event::{DisableBracketedPaste, EnableBracketedPaste, Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use tokio::sync::mpsc;

fn main() -> Result<()> {
    // --version / --help exit before the terminal is touched
    let options = match run_cli_command(parse_args(std::env::args())) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("{}", message);
            std::process::exit(2);
        }
    };

    color_eyre::install()?;

    // Setup panic hook to ensure terminal cleanup on panic
    setup_panic_hook();

    match init_logging() {
        Ok(path) => tracing::info!("logging to {}", path.display()),
        Err(e) => eprintln!("warning: file logging disabled: {}", e),
    }

    let config = AppConfig::from_env()?.apply_cli(&options);
    tracing::info!(
        format = %config.initial_format.label(),
        viewer = %config.initial_viewer.label(),
        preview = config.enable_preview_server,
        "starting specdeck"
    );

    let runtime = tokio::runtime::Runtime::new()?;

    let mut app = App::from_config(&config, Arc::new(ReqwestHttpClient::new()));

    // The preview server follows the store through its snapshot channel
    let preview_server =
        runtime.block_on(start_preview_system(&config, app.store.subscribe()));
    if let Some(server) = &preview_server {
        app.preview_url = Some(server.url());
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = runtime.block_on(run_app(&mut terminal, &mut app));

    // Restore terminal
    restore_terminal(&mut terminal)?;

    if let Some(server) = preview_server {
        server.shutdown();
    }
    if let Err(e) = &result {
        tracing::error!("session ended with error: {}", e);
    }

    result
}

/// Setup panic hook to restore terminal on panic
fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableBracketedPaste, LeaveAlternateScreen);
        let _ = execute!(io::stdout(), Show);

        original_hook(panic_info);
    }));
}

/// Restore terminal to normal mode
fn restore_terminal<B: ratatui::backend::Backend + std::io::Write>(
    terminal: &mut Terminal<B>,
) -> Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;
    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    // Create async event stream for keyboard input
    let mut event_stream = EventStream::new();

    // Take the message receiver from the app (we need ownership for select!)
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();

    loop {
        // Draw the UI only when needed
        if app.needs_redraw {
            terminal.draw(|f| {
                ui::render(f, &mut *app);
            })?;
            app.needs_redraw = false;
        }

        // 16ms tick drives the spinner
        let timeout = tokio::time::sleep(std::time::Duration::from_millis(16));

        tokio::select! {
            _ = timeout => {
                app.tick();
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Resize(_, _))) => app.mark_dirty(),
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        app.handle_key(key);
                    }
                    Some(Ok(Event::Paste(text))) => {
                        app.execute_command(Command::Paste(text));
                    }
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        tracing::error!("terminal event error: {}", e);
                    }
                    None => break,
                }
            }

            Some(msg) = async {
                match &mut message_rx {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                app.handle_message(msg);
            }
        }

        // Another surface may have replaced the document
        app.refresh_code_from_store();

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
