use hatstore::app::{App, AppMessage};
use hatstore::cli::{parse_args, run_cli_command, VERSION};
use hatstore::config::StoreConfig;
use hatstore::error::StoreError;
use hatstore::logging::init_logging;
use hatstore::terminal::{setup_panic_hook, TerminalManager};
use hatstore::ui;

use color_eyre::Result;
use crossterm::event::EventStream;
use futures::StreamExt;
use ratatui::Terminal;
use tokio::sync::mpsc;
use tracing::{info, warn};

fn main() -> Result<()> {
    // Flags are handled before any initialization
    if let Some(result) = run_cli_command(parse_args(std::env::args())) {
        return result;
    }

    color_eyre::install()?;

    let config = match StoreConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            let err = StoreError::from(err);
            eprintln!("Error: {}", err.user_message());
            eprintln!("Hint: {}", err.recovery_hint());
            std::process::exit(err.category().exit_code());
        }
    };

    // Logging is best effort; the store works without it
    match init_logging(&config) {
        Ok(Some(path)) => info!(version = VERSION, log = %path.display(), "hatstore starting"),
        Ok(None) => {}
        Err(err) => eprintln!("Warning: {} ({})", err.user_message(), err.error_code()),
    }

    // Restores the terminal before color-eyre prints the panic
    setup_panic_hook();

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(run(config))
}

async fn run(config: StoreConfig) -> Result<()> {
    let mut term_manager = TerminalManager::new(config.mouse)?;

    let mut app = App::new(config);
    let size = term_manager.size()?;
    app.update_terminal_dimensions(size.width, size.height);
    app.start();

    let result = run_app(term_manager.terminal(), &mut app).await;
    term_manager.restore()?;
    info!("hatstore exiting");
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();

    // Take the message receiver from the app (we need ownership for select!)
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();
    let tick_rate = app.config.tick_rate;

    loop {
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, app))?;
            app.needs_redraw = false;
        }

        let timeout = tokio::time::sleep(tick_rate);

        tokio::select! {
            _ = timeout => {
                app.tick();
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(event)) => app.handle_event(event),
                    Some(Err(err)) => warn!(error = %err, "failed to read terminal event"),
                    None => {
                        warn!("terminal event stream closed");
                        app.quit();
                    }
                }
            }

            // Loader completions
            msg = async {
                match &mut message_rx {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                if let Some(msg) = msg {
                    app.handle_message(msg);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
