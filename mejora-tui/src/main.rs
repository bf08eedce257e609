mod api;
mod app;
mod config;
#[macro_use]
mod logging;
mod terminal;
mod ui;

use anyhow::Result;
use app::{App, InputMode, Tab};
use clap::Parser;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use std::time::Duration;

/// Mejora - cliente de terminal para solicitudes de mejora de procesos
#[derive(Parser)]
#[command(name = "mejora")]
#[command(about = "Registra y consulta solicitudes de mejora de procesos desde la terminal")]
#[command(version)]
struct Cli {
    /// Server URL to connect to
    #[arg(long, short, env = "MEJORA_SERVER_URL")]
    server: Option<String>,

    /// Enable verbose logging
    #[arg(long, short)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments
    let cli = Cli::parse();

    // Load environment variables from .env file
    config::load_env();

    // Initialize logging system
    let log_config = if cli.verbose {
        logging::LogConfig::verbose()
    } else {
        logging::LogConfig::default()
    };
    logging::init_logging(&log_config)?;

    // Determine server URL based on CLI args, env vars and defaults
    let server_url = config::determine_server_url(cli.server);
    log::info!("Usando servidor {}", server_url);

    // Initialize terminal
    let mut tui = terminal::init()?;

    let mut app = App::with_server_url(server_url);
    app.log_config = log_config;

    // The counters strip is visible from the first frame; fetch it
    // before entering the loop. Failures only log.
    app.load_estadisticas().await?;

    // Main event loop
    while app.running {
        // Clear expired toast notifications
        app.clear_expired_toast();

        tui.draw(|frame| ui::render(&mut app, frame))?;

        // Perform a pending listing load after the UI has rendered the
        // loading state
        if app.current_tab == Tab::Listado && app.listado.pending_load {
            app.listado.pending_load = false;
            app.load_solicitudes().await?;
        }

        // Same pattern for the form: the frame above showed the
        // "Enviando..." row, now issue the request
        if app.formulario.pending_submit {
            app.formulario.pending_submit = false;
            app.submit_solicitud().await?;
        }

        // Handle events with timeout
        if event::poll(Duration::from_millis(100))? {
            let event = event::read()?;

            // Keyboard-only navigation
            if matches!(event, Event::Mouse(_)) {
                continue;
            }

            if let Event::Key(key) = event {
                if key.kind == KeyEventKind::Press {
                    // Async operations are dispatched here; everything
                    // else goes through the synchronous handler.
                    match key.code {
                        KeyCode::Enter
                            if app.current_tab == Tab::Listado
                                && app.input_mode == InputMode::Navigation
                                && app.detalle.is_none()
                                && !app.show_help =>
                        {
                            if let Some(id) = app.listado.seleccionada().map(|s| s.id) {
                                app.open_detalle(id).await?;
                            }
                        }
                        _ => {
                            app.handle_key_event(key)?;
                        }
                    }
                }
            }
        }
    }

    // Restore terminal
    terminal::restore()?;

    Ok(())
}
