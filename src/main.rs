use std::sync::Arc;

use color_eyre::Result;
use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use ratatui::Terminal;

use guide_drawer::adapters::FileViewStateStore;
use guide_drawer::app::App;
use guide_drawer::cli::{parse_args, run_cli_command, VERSION};
use guide_drawer::config::DrawerConfig;
use guide_drawer::content::Catalog;
use guide_drawer::drawer::PanelStack;
use guide_drawer::input::{CommandRegistry, InputContext};
use guide_drawer::terminal::{setup_panic_hook, TerminalManager};
use guide_drawer::{logging, ui};

fn main() -> Result<()> {
    let parsed = parse_args(std::env::args());
    let config = parsed.apply(DrawerConfig::from_env());

    // CLI commands run before any terminal setup
    if let Some(result) = run_cli_command(&parsed.command, &config) {
        return result;
    }

    color_eyre::install()?;

    // Setup panic hook to ensure terminal cleanup on panic
    setup_panic_hook();

    let _log_guard = match logging::init(&config) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Warning: logging disabled: {}", e);
            None
        }
    };
    tracing::info!(
        version = VERSION,
        scope = ?config.view_state_scope,
        width_percent = config.drawer_width_percent,
        "guide-drawer starting"
    );

    let catalog = Arc::new(Catalog::bundled()?);
    let store = FileViewStateStore::open(config.resolve_state_dir()?);
    let mut app = App::new(catalog, PanelStack::new(), Box::new(store), &config);

    let runtime = tokio::runtime::Runtime::new()?;
    let mut manager = TerminalManager::new()?;
    let result = runtime.block_on(run_app(manager.terminal(), &mut app));

    // Restore the terminal before any error report is printed
    drop(manager);

    if let Err(ref e) = result {
        tracing::error!(error = %e, "guide-drawer exited with error");
    }
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let registry = CommandRegistry::new();
    let mut event_stream = EventStream::new();
    // Drawers may be opened through any clone of the stack, not only by
    // key handling.
    let mut stack_rx = app.stack().subscribe();

    loop {
        if app.needs_redraw {
            app.needs_redraw = false;
            let mut again = false;
            terminal.draw(|f| {
                again = ui::render(f, app);
            })?;
            if again {
                app.needs_redraw = true;
                continue;
            }
        }

        if app.should_quit {
            tracing::info!("guide-drawer quitting");
            return Ok(());
        }

        tokio::select! {
            changed = stack_rx.changed() => {
                if changed.is_err() {
                    return Ok(());
                }
                app.on_stack_changed();
            }

            event = event_stream.next() => {
                match event {
                    Some(Ok(Event::Key(key))) => {
                        let context = InputContext::from_app(app);
                        if let Some(command) = registry.dispatch(key, &context) {
                            tracing::trace!(?command, "key command");
                            app.execute_command(command);
                        }
                    }
                    Some(Ok(Event::Mouse(mouse))) => {
                        let context = InputContext::from_app(app);
                        if let Some(command) =
                            registry.dispatch_mouse(mouse.kind, &context, app.scroll_lines)
                        {
                            app.execute_command(command);
                        }
                    }
                    Some(Ok(Event::Resize(_, _))) => {
                        app.needs_redraw = true;
                    }
                    Some(Ok(_)) => {}
                    Some(Err(e)) => return Err(e.into()),
                    None => return Ok(()),
                }
            }
        }
    }
}
