//! ghostcfg application runtime (terminal lifecycle, background workers, and
//! event loop).
//!
//! The binary entrypoint stays minimal; everything from terminal setup to
//! shutdown lives here.

use std::time::Duration;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

use crossterm::{
    event::{self, Event as CEvent},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::{select, sync::mpsc};

use crate::args::Args;
use crate::config::ConfigFile;
use crate::ghostty::docs::{self, DocsMap};
use crate::ghostty::{fonts, paths, themes, NoopReload, ReloadGateway, SignalReload, Theme};
use crate::options::OptionStore;
use crate::schema::{Platform, SchemaRegistry};
use crate::state::AppState;
use crate::ui::ui;

fn setup_terminal() -> Result<()> {
    enable_raw_mode()?;
    execute!(std::io::stdout(), EnterAlternateScreen)?;
    Ok(())
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(std::io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Build the full theme catalog: names from the CLI, colors from the theme
/// files. Runs on a blocking worker at startup.
fn collect_themes(platform: Platform) -> Vec<Theme> {
    let names = themes::list_theme_names();
    tracing::info!(count = names.len(), "theme listing fetched");
    names
        .into_iter()
        .map(|name| {
            themes::load_theme(platform, &name)
                .unwrap_or_else(|| themes::parse_theme_text(&name, ""))
        })
        .collect()
}

/// What: Start the ghostcfg TUI runtime and run the main event loop.
///
/// Inputs:
/// - `args`: Parsed command line.
///
/// Output:
/// - `Ok(())` on normal shutdown, or the initialization error.
///
/// Details:
/// - Loads and parses the config, builds the option store, spawns the
///   input-poll thread plus background workers for the theme catalog and
///   option docs, then drives rendering and event dispatch via `select!`.
pub async fn run(args: Args) -> Result<()> {
    let schema = SchemaRegistry::current();
    let platform = schema.platform();
    let path = args
        .config
        .unwrap_or_else(|| paths::ghostty_config_path(platform));
    tracing::info!(path = %path.display(), platform = platform.tag(), "editing config");

    let file = ConfigFile::new(path);
    let doc = file.load(|k| schema.captures_trailing_comment(k))?;
    let store = OptionStore::load(&doc, &schema);
    let gateway: Box<dyn ReloadGateway + Send + Sync> = if args.no_reload {
        tracing::info!("reload signaling disabled");
        Box::new(NoopReload)
    } else {
        Box::new(SignalReload)
    };
    let mut app = AppState::new(schema, file, doc, store, gateway);
    if let Some(cached) = docs::load_cached() {
        app.docs = cached;
    }

    setup_terminal()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(std::io::stdout()))?;

    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<CEvent>();
    let (tick_tx, mut tick_rx) = mpsc::unbounded_channel::<()>();
    let (themes_tx, mut themes_rx) = mpsc::unbounded_channel::<Vec<Theme>>();
    let (fonts_tx, mut fonts_rx) = mpsc::unbounded_channel::<Vec<String>>();
    let (docs_tx, mut docs_rx) = mpsc::unbounded_channel::<DocsMap>();

    std::thread::spawn(move || {
        loop {
            if let Ok(true) = event::poll(Duration::from_millis(50))
                && let Ok(ev) = event::read()
            {
                let _ = event_tx.send(ev);
            }
        }
    });

    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_millis(200));
        loop {
            interval.tick().await;
            let _ = tick_tx.send(());
        }
    });

    tokio::task::spawn_blocking(move || {
        let _ = themes_tx.send(collect_themes(platform));
    });

    tokio::task::spawn_blocking(move || {
        let _ = fonts_tx.send(fonts::list_fonts());
    });

    tokio::task::spawn_blocking(move || {
        if let Some(fetched) = docs::fetch() {
            docs::save_cache(&fetched);
            let _ = docs_tx.send(fetched);
        }
    });

    loop {
        let _ = terminal.draw(|f| ui(f, &mut app));

        select! {
            Some(ev) = event_rx.recv() => {
                if crate::events::handle_event(ev, &mut app) {
                    break;
                }
            }
            Some(list) = themes_rx.recv() => {
                app.themes = list;
                app.themes_loading = false;
                if app.themes.is_empty() {
                    app.modal = crate::state::Modal::Alert {
                        title: "Themes".to_string(),
                        message: "ghostty +list-themes returned nothing; the theme browser will stay empty".to_string(),
                    };
                } else if app.theme_state.selected().is_none() {
                    app.theme_state.select(Some(0));
                }
            }
            Some(list) = fonts_rx.recv() => {
                app.fonts = list;
            }
            Some(fetched) = docs_rx.recv() => {
                app.docs = fetched;
            }
            Some(()) = tick_rx.recv() => {
                app.on_tick();
            }
            else => {}
        }
    }

    restore_terminal()?;
    Ok(())
}
