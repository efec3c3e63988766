//! Demo event loop wiring the presenter, the debouncer, and config
//! hot-reload together in a small TUI.

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use parking_lot::Mutex;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use tokio::sync::mpsc;

use crate::classify::classify_error;
use crate::config::{ConfigStore, ConfigWatcher, ReloadEvent};
use crate::debounce::Debouncer;
use crate::notify::Presenter;
use crate::ui::terminal_guard::setup_terminal;
use crate::ui::theme::{Theme, GLOBAL_BORDER, HINT_TEXT};
use crate::ui::toasts::TermRenderer;

const TICK: Duration = Duration::from_millis(50);
/// Quiet period for the demo's debounced trigger.
const DEMO_DEBOUNCE: Duration = Duration::from_millis(300);

/// Raw upstream error strings the `x` key cycles through.
const SAMPLE_ERRORS: [&str; 4] = [
    "Daily quota exceeded for search requests",
    "Invalid API key supplied",
    "Network error: fetch failed",
    "Internal server error (500)",
];

/// Runs the demo until `q` or Esc.
pub async fn run(store: ConfigStore) -> Result<()> {
    let config = store.get();
    let (mut terminal, _guard) = setup_terminal().context("terminal setup failed")?;

    let renderer = Arc::new(TermRenderer::new(Theme::from_config(&config.theme)));
    // Shared with the debounced trigger, so a reload swaps the timings for
    // every later toast, including debounced ones.
    let presenter = Arc::new(Mutex::new(Presenter::with_timings(
        Arc::clone(&renderer),
        config.timings.to_timings(),
    )));

    let (reload_tx, mut reload_rx) = mpsc::unbounded_channel();
    // Keeps the channel open even when watching is disabled.
    let _reload_tx = reload_tx.clone();
    let _watcher = match ConfigWatcher::start(
        store.clone(),
        reload_tx,
        Duration::from_millis(config.reload_debounce_ms),
    ) {
        Ok(watcher) => Some(watcher),
        Err(e) => {
            tracing::warn!("config watching disabled: {e}");
            None
        }
    };

    let (input_tx, mut input_rx) = mpsc::unbounded_channel();
    thread::spawn(move || input_loop(&input_tx));

    let trigger = Debouncer::new(DEMO_DEBOUNCE, {
        let presenter = Arc::clone(&presenter);
        move |count: u32| {
            presenter
                .lock()
                .info(format!("Trigger #{count} settled after the quiet period"));
        }
    });

    let mut trigger_count: u32 = 0;
    let mut error_cursor = 0usize;
    let mut ticker = tokio::time::interval(TICK);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                terminal.draw(|frame| draw(frame, &renderer))?;
            }
            Some(code) = input_rx.recv() => {
                match code {
                    KeyCode::Char('q') | KeyCode::Esc => break,
                    KeyCode::Char('s') => presenter.lock().success("Saved"),
                    KeyCode::Char('e') => presenter.lock().error("Something went wrong"),
                    KeyCode::Char('i') => presenter.lock().info("Background refresh finished"),
                    KeyCode::Char('w') => presenter.lock().warning("Disk space is getting low"),
                    KeyCode::Char('x') => {
                        let raw = SAMPLE_ERRORS[error_cursor % SAMPLE_ERRORS.len()];
                        error_cursor += 1;
                        let kind = classify_error(raw);
                        tracing::debug!(?kind, raw, "classified upstream error");
                        presenter.lock().error(kind.notice());
                    }
                    KeyCode::Char('f') => {
                        trigger_count += 1;
                        trigger.call(trigger_count);
                    }
                    _ => {}
                }
            }
            Some(event) = reload_rx.recv() => {
                match event {
                    ReloadEvent::Reloaded => {
                        let config = store.get();
                        renderer.set_theme(Theme::from_config(&config.theme));
                        let mut current = presenter.lock();
                        *current = Presenter::with_timings(
                            Arc::clone(&renderer),
                            config.timings.to_timings(),
                        );
                        current.info("Configuration reloaded");
                    }
                    ReloadEvent::Failed(message) => {
                        presenter.lock().error(format!("Config reload failed: {message}"));
                    }
                }
            }
        }
    }

    Ok(())
}

fn draw(frame: &mut Frame, renderer: &TermRenderer) {
    let area = frame.area();
    let hints = " s/e/i/w: toast  │  x: classified error  │  f: debounced trigger  │  q: quit";
    let style = Style::default().fg(HINT_TEXT).add_modifier(Modifier::DIM);

    let body = Paragraph::new(Line::from(Span::styled(hints, style))).block(
        Block::default()
            .title(" toastline ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    );
    frame.render_widget(body, area);

    // Toasts overlay everything else.
    renderer.render(frame, area);
}

/// Forwards key presses to the async loop; runs on a plain thread because
/// crossterm's polling is blocking.
fn input_loop(tx: &mpsc::UnboundedSender<KeyCode>) {
    loop {
        match event::poll(TICK) {
            Ok(true) => {
                if let Ok(Event::Key(key)) = event::read() {
                    if key.kind == KeyEventKind::Press && tx.send(key.code).is_err() {
                        break;
                    }
                }
            }
            Ok(false) => {
                if tx.is_closed() {
                    break;
                }
            }
            Err(_) => break,
        }
    }
}
