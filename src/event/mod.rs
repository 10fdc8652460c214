//! Event handling module for wifipick
//!
//! This module owns the main loop: drawing, draining entry events into the
//! rows, advancing toast lifecycles, and keyboard/resize input.

mod handlers;

use std::time::{Duration, Instant};

use color_eyre::eyre::Result;
use crossterm::event::{self, Event, KeyEventKind, KeyModifiers};
use ratatui::DefaultTerminal;
use tokio::sync::mpsc::UnboundedReceiver;

use handlers::handle_main_view;

use crate::{
    app::AppState,
    config,
    sim::SimSource,
    ui::render,
    wifi::{EntryEvent, EntryId, RequestStatus},
};

pub async fn run(
    mut terminal: DefaultTerminal,
    state: &mut AppState,
    sim: &mut SimSource,
    mut entry_events: UnboundedReceiver<EntryEvent>,
    mut help_clicks: UnboundedReceiver<EntryId>,
) -> Result<()> {
    if let Ok(size) = terminal.size() {
        state.on_resize(size.width, size.height);
    }
    let mut last_sim_tick = Instant::now();

    loop {
        terminal.draw(|frame| render(frame, state))?;

        // The scripted backend advances between frames.
        if last_sim_tick.elapsed() >= Duration::from_millis(config::SIM_TICK_MS) {
            sim.tick();
            last_sim_tick = Instant::now();
        }

        // Entry callbacks, pushed by the backend
        while let Ok(entry_event) = entry_events.try_recv() {
            dispatch_entry_event(state, entry_event);
        }

        // Help clicks raised by row listeners
        while let Ok(id) = help_clicks.try_recv() {
            let help_uri = state
                .row_mut(id)
                .and_then(|row| row.entry().help_uri());
            if let Some(uri) = help_uri {
                state.push_toast(&format!("Opening {uri}"), config::SETTINGS_APP_ID, 0);
            }
        }

        state.tick_toasts();

        if event::poll(Duration::from_millis(config::EVENT_POLL_MS))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    // Log key press if enabled
                    if state.show_key_logger {
                        let mut key_str = String::new();
                        if key.modifiers.contains(KeyModifiers::CONTROL) {
                            key_str.push_str("Ctrl+");
                        }
                        if key.modifiers.contains(KeyModifiers::ALT) {
                            key_str.push_str("Alt+");
                        }
                        let code_str = match key.code {
                            event::KeyCode::Char(c) => c.to_string(),
                            event::KeyCode::Enter => "Enter".to_string(),
                            event::KeyCode::Esc => "Esc".to_string(),
                            other => format!("{:?}", other),
                        };
                        key_str.push_str(&code_str);
                        state.last_key_press = Some((key_str, Instant::now()));
                    }

                    // Global shortcuts
                    if key.code == event::KeyCode::Char('c')
                        && key.modifiers.contains(KeyModifiers::CONTROL)
                    {
                        break;
                    }

                    if handle_main_view(key, state) {
                        break;
                    }
                }
                Event::Resize(width, height) => state.on_resize(width, height),
                _ => {}
            }
        }
    }
    Ok(())
}

/// Routes one backend event to its row's callback hook, then applies the
/// shell-level reaction (result toasts).
fn dispatch_entry_event(state: &mut AppState, entry_event: EntryEvent) {
    match entry_event {
        EntryEvent::Updated(id) => {
            if let Some(row) = state.row_mut(id) {
                row.on_updated();
            }
        }
        EntryEvent::ConnectResult(id, status) => {
            if let Some(row) = state.row_mut(id) {
                row.on_connect_result(status);
            }
            if let Some(title) = state.row_title(id) {
                let text = match status {
                    RequestStatus::Success => format!("Connected to {title}"),
                    RequestStatus::Failure => format!("Could not connect to {title}"),
                };
                state.push_toast(&text, config::SETTINGS_APP_ID, 0);
            }
        }
        EntryEvent::DisconnectResult(id, status) => {
            if let Some(row) = state.row_mut(id) {
                row.on_disconnect_result(status);
            }
            if status == RequestStatus::Success {
                if let Some(title) = state.row_title(id) {
                    state.push_toast(
                        &format!("Disconnected from {title}"),
                        config::SETTINGS_APP_ID,
                        0,
                    );
                }
            }
        }
        EntryEvent::ForgetResult(id, status) => {
            if let Some(row) = state.row_mut(id) {
                row.on_forget_result(status);
            }
        }
        EntryEvent::SignInResult(id, status) => {
            if let Some(row) = state.row_mut(id) {
                row.on_sign_in_result(status);
            }
        }
    }
}
