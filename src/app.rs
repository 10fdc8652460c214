use std::rc::Rc;
use std::time::{Duration, Instant};

use ratatui::widgets::ListState;

use crate::config::{self, IconSet, Orientation};
use crate::toast::{AppBadgeRegistry, AppRecord, Toast, ToastOverride};
use crate::wifi::{EntryId, NetworkRow};

/// A toast the shell is currently presenting, plus its lifecycle state.
pub struct ActiveToast {
    pub toast: Toast,
    shown_at: Instant,
    leaving: bool,
}

impl ActiveToast {
    pub fn new(mut toast: Toast) -> Self {
        if let Some(animator) = toast.enter_animation_mut() {
            animator.start();
        }
        Self {
            toast,
            shown_at: Instant::now(),
            leaving: false,
        }
    }

    /// Starts the exit once the display duration has elapsed.
    pub fn tick(&mut self) {
        if !self.leaving
            && self.shown_at.elapsed() >= Duration::from_millis(config::TOAST_DURATION_MS)
        {
            self.leaving = true;
            if let Some(animator) = self.toast.exit_animation_mut() {
                animator.start();
            }
        }
    }

    pub fn is_done(&self) -> bool {
        if !self.leaving {
            return false;
        }
        match self.toast.exit_animation() {
            Some(animator) => animator.is_finished(),
            None => true,
        }
    }

    /// Current animation offset and opacity for rendering.
    pub fn animation(&self) -> ((i16, i16), f32) {
        if self.leaving {
            if let Some(animator) = self.toast.exit_animation() {
                return (
                    animator.offset(config::TOAST_SLIDE_TRAVEL),
                    animator.opacity(),
                );
            }
        } else if let Some(animator) = self.toast.enter_animation() {
            if !animator.is_finished() {
                return (
                    animator.offset(config::TOAST_SLIDE_TRAVEL),
                    animator.opacity(),
                );
            }
        }
        ((0, 0), 1.0)
    }
}

pub struct AppState {
    pub rows: Vec<NetworkRow>,
    pub l_state: ListState,
    pub toasts: Vec<ActiveToast>,
    pub orientation: Orientation,
    pub icons: IconSet,
    pub styled_toasts: bool,
    pub toast_plugin: Option<Rc<dyn ToastOverride>>,
    pub badge_registry: AppBadgeRegistry,
    pub show_key_logger: bool,
    pub last_key_press: Option<(String, Instant)>,
}

impl AppState {
    pub fn new(
        icons: IconSet,
        styled_toasts: bool,
        toast_plugin: Option<Rc<dyn ToastOverride>>,
        show_key_logger: bool,
    ) -> AppState {
        let mut badge_registry = AppBadgeRegistry::new();
        badge_registry.add_user(0);
        let settings_glyph = match icons {
            IconSet::Nerd => config::icons::nerd::SETTINGS,
            IconSet::Ascii => config::icons::ascii::SETTINGS,
        };
        badge_registry.insert(
            config::SETTINGS_APP_ID,
            0,
            AppRecord {
                glyph: settings_glyph.to_owned(),
                downloaded: false,
                launchable: true,
            },
        );

        AppState {
            rows: Vec::new(),
            l_state: ListState::default().with_selected(Some(0)),
            toasts: Vec::new(),
            orientation: Orientation::Portrait,
            icons,
            styled_toasts,
            toast_plugin,
            badge_registry,
            show_key_logger,
            last_key_press: None,
        }
    }

    pub fn next(&mut self) {
        let i = match self.l_state.selected() {
            Some(i) => {
                if i >= self.rows.len().saturating_sub(1) {
                    i
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.l_state.select(Some(i));
    }

    pub fn previous(&mut self) {
        let i = match self.l_state.selected() {
            Some(i) => {
                if i == 0 {
                    0
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.l_state.select(Some(i));
    }

    pub fn go_to_top(&mut self) {
        if !self.rows.is_empty() {
            self.l_state.select(Some(0));
        }
    }

    pub fn go_to_bottom(&mut self) {
        if !self.rows.is_empty() {
            self.l_state.select(Some(self.rows.len() - 1));
        }
    }

    pub fn selected_row_mut(&mut self) -> Option<&mut NetworkRow> {
        let index = self.l_state.selected()?;
        self.rows.get_mut(index)
    }

    pub fn row_mut(&mut self, id: EntryId) -> Option<&mut NetworkRow> {
        self.rows.iter_mut().find(|row| row.entry().id() == id)
    }

    pub fn row_title(&self, id: EntryId) -> Option<String> {
        self.rows
            .iter()
            .find(|row| row.entry().id() == id)
            .map(|row| row.title().to_owned())
    }

    pub fn push_toast(&mut self, text: &str, app_id: &str, user_id: u32) {
        let toast = Toast::new(
            &self.badge_registry,
            self.icons,
            text,
            app_id,
            user_id,
            self.styled_toasts,
            self.orientation,
            self.toast_plugin.clone(),
        );
        self.toasts.push(ActiveToast::new(toast));
    }

    pub fn tick_toasts(&mut self) {
        for toast in &mut self.toasts {
            toast.tick();
        }
        self.toasts.retain(|toast| !toast.is_done());
    }

    /// Terminal geometry changed; recompute orientation and let every live
    /// toast refresh its placement defaults.
    pub fn on_resize(&mut self, width: u16, height: u16) {
        self.orientation = Orientation::of(width, height);
        for toast in &mut self.toasts {
            toast.toast.on_orientation_change(self.orientation);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn styled_toast_gets_the_shell_badge() {
        let mut state = AppState::new(IconSet::Nerd, true, None, false);
        state.push_toast("Wi-Fi turned on", config::SETTINGS_APP_ID, 0);
        let view = state.toasts[0].toast.view();
        assert!(view.styled);
        assert_eq!(
            view.badge.as_ref().map(|b| b.glyph.as_str()),
            Some(config::icons::nerd::SETTINGS)
        );
    }

    #[test]
    fn plain_toast_has_no_animation_and_leaves_instantly() {
        let mut state = AppState::new(IconSet::Ascii, false, None, false);
        state.push_toast("hello", config::SETTINGS_APP_ID, 0);
        assert_eq!(state.toasts[0].toast.text(), "hello");
        assert!(!state.toasts[0].toast.has_custom_animation());

        // Fresh toast survives a tick.
        state.tick_toasts();
        assert_eq!(state.toasts.len(), 1);
        assert!(!state.toasts[0].is_done());
    }

    #[test]
    fn resize_reanchors_live_toasts() {
        let mut state = AppState::new(IconSet::Nerd, true, None, false);
        state.push_toast("hi", config::SETTINGS_APP_ID, 0);
        state.on_resize(200, 50);
        assert_eq!(state.orientation, Orientation::Landscape);
        assert_eq!(
            state.toasts[0].toast.y_offset(),
            config::TOAST_Y_OFFSET_LANDSCAPE
        );
    }

    #[test]
    fn selection_stays_in_bounds() {
        let mut state = AppState::new(IconSet::Nerd, true, None, false);
        state.next();
        assert_eq!(state.l_state.selected(), Some(0));
        state.previous();
        assert_eq!(state.l_state.selected(), Some(0));
    }
}
