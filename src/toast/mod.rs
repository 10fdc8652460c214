//! Toast adapter: every visual property is resolved plugin-first, falling
//! back to defaults that track the terminal orientation.

pub mod animation;
mod badge;
mod plugin;

use std::rc::Rc;

use crate::config::{self, IconSet, Orientation};

pub use animation::{Animator, Easing, Motion};
pub use badge::{AppBadge, AppBadgeRegistry, AppRecord};
pub use plugin::{FixedGravity, ToastOverride};

/// Vertical anchor for a toast inside the terminal area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gravity {
    Top,
    Center,
    Bottom,
}

pub const DEFAULT_X_OFFSET: i16 = 0;
pub const DEFAULT_HORIZONTAL_MARGIN: u16 = 0;
pub const DEFAULT_VERTICAL_MARGIN: u16 = 0;

/// What a toast draws: its text and, when styled, the badge of the app that
/// raised it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastView {
    pub text: String,
    pub badge: Option<AppBadge>,
    pub styled: bool,
}

impl ToastView {
    /// Plain text view, the stock factory every unstyled toast goes through.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            badge: None,
            styled: false,
        }
    }

    fn styled(text: &str, badge: Option<AppBadge>) -> Self {
        Self {
            text: text.to_owned(),
            badge,
            styled: true,
        }
    }
}

/// One transient notification.
///
/// Built once per display. The view is inflated exactly once at
/// construction; y-offset and gravity defaults are recomputed on every
/// orientation change.
pub struct Toast {
    text: String,
    plugin: Option<Rc<dyn ToastOverride>>,
    view: ToastView,
    enter: Option<Animator>,
    exit: Option<Animator>,
    default_y: i16,
    default_gravity: Gravity,
}

impl Toast {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        registry: &AppBadgeRegistry,
        icons: IconSet,
        text: impl Into<String>,
        app_id: &str,
        user_id: u32,
        styled: bool,
        orientation: Orientation,
        plugin: Option<Rc<dyn ToastOverride>>,
    ) -> Self {
        let text = text.into();
        let view = Self::inflate_view(&plugin, registry, icons, &text, app_id, user_id, styled);
        let enter = Self::create_enter_animator(&plugin, styled);
        let exit = Self::create_exit_animator(&plugin, styled);
        let mut toast = Self {
            text,
            plugin,
            view,
            enter,
            exit,
            default_y: 0,
            default_gravity: Gravity::Bottom,
        };
        toast.on_orientation_change(orientation);
        toast
    }

    fn inflate_view(
        plugin: &Option<Rc<dyn ToastOverride>>,
        registry: &AppBadgeRegistry,
        icons: IconSet,
        text: &str,
        app_id: &str,
        user_id: u32,
        styled: bool,
    ) -> ToastView {
        if let Some(plugin) = plugin {
            if let Some(view) = plugin.view() {
                return view;
            }
        }
        if styled {
            ToastView::styled(text, registry.badged_glyph(icons, app_id, user_id))
        } else {
            ToastView::plain(text)
        }
    }

    fn create_enter_animator(
        plugin: &Option<Rc<dyn ToastOverride>>,
        styled: bool,
    ) -> Option<Animator> {
        if let Some(plugin) = plugin {
            if let Some(animator) = plugin.enter_animation() {
                return Some(animator);
            }
        }
        if styled { Some(animation::toast_in()) } else { None }
    }

    fn create_exit_animator(
        plugin: &Option<Rc<dyn ToastOverride>>,
        styled: bool,
    ) -> Option<Animator> {
        if let Some(plugin) = plugin {
            if let Some(animator) = plugin.exit_animation() {
                return Some(animator);
            }
        }
        if styled { Some(animation::toast_out()) } else { None }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn gravity(&self) -> Gravity {
        if let Some(gravity) = self.plugin.as_ref().and_then(|p| p.gravity()) {
            return gravity;
        }
        self.default_gravity
    }

    pub fn x_offset(&self) -> i16 {
        if let Some(x) = self.plugin.as_ref().and_then(|p| p.x_offset()) {
            return x;
        }
        DEFAULT_X_OFFSET
    }

    pub fn y_offset(&self) -> i16 {
        if let Some(y) = self.plugin.as_ref().and_then(|p| p.y_offset()) {
            return y;
        }
        self.default_y
    }

    pub fn horizontal_margin(&self) -> u16 {
        if let Some(margin) = self.plugin.as_ref().and_then(|p| p.horizontal_margin()) {
            return margin;
        }
        DEFAULT_HORIZONTAL_MARGIN
    }

    pub fn vertical_margin(&self) -> u16 {
        if let Some(margin) = self.plugin.as_ref().and_then(|p| p.vertical_margin()) {
            return margin;
        }
        DEFAULT_VERTICAL_MARGIN
    }

    pub fn view(&self) -> &ToastView {
        &self.view
    }

    pub fn enter_animation(&self) -> Option<&Animator> {
        self.enter.as_ref()
    }

    pub fn enter_animation_mut(&mut self) -> Option<&mut Animator> {
        self.enter.as_mut()
    }

    pub fn exit_animation(&self) -> Option<&Animator> {
        self.exit.as_ref()
    }

    pub fn exit_animation_mut(&mut self) -> Option<&mut Animator> {
        self.exit.as_mut()
    }

    /// Whether this toast has a custom animation.
    pub fn has_custom_animation(&self) -> bool {
        self.enter.is_some() || self.exit.is_some()
    }

    /// Called on orientation changes to update placement defaults. The
    /// plugin hears about the change first.
    pub fn on_orientation_change(&mut self, orientation: Orientation) {
        if let Some(plugin) = &self.plugin {
            plugin.on_orientation_change(orientation);
        }
        self.default_y = config::toast_y_offset(orientation);
        self.default_gravity = config::toast_default_gravity(orientation);
    }
}
