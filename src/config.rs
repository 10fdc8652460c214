/// Centralized configuration constants for wifipick
use crate::error::{ResourceError, ResourceResult};
use crate::toast::Gravity;

// Timing
pub const EVENT_POLL_MS: u64 = 100;
pub const SIM_TICK_MS: u64 = 900;
pub const TOAST_DURATION_MS: u64 = 4000;
pub const KEY_LOGGER_LINGER_SECS: u64 = 2;

// UI Dimensions
pub const MAIN_WINDOW_HEIGHT: u16 = 32;
pub const MAIN_WINDOW_WIDTH: u16 = 77;
pub const TOAST_MAX_WIDTH: u16 = 48;
pub const TOAST_SLIDE_TRAVEL: u16 = 2;

// Toast placement defaults. The y offset leaves room for whatever chrome sits
// at the anchored edge, which differs between the two terminal shapes.
pub const TOAST_Y_OFFSET_PORTRAIT: i16 = 3;
pub const TOAST_Y_OFFSET_LANDSCAPE: i16 = 1;

/// Terminal shape, re-derived on every resize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Portrait,
    Landscape,
}

impl Orientation {
    // Terminal cells are roughly twice as tall as they are wide, so a
    // visually square window is ~2:1 in cells.
    pub fn of(width: u16, height: u16) -> Self {
        if width >= height.saturating_mul(2) {
            Orientation::Landscape
        } else {
            Orientation::Portrait
        }
    }
}

pub fn toast_y_offset(orientation: Orientation) -> i16 {
    match orientation {
        Orientation::Portrait => TOAST_Y_OFFSET_PORTRAIT,
        Orientation::Landscape => TOAST_Y_OFFSET_LANDSCAPE,
    }
}

pub fn toast_default_gravity(_orientation: Orientation) -> Gravity {
    Gravity::Bottom
}

/// App id the shell's own toasts are raised under.
pub const SETTINGS_APP_ID: &str = "org.shell.settings";

// Accessibility strings
pub mod strings {
    /// Indexed by signal level 0..=4.
    pub const SIGNAL_STRENGTH: [&str; 5] = [
        "no signal",
        "signal one bar",
        "signal two bars",
        "signal three bars",
        "signal full",
    ];

    pub const SECURITY_NONE: &str = "open network";
    pub const SECURITY_SECURED: &str = "secured network";
    pub const HELP_LABEL: &str = "help";
}

// Icons - Nerd Fonts
pub mod icons {
    pub mod nerd {
        /// Signal pie indexed by level 0..=4.
        pub const SIGNAL: [&str; 5] = ["󰤯", "󰤟", "󰤢", "󰤥", "󰤨"];
        /// "Pie plus x" variant for networks without internet access.
        pub const SIGNAL_X: [&str; 5] = ["󰤫", "󰤠", "󰤣", "󰤦", "󰤩"];
        pub const WIFI6_BADGE: &str = "⁶";
        pub const LOCK: &str = "󰌾"; // nf-md-lock
        pub const COST: &str = "󰇁"; // nf-md-currency_usd
        pub const HELP: &str = "󰋗"; // nf-md-help_circle
        pub const CONNECTED: &str = "󰖩"; // nf-md-wifi_check
        pub const WORK_BADGE: &str = "󰃖"; // nf-md-briefcase
        pub const SETTINGS: &str = "󰒓"; // nf-md-cog
        pub const HIGHLIGHT: &str = "  "; // Two spaces for alignment
    }

    pub mod ascii {
        pub const SIGNAL: [&str; 5] = ["[     ]", "[=    ]", "[==   ]", "[===  ]", "[==== ]"];
        pub const SIGNAL_X: [&str; 5] = ["[    x]", "[=   x]", "[==  x]", "[=== x]", "[====x]"];
        pub const WIFI6_BADGE: &str = "6";
        pub const LOCK: &str = "*";
        pub const COST: &str = "$";
        pub const HELP: &str = "(?)";
        pub const CONNECTED: &str = "<-";
        pub const WORK_BADGE: &str = "#";
        pub const SETTINGS: &str = "[S]";
        pub const HIGHLIGHT: &str = "> ";
    }
}

/// Icon set to use based on configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IconSet {
    #[default]
    Nerd,
    Ascii,
}

impl IconSet {
    pub fn signal_frames(&self, show_x: bool) -> [&'static str; 5] {
        match (self, show_x) {
            (IconSet::Nerd, false) => icons::nerd::SIGNAL,
            (IconSet::Nerd, true) => icons::nerd::SIGNAL_X,
            (IconSet::Ascii, false) => icons::ascii::SIGNAL,
            (IconSet::Ascii, true) => icons::ascii::SIGNAL_X,
        }
    }

    /// Look up a named glyph. Unknown names are a `ResourceError`, which
    /// callers treat as "icon absent".
    pub fn glyph(&self, name: &str) -> ResourceResult<&'static str> {
        let glyph = match (self, name) {
            (IconSet::Nerd, "friction.lock") => icons::nerd::LOCK,
            (IconSet::Nerd, "friction.cost") => icons::nerd::COST,
            (IconSet::Nerd, "help") => icons::nerd::HELP,
            (IconSet::Nerd, "wifi6.badge") => icons::nerd::WIFI6_BADGE,
            (IconSet::Nerd, "work.badge") => icons::nerd::WORK_BADGE,
            (IconSet::Nerd, "connected") => icons::nerd::CONNECTED,
            (IconSet::Ascii, "friction.lock") => icons::ascii::LOCK,
            (IconSet::Ascii, "friction.cost") => icons::ascii::COST,
            (IconSet::Ascii, "help") => icons::ascii::HELP,
            (IconSet::Ascii, "wifi6.badge") => icons::ascii::WIFI6_BADGE,
            (IconSet::Ascii, "work.badge") => icons::ascii::WORK_BADGE,
            (IconSet::Ascii, "connected") => icons::ascii::CONNECTED,
            _ => return Err(ResourceError::GlyphNotFound(name.to_owned())),
        };
        Ok(glyph)
    }

    pub fn highlight(&self) -> &'static str {
        match self {
            IconSet::Nerd => icons::nerd::HIGHLIGHT,
            IconSet::Ascii => icons::ascii::HIGHLIGHT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orientation_follows_cell_geometry() {
        assert_eq!(Orientation::of(160, 40), Orientation::Landscape);
        assert_eq!(Orientation::of(80, 50), Orientation::Portrait);
    }

    #[test]
    fn unknown_glyph_is_an_error() {
        let err = IconSet::Nerd.glyph("no-such-glyph").unwrap_err();
        assert!(matches!(err, ResourceError::GlyphNotFound(name) if name == "no-such-glyph"));
    }

    #[test]
    fn both_icon_sets_carry_the_friction_pair() {
        for set in [IconSet::Nerd, IconSet::Ascii] {
            assert!(set.glyph("friction.lock").is_ok());
            assert!(set.glyph("friction.cost").is_ok());
        }
    }

    #[test]
    fn y_offset_differs_per_orientation() {
        assert_ne!(
            toast_y_offset(Orientation::Portrait),
            toast_y_offset(Orientation::Landscape)
        );
    }
}
