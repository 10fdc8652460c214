use crate::config::IconSet;
use crate::error::{ResourceError, ResourceResult};
use crate::wifi::entry::{WIFI_LEVEL_MAX, WIFI_LEVEL_MIN, WifiStandard};

/// Level-list signal icon. The bound row pushes the current level into it,
/// selecting which frame of the pie is drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignalIcon {
    frames: [&'static str; 5],
    badge: Option<&'static str>,
    level: usize,
}

impl SignalIcon {
    pub fn new(frames: [&'static str; 5], badge: Option<&'static str>) -> Self {
        Self {
            frames,
            badge,
            level: 0,
        }
    }

    pub fn set_level(&mut self, level: i32) {
        self.level = level.clamp(WIFI_LEVEL_MIN, WIFI_LEVEL_MAX) as usize;
    }

    pub fn glyph(&self) -> &'static str {
        self.frames[self.level]
    }

    pub fn badge(&self) -> Option<&'static str> {
        self.badge
    }
}

/// Maps entry state to a signal icon. Injectable so rows can be rendered
/// against any glyph source.
pub trait SignalIconResolver {
    fn resolve(
        &self,
        show_x: bool,
        level: i32,
        standard: WifiStandard,
        is_ready: bool,
    ) -> Option<SignalIcon>;
}

/// Default resolver backed by the active icon set's glyph tables.
#[derive(Debug, Clone, Copy)]
pub struct GlyphIconResolver {
    icons: IconSet,
}

impl GlyphIconResolver {
    pub fn new(icons: IconSet) -> Self {
        Self { icons }
    }
}

impl SignalIconResolver for GlyphIconResolver {
    fn resolve(
        &self,
        show_x: bool,
        level: i32,
        standard: WifiStandard,
        is_ready: bool,
    ) -> Option<SignalIcon> {
        if !(WIFI_LEVEL_MIN..=WIFI_LEVEL_MAX).contains(&level) {
            return None;
        }
        let frames = self.icons.signal_frames(show_x);
        let badge = if standard == WifiStandard::Ax && is_ready {
            self.icons.glyph("wifi6.badge").ok()
        } else {
            None
        };
        Some(SignalIcon::new(frames, badge))
    }
}

/// Two-state lock/cost glyph for the friction slot. Like a state-list
/// drawable, it keeps the secured state once it has been set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrictionStateList {
    cost: &'static str,
    lock: &'static str,
    secured: bool,
}

impl FrictionStateList {
    pub fn from_icon_set(icons: IconSet) -> ResourceResult<Self> {
        let cost = icons
            .glyph("friction.cost")
            .map_err(|_| ResourceError::FrictionUnavailable)?;
        let lock = icons
            .glyph("friction.lock")
            .map_err(|_| ResourceError::FrictionUnavailable)?;
        Ok(Self {
            cost,
            lock,
            secured: false,
        })
    }

    pub fn set_secured(&mut self) {
        self.secured = true;
    }

    pub fn current(&self) -> &'static str {
        if self.secured { self.lock } else { self.cost }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::icons::nerd;
    use crate::wifi::entry::WIFI_LEVEL_UNREACHABLE;

    #[test]
    fn resolver_rejects_out_of_range_levels() {
        let resolver = GlyphIconResolver::new(IconSet::Nerd);
        assert!(
            resolver
                .resolve(false, WIFI_LEVEL_UNREACHABLE, WifiStandard::Ac, false)
                .is_none()
        );
        assert!(
            resolver
                .resolve(false, WIFI_LEVEL_MAX + 1, WifiStandard::Ac, false)
                .is_none()
        );
    }

    #[test]
    fn resolver_picks_the_x_table_when_asked() {
        let resolver = GlyphIconResolver::new(IconSet::Nerd);
        let mut icon = resolver
            .resolve(true, 3, WifiStandard::Ac, false)
            .expect("icon");
        icon.set_level(3);
        assert_eq!(icon.glyph(), nerd::SIGNAL_X[3]);
        assert_eq!(icon.badge(), None);
    }

    #[test]
    fn wifi6_badge_requires_ax_and_readiness() {
        let resolver = GlyphIconResolver::new(IconSet::Nerd);
        let badged = resolver.resolve(false, 2, WifiStandard::Ax, true).unwrap();
        assert_eq!(badged.badge(), Some(nerd::WIFI6_BADGE));

        let not_ready = resolver.resolve(false, 2, WifiStandard::Ax, false).unwrap();
        assert_eq!(not_ready.badge(), None);

        let not_ax = resolver.resolve(false, 2, WifiStandard::Ac, true).unwrap();
        assert_eq!(not_ax.badge(), None);

        let newer = resolver.resolve(false, 2, WifiStandard::Be, true).unwrap();
        assert_eq!(newer.badge(), None);
    }

    #[test]
    fn level_selects_the_frame_and_clamps() {
        let resolver = GlyphIconResolver::new(IconSet::Ascii);
        let mut icon = resolver.resolve(false, 0, WifiStandard::N, false).unwrap();
        icon.set_level(2);
        assert_eq!(icon.glyph(), IconSet::Ascii.signal_frames(false)[2]);
        icon.set_level(99);
        assert_eq!(icon.glyph(), IconSet::Ascii.signal_frames(false)[4]);
    }

    #[test]
    fn friction_state_sticks_once_secured() {
        let mut friction = FrictionStateList::from_icon_set(IconSet::Ascii).unwrap();
        assert_eq!(friction.current(), "$");
        friction.set_secured();
        // No path back to the cost glyph.
        assert_eq!(friction.current(), "*");
    }
}
