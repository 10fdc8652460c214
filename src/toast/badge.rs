//! App badge lookup for styled toasts, keyed by app id and user id.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::config::IconSet;

/// Glyph for the app that raised a toast, plus a profile badge for
/// non-primary users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppBadge {
    pub glyph: String,
    pub profile_badge: Option<&'static str>,
}

/// What the shell knows about one installed app under one user.
#[derive(Debug, Clone)]
pub struct AppRecord {
    pub glyph: String,
    pub downloaded: bool,
    pub launchable: bool,
}

#[derive(Debug, Default)]
pub struct AppBadgeRegistry {
    users: HashSet<u32>,
    apps: HashMap<(String, u32), AppRecord>,
}

impl AppBadgeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_user(&mut self, user_id: u32) {
        self.users.insert(user_id);
    }

    pub fn insert(&mut self, app_id: &str, user_id: u32, record: AppRecord) {
        self.apps.insert((app_id.to_owned(), user_id), record);
    }

    /// Badged glyph for the app, or `None` when the toast should hide its
    /// icon slot: the user isn't fully initialized yet, the app is unknown,
    /// or it is neither downloaded nor launchable.
    pub fn badged_glyph(&self, icons: IconSet, app_id: &str, user_id: u32) -> Option<AppBadge> {
        if !self.users.contains(&user_id) {
            debug!(app_id, user_id, "user not fully initialized, no app glyph");
            return None;
        }
        let record = self.apps.get(&(app_id.to_owned(), user_id))?;
        if !record.downloaded && !record.launchable {
            return None;
        }
        let profile_badge = if user_id != 0 {
            icons.glyph("work.badge").ok()
        } else {
            None
        };
        Some(AppBadge {
            glyph: record.glyph.clone(),
            profile_badge,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::icons::nerd;

    fn registry() -> AppBadgeRegistry {
        let mut registry = AppBadgeRegistry::new();
        registry.add_user(0);
        registry.add_user(10);
        registry.insert(
            "org.mail",
            0,
            AppRecord {
                glyph: "󰇮".to_owned(),
                downloaded: true,
                launchable: true,
            },
        );
        registry.insert(
            "org.mail",
            10,
            AppRecord {
                glyph: "󰇮".to_owned(),
                downloaded: true,
                launchable: true,
            },
        );
        registry.insert(
            "sys.daemon",
            0,
            AppRecord {
                glyph: "?".to_owned(),
                downloaded: false,
                launchable: false,
            },
        );
        registry
    }

    #[test]
    fn unknown_user_yields_no_badge() {
        assert!(
            registry()
                .badged_glyph(IconSet::Nerd, "org.mail", 42)
                .is_none()
        );
    }

    #[test]
    fn filtered_apps_yield_no_badge() {
        assert!(
            registry()
                .badged_glyph(IconSet::Nerd, "sys.daemon", 0)
                .is_none()
        );
        assert!(
            registry()
                .badged_glyph(IconSet::Nerd, "not.installed", 0)
                .is_none()
        );
    }

    #[test]
    fn primary_user_gets_an_unbadged_glyph() {
        let badge = registry()
            .badged_glyph(IconSet::Nerd, "org.mail", 0)
            .expect("badge");
        assert_eq!(badge.glyph, "󰇮");
        assert_eq!(badge.profile_badge, None);
    }

    #[test]
    fn work_profile_user_gets_the_profile_badge() {
        let badge = registry()
            .badged_glyph(IconSet::Nerd, "org.mail", 10)
            .expect("badge");
        assert_eq!(badge.profile_badge, Some(nerd::WORK_BADGE));
    }
}
