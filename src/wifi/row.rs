use std::rc::Rc;

use ratatui::style::Color;

use crate::config::{IconSet, strings};
use crate::theme;
use crate::wifi::entry::{
    ConnectedState, RequestStatus, Security, WIFI_LEVEL_UNREACHABLE, WifiEntry, WifiStandard,
};
use crate::wifi::icons::{FrictionStateList, GlyphIconResolver, SignalIcon, SignalIconResolver};

/// Identifies the clickable child views inside a bound row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewId {
    HelpButton,
    #[allow(dead_code)]
    FrictionIcon,
}

/// A glyph plus the tint it is drawn with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedIcon {
    pub glyph: &'static str,
    pub badge: Option<&'static str>,
    pub tint: Color,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpButton {
    /// The glyph may be absent when the active icon set has none; the
    /// button still shows and stays clickable.
    pub icon: Option<RenderedIcon>,
    pub label: &'static str,
}

/// Widget slots a row writes into when it is (re)bound.
#[derive(Debug, Clone, PartialEq)]
pub struct RowView {
    pub title: String,
    pub summary: String,
    pub icon: Option<RenderedIcon>,
    pub help_button: Option<HelpButton>,
    pub friction_icon: Option<RenderedIcon>,
    pub divider_visible: bool,
    pub content_description: String,
}

impl RowView {
    pub fn new() -> Self {
        Self {
            title: String::new(),
            summary: String::new(),
            icon: None,
            help_button: None,
            friction_icon: None,
            divider_visible: true,
            content_description: String::new(),
        }
    }
}

impl Default for RowView {
    fn default() -> Self {
        Self::new()
    }
}

/// List row mirroring one Wi-Fi entry.
///
/// The entry is the sole source of truth; the row caches the handful of
/// fields that drive the signal icon and bumps its revision whenever a
/// refresh finds any of them changed, so the host knows to rebind.
pub struct NetworkRow {
    entry: Rc<dyn WifiEntry>,
    resolver: Box<dyn SignalIconResolver>,
    icons: IconSet,
    friction: Option<FrictionStateList>,
    title: String,
    summary: String,
    level: i32,
    standard: WifiStandard,
    he_8ss_capable_ap: bool,
    vht_max_8ss: bool,
    show_x: bool,
    icon: Option<SignalIcon>,
    content_description: String,
    on_button_click: Option<Box<dyn FnMut(&NetworkRow)>>,
    revision: u64,
}

impl NetworkRow {
    pub fn new(entry: Rc<dyn WifiEntry>, icons: IconSet) -> Self {
        Self::with_resolver(entry, icons, Box::new(GlyphIconResolver::new(icons)))
    }

    pub fn with_resolver(
        entry: Rc<dyn WifiEntry>,
        icons: IconSet,
        resolver: Box<dyn SignalIconResolver>,
    ) -> Self {
        // Icon sets without friction glyphs leave the slot empty.
        let friction = FrictionStateList::from_icon_set(icons).ok();
        let mut row = Self {
            entry,
            resolver,
            icons,
            friction,
            title: String::new(),
            summary: String::new(),
            level: WIFI_LEVEL_UNREACHABLE,
            standard: Default::default(),
            he_8ss_capable_ap: false,
            vht_max_8ss: false,
            show_x: false,
            icon: None,
            content_description: String::new(),
            on_button_click: None,
            revision: 0,
        };
        row.refresh();
        row
    }

    pub fn entry(&self) -> &Rc<dyn WifiEntry> {
        &self.entry
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn content_description(&self) -> &str {
        &self.content_description
    }

    /// Bumped by every change notification; hosts rebind when it moves.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn notify_changed(&mut self) {
        self.revision += 1;
    }

    /// Re-reads the entry and updates the cached snapshot, the signal icon
    /// and the texts. Issues a change notification only when at least one
    /// snapshot field actually moved.
    pub fn refresh(&mut self) {
        self.title = self.entry.title();

        let level = self.entry.level();
        let standard = self.entry.standard();
        let vht_max_8ss = self.entry.is_vht_max_8_spatial_streams_supported();
        let he_8ss_capable_ap = self.entry.is_he_8ss_capable_ap();
        let show_x = self.entry.should_show_x_level_icon();

        if level != self.level
            || show_x != self.show_x
            || standard != self.standard
            || he_8ss_capable_ap != self.he_8ss_capable_ap
            || vht_max_8ss != self.vht_max_8ss
        {
            self.level = level;
            self.standard = standard;
            self.he_8ss_capable_ap = he_8ss_capable_ap;
            self.vht_max_8ss = vht_max_8ss;
            self.show_x = show_x;
            self.update_icon(
                show_x,
                level,
                standard,
                he_8ss_capable_ap && vht_max_8ss,
            );
            self.notify_changed();
        }

        let mut summary = self.entry.summary();
        if self.entry.is_psk_sae_transition_mode() {
            summary = format!("WPA3(SAE Transition Mode) {summary}");
        } else if self.entry.is_owe_transition_mode() {
            summary = format!("WPA3(OWE Transition Mode) {summary}");
        } else if self.entry.security() == Security::Sae {
            summary = format!("WPA3(SAE) {summary}");
        } else if self.entry.security() == Security::Owe {
            summary = format!("WPA3(OWE) {summary}");
        }
        self.summary = summary;

        self.content_description = self.build_content_description();
    }

    fn update_icon(
        &mut self,
        show_x: bool,
        level: i32,
        standard: WifiStandard,
        is_ready: bool,
    ) {
        if level == WIFI_LEVEL_UNREACHABLE {
            self.icon = None;
            return;
        }
        self.icon = self.resolver.resolve(show_x, level, standard, is_ready);
    }

    pub fn shows_help_button(&self) -> bool {
        self.entry.help_uri().is_some()
            && self.entry.connected_state() == ConnectedState::Disconnected
    }

    /// Writes the row into its widget slots. Exactly one of the help button
    /// or the friction icon ends up visible.
    pub fn bind(&mut self, view: &mut RowView) {
        view.title = self.title.clone();
        view.summary = self.summary.clone();
        view.content_description = self.content_description.clone();

        // Two-slot rows draw their own chrome; the stock divider is off.
        view.divider_visible = false;

        view.icon = match self.icon.as_mut() {
            Some(icon) => {
                icon.set_level(self.level);
                Some(RenderedIcon {
                    glyph: icon.glyph(),
                    badge: icon.badge(),
                    tint: theme::CONTROL,
                })
            }
            None => None,
        };

        if self.shows_help_button() {
            // A missing glyph leaves the button iconless, not hidden.
            let icon = self.icons.glyph("help").ok().map(|glyph| RenderedIcon {
                glyph,
                badge: None,
                tint: theme::CONTROL,
            });
            view.help_button = Some(HelpButton {
                icon,
                label: strings::HELP_LABEL,
            });
            view.friction_icon = None;
        } else {
            view.help_button = None;
            let secured = !matches!(self.entry.security(), Security::None | Security::Owe);
            view.friction_icon = match self.friction.as_mut() {
                Some(friction) => {
                    if secured {
                        friction.set_secured();
                    }
                    Some(RenderedIcon {
                        glyph: friction.current(),
                        badge: None,
                        tint: theme::FOREGROUND,
                    })
                }
                None => None,
            };
        }
    }

    fn build_content_description(&self) -> String {
        let mut description = self.title.clone();
        if !self.summary.is_empty() {
            description.push(',');
            description.push_str(&self.summary);
        }
        let level = self.entry.level();
        if level >= 0 && (level as usize) < strings::SIGNAL_STRENGTH.len() {
            description.push(',');
            description.push_str(strings::SIGNAL_STRENGTH[level as usize]);
        }
        description.push(',');
        description.push_str(if self.entry.security() == Security::None {
            strings::SECURITY_NONE
        } else {
            strings::SECURITY_SECURED
        });
        description
    }

    /// Registers the single button-click listener and issues a change
    /// notification so the host rebinds.
    pub fn set_on_button_click(&mut self, listener: impl FnMut(&NetworkRow) + 'static) {
        self.on_button_click = Some(Box::new(listener));
        self.notify_changed();
    }

    /// Dispatches a click on one of the row's child views.
    pub fn on_click(&mut self, view: ViewId) {
        if view != ViewId::HelpButton {
            return;
        }
        if let Some(mut listener) = self.on_button_click.take() {
            listener(&*self);
            self.on_button_click = Some(listener);
        }
    }

    /// The entry's state changed; re-read it.
    pub fn on_updated(&mut self) {
        self.refresh();
    }

    /// Result of a connect request.
    pub fn on_connect_result(&mut self, _status: RequestStatus) {}

    /// Result of a disconnect request.
    pub fn on_disconnect_result(&mut self, _status: RequestStatus) {}

    /// Result of a forget request.
    pub fn on_forget_result(&mut self, _status: RequestStatus) {}

    /// Result of a captive-portal sign-in request.
    pub fn on_sign_in_result(&mut self, _status: RequestStatus) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::icons::nerd;
    use crate::wifi::entry::{EntryId, WifiStandard};
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    struct FakeEntry {
        title: String,
        summary: RefCell<String>,
        level: Cell<i32>,
        security: Cell<Security>,
        standard: Cell<WifiStandard>,
        he_8ss: Cell<bool>,
        vht_8ss: Cell<bool>,
        show_x: Cell<bool>,
        psk_sae_transition: Cell<bool>,
        owe_transition: Cell<bool>,
        help_uri: RefCell<Option<String>>,
        state: Cell<ConnectedState>,
    }

    impl FakeEntry {
        fn new() -> Self {
            Self {
                title: "HomeNet".to_owned(),
                summary: RefCell::new("Saved".to_owned()),
                level: Cell::new(2),
                security: Cell::new(Security::Psk),
                standard: Cell::new(WifiStandard::Ac),
                he_8ss: Cell::new(false),
                vht_8ss: Cell::new(false),
                show_x: Cell::new(false),
                psk_sae_transition: Cell::new(false),
                owe_transition: Cell::new(false),
                help_uri: RefCell::new(None),
                state: Cell::new(ConnectedState::Disconnected),
            }
        }
    }

    impl WifiEntry for FakeEntry {
        fn id(&self) -> EntryId {
            EntryId(7)
        }
        fn title(&self) -> String {
            self.title.clone()
        }
        fn summary(&self) -> String {
            self.summary.borrow().clone()
        }
        fn level(&self) -> i32 {
            self.level.get()
        }
        fn security(&self) -> Security {
            self.security.get()
        }
        fn standard(&self) -> WifiStandard {
            self.standard.get()
        }
        fn connected_state(&self) -> ConnectedState {
            self.state.get()
        }
        fn is_psk_sae_transition_mode(&self) -> bool {
            self.psk_sae_transition.get()
        }
        fn is_owe_transition_mode(&self) -> bool {
            self.owe_transition.get()
        }
        fn is_he_8ss_capable_ap(&self) -> bool {
            self.he_8ss.get()
        }
        fn is_vht_max_8_spatial_streams_supported(&self) -> bool {
            self.vht_8ss.get()
        }
        fn should_show_x_level_icon(&self) -> bool {
            self.show_x.get()
        }
        fn help_uri(&self) -> Option<String> {
            self.help_uri.borrow().clone()
        }
    }

    struct CountingResolver {
        calls: Rc<Cell<usize>>,
    }

    impl SignalIconResolver for CountingResolver {
        fn resolve(
            &self,
            show_x: bool,
            _level: i32,
            _standard: WifiStandard,
            _is_ready: bool,
        ) -> Option<SignalIcon> {
            self.calls.set(self.calls.get() + 1);
            Some(SignalIcon::new(
                crate::config::IconSet::Nerd.signal_frames(show_x),
                None,
            ))
        }
    }

    fn row_with(entry: Rc<FakeEntry>) -> NetworkRow {
        NetworkRow::new(entry, IconSet::Nerd)
    }

    #[test]
    fn refresh_notifies_only_when_the_snapshot_moves() {
        let entry = Rc::new(FakeEntry::new());
        let mut row = row_with(entry.clone());
        let after_construction = row.revision();

        row.refresh();
        assert_eq!(row.revision(), after_construction, "unchanged entry");
        row.refresh();
        assert_eq!(row.revision(), after_construction, "still unchanged");

        entry.level.set(3);
        row.refresh();
        assert_eq!(row.revision(), after_construction + 1, "level moved");
        row.refresh();
        assert_eq!(row.revision(), after_construction + 1, "settled again");
    }

    #[test]
    fn every_snapshot_field_triggers_a_notification() {
        let entry = Rc::new(FakeEntry::new());
        let mut row = row_with(entry.clone());
        let mut expected = row.revision();

        entry.show_x.set(true);
        row.refresh();
        expected += 1;
        assert_eq!(row.revision(), expected);

        entry.standard.set(WifiStandard::Ax);
        row.refresh();
        expected += 1;
        assert_eq!(row.revision(), expected);

        entry.he_8ss.set(true);
        row.refresh();
        expected += 1;
        assert_eq!(row.revision(), expected);

        entry.vht_8ss.set(true);
        row.refresh();
        expected += 1;
        assert_eq!(row.revision(), expected);
    }

    #[test]
    fn icon_recomputes_only_on_snapshot_changes() {
        let entry = Rc::new(FakeEntry::new());
        let calls = Rc::new(Cell::new(0));
        let mut row = NetworkRow::with_resolver(
            entry.clone(),
            IconSet::Nerd,
            Box::new(CountingResolver {
                calls: calls.clone(),
            }),
        );
        let after_construction = calls.get();

        row.refresh();
        row.refresh();
        assert_eq!(calls.get(), after_construction);

        entry.level.set(4);
        row.refresh();
        assert_eq!(calls.get(), after_construction + 1);
    }

    #[test]
    fn unreachable_level_clears_the_icon_without_resolving() {
        let entry = Rc::new(FakeEntry::new());
        let calls = Rc::new(Cell::new(0));
        let mut row = NetworkRow::with_resolver(
            entry.clone(),
            IconSet::Nerd,
            Box::new(CountingResolver {
                calls: calls.clone(),
            }),
        );
        let before = calls.get();

        entry.level.set(WIFI_LEVEL_UNREACHABLE);
        row.refresh();
        assert_eq!(calls.get(), before, "resolver not consulted");

        let mut view = RowView::new();
        row.bind(&mut view);
        assert!(view.icon.is_none());
    }

    #[test]
    fn summary_prefixes_are_mutually_exclusive_and_ordered() {
        let entry = Rc::new(FakeEntry::new());
        entry.security.set(Security::Sae);
        entry.psk_sae_transition.set(true);
        let mut row = row_with(entry.clone());
        assert_eq!(row.summary(), "WPA3(SAE Transition Mode) Saved");

        entry.psk_sae_transition.set(false);
        row.refresh();
        assert_eq!(row.summary(), "WPA3(SAE) Saved");

        entry.security.set(Security::Owe);
        entry.owe_transition.set(true);
        row.refresh();
        assert_eq!(row.summary(), "WPA3(OWE Transition Mode) Saved");

        entry.owe_transition.set(false);
        row.refresh();
        assert_eq!(row.summary(), "WPA3(OWE) Saved");

        entry.security.set(Security::Psk);
        row.refresh();
        assert_eq!(row.summary(), "Saved");
    }

    #[test]
    fn content_description_skips_strength_when_level_unknown() {
        let entry = Rc::new(FakeEntry::new());
        entry.level.set(WIFI_LEVEL_UNREACHABLE);
        entry.security.set(Security::Eap);
        let row = row_with(entry.clone());
        assert_eq!(row.content_description(), "HomeNet,Saved,secured network");

        entry.security.set(Security::None);
        entry.level.set(1);
        let mut row = row_with(entry);
        row.refresh();
        assert_eq!(
            row.content_description(),
            "HomeNet,Saved,signal one bar,open network"
        );
    }

    #[test]
    fn empty_summary_is_left_out_of_the_description() {
        let entry = Rc::new(FakeEntry::new());
        entry.summary.replace(String::new());
        let row = row_with(entry);
        assert_eq!(
            row.content_description(),
            "HomeNet,signal two bars,secured network"
        );
    }

    #[test]
    fn bind_shows_help_only_when_disconnected_with_uri() {
        let entry = Rc::new(FakeEntry::new());
        entry
            .help_uri
            .replace(Some("https://support.example/wifi".to_owned()));
        let mut row = row_with(entry.clone());
        let mut view = RowView::new();

        row.bind(&mut view);
        assert!(view.help_button.is_some());
        assert!(view.friction_icon.is_none());
        assert!(!view.divider_visible);
        assert_eq!(view.help_button.as_ref().unwrap().label, "help");

        entry.state.set(ConnectedState::Connected);
        row.bind(&mut view);
        assert!(view.help_button.is_none());
        assert!(view.friction_icon.is_some());

        entry.state.set(ConnectedState::Disconnected);
        entry.help_uri.replace(None);
        row.bind(&mut view);
        assert!(view.help_button.is_none());
        assert!(view.friction_icon.is_some());
    }

    #[test]
    fn friction_icon_reflects_security() {
        let entry = Rc::new(FakeEntry::new());
        entry.security.set(Security::None);
        let mut row = row_with(entry.clone());
        let mut view = RowView::new();

        row.bind(&mut view);
        assert_eq!(view.friction_icon.as_ref().unwrap().glyph, nerd::COST);

        entry.security.set(Security::Psk);
        row.refresh();
        row.bind(&mut view);
        assert_eq!(view.friction_icon.as_ref().unwrap().glyph, nerd::LOCK);

        entry.security.set(Security::EapSuiteB192);
        row.bind(&mut view);
        assert_eq!(view.friction_icon.as_ref().unwrap().glyph, nerd::LOCK);
    }

    #[test]
    fn owe_counts_as_unsecured_for_the_friction_slot() {
        let entry = Rc::new(FakeEntry::new());
        entry.security.set(Security::Owe);
        let mut row = row_with(entry);
        let mut view = RowView::new();
        row.bind(&mut view);
        assert_eq!(view.friction_icon.as_ref().unwrap().glyph, nerd::COST);
    }

    #[test]
    fn click_reaches_the_listener_only_for_the_help_button() {
        let entry = Rc::new(FakeEntry::new());
        let mut row = row_with(entry);
        let clicked = Rc::new(Cell::new(0));
        let seen = clicked.clone();
        row.set_on_button_click(move |row| {
            assert_eq!(row.title(), "HomeNet");
            seen.set(seen.get() + 1);
        });

        row.on_click(ViewId::FrictionIcon);
        assert_eq!(clicked.get(), 0);
        row.on_click(ViewId::HelpButton);
        assert_eq!(clicked.get(), 1);
    }

    #[test]
    fn setting_a_listener_notifies() {
        let entry = Rc::new(FakeEntry::new());
        let mut row = row_with(entry);
        let before = row.revision();
        row.set_on_button_click(|_| {});
        assert_eq!(row.revision(), before + 1);
    }

    #[test]
    fn result_hooks_are_accepted_and_ignored() {
        let entry = Rc::new(FakeEntry::new());
        let mut row = row_with(entry);
        let before = row.revision();
        row.on_connect_result(RequestStatus::Success);
        row.on_disconnect_result(RequestStatus::Failure);
        row.on_forget_result(RequestStatus::Success);
        row.on_sign_in_result(RequestStatus::Failure);
        assert_eq!(row.revision(), before);
    }

    #[test]
    fn sae_entry_binds_the_worked_example() {
        let entry = Rc::new(FakeEntry::new());
        entry.level.set(2);
        entry.security.set(Security::Sae);
        entry.standard.set(WifiStandard::Ax);
        entry.he_8ss.set(true);
        entry.vht_8ss.set(true);
        let mut row = row_with(entry);
        let mut view = RowView::new();
        row.bind(&mut view);

        assert_eq!(row.summary(), "WPA3(SAE) Saved");
        let icon = view.icon.expect("signal icon");
        assert_eq!(icon.glyph, nerd::SIGNAL[2]);
        assert_eq!(icon.badge, Some(nerd::WIFI6_BADGE));
        assert!(view.help_button.is_none());
        assert_eq!(view.friction_icon.unwrap().glyph, nerd::LOCK);
    }
}
