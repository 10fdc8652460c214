//! Scripted network source standing in for a platform Wi-Fi backend.
//!
//! Scanning and ranking live outside this repo; the picker only needs
//! entries that change over time and push callbacks. The script here varies
//! signal levels deterministically and walks one connect/disconnect cycle so
//! every callback path gets exercised.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use tokio::sync::mpsc::UnboundedSender;

use crate::wifi::{
    ConnectedState, EntryEvent, EntryId, RequestStatus, Security, WifiEntry, WifiStandard,
};

pub struct SimNetwork {
    id: EntryId,
    ssid: String,
    summary: RefCell<String>,
    level: Cell<i32>,
    base_level: i32,
    security: Security,
    standard: WifiStandard,
    he_8ss: bool,
    vht_8ss: bool,
    psk_sae_transition: bool,
    owe_transition: bool,
    show_x: Cell<bool>,
    help_uri: Option<String>,
    state: Cell<ConnectedState>,
}

impl WifiEntry for SimNetwork {
    fn id(&self) -> EntryId {
        self.id
    }
    fn title(&self) -> String {
        self.ssid.clone()
    }
    fn summary(&self) -> String {
        self.summary.borrow().clone()
    }
    fn level(&self) -> i32 {
        self.level.get()
    }
    fn security(&self) -> Security {
        self.security
    }
    fn standard(&self) -> WifiStandard {
        self.standard
    }
    fn connected_state(&self) -> ConnectedState {
        self.state.get()
    }
    fn is_psk_sae_transition_mode(&self) -> bool {
        self.psk_sae_transition
    }
    fn is_owe_transition_mode(&self) -> bool {
        self.owe_transition
    }
    fn is_he_8ss_capable_ap(&self) -> bool {
        self.he_8ss
    }
    fn is_vht_max_8_spatial_streams_supported(&self) -> bool {
        self.vht_8ss
    }
    fn should_show_x_level_icon(&self) -> bool {
        self.show_x.get()
    }
    fn help_uri(&self) -> Option<String> {
        self.help_uri.clone()
    }
}

struct NetworkSpec {
    ssid: &'static str,
    summary: &'static str,
    base_level: i32,
    security: Security,
    standard: WifiStandard,
    he_8ss: bool,
    vht_8ss: bool,
    psk_sae_transition: bool,
    owe_transition: bool,
    help_uri: Option<&'static str>,
}

const ROSTER: [NetworkSpec; 8] = [
    NetworkSpec {
        ssid: "Fernweh",
        summary: "Saved",
        base_level: 3,
        security: Security::Sae,
        standard: WifiStandard::Ax,
        he_8ss: true,
        vht_8ss: true,
        psk_sae_transition: false,
        owe_transition: false,
        help_uri: None,
    },
    NetworkSpec {
        ssid: "Cloudline Guest",
        summary: "Sign in required",
        base_level: 2,
        security: Security::None,
        standard: WifiStandard::N,
        he_8ss: false,
        vht_8ss: false,
        psk_sae_transition: false,
        owe_transition: false,
        help_uri: Some("https://cloudline.example/portal"),
    },
    NetworkSpec {
        ssid: "Kaffeehaus",
        summary: "Open",
        base_level: 2,
        security: Security::Owe,
        standard: WifiStandard::N,
        he_8ss: false,
        vht_8ss: false,
        psk_sae_transition: false,
        owe_transition: true,
        help_uri: None,
    },
    NetworkSpec {
        ssid: "OfficeNet",
        summary: "Saved",
        base_level: 4,
        security: Security::Psk,
        standard: WifiStandard::Ac,
        he_8ss: false,
        vht_8ss: true,
        psk_sae_transition: true,
        owe_transition: false,
        help_uri: None,
    },
    NetworkSpec {
        ssid: "MiFi-4912",
        summary: "No internet access",
        base_level: 1,
        security: Security::Psk,
        standard: WifiStandard::N,
        he_8ss: false,
        vht_8ss: false,
        psk_sae_transition: false,
        owe_transition: false,
        help_uri: None,
    },
    NetworkSpec {
        ssid: "LegacyPrinter",
        summary: "",
        base_level: 1,
        security: Security::Wep,
        standard: WifiStandard::Legacy,
        he_8ss: false,
        vht_8ss: false,
        psk_sae_transition: false,
        owe_transition: false,
        help_uri: None,
    },
    NetworkSpec {
        ssid: "eduroam",
        summary: "Saved",
        base_level: 3,
        security: Security::Eap,
        standard: WifiStandard::Ac,
        he_8ss: false,
        vht_8ss: true,
        psk_sae_transition: false,
        owe_transition: false,
        help_uri: None,
    },
    NetworkSpec {
        ssid: "Wavelength-7G",
        summary: "",
        base_level: 4,
        security: Security::Sae,
        standard: WifiStandard::Be,
        he_8ss: true,
        vht_8ss: true,
        psk_sae_transition: false,
        owe_transition: false,
        help_uri: None,
    },
];

pub struct SimSource {
    networks: Vec<Rc<SimNetwork>>,
    events: UnboundedSender<EntryEvent>,
    tick: u64,
    seed: u64,
}

impl SimSource {
    pub fn new(events: UnboundedSender<EntryEvent>) -> Self {
        let networks = ROSTER
            .iter()
            .enumerate()
            .map(|(index, spec)| {
                Rc::new(SimNetwork {
                    id: EntryId(index as u64),
                    ssid: spec.ssid.to_owned(),
                    summary: RefCell::new(spec.summary.to_owned()),
                    level: Cell::new(spec.base_level),
                    base_level: spec.base_level,
                    security: spec.security,
                    standard: spec.standard,
                    he_8ss: spec.he_8ss,
                    vht_8ss: spec.vht_8ss,
                    psk_sae_transition: spec.psk_sae_transition,
                    owe_transition: spec.owe_transition,
                    show_x: Cell::new(false),
                    help_uri: spec.help_uri.map(str::to_owned),
                    state: Cell::new(ConnectedState::Disconnected),
                })
            })
            .collect();
        Self {
            networks,
            events,
            tick: 0,
            seed: 0x9E37_79B9_7F4A_7C15,
        }
    }

    pub fn networks(&self) -> &[Rc<SimNetwork>] {
        &self.networks
    }

    fn next_rand(&mut self) -> u64 {
        // xorshift64
        let mut x = self.seed;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.seed = x;
        x
    }

    /// Advances the script one step and pushes the resulting entry events.
    pub fn tick(&mut self) {
        self.tick += 1;
        let tick = self.tick;

        for index in 0..self.networks.len() {
            let wobble = (self.next_rand() % 3) as i32 - 1;
            let network = &self.networks[index];
            let level = (network.base_level + wobble).clamp(0, 4);
            if level != network.level.get() {
                network.level.set(level);
                let _ = self.events.send(EntryEvent::Updated(network.id));
            }
        }

        // The hotspot drops its uplink every few steps.
        if tick % 7 == 0 {
            let hotspot = &self.networks[4];
            hotspot.show_x.set(!hotspot.show_x.get());
            let _ = self.events.send(EntryEvent::Updated(hotspot.id));
        }

        // One connect/disconnect cycle against the home network.
        let home = &self.networks[0];
        match tick {
            3 => {
                home.state.set(ConnectedState::Connecting);
                home.summary.replace("Connecting...".to_owned());
                let _ = self.events.send(EntryEvent::Updated(home.id));
            }
            6 => {
                home.state.set(ConnectedState::Connected);
                home.summary.replace("Connected".to_owned());
                let _ = self
                    .events
                    .send(EntryEvent::ConnectResult(home.id, RequestStatus::Success));
                let _ = self.events.send(EntryEvent::Updated(home.id));
            }
            9 => {
                // The guest portal finishes its captive sign-in.
                let guest = &self.networks[1];
                let _ = self
                    .events
                    .send(EntryEvent::SignInResult(guest.id, RequestStatus::Success));
            }
            15 => {
                // Backend prunes the stale printer profile.
                let printer = &self.networks[5];
                let _ = self
                    .events
                    .send(EntryEvent::ForgetResult(printer.id, RequestStatus::Success));
            }
            20 => {
                home.state.set(ConnectedState::Disconnected);
                home.summary.replace("Saved".to_owned());
                let _ = self.events.send(EntryEvent::DisconnectResult(
                    home.id,
                    RequestStatus::Success,
                ));
                let _ = self.events.send(EntryEvent::Updated(home.id));
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc::unbounded_channel;

    #[test]
    fn connect_cycle_emits_result_events() {
        let (tx, mut rx) = unbounded_channel();
        let mut sim = SimSource::new(tx);
        for _ in 0..6 {
            sim.tick();
        }
        let home = sim.networks()[0].clone();
        assert_eq!(home.connected_state(), ConnectedState::Connected);

        let mut saw_connect_result = false;
        while let Ok(event) = rx.try_recv() {
            if let EntryEvent::ConnectResult(id, status) = event {
                assert_eq!(id, home.id());
                assert_eq!(status, RequestStatus::Success);
                saw_connect_result = true;
            }
        }
        assert!(saw_connect_result);
    }

    #[test]
    fn levels_stay_inside_the_display_band() {
        let (tx, _rx) = unbounded_channel();
        let mut sim = SimSource::new(tx);
        for _ in 0..50 {
            sim.tick();
            for network in sim.networks() {
                assert!((0..=4).contains(&network.level()));
            }
        }
    }
}
