/// Lowest level the signal pie can display.
pub const WIFI_LEVEL_MIN: i32 = 0;
/// Highest level the signal pie can display.
pub const WIFI_LEVEL_MAX: i32 = 4;
/// Sentinel level for an entry that is currently out of range.
pub const WIFI_LEVEL_UNREACHABLE: i32 = -1;

/// Security kind reported by a Wi-Fi entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Security {
    None,
    Owe,
    Wep,
    Psk,
    Sae,
    Eap,
    #[allow(dead_code)]
    EapSuiteB192,
}

/// 802.11 generation of the access point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WifiStandard {
    #[default]
    Unknown,
    Legacy,
    N,
    Ac,
    Ax,
    Be,
}

/// Connection state of a Wi-Fi entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectedState {
    Disconnected,
    Connecting,
    Connected,
}

/// Outcome of a connect/disconnect/forget/sign-in request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestStatus {
    Success,
    Failure,
}

/// Stable identity of a Wi-Fi entry, used to route events to its row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(pub u64);

/// One discoverable Wi-Fi network and its live state, owned by whatever
/// backend feeds the picker. Rows only ever read from it.
pub trait WifiEntry {
    fn id(&self) -> EntryId;
    fn title(&self) -> String;
    fn summary(&self) -> String;
    /// `WIFI_LEVEL_MIN..=WIFI_LEVEL_MAX`, or `WIFI_LEVEL_UNREACHABLE`.
    fn level(&self) -> i32;
    fn security(&self) -> Security;
    fn standard(&self) -> WifiStandard;
    fn connected_state(&self) -> ConnectedState;

    fn is_psk_sae_transition_mode(&self) -> bool {
        false
    }
    fn is_owe_transition_mode(&self) -> bool {
        false
    }
    fn is_he_8ss_capable_ap(&self) -> bool {
        false
    }
    fn is_vht_max_8_spatial_streams_supported(&self) -> bool {
        false
    }
    /// Selects the "pie plus x" glyph style for networks without internet.
    fn should_show_x_level_icon(&self) -> bool {
        false
    }
    fn help_uri(&self) -> Option<String> {
        None
    }
}

/// State pushes from the entry backend, drained by the UI loop and
/// dispatched to the owning row's callback hooks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryEvent {
    Updated(EntryId),
    ConnectResult(EntryId, RequestStatus),
    DisconnectResult(EntryId, RequestStatus),
    ForgetResult(EntryId, RequestStatus),
    SignInResult(EntryId, RequestStatus),
}
