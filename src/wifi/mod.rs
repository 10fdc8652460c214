//! Wi-Fi presentation module for wifipick
//!
//! This module holds the external Wi-Fi entry contract, the list-row adapter
//! that mirrors one entry, and signal/friction icon resolution.

mod entry;
mod icons;
mod row;

// Re-export public API
pub use entry::{
    ConnectedState, EntryEvent, EntryId, RequestStatus, Security, WIFI_LEVEL_MAX, WIFI_LEVEL_MIN,
    WIFI_LEVEL_UNREACHABLE, WifiEntry, WifiStandard,
};
pub use icons::{FrictionStateList, GlyphIconResolver, SignalIcon, SignalIconResolver};
pub use row::{HelpButton, NetworkRow, RenderedIcon, RowView, ViewId};
