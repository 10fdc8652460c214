mod app;
mod config;
mod error;
mod event;
mod sim;
mod theme;
mod toast;
mod ui;
mod wifi;

use std::rc::Rc;

use clap::Parser;
use color_eyre::eyre::Result;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use tokio::sync::mpsc::unbounded_channel;

use crate::{
    app::AppState,
    config::IconSet,
    event::run,
    sim::SimSource,
    toast::{FixedGravity, Gravity, ToastOverride},
    wifi::{NetworkRow, WifiEntry},
};

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
enum ToastPositionArg {
    Top,
    Center,
    Bottom,
}

/// A lightweight, keyboard-driven TUI for picking Wi-Fi networks
#[derive(Parser, Debug)]
#[command(
    name = "wifipick",
    about = "A lightweight, keyboard-driven TUI for picking Wi-Fi networks, with plugin-styled toast notifications.",
    long_about = None,
    version = env!("CARGO_PKG_VERSION"),
    disable_version_flag = true
)]
struct Args {
    /// Print version information
    #[arg(short = 'v', long = "version", action = clap::ArgAction::Version)]
    version: (),

    /// Use ASCII icons (no Nerd Fonts required)
    #[arg(long)]
    ascii: bool,

    /// Disable styled toasts (plain text, no badge, no animation)
    #[arg(long = "plain-toasts")]
    plain_toasts: bool,

    /// Pin toasts to a fixed anchor via the built-in override plugin
    #[arg(long = "toast-position", value_enum)]
    toast_position: Option<ToastPositionArg>,

    /// Show key logger for debugging
    #[arg(long = "show-keys")]
    show_keys: bool,
}

fn init_tracing() -> Result<()> {
    // Logging goes to a file so it never fights the terminal UI.
    if let Ok(path) = std::env::var("WIFIPICK_LOG") {
        let file = std::fs::File::create(path)?;
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .init();
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing()?;

    let icons = if args.ascii {
        IconSet::Ascii
    } else {
        IconSet::Nerd
    };

    let toast_plugin: Option<Rc<dyn ToastOverride>> = args.toast_position.map(|position| {
        let gravity = match position {
            ToastPositionArg::Top => Gravity::Top,
            ToastPositionArg::Center => Gravity::Center,
            ToastPositionArg::Bottom => Gravity::Bottom,
        };
        Rc::new(FixedGravity(gravity)) as Rc<dyn ToastOverride>
    });

    let (entry_tx, entry_rx) = unbounded_channel();
    let (help_tx, help_rx) = unbounded_channel();

    let mut sim = SimSource::new(entry_tx);
    let mut state = AppState::new(icons, !args.plain_toasts, toast_plugin, args.show_keys);

    for network in sim.networks() {
        let entry: Rc<dyn WifiEntry> = network.clone();
        let mut row = NetworkRow::new(entry, icons);
        let clicks = help_tx.clone();
        row.set_on_button_click(move |row| {
            let _ = clicks.send(row.entry().id());
        });
        state.rows.push(row);
    }

    color_eyre::install()?;
    let terminal = ratatui::init();
    enable_raw_mode()?;
    let result = run(terminal, &mut state, &mut sim, entry_rx, help_rx).await;
    disable_raw_mode()?;

    ratatui::restore();
    result
}
