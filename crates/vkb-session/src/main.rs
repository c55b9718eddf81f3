//! vkb-preview: renders a virtual keyboard in the terminal.
//!
//! Opens a keyboard session on a headless overlay host, applies the requested
//! modifier state, replays virtual clicks and physical key presses, then
//! prints the keyboard as it would be drawn and the text typed into the bound
//! field.
//!
//! # Usage
//!
//! ```text
//! vkb-preview [OPTIONS]
//!
//! Options:
//!   --locale <LOCALE|LAYOUT>  Locale tag or layout name [default: config]
//!   --shift / --alt / --caps  Start with the modifier on
//!   --click <ROW:COL>         Click a virtual key (repeatable)
//!   --press <KEY>             Hold a physical key, e.g. "Shift" (repeatable)
//!   --list                    List layouts and locales, then exit
//!   --config <PATH>           Config file [default: platform config dir]
//! ```
//!
//! Active modifier keys are printed as `[x]`, held keys as `<x>`.

use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use vkb_core::KeyPosition;
use vkb_session::infrastructure::announcer::TracingAnnouncer;
use vkb_session::infrastructure::overlay::headless::HeadlessOverlay;
use vkb_session::infrastructure::storage::config::{
    build_registry, load_config, load_config_from, AppConfig,
};
use vkb_session::infrastructure::text_input::TextBuffer;
use vkb_session::{KeyView, KeyboardController, PhysicalKeyEvent, Transition};

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Terminal preview of the virtual keyboard.
#[derive(Debug, Parser)]
#[command(
    name = "vkb-preview",
    about = "Render a virtual keyboard layout under a given modifier state",
    version
)]
struct Cli {
    /// Locale tag (`de`, `de-AT`) or layout name (`Deutsch`).
    ///
    /// Defaults to `default_locale` from the config file.
    #[arg(long, env = "VKB_LOCALE")]
    locale: Option<String>,

    /// Turn Shift on before rendering.
    #[arg(long)]
    shift: bool,

    /// Turn Alt on before rendering.
    #[arg(long)]
    alt: bool,

    /// Lock CapsLock before rendering.
    #[arg(long)]
    caps: bool,

    /// Virtual key to click, as `ROW:COL` (zero-based).
    #[arg(long = "click", value_name = "ROW:COL", value_parser = parse_position)]
    clicks: Vec<KeyPosition>,

    /// Physical key held down while rendering, as a DOM key value.
    #[arg(long = "press", value_name = "KEY")]
    presses: Vec<String>,

    /// List layouts and locales, then exit.
    #[arg(long)]
    list: bool,

    /// Configuration file to use instead of the platform default.
    #[arg(long, env = "VKB_CONFIG")]
    config: Option<PathBuf>,
}

fn parse_position(value: &str) -> Result<KeyPosition, String> {
    let (row, column) = value
        .split_once(':')
        .ok_or_else(|| format!("expected ROW:COL, got {value:?}"))?;
    let row = row.trim().parse().map_err(|e| format!("bad row {row:?}: {e}"))?;
    let column = column
        .trim()
        .parse()
        .map_err(|e| format!("bad column {column:?}: {e}"))?;
    Ok(KeyPosition::new(row, column))
}

fn load(cli: &Cli) -> anyhow::Result<AppConfig> {
    match &cli.config {
        Some(path) => load_config_from(path)
            .with_context(|| format!("failed to load config from {}", path.display())),
        None => load_config().context("failed to load config"),
    }
}

fn label(key: &KeyView) -> String {
    let icon = key
        .icon
        .as_ref()
        .and_then(|icon| icon.name.as_deref().or(icon.svg_icon.as_deref()))
        .filter(|name| !name.trim().is_empty());
    match (icon, key.glyph.class()) {
        (Some(icon), _) => format!(":{icon}:"),
        (None, Some(class)) => format!("{class:?}"),
        (None, None) => key.glyph.as_str().to_string(),
    }
}

fn render_key(key: &KeyView) -> String {
    let text = label(key);
    if key.active {
        format!("[{text}]")
    } else if key.pressed {
        format!("<{text}>")
    } else {
        format!(" {text} ")
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load(&cli)?;

    // Level is overridden by `RUST_LOG`.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.keyboard.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let registry = Rc::new(build_registry(&config).context("failed to build layout registry")?);

    if cli.list {
        println!("Layouts:");
        for name in registry.layout_names() {
            println!("  {name}");
        }
        println!("Locales:");
        for locale in registry.available_locales() {
            let layout = registry.map_locale(Some(locale))?;
            println!("  {locale:<6} -> {layout}");
        }
        return Ok(());
    }

    let overlay = Rc::new(HeadlessOverlay::new());
    let controller = KeyboardController::new(
        Rc::clone(&registry),
        overlay.clone(),
        Rc::new(TracingAnnouncer),
    );

    let session = controller
        .open(cli.locale.as_deref(), config.open.clone())
        .context("failed to open keyboard")?;
    controller.transition_complete(session.id(), Transition::Enter);

    let field = Rc::new(RefCell::new(TextBuffer::new()));
    session.bind_input(field.clone());
    session.enter_click().subscribe(|| info!("enter clicked"));

    if cli.caps {
        session.on_caps_click(Some(true));
    }
    if cli.shift {
        session.on_shift_click();
    }
    if cli.alt {
        session.on_alt_click();
    }
    for position in &cli.clicks {
        session
            .click_key(*position)
            .with_context(|| format!("failed to click {}:{}", position.row, position.column))?;
    }
    for key in &cli.presses {
        session.handle_key_down(&PhysicalKeyEvent::new(key.as_str(), session.caps_locked()));
    }

    println!(
        "{} ({}{})",
        session.layout().name,
        session.modifier().name(),
        if session.caps_locked() { ", CapsLock" } else { "" }
    );
    for row in session.rows() {
        let line: Vec<String> = row.iter().map(render_key).collect();
        println!("{}", line.join(""));
    }
    if !cli.clicks.is_empty() {
        println!("typed: {:?}", field.borrow().value());
    }

    let fired = overlay.fire_timers(&controller);
    if fired == 0 {
        controller.dismiss();
    }
    controller.transition_complete(session.id(), Transition::Exit);
    info!(phase = ?session.phase(), "preview finished");
    Ok(())
}
