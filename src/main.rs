// SPDX-License-Identifier: MPL-2.0
//! Runs a scripted whisper session on an in-memory host and prints the
//! lifecycle trace as JSON.
//!
//! ```text
//! iced_whisper [--config PATH] [--title TEXT] [--present] [--no-inset]
//! ```

use iced_core::Rectangle;
use iced_whisper::config::{self, Config};
use iced_whisper::diagnostics::DiagnosticsCollector;
use iced_whisper::error::{Error, Result};
use iced_whisper::host::{ContentView, MemoryHost, Screen, ScreenId, ViewKind};
use iced_whisper::scheduler::ManualScheduler;
use iced_whisper::{Action, Message, Whisper, WhisperSettings};
use std::path::PathBuf;

struct Flags {
    config: Option<PathBuf>,
    title: String,
    action: Action,
    no_inset: bool,
}

fn parse_flags() -> Result<Flags> {
    let mut args = pico_args::Arguments::from_env();
    let flags = Flags {
        config: args
            .opt_value_from_str("--config")
            .map_err(|e| Error::Config(e.to_string()))?,
        action: if args.contains("--present") {
            Action::Present
        } else {
            Action::Show
        },
        no_inset: args.contains("--no-inset"),
        title: args
            .opt_value_from_str("--title")
            .map_err(|e| Error::Config(e.to_string()))?
            .unwrap_or_else(|| "Changes saved".to_string()),
    };
    Ok(flags)
}

fn portrait_host() -> MemoryHost {
    let mut host = MemoryHost::new(Rectangle {
        x: 0.0,
        y: 20.0,
        width: 375.0,
        height: 44.0,
    })
    .with_status_bar_height(20.0);
    host.push(Screen::new(
        ScreenId::new(1),
        ContentView::new(ViewKind::Table).with_top_inset(64.0),
    ));
    host
}

fn main() -> Result<()> {
    let flags = parse_flags()?;

    let mut config: Config = match &flags.config {
        Some(path) => config::load_from_path(path)?,
        None => config::load()?,
    };
    if flags.no_inset {
        config.modify_inset = Some(false);
    }

    let mut collector = DiagnosticsCollector::new(config.diagnostics_capacity());
    let settings = WhisperSettings::from(&config);
    let mut whisper = Whisper::with_settings(settings, ManualScheduler::new());
    whisper.set_diagnostics(collector.handle());

    let host = whisper.register(portrait_host());
    whisper.show(Message::new(flags.title.as_str()), host, flags.action);
    whisper.advance(settings.movement);

    // Push a detail screen while the banner is up.
    let detail = ScreenId::new(2);
    whisper.will_show(host, detail);
    if let Some(navigation) = whisper.host_mut(host) {
        navigation.push(Screen::new(detail, ContentView::new(ViewKind::Grid)));
    }
    whisper.did_show(host, detail);

    // Rotate to landscape.
    if let Some(navigation) = whisper.host_mut(host) {
        navigation.set_bar_frame(Rectangle {
            x: 0.0,
            y: 0.0,
            width: 667.0,
            height: 32.0,
        });
    }
    whisper.orientation_changed();

    whisper.advance(settings.pop_up_delay.as_duration());
    whisper.silence_now(host);

    collector.process_pending();
    let json = collector
        .export_json()
        .map_err(|e| Error::Io(e.to_string()))?;
    println!("{json}");
    Ok(())
}
