use std::error::Error;
use std::sync::mpsc::Receiver;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::debug;

use crate::app::{App, PlaybackState};
use crate::config::Settings;
use crate::ledger::{ResolveError, ResolveOutcome};
use crate::mpris::{ControlCmd, MprisHandle};
use crate::player::{GatewayElement, Player};
use crate::runtime::mpris_sync::update_mpris;
use crate::ui;

/// State tracked by the runtime event loop across iterations.
pub struct EventLoopState {
    /// Last-known track index as emitted to MPRIS.
    last_mpris_index: Option<usize>,
    /// Last-known playback state as emitted to MPRIS.
    last_mpris_playback: PlaybackState,
}

impl EventLoopState {
    /// Construct a new `EventLoopState` seeded from `app`.
    pub fn new(app: &App) -> Self {
        Self {
            last_mpris_index: None,
            last_mpris_playback: app.playback,
        }
    }
}

/// Main terminal event loop: applies resolution outcomes, ticks the player,
/// handles input and MPRIS commands, draws the UI. Returns `Ok(())` when
/// shutdown is requested.
pub fn run(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &Settings,
    app: &mut App,
    player: &mut Player<GatewayElement>,
    mpris: &MprisHandle,
    control_rx: &Receiver<ControlCmd>,
    resolve_rx: &Receiver<ResolveOutcome>,
    state: &mut EventLoopState,
) -> Result<(), Box<dyn Error>> {
    loop {
        apply_resolutions(app, player, resolve_rx);
        player.tick();
        app.playback = derive_playback(player);

        // Keep MPRIS in sync even when playback changes come from media keys
        // or natural end-of-track.
        let index_snapshot = if player.mounted() {
            Some(player.snapshot().current_track)
        } else {
            None
        };
        if index_snapshot != state.last_mpris_index || app.playback != state.last_mpris_playback {
            update_mpris(mpris, app, player);
            state.last_mpris_index = index_snapshot;
            state.last_mpris_playback = app.playback;
        }

        terminal.draw(|f| ui::draw(f, app, player, settings))?;

        while let Ok(cmd) = control_rx.try_recv() {
            if handle_control_cmd(cmd, app, player, mpris) {
                return Ok(());
            }
        }

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if handle_key_event(key, settings, app, player) {
                    break;
                }
            }
        }
    }

    Ok(())
}

fn derive_playback(player: &Player<GatewayElement>) -> PlaybackState {
    if !player.mounted() {
        PlaybackState::Stopped
    } else if player.snapshot().playing {
        PlaybackState::Playing
    } else {
        PlaybackState::Paused
    }
}

/// Drain finished resolutions, dropping the ones from a stale mount.
fn apply_resolutions(
    app: &mut App,
    player: &mut Player<GatewayElement>,
    resolve_rx: &Receiver<ResolveOutcome>,
) {
    while let Ok(outcome) = resolve_rx.try_recv() {
        if outcome.generation != app.generation {
            debug!(generation = outcome.generation, "dropping stale resolution");
            continue;
        }

        match outcome.result {
            Ok(tracks) => {
                player.mount(GatewayElement::new(), tracks);
                player.set_volume(app.volume);
                app.ready();
            }
            Err(err) => app.fail(resolve_message(&err)),
        }
    }
}

fn resolve_message(err: &ResolveError) -> String {
    match err {
        ResolveError::Network(_) => {
            "An error occurred trying to fetch your data. \
             Please check your connection and gateway settings."
                .to_string()
        }
        ResolveError::EmptyResult => {
            "No audio entry matched the request. \
             Please check you are entering a valid transaction ID."
                .to_string()
        }
    }
}

/// Apply one MPRIS control command. Returns true when quitting.
fn handle_control_cmd(
    cmd: ControlCmd,
    app: &mut App,
    player: &mut Player<GatewayElement>,
    mpris: &MprisHandle,
) -> bool {
    match cmd {
        ControlCmd::Quit => return true,
        ControlCmd::Play => {
            if !player.snapshot().playing {
                player.toggle_play_pause();
            }
        }
        ControlCmd::Pause => {
            if player.snapshot().playing {
                player.toggle_play_pause();
            }
        }
        ControlCmd::PlayPause => player.toggle_play_pause(),
        ControlCmd::Stop => {
            if player.snapshot().playing {
                player.toggle_play_pause();
            }
            player.commit_scrub(0.0);
        }
        ControlCmd::Next => player.next_track(),
        ControlCmd::Prev => player.previous_track(),
    }

    app.playback = derive_playback(player);
    update_mpris(mpris, app, player);
    false
}

/// Apply one key press. Returns true when quitting.
fn handle_key_event(
    key: KeyEvent,
    settings: &Settings,
    app: &mut App,
    player: &mut Player<GatewayElement>,
) -> bool {
    match key.code {
        KeyCode::Char('q') => return true,
        KeyCode::Char(' ') | KeyCode::Char('p') => player.toggle_play_pause(),
        KeyCode::Char('l') => player.next_track(),
        KeyCode::Char('h') => player.previous_track(),
        KeyCode::Char('L') => scrub_by(player, settings.controls.coarse_step),
        KeyCode::Char('H') => scrub_by(player, -settings.controls.coarse_step),
        KeyCode::Right => step_preview(app, settings, player, 1.0),
        KeyCode::Left => step_preview(app, settings, player, -1.0),
        KeyCode::Enter => {
            let snapshot = player.snapshot();
            if snapshot.scrubbing {
                if let Some(preview) = snapshot.scrub_preview {
                    player.commit_scrub(preview);
                }
            }
        }
        KeyCode::Up => {
            let volume = app.adjust_volume(i16::from(settings.controls.volume_step));
            player.set_volume(volume);
        }
        KeyCode::Down => {
            let volume = app.adjust_volume(-i16::from(settings.controls.volume_step));
            player.set_volume(volume);
        }
        _ => {}
    }

    false
}

/// Immediate scrub: seek relative to the current position and commit.
fn scrub_by(player: &mut Player<GatewayElement>, delta: f64) {
    let target = (player.position() + delta).max(0.0);
    player.commit_scrub(target);
}

/// Arrow-key stepping previews the target position; Enter commits it.
/// The first press still uses the fine step and switches the control to
/// coarse granularity for subsequent adjustments.
fn step_preview(
    app: &mut App,
    settings: &Settings,
    player: &mut Player<GatewayElement>,
    direction: f64,
) {
    let step = app.step_seconds(&settings.controls);
    app.coarsen_step();

    let snapshot = player.snapshot();
    let from = if snapshot.scrubbing {
        snapshot.scrub_preview.unwrap_or(snapshot.current_time)
    } else {
        snapshot.current_time
    };
    let mut target = (from + direction * step).max(0.0);
    if let Some(duration) = snapshot.duration {
        target = target.min(duration);
    }
    player.begin_scrub(target);
}
