//! UI rendering helpers for the terminal user interface.
//!
//! This module contains functions to render the TUI using `ratatui`.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Gauge, Padding, Paragraph, Wrap},
};

use crate::app::{App, MountPhase};
use crate::config::Settings;
use crate::player::{MediaElement, PlaybackSnapshot, Player};

/// Render the controls help line.
fn controls_text() -> String {
    [
        "[space/p] play/pause",
        "[h/l] prev/next track",
        "[H/L] scrub",
        "[\u{2190}/\u{2192}] step + preview",
        "[enter] commit",
        "[\u{2191}/\u{2193}] volume",
        "[q] quit",
    ]
    .join(" | ")
}

/// Format seconds as `MM:SS` (or `H:MM:SS` past the hour).
fn format_time(seconds: f64) -> String {
    let total = seconds.max(0.0) as u64;
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;
    if hours > 0 {
        format!("{hours}:{minutes:02}:{secs:02}")
    } else {
        format!("{minutes}:{secs:02}")
    }
}

/// Progress line: position (scrub preview while scrubbing) over duration.
fn progress_text(snapshot: &PlaybackSnapshot) -> String {
    let position = format_time(snapshot.current_time);
    let total = snapshot
        .duration
        .map(format_time)
        .unwrap_or_else(|| "0:00".to_string());
    if snapshot.scrubbing {
        format!("{position} / {total} (scrubbing)")
    } else {
        format!("{position} / {total}")
    }
}

/// Render the whole frame.
pub fn draw<M: MediaElement>(f: &mut Frame, app: &App, player: &Player<M>, settings: &Settings) {
    let area = f.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(3),
        ])
        .split(area);

    draw_header(f, chunks[0], &settings.ui.header_text);
    draw_body(f, chunks[1], app, player, settings);
    draw_footer(f, chunks[2]);
}

fn draw_header(f: &mut Frame, area: Rect, header_text: &str) {
    let header = Paragraph::new(header_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, area);
}

fn draw_footer(f: &mut Frame, area: Rect) {
    let footer = Paragraph::new(controls_text())
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(footer, area);
}

fn draw_body<M: MediaElement>(
    f: &mut Frame,
    area: Rect,
    app: &App,
    player: &Player<M>,
    settings: &Settings,
) {
    match &app.phase {
        // An absent txid yields a fully idle view.
        MountPhase::Idle => {}
        MountPhase::Resolving => {
            let text = Paragraph::new("Resolving transaction data...")
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL).padding(Padding::uniform(1)));
            f.render_widget(text, area);
        }
        MountPhase::Failed(message) => {
            let text = Paragraph::new(message.as_str())
                .wrap(Wrap { trim: true })
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL).padding(Padding::uniform(1)));
            f.render_widget(text, area);
        }
        MountPhase::Ready => draw_player(f, area, app, player, settings),
    }
}

fn draw_player<M: MediaElement>(
    f: &mut Frame,
    area: Rect,
    app: &App,
    player: &Player<M>,
    settings: &Settings,
) {
    let Some(track) = player.current_track() else {
        return;
    };
    let snapshot = player.snapshot();

    let block = Block::default()
        .borders(Borders::ALL)
        .padding(Padding::uniform(1));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // title
            Constraint::Length(1), // creator
            Constraint::Length(1), // artwork / track counter
            Constraint::Length(1),
            Constraint::Length(1), // progress gauge
            Constraint::Length(1), // progress text
            Constraint::Length(1),
            Constraint::Length(1), // volume gauge
            Constraint::Min(0),
        ])
        .split(inner);

    let title = Paragraph::new(track.display_name())
        .style(Style::default().add_modifier(Modifier::BOLD));
    f.render_widget(title, rows[0]);

    let creator = Paragraph::new(track.creator.as_str());
    f.render_widget(creator, rows[1]);

    let detail = if settings.ui.show_artwork_uri {
        format!(
            "track {}/{}  |  art: {}",
            snapshot.current_track + 1,
            player.tracks().len(),
            track.artwork_src
        )
    } else {
        format!("track {}/{}", snapshot.current_track + 1, player.tracks().len())
    };
    f.render_widget(
        Paragraph::new(detail).style(Style::default().add_modifier(Modifier::DIM)),
        rows[2],
    );

    let ratio = match snapshot.duration {
        Some(duration) if duration > 0.0 => (snapshot.current_time / duration).clamp(0.0, 1.0),
        _ => 0.0,
    };
    let progress = Gauge::default()
        .ratio(ratio)
        .label(if snapshot.playing { "playing" } else { "paused" });
    f.render_widget(progress, rows[4]);

    f.render_widget(Paragraph::new(progress_text(&snapshot)), rows[5]);

    let volume = Gauge::default()
        .ratio(f64::from(app.volume) / 100.0)
        .label(format!("volume {}%", app.volume));
    f.render_widget(volume, rows[7]);
}
