use std::env;
use std::sync::mpsc;

use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::App;
use crate::ledger::ResolveOutcome;
use crate::mpris::ControlCmd;
use crate::player::{GatewayElement, Player};

mod event_loop;
mod mpris_sync;
mod settings;
mod startup;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    startup::init_logging();
    let settings = settings::load_settings();

    // Everything after the program name is a transaction id to resolve.
    let txids: Vec<String> = env::args().skip(1).collect();
    let mut app = App::new(txids);
    app.volume = settings.audio.volume;

    let mut player: Player<GatewayElement> = Player::new();
    player.set_auto_advance(settings.playback.auto_advance);
    player.set_volume(app.volume);

    let (resolve_tx, resolve_rx) = mpsc::channel::<ResolveOutcome>();
    startup::spawn_resolution(&app, &settings, resolve_tx);

    let (control_tx, control_rx) = mpsc::channel::<ControlCmd>();
    let mpris = crate::mpris::spawn_mpris(control_tx);

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result: Result<(), Box<dyn std::error::Error>> = (|| {
        let mut state = event_loop::EventLoopState::new(&app);
        event_loop::run(
            &mut terminal,
            &settings,
            &mut app,
            &mut player,
            &mpris,
            &control_rx,
            &resolve_rx,
            &mut state,
        )
    })();

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    run_result
}
