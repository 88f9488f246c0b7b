use crate::app::App;
use crate::mpris::MprisHandle;
use crate::player::{MediaElement, Player};

/// Push the active track metadata and playback state to MPRIS.
pub fn update_mpris<M: MediaElement>(mpris: &MprisHandle, app: &App, player: &Player<M>) {
    let index = player.mounted().then(|| player.snapshot().current_track);
    mpris.set_track_metadata(index, player.current_track());
    mpris.set_playback(app.playback);
}
