use super::*;
use crate::config::ControlsSettings;
use crate::player::ProgressStep;

#[test]
fn app_without_txids_starts_idle() {
    let app = App::new(Vec::new());
    assert_eq!(app.phase, MountPhase::Idle);
}

#[test]
fn app_with_txids_starts_resolving() {
    let app = App::new(vec!["tx1".to_string()]);
    assert_eq!(app.phase, MountPhase::Resolving);
}

#[test]
fn fail_records_the_message() {
    let mut app = App::new(vec!["tx1".to_string()]);
    app.fail("no entry matched");
    assert_eq!(app.phase, MountPhase::Failed("no entry matched".to_string()));
}

#[test]
fn step_starts_fine_and_stays_coarse_once_adjusted() {
    let controls = ControlsSettings::default();
    let mut app = App::new(vec!["tx1".to_string()]);

    assert_eq!(app.progress_step, ProgressStep::Fine);
    assert_eq!(app.step_seconds(&controls), controls.fine_step);

    app.coarsen_step();
    assert_eq!(app.step_seconds(&controls), controls.coarse_step);

    app.coarsen_step();
    assert_eq!(app.progress_step, ProgressStep::Coarse);
}

#[test]
fn adjust_volume_clamps_to_scale() {
    let mut app = App::new(Vec::new());
    assert_eq!(app.volume, 100);

    assert_eq!(app.adjust_volume(10), 100);
    assert_eq!(app.adjust_volume(-30), 70);
    assert_eq!(app.adjust_volume(-200), 0);
    assert_eq!(app.adjust_volume(5), 5);
}
