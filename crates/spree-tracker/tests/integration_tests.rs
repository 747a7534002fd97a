//! Integration tests for the spree tracker.
//!
//! These tests use recorded session logs to verify the full replay pipeline
//! works correctly end-to-end.

use spree_events::{fixtures, Action, ParticipantId, ScoreKind};
use spree_tracker::{
    default_config_toml, default_templates_toml, read_session_log, MessageTemplates, Replay,
    SpreeError, SpreeTracker, TrackerConfig,
};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

const LONG_SESSION: &str = "tests/fixtures/long_session.jsonl";

/// Test that the shared sample session replays as expected.
#[test]
fn test_sample_session_replay() {
    let events = fixtures::sample_session();

    let report = Replay::default().run(&events);

    assert_eq!(report.events, 15);
    assert_eq!(
        report.broadcasts(),
        vec![
            "Alpha is on a rampage!",
            // Delta fired Charlie's deployed instrument; Charlie is credited
            "Alpha's rampage was stopped by Charlie",
        ]
    );
    assert_eq!(
        report.actions.iter().filter(|a| a.is_score_adjustment()).collect::<Vec<_>>(),
        vec![&Action::AdjustScore {
            participant: ParticipantId(3),
            delta: 2,
            kind: ScoreKind::Credit,
        }]
    );
    assert_eq!(report.standings.len(), 1);
    assert_eq!(report.standings[0].0, ParticipantId(3));
    assert_eq!(report.standings[0].1.wins, 2);
    assert_eq!(report.transcript(), report.broadcasts());

    // Echo left; the elimination naming Echo changed nothing
    assert_eq!(
        report.final_streaks,
        vec![
            (ParticipantId(1), 0),
            (ParticipantId(2), 0),
            (ParticipantId(3), 1),
            (ParticipantId(4), 0),
        ]
    );
}

/// Test a longer session with a teammate stop, an exemption and a reused id.
#[test]
fn test_long_session_from_file() {
    let events = read_session_log(Path::new(LONG_SESSION)).expect("Failed to read session log");
    assert_eq!(events.len(), 22);

    let report = Replay::default().run(&events);

    assert_eq!(
        report.broadcasts(),
        vec![
            "Grue is on a rampage!",
            "Grue is on a killing spree!",
            "Grue's killing spree was halted by their own teammate Mira",
        ]
    );
    assert_eq!(report.actions.len(), 4);
    assert_eq!(report.actions[3], Action::penalty(ParticipantId(2), 4));

    let mira = report
        .standings
        .iter()
        .find(|(id, _)| *id == ParticipantId(2))
        .map(|(_, s)| *s)
        .expect("Mira should be scored");
    assert_eq!(mira.losses, 4);
    assert_eq!(mira.net(), -4);

    // Participant 4 left and the id came back as a new participant
    assert_eq!(
        report.final_streaks,
        vec![
            (ParticipantId(1), 0),
            (ParticipantId(2), 0),
            (ParticipantId(3), 0),
            (ParticipantId(4), 1),
        ]
    );
}

/// Test that configuration and templates from files change the output.
#[test]
fn test_tracker_from_files() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("tracker.toml");
    let templates_path = dir.path().join("templates.toml");

    fs::write(
        &config_path,
        r#"
        [announcements]
        bounty_notices = true

        [scoring]
        penalize_teammate_stops = false
        "#,
    )
    .unwrap();
    fs::write(
        &templates_path,
        r#"
        [milestones]
        rampage = "{killer} has five"
        killing_spree = "{killer} has ten"
        "#,
    )
    .unwrap();

    let tracker = SpreeTracker::from_files(&config_path, Some(templates_path.as_path())).unwrap();
    let events = read_session_log(Path::new(LONG_SESSION)).unwrap();
    let report = Replay::new(tracker).run(&events);

    assert_eq!(
        report.actions,
        vec![
            Action::broadcast("Grue has five"),
            Action::broadcast("Grue has ten"),
            Action::broadcast("Grue's killing spree was halted by their own teammate Mira"),
            Action::notify(
                ParticipantId(2),
                "Halting teammate Grue's killing spree lost you 4 extra points"
            ),
        ]
    );
    assert!(report.standings.is_empty());
    assert_eq!(
        report.transcript(),
        vec![
            "Grue has five",
            "Grue has ten",
            "Grue's killing spree was halted by their own teammate Mira",
            "[to #2] Halting teammate Grue's killing spree lost you 4 extra points",
        ]
    );
}

/// Test that keeping streaks through exemptions is honored end-to-end.
#[test]
fn test_exemption_keeps_streak_when_configured() {
    let config = TrackerConfig::from_str("[exemptions]\nreset_streak = false").unwrap();
    let events = read_session_log(Path::new(LONG_SESSION)).unwrap();

    let report = Replay::new(SpreeTracker::new(config, MessageTemplates::default())).run(&events);

    // Mira's one elimination survives the avenged death
    assert!(report.final_streaks.contains(&(ParticipantId(2), 1)));
}

/// Test that the default files written by the tool load back.
#[test]
fn test_default_files_load() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("tracker.toml");
    let templates_path = dir.path().join("templates.toml");
    fs::write(&config_path, default_config_toml()).unwrap();
    fs::write(&templates_path, default_templates_toml()).unwrap();

    let tracker = SpreeTracker::from_files(&config_path, Some(templates_path.as_path())).unwrap();

    assert_eq!(tracker.config(), &TrackerConfig::default());
    assert_eq!(tracker.announcer().templates(), &MessageTemplates::default());
}

/// Test error reporting for missing and malformed inputs.
#[test]
fn test_load_errors() {
    let dir = tempdir().unwrap();

    let missing = read_session_log(&dir.path().join("nope.jsonl"));
    assert!(matches!(missing, Err(SpreeError::Io(_))));

    let bad_log = dir.path().join("bad.jsonl");
    fs::write(&bad_log, "{\"type\":\"leave\",\"id\":1}\n{\"type\":\"teleport\"}\n").unwrap();
    match read_session_log(&bad_log) {
        Err(SpreeError::Parse { line, .. }) => assert_eq!(line, 2),
        other => panic!("expected parse error, got {:?}", other),
    }

    let bad_config = dir.path().join("bad.toml");
    fs::write(&bad_config, "[announcements\n").unwrap();
    assert!(matches!(
        SpreeTracker::from_files(&bad_config, None),
        Err(SpreeError::Config(_))
    ));

    let good_config = dir.path().join("good.toml");
    fs::write(&good_config, "").unwrap();
    assert!(matches!(
        SpreeTracker::from_files(&good_config, Some(dir.path().join("missing.toml").as_path())),
        Err(SpreeError::Template(_))
    ));
}

/// Test that every action survives a JSON line round-trip as the tool prints it.
#[test]
fn test_actions_print_as_jsonl() {
    let report = Replay::default().run(&fixtures::sample_session());

    for action in &report.actions {
        let line = action.to_jsonl().unwrap();
        let parsed: Action = serde_json::from_str(&line).unwrap();
        assert_eq!(&parsed, action);
    }
}
