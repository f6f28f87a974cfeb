//! Typewriter engine behavior over logical and tokio time

use std::time::Duration;

use folio_engine::{
    ManualScheduler, RecordingTarget, TargetMetadata, TokioScheduler, Typewriter,
    TypewriterConfig, TypewriterError, TypewriterPhase, TypewriterSettings, Visibility,
};
use folio_types::DEFAULT_WORD;

use crate::common::manual_typewriter;

#[test]
fn single_word_cycle_renders_expected_sequence() {
    let mut engine = manual_typewriter(r#"["ab"]"#);
    engine.run_steps(7);

    assert_eq!(
        engine.target().renders(),
        ["a", "ab", "a", "", "a", "ab", "a", ""]
    );
    assert_eq!(engine.word_index(), 0);
    assert_eq!(engine.phase(), TypewriterPhase::Typing);
}

#[test]
fn two_words_advance_then_wrap() {
    let mut engine = manual_typewriter(r#"["a", "b"]"#);
    engine.run_steps(1);
    assert_eq!(engine.word_index(), 1);

    engine.run_steps(1);
    assert_eq!(engine.text(), "b");

    engine.run_steps(1);
    assert_eq!(engine.word_index(), 0);
    assert_eq!(engine.target().renders(), ["a", "", "b", ""]);
}

#[test]
fn rendered_text_is_always_a_prefix() {
    let mut engine = manual_typewriter(r#"["Rust", "", "naïve café", "Go"]"#);
    for _ in 0..300 {
        engine.run_steps(1);
        assert!(engine.current_word().starts_with(engine.text()));
    }
}

#[test]
fn pause_mid_cycle_freezes_until_resume() {
    let mut engine = manual_typewriter(r#"["hello"]"#);
    engine.advance(Duration::from_millis(250));
    assert_eq!(engine.text(), "hel");

    engine.pause();
    assert_eq!(engine.advance(Duration::from_secs(30)), 0);
    assert_eq!(engine.text(), "hel");
    assert_eq!(engine.phase(), TypewriterPhase::Typing);
    assert_eq!(engine.target().renders().len(), 3);

    engine.resume();
    assert_eq!(engine.text(), "hell");
    assert_eq!(engine.target().renders(), ["h", "he", "hel", "hell"]);
}

#[test]
fn resume_while_running_neither_skips_nor_duplicates() {
    let mut engine = manual_typewriter(r#"["abcd"]"#);
    engine.resume();
    engine.resume();
    engine.run_steps(1);

    assert_eq!(engine.target().renders(), ["a", "ab", "abc", "abcd"]);
}

#[test]
fn rapid_pause_resume_keeps_one_pending_timer() {
    let mut engine = manual_typewriter(r#"["Web", "Rust"]"#);
    for round in 0..50 {
        if round % 3 == 0 {
            engine.pause();
            assert_eq!(engine.scheduler().pending_count(), 0);
        } else {
            engine.set_visibility(Visibility::Visible);
            assert_eq!(engine.scheduler().pending_count(), 1);
        }
    }
    assert!(engine.scheduler().pending_count() <= 1);
}

#[test]
fn malformed_word_list_uses_default_word() {
    let metadata = TargetMetadata {
        words: Some("['single quotes']".to_string()),
        wait: None,
    };
    let config = TypewriterConfig::from_metadata(&metadata, TypewriterSettings::default());
    let mut engine =
        Typewriter::start(Some(RecordingTarget::new()), ManualScheduler::new(), config).unwrap();

    assert_eq!(engine.current_word(), DEFAULT_WORD);
    engine.run_steps(DEFAULT_WORD.len() - 1);
    assert_eq!(engine.text(), DEFAULT_WORD);
    assert_eq!(engine.phase(), TypewriterPhase::Deleting);
}

#[test]
fn missing_target_is_an_error() {
    let result: Result<Typewriter<RecordingTarget, ManualScheduler>, _> = Typewriter::start(
        None,
        ManualScheduler::new(),
        TypewriterConfig::default(),
    );
    assert!(matches!(result, Err(TypewriterError::MissingTarget)));
}

#[test]
fn custom_wait_holds_full_word() {
    let metadata = TargetMetadata {
        words: Some(r#"["ok"]"#.to_string()),
        wait: Some("1000".to_string()),
    };
    let config = TypewriterConfig::from_metadata(&metadata, TypewriterSettings::default());
    let mut engine =
        Typewriter::start(Some(RecordingTarget::new()), ManualScheduler::new(), config).unwrap();

    engine.advance(Duration::from_millis(100));
    assert_eq!(engine.text(), "ok");
    engine.advance(Duration::from_millis(999));
    assert_eq!(engine.text(), "ok");
    engine.advance(Duration::from_millis(1));
    assert_eq!(engine.text(), "o");
}

#[tokio::test(start_paused = true)]
async fn tokio_scheduler_drives_engine() {
    let (scheduler, mut timers) = TokioScheduler::new();
    let config = TypewriterConfig::new(
        folio_engine::WordList::parse(r#"["ab"]"#).unwrap(),
        TypewriterSettings::default(),
    );
    let mut engine = Typewriter::start(Some(RecordingTarget::new()), scheduler, config).unwrap();

    for _ in 0..3 {
        let id = timers.recv().await.unwrap();
        assert!(engine.fire(id));
    }
    assert_eq!(engine.target().renders(), ["a", "ab", "a", ""]);
    assert_eq!(engine.scheduler().active_timers(), 1);
}

#[tokio::test(start_paused = true)]
async fn tokio_pause_drops_in_flight_timer() {
    let (scheduler, mut timers) = TokioScheduler::new();
    let config = TypewriterConfig::new(
        folio_engine::WordList::parse(r#"["abc"]"#).unwrap(),
        TypewriterSettings::default(),
    );
    let mut engine = Typewriter::start(Some(RecordingTarget::new()), scheduler, config).unwrap();

    engine.pause();
    let waited = tokio::time::timeout(Duration::from_secs(10), timers.recv()).await;
    assert!(waited.is_err());
    assert_eq!(engine.text(), "a");

    engine.resume();
    let id = timers.recv().await.unwrap();
    assert!(engine.fire(id));
    assert_eq!(engine.text(), "abc");
}
