mod hero;

use std::sync::Arc;
use std::thread;

use hero::{Fire, Hero};
use interplay::{CommandLog, HistoryError};

#[test]
fn firing_consumes_rounds_and_undo_returns_them() {
    let log = CommandLog::new(Hero::new());

    assert_eq!(log.execute(&Fire).unwrap(), 9);
    assert_eq!(log.execute(&Fire).unwrap(), 8);

    log.undo().unwrap();
    assert_eq!(log.inspect(|h| h.rounds).unwrap(), 9);
    log.undo().unwrap();
    assert_eq!(log.inspect(|h| h.rounds).unwrap(), 10);
}

#[test]
fn save_point_restores_to_after_the_first_shot() {
    let log = CommandLog::new(Hero::new());

    log.execute(&Fire).unwrap(); // 9 left
    let save = log.snapshot().unwrap(); // game saved here
    log.execute(&Fire).unwrap(); // 8 left

    log.restore(&save).unwrap();

    // Back to 9, not 10: the save was taken after the first shot.
    assert_eq!(log.inspect(|h| h.rounds).unwrap(), 9);
}

#[test]
fn history_depth_tracks_executes_minus_undos() {
    let log = CommandLog::new(Hero::new());

    for _ in 0..4 {
        log.execute(&Fire).unwrap();
    }
    for _ in 0..3 {
        log.undo().unwrap();
    }
    assert_eq!(log.history_len().unwrap(), 1);

    log.undo().unwrap();
    assert_eq!(log.history_len().unwrap(), 0);

    match log.undo() {
        Err(HistoryError::EmptyHistory) => {}
        other => panic!("expected EmptyHistory, got {:?}", other),
    }
}

#[test]
fn failed_shot_leaves_history_and_hero_intact() {
    let log = CommandLog::new(Hero {
        rounds: 1,
        lives: 5,
    });

    log.execute(&Fire).unwrap(); // last round
    match log.execute(&Fire) {
        Err(HistoryError::CommandFailed { command, fault }) => {
            assert_eq!(command, "Fire");
            assert_eq!(fault.to_string(), "no rounds left");
        }
        other => panic!("expected CommandFailed, got {:?}", other),
    }

    assert_eq!(log.history_len().unwrap(), 1);
    assert_eq!(log.inspect(|h| h.rounds).unwrap(), 0);

    // The one successful shot is still undoable.
    log.undo().unwrap();
    assert_eq!(log.inspect(|h| h.rounds).unwrap(), 1);
}

#[test]
fn round_trip_law_covers_the_whole_receiver() {
    let log = CommandLog::new(Hero::new());
    let before = log.inspect(|h| h.clone()).unwrap();

    log.execute(&Fire).unwrap();
    log.undo().unwrap();

    let after = log.inspect(|h| h.clone()).unwrap();
    assert_eq!(before, after);
}

#[test]
fn snapshot_is_opaque_to_the_caretaker() {
    let log = CommandLog::new(Hero::new());
    let save = log.snapshot().unwrap();

    // All the caretaker can see is a token; the captured fields are
    // not reachable through it.
    let shown = format!("{:?}", save);
    assert!(shown.contains("Snapshot"));
    assert!(!shown.contains("rounds"));
}

#[test]
fn execute_undo_pairs_from_two_threads_never_tear() {
    let log = Arc::new(CommandLog::new(Hero {
        rounds: 1_000,
        lives: 5,
    }));

    let mut workers = Vec::new();
    for _ in 0..2 {
        let log = Arc::clone(&log);
        workers.push(thread::spawn(move || {
            for _ in 0..50 {
                log.execute(&Fire).unwrap();
                log.undo().unwrap();
            }
        }));
    }
    for worker in workers {
        worker.join().unwrap();
    }

    // Every pair cancelled out atomically.
    assert_eq!(log.history_len().unwrap(), 0);
    assert_eq!(log.inspect(|h| h.rounds).unwrap(), 1_000);
}

#[test]
fn concurrent_executes_all_land() {
    let log = Arc::new(CommandLog::new(Hero {
        rounds: 1_000,
        lives: 5,
    }));

    let mut workers = Vec::new();
    for _ in 0..4 {
        let log = Arc::clone(&log);
        workers.push(thread::spawn(move || {
            for _ in 0..25 {
                log.execute(&Fire).unwrap();
            }
        }));
    }
    for worker in workers {
        worker.join().unwrap();
    }

    assert_eq!(log.history_len().unwrap(), 100);
    assert_eq!(log.inspect(|h| h.rounds).unwrap(), 900);
}
