//! Snapshots stay consistent while the reader republishes characters.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;

use diablo_interface::{
    Character, CharacterHandle, Dispatcher, LiveCharacters, Request, ResponseStatus, Stats,
    default_registry,
};

const READS_PER_THREAD: usize = 2_000;
const READER_THREADS: usize = 4;

/// Every numeric field is derived from `generation`, so a snapshot mixing two
/// publishes would disagree with its own name. `deaths` marks a separately
/// published active character.
fn character(generation: u32, separate_active: bool) -> Character {
    Character {
        name: format!("gen-{}", generation),
        level: generation % 99 + 1,
        experience: generation,
        gold: generation,
        gold_stash: generation.wrapping_mul(2),
        deaths: u32::from(separate_active),
        stats: Stats {
            strength: generation as i32,
            dexterity: generation as i32,
            vitality: generation as i32,
            energy: generation as i32,
        },
        ..Default::default()
    }
}

fn publish(live: &LiveCharacters, generation: u32) {
    let current = CharacterHandle::new(character(generation, false));
    let active = if generation % 2 == 0 {
        current.clone()
    } else {
        CharacterHandle::new(character(generation, true))
    };
    live.publish(Some(current), Some(active)).unwrap();
}

#[test]
fn test_snapshots_consistent_under_concurrent_publish() {
    let live = Arc::new(LiveCharacters::new());
    publish(&live, 0);

    let dispatcher = Dispatcher::new(Arc::new(default_registry(live.clone()).unwrap()));
    let done = Arc::new(AtomicBool::new(false));

    let producer = {
        let live = Arc::clone(&live);
        let done = Arc::clone(&done);
        thread::spawn(move || {
            let mut generation = 1u32;
            while !done.load(Ordering::SeqCst) {
                publish(&live, generation);
                generation = generation.wrapping_add(1);
            }
        })
    };

    let readers: Vec<_> = (0..READER_THREADS)
        .map(|_| {
            let dispatcher = dispatcher.clone();
            thread::spawn(move || {
                let current = Request::new("character/current", Vec::new()).unwrap();
                let active = Request::new("character/active", Vec::new()).unwrap();

                for _ in 0..READS_PER_THREAD {
                    let response = dispatcher.dispatch(&current);
                    let snapshot = response.character().expect("current is always published");
                    let generation = snapshot.experience;
                    assert_eq!(snapshot.name, format!("gen-{}", generation));
                    assert_eq!(snapshot.gold, generation);
                    assert_eq!(snapshot.gold_stash, generation.wrapping_mul(2));
                    assert_eq!(snapshot.level, generation % 99 + 1);
                    assert_eq!(snapshot.stats.strength, generation as i32);
                    assert_eq!(snapshot.stats.energy, generation as i32);
                    assert!(snapshot.is_current_character);

                    let response = dispatcher.dispatch(&active);
                    let snapshot = response.character().expect("active is always published");
                    let separate = snapshot.deaths == 1;
                    assert_eq!(snapshot.name, format!("gen-{}", snapshot.experience));
                    assert_eq!(separate, snapshot.experience % 2 == 1);
                    assert_eq!(snapshot.is_current_character, !separate);
                }
            })
        })
        .collect();

    for reader in readers {
        reader.join().unwrap();
    }
    done.store(true, Ordering::SeqCst);
    producer.join().unwrap();
}

#[test]
fn test_cleared_source_reports_not_found() {
    let live = Arc::new(LiveCharacters::new());
    publish(&live, 4);
    let dispatcher = Dispatcher::new(Arc::new(default_registry(live.clone()).unwrap()));

    let request = Request::new("character/active", Vec::new()).unwrap();
    assert!(dispatcher.dispatch(&request).is_success());

    live.clear().unwrap();
    let response = dispatcher.dispatch(&request);
    assert_eq!(response.status(), ResponseStatus::NotFound);
    assert!(response.payload().is_none());
}
