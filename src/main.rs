//! Demonstration polling loop for the photo-trigger engine.
//!
//! Replays a scripted drive through a mock fix source and prints the
//! decision for every tick. Pass a JSON config path as the first argument
//! to run under your own thresholds; without one a demo configuration is
//! used. A config file that fails to load is fatal: the run performs no
//! captures at all rather than falling back to permissive defaults.

use phototrigger::{
    Decision, FixSource, MockFixSource, SentenceParser, TimeOfDay, TriggerConfig,
    TriggerEvaluator,
};
use std::env;
use std::process;

fn main() {
    let config = match env::args().nth(1) {
        Some(path) => match TriggerConfig::from_file(&path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Config error: {}", e);
                eprintln!("No valid configuration; refusing to run (no captures possible)");
                process::exit(1);
            }
        },
        None => demo_config(),
    };

    println!("Photo-Trigger Engine Demo");
    println!("=========================");
    println!(
        "Window {:02}:{:02}-{:02}:{:02}  min distance {} m  min delay {} ms",
        config.start.hour,
        config.start.minute,
        config.stop.hour,
        config.stop.minute,
        config.min_distance_m,
        config.min_delay_ms
    );
    match &config.halo {
        Some(halo) => println!(
            "Halo '{}' at ({:.4}, {:.4}) radius {} m",
            halo.name, halo.latitude, halo.longitude, halo.radius_m
        ),
        None => println!("Halo: none"),
    }
    println!();

    let mut source = scripted_drive();
    let parser = SentenceParser::new();
    let mut evaluator = TriggerEvaluator::new(config);
    let mut captures = 0u32;

    loop {
        let sentence = match source.read_sentence() {
            Ok(Some(sentence)) => sentence,
            Ok(None) => break,
            Err(e) => {
                eprintln!("Receiver error: {}", e);
                break;
            }
        };

        // A sentence that fails to parse skips the whole tick; the
        // accumulators only advance on good fixes.
        let fix = match parser.parse(&sentence.text) {
            Ok(fix) => fix,
            Err(e) => {
                println!("t={:>6}ms  skipped tick: {}", sentence.received_ms, e);
                continue;
            }
        };

        let decision = evaluator.evaluate_tick(&fix, sentence.received_ms);
        println!(
            "t={:>6}ms  ({:.4}, {:.4})  dist {:7.1} m  time {:>6} ms  -> {:?}",
            sentence.received_ms,
            fix.latitude,
            fix.longitude,
            evaluator.accumulated_distance_m(),
            evaluator.accumulated_time_ms(),
            decision
        );

        if decision == Decision::Capture {
            captures += 1;
            // Metadata the capture collaborator would log alongside the image
            let halo_name = evaluator
                .config()
                .halo
                .as_ref()
                .map(|h| h.name.as_str())
                .unwrap_or("-");
            println!(
                "           CAPTURE #{}: {:.4}, {:.4}, {:02}:{:02}:{:02}, {}",
                captures, fix.latitude, fix.longitude, fix.hour, fix.minute, fix.second, halo_name
            );
            evaluator.reset();
        }
    }

    println!();
    println!("Drive finished: {} capture(s)", captures);
}

/// Configuration for the built-in scripted drive
fn demo_config() -> TriggerConfig {
    TriggerConfig {
        start: TimeOfDay::new(6, 0),
        stop: TimeOfDay::new(20, 0),
        min_distance_m: 500.0,
        min_delay_ms: 5000,
        halo: None,
        ..TriggerConfig::default()
    }
}

/// A drive heading north at roughly 100 m per 2 s tick, with one
/// garbled sentence in the middle
fn scripted_drive() -> MockFixSource {
    let mut source = MockFixSource::new();
    let mut t = 0u64;
    for i in 0..14 {
        let lat = 40.4433 + i as f64 * 0.0009;
        if i == 5 {
            source.push_sentence("$GPRMC,1235,A,garbage", t);
        } else {
            source.push_fix(lat, -79.9436, 12, 30, (i % 60) as u8, t);
        }
        t += 2000;
    }
    source
}
