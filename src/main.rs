//! Headless wolf-arena simulation.
//!
//! Runs the fixed-step round to completion: the enemy wolf spawns, runs to
//! a random corner anchor, and opens fire on the player. An optional
//! argument names a JSON config file overriding the built-in arena tuning.

#![allow(dead_code)]

mod audio;
mod components;
mod config;
mod constants;
mod events;
mod game;
mod game_loop;
mod math;
mod spawning;
mod systems;

use std::path::Path;

use glam::Vec2;

use audio::AudioOutput;
use config::ArenaConfig;
use constants::{FIXED_STEP_SECS, MAX_SIM_FRAMES};
use events::EventQueue;
use game::Outcome;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = match std::env::args().nth(1) {
        Some(path) => ArenaConfig::load(Path::new(&path))?,
        None => ArenaConfig::default(),
    };

    // Profiler server for attaching puffin_viewer
    puffin::set_scopes_on(true);
    let _profiler_server =
        puffin_http::Server::new(&format!("127.0.0.1:{}", puffin_http::DEFAULT_PORT)).ok();

    // Audio is optional: a machine without an output device still simulates
    let audio = match AudioOutput::new() {
        Ok(output) => Some(output),
        Err(err) => {
            eprintln!("Audio disabled: {}", err);
            None
        }
    };

    let mut rng = rand::thread_rng();
    let (mut world, _player) = game::init_world(&config, &mut rng)?;
    let mut events = EventQueue::new();
    let half_extents = Vec2::new(config.arena_half_extents.0, config.arena_half_extents.1);

    let mut frame: u64 = 0;
    let outcome = loop {
        puffin::GlobalProfiler::lock().new_frame();

        let result = game_loop::advance_frame(&mut world, FIXED_STEP_SECS, &mut events, half_extents);
        if let Some(audio) = &audio {
            for cue in &result.cues {
                audio.play(*cue);
            }
        }

        if result.outcome != Outcome::Playing {
            break result.outcome;
        }
        frame += 1;
        if frame >= MAX_SIM_FRAMES {
            break Outcome::Playing;
        }
    };

    let elapsed = frame as f32 * FIXED_STEP_SECS;
    match outcome {
        Outcome::Lost => println!("The wolf got you after {:.1}s.", elapsed),
        Outcome::Won => println!("Arena cleared in {:.1}s.", elapsed),
        Outcome::Playing => println!("Stalemate after {:.1}s, calling it a draw.", elapsed),
    }

    Ok(())
}
