use std::time::Instant;

use crate::simulation::engine::advance;
use crate::simulation::params::Config;
use crate::simulation::picking::resolve_hit;
use crate::simulation::selection::SelectionSet;
use crate::simulation::shapes::Shape;
use crate::simulation::states::SimulationState;
use crate::simulation::vector::NVec2;

/// Helper to build a state of `n` circles scattered over the canvas
fn make_state(n: usize, config: &Config) -> SimulationState {
    let mut state = SimulationState::new();

    for i in 0..n {
        let i_f = i as f64;
        // deterministic positions, no rand needed
        let position = NVec2::new(
            config.width * (0.5 + 0.45 * (i_f * 0.37).sin()),
            config.height * (0.5 + 0.45 * (i_f * 0.13).cos()),
        );
        state
            .spawn(Shape::Circle { radius: 5.0 }, position, 1.0, 0.0)
            .expect("benchmark spawn");
    }

    state
}

/// Config with every force active, the worst case per object
fn make_config() -> Config {
    Config {
        enable_gravity: true,
        enable_friction: true,
        enable_spring: true,
        ..Config::default()
    }
}

/// Time `advance` for a range of object counts
pub fn bench_advance() {
    // Different collection sizes to test
    let ns = [200, 400, 800, 1600, 3200, 6400, 12800, 25600];
    let steps = 50;
    let dt = 1.0 / 240.0;

    for n in ns {
        let config = make_config();
        let mut state = make_state(n, &config);
        let mut selection = SelectionSet::new();

        // Warm up
        advance(&mut state, dt, &config, &mut selection).expect("warm-up step");

        let t0 = Instant::now();
        for _ in 0..steps {
            advance(&mut state, dt, &config, &mut selection).expect("bench step");
        }
        let per_step = t0.elapsed().as_secs_f64() / steps as f64;

        println!(
            "N = {n:6}, advance = {per_step:9.6} s/step, alive = {}",
            state.len()
        );
    }
}

/// Time the reverse-scan hit resolve over a grid of query points
pub fn bench_resolve_hit() {
    let ns = [200, 400, 800, 1600, 3200, 6400, 12800, 25600];
    let queries = 1000;

    for n in ns {
        let config = make_config();
        let state = make_state(n, &config);

        // Query points sweeping the canvas diagonal
        let points: Vec<NVec2> = (0..queries)
            .map(|q| {
                let f = q as f64 / queries as f64;
                NVec2::new(config.width * f, config.height * f)
            })
            .collect();

        // Warm up
        let mut hits = 0usize;
        for p in &points {
            if resolve_hit(&state, *p).is_some() {
                hits += 1;
            }
        }

        let t0 = Instant::now();
        for p in &points {
            if resolve_hit(&state, *p).is_some() {
                hits += 1;
            }
        }
        let per_query = t0.elapsed().as_secs_f64() / queries as f64;

        println!("N = {n:6}, resolve = {per_query:9.6e} s/query, hits = {hits}");
    }
}
