use std::time::Instant;

use crate::simulation::params::Parameters;
use crate::simulation::scenario::Scenario;
use crate::simulation::states::{BodyKind, NVec2};

/// Time full ticks (collision pass + O(n^2) force pass + integration)
/// on deterministic populations of increasing size
pub fn bench_tick() {
    // Different population sizes to test
    let ns = [50, 100, 200, 400, 800];
    let ticks = 20;

    for n in ns {
        let parameters = Parameters::default();
        let mut scenario = match Scenario::new(parameters) {
            Ok(s) => s,
            Err(err) => {
                println!("bench_tick: {err}");
                return;
            }
        };

        // Lay bodies on a square grid wide enough that nothing overlaps,
        // deterministic positions, no rand needed
        let side = (n as f64).sqrt().ceil() as usize;
        let spacing = 4.0 * scenario.parameters.min_radius;
        for i in 0..n {
            let (row, col) = (i / side, i % side);
            let x = NVec2::new(col as f64 * spacing, row as f64 * spacing);
            let v = NVec2::new((i as f64 * 0.37).sin() * 0.1, (i as f64 * 0.13).cos() * 0.1);
            let radius = scenario.parameters.min_radius;
            scenario.system.insert(BodyKind::Standard, x, v, radius, &scenario.parameters);
        }

        // Warm up
        if let Err(err) = scenario.tick(0.0) {
            println!("bench_tick: {err}");
            return;
        }

        let t0 = Instant::now();
        let mut merged = 0;
        for _ in 0..ticks {
            match scenario.tick(scenario.parameters.dt) {
                Ok(report) => merged += report.removed.len(),
                Err(err) => {
                    println!("bench_tick: {err}");
                    return;
                }
            }
        }
        let per_tick = t0.elapsed().as_secs_f64() / ticks as f64;

        println!("N = {n:5}, tick = {:10.6} s, merged = {merged}", per_tick);
    }
}
