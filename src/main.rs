use std::time::Instant;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use lattice::config::Params;
use lattice::life;

struct Timing {
    name: &'static str,
    ms: f64,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("lattice=info")),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();
    let params = match args.get(1) {
        Some(path) => Params::load(path).with_context(|| format!("loading params from {path}"))?,
        None => Params::default(),
    };

    info!(
        width = params.width,
        height = params.height,
        seed = params.seed,
        density = params.density,
        parallel = params.parallel,
        "seeding soup"
    );

    let mut timings = Vec::new();

    let t = Instant::now();
    let mut lattice = life::soup(&params).context("building lattice")?;
    timings.push(Timing {
        name: "build",
        ms: t.elapsed().as_secs_f64() * 1000.0,
    });

    // Host loop: one step and one draw per tick. Draw lags step by a
    // generation because it reads the past buffer.
    let t = Instant::now();
    for _ in 0..params.generations {
        if params.parallel {
            lattice.par_step();
        } else {
            lattice.step();
        }
        lattice.draw();

        if lattice.generation() % params.report_every == 0 {
            info!(
                generation = lattice.generation(),
                population = life::population(lattice.past()),
                "tick"
            );
        }
    }
    timings.push(Timing {
        name: "run",
        ms: t.elapsed().as_secs_f64() * 1000.0,
    });

    for t in &timings {
        info!("{:10} {:10.1} ms", t.name, t.ms);
    }
    if params.generations > 0 {
        let run_ms = timings.last().map_or(0.0, |t| t.ms);
        info!(
            "{:10} {:10.4} ms/gen",
            "average",
            run_ms / params.generations as f64
        );
    }

    Ok(())
}
