use circflow::{ScenarioConfig, Scenario, Strategy, VelocityField};
use circflow::simulation::analytical;
use circflow::{bench_convergence, bench_calculator};

use clap::Parser;
use anyhow::{Context, Result};
use log::info;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short, default_value = "circle_quadrant4.yaml")]
    file_name: String,

    /// Print the convergence and timing tables instead of running the scenario
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
    let file = File::open(&config_path).with_context(|| format!("opening {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)
        .with_context(|| format!("parsing {}", config_path.display()))?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.bench {
        bench_convergence();
        bench_calculator();
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let mut scenario = Scenario::build_scenario(scenario_cfg)?;

    let t0 = scenario.parameters.t0;
    let t_end = scenario.parameters.t_end;
    let strategy = scenario.strategy;
    let snapshots = scenario.snapshots.clone();

    info!("points in quadrant IV: {} of {}", scenario.body.get_points().len(), scenario.body.num_points);
    info!("window [{t0}, {t_end}], strategy {:?}", strategy);

    // field stretch rates at the snapshot times
    for &t in &snapshots {
        if let Some((cx, cy)) = VelocityField.coefficients(t) {
            info!("t = {t:.2}: v1 = {cx:6.3} * x1, v2 = {cy:.2} * x2");
        }
        if let Some(samples) = scenario.field_samples(t) {
            info!("t = {t:.2}: max speed on grid {:.3}", samples.speed().max());
        }
    }

    let mut calculator = scenario.calculator()?;
    calculator.calculate_trajectories()?;

    for &t in &snapshots {
        let (xs, ys) = calculator.get_form_at_time(t)?;
        if xs.is_empty() {
            continue;
        }
        let (x_min, x_max) = xs.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));
        let (y_min, y_max) = ys.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));
        info!("t = {t:.2}: x in [{x_min:.3}, {x_max:.3}], y in [{y_min:.3}, {y_max:.3}]");
    }

    // cross-check the numerical path against the closed form
    if let Strategy::Numerical { .. } = strategy {
        let mut worst: f64 = 0.0;
        for p in calculator.body().get_points() {
            let exact = analytical::position_at(&p.x0, t0, t_end)?;
            worst = worst.max((p.position() - exact).norm() / exact.norm());
        }
        info!("max relative deviation from the closed form at t_end: {worst:.3e}");
    }

    Ok(())
}
