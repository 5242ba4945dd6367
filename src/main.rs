use shapesim::{advance, resolve_hit, Scenario, ScenarioConfig, SelectionSet};

use clap::Parser;
use anyhow::Result;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short, default_value = "sandbox.yaml")]
    file_name: String,

    /// Resolve a pointer click at x,y after the run and report the hit
    #[arg(long, num_args = 2, value_names = ["X", "Y"])]
    pick: Option<Vec<f64>>,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("scenarios")
        .join(file_name);
    let file = File::open(&config_path)?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    let args = Args::parse();
    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let mut scenario = Scenario::build_scenario(scenario_cfg)?;

    // Headless frame loop: the selection stands in for the host UI's
    let mut selection = SelectionSet::new();
    let dt = scenario.parameters.h0 * scenario.parameters.time_scale;
    let mut culled_total = 0;

    println!(
        "stepping {} object(s) to t = {} with dt = {}",
        scenario.state.len(),
        scenario.parameters.t_end,
        dt
    );

    while scenario.state.t < scenario.parameters.t_end {
        culled_total += advance(&mut scenario.state, dt, &scenario.config, &mut selection)?;
        if scenario.state.is_empty() {
            break;
        }
    }

    println!(
        "t = {:.3}: {} object(s) alive, {} culled",
        scenario.state.t,
        scenario.state.len(),
        culled_total
    );
    for obj in &scenario.state.objects {
        println!(
            "  #{:<3} {:?}  x = ({:8.2}, {:8.2})  v = ({:8.2}, {:8.2})",
            obj.id, obj.shape, obj.position.x, obj.position.y, obj.velocity.x, obj.velocity.y
        );
    }

    if let Some(p) = args.pick {
        let point = shapesim::NVec2::new(p[0], p[1]);
        match resolve_hit(&scenario.state, point) {
            Some(id) => println!("pick ({}, {}): hit object #{id}", p[0], p[1]),
            None => println!("pick ({}, {}): no hit", p[0], p[1]),
        }
    }

    Ok(())
}
