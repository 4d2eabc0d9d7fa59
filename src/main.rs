use std::{env, fs, process::ExitCode, str::FromStr};

use life::{Config, FixedStep, Pattern, Simulation};

const DEFAULT_GENERATIONS: u64 = 4;
const USAGE: &str = "usage: cgol [GENERATIONS] [PATTERN_FILE]";

fn main() -> ExitCode {
    env_logger::init();
    let args: Vec<String> = env::args().skip(1).collect();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("cgol: {e}\n{USAGE}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &[String]) -> Result<(), String> {
    if args.len() > 2 {
        return Err("too many arguments".to_string());
    }
    let generations = match args.first() {
        Some(s) => s
            .parse()
            .map_err(|e| format!("invalid generation count {s:?}: {e}"))?,
        None => DEFAULT_GENERATIONS,
    };
    let mut simulation = match args.get(1) {
        Some(path) => load(path)?,
        None => Simulation::default(),
    };
    let clock = FixedStep::default();
    println!("{}", simulation.board());
    for _ in 0..generations {
        simulation.advance(clock.step());
        println!(
            "\ngeneration {} ({} live)\n{}",
            simulation.generation(),
            simulation.board().population(),
            simulation.board()
        );
    }
    Ok(())
}

fn load(path: &str) -> Result<Simulation, String> {
    let text = fs::read_to_string(path).map_err(|e| format!("{path}: {e}"))?;
    let pattern = Pattern::from_str(&text).map_err(|e| format!("{path}: {e}"))?;
    log::info!("loaded {} live cells from {path}", pattern.len());
    let config = Config::default();
    let size = config.size;
    Ok(Simulation::with_seed(config, pattern.centered_on(size)))
}
