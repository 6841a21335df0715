use clap::Parser;

use grid_pathfinding::collaborators::{
    ConsoleRenderer, ConsoleSink, GridSource, RandomSource, Renderer, TextFileRenderer, TextSource,
};
use grid_pathfinding::config::{AlgorithmChoice, Config};
use grid_pathfinding::heuristic::heuristic_map;
use grid_pathfinding::{RawGrid, Result, Runner, SymbolAlphabet};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn load_map(config: &Config, alphabet: SymbolAlphabet) -> Result<RawGrid> {
    let mut source: Box<dyn GridSource> = match &config.map {
        Some(path) => Box::new(TextSource::from_file(path)?),
        None => {
            let rng = match config.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            Box::new(RandomSource::new(rng, alphabet))
        }
    };
    source.load()
}

fn print_heuristic_map(raw: &RawGrid, runner: &Runner) -> Result<()> {
    let map = heuristic_map(raw, runner.alphabet(), runner.heuristic())?;
    println!("Heuristic ({:?}) distance to goal:", runner.heuristic());
    for row in map {
        let line: Vec<String> = row
            .iter()
            .map(|value| match value {
                Some(v) => format!("{:>5.1}", v),
                None => "    -".to_string(),
            })
            .collect();
        println!("{}", line.join(" "));
    }
    println!();
    Ok(())
}

fn main() {
    env_logger::init();
    let config = Config::parse();
    let alphabet = SymbolAlphabet::default();
    let runner = Runner::new(alphabet, config.heuristic);

    if config.map.is_none() && !config.random {
        eprintln!("Pass --map <FILE> or --random");
        std::process::exit(2);
    }

    let raw = match load_map(&config, alphabet) {
        Ok(raw) => raw,
        Err(e) => {
            eprintln!("Could not load map: {}", e);
            std::process::exit(1);
        }
    };

    if !config.quiet {
        println!("Starting grid search...");
        println!("Map size: {}x{}", raw.height(), raw.width());
        println!("Algorithm: {:?}", config.algorithm);
        println!("Heuristic: {:?}", config.heuristic);
        println!();
    }

    if config.evaluate {
        if let Err(e) = print_heuristic_map(&raw, &runner) {
            eprintln!("Could not evaluate map: {}", e);
            std::process::exit(1);
        }
    }

    if config.algorithm == AlgorithmChoice::All {
        match runner.run_all(&raw) {
            Ok(results) => Runner::print_comparison_results(&results),
            Err(e) => {
                eprintln!("Error running all algorithms: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    let mut renderer = ConsoleRenderer::new(alphabet);
    let mut sink = ConsoleSink;
    for algorithm in config.algorithm.algorithms() {
        match runner.execute(algorithm, &raw, &mut renderer, &mut sink) {
            Ok(report) => {
                if !config.quiet {
                    println!("\n=== FINAL RESULTS ===");
                    println!("{}", report);
                }
                if let Some(output) = &config.output {
                    let marked = raw.with_path(&report.path, &alphabet);
                    if let Err(e) = TextFileRenderer::new(output).render(&marked) {
                        eprintln!("Could not write {}: {}", output.display(), e);
                        std::process::exit(1);
                    }
                }
            }
            Err(_) => std::process::exit(1),
        }
    }
}
