use cancel_this::Cancellable;
use clap::Parser;
use computation_process::Algorithm as _;
use env_logger::Builder;
use log::LevelFilter;
use petri_reach::analysis::{Objective, explicit_deadlocks, symbolic_deadlocks};
use petri_reach::explicit::{ExplicitBfs, ExplicitDfs, ExplorationConfig, ReachableMarkings};
use petri_reach::net::{FiringRule, Marking, PetriNet};
use petri_reach::symbolic::{
    SymbolicEncoding, SymbolicMarkings, SymbolicReachability, SymbolicReachabilityBfs,
};

#[derive(Parser)]
#[command(name = "petri-reach")]
#[command(about = "Compute reachable markings of a 1-safe Petri net")]
struct Args {
    /// Path to a PNML file
    #[arg(value_name = "FILE")]
    file: String,

    /// Reachability algorithm
    #[arg(long, default_value = "bdd", require_equals = true)]
    algorithm: Algorithm,

    /// Print every reachable marking (and the BDD as a formula for symbolic algorithms)
    #[arg(long)]
    markings: bool,

    /// Report reachable markings in which no transition can fire
    #[arg(long)]
    deadlocks: bool,

    /// Optimize a linear objective over reachable markings, given as `PLACE:WEIGHT` pairs
    #[arg(long, value_name = "PLACE:WEIGHT", value_delimiter = ',', value_parser = parse_weight, require_equals = true)]
    objective: Vec<(String, i64)>,

    /// Minimize the objective instead of maximizing it
    #[arg(long)]
    minimize: bool,

    /// Ignore the one-token capacity of places (explicit algorithms only)
    #[arg(long)]
    standard_firing: bool,

    /// Logging verbosity (use -v for info, or -v=LEVEL for specific level)
    #[arg(long, short = 'v', value_name = "LEVEL", num_args = 0..=1, default_missing_value = "info", require_equals = true)]
    verbose: Option<Option<LogLevel>>,
}

#[derive(Clone, clap::ValueEnum)]
enum Algorithm {
    #[value(name = "bfs")]
    Bfs,
    #[value(name = "dfs")]
    Dfs,
    #[value(name = "bdd")]
    Bdd,
    #[value(name = "bdd-bfs")]
    BddBfs,
}

#[derive(Clone, clap::ValueEnum)]
enum LogLevel {
    Trace,
    Debug,
    Info,
}

impl From<LogLevel> for LevelFilter {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Trace => LevelFilter::Trace,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Info => LevelFilter::Info,
        }
    }
}

fn parse_weight(value: &str) -> Result<(String, i64), String> {
    let (place, weight) = value
        .rsplit_once(':')
        .ok_or_else(|| format!("expected `PLACE:WEIGHT`, found `{value}`"))?;
    let weight = weight
        .trim()
        .parse::<i64>()
        .map_err(|e| format!("invalid weight in `{value}`: {e}"))?;
    Ok((place.trim().to_string(), weight))
}

enum Reachable {
    Explicit(ReachableMarkings),
    Symbolic(SymbolicEncoding, SymbolicMarkings),
}

impl Reachable {
    fn markings(&self) -> Vec<Marking> {
        match self {
            Reachable::Explicit(set) => set.iter().cloned().collect(),
            Reachable::Symbolic(_, set) => set.markings().collect(),
        }
    }
}

fn compute(net: &PetriNet, algorithm: &Algorithm, rule: FiringRule) -> Cancellable<Reachable> {
    let config = ExplorationConfig::new(net.clone()).with_rule(rule);
    Ok(match algorithm {
        Algorithm::Bfs => Reachable::Explicit(ExplicitBfs::run(config, net)?),
        Algorithm::Dfs => Reachable::Explicit(ExplicitDfs::run(config, net)?),
        Algorithm::Bdd => {
            let encoding = SymbolicEncoding::new(net);
            let set = SymbolicReachability::run(&encoding, encoding.mk_initial())?;
            Reachable::Symbolic(encoding, set)
        }
        Algorithm::BddBfs => {
            let encoding = SymbolicEncoding::new(net);
            let set = SymbolicReachabilityBfs::run(&encoding, encoding.mk_initial())?;
            Reachable::Symbolic(encoding, set)
        }
    })
}

fn main() {
    let args = Args::parse();

    let log_level = match args.verbose {
        None => LevelFilter::Off,
        Some(None) => LevelFilter::Info,
        Some(Some(level)) => level.into(),
    };
    Builder::from_default_env().filter_level(log_level).init();

    let net = PetriNet::from_pnml_file(&args.file).unwrap_or_else(|e| {
        eprintln!("Failed to load PNML file {}: {}", args.file, e);
        std::process::exit(1);
    });

    println!(
        "Loaded net with {} places and {} transitions.",
        net.num_places(),
        net.num_transitions()
    );

    let rule = if args.standard_firing {
        if matches!(args.algorithm, Algorithm::Bdd | Algorithm::BddBfs) {
            eprintln!("Standard firing is only supported by the explicit algorithms.");
            std::process::exit(1);
        }
        FiringRule::Standard
    } else {
        FiringRule::Safe
    };

    let objective = if args.objective.is_empty() {
        None
    } else {
        let objective = Objective::from_named_weights(&net, &args.objective).unwrap_or_else(|e| {
            eprintln!("Invalid objective: {}", e);
            std::process::exit(1);
        });
        Some(objective)
    };

    let reachable = compute(&net, &args.algorithm, rule).unwrap_or_else(|e| {
        eprintln!("Error during reachability computation: {}", e);
        std::process::exit(1);
    });

    match &reachable {
        Reachable::Explicit(set) => println!("Reachable markings: {}", set.len()),
        Reachable::Symbolic(_, set) => println!(
            "Reachable markings: {} ({} BDD nodes)",
            set.count(),
            set.symbolic_size()
        ),
    }

    if args.markings {
        if let Reachable::Symbolic(_, set) = &reachable {
            println!("Formula: {}", set.to_dnf_string());
        }
        for marking in reachable.markings() {
            println!("{marking}");
        }
    }

    if args.deadlocks {
        let deadlocks: Vec<Marking> = match &reachable {
            Reachable::Explicit(set) => explicit_deadlocks(&net, set, rule).into_iter().collect(),
            Reachable::Symbolic(encoding, set) => {
                symbolic_deadlocks(encoding, set).markings().collect()
            }
        };
        println!("Deadlocks: {}", deadlocks.len());
        for marking in deadlocks {
            println!("{marking}");
        }
    }

    if let Some(objective) = objective {
        let markings = reachable.markings();
        let optimum = if args.minimize {
            objective.minimize(&markings)
        } else {
            objective.maximize(&markings)
        };
        match optimum {
            Some(result) => println!("Optimum: {result}"),
            None => println!("Optimum: no reachable marking"),
        }
    }
}
