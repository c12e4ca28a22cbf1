use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;
use log4rs::append::console::ConsoleAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use projectile_simulation::*;

#[derive(Parser)]
#[command(name = "bounce_sim")]
#[command(about = "Projectile flight with drag and ground bounces", long_about = None)]
struct Cli {
    /// Initial speed (m/s)
    #[arg(short = 'v', long, default_value_t = DEFAULT_LAUNCH_SPEED)]
    velocity: f64,

    /// Launch angle (degrees)
    #[arg(short = 'a', long, default_value_t = DEFAULT_LAUNCH_ANGLE)]
    angle: f64,

    /// Initial height (m)
    #[arg(long, default_value_t = 0.0)]
    height: f64,

    /// Earth, Moon, Mars, Jupiter or Gravity-Less
    #[arg(short = 'p', long, default_value = "Earth")]
    planet: Planet,

    /// Vacuum, Air or Water
    #[arg(short = 'm', long, default_value = "Air")]
    medium: Medium,

    /// Ignore the medium's resistance
    #[arg(long)]
    no_drag: bool,

    /// Fraction of vertical speed kept per bounce
    #[arg(long, default_value_t = DEFAULT_RESTITUTION)]
    restitution: f64,

    /// Fraction of horizontal speed lost per bounce
    #[arg(long, default_value_t = DEFAULT_GROUND_FRICTION)]
    friction: f64,

    /// Time step (s)
    #[arg(long, default_value_t = DEFAULT_TIME_STEP)]
    dt: f64,

    #[arg(long, default_value_t = DEFAULT_MAX_BOUNCES)]
    max_bounces: u32,

    /// Write the drag run's telemetry as CSV
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Scenario store file
    #[arg(long, default_value = "scenarios.json")]
    store: PathBuf,

    /// Run a saved scenario instead of the launch flags
    #[arg(long)]
    load: Option<String>,

    /// Save the launch flags under this name before running
    #[arg(long)]
    save_as: Option<String>,

    /// List saved scenarios and exit
    #[arg(long)]
    list: bool,

    #[arg(long)]
    verbose: bool,
}

impl Cli {
    fn scenario(&self) -> Scenario {
        Scenario {
            v0: self.velocity,
            angle: self.angle,
            h0: self.height,
            planet: self.planet,
            medium: self.medium,
            air_res: !self.no_drag,
            restitution: self.restitution,
            ground_friction: self.friction,
        }
    }
}

fn init_logging(verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let stdout = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new("{h({l})} {m}{n}")))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout)))
        .build(Root::builder().appender("stdout").build(level))?;
    log4rs::init_config(config)?;
    Ok(())
}

fn report(label: &str, result: &SimulationResult) {
    println!("--- {} ---", label);
    println!("Termination: {}", result.termination);
    println!("Bounces: {}", result.bounces);
    println!("{}", result.telemetry.summary());
    println!();
}

fn run(cli: &Cli) -> Result<(), SimulationError> {
    let store = ScenarioStore::new(&cli.store);

    if cli.list {
        for name in store.names()? {
            println!("{}", name);
        }
        return Ok(());
    }

    let scenario = match &cli.load {
        Some(name) => store.get(name)?,
        None => cli.scenario(),
    };

    if let Some(name) = &cli.save_as {
        store.save(name, &scenario)?;
    }

    let config = SimulationConfig {
        dt: cli.dt,
        max_bounces: cli.max_bounces,
        ..scenario.to_config()
    };

    let with_drag = simulate(&config)?;
    let without_drag = simulate(&config.without_drag())?;

    println!(
        "{} m/s at {}° from {} m on {} through {}",
        scenario.v0, scenario.angle, scenario.h0, scenario.planet, scenario.medium
    );
    println!();
    report("With Medium Resistance", &with_drag);
    report("No Medium Resistance", &without_drag);

    if !with_drag.termination.is_physical() {
        log::warn!("Drag run did not settle; results are cut off at the time ceiling");
    }

    if let Some(path) = &cli.csv {
        write_csv_file(path, &with_drag.telemetry)?;
    }

    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    if let Err(e) = run(&cli) {
        log::error!("{}", e);
        return Err(e.into());
    }

    Ok(())
}
