//! Hog Binary
//!
//! Runs the configured strategy experiments when asked to.
//!
//! Options: --run-experiments (-r)
//! Environment: HOG_EXPERIMENTS, HOG_SAMPLES, HOG_SEED

use clap::Parser;
use hog::*;

#[derive(Parser, Debug)]
#[command(name = "hog", about = "Play Hog")]
struct Args {
    /// Runs strategy experiments
    #[arg(short = 'r', long = "run-experiments")]
    run_experiments: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    if args.run_experiments {
        log()?;
        for report in Experiments::from_env()?.run()? {
            println!("{}", report);
        }
    }
    Ok(())
}
