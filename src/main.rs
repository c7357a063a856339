//! Runs the heapsort demonstration and the operation-count experiment
//!
//! Diagnostics go to stderr and are filtered with `RUST_LOG`
//! (default `counted_heapsort=info`).

use counted_heapsort::experiment::{run_complexity_experiment, run_demo, ExperimentConfig};
use counted_heapsort::report::{ComplexityTable, Conclusion};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("counted_heapsort=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = ExperimentConfig::default();
    let mut rng = config.rng();

    let demo = run_demo(&config, &mut rng)?;
    println!("{}", demo);
    println!();

    let rows = run_complexity_experiment(&config, &mut rng)?;
    println!("Heapsort operation count vs. array size ({} counting):", config.policy);
    println!();
    print!("{}", ComplexityTable::new(&rows));
    println!();

    if let Some(conclusion) = Conclusion::from_rows(&rows) {
        println!("{}", conclusion);
    }

    Ok(())
}
