use std::path::Path;

use anyhow::Result;
use bench_graphs::chart::ChartOptions;
use bench_graphs::pipeline;

const INPUT_FILE: &str = "resultats.csv";
const OUTPUT_DIR: &str = "images";

fn main() -> Result<()> {
    env_logger::init();

    pipeline::run(
        Path::new(INPUT_FILE),
        Path::new(OUTPUT_DIR),
        &ChartOptions::default(),
        std::io::stdout().lock(),
    )?;

    println!("Les graphiques ont été sauvegardés dans le dossier '{OUTPUT_DIR}'.");
    Ok(())
}
