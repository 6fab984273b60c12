mod chart;
mod composer;
mod error;
mod formulator;
mod llm;
mod materials;
mod normalize;
mod prompt;
mod properties;
mod report;
mod weights;

use crate::formulator::{Formulator, FormulatorConfig};
use std::{error::Error, fs, path::Path};

const CONFIG_FILE: &str = "data/config.yaml";

fn write(path: &Path, contents: impl AsRef<[u8]>) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, contents)?;
    log::info!("Wrote {}", path.display());
    Ok(())
}

fn run() -> Result<(), Box<dyn Error>> {
    let config = serde_yaml::from_str::<FormulatorConfig>(&fs::read_to_string(CONFIG_FILE)?)?;

    let mut formulator = Formulator::try_from(&config)?;
    let report = formulator.formulate(&config.preferences);

    println!("{}", report.summary());

    let output = &config.output;
    write(&output.report, serde_yaml::to_string(&report)?)?;
    write(&output.csv, report.composition.to_csv())?;
    write(&output.chart, chart::render_svg(&report.composition))?;
    if let Some(summary) = &output.summary {
        write(summary, report.summary())?;
    }

    Ok(())
}

fn main() {
    env_logger::init();
    run().expect("Failed to generate the material formula");
}
