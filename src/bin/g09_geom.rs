use anyhow::{Context, Result};
use qcslice::arguments::{ClapApp, GeometryArgs};
use qcslice::console;
use qcslice::io::gaussian::Geometry;
use qcslice::io::Extractor;
use std::path::Path;

fn main() {
    console::init_logger();
    if let Err(e) = run() {
        console::print_error(&e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // argument parsing
    let matches = ClapApp::Geometry.get().get_matches();
    let args = GeometryArgs::new(&matches).context("Reading the command line")?;
    let geometry = Geometry { orientation: args.orientation,
                              step: args.step };
    geometry.run(Path::new(&args.file))?;
    console::print_done(&geometry.success_message(&args.file));
    Ok(())
}
