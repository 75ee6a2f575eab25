use anyhow::{Context, Result};
use qcslice::arguments::{normalize_args, ClapApp, NtoArgs};
use qcslice::console;
use qcslice::io::molden::NtoCleaner;
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
    // clap cannot read the single dash -occ so rewrite it first
    let matches = ClapApp::Nto.get()
                              .get_matches_from(normalize_args(std::env::args()));
    let args = NtoArgs::new(&matches).context("Reading the command line")?;
    let cleaner = NtoCleaner { threshold: args.threshold,
                               boundary: args.boundary };
    cleaner.run(Path::new(&args.file))?;
    console::print_done(&cleaner.success_message(&args.file));
    Ok(())
}
