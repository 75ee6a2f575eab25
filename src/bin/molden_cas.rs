use anyhow::Result;
use qcslice::arguments::{ActiveSpaceArgs, ClapApp};
use qcslice::console;
use qcslice::io::molden::ActiveSpace;
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
    let matches = ClapApp::ActiveSpace.get().get_matches();
    let args = ActiveSpaceArgs::new(&matches);
    let active_space = ActiveSpace { boundary: args.boundary };
    active_space.run(Path::new(&args.file))?;
    console::print_done(&active_space.success_message(&args.file));
    Ok(())
}
