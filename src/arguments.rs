use crate::errors::ArgumentError;
use crate::filter::{Boundary, DEFAULT_NTO_THRESHOLD};
use crate::io::gaussian::{Orientation, Step};
use clap::{crate_authors, crate_version, Arg, ArgMatches, Command};

/// Create a container for dealing with clap and being able to test arg parsing
pub enum ClapApp {
    Geometry,
    ActiveSpace,
    Nto,
}

const INCLUDE_LAST_HELP: &str =
"By default orbitals are read between consecutive \"Sym=\" lines, so the last
orbital of the file is never written. This flag lets the last orbital run to
the end of the file so it is filtered like the others.";

impl ClapApp {
    /// Create and return the clap::Command
    pub fn get(&self) -> Command<'static> {
        match self {
            Self::Geometry => Command::new("g09_geom")
                .author(crate_authors!())
                .version(crate_version!())
                .about("Exports a geometry from a Gaussian optimization log to an XYZ file.")
                .arg(Arg::new("file")
                    .required(true)
                    .index(1)
                    .value_name("LOG_FILE")
                    .help("Gaussian output file (usually .log extension)."))
                .arg(Arg::new("step")
                    .short('n')
                    .takes_value(true)
                    .allow_hyphen_values(true)
                    .default_value("opt")
                    .value_name("CYCLE")
                    .help("Number of the optimization cycle.")
                    .long_help(
"Which geometry to export. \"opt\" (default) takes the optimized geometry, the
one printed after \"Stationary point found\". A positive integer N takes the
geometry of cycle N, counting from 0. A negative integer counts back from the
last cycle, -1 being the last one."))
                .arg(Arg::new("format")
                    .short('f')
                    .takes_value(true)
                    .possible_values(["input", "standard", "zmat"])
                    .default_value("input")
                    .help("Coordinates input format.")
                    .long_help(
"The orientation table to read the coordinates from: \"Input orientation:\",
\"Standard orientation:\" or \"Z-Matrix orientation:\".")),
            Self::ActiveSpace => Command::new("molden_cas")
                .author(crate_authors!())
                .version(crate_version!())
                .about("Writes a Molden file containing only the active space orbitals of a CAS calculation.")
                .arg(Arg::new("file")
                    .required(true)
                    .index(1)
                    .value_name("MOLDEN_FILENAME")
                    .help("Molden CAS file (usually .molden extension)."))
                .arg(Arg::new("include last")
                    .long("include-last")
                    .takes_value(false)
                    .help("Also filter the last orbital of the file.")
                    .long_help(INCLUDE_LAST_HELP)),
            Self::Nto => Command::new("orca_nto")
                .author(crate_authors!())
                .version(crate_version!())
                .about("Cleans an ORCA Molden file of natural transition orbitals below an occupation threshold.")
                .arg(Arg::new("file")
                    .required(true)
                    .index(1)
                    .value_name("MOLDEN_NTO_FILE")
                    .help("Molden NTO file (usually .molden.input extension)."))
                .arg(Arg::new("occupation threshold")
                    .long("occ")
                    .takes_value(true)
                    .allow_hyphen_values(true)
                    .default_value("0.01")
                    .value_name("THRESHOLD")
                    .help("NTO occupation threshold.")
                    .long_help(
"Orbitals with an occupation at or below the threshold are removed. Can also
be given in the single dash form -occ."))
                .arg(Arg::new("include last")
                    .long("include-last")
                    .takes_value(false)
                    .help("Also filter the last orbital of the file.")
                    .long_help(INCLUDE_LAST_HELP)),
        }
    }
}

/// Rewrites the single dash "-occ" option into the "--occ" form clap reads.
pub fn normalize_args<I>(args: I) -> Vec<String>
    where I: IntoIterator<Item = String>
{
    args.into_iter()
        .map(|arg| {
            if arg == "-occ" || arg.starts_with("-occ=") {
                format!("-{}", arg)
            } else {
                arg
            }
        })
        .collect()
}

fn file(arguments: &ArgMatches) -> String {
    match arguments.value_of("file") {
        Some(f) => String::from(f),
        None => String::new(),
    }
}

fn boundary(arguments: &ArgMatches) -> Boundary {
    if arguments.is_present("include last") {
        Boundary::ToEnd
    } else {
        Boundary::Paired
    }
}

/// Holds the arguments of the geometry extractor
pub struct GeometryArgs {
    pub file: String,
    pub step: Step,
    pub orientation: Orientation,
}

impl GeometryArgs {
    /// Initialises the structure from the command-line arguments.
    pub fn new(arguments: &ArgMatches) -> Result<Self, ArgumentError> {
        // safe to unwrap as step has a default value of opt
        let step = match arguments.value_of("step").unwrap() {
            s if s.eq_ignore_ascii_case("opt") => Step::Optimized,
            s => match s.parse::<isize>() {
                Ok(n) => Step::Cycle(n),
                Err(_) => {
                    return Err(ArgumentError::Unparsable(String::from("-n"),
                                                         String::from(s),
                                                         String::from("an integer or \"opt\"")))
                }
            },
        };
        let orientation = arguments.value_of("format")
                                   .and_then(Orientation::from_name)
                                   .unwrap_or(Orientation::Input);
        Ok(Self { file: file(arguments),
                  step,
                  orientation })
    }
}

/// Holds the arguments of the active space filter
pub struct ActiveSpaceArgs {
    pub file: String,
    pub boundary: Boundary,
}

impl ActiveSpaceArgs {
    /// Initialises the structure from the command-line arguments.
    pub fn new(arguments: &ArgMatches) -> Self {
        Self { file: file(arguments),
               boundary: boundary(arguments) }
    }
}

/// Holds the arguments of the NTO cleaner
pub struct NtoArgs {
    pub file: String,
    pub threshold: f64,
    pub boundary: Boundary,
}

impl NtoArgs {
    /// Initialises the structure from the command-line arguments.
    pub fn new(arguments: &ArgMatches) -> Result<Self, ArgumentError> {
        let threshold = match arguments.value_of("occupation threshold") {
            Some(s) => s.parse::<f64>().map_err(|_| {
                           ArgumentError::Unparsable(String::from("-occ"),
                                                     String::from(s),
                                                     String::from("a float"))
                       })?,
            None => DEFAULT_NTO_THRESHOLD,
        };
        Ok(Self { file: file(arguments),
                  threshold,
                  boundary: boundary(arguments) })
    }
}
