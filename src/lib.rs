//! Small, single-shot converters that slice the useful parts out of quantum
//! chemistry output files and write them in simpler formats.
//!
//! ### Binaries
//! - `g09_geom`: exports a geometry of a Gaussian optimization log to an XYZ
//!   file.
//! - `molden_cas`: keeps only the active space orbitals of a CAS Molden file.
//! - `orca_nto`: removes weakly occupied natural transition orbitals from an
//!   ORCA Molden file.
//!
//! ## Installing the binaries
//! ```sh
//! $ cargo install --path .
//! ```
//!
//! ## Usage
//! ### g09_geom
//! By default the optimized geometry, the orientation table printed after
//! "Stationary point found", is exported.
//! ```sh
//! $ g09_geom water.log
//! ```
//! Any cycle can be picked with -n, counting from 0, or back from the last
//! cycle with a negative number. The table read is chosen with -f from
//! input (default), standard or zmat.
//! ```sh
//! $ g09_geom water.log -n -1 -f standard
//! ```
//! The output is written next to the log as `water.<cycle>.xyz`.
//!
//! ### molden_cas
//! ```sh
//! $ molden_cas casscf.molden
//! ```
//! Writes `cas.casscf.molden` with the header and only the orbitals whose
//! occupation lies strictly between 0.000001 and 2.
//!
//! ### orca_nto
//! ```sh
//! $ orca_nto s1.nto.molden.input -occ 0.05
//! ```
//! Writes `nto.s1.nto.molden.input` with only the orbitals whose occupation
//! is above the threshold (default 0.01).
//!
//! Both orbital filters read orbitals between consecutive "Sym=" lines, so
//! the final orbital of a file is not written unless --include-last is
//! passed.
//!
//! ## Logging
//! Warnings are printed to stderr. Set `RUST_LOG=debug` to trace which
//! markers were found and which lines were selected.
//! ## License
//! MIT

/// For parsing command-line arguments.
pub mod arguments;
/// Coloured status lines and logger setup for the binaries.
pub mod console;
/// Atomic number to element symbol lookup.
pub mod elements;
/// Provides custom errors types.
pub mod errors;
/// Splits a file into blocks on a delimiter and keeps the blocks whose
/// numeric field passes a [Predicate](filter::Predicate).
pub mod filter;
/// Handles the File I/O for input and output files.
/// Provides an [Extractor](io::Extractor) trait implemented by each
/// conversion.
pub mod io;
/// Splits rows into named fields and writes chosen fields back out.
pub mod record;
/// Finds marker lines and resolves which occurrence of a marker to use.
pub mod segment;
