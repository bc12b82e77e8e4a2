use std::path::PathBuf;

use clap::{Args, Subcommand};
use seqrec_dtype::ElementType;

use crate::exit::CliResult;
use crate::output::OutputFormat;

pub mod dump;
pub mod pack;
pub mod scan;
pub mod version;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Walk a record file and print each record's offset and length.
    Scan(ScanArgs),
    /// Decode a record file's payloads as a given element type.
    Dump(DumpArgs),
    /// Write records to a new file from values or raw payload files.
    Pack(PackArgs),
    /// Show version information.
    Version(VersionArgs),
}

pub fn run(command: Command, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Scan(args) => scan::run(args, format),
        Command::Dump(args) => dump::run(args, format),
        Command::Pack(args) => pack::run(args),
        Command::Version(args) => version::run(args),
    }
}

#[derive(Args, Debug)]
pub struct ScanArgs {
    /// Record file to scan.
    pub path: PathBuf,
    /// Control word width in bytes (4 or 8).
    #[arg(long, default_value_t = 4)]
    pub control_bytes: usize,
}

#[derive(Args, Debug)]
pub struct DumpArgs {
    /// Record file to decode.
    pub path: PathBuf,
    /// Element type of the payloads (i8..i64, u8..u64, f32, f64).
    #[arg(long = "type", short = 't')]
    pub ty: ElementType,
    /// Control word width in bytes (4 or 8).
    #[arg(long, default_value_t = 4)]
    pub control_bytes: usize,
}

#[derive(Args, Debug)]
pub struct PackArgs {
    /// Output file. Existing contents are truncated.
    pub path: PathBuf,
    /// Values to write as one homogeneous record.
    #[arg(long = "value", short = 'v', conflicts_with = "raw")]
    pub values: Vec<String>,
    /// Element type the values are encoded as.
    #[arg(long = "type", short = 't', default_value = "f64")]
    pub ty: ElementType,
    /// Files whose contents are each written as one raw record.
    #[arg(long, conflicts_with = "values")]
    pub raw: Vec<PathBuf>,
    /// Control word width in bytes (4 or 8).
    #[arg(long, default_value_t = 4)]
    pub control_bytes: usize,
}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show extended build provenance.
    #[arg(long)]
    pub extended: bool,
}
