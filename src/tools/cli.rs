use clap::Parser;
use log::{info, LevelFilter};

/// Verbosity of user information
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Errors,
    Warnings,
    Info,
    Debug,
    Trace,
}

impl Verbosity {
    /// Map a `-v` level onto a verbosity. Anything past 5 is trace.
    pub fn from_level(level: u8) -> Self {
        match level {
            0 => Verbosity::Quiet,
            1 => Verbosity::Errors,
            2 => Verbosity::Warnings,
            3 => Verbosity::Info,
            4 => Verbosity::Debug,
            _ => Verbosity::Trace,
        }
    }

    pub fn level_filter(self) -> LevelFilter {
        match self {
            Verbosity::Quiet => LevelFilter::Off,
            Verbosity::Errors => LevelFilter::Error,
            Verbosity::Warnings => LevelFilter::Warn,
            Verbosity::Info => LevelFilter::Info,
            Verbosity::Debug => LevelFilter::Debug,
            Verbosity::Trace => LevelFilter::Trace,
        }
    }
}

/// Driver settings, filled from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffOpts {
    /// File to read for input. Reads stdin when absent.
    pub file: Option<String>,
    /// Encode with the canonical codes (the default) or the raw tree codes
    pub canonical: bool,
    /// How many leading bytes of the encoding to show
    pub show_bytes: usize,
    /// Also show the shown bytes as hex
    pub hex: bool,
    /// Verbosity of user information
    pub verbose: Verbosity,
}

impl HuffOpts {
    pub fn new() -> Self {
        Self {
            file: None,
            canonical: true,
            show_bytes: 8,
            hex: false,
            verbose: Verbosity::Info,
        }
    }
}

impl Default for HuffOpts {
    fn default() -> Self {
        Self::new()
    }
}

/// Command Line Interpretation - uses external CLAP crate.
#[derive(Parser, Debug)]
#[clap(
    version,
    about = "Canonical Huffman encoder",
    long_about = "
    Counts the byte frequencies of the input, builds a deterministic Huffman tree,
    renumbers the codes canonically and encodes the input with them. Prints the code
    table, the leading bytes of the encoding and the compression statistics."
)]
pub struct Args {
    /// Filename of file to process (stdin when omitted)
    #[clap()]
    filename: Option<String>,

    /// Encode with the raw tree codes instead of the canonical codes
    #[clap(long = "raw")]
    raw: bool,

    /// Number of leading bytes of the encoding to print
    #[clap(short = 'b', long = "bytes", default_value_t = 8)]
    bytes: usize,

    /// Also print the leading bytes as hex
    #[clap(long = "hex")]
    hex: bool,

    /// Sets verbosity. -v0 is silent, -v5 is chatty
    #[clap(short = 'v', default_value_t = 3)]
    v: u8,
}

/// Parse the process arguments into options and set the log level.
pub fn huffopts_init() -> HuffOpts {
    opts_from_args(Args::parse())
}

/// Put command line information from CLAP into our internal structure.
pub fn opts_from_args(args: Args) -> HuffOpts {
    let opts = HuffOpts {
        file: args.filename,
        canonical: !args.raw,
        show_bytes: args.bytes,
        hex: args.hex,
        verbose: Verbosity::from_level(args.v),
    };

    // Set the log level
    log::set_max_level(opts.verbose.level_filter());

    info!("Verbosity set to {}", log::max_level());
    match &opts.file {
        Some(s) => info!("Getting input from the file {}", s),
        None => info!("Getting input from stdin"),
    }
    if !opts.canonical {
        info!("Encoding with raw tree codes")
    };
    opts
}
