//Enable more cargo lint tests
#![warn(rust_2018_idioms)]
#![warn(clippy::disallowed_types)]

use std::io::Read;

use canon_huff::error::Result;
use canon_huff::huffman_coding::session::HuffmanSession;
use canon_huff::tools::cli::huffopts_init;
use canon_huff::tools::report::{code_table_text, grouped_binary, CompressionStats};

use log::{info, LevelFilter};
use simplelog::{Config, TermLogger, TerminalMode};

fn main() -> Result<()> {
    // Available log levels are Error, Warn, Info, Debug, Trace. The cli narrows this down.
    if TermLogger::init(
        LevelFilter::Trace,
        Config::default(),
        TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )
    .is_err()
    {
        eprintln!("Logger was already initialised");
    }

    let opts = huffopts_init();

    //----- Get the input
    let text = match &opts.file {
        Some(path) => std::fs::read(path)?,
        None => {
            let mut buf = vec![];
            std::io::stdin().read_to_end(&mut buf)?;
            buf
        }
    };
    info!("Read {} bytes", text.len());

    //----- Run every stage
    let mut session = HuffmanSession::new();
    session.count_frequencies(&text)?;
    session.build_tree()?;
    let raw_table = session.generate_codes()?.clone();
    let canonical_table = session.generate_canonical_codes()?.clone();
    let encoded = session.encode(&text, opts.canonical)?;

    //----- Report
    if opts.canonical {
        println!("{}", code_table_text(&canonical_table, "Canonical Huffman Codes"));
    } else {
        println!("{}", code_table_text(&raw_table, "Huffman Codes"));
    }

    println!(
        "First {} bytes of encoded passage (binary):\n{}",
        opts.show_bytes,
        grouped_binary(&encoded, opts.show_bytes)
    );
    if opts.hex {
        println!(
            "First {} bytes of encoded passage (hex):\n{}",
            opts.show_bytes,
            encoded.to_hex_text_delimited(Some(opts.show_bytes), " ")
        );
    }
    println!("\n{}", CompressionStats::new(&encoded, text.len()));

    info!("Done.");
    Ok(())
}
