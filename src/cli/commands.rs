//! CLI command implementations

use anyhow::{Context, Result};
use log::info;
use std::io::Write;
use std::path::Path;
use std::time::Instant;

use crate::dawg::build_dawg;
use crate::lexicon::{read_words, LexiconOptions};
use crate::packed::{encode, PackedDawg};

use super::args::{lexicon_options, Commands};

/// Execute a CLI command, writing its report to `out`
pub fn execute(command: Commands, out: &mut impl Write) -> Result<()> {
    match command {
        Commands::Build {
            input,
            output,
            minimum,
            maximum,
        } => cmd_build(&input, output.as_deref(), &lexicon_options(minimum, maximum), out),
        Commands::Lookup { file, words } => cmd_lookup(&file, &words, out),
        Commands::Dump { file } => cmd_dump(&file, out),
    }
}

/// Prepare, build and optionally pack a word list
pub fn cmd_build(
    input: &Path,
    output: Option<&Path>,
    options: &LexiconOptions,
    out: &mut impl Write,
) -> Result<()> {
    let words = read_words(input, options)
        .with_context(|| format!("Failed to read word list {}", input.display()))?;
    info!("{} words selected from {}", words.len(), input.display());

    let start = Instant::now();
    let dawg = build_dawg(&words).context("Word list is not strictly ascending")?;
    writeln!(out, "DAWG creation took {:.3} s", start.elapsed().as_secs_f64())?;

    let stats = dawg.stats();
    info!("{stats}");
    writeln!(
        out,
        "Read {} words into {} nodes and {} edges",
        stats.words, stats.nodes, stats.edges
    )?;

    if let Some(path) = output {
        let encoded = encode(&dawg).context("Failed to encode DAWG")?;
        encoded
            .write_file(path)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        writeln!(
            out,
            "{} is {} bytes ({} byte words)",
            path.display(),
            encoded.byte_len(),
            encoded.byte_width().bytes()
        )?;
    }
    Ok(())
}

fn open(file: &Path) -> Result<PackedDawg> {
    PackedDawg::open(file).with_context(|| format!("Failed to load packed DAWG {}", file.display()))
}

/// Report membership of each word as `word? 1` or `word? 0`
pub fn cmd_lookup(file: &Path, words: &[String], out: &mut impl Write) -> Result<()> {
    let dawg = open(file)?;
    for word in words {
        writeln!(out, "{word}? {}", u8::from(dawg.contains(word)))?;
    }
    Ok(())
}

/// Print the header, every record and the trailer counts
pub fn cmd_dump(file: &Path, out: &mut impl Write) -> Result<()> {
    let dawg = open(file)?;
    let header = dawg.header();
    writeln!(
        out,
        "header: {} byte words, {} slots",
        header.byte_width.bytes(),
        header.slot_count
    )?;
    for (index, record) in dawg.records().iter().enumerate().skip(1) {
        writeln!(out, "{index:>8}: {record}")?;
    }
    writeln!(out, "words: {}, nodes: {}", dawg.word_count(), dawg.node_count())?;
    Ok(())
}
