use anyhow::{Context, Result};
use clap::Parser;
use gff_gene_filter::{filter_gff_streaming, open_reader, open_ro, GeneList, ReadMode};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Keep only the GFF records that belong to a list of genes.
///
/// Matching records (by `gene` or `ID` attribute, case-insensitively) are
/// written unchanged to stdout along with the leading header comments.
/// Warnings about unlisted parents and genes missing from the GFF go to stderr.
#[derive(Parser, Debug)]
#[command(name = "filter-gff", version, about)]
struct Cli {
    /// GFF file to be filtered (plain, gzip or bzip2; - for stdin)
    gff: PathBuf,

    /// Text file containing gene names, one per line
    genes: PathBuf,

    /// Write the filtered GFF here instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    let genes = GeneList::from_path(&cli.genes)
        .with_context(|| format!("failed to read gene list {}", cli.genes.display()))?;
    if genes.is_empty() {
        log::warn!("No gene names in {}; only header lines will be kept", cli.genes.display());
    } else {
        log::info!("Loaded {} genes from {}", genes.len(), cli.genes.display());
    }

    // Open input
    let input = if cli.gff.as_os_str() == "-" {
        open_reader(io::stdin(), ReadMode::Text)?
    } else {
        open_ro(&cli.gff, ReadMode::Text)?
    };
    let mut warnings = io::stderr().lock();

    // Stream and filter
    let summary = if let Some(output_path) = &cli.output {
        let file = File::create(output_path)
            .with_context(|| format!("failed to create {}", output_path.display()))?;
        let mut output = BufWriter::new(file);
        let summary = filter_gff_streaming(input, &mut output, &mut warnings, &genes)
            .with_context(|| format!("failed to filter {}", cli.gff.display()))?;
        output.flush()?;
        log::info!("Written to {}", output_path.display());
        summary
    } else {
        let mut output = BufWriter::new(io::stdout().lock());
        let summary = filter_gff_streaming(input, &mut output, &mut warnings, &genes)
            .with_context(|| format!("failed to filter {}", cli.gff.display()))?;
        output.flush()?;
        summary
    };

    log::info!(
        "Kept {} of {} records ({} header lines, {} parent warnings, {} genes not found)",
        summary.stats.records_emitted,
        summary.stats.records_read,
        summary.stats.header_lines,
        summary.stats.parent_warnings,
        summary.missing.len()
    );

    Ok(())
}
