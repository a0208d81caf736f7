//! gff-gene-filter - Streaming filter for GFF annotations by gene name
//!
//! This library keeps the records of a GFF annotation that belong to a
//! list of genes, in a single forward pass over the file.
//!
//! # Key Features
//!
//! - **True streaming**: Processes files line-by-line; only the whitelist is held in memory
//! - **Transparent decompression**: Plain, gzip and bzip2 inputs detected by content
//! - **Hierarchy expansion**: Matched records add their own ID to the whitelist
//! - **Verbatim output**: Header and matching lines are copied byte for byte
//! - **Completeness report**: Warns about parents outside the whitelist and genes never found
//!
//! # Examples
//!
//! ```no_run
//! use gff_gene_filter::{filter_gff_streaming, open_ro, GeneList, ReadMode};
//! use std::io;
//!
//! let genes = GeneList::from_path("genes.txt").unwrap();
//! let input = open_ro("annotation.gff3.gz", ReadMode::Text).unwrap();
//! let summary = filter_gff_streaming(input, &mut io::stdout(), &mut io::stderr(), &genes).unwrap();
//! println!("{} records kept", summary.stats.records_emitted);
//! ```
//!
//! Filtering in memory:
//!
//! ```
//! use gff_gene_filter::{filter_gff_streaming, GeneList};
//!
//! let genes: GeneList = ["BRCA1"].into_iter().collect();
//! let gff = "##gff-version 3\n\
//! chr17\t.\tgene\t1\t100\t.\t-\t.\tID=gene-BRCA1;gene=BRCA1\n\
//! chr17\t.\tgene\t200\t300\t.\t+\t.\tID=gene-TP53;gene=TP53\n";
//!
//! let mut output = Vec::new();
//! let mut warnings = Vec::new();
//! filter_gff_streaming(gff.as_bytes(), &mut output, &mut warnings, &genes).unwrap();
//!
//! let output = String::from_utf8(output).unwrap();
//! assert!(output.contains("gene-BRCA1"));
//! assert!(!output.contains("gene-TP53"));
//! ```

pub mod compression;
pub mod error;
pub mod filter;
pub mod parser;
pub mod whitelist;

pub use compression::{open_reader, open_ro, Compression, ReadMode};
pub use error::{FilterError, Result};
pub use filter::{filter_gff_streaming, FilterStats, FilterSummary, GffFilter};
pub use parser::{Attributes, GffRecord};
pub use whitelist::{GeneList, Whitelist};
