use crate::error::{FilterError, Result};
use crate::parser::GffRecord;
use crate::whitelist::{GeneList, Whitelist};
use rustc_hash::FxHashSet;
use std::io::{BufRead, Write};

/// Counters collected during a filter pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterStats {
    /// Leading comment lines copied to the output
    pub header_lines: usize,
    /// Data lines parsed
    pub records_read: usize,
    /// Data lines copied to the output
    pub records_emitted: usize,
    /// "Parent not whitelisted" warnings written
    pub parent_warnings: usize,
}

/// Result of a completed pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSummary {
    pub stats: FilterStats,
    /// Gene list entries never seen as a `gene` or `id` of an emitted record, sorted
    pub missing: Vec<String>,
}

/// State of a single pass over a GFF stream
///
/// The whitelist grows as records match: each matched record registers its
/// own ID, so any later record whose `gene` or `ID` equals it matches too.
/// `Parent` is only consulted for warnings.
pub struct GffFilter<'g> {
    genes: &'g GeneList,
    whitelist: Whitelist,
    found: FxHashSet<String>,
    // `None` is pre-seeded so records without a parent never warn
    warned: FxHashSet<Option<String>>,
    in_header: bool,
    line_number: usize,
    stats: FilterStats,
}

impl<'g> GffFilter<'g> {
    pub fn new(genes: &'g GeneList) -> Self {
        let mut warned = FxHashSet::default();
        warned.insert(None);

        GffFilter {
            genes,
            whitelist: Whitelist::new(genes),
            found: FxHashSet::default(),
            warned,
            in_header: true,
            line_number: 0,
            stats: FilterStats::default(),
        }
    }

    /// Process one line, including its terminator
    ///
    /// Comment lines are copied only while still in the leading header; the
    /// first data line ends the header for good.
    pub fn process_line<W: Write, E: Write>(
        &mut self,
        line: &str,
        output: &mut W,
        warnings: &mut E,
    ) -> Result<()> {
        self.line_number += 1;

        if line.starts_with('#') {
            if self.in_header {
                output.write_all(line.as_bytes())?;
                self.stats.header_lines += 1;
            }
            return Ok(());
        }

        self.in_header = false;
        self.stats.records_read += 1;

        let record = GffRecord::parse(line, self.line_number)?;
        if !self.is_match(&record) {
            return Ok(());
        }

        let id = record.id().ok_or_else(|| {
            FilterError::malformed(
                record.line_number,
                "record matches the whitelist but has no ID attribute",
            )
        })?;

        if self.whitelist.insert(id) {
            log::debug!(
                "Whitelisted {} '{}' (line {})",
                record.feature_type(),
                id,
                record.line_number
            );
        }

        for name in [record.gene(), record.id()].into_iter().flatten() {
            if !self.found.contains(name) {
                self.found.insert(name.to_string());
            }
        }

        output.write_all(line.as_bytes())?;
        self.stats.records_emitted += 1;

        self.check_parent(&record, id, warnings)
    }

    /// Write the missing-gene report and return the summary
    pub fn finish<E: Write>(self, warnings: &mut E) -> Result<FilterSummary> {
        let mut missing: Vec<String> = self
            .genes
            .iter()
            .filter(|name| !self.found.contains(*name))
            .map(str::to_string)
            .collect();
        missing.sort_unstable();

        for name in &missing {
            writeln!(warnings, "WARNING: {} not found in GFF!", name)?;
        }

        Ok(FilterSummary {
            stats: self.stats,
            missing,
        })
    }

    pub fn stats(&self) -> &FilterStats {
        &self.stats
    }

    #[inline]
    fn is_match(&self, record: &GffRecord) -> bool {
        [record.gene(), record.id()]
            .into_iter()
            .flatten()
            .any(|name| self.whitelist.contains(name))
    }

    /// Warn once per parent that is not itself whitelisted
    fn check_parent<E: Write>(
        &mut self,
        record: &GffRecord,
        id: &str,
        warnings: &mut E,
    ) -> Result<()> {
        let parent = record.parent();
        if parent.map_or(false, |p| self.whitelist.contains(p)) {
            return Ok(());
        }

        // An absent parent stops here: `None` is seeded into `warned`
        let key = parent.map(str::to_string);
        if self.warned.contains(&key) {
            return Ok(());
        }

        writeln!(
            warnings,
            "WARNING: Parent {} of {} not whitelisted",
            quote(parent.unwrap_or_default()),
            quote(id)
        )?;
        self.warned.insert(key);
        self.stats.parent_warnings += 1;

        Ok(())
    }
}

/// Stream a GFF file, keeping only records that belong to whitelisted genes
///
/// This function:
/// - Reads input line by line, retaining only the current line
/// - Copies leading `#` header lines; later comment lines are dropped
/// - Copies matching data lines byte for byte, terminators included
/// - Writes parent warnings and the missing-gene report to `warnings`
///
/// Matching is case-insensitive; the copied lines keep their original case.
pub fn filter_gff_streaming<R: BufRead, W: Write, E: Write>(
    mut reader: R,
    output: &mut W,
    warnings: &mut E,
    genes: &GeneList,
) -> Result<FilterSummary> {
    let mut filter = GffFilter::new(genes);
    let mut line = String::new();

    loop {
        line.clear();
        let n = reader.read_line(&mut line)?;
        if n == 0 {
            break; // EOF
        }

        filter.process_line(&line, output, warnings)?;
    }

    filter.finish(warnings)
}

/// Quote a string like Python's `repr` does for printable text
///
/// Single quotes unless the value contains `'` but no `"`. Backslash, the
/// quote, `\n`, `\r` and `\t` are escaped, other control characters become
/// `\xNN`; every other character is written as is.
pub fn quote(value: &str) -> String {
    let delimiter = if value.contains('\'') && !value.contains('"') {
        '"'
    } else {
        '\''
    };

    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push(delimiter);
    for c in value.chars() {
        match c {
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            c if c == delimiter => {
                quoted.push('\\');
                quoted.push(c);
            }
            c if c.is_control() => quoted.push_str(&format!("\\x{:02x}", c as u32)),
            c => quoted.push(c),
        }
    }
    quoted.push(delimiter);
    quoted
}
