use crate::error::{FilterError, Result};

/// Number of tab-separated columns in a GFF data line
pub const GFF_COLUMNS: usize = 9;

/// Parsed attribute column (`key=value;key=value`)
///
/// Keys and values come from the lower-cased column. A repeated key keeps
/// its last value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    pairs: Vec<(String, String)>,
}

impl Attributes {
    /// Parse the 9th column; every `;`-separated token must contain `=`
    pub fn parse(column: &str, line_number: usize) -> Result<Self> {
        let column = column.to_lowercase();
        let mut pairs: Vec<(String, String)> = Vec::new();

        for token in column.split(';') {
            let (key, value) = token.split_once('=').ok_or_else(|| {
                FilterError::malformed(
                    line_number,
                    format!("attribute '{}' is not a key=value pair", token),
                )
            })?;

            match pairs.iter_mut().find(|(existing, _)| existing == key) {
                Some(pair) => pair.1 = value.to_string(),
                None => pairs.push((key.to_string(), value.to_string())),
            }
        }

        Ok(Attributes { pairs })
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value.as_str())
    }
}

/// A single GFF data line
///
/// Columns borrow from the original line; only the attributes are copied
/// (lower-cased).
#[derive(Debug, Clone)]
pub struct GffRecord<'a> {
    pub line_number: usize,
    pub fields: Vec<&'a str>,
    pub props: Attributes,
}

impl<'a> GffRecord<'a> {
    /// Parse a data line
    ///
    /// The format is:
    /// ```text
    /// seqid source type start end score strand phase key=value[;key=value]*
    /// ```
    ///
    /// Only trailing `\r`/`\n` are stripped; columns past the ninth are
    /// ignored.
    pub fn parse(line: &'a str, line_number: usize) -> Result<Self> {
        let content = line.trim_end_matches(&['\r', '\n'][..]);
        let fields: Vec<&str> = content.split('\t').collect();

        if fields.len() < GFF_COLUMNS {
            return Err(FilterError::malformed(
                line_number,
                format!(
                    "expected {} tab-separated columns, found {}",
                    GFF_COLUMNS,
                    fields.len()
                ),
            ));
        }

        let props = Attributes::parse(fields[GFF_COLUMNS - 1], line_number)?;

        Ok(GffRecord {
            line_number,
            fields,
            props,
        })
    }

    /// Third column (`gene`, `mRNA`, `exon`, ...), original case
    pub fn feature_type(&self) -> &'a str {
        self.fields[2]
    }

    pub fn gene(&self) -> Option<&str> {
        self.props.get("gene")
    }

    pub fn id(&self) -> Option<&str> {
        self.props.get("id")
    }

    pub fn parent(&self) -> Option<&str> {
        self.props.get("parent")
    }
}
