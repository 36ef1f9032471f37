use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use tracing::{debug, info};

use crate::error::CorpusError;
use crate::{FeatureValue, Instance, Label};

// Rows with fewer fields than this are not instances and get skipped
const MIN_FIELDS: usize = 3;

// A loaded corpus: attribute names from the header plus one instance per data row
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    pub attributes: Vec<String>,
    pub instances: Vec<Instance>,
}

// Load a tab-separated corpus from disk.
// The expected format is:
// - A header line with the attribute names
// - One instance per line: feature values followed by the class, all integers
// - Lines with fewer than 3 fields are ignored
pub fn load_corpus(path: impl AsRef<Path>) -> Result<Corpus, CorpusError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| CorpusError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let corpus = read_corpus(file)?;
    info!(
        path = %path.display(),
        instances = corpus.instances.len(),
        attributes = corpus.attributes.len(),
        "loaded corpus"
    );
    Ok(corpus)
}

// Parse a corpus from any reader, see load_corpus for the format
pub fn read_corpus(reader: impl Read) -> Result<Corpus, CorpusError> {
    let mut reader = BufReader::new(reader);

    // The first physical line is always the header, even when it is blank
    let mut header = String::new();
    reader.read_line(&mut header).map_err(CorpusError::Header)?;
    let attributes = match header.trim() {
        "" => Vec::new(),
        header => header.split('\t').map(|name| name.trim().to_owned()).collect(),
    };

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .quoting(false)
        .from_reader(reader);

    let mut instances = Vec::new();
    for result in reader.records() {
        let record = result?;
        // Positions count from the line after the header
        let line = record.position().map_or(0, |position| position.line() + 1);

        // Surrounding empty fields come from stray tabs at either end of the line
        let fields: Vec<&str> = record.iter().collect();
        let start = fields.iter().position(|field| !field.is_empty());
        let end = fields.iter().rposition(|field| !field.is_empty());
        let fields = match (start, end) {
            (Some(start), Some(end)) => &fields[start..=end],
            _ => &fields[..0],
        };
        if fields.len() < MIN_FIELDS {
            debug!(line, fields = fields.len(), "skipping short line");
            continue;
        }

        let Some((class, values)) = fields.split_last() else {
            continue;
        };
        let values = values
            .iter()
            .map(|value| parse_integer::<FeatureValue>(value, line))
            .collect::<Result<Vec<_>, _>>()?;
        let class = parse_integer::<Label>(class, line)?;
        instances.push(Instance::new(values, class, instances.len()));
    }

    Ok(Corpus {
        attributes,
        instances,
    })
}

fn parse_integer<T: std::str::FromStr>(value: &str, line: u64) -> Result<T, CorpusError> {
    value.parse().map_err(|_| CorpusError::InvalidInteger {
        line,
        value: value.to_owned(),
    })
}
