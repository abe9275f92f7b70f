// File: src/analysis/reference.rs
use crate::core::types::FrequencyTable;
use crate::error::CipherError;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::debug;

/// Letter frequencies of Russian prose.
const RUSSIAN: [(char, f64); 33] = [
    ('о', 0.1097), ('е', 0.0845), ('а', 0.0801), ('и', 0.0735), ('н', 0.0670),
    ('т', 0.0626), ('с', 0.0547), ('р', 0.0473), ('в', 0.0454), ('л', 0.0440),
    ('к', 0.0349), ('м', 0.0321), ('д', 0.0298), ('п', 0.0281), ('у', 0.0262),
    ('я', 0.0201), ('ы', 0.0190), ('ь', 0.0174), ('г', 0.0170), ('з', 0.0165),
    ('б', 0.0159), ('ч', 0.0144), ('й', 0.0121), ('х', 0.0097), ('ж', 0.0094),
    ('ш', 0.0073), ('ю', 0.0064), ('ц', 0.0048), ('щ', 0.0036), ('э', 0.0032),
    ('ф', 0.0026), ('ъ', 0.0004), ('ё', 0.0004),
];

/// Letter frequencies of English prose.
const ENGLISH: [(char, f64); 26] = [
    ('e', 0.1270), ('t', 0.0906), ('a', 0.0817), ('o', 0.0751), ('i', 0.0697),
    ('n', 0.0675), ('s', 0.0633), ('h', 0.0609), ('r', 0.0599), ('d', 0.0425),
    ('l', 0.0403), ('c', 0.0278), ('u', 0.0276), ('m', 0.0241), ('w', 0.0236),
    ('f', 0.0223), ('g', 0.0202), ('y', 0.0197), ('p', 0.0193), ('b', 0.0149),
    ('v', 0.0098), ('k', 0.0077), ('j', 0.0015), ('x', 0.0015), ('q', 0.0010),
    ('z', 0.0007),
];

/// Language whose letter statistics drive frequency analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Russian,
    English,
}

pub fn russian() -> FrequencyTable {
    RUSSIAN.into_iter().collect()
}

pub fn english() -> FrequencyTable {
    ENGLISH.into_iter().collect()
}

pub fn for_language(language: Language) -> FrequencyTable {
    match language {
        Language::Russian => russian(),
        Language::English => english(),
    }
}

/// Reads a table from a JSON object such as `{"о": 0.11, "е": 0.085}`.
pub fn load_table(path: &Path) -> Result<FrequencyTable, CipherError> {
    let reader = BufReader::new(File::open(path)?);
    let table: FrequencyTable = serde_json::from_reader(reader)?;
    if table.is_empty() {
        return Err(CipherError::EmptyFrequencyTable(path.display().to_string()));
    }
    debug!(path = %path.display(), letters = table.len(), "loaded frequency table");
    Ok(table)
}
