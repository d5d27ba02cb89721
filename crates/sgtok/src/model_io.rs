//! # Model Persistence (`sgtok v1`)
//!
//! UTF-8 text format, exactly these lines in order:
//!
//! ```text
//! sgtok v1
//! <pattern string, may be empty>
//! <N: count of special tokens as decimal integer>
//! <special_name> <special_id>      (repeated N times)
//! <left_id> <right_id>             (repeated once per merge)
//! ```
//!
//! Merge tokens are NOT stored; they are reconstructed as 256, 257,
//! ... in file line order. Line order is load-bearing: any tool that
//! re-serializes or hand-edits the merges section must preserve exact
//! order, or the model is silently corrupted. This is kept for
//! bit-exact compatibility with existing model files.
//!
//! Reading is fail-fast: the whole file parses into a [`ModelData`]
//! value before any tokenizer state changes.

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use crate::{
    errors::{SgResult, SgtokError},
    merges::MergeTable,
    specials::SpecialTokens,
    types::{Pair, TokenType},
};

/// The version header literal of the model format.
pub const MODEL_VERSION: &str = "sgtok v1";

/// Parsed contents of a model file.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelData<T: TokenType> {
    /// The pre-tokenization pattern string (reserved; may be empty).
    pub pattern: String,

    /// The special token table, exactly as listed in the file.
    pub specials: SpecialTokens<T>,

    /// Merge pairs in file order; tokens are reassigned from 256 on
    /// install.
    pub merge_pairs: Vec<Pair<T>>,
}

/// Write a model to a [`Write`] writer.
///
/// This serializes only (pattern, specials, merges); the vocabulary is
/// derived data and is never persisted.
///
/// ## Arguments
/// * `writer` - The target writer.
/// * `pattern` - The pattern string.
/// * `specials` - The special token table.
/// * `merges` - The ordered merge table.
pub fn write_model<T, W>(
    writer: &mut W,
    pattern: &str,
    specials: &SpecialTokens<T>,
    merges: &MergeTable<T>,
) -> SgResult<()>
where
    T: TokenType,
    W: Write,
{
    writeln!(writer, "{MODEL_VERSION}")?;
    writeln!(writer, "{pattern}")?;
    writeln!(writer, "{}", specials.len())?;
    for (name, token) in specials.iter() {
        writeln!(writer, "{name} {token}")?;
    }
    for &((left, right), _) in merges.records() {
        writeln!(writer, "{left} {right}")?;
    }
    Ok(())
}

/// Save a model to a file.
///
/// ## Arguments
/// * `path` - The target path.
/// * `pattern` - The pattern string.
/// * `specials` - The special token table.
/// * `merges` - The ordered merge table.
pub fn save_model_path<T, P>(
    path: P,
    pattern: &str,
    specials: &SpecialTokens<T>,
    merges: &MergeTable<T>,
) -> SgResult<()>
where
    T: TokenType,
    P: AsRef<Path>,
{
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_model(&mut writer, pattern, specials, merges)?;
    writer.flush()?;
    Ok(())
}

/// Read a model from a [`BufRead`] reader.
///
/// ## Arguments
/// * `reader` - The line reader.
///
/// ## Returns
/// A `Result` containing the parsed `ModelData<T>` or an error.
pub fn read_model<T, R>(reader: R) -> SgResult<ModelData<T>>
where
    T: TokenType,
    R: BufRead,
{
    let mut lines = reader.lines();

    let version = next_line(&mut lines, "version header")?;
    if version != MODEL_VERSION {
        return Err(SgtokError::VersionMismatch {
            expected: MODEL_VERSION,
            found: version,
        });
    }

    // The pattern line round-trips exactly (including empty and
    // whitespace-bearing strings); only the terminator is stripped.
    let pattern = next_line(&mut lines, "pattern")?;

    let count_line = next_line(&mut lines, "special token count")?;
    let count: usize = count_line.trim().parse().map_err(|_| {
        SgtokError::MalformedModel(format!(
            "special token count {count_line:?} is not a decimal integer"
        ))
    })?;

    let mut specials = SpecialTokens::default();
    for found in 0..count {
        let Some(line) = lines.next().transpose()? else {
            return Err(SgtokError::MalformedModel(format!(
                "declared {count} special tokens, found {found}"
            )));
        };
        let (name, id) = split_two(&line, "special token")?;
        specials.insert(name, parse_token(id)?)?;
    }

    let mut merge_pairs = Vec::new();
    while let Some(line) = lines.next().transpose()? {
        let (left, right) = split_two(&line, "merge")?;
        merge_pairs.push((parse_token(left)?, parse_token(right)?));
    }

    Ok(ModelData {
        pattern,
        specials,
        merge_pairs,
    })
}

/// Load a model from a file.
///
/// ## Arguments
/// * `path` - The path of the model file.
///
/// ## Returns
/// A `Result` containing the parsed `ModelData<T>` or an error.
pub fn load_model_path<T, P>(path: P) -> SgResult<ModelData<T>>
where
    T: TokenType,
    P: AsRef<Path>,
{
    let file = File::open(path)?;
    read_model(BufReader::new(file))
}

fn next_line<R: BufRead>(
    lines: &mut std::io::Lines<R>,
    what: &str,
) -> SgResult<String> {
    match lines.next().transpose()? {
        Some(line) => Ok(line),
        None => Err(SgtokError::MalformedModel(format!(
            "unexpected end of file: missing {what} line"
        ))),
    }
}

fn split_two<'a>(
    line: &'a str,
    what: &str,
) -> SgResult<(&'a str, &'a str)> {
    let mut fields = line.split_whitespace();
    match (fields.next(), fields.next(), fields.next()) {
        (Some(a), Some(b), None) => Ok((a, b)),
        _ => Err(SgtokError::MalformedModel(format!(
            "{what} line {line:?} must have exactly two whitespace-separated fields"
        ))),
    }
}

fn parse_token<T: TokenType>(field: &str) -> SgResult<T> {
    field
        .parse::<u64>()
        .ok()
        .and_then(T::from_u64)
        .ok_or_else(|| {
            SgtokError::MalformedModel(format!("{field:?} is not a valid symbol id"))
        })
}
