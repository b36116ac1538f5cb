//! Reading a formula's text from the command line, a file, or a stream.

use crate::error::InputError;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Joins command-line arguments back into one expression, separated by single spaces.
pub fn join_arguments<I, S>(args: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = String::new();
    for arg in args {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(arg.as_ref());
    }
    out
}

/// Reads a whole stream as a single line: carriage returns are dropped and newlines become spaces.
pub fn read_expression<R: Read>(reader: R) -> Result<String, InputError> {
    let mut reader = BufReader::new(reader);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;

    Ok(contents
        .chars()
        .filter(|&c| c != '\r')
        .map(|c| if c == '\n' { ' ' } else { c })
        .collect())
}

pub fn read_expression_from_file<P: AsRef<Path>>(path: P) -> Result<String, InputError> {
    let file = File::open(path)?;
    read_expression(file)
}
