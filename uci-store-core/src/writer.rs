use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::tree::UciDocument;

/// Errors that can occur while writing UCI text from a [`UciDocument`].
#[derive(Debug, Error)]
pub enum WriteError {
    /// Failed to write output file.
    #[error("failed to write UCI file: {0}")]
    Io(#[from] std::io::Error),
}

/// Serialize a [`UciDocument`] into UCI text.
///
/// The output is normalized, not a faithful reproduction of the source
/// text: comments and `package` lines are not carried through the parsed
/// document, and options render in key order rather than source order.
/// Normalized text is a fixed point, so re-rendering a reparsed document
/// reproduces it byte for byte. Callers that need the original bytes
/// (backups) must copy the file, not round-trip it.
pub fn render(doc: &UciDocument) -> String {
    let mut out = String::new();
    for section in &doc.sections {
        out.push_str("config ");
        out.push_str(&section.section_type);
        if let Some(name) = &section.name {
            out.push(' ');
            out.push_str(&quote(name));
        }
        out.push('\n');

        for (key, value) in &section.options {
            out.push_str("\toption ");
            out.push_str(key);
            out.push(' ');
            out.push_str(&quote(value));
            out.push('\n');
        }
        for (key, values) in &section.lists {
            for value in values {
                out.push_str("\tlist ");
                out.push_str(key);
                out.push(' ');
                out.push_str(&quote(value));
                out.push('\n');
            }
        }
        out.push('\n');
    }
    out
}

/// Serialize a [`UciDocument`] and write it to `path`.
pub fn write_file(doc: &UciDocument, path: &Path) -> Result<(), WriteError> {
    fs::write(path, render(doc))?;
    Ok(())
}

/// Single-quote a value, escaping embedded single quotes the shell way.
fn quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', "'\\''"))
}
