//! Output formatting for CLI commands.
//!
//! Supports table (human-readable) and JSON output formats. Everything goes
//! to the writer handed in by the caller, stdout in the binary.

use std::io::Write;

use serde::Serialize;

use crate::cli::Format;
use crate::error::CliError;
use crate::model::ResourceId;

/// Output formatter that handles both table and JSON output.
#[derive(Debug, Clone)]
pub struct OutputFormat {
    format: Format,
}

impl OutputFormat {
    /// Create a new output formatter.
    #[must_use]
    pub const fn new(format: Format) -> Self {
        Self { format }
    }

    /// Write a serializable value to the output.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    pub fn write<W, T>(&self, writer: &mut W, value: &T) -> Result<(), CliError>
    where
        W: Write,
        T: Serialize + TableDisplay,
    {
        match self.format {
            Format::Json => write_json(writer, value)?,
            Format::Table => value.write_table(writer)?,
        }
        Ok(())
    }

    /// Write a serializable value to a string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_string<T>(&self, value: &T) -> Result<String, CliError>
    where
        T: Serialize + TableDisplay,
    {
        let mut buf = Vec::new();
        self.write(&mut buf, value)?;
        String::from_utf8(buf).map_err(|e| CliError::Format(format!("UTF-8 error: {e}")))
    }
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::new(Format::Table)
    }
}

/// Pretty-printed JSON followed by a newline, whatever the selected format.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn write_json<W, T>(writer: &mut W, value: &T) -> Result<(), CliError>
where
    W: Write,
    T: Serialize + ?Sized,
{
    serde_json::to_writer_pretty(&mut *writer, value)
        .map_err(|e| CliError::Format(format!("JSON serialization failed: {e}")))?;
    writeln!(writer)?;
    Ok(())
}

/// Trait for types that can be displayed as a table.
pub trait TableDisplay {
    /// Write the value as a human-readable table.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_table<W: Write>(&self, writer: &mut W) -> Result<(), CliError>;
}

/// Result of a create call: the identifier the service assigned.
#[derive(Debug, Clone, Serialize)]
pub struct Created {
    /// Resource kind, e.g. `keyword`.
    pub resource: &'static str,
    /// Server-assigned identifier.
    pub id: ResourceId,
}

impl TableDisplay for Created {
    fn write_table<W: Write>(&self, writer: &mut W) -> Result<(), CliError> {
        writeln!(writer, "✓ Created {} {}", self.resource, self.id)?;
        Ok(())
    }
}

/// Confirmation for a mutation that returns nothing worth rendering.
///
/// Failures never get here; they surface as [`CliError`].
#[derive(Debug, Clone, Serialize)]
pub struct ActionResponse {
    /// Identifier the action applied to.
    pub id: String,
    /// Response message.
    pub message: String,
}

impl TableDisplay for ActionResponse {
    fn write_table<W: Write>(&self, writer: &mut W) -> Result<(), CliError> {
        writeln!(writer, "✓ {}", self.message)?;
        Ok(())
    }
}

/// Shortens `s` to at most `max_len` characters, marking the cut with `...`.
#[must_use]
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        return s.to_string();
    }
    if max_len > 3 {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{head}...")
    } else {
        s.chars().take(max_len).collect()
    }
}
