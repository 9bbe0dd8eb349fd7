#[cfg(not(target_arch = "wasm32"))]
use crate::apu::UncheckedTables;
use crate::apu::MixerTables;
use crate::error::Result;
use std::fmt;
#[cfg(not(target_arch = "wasm32"))]
use std::io::Read;
use std::io::{self, Write};

const VALUES_PER_ROW: usize = 6;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    /// One labelled list per table.
    Text,
    /// Rust source declaring `PULSE_TABLE` and `TND_TABLE` constants.
    Rust,
    /// `MixerTables` encoded with bincode.
    #[cfg(not(target_arch = "wasm32"))]
    Bincode,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Format::Text => "text",
            Format::Rust => "rust",
            #[cfg(not(target_arch = "wasm32"))]
            Format::Bincode => "bincode",
        };
        write!(f, "{}", name)
    }
}

/// Writes both tables to `writer`.
///
/// # Errors
///
/// Returns an error if writing or encoding fails.
pub fn emit<W: Write>(tables: &MixerTables, format: Format, writer: &mut W) -> Result<()> {
    match format {
        Format::Text => write_text(tables, writer)?,
        Format::Rust => write_rust(tables, writer)?,
        #[cfg(not(target_arch = "wasm32"))]
        Format::Bincode => bincode::serialize_into(&mut *writer, tables)?,
    }
    writer.flush()?;
    debug!("[Emit] Wrote tables as {}.", format);
    Ok(())
}

/// Reads tables written with `Format::Bincode` and validates them again.
///
/// # Errors
///
/// Returns an error if decoding fails or the decoded tables violate the output range.
#[cfg(not(target_arch = "wasm32"))]
pub fn load<R: Read>(reader: R) -> Result<MixerTables> {
    let UncheckedTables { pulse, tnd } = bincode::deserialize_from(reader)?;
    let tables = MixerTables::from_tables(pulse, tnd)?;
    debug!("[Emit] Loaded tables: max output {}.", tables.max_output());
    Ok(tables)
}

fn write_text<W: Write>(tables: &MixerTables, writer: &mut W) -> io::Result<()> {
    write_list(writer, "Pulse Table", tables.pulse().values())?;
    write_list(writer, "Tnd Table", tables.tnd().values())
}

fn write_list<W: Write>(writer: &mut W, label: &str, values: &[f32]) -> io::Result<()> {
    write!(writer, "{}: [", label)?;
    for (index, val) in values.iter().enumerate() {
        if index > 0 {
            write!(writer, ", ")?;
        }
        write!(writer, "{:?}", val)?;
    }
    writeln!(writer, "]")
}

fn write_rust<W: Write>(tables: &MixerTables, writer: &mut W) -> io::Result<()> {
    writeln!(writer, "// Generated by neso-mixer. Do not edit.")?;
    writeln!(writer)?;
    writeln!(writer, "// https://wiki.nesdev.com/w/index.php/APU_Mixer#Lookup_Table")?;
    write_const(writer, "PULSE_TABLE", tables.pulse().values())?;
    writeln!(writer)?;
    write_const(writer, "TND_TABLE", tables.tnd().values())
}

fn write_const<W: Write>(writer: &mut W, name: &str, values: &[f32]) -> io::Result<()> {
    writeln!(writer, "#[rustfmt::skip]")?;
    writeln!(writer, "pub const {}: [f32; {}] = [", name, values.len())?;
    for row in values.chunks(VALUES_PER_ROW) {
        write!(writer, "   ")?;
        for val in row {
            // Debug prints the shortest representation that parses back to the same bits.
            write!(writer, " {:?},", val)?;
        }
        writeln!(writer)?;
    }
    writeln!(writer, "];")
}
