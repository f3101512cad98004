use std::io::{self, Write};

/// Writes one name per line. A missing name becomes an empty line.
pub fn write_names<W: Write>(out: &mut W, names: &[Option<String>]) -> io::Result<()> {
    for name in names {
        writeln!(out, "{}", name.as_deref().unwrap_or_default())?;
    }
    out.flush()
}
