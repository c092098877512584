use crate::draw::Drawing;
use crate::io::error::Error;
use std::io::Write;

/// Writes `drawing` as a single JSON document followed by a newline.
pub fn write<W: Write>(mut writer: W, drawing: &Drawing, pretty: bool) -> Result<(), Error> {
    if pretty {
        serde_json::to_writer_pretty(&mut writer, drawing)?;
    } else {
        serde_json::to_writer(&mut writer, drawing)?;
    }
    writeln!(writer)?;
    Ok(())
}
