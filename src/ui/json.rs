use std::io::{self, Write};

/// Write one JSON document followed by a newline.
pub fn write_event(out: &mut impl Write, event: &serde_json::Value) -> io::Result<()> {
    let line = serde_json::to_string(event).map_err(io::Error::other)?;
    out.write_all(line.as_bytes())?;
    out.write_all(b"\n")?;
    Ok(())
}

/// Convenience helper that writes to stdout.
pub fn emit(event: serde_json::Value) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_event(&mut out, &event)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_single_line() {
        let mut buf = Vec::new();
        write_event(&mut buf, &serde_json::json!({"type": "removed", "id": "a"})).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, "{\"type\":\"removed\",\"id\":\"a\"}\n");
    }
}
