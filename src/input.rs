use std::io::{self, BufRead};

use log::warn;

/// Parses a line the way C's `atoi` does: leading whitespace, an optional
/// sign, then the longest run of digits. Anything else yields 0, and values
/// past the `i64` range clamp to its bounds before narrowing to `i32`.
///
/// The second value is false when the line was not a clean integer.
pub fn parse_address(line: &[u8]) -> (i32, bool) {
    if let Some(address) = std::str::from_utf8(line)
        .ok()
        .and_then(|s| s.trim().parse::<i32>().ok())
    {
        return (address, true);
    }

    let mut bytes = line
        .iter()
        .copied()
        .skip_while(|b| matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c))
        .peekable();
    let negative = match bytes.peek() {
        Some(b'-') => {
            bytes.next();
            true
        }
        Some(b'+') => {
            bytes.next();
            false
        }
        _ => false,
    };
    // Accumulate towards the sign so the negative side reaches i64::MIN.
    let mut value: i64 = 0;
    for digit in bytes.map_while(|b| b.is_ascii_digit().then(|| (b - b'0') as i64)) {
        value = value.saturating_mul(10);
        value = if negative {
            value.saturating_sub(digit)
        } else {
            value.saturating_add(digit)
        };
    }
    (value as i32, false)
}

/// Iterator over the logical addresses in a byte stream, one per line.
///
/// Lines are taken as raw bytes, so text that is not UTF-8 is parsed like
/// any other malformed line instead of failing the stream.
pub struct AddressReader<R> {
    reader: R,
    buf: Vec<u8>,
    line_number: usize,
}

impl<R: BufRead> AddressReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
            line_number: 0,
        }
    }
}

impl<R: BufRead> Iterator for AddressReader<R> {
    type Item = io::Result<i32>;

    fn next(&mut self) -> Option<Self::Item> {
        self.buf.clear();
        match self.reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => return None,
            Ok(_) => {}
            Err(e) => return Some(Err(e)),
        }
        self.line_number += 1;
        let line = self.buf.strip_suffix(b"\n").unwrap_or(&self.buf[..]);
        let (address, clean) = parse_address(line);
        if !clean {
            warn!(
                "Line {}: {:?} is not a valid address, using {}",
                self.line_number,
                String::from_utf8_lossy(line),
                address
            );
        }
        Some(Ok(address))
    }
}
