//! Unsigned LEB128 length prefixes for [`ByteOps`](super::ByteOps).
//!
//! See also: <https://en.wikipedia.org/wiki/LEB128>

/// Appends `x` to `buf`.
pub fn write(buf: &mut Vec<u8>, mut x: usize) {
    while x >= 0x80 {
        #[expect(clippy::cast_possible_truncation)]
        buf.push((x as u8) | 0x80);
        x >>= 7;
    }

    #[expect(clippy::cast_possible_truncation)]
    buf.push(x as u8);
}

/// Reads a value from the front of `bytes`, advancing it.
///
/// Returns [`None`] if `bytes` ends early or the value overflows [`usize`].
pub fn read(bytes: &mut &[u8]) -> Option<usize> {
    let mut x = 0usize;
    let mut s = 0u32;
    loop {
        let [b, rest @ ..] = *bytes else {
            return None;
        };

        let b = *b;
        *bytes = rest;

        // ensure the shift isn't greater than the bit-count
        if s >= usize::BITS {
            return None;
        }

        // ensure that all bits fit
        let tb = usize::from(b & 0x7F);
        let ts = tb << s;
        if ts >> s != tb {
            return None;
        }

        x |= ts;
        s += 7;

        if b < 0x80 {
            return Some(x);
        }
    }
}

/// Reads a length prefix followed by that many bytes.
pub fn read_prefixed<'a>(bytes: &mut &'a [u8]) -> Option<&'a [u8]> {
    let len = read(bytes)?;
    let slice = *bytes;
    let (data, rest) = slice.split_at_checked(len)?;
    *bytes = rest;
    Some(data)
}

/// Appends a length prefix followed by `data`.
pub fn write_prefixed(buf: &mut Vec<u8>, data: &[u8]) {
    write(buf, data.len());
    buf.extend_from_slice(data);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_values_are_one_byte() {
        let mut buf = Vec::new();
        write(&mut buf, 0x7F);
        assert_eq!(buf, [0x7F], "values below 0x80 must be a single byte");
    }

    #[test]
    fn multi_byte() {
        let mut buf = Vec::new();
        write(&mut buf, 624_485);
        assert_eq!(buf, [0xE5, 0x8E, 0x26], "must match the reference encoding");

        let mut slice = buf.as_slice();
        assert_eq!(read(&mut slice), Some(624_485), "must read back");
        assert!(slice.is_empty(), "must consume all bytes");
    }

    #[test]
    fn truncated() {
        let mut slice: &[u8] = &[0x80, 0x80];
        assert_eq!(read(&mut slice), None, "continuation without end");
    }

    #[test]
    fn overflow() {
        let mut slice: &[u8] = &[0xFF; 11];
        assert_eq!(read(&mut slice), None, "too many bytes for usize");
    }

    #[test]
    fn prefixed_advances() {
        let data: &[u8] = &[2, b'a', b'b', 1, b'c'];
        let (first, second) = {
            let mut cursor = data;
            (read_prefixed(&mut cursor), read_prefixed(&mut cursor))
        };
        assert_eq!(first, Some(&b"ab"[..]), "first prefixed slice");
        assert_eq!(second, Some(&b"c"[..]), "second prefixed slice");
    }

    #[test]
    fn prefixed_too_short() {
        let mut slice: &[u8] = &[5, 1, 2, 3];
        assert_eq!(read_prefixed(&mut slice), None, "prefix is longer than data");
    }
}
