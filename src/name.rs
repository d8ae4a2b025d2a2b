// Represents a domain name
use crate::errors::WireError;
use crate::io::{ReadCursor, WriteCursor};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// A domain name: a sequence of labels, each 1-63 octets of arbitrary
/// bytes. Labels compare case-insensitively assuming ASCII, so `A.com`
/// and `a.com` are the same name. The root name has no labels.
#[derive(Debug, Clone, Default)]
pub struct Name {
    labels: Vec<Vec<u8>>,
}

impl Name {
    /// Total encoded length of a name (label octets plus length octets
    /// plus the terminating zero) is restricted to 255 octets. [RFC1034]
    pub const MAX_LEN: usize = 255;

    /// Restricts the length of a domain label to 63 octets. [RFC1034]
    pub const MAX_LABEL_LEN: usize = 63;

    // Upper bound on compression pointer jumps while decoding one name.
    // The backward-only rule already rules out simple self-loops; this
    // bounds pathological chains that stay backward at every hop.
    const MAX_POINTER_HOPS: usize = 128;

    pub fn root() -> Name {
        Name { labels: Vec::new() }
    }

    pub fn is_root(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn labels(&self) -> &[Vec<u8>] {
        &self.labels
    }

    /// Length of this name on the wire: one length octet per label, the
    /// label octets themselves, and the terminating zero.
    pub fn encoded_len(&self) -> usize {
        self.labels.iter().map(|l| 1 + l.len()).sum::<usize>() + 1
    }

    fn valid_label(label: &[u8]) -> Result<(), WireError> {
        if label.is_empty() {
            return Err(WireError::EmptyLabel);
        }
        if label.len() > Name::MAX_LABEL_LEN {
            return Err(WireError::LabelTooLong(label.len()));
        }
        Ok(())
    }

    /// Builds a name from raw label octets, enforcing the per-label and
    /// whole-name limits.
    pub fn from_labels<I>(labels: I) -> Result<Name, WireError>
    where
        I: IntoIterator<Item = Vec<u8>>,
    {
        let labels: Vec<Vec<u8>> = labels.into_iter().collect();

        for label in &labels {
            Name::valid_label(label)?;
        }

        let name = Name { labels };
        if name.encoded_len() > Name::MAX_LEN {
            return Err(WireError::NameTooLong(name.encoded_len()));
        }

        Ok(name)
    }

    /// Reads a possibly compressed name from the cursor.
    ///
    /// Each label's first octet selects its encoding by the top two bits:
    /// `00` is a literal label (length 0 terminates the name), `11` is a
    /// 14 bit pointer to an earlier offset of the same message where
    /// decoding resumes. The other two patterns are reserved.
    ///
    /// On return the cursor sits just past the name as it appears at the
    /// original position; pointer targets never count towards the bytes
    /// consumed there.
    pub fn decode(cur: &mut ReadCursor) -> Result<Name, WireError> {
        let start = cur.position();

        let mut labels = Vec::new();
        let mut encoded_len = 1; // terminating zero
        let mut hops = 0;
        let mut resume = None;

        loop {
            let b = cur.peek_u8()?;

            match b & 0xC0 {
                // Literal label.
                0x00 => {
                    let len = cur.read_u8()? as usize;
                    if len == 0 {
                        break;
                    }

                    encoded_len += 1 + len;
                    if encoded_len > Name::MAX_LEN {
                        return Err(WireError::NameTooLong(encoded_len));
                    }

                    labels.push(cur.take(len)?.to_vec());
                }

                // Compression pointer.
                0xC0 => {
                    let ptr = (cur.read_u16()? & 0x3FFF) as usize;

                    // Pointers may only reference offsets before the name
                    // being decoded.
                    if ptr >= start {
                        return Err(WireError::ForwardPointer {
                            target: ptr,
                            start,
                        });
                    }

                    hops += 1;
                    if hops > Name::MAX_POINTER_HOPS {
                        return Err(WireError::PointerLoop(Name::MAX_POINTER_HOPS));
                    }

                    // Remember where the name continues in the record, so
                    // the cursor can be put back once the jump is decoded.
                    if resume.is_none() {
                        resume = Some(cur.position());
                    }

                    cur.seek(ptr)?;
                }

                _ => return Err(WireError::ReservedLabelEncoding(b)),
            }
        }

        if let Some(pos) = resume {
            cur.seek(pos)?;
        }

        Ok(Name { labels })
    }

    /// Writes this name as literal labels followed by the terminating
    /// zero, and returns the number of bytes written. Compression is
    /// never emitted; a message-level assembler that tracks name offsets
    /// may write pointers itself and fall back to this for misses.
    pub fn encode(&self, out: &mut WriteCursor) -> Result<usize, WireError> {
        if self.encoded_len() > Name::MAX_LEN {
            return Err(WireError::NameTooLong(self.encoded_len()));
        }

        let start = out.position();

        for label in &self.labels {
            Name::valid_label(label)?;
            out.write_u8(label.len() as u8);
            out.write_bytes(label);
        }
        out.write_u8(0);

        Ok(out.position() - start)
    }
}

impl FromStr for Name {
    type Err = WireError;

    // Parses a dotted domain name, with or without the trailing dot.
    // Labels are taken verbatim; no IDNA mapping is applied.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || s == "." {
            return Ok(Name::root());
        }

        Name::from_labels(s.split_terminator('.').map(|l| l.as_bytes().to_vec()))
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.labels.is_empty() {
            return write!(f, ".");
        }

        for label in &self.labels {
            for &b in label {
                // Octets outside the printable range use the \DDD escape
                // form, as dig prints them.
                if b.is_ascii_graphic() && b != b'.' && b != b'\\' {
                    write!(f, "{}", b as char)?;
                } else {
                    write!(f, "\\{:03}", b)?;
                }
            }
            write!(f, ".")?;
        }

        Ok(())
    }
}

impl PartialEq for Name {
    fn eq(&self, other: &Name) -> bool {
        self.labels.len() == other.labels.len()
            && self
                .labels
                .iter()
                .zip(&other.labels)
                .all(|(a, b)| a.eq_ignore_ascii_case(b))
    }
}

impl Eq for Name {}

impl Hash for Name {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for label in &self.labels {
            state.write_usize(label.len());
            for b in label {
                state.write_u8(b.to_ascii_lowercase());
            }
        }
    }
}

#[test]
fn test_from_str() {
    assert_eq!(Name::from_str("").unwrap().to_string(), ".");
    assert_eq!(Name::from_str(".").unwrap().to_string(), ".");
    assert_eq!(Name::from_str("com").unwrap().to_string(), "com.");
    assert_eq!(Name::from_str("com.").unwrap().to_string(), "com.");
    assert_eq!(Name::from_str("a.b.com").unwrap().to_string(), "a.b.com.");
    assert_eq!(Name::from_str("a.b.com.").unwrap().to_string(), "a.b.com.");

    assert_eq!(Name::from_str("a..com"), Err(WireError::EmptyLabel));
    assert_eq!(
        Name::from_str(&"a".repeat(64)),
        Err(WireError::LabelTooLong(64))
    );
}

#[test]
fn test_eq_ignores_case() {
    assert_eq!(
        Name::from_str("WWW.Example.COM").unwrap(),
        Name::from_str("www.example.com").unwrap()
    );
    assert_ne!(
        Name::from_str("www.example.com").unwrap(),
        Name::from_str("example.com").unwrap()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_literal() {
        let buf = b"\x03www\x07example\x03com\x00";
        let mut cur = ReadCursor::new(buf);

        let name = Name::decode(&mut cur).unwrap();
        assert_eq!(name.to_string(), "www.example.com.");
        assert_eq!(cur.position(), 17);
    }

    #[test]
    fn test_decode_root() {
        let mut cur = ReadCursor::new(b"\x00");

        let name = Name::decode(&mut cur).unwrap();
        assert!(name.is_root());
        assert_eq!(cur.position(), 1);
    }

    #[test]
    fn test_decode_pointer() {
        // "example.com" at offset 0, then "www" + pointer to it at 13.
        let buf = b"\x07example\x03com\x00\x03www\xC0\x00";
        let mut cur = ReadCursor::at(buf, 13);

        let name = Name::decode(&mut cur).unwrap();
        assert_eq!(name.to_string(), "www.example.com.");
        // Consumed: the "www" label and the two pointer bytes.
        assert_eq!(cur.position(), 19);
    }

    #[test]
    fn test_decode_forward_pointer() {
        let buf = b"\xC0\x32rest of the message";
        let mut cur = ReadCursor::new(buf);

        assert_eq!(
            Name::decode(&mut cur),
            Err(WireError::ForwardPointer { target: 50, start: 0 })
        );
    }

    #[test]
    fn test_decode_reserved_encoding() {
        // Top bits 01 and 10 are reserved.
        for b in [0x40_u8, 0x80] {
            let buf = [b, 0x00];
            let mut cur = ReadCursor::new(&buf);
            assert_eq!(
                Name::decode(&mut cur),
                Err(WireError::ReservedLabelEncoding(b))
            );
        }
    }

    #[test]
    fn test_decode_name_too_long() {
        // Five 63-octet labels reconstruct to 321 octets, over the cap.
        let mut buf = Vec::new();
        for _ in 0..5 {
            buf.push(63);
            buf.extend_from_slice(&[b'a'; 63]);
        }
        buf.push(0);

        let mut cur = ReadCursor::new(&buf);
        assert!(matches!(
            Name::decode(&mut cur),
            Err(WireError::NameTooLong(_))
        ));
    }

    #[test]
    fn test_decode_truncated() {
        let mut cur = ReadCursor::new(b"\x03ww");
        assert_eq!(Name::decode(&mut cur), Err(WireError::BufferUnderrun));
    }

    #[test]
    fn test_encode_round_trip() {
        let name = Name::from_str("www.example.com").unwrap();

        let mut out = WriteCursor::new();
        let written = name.encode(&mut out).unwrap();

        assert_eq!(written, name.encoded_len());
        assert_eq!(out.as_slice(), b"\x03www\x07example\x03com\x00");

        let mut cur = ReadCursor::new(out.as_slice());
        assert_eq!(Name::decode(&mut cur).unwrap(), name);
    }

    #[test]
    fn test_from_labels_too_long() {
        // Four 62-octet labels encode to 253 octets: fine. A fifth label
        // pushes the name over 255.
        let label = vec![b'a'; 62];
        assert!(Name::from_labels(vec![label.clone(); 4]).is_ok());
        assert!(matches!(
            Name::from_labels(vec![label; 5]),
            Err(WireError::NameTooLong(_))
        ));
    }
}
