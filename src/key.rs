use std::fs;
use std::io;
use std::path::Path;

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Accumulates sifted key bits up to a fixed target length and renders the
/// finished key as hexadecimal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key {
    bits: Vec<bool>,
    target: usize,
}

impl Key {
    /// Creates an empty key with a target length of `target` bits.
    pub fn new(target: usize) -> Self {
        Self {
            bits: Vec::with_capacity(target),
            target,
        }
    }

    /// Appends one sifted bit.
    pub fn append(&mut self, bit: bool) {
        self.bits.push(bit);
    }

    /// True once the key holds at least its target number of bits.
    pub fn is_complete(&self) -> bool {
        self.bits.len() >= self.target
    }

    /// Number of bits accumulated so far.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Renders the bit sequence as big-endian lowercase hex, `ceil(len/4)`
    /// digits. When the length is not a multiple of 4 the leading nibble is
    /// zero-padded, so leading zero bits survive the rendering.
    pub fn to_hex(&self) -> String {
        let pad = (4 - self.bits.len() % 4) % 4;
        let mut out = String::with_capacity((self.bits.len() + pad) / 4);

        let mut nibble = 0u8;
        let mut filled = pad;
        for &bit in &self.bits {
            nibble = (nibble << 1) | u8::from(bit);
            filled += 1;
            if filled == 4 {
                out.push(HEX_DIGITS[usize::from(nibble)] as char);
                nibble = 0;
                filled = 0;
            }
        }
        out
    }

    /// Writes the hex rendering to `path`, no prefix and no trailing newline.
    pub fn write_to(&self, path: &Path) -> io::Result<()> {
        fs::write(path, self.to_hex())
    }
}
