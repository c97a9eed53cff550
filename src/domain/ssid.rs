//! Network name decoding.
//!
//! An SSID on the air is an arbitrary byte sequence, not text. This module
//! owns the raw bytes and converts them to displayable text under one of two
//! strategies, with a deterministic lossless-for-debugging hex fallback when
//! decoding fails. Decoding failure is never fatal; the observation is always
//! kept.

use std::fmt;

/// Strategy for converting raw SSID bytes into displayable text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SsidEncoding {
    /// Decode as literal ASCII only when every byte is in the printable
    /// range `[0x20, 0x7E]`; otherwise fall back to the hex dump.
    StrictAscii,
    /// Attempt a UTF-8 decode; on failure fall back to the hex dump.
    ///
    /// The default. Accepts a superset of the names the strict variant
    /// accepts.
    #[default]
    Utf8,
}

/// Prefix for the hex-dump fallback representation.
pub const RAW_PREFIX: &str = "[RAW] ";

/// A broadcast network name, kept as the raw bytes seen on the air.
///
/// May be empty for hidden networks. Equality and hashing are over the raw
/// bytes, so two names that decode to the same fallback text are still
/// distinct if their bytes differ.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Ssid(Vec<u8>);

impl Ssid {
    /// Create an `Ssid` from raw bytes.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    /// The raw bytes as broadcast.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Whether this is a hidden network (zero-length name).
    pub fn is_hidden(&self) -> bool {
        self.0.is_empty()
    }

    /// Decode the name into displayable text under the given strategy.
    ///
    /// Never fails: undecodable names produce `"[RAW] "` followed by two
    /// uppercase hex digits per byte, no separators.
    pub fn decode(&self, encoding: SsidEncoding) -> String {
        match encoding {
            SsidEncoding::StrictAscii => {
                if self.0.iter().all(|&b| (0x20..=0x7E).contains(&b)) {
                    // Printable ASCII is valid UTF-8 by construction.
                    String::from_utf8_lossy(&self.0).into_owned()
                } else {
                    self.hex_fallback()
                }
            }
            SsidEncoding::Utf8 => match std::str::from_utf8(&self.0) {
                Ok(s) => s.to_owned(),
                Err(_) => self.hex_fallback(),
            },
        }
    }

    fn hex_fallback(&self) -> String {
        let mut out = String::with_capacity(RAW_PREFIX.len() + 2 * self.0.len());
        out.push_str(RAW_PREFIX);
        for byte in &self.0 {
            out.push_str(&format!("{byte:02X}"));
        }
        out
    }
}

impl From<&str> for Ssid {
    fn from(s: &str) -> Self {
        Self(s.as_bytes().to_vec())
    }
}

impl fmt::Debug for Ssid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ssid({:?})", self.decode(SsidEncoding::Utf8))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_name_decodes_literally() {
        let ssid = Ssid::from("HomeNetwork");
        assert_eq!(ssid.decode(SsidEncoding::StrictAscii), "HomeNetwork");
        assert_eq!(ssid.decode(SsidEncoding::Utf8), "HomeNetwork");
    }

    #[test]
    fn non_printable_byte_triggers_fallback_in_strict_ascii() {
        let ssid = Ssid::from_bytes(vec![b'A', 0x01, b'B']);
        let decoded = ssid.decode(SsidEncoding::StrictAscii);
        assert_eq!(decoded, "[RAW] 410142");
        // Exactly 2 hex chars per byte after the prefix.
        assert_eq!(decoded.len(), RAW_PREFIX.len() + 2 * 3);
    }

    #[test]
    fn utf8_accepts_multibyte_names() {
        let ssid = Ssid::from("Caf\u{e9} Wi-Fi");
        assert_eq!(ssid.decode(SsidEncoding::Utf8), "Caf\u{e9} Wi-Fi");
        // The strict variant rejects the multi-byte sequence.
        assert!(ssid
            .decode(SsidEncoding::StrictAscii)
            .starts_with(RAW_PREFIX));
    }

    #[test]
    fn invalid_utf8_falls_back_to_hex() {
        let ssid = Ssid::from_bytes(vec![0xFF, 0xFE, 0x00]);
        assert_eq!(ssid.decode(SsidEncoding::Utf8), "[RAW] FFFE00");
    }

    #[test]
    fn hidden_network_is_empty_string() {
        let ssid = Ssid::from_bytes(Vec::new());
        assert!(ssid.is_hidden());
        assert_eq!(ssid.decode(SsidEncoding::Utf8), "");
        assert_eq!(ssid.decode(SsidEncoding::StrictAscii), "");
    }
}
