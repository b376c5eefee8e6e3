use crate::error::AddressParseError;
use std::fmt;
use std::str::FromStr;

/// Bluetooth device address, stored little-endian as it appears on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BdAddr {
    pub bytes: [u8; 6],
}

impl BdAddr {
    pub fn new(bytes: [u8; 6]) -> Self {
        Self { bytes }
    }

    pub fn from_slice(slice: &[u8]) -> Option<Self> {
        if slice.len() >= 6 {
            let mut bytes = [0u8; 6];
            bytes.copy_from_slice(&slice[0..6]);
            Some(Self { bytes })
        } else {
            None
        }
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }
}

impl fmt::Display for BdAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02X}:{:02X}:{:02X}:{:02X}:{:02X}:{:02X}",
            self.bytes[5],
            self.bytes[4],
            self.bytes[3],
            self.bytes[2],
            self.bytes[1],
            self.bytes[0]
        )
    }
}

impl FromStr for BdAddr {
    type Err = AddressParseError;

    /// Parses the `AA:BB:CC:DD:EE:FF` form, most significant octet first.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let octets: Vec<&str> = s.split(':').collect();
        if octets.len() != 6 || octets.iter().any(|o| o.len() != 2) {
            return Err(AddressParseError::Format(s.to_string()));
        }

        let mut bytes = hex::decode(octets.concat())?;
        bytes.reverse();

        // Length is guaranteed by the octet check above
        BdAddr::from_slice(&bytes).ok_or_else(|| AddressParseError::Format(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_round_trip_through_text() {
        let addr: BdAddr = "00:11:22:AA:BB:CC".parse().unwrap();
        assert_eq!(addr.bytes, [0xCC, 0xBB, 0xAA, 0x22, 0x11, 0x00]);
        assert_eq!(addr.to_string(), "00:11:22:AA:BB:CC");

        let lower: BdAddr = "00:11:22:aa:bb:cc".parse().unwrap();
        assert_eq!(lower, addr);
    }

    #[test]
    fn test_malformed_addresses_are_rejected() {
        assert!("00:11:22:33:44".parse::<BdAddr>().is_err());
        assert!("00:11:22:33:44:55:66".parse::<BdAddr>().is_err());
        assert!("0:11:22:33:44:555".parse::<BdAddr>().is_err());
        assert!(matches!(
            "00:11:22:33:44:ZZ".parse::<BdAddr>(),
            Err(AddressParseError::Hex(_))
        ));
    }
}
