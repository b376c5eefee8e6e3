//! Class of Device (CoD) decoding
//!
//! A CoD is a 24-bit value carried in a `u32`:
//!
//! ```text
//!  31   24  23    13 12     8 7      2 1 0
//! |       | Major   | Major  | Minor  |   |
//! |       | service | device | device |   |
//! |       | class   | class  | class  |   |
//! |       |<- 11  ->|<- 5  ->|<- 6  ->|   |
//! ```
//!
//! All functions here are total over `u32`. Values with the high byte set are
//! reported by [`is_invalid`] rather than rejected.

use crate::gap::constants::*;
use bitflags::bitflags;
use byteorder::{ByteOrder, LittleEndian};
use std::fmt;

bitflags! {
    /// Major service class bits, already shifted down from bits 13..23.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct MajorServiceClass: u32 {
        const LIMITED_DISCOVERABLE = 0x001;
        const LE_AUDIO = 0x002;
        const POSITIONING = 0x008;
        const NETWORKING = 0x010;
        const RENDERING = 0x020;
        const CAPTURING = 0x040;
        const OBJECT_TRANSFER = 0x080;
        const AUDIO = 0x100;
        const TELEPHONY = 0x200;
        const INFORMATION = 0x400;
    }
}

pub fn major_service_class(cod: u32) -> u32 {
    (cod & COD_MAJOR_SERVICE_CLASS_MASK) >> COD_MAJOR_SERVICE_CLASS_SHIFT
}

pub fn major_device_class(cod: u32) -> u32 {
    (cod & COD_MAJOR_DEVICE_CLASS_MASK) >> COD_MAJOR_DEVICE_CLASS_SHIFT
}

pub fn minor_device_class(cod: u32) -> u32 {
    (cod & COD_MINOR_DEVICE_CLASS_MASK) >> COD_MINOR_DEVICE_CLASS_SHIFT
}

/// Bit 21
pub fn has_audio(cod: u32) -> bool {
    MajorServiceClass::from_bits_truncate(major_service_class(cod))
        .contains(MajorServiceClass::AUDIO)
}

/// Bit 18
pub fn has_rendering(cod: u32) -> bool {
    MajorServiceClass::from_bits_truncate(major_service_class(cod))
        .contains(MajorServiceClass::RENDERING)
}

pub fn is_peripheral(cod: u32) -> bool {
    major_device_class(cod) == COD_MAJOR_DEVICE_PERIPHERAL
}

pub fn is_remote_control(cod: u32) -> bool {
    (minor_device_class(cod) & COD_MINOR_PERIPHERAL_SUBTYPE_MASK)
        == COD_MINOR_PERIPHERAL_REMOTE_CONTROL
}

pub fn is_keyboard(cod: u32) -> bool {
    minor_device_class(cod) & COD_MINOR_PERIPHERAL_KEYBOARD != 0
}

pub fn is_pointing_device(cod: u32) -> bool {
    minor_device_class(cod) & COD_MINOR_PERIPHERAL_POINTING != 0
}

/// A CoD is invalid when any of bits 24..31 is set or it equals the
/// "unclassified" value `0x1f00`. Invalid values must not drive profile
/// selection.
pub fn is_invalid(cod: u32) -> bool {
    cod & COD_RESERVED_MASK != 0 || cod == COD_UNCLASSIFIED
}

/// Typed wrapper over a raw CoD value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ClassOfDevice(pub u32);

impl ClassOfDevice {
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Decodes the 3-byte little-endian form used in inquiry results and EIR data.
    pub fn from_le_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.len() >= 3 {
            Some(Self(LittleEndian::read_u24(&bytes[..3])))
        } else {
            None
        }
    }

    /// Encodes the low 24 bits. The reserved high byte is dropped.
    pub fn to_le_bytes(&self) -> [u8; 3] {
        let mut bytes = [0u8; 3];
        LittleEndian::write_u24(&mut bytes, self.0 & !COD_RESERVED_MASK);
        bytes
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    pub fn service_classes(&self) -> MajorServiceClass {
        MajorServiceClass::from_bits_truncate(self.major_service_class())
    }

    pub fn major_service_class(&self) -> u32 {
        major_service_class(self.0)
    }

    pub fn major_device_class(&self) -> u32 {
        major_device_class(self.0)
    }

    pub fn minor_device_class(&self) -> u32 {
        minor_device_class(self.0)
    }

    pub fn has_audio(&self) -> bool {
        has_audio(self.0)
    }

    pub fn has_rendering(&self) -> bool {
        has_rendering(self.0)
    }

    pub fn is_peripheral(&self) -> bool {
        is_peripheral(self.0)
    }

    pub fn is_remote_control(&self) -> bool {
        is_remote_control(self.0)
    }

    pub fn is_keyboard(&self) -> bool {
        is_keyboard(self.0)
    }

    pub fn is_pointing_device(&self) -> bool {
        is_pointing_device(self.0)
    }

    pub fn is_invalid(&self) -> bool {
        is_invalid(self.0)
    }
}

impl From<u32> for ClassOfDevice {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl fmt::Display for ClassOfDevice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:06X}", self.0)
    }
}
