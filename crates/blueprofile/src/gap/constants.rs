// Class of Device field masks
pub const COD_MAJOR_SERVICE_CLASS_MASK: u32 = 0xFF_E000;
pub const COD_MAJOR_SERVICE_CLASS_SHIFT: u32 = 13;
pub const COD_MAJOR_DEVICE_CLASS_MASK: u32 = 0x1F00;
pub const COD_MAJOR_DEVICE_CLASS_SHIFT: u32 = 8;
pub const COD_MINOR_DEVICE_CLASS_MASK: u32 = 0xFC;
pub const COD_MINOR_DEVICE_CLASS_SHIFT: u32 = 2;
pub const COD_FORMAT_TYPE_MASK: u32 = 0x03;

// Bits 24..31 are unassigned in a 3-byte CoD
pub const COD_RESERVED_MASK: u32 = 0xFF00_0000;

// Major device class values
pub const COD_MAJOR_DEVICE_MISCELLANEOUS: u32 = 0x00;
pub const COD_MAJOR_DEVICE_COMPUTER: u32 = 0x01;
pub const COD_MAJOR_DEVICE_PHONE: u32 = 0x02;
pub const COD_MAJOR_DEVICE_NETWORK: u32 = 0x03;
pub const COD_MAJOR_DEVICE_AUDIO_VIDEO: u32 = 0x04;
pub const COD_MAJOR_DEVICE_PERIPHERAL: u32 = 0x05;
pub const COD_MAJOR_DEVICE_IMAGING: u32 = 0x06;
pub const COD_MAJOR_DEVICE_WEARABLE: u32 = 0x07;
pub const COD_MAJOR_DEVICE_TOY: u32 = 0x08;
pub const COD_MAJOR_DEVICE_HEALTH: u32 = 0x09;
pub const COD_MAJOR_DEVICE_UNCATEGORIZED: u32 = 0x1F;

// Full CoD value reported by devices which never set their class
pub const COD_UNCLASSIFIED: u32 = 0x1F00;

// Peripheral minor device class sub-fields (after the 2-bit shift)
pub const COD_MINOR_PERIPHERAL_SUBTYPE_MASK: u32 = 0x0F;
pub const COD_MINOR_PERIPHERAL_REMOTE_CONTROL: u32 = 0x03;
pub const COD_MINOR_PERIPHERAL_KEYBOARD: u32 = 0x10;
pub const COD_MINOR_PERIPHERAL_POINTING: u32 = 0x20;
