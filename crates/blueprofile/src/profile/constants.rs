// Service class UUID16 values (Bluetooth assigned numbers)
pub const OBEX_OBJECT_PUSH_UUID16: u16 = 0x1105;
pub const HEADSET_UUID16: u16 = 0x1108;
pub const A2DP_SOURCE_UUID16: u16 = 0x110A;
pub const A2DP_SINK_UUID16: u16 = 0x110B;
pub const AVRCP_TARGET_UUID16: u16 = 0x110C;
pub const ADVANCED_AUDIO_DISTRIBUTION_UUID16: u16 = 0x110D;
pub const AVRCP_UUID16: u16 = 0x110E;
pub const AVRCP_CONTROLLER_UUID16: u16 = 0x110F;
pub const HEADSET_AG_UUID16: u16 = 0x1112;
pub const HANDSFREE_UUID16: u16 = 0x111E;
pub const HANDSFREE_AG_UUID16: u16 = 0x111F;
pub const HID_UUID16: u16 = 0x1124;
pub const PBAP_PCE_UUID16: u16 = 0x112E;
pub const PBAP_PSE_UUID16: u16 = 0x112F;
pub const MAP_MAS_UUID16: u16 = 0x1132;
pub const MAP_MNS_UUID16: u16 = 0x1133;

// Watchdog bound for one connect/disconnect attempt
pub const DEFAULT_CONNECTION_TIMEOUT_MS: u64 = 15_000;
