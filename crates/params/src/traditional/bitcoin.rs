//! Bitcoin mainnet serialization constants

/// Version byte of a pay-to-pubkey-hash address
pub const P2PKH_VERSION: u8 = 0x00;

/// Version byte of a pay-to-script-hash address
pub const P2SH_VERSION: u8 = 0x05;

/// Redeem script prefix of a nested P2WPKH: OP_0 followed by a 20-byte push
pub const P2WPKH_REDEEM_PREFIX: [u8; 2] = [0x00, 0x14];

/// Version byte of a WIF private key
pub const WIF_VERSION: u8 = 0x80;

/// Trailing marker of a WIF key whose public key is compressed
pub const WIF_COMPRESSION_MARKER: u8 = 0x01;

/// Decoded length of an uncompressed WIF: version || scalar || checksum
pub const WIF_UNCOMPRESSED_LEN: usize = 1 + 32 + 4;

/// Decoded length of a compressed WIF: version || scalar || marker || checksum
pub const WIF_COMPRESSED_LEN: usize = 1 + 32 + 1 + 4;

/// Leading character of every uncompressed mainnet WIF
pub const WIF_UNCOMPRESSED_LEAD: char = '5';

/// Possible leading characters of a compressed mainnet WIF
pub const WIF_COMPRESSED_LEADS: [char; 2] = ['K', 'L'];

/// Human-readable part of mainnet segwit addresses
pub const SEGWIT_HRP: &str = "bc";

/// Witness version of P2WPKH outputs (Bech32)
pub const WITNESS_VERSION_P2WPKH: u8 = 0;

/// Witness version of P2TR outputs (Bech32m)
pub const WITNESS_VERSION_P2TR: u8 = 1;

/// BIP340 tag of the Taproot output key tweak
pub const TAP_TWEAK_TAG: &str = "TapTweak";
