//! Shared public types of the keyforge library

use core::fmt;
use core::str::FromStr;

use crate::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Kind of address derived from a public key
///
/// The set is closed: derivation dispatches with an exhaustive match, so a
/// new kind cannot be added without handling it everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AddressType {
    /// Pay-to-pubkey-hash over the compressed public key
    #[default]
    P2pkh,
    /// Pay-to-pubkey-hash over the uncompressed public key
    P2pkhUncompressed,
    /// Pay-to-script-hash wrapping a P2WPKH redeem script
    P2sh,
    /// Native segwit v0 pay-to-witness-pubkey-hash
    P2wpkh,
    /// Segwit v1 pay-to-taproot with the key as internal key
    P2tr,
    /// Ethereum address with EIP-55 mixed-case checksum
    Eth,
}

impl AddressType {
    /// Every address type, in ordinal order
    pub const ALL: [AddressType; 6] = [
        AddressType::P2pkh,
        AddressType::P2pkhUncompressed,
        AddressType::P2sh,
        AddressType::P2wpkh,
        AddressType::P2tr,
        AddressType::Eth,
    ];

    /// Ordinal of this type, stable across releases
    pub fn ordinal(self) -> u8 {
        self as u8
    }

    /// Short lowercase name used by `Display` and `FromStr`
    pub fn name(self) -> &'static str {
        match self {
            AddressType::P2pkh => "p2pkh",
            AddressType::P2pkhUncompressed => "p2pkh-uncompressed",
            AddressType::P2sh => "p2sh",
            AddressType::P2wpkh => "p2wpkh",
            AddressType::P2tr => "p2tr",
            AddressType::Eth => "eth",
        }
    }

    /// Public key format the derivation of this type consumes
    pub fn key_format(self) -> KeyFormat {
        match self {
            AddressType::P2pkh | AddressType::P2sh | AddressType::P2wpkh => KeyFormat::Compressed,
            AddressType::P2pkhUncompressed | AddressType::P2tr | AddressType::Eth => {
                KeyFormat::Uncompressed
            }
        }
    }
}

impl TryFrom<u8> for AddressType {
    type Error = Error;

    fn try_from(ordinal: u8) -> Result<Self> {
        AddressType::ALL
            .get(ordinal as usize)
            .copied()
            .ok_or(Error::InvalidAddressType { ordinal })
    }
}

impl fmt::Display for AddressType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AddressType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim();
        AddressType::ALL
            .iter()
            .copied()
            .find(|t| t.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| Error::UnknownAddressType {
                name: name.to_string(),
            })
    }
}

/// SEC1 encoding of a public key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum KeyFormat {
    /// 33 bytes: 0x02/0x03 parity prefix followed by x
    #[default]
    Compressed,
    /// 65 bytes: 0x04 followed by x and y
    Uncompressed,
}
