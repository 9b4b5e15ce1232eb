//! Published known-answer vectors
//!
//! Sources: the secp256k1 generator (SEC 2), BIP173/BIP350 for the segwit
//! encodings, BIP38 for passphrase encryption, EIP-55 for Ethereum casing
//! and the rust-bitcoin WIF test key.

use keyforge_api::AddressType;

/// Every address of one private key
pub struct AddressVector {
    /// Private scalar as 64 hex digits
    pub scalar_hex: &'static str,
    /// Expected compressed SEC1 public key, lowercase hex
    pub compressed_pubkey: &'static str,
    /// Expected uncompressed SEC1 public key, lowercase hex
    pub uncompressed_pubkey: &'static str,
    /// Expected address per type
    pub addresses: &'static [(AddressType, &'static str)],
}

/// Scalar 1, whose public key is the generator G
pub const SCALAR_ONE: AddressVector = AddressVector {
    scalar_hex: "0000000000000000000000000000000000000000000000000000000000000001",
    compressed_pubkey: "0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798",
    uncompressed_pubkey: "0479be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798\
                          483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8",
    addresses: &[
        (AddressType::P2pkh, "1BgGZ9tcN4rm9KBzDn7KprQz87SZ26SAMH"),
        (AddressType::P2pkhUncompressed, "1EHNa6Q4Jz2uvNExL497mE43ikXhwF6kZm"),
        (AddressType::P2sh, "3JvL6Ymt8MVWiCNHC7oWU6nLeHNJKLZGLN"),
        (AddressType::P2wpkh, "bc1qw508d6qejxtdg4y5r3zarvary0c5xw7kv8f3t4"),
        (AddressType::P2tr, "bc1pmfr3p9j00pfxjh0zmgp99y8zftmd3s5pmedqhyptwy6lm87hf5sspknck9"),
        (AddressType::Eth, "0x7E5F4552091A69125d5DfCb7b8C2659029395Bdf"),
    ],
};

/// Bech32m encoding of witness version 1 over x(G), the untweaked
/// generator (BIP350 test vector)
pub const P2TR_PROGRAM_OF_GX: &str =
    "bc1p0xlxvlhemja6c4dqv22uapctqupfhlxm9h8z3k2e72q4k9hcz7vqzk5jj0";

/// Key-path-only P2TR outputs, as (scalar hex, address)
///
/// n-1 gives -G, whose y is odd; its x-only internal key equals that of
/// scalar 1, so both must produce the same output.
pub const P2TR_ADDRESSES: [(&str, &str); 3] = [
    (
        "0000000000000000000000000000000000000000000000000000000000000001",
        "bc1pmfr3p9j00pfxjh0zmgp99y8zftmd3s5pmedqhyptwy6lm87hf5sspknck9",
    ),
    (
        "0000000000000000000000000000000000000000000000000000000000000002",
        "bc1pet7ep3czdu9k4wvdlz2fp5p8x2yp7t6ttyqg2c6cmh0lgeuu9lasmp9hsg",
    ),
    (
        "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364140",
        "bc1pmfr3p9j00pfxjh0zmgp99y8zftmd3s5pmedqhyptwy6lm87hf5sspknck9",
    ),
];

/// WIF test key of the rust-bitcoin project
pub struct WifVector {
    /// WIF text
    pub wif: &'static str,
    /// Whether the WIF marks the key as compressed
    pub compressed: bool,
    /// P2PKH address over the key's own encoding
    pub address: &'static str,
    /// Public key in the key's own encoding, lowercase hex
    pub pubkey: &'static str,
}

/// Uncompressed mainnet key from rust-bitcoin's `test_key_derivation`
pub const RUST_BITCOIN_WIF: WifVector = WifVector {
    wif: "5JYkZjmN7PVMjJUfJWfRFwtuXTGB439XV6faajeHPAM9Z2PT2R3",
    compressed: false,
    address: "1GhQvF6dL8xa6wBxLnWmHcQsurx9RxiMc8",
    pubkey: "042e58afe51f9ed8ad3cc7897f634d881fdbe49a81564629ded8156bebd2ffd1af\
             191923a2964c177f5b5923ae500fca49e99492d534aa3759d6b25a8bc971b133",
};

/// BIP38 non-EC-multiply vector
pub struct Bip38Vector {
    /// Encrypted text
    pub encrypted: &'static str,
    /// Passphrase
    pub passphrase: &'static str,
    /// Decrypted key as WIF
    pub wif: &'static str,
    /// Decrypted key as uppercase hex
    pub hex: &'static str,
    /// Compression flag of the encrypted key
    pub compressed: bool,
}

/// The two "No compression, no EC multiply" and "Compression, no EC
/// multiply" vectors sharing one scalar
pub const BIP38_VECTORS: [Bip38Vector; 2] = [
    Bip38Vector {
        encrypted: "6PRVWUbkzzsbcVac2qwfssoUJAN1Xhrg6bNk8J7Nzm5H7kxEbn2Nh2ZoGg",
        passphrase: "TestingOneTwoThree",
        wif: "5KN7MzqK5wt2TP1fQCYyHBtDrXdJuXbUzm4A9rKAteGu3Qi5CVR",
        hex: "CBF4B9F70470856BB4F40F80B87EDB90865997FFEE6DF315AB166D713AF433A5",
        compressed: false,
    },
    Bip38Vector {
        encrypted: "6PYNKZ1EAgYgmQfmNVamxyXVWHzK5s6DGhwP4J5o44cvXdoY7sRzhtpUeo",
        passphrase: "TestingOneTwoThree",
        wif: "L44B5gGEpqEDRS9vVPz7QT35jcBG2r3CZwSwQ4fCewXAhAhqGVpP",
        hex: "CBF4B9F70470856BB4F40F80B87EDB90865997FFEE6DF315AB166D713AF433A5",
        compressed: true,
    },
];

/// EIP-55 reference addresses in their checksummed form
pub const EIP55_ADDRESSES: [&str; 4] = [
    "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed",
    "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359",
    "0xdbF03B407c01E7cD3CBea99509d93f8DDDC8C6FB",
    "0xD1220A0cf47c7B9Be7A2E6BA89F429762e7b9aDb",
];
