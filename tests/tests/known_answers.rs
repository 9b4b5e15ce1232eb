//! Known-answer tests across the whole key pipeline

use keyforge_algorithms::ec::k256::{base_point_g, secp256k1};
use keyforge_algorithms::encoding::bech32;
use keyforge_api::{AddressType, Error, KeyFormat};
use keyforge_keys::bip38::{self, Bip38Params};
use keyforge_keys::{derive_address, eip55_checksum, KeyMaterial, PrivateKey};
use keyforge_tests::vectors::{
    BIP38_VECTORS, EIP55_ADDRESSES, P2TR_ADDRESSES, P2TR_PROGRAM_OF_GX, RUST_BITCOIN_WIF,
    SCALAR_ONE,
};

#[test]
fn test_scalar_one_is_generator() {
    let key = PrivateKey::from_hex(SCALAR_ONE.scalar_hex).unwrap();
    let point = key.public_key().to_point();
    assert_eq!(point, base_point_g());
    assert_eq!(
        hex::encode(point.x_bytes()),
        "79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798"
    );
    assert_eq!(
        hex::encode(point.y_bytes()),
        "483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8"
    );

    assert_eq!(key.public_key().to_string(), SCALAR_ONE.compressed_pubkey);
    assert_eq!(
        key.clone().with_compressed(false).public_key().to_string(),
        SCALAR_ONE.uncompressed_pubkey
    );
}

#[test]
fn test_scalar_one_addresses() {
    let key = PrivateKey::from_hex(SCALAR_ONE.scalar_hex).unwrap();
    for (kind, expected) in SCALAR_ONE.addresses {
        assert_eq!(&key.address_of(*kind).unwrap(), expected, "{kind}");
    }

    // both encodings of G give the same address for every kind
    let compressed = hex::decode(SCALAR_ONE.compressed_pubkey).unwrap();
    let uncompressed = hex::decode(SCALAR_ONE.uncompressed_pubkey).unwrap();
    for kind in AddressType::ALL {
        assert_eq!(
            derive_address(&compressed, kind).unwrap(),
            derive_address(&uncompressed, kind).unwrap()
        );
    }
}

#[test]
fn test_p2tr_output_is_tweaked() {
    let key = PrivateKey::from_hex(SCALAR_ONE.scalar_hex).unwrap();
    let address = key.address_of(AddressType::P2tr).unwrap();

    // the untweaked x-only key encodes to the BIP350 vector
    let gx = base_point_g().x_bytes();
    assert_eq!(bech32::encode_segwit("bc", 1, &gx).unwrap(), P2TR_PROGRAM_OF_GX);

    assert_ne!(address, P2TR_PROGRAM_OF_GX);
    let (hrp, version, program) = bech32::decode_segwit(&address).unwrap();
    assert_eq!(hrp, "bc");
    assert_eq!(version, 1);
    // the output key is a curve x-coordinate
    assert!(secp256k1().point_from_x_checked(&program, true).is_ok());
}

#[test]
fn test_p2tr_vectors() {
    for (scalar_hex, expected) in P2TR_ADDRESSES {
        let key = PrivateKey::from_hex(scalar_hex).unwrap();
        assert_eq!(key.address_of(AddressType::P2tr).unwrap(), expected, "{scalar_hex}");
        // the result does not depend on the key's compression flag
        assert_eq!(
            key.with_compressed(false).address_of(AddressType::P2tr).unwrap(),
            expected
        );
    }
}

#[test]
fn test_rust_bitcoin_wif_vector() {
    let key = PrivateKey::from_wif(RUST_BITCOIN_WIF.wif).unwrap();
    assert_eq!(key.is_compressed(), RUST_BITCOIN_WIF.compressed);
    assert_eq!(key.public_key().format(), KeyFormat::Uncompressed);
    assert_eq!(key.public_key().to_string(), RUST_BITCOIN_WIF.pubkey);
    assert_eq!(
        key.address_of(AddressType::P2pkhUncompressed).unwrap(),
        RUST_BITCOIN_WIF.address
    );
    assert_eq!(key.to_wif().as_str(), RUST_BITCOIN_WIF.wif);
}

#[test]
fn test_eip55_vectors() {
    for expected in EIP55_ADDRESSES {
        assert_eq!(eip55_checksum(&expected.to_ascii_lowercase()).unwrap(), expected);
    }
}

#[test]
fn test_bip38_decrypt_vectors() {
    for vector in &BIP38_VECTORS {
        let key = PrivateKey::from_bip38(vector.encrypted, vector.passphrase).unwrap();
        assert_eq!(key.to_hex().as_str(), vector.hex);
        assert_eq!(key.is_compressed(), vector.compressed);
        assert_eq!(key.to_wif().as_str(), vector.wif);
    }
}

#[test]
fn test_bip38_encrypt_vectors() {
    // encryption is deterministic: the salt comes from the key itself
    for vector in &BIP38_VECTORS {
        let key = PrivateKey::from_wif(vector.wif).unwrap();
        assert_eq!(key.to_bip38(vector.passphrase).unwrap(), vector.encrypted);
    }
}

#[test]
fn test_bip38_wrong_passphrase() {
    let vector = &BIP38_VECTORS[1];
    assert_eq!(
        bip38::decrypt(vector.encrypted, "TestingOneTwoFour", &Bip38Params::default())
            .unwrap_err(),
        Error::WrongPassphrase
    );

    let mut km = KeyMaterial::new();
    assert_eq!(
        km.set_bip38(vector.encrypted, "").unwrap_err(),
        Error::WrongPassphrase
    );
    assert!(!km.is_initialized());
}

#[test]
fn test_key_material_lifecycle() {
    let mut km = KeyMaterial::new();
    assert_eq!(km.address().unwrap_err(), Error::KeyNotInitialized);

    km.set_wif(BIP38_VECTORS[1].wif).unwrap();
    assert!(km.is_initialized());
    assert!(km.is_compressed());
    assert_eq!(km.to_hex().unwrap().as_str(), BIP38_VECTORS[1].hex);

    km.set_compressed(false);
    assert_eq!(km.to_wif().unwrap().as_str(), BIP38_VECTORS[0].wif);
}
