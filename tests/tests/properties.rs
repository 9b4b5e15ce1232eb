//! Property-based tests for the codecs and the curve engine

use keyforge_algorithms::ec::k256::{scalar_mult_base_g, secp256k1, Scalar};
use keyforge_algorithms::encoding::base58;
use keyforge_algorithms::random::random_scalar;
use keyforge_api::{AddressType, Error, KeyFormat};
use keyforge_keys::{convert_public_key, derive_address, public_key, PrivateKey, PublicKey};
use num_bigint::BigUint;
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// Valid private keys, drawn through the library's own generator so the
/// distribution covers the whole of [1, n-1]
fn private_scalar() -> impl Strategy<Value = Scalar> {
    any::<[u8; 32]>().prop_map(|seed| {
        random_scalar(&mut ChaCha20Rng::from_seed(seed)).expect("ChaCha20 never fails")
    })
}

fn address_type() -> impl Strategy<Value = AddressType> {
    (0u8..6).prop_map(|ordinal| AddressType::try_from(ordinal).unwrap())
}

proptest! {
    #[test]
    fn base58check_roundtrip(zeros in 0usize..8, body in prop::collection::vec(any::<u8>(), 0..64)) {
        let mut data = vec![0u8; zeros];
        data.extend_from_slice(&body);

        let text = base58::encode_check(&data);
        // one '1' per leading zero byte; the checksum never starts the body
        let leading_ones = text.chars().take_while(|&c| c == '1').count();
        prop_assert!(leading_ones >= zeros);
        if body.first().map_or(false, |&b| b != 0) {
            prop_assert_eq!(leading_ones, zeros);
        }
        prop_assert_eq!(base58::decode_check(&text).unwrap(), data);
    }

    #[test]
    fn base58_leading_zeros_map_to_ones(zeros in 0usize..16, first in 1u8..=255, rest in prop::collection::vec(any::<u8>(), 0..32)) {
        let mut data = vec![0u8; zeros];
        data.push(first);
        data.extend_from_slice(&rest);

        let text = base58::encode(&data);
        prop_assert_eq!(text.chars().take_while(|&c| c == '1').count(), zeros);
        prop_assert_eq!(base58::decode(&text).unwrap(), data);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn wif_roundtrip_keeps_scalar_and_flag(scalar in private_scalar(), compressed in any::<bool>()) {
        let key = PrivateKey::from_scalar(scalar).with_compressed(compressed);
        let back = PrivateKey::from_wif(&key.to_wif()).unwrap();
        prop_assert_eq!(back.scalar(), key.scalar());
        prop_assert_eq!(back.is_compressed(), compressed);
    }

    #[test]
    fn recovered_point_matches_original(scalar in private_scalar()) {
        let curve = secp256k1();
        let point = scalar_mult_base_g(&scalar);
        prop_assert!(curve.is_on_curve(point.x(), point.y()));

        let recovered = curve.point_from_x(&point.x_bytes(), !point.has_odd_y());
        prop_assert!(curve.is_on_curve(recovered.x(), recovered.y()));
        prop_assert_eq!(&recovered, &point);

        let checked = curve.point_from_x_checked(&point.x_bytes(), !point.has_odd_y()).unwrap();
        prop_assert_eq!(checked, point);
    }

    #[test]
    fn codec_roundtrip(scalar in private_scalar()) {
        let compressed = public_key(&scalar, KeyFormat::Compressed);
        let uncompressed = public_key(&scalar, KeyFormat::Uncompressed);

        prop_assert_eq!(
            convert_public_key(compressed.as_bytes(), KeyFormat::Uncompressed).unwrap(),
            uncompressed.as_bytes().to_vec()
        );
        prop_assert_eq!(
            convert_public_key(uncompressed.as_bytes(), KeyFormat::Compressed).unwrap(),
            compressed.as_bytes().to_vec()
        );
        prop_assert_eq!(PublicKey::from_slice(compressed.as_bytes()).unwrap(), compressed);
    }

    #[test]
    fn address_derivation_is_deterministic(scalar in private_scalar(), kind in address_type()) {
        let key = public_key(&scalar, KeyFormat::Compressed);
        let first = derive_address(key.as_bytes(), kind).unwrap();
        let second = derive_address(key.as_bytes(), kind).unwrap();
        prop_assert_eq!(&first, &second);

        // the input encoding never changes the result
        let expanded = key.to_format(KeyFormat::Uncompressed);
        prop_assert_eq!(derive_address(expanded.as_bytes(), kind).unwrap(), first);
    }

    #[test]
    fn group_order_annihilates(scalar in private_scalar()) {
        let curve = secp256k1();
        let point = scalar_mult_base_g(&scalar);
        prop_assert!(curve.scalar_mult(&point, curve.n()).is_identity());

        // k·G + (n-k)·G = O
        let complement = Scalar::from_biguint(&(curve.n() - scalar.to_biguint())).unwrap();
        let sum = curve.add(&point, &scalar_mult_base_g(&complement));
        prop_assert!(sum.is_identity());
    }
}

#[test]
fn scalar_boundaries() {
    let n = secp256k1().n().clone();
    assert_eq!(PrivateKey::from_biguint(&BigUint::from(0u32)), Err(Error::ScalarOutOfRange));
    assert_eq!(PrivateKey::from_biguint(&n), Err(Error::ScalarOutOfRange));
    assert!(PrivateKey::from_biguint(&(n - 1u32)).is_ok());
}
