//! Key material never shows up in `Debug` output.

use rand::rngs::StdRng;
use rand::SeedableRng;

use cryptolab_core::{
    export_private_key, generate_signing_key_pair, import_private_key, sign_and_bundle, KeyUsage,
    RsaModulus,
};

const PRIVATE_PEM: &str = include_str!("../fixtures/rsa2048_private.pem");

#[test]
fn private_key_handle_debug_is_masked() {
    let handle = import_private_key(PRIVATE_PEM, KeyUsage::Signing).expect("import");
    assert_eq!(format!("{handle:?}"), "PrivateKeyHandle(***)");
}

#[test]
fn exported_private_key_debug_is_masked() {
    let handle = import_private_key(PRIVATE_PEM, KeyUsage::Encryption).expect("import");
    let exported = export_private_key(&handle).expect("export");
    let debug = format!("{exported:?}");
    assert!(!debug.contains("BEGIN PRIVATE KEY"), "leaked: {debug}");
}

#[test]
fn key_pair_and_signature_bundle_debug_are_masked() {
    let mut rng = StdRng::seed_from_u64(0xD0);
    let pair = generate_signing_key_pair(&mut rng, RsaModulus::Rsa2048).expect("keygen");
    let pair_debug = format!("{pair:?}");
    assert!(pair_debug.contains("PrivateKeyHandle(***)"), "{pair_debug}");

    let bundle = sign_and_bundle(&mut rng, "masked", &pair).expect("sign");
    let bundle_debug = format!("{bundle:?}");
    assert!(!bundle_debug.contains(bundle.reveal_private_key()));
}
