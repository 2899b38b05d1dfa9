//! PBKDF2-HMAC-SHA256 known-answer tests (RFC 7914 §11 and the widely
//! published `password`/`salt` vectors), truncated to the 32-byte output.

use cryptolab_core::derive_stretched_key;

#[test]
fn rfc7914_passwd_salt_one_iteration() {
    assert_eq!(
        derive_stretched_key("passwd", "salt", 1).expect("derive"),
        "55ac046e56e3089fec1691c22544b605f94185216dde0465e68b9d57c20dacbc"
    );
}

#[test]
fn password_salt_vectors() {
    let cases = [
        (1, "120fb6cffcf8b32c43e7225256c4f837a86548c92ccc35480805987cb70be17b"),
        (2, "ae4d0c95af6b46d32d0adff928f06dd02a303f8ef3c251dfd6e2d85a95474c43"),
        (4096, "c5e478d59288c841aa530db6845c4c8d962893a001ce4e11a4963873aa98134a"),
    ];
    for (iterations, expected) in cases {
        assert_eq!(
            derive_stretched_key("password", "salt", iterations).expect("derive"),
            expected,
            "iterations = {iterations}"
        );
    }
}
