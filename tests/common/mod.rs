//! Shared test fixtures
//!
//! All key material is generated per test run; nothing is checked in.

#![allow(dead_code)]

use pkcs8::PrivateKeyInfo;
use rand::rngs::OsRng;
use sha2::Digest;

/// A freshly generated self-signed identity (ECDSA P-256).
pub struct TestIdentity {
    pub cert_pem: String,
    pub cert_der: Vec<u8>,
    pub key_pem: String,
    pub key_der: Vec<u8>,
}

pub fn test_identity() -> TestIdentity {
    let key_pair = rcgen::KeyPair::generate().expect("generate key pair");
    let params = rcgen::CertificateParams::new(vec!["test.example.com".to_string()])
        .expect("certificate params");
    let cert = params.self_signed(&key_pair).expect("self-signed certificate");

    TestIdentity {
        cert_pem: cert.pem(),
        cert_der: cert.der().to_vec(),
        key_pem: key_pair.serialize_pem(),
        key_der: key_pair.serialize_der(),
    }
}

/// Certificate followed by unencrypted PKCS#8 key, the usual bundle layout.
pub fn pem_bundle(identity: &TestIdentity) -> Vec<u8> {
    format!("{}{}", identity.cert_pem, identity.key_pem).into_bytes()
}

/// Bundle with the key encrypted under `passphrase` (PBES2).
pub fn encrypted_pem_bundle(identity: &TestIdentity, passphrase: &str) -> Vec<u8> {
    format!(
        "{}{}",
        identity.cert_pem,
        encrypted_key_pem(identity, passphrase)
    )
    .into_bytes()
}

/// The identity's key as an ENCRYPTED PRIVATE KEY block.
pub fn encrypted_key_pem(identity: &TestIdentity, passphrase: &str) -> String {
    let info = PrivateKeyInfo::try_from(identity.key_der.as_slice()).expect("pkcs8 key");
    let encrypted = info
        .encrypt(OsRng, passphrase.as_bytes())
        .expect("encrypt key");
    encrypted
        .to_pem("ENCRYPTED PRIVATE KEY", pkcs8::LineEnding::LF)
        .expect("encode encrypted key")
        .to_string()
}

/// A PKCS#12 archive holding the identity, protected by `passphrase`.
pub fn pkcs12_archive(identity: &TestIdentity, passphrase: &str) -> Vec<u8> {
    let cert = p12_keystore::Certificate::from_der(&identity.cert_der).expect("certificate");

    let local_key_id = {
        let mut hasher = sha2::Sha256::new();
        hasher.update(&identity.cert_der);
        hasher.finalize().to_vec()
    };

    let chain =
        p12_keystore::PrivateKeyChain::new(identity.key_der.clone(), &local_key_id, vec![cert]);

    let mut keystore = p12_keystore::KeyStore::new();
    keystore.add_entry("test", p12_keystore::KeyStoreEntry::PrivateKeyChain(chain));
    keystore.writer(passphrase).write().expect("write archive")
}

/// An archive with a certificate entry but no private key chain.
pub fn certificate_only_archive(identity: &TestIdentity) -> Vec<u8> {
    let cert = p12_keystore::Certificate::from_der(&identity.cert_der).expect("certificate");

    let mut keystore = p12_keystore::KeyStore::new();
    keystore.add_entry("test", p12_keystore::KeyStoreEntry::Certificate(cert));
    keystore.writer("").write().expect("write archive")
}

/// A PKCS#1 RSA PRIVATE KEY block for a freshly generated 2048-bit key,
/// returned with the key itself for comparison after normalization.
pub fn rsa_pkcs1_key_pem() -> (String, rsa::RsaPrivateKey) {
    use rsa::pkcs1::EncodeRsaPrivateKey;

    let key = rsa::RsaPrivateKey::new(&mut OsRng, 2048).expect("generate rsa key");
    let der = key.to_pkcs1_der().expect("pkcs1 encoding");
    let block = ::pem::encode_config(
        &::pem::Pem::new("RSA PRIVATE KEY", der.as_bytes()),
        ::pem::EncodeConfig::new().set_line_ending(::pem::LineEnding::LF),
    );
    (block, key)
}

/// A SEC1 EC PRIVATE KEY block for a freshly generated P-384 key, returned
/// with the key itself for comparison after normalization.
pub fn p384_sec1_key_pem() -> (String, p384::SecretKey) {
    let secret = p384::SecretKey::random(&mut OsRng);
    let sec1 = secret.to_sec1_der().expect("sec1 encoding");
    let block = ::pem::encode_config(
        &::pem::Pem::new("EC PRIVATE KEY", sec1.to_vec()),
        ::pem::EncodeConfig::new().set_line_ending(::pem::LineEnding::LF),
    );
    (block, secret)
}

/// The identity's key re-encoded as a SEC1 EC PRIVATE KEY block.
pub fn sec1_key_pem(identity: &TestIdentity) -> String {
    use p256::pkcs8::DecodePrivateKey;

    let secret = p256::SecretKey::from_pkcs8_der(&identity.key_der).expect("p256 key from pkcs8");
    let sec1 = secret.to_sec1_der().expect("sec1 encoding");
    ::pem::encode_config(
        &::pem::Pem::new("EC PRIVATE KEY", sec1.to_vec()),
        ::pem::EncodeConfig::new().set_line_ending(::pem::LineEnding::LF),
    )
}
