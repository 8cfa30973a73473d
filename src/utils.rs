//! Utility functions for id generation and content addressing

use bech32::Bech32m;
use uuid7::uuid7;

// construct a unique id then encode using bech32 with the given prefix
pub fn new_bech32_id(hrp: &str) -> anyhow::Result<String> {
    let hrp = bech32::Hrp::parse(hrp)?;
    let encode = bech32::encode::<Bech32m>(hrp, uuid7().as_bytes())?;
    Ok(encode)
}

/// Encode a value into CBOR and hash the bytes. The hash becomes the
/// content-addressable key for the encoded record.
pub fn encode_and_hash<T: minicbor::Encode<()>>(value: &T) -> anyhow::Result<(String, Vec<u8>)> {
    let cbor = minicbor::to_vec(value)?;
    let hash = sha256::digest(&cbor);

    Ok((hash, cbor))
}
