#![no_main]

use ember_core::{signer, Signature};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Need a public key, a signature, and at least an empty message
    if data.len() < 96 {
        return;
    }

    let public_key: [u8; 32] = data[..32].try_into().unwrap_or([0u8; 32]);
    let signature = Signature::from_bytes(data[32..96].try_into().unwrap_or([0u8; 64]));

    // Arbitrary keys and signatures must fail cleanly, never panic
    let _ = signer::verify(&public_key, &data[96..], &signature);
});
