use soroban_sdk::{xdr::ToXdr, Bytes, BytesN, Env, String, Vec};

use crate::storage;
use crate::types::{Block, HealthRecordRef};
use crate::utils;

/// Deterministic block fingerprint: SHA-256 over the XDR encoding of the
/// on-chain reference followed by the predecessor's hash. Any change to
/// either input changes the digest.
pub fn block_hash(env: &Env, data: &HealthRecordRef, previous_hash: &BytesN<32>) -> BytesN<32> {
    let mut buf: Bytes = data.clone().to_xdr(env);
    buf.extend_from_array(&previous_hash.to_array());
    env.crypto().sha256(&buf).into()
}

/// Idempotent genesis bootstrap: creates a one-block chain for the patient
/// if none exists. Safe to call repeatedly.
pub fn ensure_chain_exists(env: &Env, patient_id: &String) {
    if storage::get_chain(env, patient_id).is_some() {
        return;
    }

    let sentinel = utils::zero_hash(env);
    let data = HealthRecordRef {
        record_hash: sentinel.clone(),
        timestamp: utils::now(env),
        patient_id: patient_id.clone(),
        doctor_id: String::from_str(env, "system"),
    };
    let genesis = Block {
        hash: block_hash(env, &data, &sentinel),
        previous_hash: sentinel,
        timestamp: utils::now(env),
        data,
    };

    let mut chain = Vec::new(env);
    chain.push_back(genesis);
    storage::set_chain(env, patient_id, &chain);
}

/// Appends a reference block to the patient's chain and returns it. The
/// read-tail / hash / push sequence commits within one invocation, so the
/// predecessor linkage cannot be torn by interleaved appends.
pub fn append(
    env: &Env,
    patient_id: &String,
    doctor_id: &String,
    record_hash: &BytesN<32>,
) -> Block {
    ensure_chain_exists(env, patient_id);
    let mut chain = storage::get_chain(env, patient_id).unwrap_or_else(|| Vec::new(env));

    let previous_hash = match chain.last() {
        Some(tail) => tail.hash.clone(),
        None => utils::zero_hash(env),
    };
    let data = HealthRecordRef {
        record_hash: record_hash.clone(),
        timestamp: utils::now(env),
        patient_id: patient_id.clone(),
        doctor_id: doctor_id.clone(),
    };
    let block = Block {
        hash: block_hash(env, &data, &previous_hash),
        previous_hash,
        timestamp: utils::now(env),
        data,
    };

    chain.push_back(block.clone());
    storage::set_chain(env, patient_id, &chain);
    block
}

/// Full chain including genesis, lazily bootstrapping when absent. No
/// access check at this layer; authorization belongs to the gateway.
pub fn get_chain(env: &Env, patient_id: &String) -> Vec<Block> {
    ensure_chain_exists(env, patient_id);
    storage::get_chain(env, patient_id).unwrap_or_else(|| Vec::new(env))
}
