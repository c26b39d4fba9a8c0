use soroban_sdk::{BytesN, Env};

pub fn now(env: &Env) -> u64 {
    env.ledger().timestamp()
}

/// All-zero 32-byte sentinel used for genesis linkage and genesis record
/// references.
pub fn zero_hash(env: &Env) -> BytesN<32> {
    BytesN::from_array(env, &[0u8; 32])
}

pub fn hours_to_seconds(hours: u64) -> u64 {
    hours.saturating_mul(60 * 60)
}
