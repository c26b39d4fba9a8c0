use soroban_sdk::{xdr::ToXdr, BytesN, Env, String};

use crate::storage;
use crate::types::{AuditAction, HealthRecord, Role};
use crate::utils;
use crate::{access, audit, events, identity};

/// Content hash of a record: SHA-256 over the XDR encoding with the id
/// zeroed, so the digest does not depend on any preassigned id.
pub fn content_hash(env: &Env, record: &HealthRecord) -> BytesN<32> {
    let mut content = record.clone();
    content.id = utils::zero_hash(env);
    let buf = content.to_xdr(env);
    env.crypto().sha256(&buf).into()
}

/// Stores a record under its content hash and returns that hash.
pub fn put(env: &Env, record: &HealthRecord) -> BytesN<32> {
    let hash = content_hash(env, record);
    let mut stored = record.clone();
    stored.id = hash.clone();
    storage::set_record(env, &stored);
    storage::add_record_to_index(env, &hash);
    hash
}

/// Direct lookup with no authorization; the policy lives in
/// [`get_health_record`].
pub fn get(env: &Env, record_hash: &BytesN<32>) -> Option<HealthRecord> {
    storage::get_record(env, record_hash)
}

/// Gateway read: permits self-access, Auditor oversight, and doctors
/// holding an active grant for the patient. Permitted reads are logged
/// before the payload lookup, so a permitted read of an unknown hash still
/// leaves an audit entry. Denials return nothing and are not logged.
pub fn get_health_record(
    env: &Env,
    record_hash: &BytesN<32>,
    patient_id: &String,
    requester_id: &String,
) -> Option<HealthRecord> {
    let requester = identity::find_user(env, requester_id)?;

    let permitted = requester.id == *patient_id
        || requester.role == Role::Auditor
        || access::is_active(env, patient_id, &requester.id, utils::now(env));
    if !permitted {
        return None;
    }

    audit::log(
        env,
        &requester,
        patient_id,
        AuditAction::ViewRecord,
        Some(record_hash.clone()),
        String::from_str(env, "Accessed off-chain record payload."),
    );
    events::emit_record_viewed(env, &requester.id, patient_id, record_hash);

    get(env, record_hash)
}
