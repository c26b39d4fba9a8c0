use soroban_sdk::{BytesN, Env, String, Vec};

use crate::storage;
use crate::types::{AuditAction, AuditEntry, Role, User};
use crate::utils;

/// Appends one entry to the global audit log. The accessor identity is
/// copied into the entry so later identity changes never rewrite history.
pub fn log(
    env: &Env,
    accessor: &User,
    patient_id: &String,
    action: AuditAction,
    record_hash: Option<BytesN<32>>,
    details: String,
) {
    let sequence = storage::audit_count(env).saturating_add(1);
    let entry = AuditEntry {
        id: sequence,
        timestamp: utils::now(env),
        accessor_id: accessor.id.clone(),
        accessor_name: accessor.name.clone(),
        accessor_role: accessor.role.clone(),
        patient_id: patient_id.clone(),
        action,
        record_hash,
        details,
    };
    storage::append_audit_entry(env, &entry);
}

/// Full trail, newest first, for Auditor-role requesters only. Walking the
/// sequence numbers downward means entries sharing a timestamp come out in
/// reverse insertion order.
pub fn trail(env: &Env, requester: &User) -> Option<Vec<AuditEntry>> {
    if requester.role != Role::Auditor {
        return None;
    }

    let count = storage::audit_count(env);
    let mut entries = Vec::new(env);
    let mut sequence = count;
    while sequence >= 1 {
        if let Some(entry) = storage::get_audit_entry(env, sequence) {
            entries.push_back(entry);
        }
        sequence -= 1;
    }
    Some(entries)
}
