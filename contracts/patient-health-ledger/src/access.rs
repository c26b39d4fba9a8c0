use soroban_sdk::{Env, String, Vec};

use crate::storage;
use crate::types::{AccessGrant, AuditAction, Role, User};
use crate::utils;
use crate::{audit, events, identity};

/// Creates or replaces the grant for (patient, doctor). Requires the
/// patient id to resolve to a Patient-role identity; otherwise the call is
/// a silent no-op. Replacing an existing grant logs the revoke-then-grant
/// pair.
pub fn grant(env: &Env, patient_id: &String, doctor_id: &String, duration_hours: u64) {
    let patient = match patient_role_user(env, patient_id) {
        Some(user) => user,
        None => return,
    };

    remove_and_log(env, &patient, doctor_id);

    let expiry_timestamp = utils::now(env).saturating_add(utils::hours_to_seconds(duration_hours));
    let grant = AccessGrant {
        patient_id: patient_id.clone(),
        doctor_id: doctor_id.clone(),
        expiry_timestamp,
    };
    storage::set_grant(env, &grant);

    audit::log(
        env,
        &patient,
        patient_id,
        AuditAction::GrantAccess,
        None,
        String::from_str(env, "Granted time-limited record access to doctor."),
    );
    events::emit_access_granted(env, patient_id, doctor_id, duration_hours, expiry_timestamp);
}

/// Removes the grant for the pair if present. No-op, with no audit entry,
/// when the patient id is not a Patient identity or no grant exists.
pub fn revoke(env: &Env, patient_id: &String, doctor_id: &String) {
    let patient = match patient_role_user(env, patient_id) {
        Some(user) => user,
        None => return,
    };
    remove_and_log(env, &patient, doctor_id);
}

/// True iff a grant exists for the pair with an expiry strictly in the
/// future. Expired grants read as absent without cleanup.
pub fn is_active(env: &Env, patient_id: &String, doctor_id: &String, now: u64) -> bool {
    match storage::get_grant(env, patient_id, doctor_id) {
        Some(grant) => grant.expiry_timestamp > now,
        None => false,
    }
}

pub fn active_grant(env: &Env, patient_id: &String, doctor_id: &String) -> Option<AccessGrant> {
    let grant = storage::get_grant(env, patient_id, doctor_id)?;
    if grant.expiry_timestamp > utils::now(env) {
        Some(grant)
    } else {
        None
    }
}

pub fn active_grants_for_patient(env: &Env, patient_id: &String) -> Vec<AccessGrant> {
    let now = utils::now(env);
    let mut grants = Vec::new(env);
    for doctor_id in storage::patient_grant_doctors(env, patient_id).iter() {
        if let Some(grant) = storage::get_grant(env, patient_id, &doctor_id) {
            if grant.expiry_timestamp > now {
                grants.push_back(grant);
            }
        }
    }
    grants
}

fn patient_role_user(env: &Env, patient_id: &String) -> Option<User> {
    let user = identity::find_user(env, patient_id)?;
    if user.role == Role::Patient {
        Some(user)
    } else {
        None
    }
}

fn remove_and_log(env: &Env, patient: &User, doctor_id: &String) {
    if storage::remove_grant(env, &patient.id, doctor_id) {
        audit::log(
            env,
            patient,
            &patient.id.clone(),
            AuditAction::RevokeAccess,
            None,
            String::from_str(env, "Revoked doctor record access."),
        );
        events::emit_access_revoked(env, &patient.id, doctor_id);
    }
}
