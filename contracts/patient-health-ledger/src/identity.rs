use soroban_sdk::{Env, String, Vec};

use crate::storage;
use crate::types::{AuditAction, Role, User};
use crate::{audit, events};

/// Registers a user and maintains the per-role indexes. Only called during
/// bootstrap; identities are immutable afterwards.
pub fn register_user(env: &Env, user: &User) {
    storage::set_user(env, user);
    match user.role {
        Role::Doctor => storage::add_doctor_id(env, &user.id),
        Role::Patient => storage::add_patient_id(env, &user.id),
        _ => {}
    }
}

pub fn find_user(env: &Env, id: &String) -> Option<User> {
    storage::get_user(env, id)
}

pub fn find_by_national_id(env: &Env, national_id: &String) -> Option<User> {
    let id = storage::user_id_by_national_id(env, national_id)?;
    storage::get_user(env, &id)
}

/// Exact-match credential check. Secrets are opaque strings in this
/// simulated scope; there is no lockout or throttling.
pub fn authenticate(env: &Env, national_id: &String, secret: &String) -> Option<User> {
    if let Some(user) = find_by_national_id(env, national_id) {
        if user.secret == *secret {
            audit::log(
                env,
                &user,
                &user.id.clone(),
                AuditAction::LoginSuccess,
                None,
                String::from_str(env, "User logged in successfully."),
            );
            events::emit_login(env, &user.id, true);
            return Some(user);
        }
    }

    // Attribute the failure to whatever identity the external id resolves
    // to, or to the "unknown" placeholder when none does.
    let accessor = match find_by_national_id(env, national_id) {
        Some(user) => user,
        None => unknown_accessor(env, national_id),
    };
    audit::log(
        env,
        &accessor,
        &accessor.id.clone(),
        AuditAction::LoginFail,
        None,
        String::from_str(env, "Failed login attempt."),
    );
    events::emit_login(env, &accessor.id, false);
    None
}

pub fn doctors(env: &Env) -> Vec<User> {
    let mut result = Vec::new(env);
    for id in storage::doctor_ids(env).iter() {
        if let Some(user) = storage::get_user(env, &id) {
            result.push_back(user);
        }
    }
    result
}

fn unknown_accessor(env: &Env, national_id: &String) -> User {
    User {
        id: String::from_str(env, "unknown"),
        name: String::from_str(env, "unknown"),
        role: Role::Patient,
        national_id: national_id.clone(),
        secret: String::from_str(env, ""),
    }
}
