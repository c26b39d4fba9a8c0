use soroban_sdk::{contracttype, BytesN, Env, String, Vec};

use crate::types::{AccessGrant, AuditEntry, Block, HealthRecord, User};

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Initialized,
    User(String),
    UserByNationalId(String),
    Doctors,
    Patients,
    Chain(String),
    Record(BytesN<32>),
    RecordIndex,
    Grant(String, String),
    PatientGrants(String),
    AuditEntry(u64),
    AuditCount,
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Initialized)
}

pub fn set_initialized(env: &Env) {
    env.storage().instance().set(&DataKey::Initialized, &true);
}

// --- Identity ---

pub fn get_user(env: &Env, id: &String) -> Option<User> {
    env.storage().persistent().get(&DataKey::User(id.clone()))
}

pub fn set_user(env: &Env, user: &User) {
    env.storage()
        .persistent()
        .set(&DataKey::User(user.id.clone()), user);
    env.storage().persistent().set(
        &DataKey::UserByNationalId(user.national_id.clone()),
        &user.id,
    );
}

pub fn user_id_by_national_id(env: &Env, national_id: &String) -> Option<String> {
    env.storage()
        .persistent()
        .get(&DataKey::UserByNationalId(national_id.clone()))
}

pub fn doctor_ids(env: &Env) -> Vec<String> {
    env.storage()
        .persistent()
        .get(&DataKey::Doctors)
        .unwrap_or_else(|| Vec::new(env))
}

pub fn add_doctor_id(env: &Env, id: &String) {
    let mut ids = doctor_ids(env);
    ids.push_back(id.clone());
    env.storage().persistent().set(&DataKey::Doctors, &ids);
}

pub fn patient_ids(env: &Env) -> Vec<String> {
    env.storage()
        .persistent()
        .get(&DataKey::Patients)
        .unwrap_or_else(|| Vec::new(env))
}

pub fn add_patient_id(env: &Env, id: &String) {
    let mut ids = patient_ids(env);
    ids.push_back(id.clone());
    env.storage().persistent().set(&DataKey::Patients, &ids);
}

// --- Ledger ---

pub fn get_chain(env: &Env, patient_id: &String) -> Option<Vec<Block>> {
    env.storage()
        .persistent()
        .get(&DataKey::Chain(patient_id.clone()))
}

pub fn set_chain(env: &Env, patient_id: &String, chain: &Vec<Block>) {
    env.storage()
        .persistent()
        .set(&DataKey::Chain(patient_id.clone()), chain);
}

// --- Off-chain record store ---

pub fn get_record(env: &Env, record_hash: &BytesN<32>) -> Option<HealthRecord> {
    env.storage()
        .persistent()
        .get(&DataKey::Record(record_hash.clone()))
}

pub fn set_record(env: &Env, record: &HealthRecord) {
    env.storage()
        .persistent()
        .set(&DataKey::Record(record.id.clone()), record);
}

pub fn record_index(env: &Env) -> Vec<BytesN<32>> {
    env.storage()
        .persistent()
        .get(&DataKey::RecordIndex)
        .unwrap_or_else(|| Vec::new(env))
}

pub fn add_record_to_index(env: &Env, record_hash: &BytesN<32>) {
    let mut index = record_index(env);
    for hash in index.iter() {
        if hash == *record_hash {
            return;
        }
    }
    index.push_back(record_hash.clone());
    env.storage().persistent().set(&DataKey::RecordIndex, &index);
}

// --- Access grants ---

pub fn get_grant(env: &Env, patient_id: &String, doctor_id: &String) -> Option<AccessGrant> {
    env.storage()
        .persistent()
        .get(&DataKey::Grant(patient_id.clone(), doctor_id.clone()))
}

pub fn set_grant(env: &Env, grant: &AccessGrant) {
    env.storage().persistent().set(
        &DataKey::Grant(grant.patient_id.clone(), grant.doctor_id.clone()),
        grant,
    );
    let mut doctors = patient_grant_doctors(env, &grant.patient_id);
    for id in doctors.iter() {
        if id == grant.doctor_id {
            return;
        }
    }
    doctors.push_back(grant.doctor_id.clone());
    env.storage().persistent().set(
        &DataKey::PatientGrants(grant.patient_id.clone()),
        &doctors,
    );
}

/// Removes the grant for the pair. Returns true when an entry existed.
pub fn remove_grant(env: &Env, patient_id: &String, doctor_id: &String) -> bool {
    let key = DataKey::Grant(patient_id.clone(), doctor_id.clone());
    if !env.storage().persistent().has(&key) {
        return false;
    }
    env.storage().persistent().remove(&key);

    let doctors = patient_grant_doctors(env, patient_id);
    let mut remaining = Vec::new(env);
    for id in doctors.iter() {
        if id != *doctor_id {
            remaining.push_back(id);
        }
    }
    env.storage()
        .persistent()
        .set(&DataKey::PatientGrants(patient_id.clone()), &remaining);
    true
}

pub fn patient_grant_doctors(env: &Env, patient_id: &String) -> Vec<String> {
    env.storage()
        .persistent()
        .get(&DataKey::PatientGrants(patient_id.clone()))
        .unwrap_or_else(|| Vec::new(env))
}

// --- Audit log ---

pub fn audit_count(env: &Env) -> u64 {
    env.storage()
        .persistent()
        .get(&DataKey::AuditCount)
        .unwrap_or(0)
}

pub fn get_audit_entry(env: &Env, sequence: u64) -> Option<AuditEntry> {
    env.storage()
        .persistent()
        .get(&DataKey::AuditEntry(sequence))
}

pub fn append_audit_entry(env: &Env, entry: &AuditEntry) {
    env.storage()
        .persistent()
        .set(&DataKey::AuditEntry(entry.id), entry);
    env.storage().persistent().set(&DataKey::AuditCount, &entry.id);
}
