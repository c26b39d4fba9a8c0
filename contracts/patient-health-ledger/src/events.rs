use soroban_sdk::{contracttype, BytesN, Env, String, Symbol};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LoginEvent {
    pub user_id: String,
    pub success: bool,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AccessGrantedEvent {
    pub patient_id: String,
    pub doctor_id: String,
    pub duration_hours: u64,
    pub expires_at: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AccessRevokedEvent {
    pub patient_id: String,
    pub doctor_id: String,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RecordViewedEvent {
    pub accessor_id: String,
    pub patient_id: String,
    pub record_hash: BytesN<32>,
    pub timestamp: u64,
}

pub fn emit_login(env: &Env, user_id: &String, success: bool) {
    let event = LoginEvent {
        user_id: user_id.clone(),
        success,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish((Symbol::new(env, "login"),), event);
}

pub fn emit_access_granted(
    env: &Env,
    patient_id: &String,
    doctor_id: &String,
    duration_hours: u64,
    expires_at: u64,
) {
    let event = AccessGrantedEvent {
        patient_id: patient_id.clone(),
        doctor_id: doctor_id.clone(),
        duration_hours,
        expires_at,
    };
    env.events()
        .publish((Symbol::new(env, "access_granted"),), event);
}

pub fn emit_access_revoked(env: &Env, patient_id: &String, doctor_id: &String) {
    let event = AccessRevokedEvent {
        patient_id: patient_id.clone(),
        doctor_id: doctor_id.clone(),
        timestamp: env.ledger().timestamp(),
    };
    env.events()
        .publish((Symbol::new(env, "access_revoked"),), event);
}

pub fn emit_record_viewed(
    env: &Env,
    accessor_id: &String,
    patient_id: &String,
    record_hash: &BytesN<32>,
) {
    let event = RecordViewedEvent {
        accessor_id: accessor_id.clone(),
        patient_id: patient_id.clone(),
        record_hash: record_hash.clone(),
        timestamp: env.ledger().timestamp(),
    };
    env.events()
        .publish((Symbol::new(env, "record_viewed"),), event);
}
