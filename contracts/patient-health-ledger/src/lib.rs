#![no_std]

//! Simulated permissioned-ledger access-control layer for health records:
//! per-patient append-only chains of record references, an off-chain
//! record store addressed by content hash, time-bound patient-to-doctor
//! access grants, and an append-only audit log covering every
//! permission-sensitive action.

mod access;
mod audit;
mod error;
mod events;
mod identity;
mod ledger;
mod records;
mod research;
mod seed;
mod storage;
mod types;
mod utils;

#[cfg(test)]
mod tests;

use soroban_sdk::{contract, contractimpl, BytesN, Env, String, Vec};

pub use error::ContractError;
pub use events::{AccessGrantedEvent, AccessRevokedEvent, LoginEvent, RecordViewedEvent};
pub use types::{
    AccessGrant, AuditAction, AuditEntry, Block, ClinicalEntry, CodeableConcept, DiagnosisCount,
    HealthRecord, HealthRecordRef, MedicationIntent, MedicationRequest, MedicationStatus,
    Observation, ObservationStatus, PartyRef, Role, User,
};

#[contract]
pub struct PatientHealthLedger;

/// The access-control gateway. Every entry point below is total: failures
/// of authentication, authorization and lookup all surface as an empty
/// result, never as a panic.
#[contractimpl]
impl PatientHealthLedger {
    /// Seeds the fixed demo users, records and chains. State lives only
    /// for the lifetime of the environment.
    pub fn initialize(env: Env) -> Result<(), ContractError> {
        if storage::is_initialized(&env) {
            return Err(ContractError::AlreadyInitialized);
        }
        seed::seed(&env);
        storage::set_initialized(&env);
        Ok(())
    }

    /// Exact-match login. Writes a `LoginSuccess` or `LoginFail` audit
    /// entry either way.
    pub fn authenticate(env: Env, national_id: String, secret: String) -> Option<User> {
        identity::authenticate(&env, &national_id, &secret)
    }

    /// On-chain reference list for a patient, genesis first. Reference
    /// metadata is not treated as sensitive, so any caller may read it;
    /// a stricter policy could tighten this to patient, granted doctor
    /// and auditor.
    pub fn get_health_chain(
        env: Env,
        patient_id: String,
        requester_id: String,
    ) -> Option<Vec<Block>> {
        let _ = requester_id;
        Some(ledger::get_chain(&env, &patient_id))
    }

    /// Off-chain payload read, permitted for the patient themselves, an
    /// Auditor, or a requester holding an active grant for the patient.
    pub fn get_health_record(
        env: Env,
        record_hash: BytesN<32>,
        patient_id: String,
        requester_id: String,
    ) -> Option<HealthRecord> {
        records::get_health_record(&env, &record_hash, &patient_id, &requester_id)
    }

    /// Grants `doctor_id` access to `patient_id`'s records for the given
    /// number of hours, replacing any prior grant for the pair.
    pub fn grant_access(env: Env, patient_id: String, doctor_id: String, duration_hours: u64) {
        access::grant(&env, &patient_id, &doctor_id, duration_hours);
    }

    pub fn revoke_access(env: Env, patient_id: String, doctor_id: String) {
        access::revoke(&env, &patient_id, &doctor_id);
    }

    /// Active (non-expired) grant for the pair, if any.
    pub fn get_access_status(
        env: Env,
        patient_id: String,
        doctor_id: String,
    ) -> Option<AccessGrant> {
        access::active_grant(&env, &patient_id, &doctor_id)
    }

    pub fn get_all_grants_for_patient(env: Env, patient_id: String) -> Vec<AccessGrant> {
        access::active_grants_for_patient(&env, &patient_id)
    }

    pub fn get_doctors(env: Env) -> Vec<User> {
        identity::doctors(&env)
    }

    /// Full audit trail, newest first. Auditor role only.
    pub fn get_audit_trail(env: Env, requester_id: String) -> Option<Vec<AuditEntry>> {
        let requester = identity::find_user(&env, &requester_id)?;
        audit::trail(&env, &requester)
    }

    /// Aggregated diagnosis counts with no per-patient breakdown.
    /// Researcher role only.
    pub fn get_anonymized_data(env: Env, requester_id: String) -> Option<Vec<DiagnosisCount>> {
        let requester = identity::find_user(&env, &requester_id)?;
        research::anonymized_diagnosis_counts(&env, &requester)
    }
}
