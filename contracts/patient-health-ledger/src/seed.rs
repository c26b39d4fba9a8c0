use soroban_sdk::{Env, String, Vec};

use crate::types::{
    ClinicalEntry, CodeableConcept, HealthRecord, MedicationIntent, MedicationRequest,
    MedicationStatus, Observation, ObservationStatus, PartyRef, Role, User,
};
use crate::utils;
use crate::{identity, ledger, records, storage};

const DAY: u64 = 24 * 60 * 60;

/// Seeds the fixed demo state: six identities, three off-chain records and
/// the two pre-existing patient chains (two blocks for the first patient,
/// one for the second). Seeding writes no audit entries; the log starts
/// empty.
pub fn seed(env: &Env) {
    seed_users(env);
    for patient_id in storage::patient_ids(env).iter() {
        ledger::ensure_chain_exists(env, &patient_id);
    }
    seed_chains(env);
}

fn seed_users(env: &Env) {
    let users = [
        ("patient_01", "Rohan Sharma", Role::Patient, "111122223333", "pass1"),
        ("patient_02", "Priya Patel", Role::Patient, "444455556666", "pass2"),
        ("doctor_01", "Dr. Anjali Rao", Role::Doctor, "777788889999", "doc1"),
        ("doctor_02", "Dr. Vikram Singh", Role::Doctor, "101010101010", "doc2"),
        ("auditor_01", "Sunita Gupta", Role::Auditor, "121212121212", "audit1"),
        ("researcher_01", "Amit Kumar", Role::Researcher, "131313131313", "res1"),
    ];
    for (id, name, role, national_id, secret) in users {
        identity::register_user(
            env,
            &User {
                id: String::from_str(env, id),
                name: String::from_str(env, name),
                role,
                national_id: String::from_str(env, national_id),
                secret: String::from_str(env, secret),
            },
        );
    }
}

fn seed_chains(env: &Env) {
    let now = utils::now(env);
    let patient_01 = String::from_str(env, "patient_01");
    let patient_02 = String::from_str(env, "patient_02");
    let doctor_01 = String::from_str(env, "doctor_01");
    let doctor_02 = String::from_str(env, "doctor_02");

    let fever = observation_record(
        env,
        party(env, "patient_01", "Rohan Sharma"),
        party(env, "doctor_01", "Dr. Anjali Rao"),
        "City Hospital",
        now.saturating_sub(30 * DAY),
        "Viral Fever",
        "Patient/patient_01",
        "High temperature, fatigue, headache.",
    );
    let prescription = medication_record(
        env,
        party(env, "patient_01", "Rohan Sharma"),
        party(env, "doctor_01", "Dr. Anjali Rao"),
        "City Hospital",
        now.saturating_sub(10 * DAY),
        "Paracetamol 500mg, twice a day for 3 days",
        "Patient/patient_01",
    );
    let cold = observation_record(
        env,
        party(env, "patient_02", "Priya Patel"),
        party(env, "doctor_02", "Dr. Vikram Singh"),
        "General Clinic",
        now.saturating_sub(5 * DAY),
        "Common Cold",
        "Patient/patient_02",
        "Sore throat and runny nose.",
    );

    let fever_hash = records::put(env, &fever);
    let prescription_hash = records::put(env, &prescription);
    let cold_hash = records::put(env, &cold);

    ledger::append(env, &patient_01, &doctor_01, &fever_hash);
    ledger::append(env, &patient_01, &doctor_01, &prescription_hash);
    ledger::append(env, &patient_02, &doctor_02, &cold_hash);
}

fn party(env: &Env, id: &str, name: &str) -> PartyRef {
    PartyRef {
        id: String::from_str(env, id),
        name: String::from_str(env, name),
    }
}

#[allow(clippy::too_many_arguments)]
fn observation_record(
    env: &Env,
    patient: PartyRef,
    doctor: PartyRef,
    hospital: &str,
    timestamp: u64,
    diagnosis: &str,
    subject: &str,
    narrative: &str,
) -> HealthRecord {
    let mut entries = Vec::new(env);
    entries.push_back(ClinicalEntry::Observation(Observation {
        status: ObservationStatus::Final,
        code: CodeableConcept {
            text: String::from_str(env, diagnosis),
        },
        subject: String::from_str(env, subject),
        narrative: Some(String::from_str(env, narrative)),
    }));
    HealthRecord {
        id: utils::zero_hash(env),
        patient,
        doctor,
        hospital: String::from_str(env, hospital),
        timestamp,
        entries,
    }
}

fn medication_record(
    env: &Env,
    patient: PartyRef,
    doctor: PartyRef,
    hospital: &str,
    timestamp: u64,
    medication: &str,
    subject: &str,
) -> HealthRecord {
    let mut entries = Vec::new(env);
    entries.push_back(ClinicalEntry::Medication(MedicationRequest {
        status: MedicationStatus::Active,
        intent: MedicationIntent::Order,
        medication: CodeableConcept {
            text: String::from_str(env, medication),
        },
        subject: String::from_str(env, subject),
    }));
    HealthRecord {
        id: utils::zero_hash(env),
        patient,
        doctor,
        hospital: String::from_str(env, hospital),
        timestamp,
        entries,
    }
}
