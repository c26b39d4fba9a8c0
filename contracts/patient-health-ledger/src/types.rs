use soroban_sdk::{contracttype, BytesN, String, Vec};

/// Roles recognized by the access-control policy
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Role {
    Patient,
    Doctor,
    Auditor,
    Researcher,
}

/// A registered identity. Credentials are opaque strings compared exactly;
/// there is no hashing or lockout in this simulated scope.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct User {
    pub id: String,
    pub name: String,
    pub role: Role,
    pub national_id: String,
    pub secret: String,
}

/// Display reference to a patient or doctor embedded in an off-chain record
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PartyRef {
    pub id: String,
    pub name: String,
}

/// Coded clinical concept, e.g. "Viral Fever"
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CodeableConcept {
    pub text: String,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ObservationStatus {
    Final,
    Preliminary,
    Corrected,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum MedicationStatus {
    Active,
    OnHold,
    Cancelled,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum MedicationIntent {
    Proposal,
    Plan,
    Order,
}

/// A clinical observation, e.g. a recorded diagnosis
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Observation {
    pub status: ObservationStatus,
    pub code: CodeableConcept,
    /// Reference to the subject, e.g. "Patient/patient_01"
    pub subject: String,
    pub narrative: Option<String>,
}

/// A prescription or medication order
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MedicationRequest {
    pub status: MedicationStatus,
    pub intent: MedicationIntent,
    pub medication: CodeableConcept,
    pub subject: String,
}

/// One entry in an off-chain record's clinical content
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ClinicalEntry {
    Observation(Observation),
    Medication(MedicationRequest),
}

/// On-chain reference to an off-chain record. Metadata only, never
/// clinical content.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HealthRecordRef {
    pub record_hash: BytesN<32>,
    pub timestamp: u64,
    pub patient_id: String,
    pub doctor_id: String,
}

/// A block in a patient's chain. The hash is a deterministic function of
/// `data` and `previous_hash`; genesis blocks carry the all-zero sentinel
/// in `previous_hash` and in `data.record_hash`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Block {
    pub hash: BytesN<32>,
    pub previous_hash: BytesN<32>,
    pub timestamp: u64,
    pub data: HealthRecordRef,
}

/// Full clinical payload held by the off-chain store. `id` equals the
/// record's content hash.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HealthRecord {
    pub id: BytesN<32>,
    pub patient: PartyRef,
    pub doctor: PartyRef,
    pub hospital: String,
    pub timestamp: u64,
    pub entries: Vec<ClinicalEntry>,
}

/// Time-bound authorization for a doctor to read a patient's records
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AccessGrant {
    pub patient_id: String,
    pub doctor_id: String,
    pub expiry_timestamp: u64,
}

/// Permission-sensitive actions recorded by the audit log
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AuditAction {
    LoginSuccess,
    LoginFail,
    ViewRecord,
    GrantAccess,
    RevokeAccess,
}

/// Append-only audit log entry. Accessor fields are a snapshot taken at
/// the time of the action, not a live reference.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuditEntry {
    pub id: u64,
    pub timestamp: u64,
    pub accessor_id: String,
    pub accessor_name: String,
    pub accessor_role: Role,
    /// Subject of the action, or "unknown" for unresolvable login attempts
    pub patient_id: String,
    pub action: AuditAction,
    pub record_hash: Option<BytesN<32>>,
    pub details: String,
}

/// One row of the researcher-facing aggregation: a diagnosis label and how
/// often it occurs across the off-chain store. Carries no patient fields.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DiagnosisCount {
    pub label: String,
    pub count: u32,
}
