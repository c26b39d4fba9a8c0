use soroban_sdk::{Env, Map, String, Vec};

use crate::storage;
use crate::types::{ClinicalEntry, DiagnosisCount, Role, User};

/// Researcher-only aggregation: counts the first observation's diagnosis
/// code across every off-chain record. The output contains diagnosis
/// labels and counts only; no patient identifier ever leaves this
/// function.
pub fn anonymized_diagnosis_counts(env: &Env, requester: &User) -> Option<Vec<DiagnosisCount>> {
    if requester.role != Role::Researcher {
        return None;
    }

    let mut counts: Map<String, u32> = Map::new(env);
    for record_hash in storage::record_index(env).iter() {
        let record = match storage::get_record(env, &record_hash) {
            Some(record) => record,
            None => continue,
        };
        if let Some(label) = first_observation_label(&record.entries) {
            let current = counts.get(label.clone()).unwrap_or(0);
            counts.set(label, current.saturating_add(1));
        }
    }

    let mut rows = Vec::new(env);
    for (label, count) in counts.iter() {
        rows.push_back(DiagnosisCount { label, count });
    }
    Some(rows)
}

fn first_observation_label(entries: &Vec<ClinicalEntry>) -> Option<String> {
    for entry in entries.iter() {
        if let ClinicalEntry::Observation(observation) = entry {
            return Some(observation.code.text.clone());
        }
    }
    None
}
