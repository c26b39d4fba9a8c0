#![cfg(test)]

use crate::DiagnosisCount;

use super::utils::TestContext;

fn count_for(rows: &soroban_sdk::Vec<DiagnosisCount>, label: &soroban_sdk::String) -> Option<u32> {
    for row in rows.iter() {
        if row.label == *label {
            return Some(row.count);
        }
    }
    None
}

#[test]
fn researcher_receives_diagnosis_counts() {
    let ctx = TestContext::new();

    let rows = ctx
        .contract
        .get_anonymized_data(&ctx.s("researcher_01"))
        .unwrap();

    // Two seeded observation records; the medication-only record
    // contributes nothing.
    assert_eq!(rows.len(), 2);
    assert_eq!(count_for(&rows, &ctx.s("Viral Fever")), Some(1));
    assert_eq!(count_for(&rows, &ctx.s("Common Cold")), Some(1));
}

#[test]
fn aggregation_carries_no_patient_identifiers() {
    let ctx = TestContext::new();

    let rows = ctx
        .contract
        .get_anonymized_data(&ctx.s("researcher_01"))
        .unwrap();
    for row in rows.iter() {
        assert_ne!(row.label, ctx.s("patient_01"));
        assert_ne!(row.label, ctx.s("patient_02"));
        assert_ne!(row.label, ctx.s("Rohan Sharma"));
        assert_ne!(row.label, ctx.s("Priya Patel"));
    }
}

#[test]
fn non_researchers_are_denied() {
    let ctx = TestContext::new();

    assert!(ctx.contract.get_anonymized_data(&ctx.s("patient_01")).is_none());
    assert!(ctx.contract.get_anonymized_data(&ctx.s("doctor_01")).is_none());
    assert!(ctx.contract.get_anonymized_data(&ctx.s("auditor_01")).is_none());
    assert!(ctx.contract.get_anonymized_data(&ctx.s("nobody")).is_none());
}
