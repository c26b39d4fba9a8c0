#![cfg(test)]

use soroban_sdk::BytesN;

use crate::ledger;

use super::utils::TestContext;

#[test]
fn seeded_chain_has_genesis_and_linked_blocks() {
    let ctx = TestContext::new();

    let chain = ctx.chain("patient_01");
    assert_eq!(chain.len(), 3); // genesis + two seeded records

    let zero = BytesN::from_array(&ctx.env, &[0u8; 32]);
    let genesis = chain.get(0).unwrap();
    assert_eq!(genesis.previous_hash, zero);
    assert_eq!(genesis.data.record_hash, zero);
    assert_eq!(genesis.data.doctor_id, ctx.s("system"));

    for i in 1..chain.len() {
        let block = chain.get(i).unwrap();
        let previous = chain.get(i - 1).unwrap();
        assert_eq!(block.previous_hash, previous.hash);
        assert_eq!(block.data.patient_id, ctx.s("patient_01"));
        assert_eq!(block.data.doctor_id, ctx.s("doctor_01"));
    }
}

#[test]
fn block_hashes_recompute_from_data_and_previous_hash() {
    let ctx = TestContext::new();

    for patient in ["patient_01", "patient_02"] {
        let chain = ctx.chain(patient);
        for block in chain.iter() {
            let recomputed = ctx.env.as_contract(&ctx.contract_id, || {
                ledger::block_hash(&ctx.env, &block.data, &block.previous_hash)
            });
            assert_eq!(recomputed, block.hash);
        }
    }
}

#[test]
fn block_hashes_are_unique_within_a_chain() {
    let ctx = TestContext::new();

    let chain = ctx.chain("patient_01");
    for i in 0..chain.len() {
        for j in 0..i {
            assert_ne!(chain.get(i).unwrap().hash, chain.get(j).unwrap().hash);
        }
    }
}

#[test]
fn chain_references_resolve_to_offchain_payloads() {
    let ctx = TestContext::new();

    let chain = ctx.chain("patient_02");
    let reference = chain.last().unwrap().data;
    let record = ctx
        .contract
        .get_health_record(&reference.record_hash, &ctx.s("patient_02"), &ctx.s("patient_02"))
        .unwrap();
    assert_eq!(record.id, reference.record_hash);
    assert_eq!(record.patient.id, ctx.s("patient_02"));
}

#[test]
fn unknown_patient_gets_a_lazily_bootstrapped_genesis_chain() {
    let ctx = TestContext::new();

    let chain = ctx.chain("patient_99");
    assert_eq!(chain.len(), 1);

    // Bootstrapping is idempotent: a second read creates no second genesis.
    let again = ctx.chain("patient_99");
    assert_eq!(again.len(), 1);
    assert_eq!(again.get(0).unwrap().hash, chain.get(0).unwrap().hash);
}

#[test]
fn unknown_record_hash_reads_as_absent() {
    let ctx = TestContext::new();

    let missing = BytesN::from_array(&ctx.env, &[0xffu8; 32]);
    let result = ctx
        .contract
        .get_health_record(&missing, &ctx.s("patient_01"), &ctx.s("patient_01"));
    assert!(result.is_none());
}
