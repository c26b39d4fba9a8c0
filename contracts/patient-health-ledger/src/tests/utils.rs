#![cfg(test)]

use crate::{Block, PatientHealthLedger, PatientHealthLedgerClient};
use soroban_sdk::{testutils::Ledger, Address, BytesN, Env, String, Vec};

pub struct TestContext {
    pub env: Env,
    pub contract_id: Address,
    pub contract: PatientHealthLedgerClient<'static>,
}

impl TestContext {
    pub fn new() -> Self {
        let env = Env::default();
        let contract_id = env.register(PatientHealthLedger, ());
        let contract = PatientHealthLedgerClient::new(&env, &contract_id);
        contract.initialize();
        TestContext {
            env,
            contract_id,
            contract,
        }
    }

    pub fn s(&self, value: &str) -> String {
        String::from_str(&self.env, value)
    }

    /// Fast forward time by the specified number of seconds
    pub fn advance_time(&self, seconds: u64) {
        let current_time = self.env.ledger().timestamp();
        self.env.ledger().set_timestamp(current_time + seconds);
    }

    pub fn chain(&self, patient_id: &str) -> Vec<Block> {
        self.contract
            .get_health_chain(&self.s(patient_id), &self.s("anyone"))
            .unwrap()
    }

    /// Record hash referenced by the newest block of the patient's chain
    pub fn tail_record_hash(&self, patient_id: &str) -> BytesN<32> {
        let chain = self.chain(patient_id);
        chain.last().unwrap().data.record_hash.clone()
    }

    pub fn audit_len(&self) -> u32 {
        self.contract
            .get_audit_trail(&self.s("auditor_01"))
            .unwrap()
            .len()
    }
}
