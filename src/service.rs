//! Service layer API for running requests through a chain
use super::chain::ApprovalChain;
use super::record::{ApprovalLog, Decision};
use super::request::PurchaseRequest;

pub struct ApprovalService {
    chain: ApprovalChain,
    log: ApprovalLog,
    // in future we could add a config for per-role thresholds
}

impl ApprovalService {
    pub fn new(chain: ApprovalChain) -> Self {
        Self {
            chain,
            log: ApprovalLog::new(),
        }
    }

    /// Run a request through the chain. Approvals are recorded in the log;
    /// an unapproved request is dropped without any signal.
    pub fn submit(&mut self, request: &PurchaseRequest) -> Option<Decision> {
        let decision = self.chain.submit(request)?;
        self.log.insert_decision(decision.clone());

        Some(decision)
    }

    pub fn history(&self) -> &[Decision] {
        &self.log.decisions
    }

    pub fn view_history(&self) {
        self.log.view_history();
    }
}
