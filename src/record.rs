//! Decision records and the in-memory approval log
use super::request::TimeStamp;
use super::utils;
use chrono::Utc;
use std::fmt;

#[derive(Debug, PartialEq, Eq, Clone, Copy, minicbor::Encode, minicbor::Decode)]
pub enum Role {
    #[n(0)]
    Manager,
    #[n(1)]
    Director,
    #[n(2)]
    Ceo,
}

/// An approval record: which role approved which request at what amount.
/// These are the only observable output of a chain walk.
#[derive(Debug, PartialEq, Eq, Clone, minicbor::Encode, minicbor::Decode)]
pub struct Decision {
    #[n(0)]
    pub request_id: String, // a unique string that references a [`PurchaseRequest`]
    #[n(1)]
    pub role: Role,
    #[n(2)]
    pub amount: u64,
    #[n(3)]
    pub decided_at: TimeStamp<Utc>, // issued when the handler approves
}

/// Ordered log of decisions for a run of the chain. Dropped requests leave
/// no trace here.
#[derive(Debug)]
pub struct ApprovalLog {
    pub log_id: String, // uuid7, bech32 encoded
    pub decisions: Vec<Decision>,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Manager => write!(f, "Manager"),
            Role::Director => write!(f, "Director"),
            Role::Ceo => write!(f, "CEO"),
        }
    }
}

impl Decision {
    pub fn new(request_id: String, role: Role, amount: u64, decided_at: TimeStamp<Utc>) -> Self {
        Self {
            request_id,
            role,
            amount,
            decided_at,
        }
    }
    pub fn build(&self) -> anyhow::Result<(String, Vec<u8>)> {
        utils::encode_and_hash(self)
    }
}

impl ApprovalLog {
    pub fn new() -> Self {
        let log_id = utils::new_bech32_id("log_")
            .expect("failed to serialise log id to bech32 encoding.");

        Self::new_with(log_id)
    }
    pub fn new_with(log_id: String) -> Self {
        Self {
            log_id,
            decisions: vec![],
        }
    }
    pub fn insert_decision(&mut self, decision: Decision) {
        self.decisions.push(decision);
    }
    pub fn view_history(&self) {
        for decision in &self.decisions {
            println!(
                "{} approved purchase request {} for ${}",
                decision.role, decision.request_id, decision.amount
            );
        }
    }
}

impl Default for ApprovalLog {
    fn default() -> Self {
        Self::new()
    }
}
