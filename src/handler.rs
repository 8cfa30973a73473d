//! Threshold handlers forming the approval escalation ladder
use super::record::{Decision, Role};
use super::request::{PurchaseRequest, TimeStamp};

/// Largest amount a manager may sign off on.
pub const MANAGER_LIMIT: u64 = 1_000;
/// Largest amount a director may sign off on. The CEO has no limit.
pub const DIRECTOR_LIMIT: u64 = 5_000;

/// A participant in the approval chain. Each handler either approves a
/// request within its threshold or hands it to the next handler; a request
/// that runs off the end of the chain is dropped without any signal.
pub trait PurchaseHandler {
    /// Store the forward link to the next handler. Wiring must happen before
    /// any call to [`PurchaseHandler::process`] and never change afterwards.
    fn set_next(&mut self, next: Box<dyn PurchaseHandler>);
    /// Approve the request or forward it unchanged. `None` means no handler
    /// in the remaining chain was authorised for the amount.
    fn process(&self, request: &PurchaseRequest) -> Option<Decision>;
    fn role(&self) -> Role;
    fn next(&self) -> Option<&dyn PurchaseHandler>;
}

#[derive(Default)]
pub struct Manager {
    next: Option<Box<dyn PurchaseHandler>>,
}

#[derive(Default)]
pub struct Director {
    next: Option<Box<dyn PurchaseHandler>>,
}

// Terminal handler, holds no forward link.
#[derive(Default)]
pub struct Ceo;

fn approve(role: Role, request: &PurchaseRequest) -> Decision {
    Decision::new(
        request.request_id().to_owned(),
        role,
        request.amount(),
        TimeStamp::new(),
    )
}

impl Manager {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Director {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Ceo {
    pub fn new() -> Self {
        Self
    }
}

impl PurchaseHandler for Manager {
    fn set_next(&mut self, next: Box<dyn PurchaseHandler>) {
        self.next = Some(next);
    }
    fn process(&self, request: &PurchaseRequest) -> Option<Decision> {
        if request.amount() <= MANAGER_LIMIT {
            return Some(approve(Role::Manager, request));
        }

        self.next.as_ref().and_then(|next| next.process(request))
    }
    fn role(&self) -> Role {
        Role::Manager
    }
    fn next(&self) -> Option<&dyn PurchaseHandler> {
        self.next.as_deref()
    }
}

impl PurchaseHandler for Director {
    fn set_next(&mut self, next: Box<dyn PurchaseHandler>) {
        self.next = Some(next);
    }
    fn process(&self, request: &PurchaseRequest) -> Option<Decision> {
        if request.amount() <= DIRECTOR_LIMIT {
            return Some(approve(Role::Director, request));
        }

        self.next.as_ref().and_then(|next| next.process(request))
    }
    fn role(&self) -> Role {
        Role::Director
    }
    fn next(&self) -> Option<&dyn PurchaseHandler> {
        self.next.as_deref()
    }
}

impl PurchaseHandler for Ceo {
    // CEO is the last handler, no forward link is kept
    fn set_next(&mut self, _next: Box<dyn PurchaseHandler>) {}
    fn process(&self, request: &PurchaseRequest) -> Option<Decision> {
        Some(approve(Role::Ceo, request))
    }
    fn role(&self) -> Role {
        Role::Ceo
    }
    fn next(&self) -> Option<&dyn PurchaseHandler> {
        None
    }
}
