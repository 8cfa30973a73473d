//! Chain assembly and traversal
use super::error::ChainError;
use super::handler::{Ceo, Director, Manager, PurchaseHandler};
use super::record::{Decision, Role};
use super::request::PurchaseRequest;

/// A wired handler sequence. Requests enter at the head and walk the forward
/// links until a handler approves or the sequence ends.
pub struct ApprovalChain {
    head: Box<dyn PurchaseHandler>,
}

/// Collects handlers in caller-supplied order and wires the forward links on
/// build. Handlers must be pushed in ascending threshold order for the chain
/// to behave as an escalation ladder; the builder does not enforce this.
#[derive(Default)]
pub struct ChainBuilder {
    handlers: Vec<Box<dyn PurchaseHandler>>,
}

impl ChainBuilder {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn push(mut self, handler: Box<dyn PurchaseHandler>) -> Self {
        self.handlers.push(handler);
        self
    }
    /// Wire each handler's forward link to its successor, back to front, so
    /// every link points at an already-wired tail.
    pub fn build(self) -> Result<ApprovalChain, ChainError> {
        let mut head: Option<Box<dyn PurchaseHandler>> = None;

        for mut handler in self.handlers.into_iter().rev() {
            if let Some(next) = head.take() {
                handler.set_next(next);
            }
            head = Some(handler);
        }

        head.map(|head| ApprovalChain { head })
            .ok_or(ChainError::Empty)
    }
}

impl ApprovalChain {
    /// The canonical Manager -> Director -> CEO escalation ladder.
    pub fn escalation() -> Self {
        ChainBuilder::new()
            .push(Box::new(Manager::new()))
            .push(Box::new(Director::new()))
            .push(Box::new(Ceo::new()))
            .build()
            .expect("escalation ladder is never empty")
    }
    /// Submit a request at the head of the chain. `None` means the request
    /// exceeded every threshold and was dropped.
    pub fn submit(&self, request: &PurchaseRequest) -> Option<Decision> {
        self.head.process(request)
    }
    /// Roles visited when walking the forward links from the head, in order.
    pub fn roles(&self) -> Vec<Role> {
        let mut roles = vec![];
        let mut cursor: Option<&dyn PurchaseHandler> = Some(self.head.as_ref());

        while let Some(handler) = cursor {
            roles.push(handler.role());
            cursor = handler.next();
        }

        roles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_builder_is_rejected() {
        let result = ChainBuilder::new().build();
        assert!(matches!(result, Err(ChainError::Empty)));
    }

    #[test]
    fn escalation_wires_three_roles() {
        let chain = ApprovalChain::escalation();
        assert_eq!(chain.roles(), vec![Role::Manager, Role::Director, Role::Ceo]);
    }
}
