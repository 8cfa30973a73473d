use purchase_approval::chain::ApprovalChain;
use purchase_approval::request::PurchaseRequest;

fn main() -> anyhow::Result<()> {
    let chain = ApprovalChain::escalation();

    for amount in [800, 3_000, 10_000] {
        let request = PurchaseRequest::new(amount)?;

        if let Some(decision) = chain.submit(&request) {
            println!(
                "{} approves purchase request for ${}",
                decision.role, decision.amount
            );
        }
    }

    Ok(())
}
