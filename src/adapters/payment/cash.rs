use crate::domain::value_objects::FeeAmount;
use crate::ports::payment::PaymentMethod;

/// Mock implementation of cash payment
///
/// Does not move real money. Emits a payment notice and always succeeds.
#[derive(Debug, Default)]
pub struct CashPayment;

impl CashPayment {
    pub fn new() -> Self {
        Self
    }
}

impl PaymentMethod for CashPayment {
    fn pay(&self, amount: FeeAmount) -> bool {
        tracing::info!(%amount, "processing cash payment");
        true
    }
}
