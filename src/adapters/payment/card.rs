use crate::domain::value_objects::FeeAmount;
use crate::ports::payment::PaymentMethod;

/// Mock implementation of card payment
///
/// Holds a card number but never charges it. Emits a payment notice with
/// the number masked down to the last 4 digits, then succeeds.
#[derive(Debug)]
pub struct CardPayment {
    card_number: String,
}

impl CardPayment {
    pub fn new(card_number: impl Into<String>) -> Self {
        Self {
            card_number: card_number.into(),
        }
    }

    /// Card number with everything but the last 4 digits masked
    fn masked_number(&self) -> String {
        let chars: Vec<char> = self.card_number.chars().collect();
        let last4: String = chars[chars.len().saturating_sub(4)..].iter().collect();
        format!("****-****-****-{}", last4)
    }
}

impl PaymentMethod for CardPayment {
    fn pay(&self, amount: FeeAmount) -> bool {
        tracing::info!(%amount, card = %self.masked_number(), "processing card payment");
        true
    }
}
