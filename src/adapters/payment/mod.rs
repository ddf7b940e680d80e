pub mod card;
pub mod cash;

pub use card::CardPayment;
pub use cash::CashPayment;
