pub mod memory;
pub mod payment;
