pub mod book_repository;
pub mod payment;

pub use book_repository::*;
pub use payment::*;
