pub mod deposit;
pub mod stake;
pub mod user;
