pub mod health;
pub mod solve;
