pub mod calculator;
pub mod health;
