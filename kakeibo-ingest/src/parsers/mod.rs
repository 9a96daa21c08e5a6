pub mod bank;
pub mod credit;
