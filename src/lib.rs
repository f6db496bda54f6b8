pub mod audit;
pub mod cli;
pub mod crypto;
pub mod errors;
pub mod vault;
