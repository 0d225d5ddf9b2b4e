pub mod config;
pub mod error;
pub mod record;

// Tribunal case domain modules
pub mod case_data;
pub mod ccd;
pub mod common;
pub mod hearing;
pub mod noc;
pub mod referral;
pub mod representative;
pub mod respondent;

pub use config::*;
pub use error::*;
pub use record::*;

// Re-export all domain types
pub use case_data::*;
pub use ccd::*;
pub use common::*;
pub use hearing::*;
pub use noc::*;
pub use referral::*;
pub use representative::*;
pub use respondent::*;
