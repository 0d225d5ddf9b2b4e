pub mod config;
pub mod logging;

// Notice of change
pub mod noc;

// Form helpers
pub mod dates;
pub mod docgen;
pub mod dynamic_list;
pub mod referral;
pub mod response;
