//! Notice of change: adapting case records for the external
//! change-of-representation workflow.

pub mod case_converter;
pub mod representation;

pub use case_converter::{CaseConverter, CaseMap};
pub use representation::{
    apply_representative_update, build_change_organisation_request, find_representative,
    find_respondent, representative_to_map, respondent_names,
};
