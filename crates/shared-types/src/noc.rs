use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::ccd::DynamicFixedListType;
use crate::common::Organisation;
use crate::record::{CaseRecord, FieldDescriptor, FieldKind};

/// Case roles assigned to respondent representatives, by respondent index.
pub const RESPONDENT_SOLICITOR_ROLES: &[&str] = &[
    "[RESPONDENTSOLICITORONE]",
    "[RESPONDENTSOLICITORTWO]",
    "[RESPONDENTSOLICITORTHREE]",
    "[RESPONDENTSOLICITORFOUR]",
    "[RESPONDENTSOLICITORFIVE]",
    "[RESPONDENTSOLICITORSIX]",
    "[RESPONDENTSOLICITORSEVEN]",
    "[RESPONDENTSOLICITOREIGHT]",
    "[RESPONDENTSOLICITORNINE]",
    "[RESPONDENTSOLICITORTEN]",
];

/// Approval status of a change request awaiting review.
pub const APPROVAL_PENDING: &str = "0";

/// Request to move a case role from one organisation to another.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ChangeOrganisationRequest {
    pub organisation_to_add: Option<Organisation>,
    pub organisation_to_remove: Option<Organisation>,
    pub case_role_id: Option<DynamicFixedListType>,
    pub request_timestamp: Option<NaiveDateTime>,
    pub approval_status: Option<String>,
}

impl CaseRecord for ChangeOrganisationRequest {
    const TYPE_NAME: &'static str = "ChangeOrganisationRequest";
    const FIELDS: &'static [FieldDescriptor] = &[
        FieldDescriptor::new("OrganisationToAdd", FieldKind::Record),
        FieldDescriptor::new("OrganisationToRemove", FieldKind::Record),
        FieldDescriptor::new("CaseRoleId", FieldKind::Record),
        FieldDescriptor::new("RequestTimestamp", FieldKind::DateTime),
        FieldDescriptor::new("ApprovalStatus", FieldKind::Text),
    ];
}
