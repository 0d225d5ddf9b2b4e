use serde::{Deserialize, Serialize};

use crate::ccd::ListTypeItem;
use crate::hearing::HearingType;
use crate::noc::ChangeOrganisationRequest;
use crate::record::{CaseRecord, FieldDescriptor, FieldKind};
use crate::referral::ReferralType;
use crate::representative::RepresentedTypeR;
use crate::respondent::RespondentSumType;

/// Claimant's personal details.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClaimantIndType {
    pub claimant_title1: Option<String>,
    pub claimant_first_names: Option<String>,
    pub claimant_last_name: Option<String>,
}

impl ClaimantIndType {
    /// First names and last name joined by a space, skipping blanks.
    pub fn full_name(&self) -> String {
        [&self.claimant_first_names, &self.claimant_last_name]
            .into_iter()
            .filter_map(|part| part.as_deref().map(str::trim))
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl CaseRecord for ClaimantIndType {
    const TYPE_NAME: &'static str = "ClaimantIndType";
    const FIELDS: &'static [FieldDescriptor] = &[
        FieldDescriptor::new("claimant_title1", FieldKind::Text),
        FieldDescriptor::new("claimant_first_names", FieldKind::Text),
        FieldDescriptor::new("claimant_last_name", FieldKind::Text),
    ];
}

/// A jurisdiction code raised by the claim, e.g. `"DDA"` or `"UDL"`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct JurCodesType {
    // The misspelling is part of the stored case definition.
    #[serde(rename = "juridictionCodesList")]
    pub jurisdiction_code: Option<String>,
    #[serde(rename = "judgmentOutcome")]
    pub judgment_outcome: Option<String>,
}

impl CaseRecord for JurCodesType {
    const TYPE_NAME: &'static str = "JurCodesType";
    const FIELDS: &'static [FieldDescriptor] = &[
        FieldDescriptor::aliased("jurisdictionCode", "juridictionCodesList", FieldKind::Text),
        FieldDescriptor::new("judgmentOutcome", FieldKind::Text),
    ];
}

/// The subset of tribunal case data read and written by the helpers.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CaseData {
    pub ethos_case_reference: Option<String>,
    pub managing_office: Option<String>,
    /// Claimant's display name.
    pub claimant: Option<String>,
    pub claimant_ind_type: Option<ClaimantIndType>,
    pub respondent_collection: Vec<ListTypeItem<RespondentSumType>>,
    pub rep_collection: Vec<ListTypeItem<RepresentedTypeR>>,
    pub hearing_collection: Vec<ListTypeItem<HearingType>>,
    pub referral_collection: Vec<ListTypeItem<ReferralType>>,
    #[serde(rename = "jurCodesCollection")]
    pub jurisdiction_codes: Vec<ListTypeItem<JurCodesType>>,
    #[serde(rename = "changeOrganisationRequestField")]
    pub change_organisation_request: Option<ChangeOrganisationRequest>,
}

impl CaseData {
    /// Claimant name, preferring the structured personal details.
    pub fn claimant_name(&self) -> String {
        let structured = self
            .claimant_ind_type
            .as_ref()
            .map(ClaimantIndType::full_name)
            .unwrap_or_default();
        if structured.is_empty() {
            self.claimant.as_deref().unwrap_or("").trim().to_string()
        } else {
            structured
        }
    }
}

impl CaseRecord for CaseData {
    const TYPE_NAME: &'static str = "CaseData";
    const FIELDS: &'static [FieldDescriptor] = &[
        FieldDescriptor::new("ethosCaseReference", FieldKind::Text),
        FieldDescriptor::new("managingOffice", FieldKind::Text),
        FieldDescriptor::new("claimant", FieldKind::Text),
        FieldDescriptor::new("claimantIndType", FieldKind::Record),
        FieldDescriptor::new("respondentCollection", FieldKind::Collection),
        FieldDescriptor::new("repCollection", FieldKind::Collection),
        FieldDescriptor::new("hearingCollection", FieldKind::Collection),
        FieldDescriptor::new("referralCollection", FieldKind::Collection),
        FieldDescriptor::aliased(
            "jurisdictionCodes",
            "jurCodesCollection",
            FieldKind::Collection,
        ),
        FieldDescriptor::aliased(
            "changeOrganisationRequest",
            "changeOrganisationRequestField",
            FieldKind::Record,
        ),
    ];
}
