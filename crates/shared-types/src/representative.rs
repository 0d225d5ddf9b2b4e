use serde::{Deserialize, Serialize};

use crate::common::{Address, Organisation};
use crate::record::{CaseRecord, FieldDescriptor, FieldKind};

/// A legal representative acting for one respondent.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RepresentedTypeR {
    /// Name of the respondent this representative acts for.
    #[serde(rename = "resp_RepName")]
    pub resp_rep_name: Option<String>,
    /// Id of the respondent collection entry this representative acts for.
    pub respondent_id: Option<String>,
    #[serde(rename = "name_of_representative")]
    pub name_of_representative: Option<String>,
    #[serde(rename = "name_of_organisation")]
    pub name_of_organisation: Option<String>,
    #[serde(rename = "representative_email_address")]
    pub representative_email_address: Option<String>,
    #[serde(rename = "representative_phone_number")]
    pub representative_phone_number: Option<String>,
    #[serde(rename = "representative_reference")]
    pub representative_reference: Option<String>,
    #[serde(rename = "representative_address")]
    pub representative_address: Option<Address>,
    pub respondent_organisation: Option<Organisation>,
    /// `"Yes"` when the representative is registered with MyHMCTS.
    pub my_hmcts_yes_no: Option<String>,
}

impl CaseRecord for RepresentedTypeR {
    const TYPE_NAME: &'static str = "RepresentedTypeR";
    const FIELDS: &'static [FieldDescriptor] = &[
        FieldDescriptor::aliased("respRepName", "resp_RepName", FieldKind::Text),
        FieldDescriptor::new("respondentId", FieldKind::Text),
        FieldDescriptor::aliased(
            "nameOfRepresentative",
            "name_of_representative",
            FieldKind::Text,
        ),
        FieldDescriptor::aliased("nameOfOrganisation", "name_of_organisation", FieldKind::Text),
        FieldDescriptor::aliased(
            "representativeEmailAddress",
            "representative_email_address",
            FieldKind::Text,
        ),
        FieldDescriptor::aliased(
            "representativePhoneNumber",
            "representative_phone_number",
            FieldKind::Text,
        ),
        FieldDescriptor::aliased(
            "representativeReference",
            "representative_reference",
            FieldKind::Text,
        ),
        FieldDescriptor::aliased(
            "representativeAddress",
            "representative_address",
            FieldKind::Record,
        ),
        FieldDescriptor::new("respondentOrganisation", FieldKind::Record),
        FieldDescriptor::new("myHmctsYesNo", FieldKind::Text),
    ];
}
