use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::ccd::ListTypeItem;
use crate::record::{CaseRecord, FieldDescriptor, FieldKind};

/// A reply sent back on a referral.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReferralReplyType {
    pub reply_by: Option<String>,
    pub direction_to: Option<String>,
    pub reply_to_email_address: Option<String>,
    pub is_urgent_reply: Option<String>,
    pub direction_details: Option<String>,
    pub reply_general_notes: Option<String>,
    pub reply_date: Option<NaiveDate>,
}

impl CaseRecord for ReferralReplyType {
    const TYPE_NAME: &'static str = "ReferralReplyType";
    const FIELDS: &'static [FieldDescriptor] = &[
        FieldDescriptor::new("replyBy", FieldKind::Text),
        FieldDescriptor::new("directionTo", FieldKind::Text),
        FieldDescriptor::new("replyToEmailAddress", FieldKind::Text),
        FieldDescriptor::new("isUrgentReply", FieldKind::Text),
        FieldDescriptor::new("directionDetails", FieldKind::Text),
        FieldDescriptor::new("replyGeneralNotes", FieldKind::Text),
        FieldDescriptor::new("replyDate", FieldKind::Date),
    ];
}

/// A referral of the case to a judge or legal officer.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReferralType {
    pub referral_number: Option<String>,
    pub referral_subject: Option<String>,
    pub referral_details: Option<String>,
    pub referent_email: Option<String>,
    pub referral_date: Option<NaiveDate>,
    pub is_urgent: Option<String>,
    pub referral_status: Option<String>,
    pub referral_reply_collection: Vec<ListTypeItem<ReferralReplyType>>,
}

impl CaseRecord for ReferralType {
    const TYPE_NAME: &'static str = "ReferralType";
    const FIELDS: &'static [FieldDescriptor] = &[
        FieldDescriptor::new("referralNumber", FieldKind::Text),
        FieldDescriptor::new("referralSubject", FieldKind::Text),
        FieldDescriptor::new("referralDetails", FieldKind::Text),
        FieldDescriptor::new("referentEmail", FieldKind::Text),
        FieldDescriptor::new("referralDate", FieldKind::Date),
        FieldDescriptor::new("isUrgent", FieldKind::Text),
        FieldDescriptor::new("referralStatus", FieldKind::Text),
        FieldDescriptor::new("referralReplyCollection", FieldKind::Collection),
    ];
}
