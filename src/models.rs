//! Wire Types
//!
//! Serde mirrors of the platform API's request/response bodies. The client
//! never derives or mutates these beyond forwarding edits verbatim; the
//! backend owns them.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============ Auth ============

/// Credentials for POST /auth/login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginPayload {
    pub email: String,
    pub password: String,
}

/// JWT pair issued once per successful login; superseded wholesale on refresh
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthTokens {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    /// Access-token lifetime in seconds
    pub expires_in: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct PasswordChange {
    pub current_password: String,
    pub new_password: String,
}

// ============ User ============

/// Closed role set; authorization tiers derive from this
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    SuperAdmin,
    Admin,
    Member,
}

/// Current user identity, read-only from the client's perspective
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub full_name: String,
    pub role: UserRole,
    pub is_active: bool,
    pub tenant_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// PATCH /users/me – every field optional
#[derive(Debug, Clone, Default, Serialize)]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fcm_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// POST /users/admin – admin onboarding
#[derive(Debug, Clone, Serialize)]
pub struct AdminCreate {
    pub email: String,
    pub password: String,
    pub full_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub tenant_id: Uuid,
}

// ============ Profile enums ============

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    Other,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MaritalStatus {
    NeverMarried,
    Divorced,
    Widowed,
    AwaitingDivorce,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ProfileStatus {
    Draft,
    Active,
    Suspended,
    Matched,
}

/// Vedic moon sign
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Rashi {
    Mesha,
    Vrishabha,
    Mithuna,
    Karka,
    Simha,
    Kanya,
    Tula,
    Vrishchika,
    Dhanu,
    Makara,
    Kumbha,
    Meena,
}

/// Birth star (nakshatra), 27 values
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Star {
    Ashwini,
    Bharani,
    Krittika,
    Rohini,
    Mrigashira,
    Ardra,
    Punarvasu,
    Pushya,
    Ashlesha,
    Magha,
    PurvaPhalguni,
    UttaraPhalguni,
    Hasta,
    Chitra,
    Swati,
    Vishakha,
    Anuradha,
    Jyeshtha,
    Moola,
    PurvaAshadha,
    UttaraAshadha,
    Shravana,
    Dhanishtha,
    Shatabhisha,
    PurvaBhadrapada,
    UttaraBhadrapada,
    Revati,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Dhosam {
    None,
    Chevvai,
    Rahu,
    Kethu,
    Shani,
    Multiple,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Qualification {
    #[serde(rename = "below_10th")]
    Below10th,
    Sslc,
    Hsc,
    Diploma,
    Bachelor,
    Master,
    Doctorate,
    Professional,
    Other,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum IncomeRange {
    #[serde(rename = "below_2l")]
    Below2L,
    #[serde(rename = "2_to_5l")]
    From2To5L,
    #[serde(rename = "5_to_10l")]
    From5To10L,
    #[serde(rename = "10_to_20l")]
    From10To20L,
    #[serde(rename = "20_to_50l")]
    From20To50L,
    #[serde(rename = "above_50l")]
    Above50L,
}

// ============ Profile ============

/// Full matrimonial profile as returned by the backend.
///
/// Grouped the way the backend groups it: personal, religious/cultural,
/// horoscope, professional, location, family, contact, photos, privacy
/// toggles, then status and audit fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Profile {
    pub id: Uuid,
    pub user_id: Uuid,
    pub tenant_id: Uuid,

    // Personal
    pub gender: Option<Gender>,
    pub date_of_birth: Option<NaiveDate>,
    pub time_of_birth: Option<NaiveTime>,
    pub height_cm: Option<u16>,
    pub weight_kg: Option<u16>,
    pub complexion: Option<String>,
    pub blood_group: Option<String>,
    pub marital_status: Option<MaritalStatus>,
    pub disabilities: Option<String>,

    // Religious / cultural
    pub religion: Option<String>,
    pub caste: Option<String>,
    pub sub_caste: Option<String>,
    pub gotra: Option<String>,
    pub mother_tongue: Option<String>,

    // Horoscope / birth
    pub birth_place: Option<String>,
    pub rashi: Option<Rashi>,
    pub star: Option<Star>,
    pub dhosam: Option<Dhosam>,
    pub manglik: Option<bool>,
    pub horoscope_key: Option<String>,

    // Professional
    pub qualification: Option<Qualification>,
    pub profession: Option<String>,
    pub working_at: Option<String>,
    pub income_range: Option<IncomeRange>,

    // Location
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub native_place: Option<String>,
    pub current_location: Option<String>,

    // Family
    pub father_name: Option<String>,
    pub father_occupation: Option<String>,
    pub mother_name: Option<String>,
    pub mother_occupation: Option<String>,
    pub siblings_details: Option<String>,

    // Contact
    pub mobile: Option<String>,
    pub whatsapp: Option<String>,

    // Photos (S3 object keys, registered after presigned upload)
    pub photo_keys: Option<Vec<String>>,

    // Section visibility toggles
    pub personal_visible: bool,
    pub photo_visible: bool,
    pub birth_visible: bool,
    pub professional_visible: bool,
    pub family_visible: bool,
    pub contact_visible: bool,
    pub horoscope_visible: bool,

    // Status & audit
    pub status: ProfileStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,

    /// Populated by the backend from the owning user
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
}

/// Partial profile edit, forwarded verbatim – absent fields are not sent
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_of_birth: Option<NaiveTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height_cm: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub complexion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blood_group: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marital_status: Option<MaritalStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabilities: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub religion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caste: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_caste: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gotra: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mother_tongue: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_place: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rashi: Option<Rashi>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub star: Option<Star>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dhosam: Option<Dhosam>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manglik: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qualification: Option<Qualification>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profession: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub working_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub income_range: Option<IncomeRange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub native_place: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub father_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub father_occupation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mother_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mother_occupation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub siblings_details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whatsapp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub personal_visible: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_visible: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_visible: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub professional_visible: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family_visible: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_visible: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub horoscope_visible: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ProfileStatus>,
}

/// Compact row shape used by the paginated listing
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProfileListItem {
    pub id: Uuid,
    pub user_id: Uuid,
    pub gender: Option<Gender>,
    pub date_of_birth: Option<NaiveDate>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub profession: Option<String>,
    pub status: ProfileStatus,
}

/// Query parameters for GET /profiles
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProfileQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ProfileStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

// ============ Partner preference ============

/// Stored matching criteria for a profile. Ranges are inclusive; empty lists
/// mean "no constraint".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PartnerPreference {
    pub id: Uuid,
    pub profile_id: Uuid,
    pub age_min: Option<u8>,
    pub age_max: Option<u8>,
    pub height_min_cm: Option<u16>,
    pub height_max_cm: Option<u16>,
    pub weight_min_kg: Option<u16>,
    pub weight_max_kg: Option<u16>,
    pub qualifications: Vec<Qualification>,
    pub income_ranges: Vec<IncomeRange>,
    pub marital_statuses: Vec<MaritalStatus>,
    pub current_locations: Vec<String>,
    pub native_locations: Vec<String>,
    pub castes: Vec<String>,
    pub religions: Vec<String>,
    pub dhosam: Vec<Dhosam>,
    pub rashi: Vec<Rashi>,
    pub star: Vec<Star>,
    pub updated_at: DateTime<Utc>,
}

/// PUT /profiles/:id/preferences – idempotent upsert body
#[derive(Debug, Clone, Default, Serialize)]
pub struct PartnerPreferenceUpsert {
    pub age_min: Option<u8>,
    pub age_max: Option<u8>,
    pub height_min_cm: Option<u16>,
    pub height_max_cm: Option<u16>,
    pub weight_min_kg: Option<u16>,
    pub weight_max_kg: Option<u16>,
    pub qualifications: Vec<Qualification>,
    pub income_ranges: Vec<IncomeRange>,
    pub marital_statuses: Vec<MaritalStatus>,
    pub current_locations: Vec<String>,
    pub native_locations: Vec<String>,
    pub castes: Vec<String>,
    pub religions: Vec<String>,
    pub dhosam: Vec<Dhosam>,
    pub rashi: Vec<Rashi>,
    pub star: Vec<Star>,
}

// ============ Tenant ============

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TenantPlan {
    Starter,
    Growth,
    Enterprise,
}

/// An isolated organization/customer account; profiles and admins belong to
/// exactly one tenant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Tenant {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub domain: Option<String>,
    pub contact_email: String,
    pub plan: TenantPlan,
    pub max_users: u32,
    pub max_admins: u32,
    pub is_active: bool,
    pub contact_person: Option<String>,
    pub contact_number: Option<String>,
    pub whatsapp_number: Option<String>,
    pub pin: Option<String>,
    pub upi_id: Option<String>,
    pub castes: Option<Vec<String>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TenantCreate {
    pub name: String,
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    pub contact_email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    pub plan: TenantPlan,
    pub max_users: u32,
    pub max_admins: u32,
    pub contact_person: String,
    pub contact_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whatsapp_number: Option<String>,
    pub pin: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upi_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub castes: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct TenantUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<TenantPlan>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_users: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_admins: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_person: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whatsapp_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upi_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub castes: Option<Vec<String>>,
}

/// Tenant listing uses `page_size` where the generic pagination uses `size`
#[derive(Debug, Clone, Deserialize)]
pub struct TenantList {
    pub items: Vec<Tenant>,
    pub total: u64,
    pub page: u32,
    pub page_size: u32,
}

// ============ Pagination ============

/// Generic paginated envelope: {items, total, page, size, pages}
#[derive(Debug, Clone, Deserialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub size: u32,
    #[serde(default)]
    pub pages: Option<u32>,
}

// ============ File upload ============

/// What an uploaded object is for; decides where the key is registered
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum UploadPurpose {
    /// Appended to the profile's photo_keys list
    ProfilePhoto,
    /// Stored in horoscope_key, overwriting any previous value
    Horoscope,
}

impl UploadPurpose {
    pub fn as_str(&self) -> &'static str {
        match self {
            UploadPurpose::ProfilePhoto => "profile_photo",
            UploadPurpose::Horoscope => "horoscope",
        }
    }
}

/// POST /files/presign request
#[derive(Debug, Clone, Serialize)]
pub struct FileUploadRequest {
    pub file_name: String,
    pub content_type: String,
    pub upload_purpose: UploadPurpose,
}

/// Short-lived signed upload target
#[derive(Debug, Clone, Deserialize)]
pub struct FileUploadResponse {
    /// Pre-signed PUT URL, valid for the expiry window only
    pub upload_url: String,
    /// Object key to register against the owning profile
    pub object_key: String,
}

// ============ Shortlist ============

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ShortlistStatus {
    /// Sender expressed interest
    Shortlisted,
    /// Recipient accepted
    Accepted,
    /// Recipient declined
    Rejected,
}

#[derive(Debug, Clone, Serialize)]
pub struct ShortlistCreate {
    pub to_profile_id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ShortlistStatusUpdate {
    pub status: ShortlistStatus,
}

/// Directed interest edge between two profiles of the same tenant
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Shortlist {
    pub id: Uuid,
    pub tenant_id: Uuid,
    pub from_profile_id: Uuid,
    pub to_profile_id: Uuid,
    pub status: ShortlistStatus,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ShortlistList {
    pub items: Vec<Shortlist>,
    pub total: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enum_wire_forms() {
        assert_eq!(
            serde_json::to_string(&UserRole::SuperAdmin).unwrap(),
            "\"super_admin\""
        );
        assert_eq!(
            serde_json::to_string(&Qualification::Below10th).unwrap(),
            "\"below_10th\""
        );
        assert_eq!(
            serde_json::to_string(&IncomeRange::From2To5L).unwrap(),
            "\"2_to_5l\""
        );
        assert_eq!(
            serde_json::to_string(&Star::PurvaPhalguni).unwrap(),
            "\"purva_phalguni\""
        );
        assert_eq!(
            serde_json::to_string(&MaritalStatus::AwaitingDivorce).unwrap(),
            "\"awaiting_divorce\""
        );
    }

    #[test]
    fn test_profile_update_sends_only_set_fields() {
        let update = ProfileUpdate {
            city: Some("Chennai".to_string()),
            height_cm: Some(172),
            ..Default::default()
        };
        let json = serde_json::to_value(&update).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 2);
        assert_eq!(obj["city"], "Chennai");
        assert_eq!(obj["height_cm"], 172);
    }

    #[test]
    fn test_update_payload_fields_survive_serialization_unchanged() {
        // The wrapper must not mutate payload shape: every field sent with
        // value V must appear as V on the wire.
        let update = ProfileUpdate {
            gender: Some(Gender::Female),
            caste: Some("Vellalar".to_string()),
            rashi: Some(Rashi::Kanya),
            star: Some(Star::Hasta),
            manglik: Some(false),
            income_range: Some(IncomeRange::From10To20L),
            ..Default::default()
        };
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json["gender"], "female");
        assert_eq!(json["caste"], "Vellalar");
        assert_eq!(json["rashi"], "kanya");
        assert_eq!(json["star"], "hasta");
        assert_eq!(json["manglik"], false);
        assert_eq!(json["income_range"], "10_to_20l");
    }

    #[test]
    fn test_paginated_deserializes_with_and_without_pages() {
        let with: Paginated<ProfileListItem> = serde_json::from_value(serde_json::json!({
            "items": [], "total": 0, "page": 1, "size": 20, "pages": 0
        }))
        .unwrap();
        assert_eq!(with.pages, Some(0));

        let without: Paginated<ProfileListItem> = serde_json::from_value(serde_json::json!({
            "items": [], "total": 0, "page": 1, "size": 20
        }))
        .unwrap();
        assert_eq!(without.pages, None);
    }
}
