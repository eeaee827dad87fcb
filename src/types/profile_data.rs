// src/types/profile_data.rs
//! Wire shapes for the comprehensive profile read and the per-section
//! write payloads. Read shapes are defensive: every field is optional or
//! defaulted so a partial server response degrades to blanks instead of a
//! parse failure.

use serde::{Deserialize, Serialize};

// ===== Comprehensive read =====

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileData {
    pub personal_info: Option<PersonalInfoData>,
    pub career_profile: Option<CareerProfileData>,
    #[serde(default)]
    pub education_profiles: Vec<EducationData>,
    #[serde(default)]
    pub experience_profiles: Vec<ExperienceData>,
    #[serde(default)]
    pub project_profiles: Vec<ProjectData>,
    pub opportunities_interest: Option<OpportunitiesInterestData>,
    pub recommendation_priority: Option<RecommendationPriorityData>,
    #[serde(default)]
    pub user_goals: Vec<UserGoalData>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PersonalInfoData {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub country: Option<String>,
    pub goal: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CareerProfileData {
    pub industry: Option<String>,
    pub job_title: Option<String>,
    pub profile_summary: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EducationData {
    pub id: Option<i64>,
    pub degree: Option<String>,
    pub school: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    #[serde(default)]
    pub is_currently_studying: bool,
    pub extra_curricular: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExperienceData {
    pub id: Option<i64>,
    pub job_title: Option<String>,
    pub company: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    #[serde(default)]
    pub is_currently_working: bool,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectData {
    pub id: Option<i64>,
    pub project_name: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    #[serde(default)]
    pub is_ongoing: bool,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OpportunitiesInterestData {
    #[serde(default)]
    pub scholarships: bool,
    #[serde(default)]
    pub jobs: bool,
    #[serde(default)]
    pub grants: bool,
    #[serde(default)]
    pub internships: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecommendationPriorityData {
    #[serde(default)]
    pub academic_background: bool,
    #[serde(default)]
    pub work_experience: bool,
    #[serde(default)]
    pub preferred_locations: bool,
    #[serde(default)]
    pub others: bool,
    pub additional_preferences: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserGoalData {
    #[serde(default)]
    pub priority: i32,
    pub goal_display: Option<String>,
}

// ===== Write payloads =====

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PersonalInfoPayload {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub country: String,
    pub goal: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CareerProfilePayload {
    pub industry: String,
    pub job_title: String,
    pub profile_summary: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct EducationPayload {
    pub degree: String,
    pub school: String,
    pub start_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    pub is_currently_studying: bool,
    pub extra_curricular: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ExperiencePayload {
    pub job_title: String,
    pub company: String,
    pub start_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    pub is_currently_working: bool,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ProjectPayload {
    pub project_name: String,
    pub start_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    pub is_ongoing: bool,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct OpportunitiesInterestPayload {
    pub scholarships: bool,
    pub jobs: bool,
    pub grants: bool,
    pub internships: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RecommendationPriorityPayload {
    pub academic_background: bool,
    pub work_experience: bool,
    pub preferred_locations: bool,
    pub others: bool,
    pub additional_preferences: String,
}
