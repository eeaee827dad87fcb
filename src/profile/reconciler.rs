// src/profile/reconciler.rs
//! Bidirectional mapping between wire and local profile shapes, plus the
//! per-section save orchestration.

use tracing::{error, info, warn};

use crate::core::api_client::ApiError;
use crate::profile::api::ProfileApi;
use crate::profile::entry_id::{EntryId, SaveAction};
use crate::profile::models::{
    AiPreferences, CareerProfile, EducationEntry, ExperienceEntry, OpportunityInterests,
    PersonalInfo, ProjectEntry, RecommendationPriorities,
};
use crate::profile::store::ProfileStore;
use crate::types::profile_data::{
    CareerProfilePayload, EducationData, EducationPayload, ExperienceData, ExperiencePayload,
    OpportunitiesInterestPayload, PersonalInfoPayload, ProfileData, ProjectData, ProjectPayload,
    RecommendationPriorityPayload, UserGoalData,
};

/// One of the six independently-saved profile groupings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Personal,
    CareerProfile,
    Education,
    Experience,
    Projects,
    Ai,
}

impl Section {
    /// Resolve a UI tab label. Unknown labels resolve to `None` and the
    /// save dispatcher treats them as a no-op.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Personal" => Some(Section::Personal),
            "Career Profile" => Some(Section::CareerProfile),
            "Education" => Some(Section::Education),
            "Experience" => Some(Section::Experience),
            "Projects" => Some(Section::Projects),
            "AI" => Some(Section::Ai),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Section::Personal => "Personal",
            Section::CareerProfile => "Career Profile",
            Section::Education => "Education",
            Section::Experience => "Experience",
            Section::Projects => "Projects",
            Section::Ai => "AI",
        }
    }
}

/// Owns the API handle and the profile store, and reconciles between them.
///
/// All remote calls are awaited sequentially. A save failure propagates to
/// the caller with the in-progress local edits intact so the user can retry
/// without re-entering data.
pub struct ProfileSync {
    api: ProfileApi,
    pub store: ProfileStore,
}

impl ProfileSync {
    pub fn new(api: ProfileApi) -> Self {
        Self {
            api,
            store: ProfileStore::new(),
        }
    }

    /// Construct and perform the initial load.
    pub async fn connect(api: ProfileApi) -> Self {
        let mut sync = Self::new(api);
        sync.fetch_profile_data().await;
        sync
    }

    /// Full profile load. On failure the error lands in `store.error` and
    /// the existing local state is left untouched.
    pub async fn fetch_profile_data(&mut self) {
        self.store.loading = true;
        match self.api.fetch_comprehensive().await {
            Ok(response) if response.success => match response.data {
                Some(data) => {
                    self.apply_profile_data(data);
                    self.store.error = None;
                }
                None => {
                    self.store.error = Some("Profile response carried no data".to_string());
                }
            },
            Ok(_) => {
                self.store.error = Some("Failed to load profile".to_string());
            }
            Err(e) => {
                error!("Failed to load profile: {}", e);
                self.store.error = Some(e.to_string());
            }
        }
        self.store.loading = false;
    }

    /// Save the section behind a UI tab label; unknown labels are a no-op.
    pub async fn save_section(&mut self, label: &str) -> Result<(), ApiError> {
        match Section::from_label(label) {
            Some(section) => self.save(section).await,
            None => {
                warn!("Ignoring save for unknown section label: {}", label);
                Ok(())
            }
        }
    }

    /// Save exactly one section, then re-fetch the whole profile so local
    /// state picks up server-assigned ids and normalization.
    pub async fn save(&mut self, section: Section) -> Result<(), ApiError> {
        info!("Saving section: {}", section.label());
        self.store.loading = true;
        let result = match section {
            Section::Personal => self.save_personal().await,
            Section::CareerProfile => self.save_career().await,
            Section::Education => self.save_education().await,
            Section::Experience => self.save_experience().await,
            Section::Projects => self.save_projects().await,
            Section::Ai => self.save_ai_preferences().await,
        };
        // Loading clears on every path; local edits survive a failure.
        self.store.loading = false;
        result?;

        self.fetch_profile_data().await;
        Ok(())
    }

    async fn save_personal(&mut self) -> Result<(), ApiError> {
        let payload = personal_payload(&self.store.personal_info);
        self.api.upsert_personal(&payload).await
    }

    async fn save_career(&mut self) -> Result<(), ApiError> {
        let payload = career_payload(&self.store.career_profile);
        self.api.upsert_career(&payload).await
    }

    // The repeating sections all follow the same shape: walk every entry
    // sequentially, dispatch per the id classification, and collect a new
    // list that replaces store state in a single assignment. An error
    // aborts the walk and leaves the store as it was.

    async fn save_education(&mut self) -> Result<(), ApiError> {
        let mut saved = Vec::with_capacity(self.store.education.len());
        for entry in self.store.education.clone() {
            let next = match entry.id.save_action(entry.is_blank()) {
                SaveAction::Skip => {
                    if let EntryId::Unknown(raw) = &entry.id {
                        warn!("Skipping education entry with unrecognized id: {}", raw);
                    }
                    entry
                }
                SaveAction::Create => {
                    let created = self
                        .api
                        .create_education(&education_payload(&entry))
                        .await?;
                    promote_education(entry, created)
                }
                SaveAction::Update { server_id } => {
                    self.api
                        .update_education(server_id, &education_payload(&entry))
                        .await?;
                    entry
                }
            };
            saved.push(next);
        }
        self.store.education = saved;
        Ok(())
    }

    async fn save_experience(&mut self) -> Result<(), ApiError> {
        let mut saved = Vec::with_capacity(self.store.experience.len());
        for entry in self.store.experience.clone() {
            let next = match entry.id.save_action(entry.is_blank()) {
                SaveAction::Skip => {
                    if let EntryId::Unknown(raw) = &entry.id {
                        warn!("Skipping experience entry with unrecognized id: {}", raw);
                    }
                    entry
                }
                SaveAction::Create => {
                    let created = self
                        .api
                        .create_experience(&experience_payload(&entry))
                        .await?;
                    promote_experience(entry, created)
                }
                SaveAction::Update { server_id } => {
                    self.api
                        .update_experience(server_id, &experience_payload(&entry))
                        .await?;
                    entry
                }
            };
            saved.push(next);
        }
        self.store.experience = saved;
        Ok(())
    }

    async fn save_projects(&mut self) -> Result<(), ApiError> {
        let mut saved = Vec::with_capacity(self.store.projects.len());
        for entry in self.store.projects.clone() {
            let next = match entry.id.save_action(entry.is_blank()) {
                SaveAction::Skip => {
                    if let EntryId::Unknown(raw) = &entry.id {
                        warn!("Skipping project entry with unrecognized id: {}", raw);
                    }
                    entry
                }
                SaveAction::Create => {
                    let created = self.api.create_project(&project_payload(&entry)).await?;
                    promote_project(entry, created)
                }
                SaveAction::Update { server_id } => {
                    self.api
                        .update_project(server_id, &project_payload(&entry))
                        .await?;
                    entry
                }
            };
            saved.push(next);
        }
        self.store.projects = saved;
        Ok(())
    }

    async fn save_ai_preferences(&mut self) -> Result<(), ApiError> {
        let prefs = self.store.ai_preferences.clone();
        self.api
            .upsert_interests(&interests_payload(&prefs.interests))
            .await?;
        self.api
            .upsert_priorities(&priorities_payload(&prefs))
            .await?;
        Ok(())
    }

    // Entry deletion: a persisted entry is deleted remotely first, and a
    // remote failure blocks the local removal so the row stays visible.

    pub async fn delete_education_entry(&mut self, index: usize) -> Result<(), ApiError> {
        let Some(entry) = self.store.education.get(index) else {
            return Ok(());
        };
        if let Some(server_id) = entry.id.server_id() {
            self.api.delete_education(server_id).await?;
        }
        self.store.remove_education_at(index);
        Ok(())
    }

    pub async fn delete_experience_entry(&mut self, index: usize) -> Result<(), ApiError> {
        let Some(entry) = self.store.experience.get(index) else {
            return Ok(());
        };
        if let Some(server_id) = entry.id.server_id() {
            self.api.delete_experience(server_id).await?;
        }
        self.store.remove_experience_at(index);
        Ok(())
    }

    pub async fn delete_project_entry(&mut self, index: usize) -> Result<(), ApiError> {
        let Some(entry) = self.store.projects.get(index) else {
            return Ok(());
        };
        if let Some(server_id) = entry.id.server_id() {
            self.api.delete_project(server_id).await?;
        }
        self.store.remove_project_at(index);
        Ok(())
    }

    fn apply_profile_data(&mut self, data: ProfileData) {
        self.store.personal_info = personal_info_from_wire(&data);
        self.store.career_profile = career_profile_from_wire(&data);
        self.store.education =
            map_section(&data.education_profiles, education_from_wire, EducationEntry::blank);
        self.store.experience = map_section(
            &data.experience_profiles,
            experience_from_wire,
            ExperienceEntry::blank,
        );
        self.store.projects =
            map_section(&data.project_profiles, project_from_wire, ProjectEntry::blank);
        self.store.ai_preferences = ai_preferences_from_wire(&data);
        self.store.profile_data = Some(data);
    }
}

// ===== Wire -> local mapping =====

fn entry_id_from_wire(id: Option<i64>) -> EntryId {
    match id {
        Some(server_id) => EntryId::Persisted { server_id },
        None => EntryId::Unsaved,
    }
}

/// Render prioritized goals as `"<priority>. <goal_display>"` lines sorted
/// ascending, falling back to the raw goal string when none exist.
fn format_goals(goals: &[UserGoalData], fallback: Option<&str>) -> String {
    if goals.is_empty() {
        return fallback.unwrap_or_default().to_string();
    }
    let mut sorted: Vec<&UserGoalData> = goals.iter().collect();
    sorted.sort_by_key(|g| g.priority);
    sorted
        .iter()
        .map(|g| format!("{}. {}", g.priority, g.goal_display.as_deref().unwrap_or_default()))
        .collect::<Vec<_>>()
        .join("\n")
}

fn personal_info_from_wire(data: &ProfileData) -> PersonalInfo {
    let personal = data.personal_info.clone().unwrap_or_default();
    let name = format!(
        "{} {}",
        personal.first_name.as_deref().unwrap_or_default(),
        personal.last_name.as_deref().unwrap_or_default()
    )
    .trim()
    .to_string();

    PersonalInfo {
        name,
        email: personal.email.unwrap_or_default(),
        phone: personal.phone_number.unwrap_or_default(),
        country: personal.country.unwrap_or_default(),
        goal: format_goals(&data.user_goals, personal.goal.as_deref()),
    }
}

fn career_profile_from_wire(data: &ProfileData) -> CareerProfile {
    let career = data.career_profile.clone().unwrap_or_default();
    CareerProfile {
        industry: career.industry.unwrap_or_default(),
        job_title: career.job_title.unwrap_or_default(),
        profile_summary: career.profile_summary.unwrap_or_default(),
    }
}

fn education_from_wire(data: &EducationData) -> EducationEntry {
    EducationEntry {
        id: entry_id_from_wire(data.id),
        degree: data.degree.clone().unwrap_or_default(),
        school: data.school.clone().unwrap_or_default(),
        start_date: data.start_date.clone().unwrap_or_default(),
        end_date: data.end_date.clone().unwrap_or_default(),
        is_studying: data.is_currently_studying,
        description: data.extra_curricular.clone().unwrap_or_default(),
    }
}

fn experience_from_wire(data: &ExperienceData) -> ExperienceEntry {
    ExperienceEntry {
        id: entry_id_from_wire(data.id),
        job_title: data.job_title.clone().unwrap_or_default(),
        company: data.company.clone().unwrap_or_default(),
        start_date: data.start_date.clone().unwrap_or_default(),
        end_date: data.end_date.clone().unwrap_or_default(),
        is_currently_working: data.is_currently_working,
        description: data.description.clone().unwrap_or_default(),
    }
}

fn project_from_wire(data: &ProjectData) -> ProjectEntry {
    ProjectEntry {
        id: entry_id_from_wire(data.id),
        name: data.project_name.clone().unwrap_or_default(),
        start_date: data.start_date.clone().unwrap_or_default(),
        end_date: data.end_date.clone().unwrap_or_default(),
        is_ongoing: data.is_ongoing,
        description: data.description.clone().unwrap_or_default(),
    }
}

fn ai_preferences_from_wire(data: &ProfileData) -> AiPreferences {
    let interest = data.opportunities_interest.clone().unwrap_or_default();
    let priority = data.recommendation_priority.clone().unwrap_or_default();
    AiPreferences {
        interests: OpportunityInterests {
            scholarships: interest.scholarships,
            jobs: interest.jobs,
            grants: interest.grants,
            internships: interest.internships,
        },
        priorities: RecommendationPriorities {
            academic_background: priority.academic_background,
            work_experience: priority.work_experience,
            preferred_locations: priority.preferred_locations,
            others: priority.others,
        },
        salary_expectation: priority.additional_preferences.unwrap_or_default(),
    }
}

/// An empty backend array becomes exactly one blank placeholder row so the
/// UI always has an editable entry.
fn map_section<W, L>(rows: &[W], map: impl Fn(&W) -> L, blank: fn() -> L) -> Vec<L> {
    if rows.is_empty() {
        vec![blank()]
    } else {
        rows.iter().map(map).collect()
    }
}

// ===== Local -> wire payloads =====

pub fn personal_payload(info: &PersonalInfo) -> PersonalInfoPayload {
    let (first_name, last_name) = info.split_name();
    PersonalInfoPayload {
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        email: info.email.clone(),
        phone_number: info.phone.clone(),
        country: info.country.clone(),
        goal: info.goal.clone(),
    }
}

pub fn career_payload(profile: &CareerProfile) -> CareerProfilePayload {
    CareerProfilePayload {
        industry: profile.industry.clone(),
        job_title: profile.job_title.clone(),
        profile_summary: profile.profile_summary.clone(),
    }
}

pub fn education_payload(entry: &EducationEntry) -> EducationPayload {
    EducationPayload {
        degree: entry.degree.clone(),
        school: entry.school.clone(),
        start_date: entry.start_date.clone(),
        // Never send a stale end date for an ongoing course of study.
        end_date: (!entry.is_studying).then(|| entry.end_date.clone()),
        is_currently_studying: entry.is_studying,
        extra_curricular: entry.description.clone(),
    }
}

pub fn experience_payload(entry: &ExperienceEntry) -> ExperiencePayload {
    ExperiencePayload {
        job_title: entry.job_title.clone(),
        company: entry.company.clone(),
        start_date: entry.start_date.clone(),
        end_date: (!entry.is_currently_working).then(|| entry.end_date.clone()),
        is_currently_working: entry.is_currently_working,
        description: entry.description.clone(),
    }
}

pub fn project_payload(entry: &ProjectEntry) -> ProjectPayload {
    ProjectPayload {
        project_name: entry.name.clone(),
        start_date: entry.start_date.clone(),
        end_date: (!entry.is_ongoing).then(|| entry.end_date.clone()),
        is_ongoing: entry.is_ongoing,
        description: entry.description.clone(),
    }
}

pub fn interests_payload(interests: &OpportunityInterests) -> OpportunitiesInterestPayload {
    OpportunitiesInterestPayload {
        scholarships: interests.scholarships,
        jobs: interests.jobs,
        grants: interests.grants,
        internships: interests.internships,
    }
}

pub fn priorities_payload(prefs: &AiPreferences) -> RecommendationPriorityPayload {
    RecommendationPriorityPayload {
        academic_background: prefs.priorities.academic_background,
        work_experience: prefs.priorities.work_experience,
        preferred_locations: prefs.priorities.preferred_locations,
        others: prefs.priorities.others,
        additional_preferences: prefs.salary_expectation.clone(),
    }
}

fn promote_education(entry: EducationEntry, created_id: Option<i64>) -> EducationEntry {
    match created_id {
        Some(server_id) => EducationEntry {
            id: EntryId::Persisted { server_id },
            ..entry
        },
        None => entry,
    }
}

fn promote_experience(entry: ExperienceEntry, created_id: Option<i64>) -> ExperienceEntry {
    match created_id {
        Some(server_id) => ExperienceEntry {
            id: EntryId::Persisted { server_id },
            ..entry
        },
        None => entry,
    }
}

fn promote_project(entry: ProjectEntry, created_id: Option<i64>) -> ProjectEntry {
    match created_id {
        Some(server_id) => ProjectEntry {
            id: EntryId::Persisted { server_id },
            ..entry
        },
        None => entry,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::profile_data::PersonalInfoData;

    #[test]
    fn test_section_labels() {
        assert_eq!(Section::from_label("Personal"), Some(Section::Personal));
        assert_eq!(
            Section::from_label("Career Profile"),
            Some(Section::CareerProfile)
        );
        assert_eq!(Section::from_label("Education"), Some(Section::Education));
        assert_eq!(Section::from_label("Experience"), Some(Section::Experience));
        assert_eq!(Section::from_label("Projects"), Some(Section::Projects));
        assert_eq!(Section::from_label("AI"), Some(Section::Ai));
        assert_eq!(Section::from_label("Billing"), None);
        assert_eq!(Section::from_label("personal"), None);
    }

    #[test]
    fn test_goals_sorted_and_formatted() {
        let goals = vec![
            UserGoalData {
                priority: 2,
                goal_display: Some("Find a scholarship".to_string()),
            },
            UserGoalData {
                priority: 1,
                goal_display: Some("Land an internship".to_string()),
            },
        ];
        assert_eq!(
            format_goals(&goals, Some("ignored")),
            "1. Land an internship\n2. Find a scholarship"
        );
    }

    #[test]
    fn test_goals_fall_back_to_raw_string() {
        assert_eq!(format_goals(&[], Some("Become a data engineer")), "Become a data engineer");
        assert_eq!(format_goals(&[], None), "");
    }

    #[test]
    fn test_personal_name_round_trip() {
        let data = ProfileData {
            personal_info: Some(PersonalInfoData {
                first_name: Some("Ada".to_string()),
                last_name: Some("Lovelace".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };
        let info = personal_info_from_wire(&data);
        assert_eq!(info.name, "Ada Lovelace");

        let payload = personal_payload(&info);
        assert_eq!(payload.first_name, "Ada");
        assert_eq!(payload.last_name, "Lovelace");
    }

    #[test]
    fn test_single_word_name_has_empty_last_name() {
        let info = PersonalInfo {
            name: "Madonna".to_string(),
            ..Default::default()
        };
        let payload = personal_payload(&info);
        assert_eq!(payload.first_name, "Madonna");
        assert_eq!(payload.last_name, "");
    }

    #[test]
    fn test_education_wire_mapping() {
        let data = EducationData {
            id: Some(12),
            degree: Some("BSc Computer Science".to_string()),
            school: Some("ETH Zurich".to_string()),
            start_date: Some("2021-09-01".to_string()),
            end_date: None,
            is_currently_studying: true,
            extra_curricular: Some("Robotics club".to_string()),
        };
        let entry = education_from_wire(&data);
        assert_eq!(entry.id, EntryId::Persisted { server_id: 12 });
        assert!(entry.is_studying);
        assert_eq!(entry.description, "Robotics club");
        assert_eq!(entry.end_date, "");
    }

    #[test]
    fn test_end_date_omitted_while_active() {
        let mut entry = EducationEntry::blank();
        entry.end_date = "2025-06-30".to_string();
        entry.is_studying = true;

        let payload = education_payload(&entry);
        assert_eq!(payload.end_date, None);

        let json = serde_json::to_value(&payload).expect("serializable");
        assert!(json.get("end_date").is_none());

        entry.is_studying = false;
        let payload = education_payload(&entry);
        assert_eq!(payload.end_date, Some("2025-06-30".to_string()));
    }

    #[test]
    fn test_experience_and_project_end_date_suppression() {
        let mut exp = ExperienceEntry::blank();
        exp.end_date = "2024-01-01".to_string();
        exp.is_currently_working = true;
        assert_eq!(experience_payload(&exp).end_date, None);

        let mut project = ProjectEntry::blank();
        project.end_date = "2024-01-01".to_string();
        project.is_ongoing = true;
        assert_eq!(project_payload(&project).end_date, None);
    }

    #[test]
    fn test_interest_flags_round_trip() {
        let interests =
            OpportunityInterests::from_labels(&["Jobs".to_string(), "Grants".to_string()]);
        let payload = interests_payload(&interests);
        assert_eq!(
            serde_json::to_value(&payload).expect("serializable"),
            serde_json::json!({
                "scholarships": false,
                "jobs": true,
                "grants": true,
                "internships": false,
            })
        );
    }

    #[test]
    fn test_salary_expectation_travels_in_additional_preferences() {
        let prefs = AiPreferences {
            salary_expectation: "80-90k CHF".to_string(),
            ..Default::default()
        };
        let payload = priorities_payload(&prefs);
        assert_eq!(payload.additional_preferences, "80-90k CHF");
    }

    #[test]
    fn test_empty_wire_sections_yield_single_blank_entry() {
        let entries = map_section(&[], education_from_wire, EducationEntry::blank);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id, EntryId::Unsaved);
        assert!(entries[0].is_blank());
        assert!(!entries[0].is_studying);
    }

    #[test]
    fn test_ai_preferences_wire_mapping() {
        let data = ProfileData {
            opportunities_interest: Some(crate::types::profile_data::OpportunitiesInterestData {
                scholarships: true,
                jobs: false,
                grants: false,
                internships: true,
            }),
            recommendation_priority: Some(
                crate::types::profile_data::RecommendationPriorityData {
                    academic_background: true,
                    work_experience: false,
                    preferred_locations: true,
                    others: false,
                    additional_preferences: Some("remote only".to_string()),
                },
            ),
            ..Default::default()
        };
        let prefs = ai_preferences_from_wire(&data);
        assert!(prefs.interests.scholarships);
        assert!(prefs.interests.internships);
        assert!(!prefs.interests.jobs);
        assert_eq!(prefs.interests.labels(), vec!["Scholarships", "Internships"]);
        assert_eq!(prefs.salary_expectation, "remote only");
    }
}
