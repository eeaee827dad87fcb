// src/profile/store.rs
use crate::profile::models::{
    AiPreferences, CareerProfile, EducationEntry, ExperienceEntry, PersonalInfo, ProjectEntry,
};
use crate::types::profile_data::ProfileData;

/// Single source of truth for the editable profile state.
///
/// Slices are replaced wholesale by the setters; no validation happens here.
/// Every repeating section keeps the invariant that its list is never empty:
/// removing the last entry re-inserts a blank placeholder row.
#[derive(Debug, Default)]
pub struct ProfileStore {
    pub loading: bool,
    pub error: Option<String>,
    /// Raw server snapshot from the last successful fetch. Replaced, never
    /// merged. Not mutated by edits.
    pub profile_data: Option<ProfileData>,
    pub personal_info: PersonalInfo,
    pub career_profile: CareerProfile,
    pub education: Vec<EducationEntry>,
    pub experience: Vec<ExperienceEntry>,
    pub projects: Vec<ProjectEntry>,
    pub ai_preferences: AiPreferences,
}

impl ProfileStore {
    pub fn new() -> Self {
        Self {
            loading: true,
            ..Self::default()
        }
    }

    // Direct slice replacement, mirroring the UI edit handlers.

    pub fn set_personal_info(&mut self, info: PersonalInfo) {
        self.personal_info = info;
    }

    pub fn set_career_profile(&mut self, profile: CareerProfile) {
        self.career_profile = profile;
    }

    pub fn set_education(&mut self, entries: Vec<EducationEntry>) {
        self.education = entries;
    }

    pub fn set_experience(&mut self, entries: Vec<ExperienceEntry>) {
        self.experience = entries;
    }

    pub fn set_projects(&mut self, entries: Vec<ProjectEntry>) {
        self.projects = entries;
    }

    pub fn set_ai_preferences(&mut self, preferences: AiPreferences) {
        self.ai_preferences = preferences;
    }

    // Add helpers append a fresh temp-keyed entry.

    pub fn add_education(&mut self) {
        self.education.push(EducationEntry::added_now());
    }

    pub fn add_experience(&mut self) {
        self.experience.push(ExperienceEntry::added_now());
    }

    pub fn add_project(&mut self) {
        self.projects.push(ProjectEntry::added_now());
    }

    // Local removal. Remote deletion (when the entry is persisted) is the
    // sync layer's job and must happen before these are called.

    pub fn remove_education_at(&mut self, index: usize) {
        remove_keeping_one(&mut self.education, index, EducationEntry::blank);
    }

    pub fn remove_experience_at(&mut self, index: usize) {
        remove_keeping_one(&mut self.experience, index, ExperienceEntry::blank);
    }

    pub fn remove_project_at(&mut self, index: usize) {
        remove_keeping_one(&mut self.projects, index, ProjectEntry::blank);
    }
}

fn remove_keeping_one<T>(entries: &mut Vec<T>, index: usize, blank: fn() -> T) {
    if index >= entries.len() {
        return;
    }
    entries.remove(index);
    if entries.is_empty() {
        entries.push(blank());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::entry_id::EntryId;

    #[test]
    fn test_initial_state() {
        let store = ProfileStore::new();
        assert!(store.loading);
        assert_eq!(store.error, None);
        assert!(store.profile_data.is_none());
        assert!(store.education.is_empty());
        assert!(store.experience.is_empty());
        assert!(store.projects.is_empty());
        assert_eq!(store.personal_info.name, "");
    }

    #[test]
    fn test_add_appends_pending_entry() {
        let mut store = ProfileStore::new();
        store.add_education();
        assert_eq!(store.education.len(), 1);
        assert!(matches!(store.education[0].id, EntryId::Pending { .. }));
        assert!(store.education[0].is_blank());
    }

    #[test]
    fn test_removing_last_entry_reinserts_blank() {
        let mut store = ProfileStore::new();
        store.add_experience();
        store.remove_experience_at(0);

        assert_eq!(store.experience.len(), 1);
        assert_eq!(store.experience[0].id, EntryId::Unsaved);
        assert!(store.experience[0].is_blank());
    }

    #[test]
    fn test_removing_one_of_many_keeps_the_rest() {
        let mut store = ProfileStore::new();
        store.add_project();
        store.add_project();
        let kept = store.projects[1].clone();

        store.remove_project_at(0);
        assert_eq!(store.projects.len(), 1);
        assert_eq!(store.projects[0], kept);
    }

    #[test]
    fn test_out_of_bounds_removal_is_ignored() {
        let mut store = ProfileStore::new();
        store.add_education();
        store.remove_education_at(5);
        assert_eq!(store.education.len(), 1);
    }
}
