// src/profile/models.rs
//! Local editable shapes for the six profile sections. Unlike the wire
//! structs, every field here is always defined: blanks are empty strings,
//! not nulls, so the UI never has to null-check.

use crate::profile::entry_id::EntryId;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PersonalInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub country: String,
    pub goal: String,
}

impl PersonalInfo {
    /// Split the display name into (first, last) on the first space
    /// boundary. A single-word name has an empty last name.
    pub fn split_name(&self) -> (&str, &str) {
        match self.name.split_once(' ') {
            Some((first, last)) => (first, last),
            None => (self.name.as_str(), ""),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CareerProfile {
    pub industry: String,
    pub job_title: String,
    pub profile_summary: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EducationEntry {
    pub id: EntryId,
    pub degree: String,
    pub school: String,
    pub start_date: String,
    pub end_date: String,
    pub is_studying: bool,
    pub description: String,
}

impl EducationEntry {
    pub fn blank() -> Self {
        Self {
            id: EntryId::Unsaved,
            degree: String::new(),
            school: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            is_studying: false,
            description: String::new(),
        }
    }

    /// Entry added this session, before any save.
    pub fn added_now() -> Self {
        Self {
            id: EntryId::pending_now(),
            ..Self::blank()
        }
    }

    pub fn is_blank(&self) -> bool {
        self.degree.is_empty()
            && self.school.is_empty()
            && self.start_date.is_empty()
            && self.end_date.is_empty()
            && !self.is_studying
            && self.description.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExperienceEntry {
    pub id: EntryId,
    pub job_title: String,
    pub company: String,
    pub start_date: String,
    pub end_date: String,
    pub is_currently_working: bool,
    pub description: String,
}

impl ExperienceEntry {
    pub fn blank() -> Self {
        Self {
            id: EntryId::Unsaved,
            job_title: String::new(),
            company: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            is_currently_working: false,
            description: String::new(),
        }
    }

    pub fn added_now() -> Self {
        Self {
            id: EntryId::pending_now(),
            ..Self::blank()
        }
    }

    pub fn is_blank(&self) -> bool {
        self.job_title.is_empty()
            && self.company.is_empty()
            && self.start_date.is_empty()
            && self.end_date.is_empty()
            && !self.is_currently_working
            && self.description.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectEntry {
    pub id: EntryId,
    pub name: String,
    pub start_date: String,
    pub end_date: String,
    pub is_ongoing: bool,
    pub description: String,
}

impl ProjectEntry {
    pub fn blank() -> Self {
        Self {
            id: EntryId::Unsaved,
            name: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            is_ongoing: false,
            description: String::new(),
        }
    }

    pub fn added_now() -> Self {
        Self {
            id: EntryId::pending_now(),
            ..Self::blank()
        }
    }

    pub fn is_blank(&self) -> bool {
        self.name.is_empty()
            && self.start_date.is_empty()
            && self.end_date.is_empty()
            && !self.is_ongoing
            && self.description.is_empty()
    }
}

// ===== AI preferences =====

/// Label vocabulary for the opportunity multi-select, in display order.
pub const INTEREST_LABELS: [&str; 4] = ["Scholarships", "Jobs", "Grants", "Internships"];

/// Label vocabulary for the recommendation-priority multi-select.
pub const PRIORITY_LABELS: [&str; 4] = [
    "academic background",
    "work experience",
    "preferred locations",
    "other",
];

/// Which opportunity kinds the user wants surfaced. A typed record rather
/// than a label array so the wire flags map field-for-field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OpportunityInterests {
    pub scholarships: bool,
    pub jobs: bool,
    pub grants: bool,
    pub internships: bool,
}

impl OpportunityInterests {
    /// Build from UI label membership. Matching is by exact label.
    pub fn from_labels(labels: &[String]) -> Self {
        let has = |label: &str| labels.iter().any(|l| l == label);
        Self {
            scholarships: has("Scholarships"),
            jobs: has("Jobs"),
            grants: has("Grants"),
            internships: has("Internships"),
        }
    }

    /// Selected labels in the fixed vocabulary order.
    pub fn labels(&self) -> Vec<&'static str> {
        let flags = [self.scholarships, self.jobs, self.grants, self.internships];
        INTEREST_LABELS
            .iter()
            .zip(flags)
            .filter_map(|(label, set)| set.then_some(*label))
            .collect()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecommendationPriorities {
    pub academic_background: bool,
    pub work_experience: bool,
    pub preferred_locations: bool,
    pub others: bool,
}

impl RecommendationPriorities {
    pub fn from_labels(labels: &[String]) -> Self {
        let has = |label: &str| labels.iter().any(|l| l == label);
        Self {
            academic_background: has("academic background"),
            work_experience: has("work experience"),
            preferred_locations: has("preferred locations"),
            others: has("other"),
        }
    }

    pub fn labels(&self) -> Vec<&'static str> {
        let flags = [
            self.academic_background,
            self.work_experience,
            self.preferred_locations,
            self.others,
        ];
        PRIORITY_LABELS
            .iter()
            .zip(flags)
            .filter_map(|(label, set)| set.then_some(*label))
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AiPreferences {
    pub interests: OpportunityInterests,
    pub priorities: RecommendationPriorities,
    pub salary_expectation: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_name_on_first_space() {
        let info = PersonalInfo {
            name: "Ada Lovelace".to_string(),
            ..Default::default()
        };
        assert_eq!(info.split_name(), ("Ada", "Lovelace"));

        let single = PersonalInfo {
            name: "Madonna".to_string(),
            ..Default::default()
        };
        assert_eq!(single.split_name(), ("Madonna", ""));

        let triple = PersonalInfo {
            name: "Mary Jane Watson".to_string(),
            ..Default::default()
        };
        assert_eq!(triple.split_name(), ("Mary", "Jane Watson"));
    }

    #[test]
    fn test_interests_from_labels() {
        let interests =
            OpportunityInterests::from_labels(&["Jobs".to_string(), "Grants".to_string()]);
        assert!(!interests.scholarships);
        assert!(interests.jobs);
        assert!(interests.grants);
        assert!(!interests.internships);
    }

    #[test]
    fn test_interest_labels_keep_fixed_order() {
        let interests = OpportunityInterests {
            scholarships: true,
            jobs: false,
            grants: true,
            internships: true,
        };
        assert_eq!(interests.labels(), vec!["Scholarships", "Grants", "Internships"]);
    }

    #[test]
    fn test_unknown_labels_are_ignored() {
        let interests = OpportunityInterests::from_labels(&[
            "jobs".to_string(), // wrong case, no match
            "Fellowships".to_string(),
        ]);
        assert_eq!(interests, OpportunityInterests::default());
    }

    #[test]
    fn test_priorities_label_round_trip() {
        let priorities = RecommendationPriorities::from_labels(&[
            "work experience".to_string(),
            "other".to_string(),
        ]);
        assert!(priorities.work_experience);
        assert!(priorities.others);
        assert!(!priorities.academic_background);
        assert_eq!(priorities.labels(), vec!["work experience", "other"]);
    }

    #[test]
    fn test_blank_detection() {
        assert!(EducationEntry::blank().is_blank());
        assert!(ExperienceEntry::blank().is_blank());
        assert!(ProjectEntry::blank().is_blank());

        let mut entry = EducationEntry::blank();
        entry.school = "MIT".to_string();
        assert!(!entry.is_blank());

        let mut entry = ExperienceEntry::blank();
        entry.is_currently_working = true;
        assert!(!entry.is_blank());
    }
}
