pub mod content;
pub mod session;

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

// --- Walkthrough steps ---

/// One page of the fixed linear walkthrough, in display order.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum Step {
    #[default]
    Intro,
    Framework,
    Brookfield,
    Gibbs,
    Schon,
    Rolfe,
    Kolb,
    Examples,
    AiLab,
    Resources,
}

pub const STEP_COUNT: usize = 10;

impl Step {
    pub const ALL: [Step; STEP_COUNT] = [
        Step::Intro,
        Step::Framework,
        Step::Brookfield,
        Step::Gibbs,
        Step::Schon,
        Step::Rolfe,
        Step::Kolb,
        Step::Examples,
        Step::AiLab,
        Step::Resources,
    ];

    pub fn ordinal(self) -> usize {
        self as usize
    }

    pub fn from_ordinal(n: usize) -> Option<Step> {
        Step::ALL.get(n).copied()
    }

    /// Header/nav label, matching the original page titles.
    pub fn label(self) -> &'static str {
        match self {
            Step::Intro => "Welcome",
            Step::Framework => "PSF 2023 Framework",
            Step::Brookfield => "Brookfield",
            Step::Gibbs => "Gibbs",
            Step::Schon => "Schön",
            Step::Rolfe => "Rolfe",
            Step::Kolb => "Kolb",
            Step::Examples => "Case Studies",
            Step::AiLab => "Practise Lab",
            Step::Resources => "References",
        }
    }

    pub fn next(self) -> Option<Step> {
        Step::from_ordinal(self.ordinal() + 1)
    }

    pub fn prev(self) -> Option<Step> {
        self.ordinal().checked_sub(1).and_then(Step::from_ordinal)
    }

    pub fn is_initial(self) -> bool {
        self == Step::Intro
    }

    pub fn is_terminal(self) -> bool {
        self == Step::Resources
    }

    /// The reflective model shown on this step, if it is a model page.
    pub fn reflective_model(self) -> Option<ModelKind> {
        match self {
            Step::Brookfield => Some(ModelKind::Brookfield),
            Step::Gibbs => Some(ModelKind::Gibbs),
            Step::Schon => Some(ModelKind::Schon),
            Step::Rolfe => Some(ModelKind::Rolfe),
            Step::Kolb => Some(ModelKind::Kolb),
            _ => None,
        }
    }
}

// --- Reflective models ---

/// One of the five reflective-practice frameworks covered by the walkthrough.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum ModelKind {
    Brookfield,
    Gibbs,
    Schon,
    Rolfe,
    Kolb,
}

impl ModelKind {
    pub const ALL: [ModelKind; 5] = [
        ModelKind::Brookfield,
        ModelKind::Gibbs,
        ModelKind::Schon,
        ModelKind::Rolfe,
        ModelKind::Kolb,
    ];

    pub fn title(self) -> &'static str {
        match self {
            ModelKind::Brookfield => "Brookfield's Four Lenses",
            ModelKind::Gibbs => "Gibbs' Reflective Cycle",
            ModelKind::Schon => "Schön's Reflective Practitioner",
            ModelKind::Rolfe => "Rolfe's What? So What? Now What?",
            ModelKind::Kolb => "Kolb's Experiential Learning Cycle",
        }
    }

    pub fn step(self) -> Step {
        match self {
            ModelKind::Brookfield => Step::Brookfield,
            ModelKind::Gibbs => Step::Gibbs,
            ModelKind::Schon => Step::Schon,
            ModelKind::Rolfe => Step::Rolfe,
            ModelKind::Kolb => Step::Kolb,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            ModelKind::Brookfield => 0,
            ModelKind::Gibbs => 1,
            ModelKind::Schon => 2,
            ModelKind::Rolfe => 3,
            ModelKind::Kolb => 4,
        }
    }
}

// --- Content records ---

/// One stage (or lens) of a reflective model, with its critical questions
/// and the PSF dimensions it typically evidences.
#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StageDetail {
    pub id: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub questions: &'static [&'static str],
    pub psf_mapping: &'static [&'static str],
}

/// One code of the PSF 2023 taxonomy (A1-5, K1-5, V1-5).
#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PsfDimension {
    pub code: &'static str,
    pub title: &'static str,
}

/// Staff role categories used by the case-study filter.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum StaffRole {
    Lecturing,
    Leadership,
    ProfessionalServices,
    TechnicalServices,
}

impl StaffRole {
    pub const ALL: [StaffRole; 4] = [
        StaffRole::Lecturing,
        StaffRole::Leadership,
        StaffRole::ProfessionalServices,
        StaffRole::TechnicalServices,
    ];

    pub fn label(self) -> &'static str {
        match self {
            StaffRole::Lecturing => "Lecturing",
            StaffRole::Leadership => "Leadership",
            StaffRole::ProfessionalServices => "Professional Services",
            StaffRole::TechnicalServices => "Technical Services",
        }
    }
}

#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CaseStudy {
    pub role: StaffRole,
    pub title: &'static str,
    pub scenario: &'static str,
    pub reflection: &'static str,
}

#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Reading {
    pub author: &'static str,
    pub year: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub url: &'static str,
}

/// The "PSF 2023 connection" callout shown on each model page.
#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PsfConnection {
    pub title: &'static str,
    pub body: &'static str,
}

// --- Coaching request/result ---

/// A validated coaching submission. Both fields are non-empty after
/// trimming, so an empty form can never reach the advice capability.
#[derive(Debug, Clone, PartialEq)]
pub struct AdviceRequest {
    role: String,
    experience: String,
}

impl AdviceRequest {
    pub fn new(role: &str, experience: &str) -> Result<AdviceRequest, String> {
        let role = role.trim();
        let experience = experience.trim();
        if role.is_empty() {
            return Err("role/discipline must not be empty".to_string());
        }
        if experience.is_empty() {
            return Err("experience text must not be empty".to_string());
        }
        Ok(AdviceRequest {
            role: role.to_string(),
            experience: experience.to_string(),
        })
    }

    pub fn role(&self) -> &str {
        &self.role
    }

    pub fn experience(&self) -> &str {
        &self.experience
    }
}

/// The structured critique returned by the advice capability.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Advice {
    pub critique: String,
    pub dimension_tags: Vec<String>,
    pub coaching_questions: Vec<String>,
}

// --- AI Settings ---

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AiSettings {
    pub provider: String,
    pub api_key: String,
    pub model: String,
}

/// Resolve the global config directory (~/.reflecthe/).
pub fn config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".reflecthe")
}

fn settings_path() -> PathBuf {
    config_dir().join("settings.json")
}

/// Read settings from disk, falling back to the environment for the
/// credential (`REFLECTHE_API_KEY`). Missing or corrupt files yield defaults.
pub fn read_settings() -> AiSettings {
    let path = settings_path();
    let mut settings: AiSettings = if path.exists() {
        fs::read_to_string(&path)
            .ok()
            .and_then(|s| serde_json::from_str(&s).ok())
            .unwrap_or_default()
    } else {
        AiSettings::default()
    };
    if settings.api_key.is_empty() {
        if let Ok(key) = std::env::var("REFLECTHE_API_KEY") {
            settings.api_key = key;
        }
    }
    settings
}

pub fn write_settings(settings: &AiSettings) -> Result<(), String> {
    let dir = config_dir();
    fs::create_dir_all(&dir).map_err(|e| e.to_string())?;
    let json = serde_json::to_string_pretty(settings).map_err(|e| e.to_string())?;
    fs::write(settings_path(), json).map_err(|e| e.to_string())
}

pub fn ai_configured(settings: &AiSettings) -> bool {
    !settings.provider.is_empty()
        && !settings.model.is_empty()
        && (settings.provider == "ollama" || !settings.api_key.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_round_trip_through_ordinals() {
        for (i, step) in Step::ALL.iter().enumerate() {
            assert_eq!(step.ordinal(), i);
            assert_eq!(Step::from_ordinal(i), Some(*step));
        }
        assert_eq!(Step::from_ordinal(STEP_COUNT), None);
    }

    #[test]
    fn boundary_steps() {
        assert!(Step::Intro.is_initial());
        assert!(Step::Resources.is_terminal());
        assert_eq!(Step::Intro.prev(), None);
        assert_eq!(Step::Resources.next(), None);
        assert_eq!(Step::Intro.next(), Some(Step::Framework));
    }

    #[test]
    fn model_pages_map_both_ways() {
        for model in ModelKind::ALL {
            assert_eq!(model.step().reflective_model(), Some(model));
        }
        assert_eq!(Step::Intro.reflective_model(), None);
        assert_eq!(Step::AiLab.reflective_model(), None);
    }

    #[test]
    fn advice_request_rejects_blank_fields() {
        assert!(AdviceRequest::new("", "something happened").is_err());
        assert!(AdviceRequest::new("Senior Lecturer", "   ").is_err());
        let req = AdviceRequest::new(" Senior Lecturer ", "I ran a seminar.").unwrap();
        assert_eq!(req.role(), "Senior Lecturer");
        assert_eq!(req.experience(), "I ran a seminar.");
    }

    #[test]
    fn ai_configured_requires_key_except_ollama() {
        let mut s = AiSettings {
            provider: "google".into(),
            api_key: String::new(),
            model: "gemini-2.5-flash".into(),
        };
        assert!(!ai_configured(&s));
        s.api_key = "k".into();
        assert!(ai_configured(&s));
        s = AiSettings {
            provider: "ollama".into(),
            api_key: String::new(),
            model: "llama3".into(),
        };
        assert!(ai_configured(&s));
    }
}
