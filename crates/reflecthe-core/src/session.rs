//! Walkthrough session state. All mutable view state lives in one place so
//! the reset-on-navigation contract is enforced by a single transition,
//! rather than scattered across independent cells.

use crate::content;
use crate::{Advice, CaseStudy, ModelKind, StaffRole, StageDetail, Step};

/// The complete mutable state of one walkthrough session: current step, the
/// five independent per-model stage selections, the case-study role filter,
/// the held coaching advice, and the single in-flight request flag.
#[derive(Debug, Default)]
pub struct Session {
    step: Step,
    selections: [Option<&'static StageDetail>; 5],
    role_filter: Option<StaffRole>,
    advice: Option<Advice>,
    awaiting_advice: bool,
}

impl Session {
    pub fn new() -> Session {
        Session::default()
    }

    pub fn step(&self) -> Step {
        self.step
    }

    /// Navigate to a step. A change of step clears every per-model selection
    /// and any held advice; navigating to the current step does nothing.
    pub fn go_to(&mut self, step: Step) {
        if step == self.step {
            return;
        }
        self.step = step;
        self.selections = [None; 5];
        self.advice = None;
    }

    /// Navigate by raw ordinal. Out-of-range ordinals are ignored and
    /// reported as `false`; the UI only ever supplies valid ones.
    pub fn go_to_ordinal(&mut self, ordinal: usize) -> bool {
        match Step::from_ordinal(ordinal) {
            Some(step) => {
                self.go_to(step);
                true
            }
            None => false,
        }
    }

    /// Move to the next step; a no-op at the terminal step.
    pub fn advance(&mut self) {
        if let Some(next) = self.step.next() {
            self.go_to(next);
        }
    }

    /// Move to the previous step; a no-op at the initial step.
    pub fn retreat(&mut self) {
        if let Some(prev) = self.step.prev() {
            self.go_to(prev);
        }
    }

    /// The Resources page's "return to start" control.
    pub fn restart(&mut self) {
        self.go_to(Step::Intro);
    }

    // --- Per-model stage selection ---

    /// Select a stage on a model page. The stage must belong to that model's
    /// own table; re-selecting the current stage is idempotent. Selections on
    /// other pages are untouched.
    pub fn select_stage(
        &mut self,
        model: ModelKind,
        stage_id: &str,
    ) -> Result<&'static StageDetail, String> {
        let stage = content::find_stage(model, stage_id).ok_or_else(|| {
            format!("'{}' is not a stage of {}", stage_id, model.title())
        })?;
        self.selections[model.index()] = Some(stage);
        Ok(stage)
    }

    pub fn selection(&self, model: ModelKind) -> Option<&'static StageDetail> {
        self.selections[model.index()]
    }

    // --- Case-study filter ---

    /// Set the Examples page role filter; `None` shows all. The filter is
    /// not part of the navigation reset.
    pub fn set_role_filter(&mut self, role: Option<StaffRole>) {
        self.role_filter = role;
    }

    pub fn role_filter(&self) -> Option<StaffRole> {
        self.role_filter
    }

    pub fn case_studies(&self) -> Vec<&'static CaseStudy> {
        content::CASE_STUDIES
            .iter()
            .filter(|c| self.role_filter.map_or(true, |r| c.role == r))
            .collect()
    }

    // --- Coaching request lifecycle ---

    /// Gate a new coaching request. Fails while one is already in flight;
    /// otherwise marks the session busy and returns the step active at
    /// request time, which scopes the eventual response.
    pub fn begin_advice(&mut self) -> Result<Step, String> {
        if self.awaiting_advice {
            return Err("a coaching request is already in flight".to_string());
        }
        self.awaiting_advice = true;
        Ok(self.step)
    }

    /// Store a successful response. Returns `false` (and drops the advice)
    /// if the session has navigated away since the request was issued.
    pub fn complete_advice(&mut self, requested_at: Step, advice: Advice) -> bool {
        self.awaiting_advice = false;
        if self.step == requested_at {
            self.advice = Some(advice);
            true
        } else {
            false
        }
    }

    /// Clear the in-flight flag after a failed request; prior view state is
    /// left untouched so the user can simply resubmit.
    pub fn fail_advice(&mut self) {
        self.awaiting_advice = false;
    }

    pub fn awaiting_advice(&self) -> bool {
        self.awaiting_advice
    }

    pub fn advice(&self) -> Option<&Advice> {
        self.advice.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_advice() -> Advice {
        Advice {
            critique: "The draft is descriptive rather than analytical.".to_string(),
            dimension_tags: vec!["K3: present".to_string()],
            coaching_questions: vec![
                "What assumptions were you making?".to_string(),
                "How would your students describe the session?".to_string(),
                "What does the literature suggest?".to_string(),
            ],
        }
    }

    #[test]
    fn starts_at_intro() {
        let session = Session::new();
        assert_eq!(session.step(), Step::Intro);
        assert!(!session.awaiting_advice());
        assert!(session.advice().is_none());
    }

    #[test]
    fn retreat_then_advance_restores_the_step() {
        for step in Step::ALL {
            if step.is_initial() || step.is_terminal() {
                continue;
            }
            let mut session = Session::new();
            session.go_to(step);
            session.retreat();
            session.advance();
            assert_eq!(session.step(), step);

            session.advance();
            session.retreat();
            assert_eq!(session.step(), step);
        }
    }

    #[test]
    fn boundary_transitions_are_no_ops() {
        let mut session = Session::new();
        session.retreat();
        assert_eq!(session.step(), Step::Intro);

        session.go_to(Step::Resources);
        session.advance();
        assert_eq!(session.step(), Step::Resources);
    }

    #[test]
    fn invalid_ordinals_are_ignored() {
        let mut session = Session::new();
        session.go_to(Step::Gibbs);
        assert!(!session.go_to_ordinal(99));
        assert_eq!(session.step(), Step::Gibbs);
        assert!(session.go_to_ordinal(0));
        assert_eq!(session.step(), Step::Intro);
    }

    #[test]
    fn navigation_clears_selections_and_advice() {
        let mut session = Session::new();
        session.go_to(Step::Gibbs);
        session.select_stage(ModelKind::Gibbs, "description").unwrap();
        session.select_stage(ModelKind::Brookfield, "self").unwrap();
        session.select_stage(ModelKind::Schon, "knowing").unwrap();
        session.select_stage(ModelKind::Rolfe, "what").unwrap();
        session.select_stage(ModelKind::Kolb, "concrete").unwrap();
        let token = session.begin_advice().unwrap();
        assert!(session.complete_advice(token, sample_advice()));
        assert!(session.advice().is_some());

        session.go_to(Step::Examples);
        for model in ModelKind::ALL {
            assert!(session.selection(model).is_none());
        }
        assert!(session.advice().is_none());
    }

    #[test]
    fn navigating_to_the_current_step_keeps_state() {
        let mut session = Session::new();
        session.go_to(Step::Gibbs);
        session.select_stage(ModelKind::Gibbs, "feelings").unwrap();
        session.go_to(Step::Gibbs);
        assert_eq!(
            session.selection(ModelKind::Gibbs).map(|s| s.id),
            Some("feelings")
        );
    }

    #[test]
    fn restart_follows_the_reset_contract() {
        let mut session = Session::new();
        session.go_to(Step::Resources);
        let token = session.begin_advice().unwrap();
        session.complete_advice(token, sample_advice());
        session.restart();
        assert_eq!(session.step(), Step::Intro);
        assert!(session.advice().is_none());
    }

    #[test]
    fn selections_are_independent_across_pages() {
        let mut session = Session::new();
        session.select_stage(ModelKind::Gibbs, "description").unwrap();
        assert_eq!(
            session.selection(ModelKind::Gibbs).map(|s| s.id),
            Some("description")
        );
        assert!(session.selection(ModelKind::Brookfield).is_none());

        // Re-selecting the same stage is idempotent
        session.select_stage(ModelKind::Gibbs, "description").unwrap();
        assert_eq!(
            session.selection(ModelKind::Gibbs).map(|s| s.id),
            Some("description")
        );
    }

    #[test]
    fn selecting_a_foreign_stage_fails() {
        let mut session = Session::new();
        assert!(session.select_stage(ModelKind::Gibbs, "self").is_err());
        assert!(session.selection(ModelKind::Gibbs).is_none());
    }

    #[test]
    fn only_one_request_in_flight() {
        let mut session = Session::new();
        let token = session.begin_advice().unwrap();
        assert!(session.begin_advice().is_err());
        assert!(session.complete_advice(token, sample_advice()));
        // Resolved — a new request may start
        assert!(session.begin_advice().is_ok());
    }

    #[test]
    fn failure_clears_the_flag_and_keeps_prior_state() {
        let mut session = Session::new();
        let token = session.begin_advice().unwrap();
        session.complete_advice(token, sample_advice());

        session.begin_advice().unwrap();
        session.fail_advice();
        assert!(!session.awaiting_advice());
        // The previously held advice survives a failed resubmission
        assert!(session.advice().is_some());
        assert!(session.begin_advice().is_ok());
    }

    #[test]
    fn stale_responses_are_dropped() {
        let mut session = Session::new();
        session.go_to(Step::AiLab);
        let token = session.begin_advice().unwrap();
        session.go_to(Step::Resources);
        assert!(!session.complete_advice(token, sample_advice()));
        assert!(session.advice().is_none());
        assert!(!session.awaiting_advice());
    }

    #[test]
    fn role_filter_narrows_case_studies_and_survives_navigation() {
        let mut session = Session::new();
        assert_eq!(session.case_studies().len(), 4);
        session.set_role_filter(Some(StaffRole::Leadership));
        let filtered = session.case_studies();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].role, StaffRole::Leadership);

        session.go_to(Step::Examples);
        assert_eq!(session.role_filter(), Some(StaffRole::Leadership));
        session.set_role_filter(None);
        assert_eq!(session.case_studies().len(), 4);
    }
}
