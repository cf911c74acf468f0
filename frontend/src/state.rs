//! Top-level view state.
//!
//! The root controller owns a single [`ViewState`]. Loading, error and
//! result are variants of one enum, so setting one clears the others.

use crate::UploadResult;

/// What the main area of the page is showing.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ViewState {
    /// Upload control
    #[default]
    Idle,
    /// Spinner while the request is in flight
    Loading,
    /// Message and a retry button
    Error(String),
    /// Results view
    Success(UploadResult),
}

/// Events reported by the upload control and the child views.
#[derive(Clone, Debug, PartialEq)]
pub enum Transition {
    /// A valid PDF is being sent.
    Submit,
    /// The request settled (successfully or not).
    Settle,
    Succeed(UploadResult),
    Fail(String),
    /// Retry from the error view or reset from the results view.
    Reset,
}

impl ViewState {
    /// Apply a transition in place.
    pub fn apply(&mut self, transition: Transition) {
        let next = match (std::mem::take(self), transition) {
            (_, Transition::Submit) => ViewState::Loading,
            (_, Transition::Succeed(result)) => ViewState::Success(result),
            (_, Transition::Fail(message)) => ViewState::Error(message),
            (_, Transition::Reset) => ViewState::Idle,
            // Settling only matters if nothing else was reported
            (ViewState::Loading, Transition::Settle) => ViewState::Idle,
            (current, Transition::Settle) => current,
        };
        log::debug!("view state -> {}", next.name());
        *self = next;
    }

    pub fn name(&self) -> &'static str {
        match self {
            ViewState::Idle => "idle",
            ViewState::Loading => "loading",
            ViewState::Error(_) => "error",
            ViewState::Success(_) => "success",
        }
    }
}

#[cfg(test)]
impl ViewState {
    fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    fn error(&self) -> Option<&str> {
        match self {
            ViewState::Error(message) => Some(message),
            _ => None,
        }
    }

    fn result(&self) -> Option<&UploadResult> {
        match self {
            ViewState::Success(result) => Some(result),
            _ => None,
        }
    }
}

/// Expand `index`, or collapse it if it is already the open card.
pub fn toggle_selection(current: Option<usize>, index: usize) -> Option<usize> {
    if current == Some(index) {
        None
    } else {
        Some(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_result() -> UploadResult {
        UploadResult::from_value(json!({
            "questions": [{ "question_number": 1, "question": "...", "options": ["A", "B"], "correct_answer": "A" }]
        }))
        .unwrap()
    }

    fn run(transitions: Vec<Transition>) -> ViewState {
        let mut state = ViewState::default();
        for t in transitions {
            state.apply(t);
        }
        state
    }

    /// At most one of loading/error/result is set.
    fn assert_exclusive(state: &ViewState) {
        let set = [state.is_loading(), state.error().is_some(), state.result().is_some()]
            .iter()
            .filter(|b| **b)
            .count();
        assert!(set <= 1, "{:?}", state);
    }

    #[test]
    fn test_successful_upload_flow() {
        let state = run(vec![
            Transition::Submit,
            Transition::Succeed(sample_result()),
            Transition::Settle,
        ]);
        assert_eq!(state, ViewState::Success(sample_result()));
        assert_exclusive(&state);
    }

    #[test]
    fn test_failed_upload_flow() {
        let state = run(vec![
            Transition::Submit,
            Transition::Fail("Processing failed".into()),
            Transition::Settle,
        ]);
        assert_eq!(state.error(), Some("Processing failed"));
        assert_exclusive(&state);
    }

    #[test]
    fn test_validation_error_from_idle() {
        let state = run(vec![Transition::Fail("Please upload a PDF file".into())]);
        assert_eq!(state.error(), Some("Please upload a PDF file"));
    }

    #[test]
    fn test_retry_and_reset_return_to_idle() {
        let mut state = run(vec![Transition::Submit, Transition::Fail("timeout".into())]);
        state.apply(Transition::Reset);
        assert_eq!(state, ViewState::Idle);

        let mut state = run(vec![Transition::Submit, Transition::Succeed(sample_result())]);
        state.apply(Transition::Reset);
        assert_eq!(state, ViewState::Idle);
    }

    #[test]
    fn test_settle_without_outcome_returns_to_idle() {
        let state = run(vec![Transition::Submit, Transition::Settle]);
        assert_eq!(state, ViewState::Idle);
    }

    #[test]
    fn test_every_state_is_exclusive() {
        let steps = vec![
            Transition::Submit,
            Transition::Fail("x".into()),
            Transition::Reset,
            Transition::Submit,
            Transition::Succeed(sample_result()),
            Transition::Settle,
            Transition::Reset,
        ];
        let mut state = ViewState::default();
        for t in steps {
            state.apply(t);
            assert_exclusive(&state);
        }
    }

    #[test]
    fn test_toggle_twice_collapses() {
        let open = toggle_selection(None, 2);
        assert_eq!(open, Some(2));
        assert_eq!(toggle_selection(open, 2), None);
    }

    #[test]
    fn test_toggle_other_card_switches() {
        assert_eq!(toggle_selection(Some(0), 3), Some(3));
    }
}
