use contracts::domain::feedback::Feedback;
use leptos::prelude::*;

use crate::shared::list_state::ListState;

#[derive(Clone, Debug, Default)]
pub struct FeedbackListState {
    pub list: ListState<Feedback>,
    /// Feedback open in the reply dialog
    pub selected: Option<Feedback>,
}

pub fn create_state() -> RwSignal<FeedbackListState> {
    RwSignal::new(FeedbackListState::default())
}
