use contracts::domain::part_request::PartRequest;
use leptos::prelude::*;

use crate::shared::list_state::ListState;

#[derive(Clone, Debug, Default)]
pub struct PartRequestListState {
    pub list: ListState<PartRequest>,
    pub selected: Option<PartRequest>,
}

pub fn create_state() -> RwSignal<PartRequestListState> {
    RwSignal::new(PartRequestListState::default())
}
