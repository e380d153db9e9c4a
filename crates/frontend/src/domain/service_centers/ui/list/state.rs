use contracts::domain::service_center::{ServiceCenter, ServiceCenterForm};
use leptos::prelude::*;

use crate::shared::list_state::ListState;

#[derive(Clone, Debug, Default)]
pub struct ServiceCenterListState {
    pub list: ListState<ServiceCenter>,
    /// Id of the center being edited; `None` while creating
    pub editing: Option<i64>,
    pub form: ServiceCenterForm,
    pub saving: bool,
}

impl ServiceCenterListState {
    pub fn start_create(&mut self) {
        self.editing = None;
        self.form = ServiceCenterForm::default();
    }

    pub fn start_edit(&mut self, center: &ServiceCenter) {
        self.editing = Some(center.id);
        self.form = ServiceCenterForm::from_center(center);
    }
}

pub fn create_state() -> RwSignal<ServiceCenterListState> {
    RwSignal::new(ServiceCenterListState::default())
}
