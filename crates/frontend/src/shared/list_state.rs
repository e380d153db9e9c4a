//! View state of a list page: what is shown, where it came from, and the
//! banner to show with it.

use crate::shared::fallback::{DataSource, Loaded, MutationOutcome};
use crate::shared::http::FetchError;
use crate::shared::list_utils::{filter_list, Searchable};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadPhase {
    #[default]
    Idle,
    Loading,
    Remote,
    Mirror,
    Failed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListState<R> {
    pub phase: LoadPhase,
    pub items: Vec<R>,
    /// Degraded-mode banner or the error of a failed load
    pub banner: Option<String>,
    pub search: String,
}

impl<R> Default for ListState<R> {
    fn default() -> Self {
        Self {
            phase: LoadPhase::Idle,
            items: Vec::new(),
            banner: None,
            search: String::new(),
        }
    }
}

impl<R: Clone> ListState<R> {
    /// Previous items stay visible while loading.
    pub fn begin_load(&mut self) {
        self.phase = LoadPhase::Loading;
    }

    pub fn finish_load(&mut self, result: Result<Loaded<Vec<R>>, FetchError>) {
        match result {
            Ok(loaded) => {
                self.phase = match loaded.source {
                    DataSource::Remote => LoadPhase::Remote,
                    DataSource::Mirror => LoadPhase::Mirror,
                };
                self.items = loaded.value;
                self.banner = loaded.warning;
            }
            Err(e) => {
                self.phase = LoadPhase::Failed;
                self.items.clear();
                self.banner = Some(e.to_string());
            }
        }
    }

    /// Shows the mirrored collection after a fallback mutation. Returns
    /// `true` when the caller should reload from the server instead.
    pub fn apply_mutation(&mut self, outcome: MutationOutcome<R>) -> bool {
        match outcome {
            MutationOutcome::Remote => true,
            MutationOutcome::Mirrored(items) => {
                self.items = items;
                false
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        self.phase == LoadPhase::Loading
    }
}

impl<R: Searchable + Clone> ListState<R> {
    /// Items matching the current search text
    pub fn visible(&self) -> Vec<R> {
        filter_list(&self.items, &self.search)
    }
}
