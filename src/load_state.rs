//! Dataset load state shared between the fetch task and the UI

use tracing::debug;

use crate::core::Dataset;

#[derive(Debug, Default)]
pub enum LoadState {
    #[default]
    Loading,
    /// Fetched and validated, waiting for the UI to pick it up
    Loaded(Dataset),
    /// Handed over to the renderer
    Ready { points: usize },
    Failed(String),
}

impl LoadState {
    /// Move a freshly loaded dataset out, leaving `Ready` behind
    pub fn take_loaded(&mut self) -> Option<Dataset> {
        match std::mem::take(self) {
            LoadState::Loaded(dataset) => {
                *self = LoadState::Ready { points: dataset.len() };
                Some(dataset)
            }
            other => {
                *self = other;
                None
            }
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, LoadState::Ready { .. })
    }
}

/// Load state tagged with the fetch that owns it
///
/// Every `begin` starts a new generation. A fetch that finishes after a
/// newer one was started is dropped, so a reload never races the previous
/// request.
#[derive(Debug, Default)]
pub struct LoadSlot {
    generation: u64,
    state: LoadState,
}

impl LoadSlot {
    /// Start a new load and return the generation the fetch must report with
    pub fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.state = LoadState::Loading;
        self.generation
    }

    /// Store the outcome of the fetch started as `generation`
    ///
    /// Returns `false` and leaves the slot untouched for a superseded fetch.
    pub fn finish(&mut self, generation: u64, outcome: LoadState) -> bool {
        if generation != self.generation {
            debug!(generation, current = self.generation, "Dropping stale load");
            return false;
        }
        self.state = outcome;
        true
    }

    pub fn fail(&mut self, reason: impl Into<String>) {
        self.state = LoadState::Failed(reason.into());
    }

    pub fn take_loaded(&mut self) -> Option<Dataset> {
        self.state.take_loaded()
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}
