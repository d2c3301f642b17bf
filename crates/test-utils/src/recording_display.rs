use std::sync::{Arc, Mutex};

use cmdstatus::display::{IndicatorDisplay, PresentationState};

/// A display that keeps the current state plus a copy of it at every
/// commit. Clones share the same recording.
#[derive(Clone, Default)]
pub struct RecordingDisplay {
    inner: Arc<Mutex<Recording>>,
}

#[derive(Default)]
struct Recording {
    state: PresentationState,
    commits: Vec<PresentationState>,
}

impl RecordingDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> PresentationState {
        self.inner.lock().unwrap().state.clone()
    }

    pub fn commits(&self) -> Vec<PresentationState> {
        self.inner.lock().unwrap().commits.clone()
    }

    pub fn commit_count(&self) -> usize {
        self.inner.lock().unwrap().commits.len()
    }
}

impl IndicatorDisplay for RecordingDisplay {
    fn set_icon(&mut self, icon: &str) -> anyhow::Result<()> {
        self.inner.lock().unwrap().state.set_icon(icon)
    }

    fn set_label_markup(&mut self, markup: &str) -> anyhow::Result<()> {
        self.inner.lock().unwrap().state.set_label_markup(markup)
    }

    fn set_tooltip_markup(&mut self, markup: &str) -> anyhow::Result<()> {
        self.inner.lock().unwrap().state.set_tooltip_markup(markup)
    }

    fn commit(&mut self) -> anyhow::Result<()> {
        let mut rec = self.inner.lock().unwrap();
        let snapshot = rec.state.clone();
        rec.commits.push(snapshot);
        Ok(())
    }
}
