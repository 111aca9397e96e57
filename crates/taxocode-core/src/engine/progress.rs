//! Progress events emitted while a run is in flight.
//!
//! The library never draws anything itself; front-ends install a callback
//! through [`ProgressReporter::with_callback`] and render the events however
//! they like. A reporter without a callback discards every event.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Progress {
    PhaseStart { name: &'static str },
    PhaseFinish,

    TaskStart { total_steps: u64 },
    TaskIncrement,
    TaskFinish,

    Message(String),
}

pub type ProgressCallback<'a> = Box<dyn Fn(Progress) + Send + Sync + 'a>;

#[derive(Default)]
pub struct ProgressReporter<'a> {
    callback: Option<ProgressCallback<'a>>,
}

impl<'a> ProgressReporter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_callback(callback: ProgressCallback<'a>) -> Self {
        Self {
            callback: Some(callback),
        }
    }

    #[inline]
    pub fn report(&self, event: Progress) {
        if let Some(cb) = &self.callback {
            cb(event);
        }
    }

    /// Runs `f` between a `PhaseStart` and a `PhaseFinish` event.
    ///
    /// `PhaseFinish` is only sent when `f` returns `Ok`.
    pub fn phase<T, E>(&self, name: &'static str, f: impl FnOnce() -> Result<T, E>) -> Result<T, E> {
        self.report(Progress::PhaseStart { name });
        let value = f()?;
        self.report(Progress::PhaseFinish);
        Ok(value)
    }
}
