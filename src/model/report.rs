use std::fmt::Display;

/// The lifecycle state of a harvest job.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum JobState {
    /// The job is waiting for the next scheduled trigger.
    #[default]
    Idle,

    /// The job is executing a tick.
    Running,
}

impl Display for JobState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JobState::Idle => write!(f, "idle"),
            JobState::Running => write!(f, "running"),
        }
    }
}

/// The outcome of a successful harvest tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickReport {
    /// The number of raw records returned by the fetch.
    total_fetched: u32,

    /// The number of records written to the store.
    total_written: u32,
}

impl TickReport {
    /// Creates a new `TickReport` instance.
    pub fn new(total_fetched: u32, total_written: u32) -> Self {
        Self {
            total_fetched,
            total_written,
        }
    }

    /// Retrieves the number of raw records fetched.
    pub fn total_fetched(&self) -> u32 {
        self.total_fetched
    }

    /// Retrieves the number of records written.
    pub fn total_written(&self) -> u32 {
        self.total_written
    }
}

impl Display for TickReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Tick: fetched={}, written={}",
            self.total_fetched, self.total_written
        )
    }
}
