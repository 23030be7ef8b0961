/// Errors returned by [`GameLoop`](crate::GameLoop) transitions.
#[derive(Debug)]
pub enum LoopError {
    /// `stop()` was called on a loop that is not running.
    NotStarted,
    /// The worker panicked earlier, taking the screen and display with it.
    WorkerLost,
    /// The OS refused to spawn the worker thread.
    Spawn(std::io::Error),
}

impl std::error::Error for LoopError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Spawn(err) => Some(err),
            Self::NotStarted | Self::WorkerLost => None,
        }
    }
}

impl std::fmt::Display for LoopError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotStarted => write!(f, "game loop is not running"),
            Self::WorkerLost => write!(f, "game loop worker was lost"),
            Self::Spawn(err) => write!(f, "failed to spawn game loop worker: {err}"),
        }
    }
}

impl From<std::io::Error> for LoopError {
    fn from(err: std::io::Error) -> Self {
        Self::Spawn(err)
    }
}
