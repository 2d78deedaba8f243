// The fixed startup animation played by the splash screen
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressStep {
    pub percentage: u8,
    pub label: &'static str,
}

impl ProgressStep {
    const fn new(percentage: u8, label: &'static str) -> Self {
        Self { percentage, label }
    }
}

pub const PROGRESS_SCRIPT: [ProgressStep; 7] = [
    ProgressStep::new(10, "Loading modules..."),
    ProgressStep::new(25, "Initializing camera..."),
    ProgressStep::new(40, "Loading AI models..."),
    ProgressStep::new(60, "Setting up eye tracking..."),
    ProgressStep::new(80, "Configuring interface..."),
    ProgressStep::new(95, "Finalizing setup..."),
    ProgressStep::new(100, "Ready!"),
];

/// Convert a user-facing duration in seconds. Negative or NaN means no delay.
pub fn duration_from_secs(secs: f32) -> Duration {
    Duration::try_from_secs_f32(secs.max(0.0)).unwrap_or(Duration::ZERO)
}

/// Iterator over the script, pairing each step with the pause that follows it.
///
/// The pauses add up to the requested total, so the whole run takes that
/// long regardless of how many steps there are.
#[derive(Debug, Clone)]
pub struct ScriptedRun {
    pause: Duration,
    next: usize,
}

impl ScriptedRun {
    pub fn new(total: Duration) -> Self {
        Self {
            pause: total / PROGRESS_SCRIPT.len() as u32,
            next: 0,
        }
    }

    pub fn pause(&self) -> Duration {
        self.pause
    }
}

impl Iterator for ScriptedRun {
    type Item = (ProgressStep, Duration);

    fn next(&mut self) -> Option<Self::Item> {
        let step = PROGRESS_SCRIPT.get(self.next)?;
        self.next += 1;
        Some((*step, self.pause))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = PROGRESS_SCRIPT.len() - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ScriptedRun {}
