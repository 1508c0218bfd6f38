pub mod command;
pub mod job_id;
pub mod job_phase;
pub mod job_state;
pub mod layout;

#[rustfmt::skip]
pub use {
    command::{shell_quote, CommandOutput, JobFilter, ScriptHandle},
    job_id::JobIdentifier,
    job_phase::JobPhase,
    job_state::JobState,
    layout::{ColumnLayout, ColumnLayouts},
};
