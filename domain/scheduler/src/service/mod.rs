mod job_control;
mod remote_command;

#[rustfmt::skip]
pub use {
    job_control::JobControlService,
    remote_command::RemoteCommandChannel,
};
