mod config;
mod job_control;

pub use config::SchedulerConfig;
pub use job_control::JobControlServiceImpl;
