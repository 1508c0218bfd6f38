pub mod job_record;

#[rustfmt::skip]
pub use {
    job_record::JobRecord,
};
