pub mod evaluate;
pub mod samples;
