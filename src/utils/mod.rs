//! Small helpers shared by the executors

pub mod string;
