pub mod chart;
pub mod register;
pub mod schedule;
pub mod suggest;
