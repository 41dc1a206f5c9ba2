//! Domain Services
//!
//! Stateless calculation services. Nothing here reads or writes the register.

mod depreciation;

pub use depreciation::{
    calculate_declining_balance, calculate_straight_line, ChartPoint, DepreciationInput, Schedule,
    ScheduleEntry, DEFAULT_DECLINING_RATE,
};
