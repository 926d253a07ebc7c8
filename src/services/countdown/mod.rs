mod calculator;
mod ticker;

pub use calculator::{
    days_remaining, progress, remaining, EventStatus, RemainingTime, TimeBreakdown,
};
pub use ticker::{start_ticking, CountdownTicker, TickerHandle};
