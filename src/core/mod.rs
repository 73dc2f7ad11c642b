pub mod calculator;
pub mod live;
pub mod logic;
