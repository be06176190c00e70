#[cfg(not(debug_assertions))]
pub const LOG_LEVEL: log::Level = log::Level::Info;
#[cfg(debug_assertions)]
pub const LOG_LEVEL: log::Level = log::Level::Debug;

pub const TEST_CASES: &str = include_str!("../assets/test_cases.json");
