pub mod constants;
pub mod error;
pub mod layout;
pub mod observer;
pub mod palette;
pub mod status_indicator;
pub mod tooltip;
pub mod viewport;

pub use error::LayoutError;
pub use status_indicator::StatusIndicator;
pub use tooltip::Tooltip;
