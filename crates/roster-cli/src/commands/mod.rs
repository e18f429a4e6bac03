pub mod alumni;
pub mod analytics;
pub mod dispatch;
pub mod fellows;
pub mod shared;
