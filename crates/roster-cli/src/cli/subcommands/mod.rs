mod alumni;
mod fellows;

pub use alumni::AlumniCommands;
pub use fellows::FellowCommands;
