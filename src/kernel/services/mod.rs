pub mod clock;
pub mod process;
pub mod settings;

pub use clock::{Clock, SystemClock};
pub use process::{ForegroundRunner, ProcessRunner};
pub use settings::{ensure_settings_file, load_settings, ProgramSpec, Programs, Settings};
