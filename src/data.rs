mod category;
pub use category::*;
mod level;
pub use level::*;
mod progress;
pub use progress::*;
mod stats;
pub use stats::*;
