mod icon;
pub use icon::*;
mod skill_bar;
pub use skill_bar::*;
mod style;
pub use style::*;
mod tooltip;
pub use tooltip::*;
mod viewer;
pub use viewer::*;
