pub mod annotation;
pub mod calendar_date;
pub mod cursor;
pub mod date_range;
pub mod event;
pub mod month_grid;
pub mod selection;
pub mod session;

pub use annotation::*;
pub use calendar_date::*;
pub use cursor::*;
pub use date_range::*;
pub use event::*;
pub use month_grid::*;
pub use selection::*;
pub use session::*;
