mod color;
mod enums;
mod style;
mod stylesheet;

pub use color::{Color, Rgb};
pub use enums::{Direction, Overflow, Position, Size, TextStyle};
pub use style::Style;
pub use stylesheet::Stylesheet;
