pub mod bits;
pub mod io;
pub mod rgb;
pub mod traits;

pub use self::bits::BinaryGrid;
pub use self::rgb::{ImageRgb8, Rgb};
pub use self::traits::{ImageView, ImageViewMut, Rows};
