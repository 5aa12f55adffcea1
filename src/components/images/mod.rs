//! Image components.

mod avatar_image;

pub use avatar_image::AvatarImage;
