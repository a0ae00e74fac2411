mod color;
mod size;
mod variant;

pub use self::{color::*, size::*, variant::*};
