pub mod align;
pub mod structs;
pub mod util;
