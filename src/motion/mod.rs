pub mod frame;
pub mod path;
pub mod scroll;
