pub mod disperse;
pub mod gallery;
pub mod gradient;
pub mod movers;
pub mod stack;
