pub mod cores;
pub mod image;
pub mod install;
pub mod memory;
pub mod size;
pub mod system;
pub mod video;
