pub mod resource;
pub mod system;
