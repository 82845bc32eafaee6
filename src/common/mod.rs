pub mod color;
pub mod data;
pub mod fetch;
pub mod names;
pub mod processors;
