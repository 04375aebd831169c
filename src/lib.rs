pub mod config;
pub mod interface;
pub mod node;
pub mod shared_string_writer;
pub mod tree;
pub mod verify;
