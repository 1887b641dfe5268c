pub mod cluster;
pub mod node;
pub mod tree;
