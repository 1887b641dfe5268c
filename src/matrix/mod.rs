pub mod axes;
pub mod rules;
pub mod sampler;
pub mod slot;
