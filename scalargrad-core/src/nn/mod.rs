//! Network composition: parameter initialization, the [`Module`] trait, and
//! the Neuron/Layer/Mlp stack built on the scalar graph.

pub mod init;
pub mod layers;
pub mod losses;
pub mod module;

pub use layers::{Layer, Mlp, Neuron};
pub use module::Module;
