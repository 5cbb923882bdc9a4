mod core;
mod key;
pub mod protocols;

pub use crate::core::{Qubit, QuantumDevice, errors};
pub use crate::key::Key;
