mod device;
pub mod errors;
mod ops;
mod qubit;

pub use device::QuantumDevice;
pub use qubit::Qubit;
