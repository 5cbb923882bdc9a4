use crate::core::errors::DeviceError;
use crate::core::qubit::Qubit;

/// A bounded pool of qubits, standing in for the quantum hardware a protocol
/// party has access to.
///
/// Capacity is fixed at construction and allocation is one-shot: qubits are
/// never returned to the pool. Parties provision the capacity they need up
/// front (one qubit per role in the BB84 design) and keep reusing the
/// allocated instance through [`Qubit::reset`].
#[derive(Debug)]
pub struct QuantumDevice {
    qubits: Vec<Qubit>,
}

impl QuantumDevice {
    /// Creates a device holding `capacity` qubits, all in the `|0>` state.
    pub fn new(capacity: usize) -> Self {
        Self {
            qubits: (0..capacity).map(|_| Qubit::new()).collect(),
        }
    }

    /// Removes and returns one qubit from the pool.
    ///
    /// # Errors
    ///
    /// Returns `DeviceError::ResourceExhausted` when the pool is empty.
    pub fn allocate(&mut self) -> Result<Qubit, DeviceError> {
        self.qubits.pop().ok_or(DeviceError::ResourceExhausted)
    }

    /// Number of qubits still available for allocation.
    pub fn available(&self) -> usize {
        self.qubits.len()
    }
}
