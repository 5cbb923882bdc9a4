//! Quantum random number generation demo.
//!
//! Repeatedly prepares one qubit in an equal superposition and measures it,
//! to show that the outcomes follow a uniform distribution.

use crate::core::QuantumDevice;
use crate::core::errors::DeviceError;
use rand::Rng;

/// Outcome counts of a sampling run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QrngResult {
    /// Number of shots observed in `|0>`.
    pub zeros: usize,
    /// Number of shots observed in `|1>`.
    pub ones: usize,
}

impl QrngResult {
    /// Observed frequency of the `|1>` outcome.
    pub fn frequency_of_one(&self) -> f64 {
        let total = self.zeros + self.ones;
        if total == 0 {
            return 0.0;
        }
        self.ones as f64 / total as f64
    }
}

/// Runs `shots` rounds of reset, Hadamard, measure on one device-allocated
/// qubit and tallies the outcomes.
///
/// # Errors
///
/// Returns `DeviceError::ResourceExhausted` if no qubit can be allocated.
pub fn run<R: Rng + ?Sized>(shots: usize, rng: &mut R) -> Result<QrngResult, DeviceError> {
    let mut device = QuantumDevice::new(1);
    let mut qubit = device.allocate()?;

    let mut result = QrngResult { zeros: 0, ones: 0 };
    for _ in 0..shots {
        qubit.reset();
        qubit.hadamard();
        if qubit.measure(rng) {
            result.ones += 1;
        } else {
            result.zeros += 1;
        }
    }
    qubit.reset();

    Ok(result)
}
