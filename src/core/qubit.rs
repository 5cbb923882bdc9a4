use crate::core::errors::QubitError;
use crate::core::ops;
use ndarray::Array1;
use num_complex::Complex64;
use rand::Rng;

/// Tolerance for the amplitude norm invariant, loose enough to absorb
/// floating-point drift from repeated operator applications.
const NORM_EPSILON: f64 = 1e-9;

/// A simulated two-level quantum state.
///
/// The state is a 2-entry column of complex amplitudes `(a0, a1)` with
/// `|a0|^2 + |a1|^2 = 1`, starting in `|0> = (1, 0)`. Operators mutate the
/// amplitudes in place.
///
/// `Qubit` deliberately does not implement `Clone`: transferring a qubit
/// between protocol roles moves the one state instance, so the no-cloning
/// property holds at compile time rather than by convention.
#[derive(Debug)]
pub struct Qubit {
    amplitudes: Array1<Complex64>,
}

impl Qubit {
    /// Creates a qubit in the `|0>` state.
    pub fn new() -> Self {
        Self {
            amplitudes: ops::ket_zero(),
        }
    }

    /// Applies the bit-flip (Pauli-X) unitary, swapping the two amplitudes.
    pub fn x(&mut self) {
        self.amplitudes = ops::pauli_x().dot(&self.amplitudes);
    }

    /// Applies the Hadamard unitary, exchanging the computational basis
    /// states with equal superpositions.
    pub fn hadamard(&mut self) {
        self.amplitudes = ops::hadamard().dot(&self.amplitudes);
    }

    /// Measures the qubit in the computational basis.
    ///
    /// Draws one uniform sample from `rng` and returns `true` exactly when
    /// the `|1>` outcome is observed, i.e. with probability `|a1|^2`.
    ///
    /// This is a simulated projective measurement: the stored amplitudes are
    /// not collapsed. Callers that need a known post-measurement state must
    /// call [`Qubit::reset`].
    pub fn measure<R: Rng + ?Sized>(&self, rng: &mut R) -> bool {
        rng.random::<f64>() >= self.prob_zero()
    }

    /// Forces the state back to `|0>`, independent of the current amplitudes.
    pub fn reset(&mut self) {
        self.amplitudes = ops::ket_zero();
    }

    /// Produces one unbiased random bit: reset to `|0>`, apply Hadamard for a
    /// 50/50 superposition, measure, reset again.
    ///
    /// This is the protocol's only randomness primitive.
    pub fn random_bit<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        self.reset();
        self.hadamard();
        let bit = self.measure(rng);
        self.reset();
        bit
    }

    /// Probability of observing the `|0>` outcome, `|a0|^2`.
    pub fn prob_zero(&self) -> f64 {
        self.amplitudes[0].norm_sqr()
    }

    /// Squared norm of the amplitude column. Unitary operators keep this at 1
    /// up to floating-point drift.
    pub fn norm_sqr(&self) -> f64 {
        self.amplitudes.iter().map(Complex64::norm_sqr).sum()
    }

    /// Checks the norm invariant within an epsilon tolerance.
    ///
    /// # Errors
    ///
    /// Returns `QubitError::NotNormalized` if `|a0|^2 + |a1|^2` has drifted
    /// away from 1.
    pub fn is_valid(&self) -> Result<(), QubitError> {
        let norm_sqr = self.norm_sqr();
        if (norm_sqr - 1.0).abs() > NORM_EPSILON {
            return Err(QubitError::NotNormalized(norm_sqr));
        }
        Ok(())
    }
}

impl Default for Qubit {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn amplitudes_close(a: &Array1<Complex64>, b: &Array1<Complex64>) -> bool {
        a.iter().zip(b.iter()).all(|(x, y)| (x - y).norm() < 1e-9)
    }

    #[test]
    fn starts_in_zero_state() {
        let q = Qubit::new();
        assert_eq!(q.prob_zero(), 1.0);
        q.is_valid().unwrap();
    }

    #[test]
    fn x_is_an_involution() {
        let mut q = Qubit::new();
        q.hadamard();
        q.x();
        let before = q.amplitudes.clone();
        q.x();
        q.x();
        assert!(amplitudes_close(&q.amplitudes, &before));
    }

    #[test]
    fn hadamard_is_an_involution() {
        let mut q = Qubit::new();
        q.x();
        let before = q.amplitudes.clone();
        q.hadamard();
        q.hadamard();
        assert!(amplitudes_close(&q.amplitudes, &before));
    }

    #[test]
    fn measurement_is_deterministic_at_basis_extremes() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut q = Qubit::new();
        for _ in 0..100 {
            assert!(!q.measure(&mut rng));
        }
        q.x();
        assert_eq!(q.prob_zero(), 0.0);
        for _ in 0..100 {
            assert!(q.measure(&mut rng));
        }
    }

    #[test]
    fn measurement_does_not_collapse_amplitudes() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut q = Qubit::new();
        q.hadamard();
        let before = q.amplitudes.clone();
        let _ = q.measure(&mut rng);
        assert!(amplitudes_close(&q.amplitudes, &before));
    }

    #[test]
    fn reset_returns_to_zero_state() {
        let mut q = Qubit::new();
        q.x();
        q.hadamard();
        q.reset();
        assert_eq!(q.prob_zero(), 1.0);
    }

    #[test]
    fn random_bit_is_unbiased() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut q = Qubit::new();
        let trials = 10_000;
        let ones = (0..trials).filter(|_| q.random_bit(&mut rng)).count();
        let fraction = ones as f64 / trials as f64;
        assert!(
            (fraction - 0.5).abs() < 0.02,
            "fraction of true outcomes was {fraction}"
        );
    }

    #[test]
    fn random_bit_leaves_qubit_in_zero_state() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut q = Qubit::new();
        let _ = q.random_bit(&mut rng);
        assert_eq!(q.prob_zero(), 1.0);
    }

    proptest! {
        #[test]
        fn norm_is_invariant_under_operator_sequences(seq in prop::collection::vec(any::<bool>(), 0..200)) {
            let mut q = Qubit::new();
            for use_hadamard in seq {
                if use_hadamard {
                    q.hadamard();
                } else {
                    q.x();
                }
            }
            prop_assert!((q.norm_sqr() - 1.0).abs() < 1e-9);
            prop_assert!(q.is_valid().is_ok());
        }
    }
}
