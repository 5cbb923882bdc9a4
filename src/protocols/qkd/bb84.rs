//! BB84 key agreement between two concurrent roles.
//!
//! The sender encodes one random bit per round in one random basis and hands
//! the qubit over the quantum channel; the receiver measures it in its own
//! random basis and announces that basis over the classical channel. Both
//! sides keep the round's bit only when the bases agreed. Because the sender
//! blocks on the basis reply and the receiver blocks on the next qubit, the
//! roles run in strict alternating lock-step and every basis announcement
//! unambiguously pairs with the most recently transmitted qubit.

use crate::core::errors::ProtocolError;
use crate::core::{Qubit, QuantumDevice};
use crate::key::Key;
use crate::protocols::qkd::channel::{self, QuantumMessage, ReceiverLink, SenderLink};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;
use std::thread;
use tracing::{debug, info};

/// Parameters for one key exchange.
#[derive(Debug, Clone)]
pub struct Bb84Config {
    /// Target key length in bits.
    pub key_bits: usize,
    /// Seed for both roles' random sources. `None` draws from OS entropy;
    /// a fixed seed makes the whole exchange reproducible.
    pub seed: Option<u64>,
    /// Where the sender writes the hex-rendered key on completion.
    pub key_path: Option<PathBuf>,
}

impl Default for Bb84Config {
    fn default() -> Self {
        Self {
            key_bits: 1024,
            seed: None,
            key_path: None,
        }
    }
}

/// Outcome of a completed key exchange.
#[derive(Debug)]
pub struct Bb84Result {
    /// The sifted key, at its target length.
    pub key: Key,
    /// Total rounds played, including discarded ones.
    pub rounds: usize,
    /// Rounds discarded because the bases disagreed.
    pub discarded: usize,
}

struct SenderOutcome {
    key: Key,
    rounds: usize,
}

/// Runs the exchange: spawns the sender and receiver roles, joins both, and
/// returns the sifted key.
///
/// # Errors
///
/// Returns `ProtocolError` if either role's device is exhausted, a channel
/// closes before the terminate sentinel, or the key file cannot be written.
pub fn run(config: &Bb84Config) -> Result<Bb84Result, ProtocolError> {
    let (sender_link, receiver_link) = channel::link();

    // Each role gets its own random stream so the lock-step schedule makes a
    // seeded exchange fully reproducible.
    let (sender_rng, receiver_rng) = match config.seed {
        Some(seed) => (
            StdRng::seed_from_u64(seed),
            StdRng::seed_from_u64(seed.wrapping_add(1)),
        ),
        None => (StdRng::from_os_rng(), StdRng::from_os_rng()),
    };

    let key_bits = config.key_bits;
    let key_path = config.key_path.clone();

    let (outcome, receiver_rounds) = thread::scope(|s| {
        let sender = s.spawn(move || run_sender(sender_link, key_bits, sender_rng, key_path));
        let receiver = s.spawn(move || run_receiver(receiver_link, receiver_rng));

        let outcome = sender.join().map_err(|_| ProtocolError::RoleFailed)?;
        let receiver_rounds = receiver.join().map_err(|_| ProtocolError::RoleFailed)?;
        Ok::<_, ProtocolError>((outcome?, receiver_rounds?))
    })?;

    debug_assert_eq!(outcome.rounds, receiver_rounds);

    let discarded = outcome.rounds - outcome.key.len();
    info!(
        rounds = outcome.rounds,
        sifted = outcome.key.len(),
        discarded,
        "key exchange complete"
    );

    Ok(Bb84Result {
        key: outcome.key,
        rounds: outcome.rounds,
        discarded,
    })
}

/// Sender loop: prepare, transfer, await the basis reply, sift.
///
/// The device-allocated qubit serves purely as the randomness source and is
/// reused every round through `reset`. The transmission qubit is prepared
/// fresh in `|0>` each round, since sending moves it to the peer for good.
fn run_sender(
    link: SenderLink,
    key_bits: usize,
    mut rng: StdRng,
    key_path: Option<PathBuf>,
) -> Result<SenderOutcome, ProtocolError> {
    let mut device = QuantumDevice::new(1);
    let mut rand_qubit = device.allocate()?;

    let mut key = Key::new(key_bits);
    let mut rounds = 0usize;

    while !key.is_complete() {
        let bit = rand_qubit.random_bit(&mut rng);
        let basis = rand_qubit.random_bit(&mut rng);

        // Encode the bit in the computational basis, then rotate into the
        // conjugate basis when the basis bit is set.
        let mut transmission = Qubit::new();
        if bit {
            transmission.x();
        }
        if basis {
            transmission.hadamard();
        }

        link.send(QuantumMessage::Transfer(transmission))?;

        let peer_basis = link.recv_basis()?;
        if peer_basis == basis {
            key.append(bit);
        }
        rounds += 1;
    }

    link.send(QuantumMessage::Terminate)?;

    if let Some(path) = key_path {
        key.write_to(&path)?;
        info!(path = %path.display(), "wrote key file");
    }

    Ok(SenderOutcome { key, rounds })
}

/// Receiver loop: draw a basis, await the next qubit, measure, announce.
///
/// Runs until the terminate sentinel arrives; the round count is unbounded
/// from this side's perspective.
fn run_receiver(link: ReceiverLink, mut rng: StdRng) -> Result<usize, ProtocolError> {
    let mut device = QuantumDevice::new(1);
    let mut rand_qubit = device.allocate()?;

    let mut rounds = 0usize;
    loop {
        let basis = rand_qubit.random_bit(&mut rng);

        match link.recv()? {
            QuantumMessage::Terminate => break,
            QuantumMessage::Transfer(mut qubit) => {
                // Undo the conjugate-basis encoding when our basis bit is
                // set; on a mismatch this yields an uncorrelated outcome.
                if basis {
                    qubit.hadamard();
                }
                let _outcome = qubit.measure(&mut rng);
                qubit.reset();

                link.announce_basis(basis)?;
                rounds += 1;
            }
        }
    }

    debug!(rounds, "terminate signal received");
    Ok(rounds)
}
