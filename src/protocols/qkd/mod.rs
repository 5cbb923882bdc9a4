//! Quantum Key Distribution (QKD) protocols.
//!
//! - **BB84**: prepare-and-measure key agreement between two concurrent
//!   roles, connected by a quantum channel carrying qubit ownership and a
//!   classical channel carrying basis announcements.

pub mod bb84;
pub mod channel;
