use crate::core::Qubit;
use crate::core::errors::ProtocolError;
use crossbeam_channel::{Receiver, Sender, unbounded};

/// One element of the quantum channel.
///
/// A live qubit transfer and the completion sentinel are distinct cases of
/// one sum type, so the receiver's dispatch is exhaustive rather than based
/// on runtime value inspection.
#[derive(Debug)]
pub enum QuantumMessage {
    /// Carries exclusive ownership of the transmitted qubit.
    Transfer(Qubit),
    /// Signals that the sender's key is complete and the receiver may exit.
    Terminate,
}

/// The sender's end of the link pair: produces on the quantum channel,
/// consumes basis announcements from the classical channel.
#[derive(Debug)]
pub struct SenderLink {
    quantum_tx: Sender<QuantumMessage>,
    classical_rx: Receiver<bool>,
}

/// The receiver's end of the link pair: consumes from the quantum channel,
/// produces basis announcements on the classical channel.
#[derive(Debug)]
pub struct ReceiverLink {
    quantum_rx: Receiver<QuantumMessage>,
    classical_tx: Sender<bool>,
}

/// Creates the quantum/classical channel pair connecting the two roles.
///
/// Both channels are unbounded FIFO queues with exactly one producer and one
/// consumer, so sends never block and the lock-step blocking happens on the
/// receive side.
pub fn link() -> (SenderLink, ReceiverLink) {
    let (quantum_tx, quantum_rx) = unbounded();
    let (classical_tx, classical_rx) = unbounded();
    (
        SenderLink {
            quantum_tx,
            classical_rx,
        },
        ReceiverLink {
            quantum_rx,
            classical_tx,
        },
    )
}

impl SenderLink {
    /// Sends one element on the quantum channel, transferring ownership of
    /// any carried qubit to the peer.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError::ChannelClosed` if the peer has disappeared.
    pub fn send(&self, message: QuantumMessage) -> Result<(), ProtocolError> {
        self.quantum_tx
            .send(message)
            .map_err(|_| ProtocolError::ChannelClosed("quantum"))
    }

    /// Blocks until the peer announces the basis it measured in.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError::ChannelClosed` if the peer has disappeared.
    pub fn recv_basis(&self) -> Result<bool, ProtocolError> {
        self.classical_rx
            .recv()
            .map_err(|_| ProtocolError::ChannelClosed("classical"))
    }
}

impl ReceiverLink {
    /// Blocks until the next element arrives on the quantum channel.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError::ChannelClosed` if the peer disappeared without
    /// sending the terminate sentinel.
    pub fn recv(&self) -> Result<QuantumMessage, ProtocolError> {
        self.quantum_rx
            .recv()
            .map_err(|_| ProtocolError::ChannelClosed("quantum"))
    }

    /// Announces the basis used for the round's measurement.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError::ChannelClosed` if the peer has disappeared.
    pub fn announce_basis(&self, basis: bool) -> Result<(), ProtocolError> {
        self.classical_tx
            .send(basis)
            .map_err(|_| ProtocolError::ChannelClosed("classical"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transfers_a_qubit_and_preserves_order() {
        let (sender, receiver) = link();

        let mut qubit = Qubit::new();
        qubit.x();
        sender.send(QuantumMessage::Transfer(qubit)).unwrap();
        sender.send(QuantumMessage::Terminate).unwrap();

        match receiver.recv().unwrap() {
            QuantumMessage::Transfer(qubit) => assert_eq!(qubit.prob_zero(), 0.0),
            QuantumMessage::Terminate => panic!("terminate arrived before the transfer"),
        }
        assert!(matches!(receiver.recv().unwrap(), QuantumMessage::Terminate));
    }

    #[test]
    fn dropped_peer_surfaces_as_channel_closed() {
        let (sender, receiver) = link();
        drop(receiver);
        assert!(matches!(
            sender.send(QuantumMessage::Terminate),
            Err(ProtocolError::ChannelClosed("quantum"))
        ));
        assert!(matches!(
            sender.recv_basis(),
            Err(ProtocolError::ChannelClosed("classical"))
        ));
    }
}
