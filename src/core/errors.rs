use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum QubitError {
    #[error("Amplitudes are not normalized. Norm squared: {0}")]
    NotNormalized(f64),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeviceError {
    #[error("No qubits available on the device")]
    ResourceExhausted,
}

#[derive(Error, Debug)]
pub enum ProtocolError {
    #[error("Device error: {0}")]
    Device(#[from] DeviceError),

    #[error("The {0} channel closed before the protocol completed")]
    ChannelClosed(&'static str),

    #[error("A protocol role terminated abnormally")]
    RoleFailed,

    #[error("Failed to write the key file: {0}")]
    Io(#[from] std::io::Error),
}
