pub mod chsh;
pub mod qkd;
pub mod qrng;
