pub mod heartbeat;
pub mod sma;
