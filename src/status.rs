//! Status codes for the time marcher

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// All time levels were computed.
    Success,
    /// A monitor callback requested an early stop.
    Interrupted,
}
