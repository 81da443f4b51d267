//! Pipeline trait.
use crate::error::Error;

/// This trait must be implemented for each stage,
/// and is generic over the return type so that
/// stages returning reports and chained pipelines can share it.
pub trait Pipeline<T> {
    fn run(&self) -> Result<T, Error>;
}
