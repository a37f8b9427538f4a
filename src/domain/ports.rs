use super::artwork::ArtworkView;
use super::errors::DomainError;
use super::order::{NewOrder, PlacementOutcome};

pub trait ArtworkRepository: Send + Sync + 'static {
    fn list_available(&self) -> Result<Vec<ArtworkView>, DomainError>;
    fn find_by_id(&self, id: i32) -> Result<Option<ArtworkView>, DomainError>;
}

pub trait OrderRepository: Send + Sync + 'static {
    /// Atomically check the artwork is still available, reserve it, and
    /// insert the order. Concurrent calls for the same artwork must
    /// serialize so that at most one returns `Placed`.
    fn place(&self, order: NewOrder) -> Result<PlacementOutcome, DomainError>;
}
