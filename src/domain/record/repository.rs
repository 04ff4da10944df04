// src/domain/record/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::record::Record;
use async_trait::async_trait;

/// Storage seam for the singleton record. The in-memory backing never fails;
/// the `Result` returns keep the surface stable if a persistent backend is
/// ever slotted in.
#[async_trait]
pub trait RecordRepository: Send + Sync {
    async fn load(&self) -> DomainResult<Record>;
    async fn store(&self, record: Record) -> DomainResult<()>;
}
