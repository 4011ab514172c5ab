mod in_memory_job_repository;
mod moka_result_cache;

pub use in_memory_job_repository::InMemoryJobRepository;
pub use moka_result_cache::MokaResultCache;
