//! Persistence adapters implementing the domain ports.

mod memory;

pub use memory::MemoryRepository;
