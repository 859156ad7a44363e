//! Persistence adapters implementing the domain's driven ports.

mod memory_list_store;

pub use memory_list_store::InMemoryListStore;
