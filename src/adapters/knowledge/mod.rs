//! Knowledge source adapters that do not talk to a backend.

mod simulated;

pub use simulated::SimulatedKnowledgeSource;
