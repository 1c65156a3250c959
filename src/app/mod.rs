// ==========================================
// LPA Audit System - Application layer
// ==========================================
// Wires repositories, engines and APIs into one shared state, plus
// the default catalog seed data.
// ==========================================

pub mod seed;
pub mod state;

// Re-export
pub use state::{default_db_path, AppState};
