pub mod routes;

use nyaya_core::orchestrator::Orchestrator;

// ── AppState ──────────────────────────────────────────────────────────────

pub struct AppState {
    pub orchestrator: Orchestrator,
}
