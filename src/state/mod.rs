// ============================================================================
// STATE MODULE - State Management con Rc<RefCell>
// ============================================================================

pub mod dashboard_state;

pub use dashboard_state::*;
