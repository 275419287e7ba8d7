// ============================================================================
// DASHBOARD STATE - Estado de la sesión del panel (un solo hilo, sin locks)
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use crate::config::ConsistencyMode;
use crate::models::Bin;

/// Estado compartido entre los flujos del panel
#[derive(Clone, Default)]
pub struct DashboardState {
    /// Último snapshot aplicado (reemplazo completo en cada poll)
    pub snapshot: Rc<RefCell<Vec<Bin>>>,
    /// Alertas confirmadas durante la vida de la página (no se persiste)
    pub alerts_sent: Rc<RefCell<u64>>,
    /// Secuencia del último poll emitido
    pub poll_seq_issued: Rc<RefCell<u64>>,
    /// Secuencia del último poll aplicado
    pub poll_seq_applied: Rc<RefCell<Option<u64>>>,
    /// Hora local del último render (solo informativa)
    pub last_render: Rc<RefCell<Option<String>>>,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserva el número de secuencia de un nuevo poll
    pub fn next_poll_seq(&self) -> u64 {
        let mut issued = self.poll_seq_issued.borrow_mut();
        *issued += 1;
        *issued
    }

    /// Decide si la respuesta del poll `seq` se aplica y, si es así, la registra
    pub fn accept_poll(&self, seq: u64, mode: ConsistencyMode) -> bool {
        let mut applied = self.poll_seq_applied.borrow_mut();
        if mode == ConsistencyMode::DiscardStale {
            if let Some(last) = *applied {
                if seq < last {
                    return false;
                }
            }
        }
        let latest = match *applied {
            Some(last) => last.max(seq),
            None => seq,
        };
        *applied = Some(latest);
        true
    }

    pub fn replace_snapshot(&self, bins: Vec<Bin>) {
        *self.snapshot.borrow_mut() = bins;
    }

    pub fn get_snapshot(&self) -> Vec<Bin> {
        self.snapshot.borrow().clone()
    }

    /// Suma alertas al contador y devuelve el total
    pub fn add_alerts(&self, count: u32) -> u64 {
        let mut total = self.alerts_sent.borrow_mut();
        *total = total.saturating_add(count as u64);
        *total
    }

    pub fn get_alerts_sent(&self) -> u64 {
        *self.alerts_sent.borrow()
    }

    pub fn set_last_render(&self, time: String) {
        *self.last_render.borrow_mut() = Some(time);
    }

    pub fn get_last_render(&self) -> Option<String> {
        self.last_render.borrow().clone()
    }
}
