// ============================================================================
// BIN LIST VIEWMODEL - Tarjetas, estadísticas y opciones del selector
// ============================================================================
// SOLO preparación de datos - La vista pinta lo que se devuelve aquí
// ============================================================================

use crate::models::{Bin, BinId, SeverityTier};
use crate::utils::{bar_width, format_fill};

/// Texto mostrado cuando un dato no existe (timestamp, media sin contenedores)
pub const PLACEHOLDER: &str = "N/A";

#[derive(Debug, Clone, PartialEq)]
pub struct BinCard {
    pub id: BinId,
    pub name: String,
    pub location: String,
    pub tier: SeverityTier,
    pub fill_text: String,
    pub bar_width: f64,
    pub last_updated: String,
}

impl BinCard {
    pub fn class_name(&self) -> String {
        match self.tier.card_class() {
            "" => "bin-card".to_string(),
            modifier => format!("bin-card {}", modifier),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BinOption {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BinStats {
    pub total: usize,
    pub critical: usize,
    /// Media redondeada; `None` con el snapshot vacío
    pub average_fill: Option<i64>,
}

impl BinStats {
    pub fn average_text(&self) -> String {
        match self.average_fill {
            Some(avg) => format!("{}%", avg),
            None => PLACEHOLDER.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BinListModel {
    pub cards: Vec<BinCard>,
    pub options: Vec<BinOption>,
    pub stats: BinStats,
}

pub struct BinListViewModel;

impl BinListViewModel {
    pub fn prepare(bins: &[Bin]) -> BinListModel {
        let cards = bins.iter().map(Self::card).collect();
        let options = bins
            .iter()
            .map(|bin| BinOption {
                value: bin.id.to_string(),
                label: bin.option_label(),
            })
            .collect();

        BinListModel {
            cards,
            options,
            stats: Self::stats(bins),
        }
    }

    fn card(bin: &Bin) -> BinCard {
        BinCard {
            id: bin.id,
            name: bin.name.clone(),
            location: bin.location.clone(),
            tier: bin.severity(),
            fill_text: format!("{}%", format_fill(bin.fill_level)),
            bar_width: bar_width(bin.fill_level),
            last_updated: bin
                .last_updated
                .clone()
                .filter(|ts| !ts.trim().is_empty())
                .unwrap_or_else(|| PLACEHOLDER.to_string()),
        }
    }

    pub fn stats(bins: &[Bin]) -> BinStats {
        let critical = bins
            .iter()
            .filter(|bin| bin.severity() == SeverityTier::Critical)
            .count();

        let average_fill = if bins.is_empty() {
            None
        } else {
            let total: f64 = bins.iter().map(|bin| bin.fill_level).sum();
            Some((total / bins.len() as f64).round() as i64)
        };

        BinStats {
            total: bins.len(),
            critical,
            average_fill,
        }
    }
}
