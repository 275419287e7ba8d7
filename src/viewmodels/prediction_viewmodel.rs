use std::cmp::Ordering;
use crate::models::{BinId, Bin, OverflowPrediction, Urgency};

#[derive(Debug, Clone, PartialEq)]
pub struct PredictionRow {
    pub bin_id: BinId,
    pub bin_name: String,
    pub urgency: Urgency,
    pub text: String,
}

pub struct PredictionViewModel;

impl PredictionViewModel {
    /// Más urgente primero (menos horas hasta desbordar); sin estimación al final
    pub fn prepare(predictions: &[OverflowPrediction], snapshot: &[Bin]) -> Vec<PredictionRow> {
        let mut sorted: Vec<&OverflowPrediction> = predictions.iter().collect();
        sorted.sort_by(|a, b| match (a.hours_to_overflow, b.hours_to_overflow) {
            (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        });

        sorted
            .into_iter()
            .map(|p| PredictionRow {
                bin_id: p.bin_id,
                bin_name: snapshot
                    .iter()
                    .find(|bin| bin.id == p.bin_id)
                    .map(|bin| bin.name.clone())
                    .unwrap_or_else(|| format!("Bin #{}", p.bin_id)),
                urgency: p.urgency,
                text: p.prediction.clone(),
            })
            .collect()
    }
}
