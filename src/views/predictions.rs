// ============================================================================
// PREDICTIONS VIEW - Previsión de desbordamiento por contenedor
// ============================================================================

use wasm_bindgen::prelude::*;
use crate::dom::{append_child, clear_children, get_element_by_id, ElementBuilder};
use crate::viewmodels::PredictionRow;

pub const PREDICTION_LIST_ID: &str = "prediction-list";

pub fn render_predictions(rows: &[PredictionRow]) -> Result<(), JsValue> {
    let Some(list) = get_element_by_id(PREDICTION_LIST_ID) else {
        return Ok(());
    };
    clear_children(&list);

    if rows.is_empty() {
        let empty = ElementBuilder::new("p")?
            .class("prediction-empty")
            .text("No predictions available.")
            .build();
        return append_child(&list, &empty);
    }

    for row in rows {
        let item = ElementBuilder::new("div")?
            .class(&format!("prediction-row {}", row.urgency.css_class()))
            .child(ElementBuilder::new("div")?.class("prediction-bin").text(&row.bin_name).build())?
            .child(
                ElementBuilder::new("div")?
                    .class("prediction-urgency")
                    .text(row.urgency.label())
                    .build(),
            )?
            .child(ElementBuilder::new("div")?.class("prediction-text").text(&row.text).build())?
            .build();
        append_child(&list, &item)?;
    }
    Ok(())
}
