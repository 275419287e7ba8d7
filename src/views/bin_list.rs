// ============================================================================
// BIN LIST VIEW - Lista de tarjetas, estadísticas y selector de contenedor
// ============================================================================

use wasm_bindgen::prelude::*;
use crate::dom::{append_child, clear_children, get_element_by_id, set_text_by_id, ElementBuilder};
use crate::viewmodels::BinListModel;
use super::render_bin_card;

pub const BIN_LIST_ID: &str = "bin-list";
pub const BIN_SELECT_ID: &str = "bin-select";

pub fn render_bin_list(model: &BinListModel) -> Result<(), JsValue> {
    if let Some(list) = get_element_by_id(BIN_LIST_ID) {
        clear_children(&list);
        for card in &model.cards {
            append_child(&list, &render_bin_card(card)?)?;
        }
        if model.cards.is_empty() {
            let empty = ElementBuilder::new("p")?
                .class("bin-list-empty")
                .text("No bins reported yet.")
                .build();
            append_child(&list, &empty)?;
        }
    }

    render_bin_select(model)?;

    set_text_by_id("critical-bins", &model.stats.critical.to_string());
    set_text_by_id("avg-fill", &model.stats.average_text());
    set_text_by_id("total-bins", &model.stats.total.to_string());
    Ok(())
}

/// Reconstruye el selector desde cero (la selección anterior se pierde)
fn render_bin_select(model: &BinListModel) -> Result<(), JsValue> {
    let Some(select) = get_element_by_id(BIN_SELECT_ID) else {
        return Ok(());
    };

    clear_children(&select);
    let placeholder = ElementBuilder::new("option")?
        .attr("value", "")?
        .text("Select Bin...")
        .build();
    append_child(&select, &placeholder)?;

    for option in &model.options {
        let el = ElementBuilder::new("option")?
            .attr("value", &option.value)?
            .text(&option.label)
            .build();
        append_child(&select, &el)?;
    }
    Ok(())
}
