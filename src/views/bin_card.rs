// ============================================================================
// BIN CARD VIEW - Tarjeta de un contenedor
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{append_child, ElementBuilder};
use crate::viewmodels::BinCard;

/// Renderizar bin card
pub fn render_bin_card(card: &BinCard) -> Result<Element, JsValue> {
    let color = card.tier.color();

    let card_el = ElementBuilder::new("div")?
        .class(&card.class_name())
        .attr("data-bin-id", &card.id.to_string())?
        .build();

    // Header: nombre + ubicación a la izquierda, porcentaje + estado a la derecha
    let header = ElementBuilder::new("div")?.class("bin-header").build();

    let identity = ElementBuilder::new("div")?
        .child(ElementBuilder::new("div")?.class("bin-name").text(&card.name).build())?
        .child(
            ElementBuilder::new("div")?
                .class("bin-location")
                .text(&format!("📍 {}", card.location))
                .build(),
        )?
        .build();

    let level = ElementBuilder::new("div")?
        .style("text-align:right;")?
        .child(
            ElementBuilder::new("div")?
                .class("bin-fill")
                .style(&format!("font-size:18px;font-weight:bold;color:{}", color))?
                .text(&card.fill_text)
                .build(),
        )?
        .child(
            ElementBuilder::new("div")?
                .class("bin-status")
                .style("font-size:11px;")?
                .text(card.tier.status_text())
                .build(),
        )?
        .build();

    append_child(&header, &identity)?;
    append_child(&header, &level)?;

    // Barra de llenado
    let bar = ElementBuilder::new("div")?
        .class("fill-bar-bg")
        .child(
            ElementBuilder::new("div")?
                .class("fill-bar")
                .style(&format!("width:{}%;background:{};", card.bar_width, color))?
                .build(),
        )?
        .build();

    let info = ElementBuilder::new("div")?
        .class("fill-info")
        .child(
            ElementBuilder::new("span")?
                .text(&format!("Last updated: {}", card.last_updated))
                .build(),
        )?
        .child(
            ElementBuilder::new("span")?
                .text(&format!("Bin ID: {}", card.id))
                .build(),
        )?
        .build();

    append_child(&card_el, &header)?;
    append_child(&card_el, &bar)?;
    append_child(&card_el, &info)?;

    Ok(card_el)
}
