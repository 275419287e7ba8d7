// ============================================================================
// ROUTE LIST VIEW - Paradas numeradas + resumen de distancia
// ============================================================================

use wasm_bindgen::prelude::*;
use crate::dom::{append_child, clear_children, get_element_by_id, set_text_content, set_visible, ElementBuilder};
use crate::viewmodels::RouteListModel;
use crate::viewmodels::route_viewmodel::ROUTE_PENDING_NOTICE;

pub const ROUTE_LIST_ID: &str = "route-list";
pub const ROUTE_SUMMARY_ID: &str = "route-summary";

fn render_message(class: &str, text: &str) -> Result<(), JsValue> {
    let Some(list) = get_element_by_id(ROUTE_LIST_ID) else {
        return Ok(());
    };
    clear_children(&list);
    let message = ElementBuilder::new("p")?.class(class).text(text).build();
    append_child(&list, &message)
}

fn hide_summary() -> Result<(), JsValue> {
    match get_element_by_id(ROUTE_SUMMARY_ID) {
        Some(summary) => set_visible(&summary, false),
        None => Ok(()),
    }
}

pub fn render_route_pending() -> Result<(), JsValue> {
    render_message("route-message route-pending", ROUTE_PENDING_NOTICE)
}

pub fn render_route_list(model: &RouteListModel) -> Result<(), JsValue> {
    match model {
        RouteListModel::NoCollectionNeeded { notice } => {
            hide_summary()?;
            render_message("route-message route-clear", notice)
        }
        RouteListModel::Unsolved { notice } => {
            hide_summary()?;
            render_message("route-message route-error", notice)
        }
        RouteListModel::Route { stops, summary } => {
            if let Some(list) = get_element_by_id(ROUTE_LIST_ID) {
                clear_children(&list);
                for stop in stops {
                    let info = ElementBuilder::new("div")?
                        .class("stop-info")
                        .child(ElementBuilder::new("div")?.class("stop-name").text(&stop.name).build())?
                        .child(ElementBuilder::new("div")?.class("stop-fill").text(&stop.detail).build())?
                        .build();
                    let row = ElementBuilder::new("div")?
                        .class("route-stop")
                        .child(
                            ElementBuilder::new("div")?
                                .class("stop-number")
                                .text(&stop.position.to_string())
                                .build(),
                        )?
                        .child(info)?
                        .build();
                    append_child(&list, &row)?;
                }
            }

            if let Some(summary_el) = get_element_by_id(ROUTE_SUMMARY_ID) {
                set_text_content(&summary_el, summary);
                set_visible(&summary_el, true)?;
            }
            Ok(())
        }
    }
}
