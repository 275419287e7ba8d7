use crate::models::{OptimizedRoute, RouteResponse, StopKind};
use crate::utils::format_fill;

pub const NO_COLLECTION_NOTICE: &str = "✅ All bins below threshold — no collection needed.";
pub const ROUTE_PENDING_NOTICE: &str = "⏳ Calculating optimal route...";

#[derive(Debug, Clone, PartialEq)]
pub struct RouteStopRow {
    pub position: usize,
    pub name: String,
    pub detail: String,
}

/// Lo que muestra el panel de ruta tras una optimización
#[derive(Debug, Clone, PartialEq)]
pub enum RouteListModel {
    NoCollectionNeeded { notice: String },
    Unsolved { notice: String },
    Route { stops: Vec<RouteStopRow>, summary: String },
}

pub struct RouteViewModel;

impl RouteViewModel {
    pub fn prepare(response: &RouteResponse) -> RouteListModel {
        match response {
            RouteResponse::NoCollectionNeeded { .. } => RouteListModel::NoCollectionNeeded {
                notice: NO_COLLECTION_NOTICE.to_string(),
            },
            RouteResponse::NoSolution { message } => RouteListModel::Unsolved {
                notice: format!(
                    "⚠️ {}",
                    message.as_deref().unwrap_or("Could not find optimal route")
                ),
            },
            RouteResponse::Success(route) => Self::route(route),
        }
    }

    fn route(route: &OptimizedRoute) -> RouteListModel {
        let stops = route
            .route
            .iter()
            .enumerate()
            .map(|(i, stop)| RouteStopRow {
                position: i + 1,
                name: stop.name.clone(),
                detail: match stop.kind() {
                    StopKind::Bin { fill_level } => format!("Fill: {}%", format_fill(fill_level)),
                    StopKind::Depot => "Depot".to_string(),
                },
            })
            .collect();

        RouteListModel::Route {
            stops,
            summary: format!(
                "✅ {} bins | Total distance: {} km",
                route.total_bins_in_route, route.total_distance_km
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::stop;

    #[test]
    fn no_collection_needed_shows_notice() {
        let model = RouteViewModel::prepare(&RouteResponse::NoCollectionNeeded { message: None });
        assert_eq!(
            model,
            RouteListModel::NoCollectionNeeded { notice: NO_COLLECTION_NOTICE.to_string() }
        );
    }

    #[test]
    fn route_rows_are_numbered_with_depot_labels() {
        let route = OptimizedRoute {
            message: None,
            route: vec![
                stop("Depot (Municipal Office)", None, 28.5706, 77.3219),
                stop("Bin D", Some(88.0), 28.58, 77.33),
                stop("Depot (Municipal Office)", None, 28.5706, 77.3219),
            ],
            total_distance_km: 4.27,
            total_bins_in_route: 1,
        };

        let RouteListModel::Route { stops, summary } =
            RouteViewModel::prepare(&RouteResponse::Success(route))
        else {
            panic!("expected route rows");
        };

        assert_eq!(stops.len(), 3);
        assert_eq!(stops[0].position, 1);
        assert_eq!(stops[0].detail, "Depot");
        assert_eq!(stops[1].detail, "Fill: 88%");
        assert_eq!(stops[2].position, 3);
        assert_eq!(summary, "✅ 1 bins | Total distance: 4.27 km");
    }

    #[test]
    fn no_solution_uses_backend_message() {
        let model = RouteViewModel::prepare(&RouteResponse::NoSolution {
            message: Some("Could not find optimal route".to_string()),
        });
        assert_eq!(
            model,
            RouteListModel::Unsolved { notice: "⚠️ Could not find optimal route".to_string() }
        );
    }
}
