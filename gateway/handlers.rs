use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use serde_json::json;

use medisense_engine::{
    delay_risk_score, medical_priority_score, round2, score_routes, select_recommended,
    time_saved, EngineError, Route, ScoredRoute,
};
use medisense_explanation::{GeneratorBranch, RecommendedRouteRef, ReportContext};
use medisense_telemetry::{route_catalog, DispatchCommand, LogisticsStatus, TelemetryError};

use crate::state::AppState;

/// GET /api/logistics/status
/// Draws one mock status snapshot.
pub async fn status_handler(state: web::Data<AppState>) -> impl Responder {
    let status = state.sampler.lock().sample();
    HttpResponse::Ok().json(status)
}

/// GET /api/logistics/routes
/// Serves the fixed corridor catalog.
pub async fn routes_handler() -> impl Responder {
    HttpResponse::Ok().json(route_catalog())
}

/// GET /api/logistics/fleet
/// Serves the current in-memory roster.
pub async fn fleet_handler(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.fleet.snapshot())
}

/// POST /api/logistics/dispatch
/// Sends one unit onto a corridor; unknown units are a 404.
pub async fn dispatch_handler(
    state: web::Data<AppState>,
    body: web::Json<DispatchCommand>,
) -> impl Responder {
    let command = body.into_inner();
    match state.fleet.dispatch(&command) {
        Ok(unit) => {
            if let Some(telemetry) = &state.telemetry {
                let _ = telemetry.event(
                    "gateway.dispatch",
                    json!({ "fleetId": command.fleet_id, "routeId": command.route_id }),
                );
            }
            HttpResponse::Ok().json(unit)
        }
        Err(TelemetryError::UnknownUnit(id)) => {
            HttpResponse::NotFound().json(json!({ "error": format!("unknown fleet unit: {id}") }))
        }
    }
}

/// Analysis request: the status-shaped input object, with an optional
/// route override replacing the built-in catalog.
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    /// Raw telemetry and passthrough display fields.
    #[serde(flatten)]
    pub status: LogisticsStatus,
    /// Candidate routes; defaults to the served catalog.
    #[serde(default)]
    pub routes: Option<Vec<Route>>,
}

/// Analysis response returned to the dashboard.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResponse {
    /// Composite delay risk, rounded for display.
    pub delay_risk_score: f64,
    /// Composite medical priority, rounded for display.
    pub medical_priority_score: f64,
    /// The winning corridor with its derived metrics.
    pub recommended_route: ScoredRoute,
    /// Whole minutes saved versus the second-best corridor.
    pub time_saved: i64,
    /// Four-section markdown report.
    pub report: String,
    /// Whether the deterministic branch produced the report.
    pub fallback_used: bool,
}

/// POST /api/logistics/analyze
/// Runs the full pipeline: score, select, time-saved, explain.
pub async fn analyze_handler(
    state: web::Data<AppState>,
    body: web::Json<AnalyzeRequest>,
) -> impl Responder {
    let request = body.into_inner();
    let delay = delay_risk_score(&request.status.risk_inputs());
    let priority = medical_priority_score(&request.status.priority_inputs());

    let catalog = request.routes.unwrap_or_else(route_catalog);
    let scored = score_routes(&catalog, delay);
    let recommended = match select_recommended(&scored) {
        Ok(route) => route.clone(),
        Err(EngineError::NoCandidates) => {
            return HttpResponse::UnprocessableEntity()
                .json(json!({ "error": "no candidate routes to select from" }));
        }
    };
    let saved = time_saved(&scored, &recommended) as i64;

    let context = ReportContext {
        risk: request.status.risk_inputs(),
        priority: request.status.priority_inputs(),
        delay_risk_score: delay,
        medical_priority_score: priority,
        recommended_route: RecommendedRouteRef {
            name: recommended.route.name.clone(),
        },
        time_saved: saved,
        accuracy: request.status.accuracy.clone(),
    };
    let report = state.explainer.generate(&context).await;
    let fallback_used = report.branch == GeneratorBranch::Fallback;

    if let Some(telemetry) = &state.telemetry {
        let _ = telemetry.event(
            "gateway.analyze",
            json!({
                "recommendedRoute": recommended.route.id,
                "delayRiskScore": round2(delay),
                "fallbackUsed": fallback_used,
            }),
        );
    }

    HttpResponse::Ok().json(AnalyzeResponse {
        delay_risk_score: round2(delay),
        medical_priority_score: round2(priority),
        recommended_route: recommended,
        time_saved: saved,
        report: report.markdown,
        fallback_used,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};
    use medisense_explanation::ExplanationGenerator;
    use medisense_telemetry::{FleetState, StatusSampler};
    use parking_lot::Mutex;

    fn test_state() -> web::Data<AppState> {
        web::Data::new(AppState {
            sampler: Mutex::new(StatusSampler::with_seed(1)),
            fleet: FleetState::seeded(),
            explainer: ExplanationGenerator::fallback_only(),
            telemetry: None,
        })
    }

    fn analyze_body() -> serde_json::Value {
        json!({
            "trafficRisk": 0.5,
            "weatherRisk": 0.1,
            "historicalDelayRate": 0.13,
            "incidentDensity": 0.1,
            "emergencyLevel": 0.9,
            "timeSensitivity": 0.8,
            "criticalSupplyFactor": 0.7,
            "modelVersion": "MediSense-RiskNet v2.4.1",
            "accuracy": "94.8%",
            "activeFleets": 12,
            "onTimeRate": "96.2%"
        })
    }

    #[actix_web::test]
    async fn status_serves_the_wire_shape() {
        let app = test::init_service(
            App::new()
                .app_data(test_state())
                .route("/api/logistics/status", web::get().to(status_handler)),
        )
        .await;
        let request = test::TestRequest::get()
            .uri("/api/logistics/status")
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, request).await;
        assert!(body.get("trafficRisk").is_some());
        assert!(body.get("modelVersion").is_some());
    }

    #[actix_web::test]
    async fn analyze_recommends_alpha_with_a_full_report() {
        let app = test::init_service(
            App::new()
                .app_data(test_state())
                .route("/api/logistics/analyze", web::post().to(analyze_handler)),
        )
        .await;
        let request = test::TestRequest::post()
            .uri("/api/logistics/analyze")
            .set_json(analyze_body())
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, request).await;
        assert_eq!(body["recommendedRoute"]["id"], "route-alpha");
        assert_eq!(body["delayRiskScore"], 0.27);
        assert_eq!(body["fallbackUsed"], true);
        let report = body["report"].as_str().unwrap();
        assert!(report.contains("### Recommended Route"));
        assert!(report.contains("### Model Confidence Score"));
        assert!(report.contains("**94.8%**"));
    }

    #[actix_web::test]
    async fn analyze_rejects_an_empty_route_override() {
        let app = test::init_service(
            App::new()
                .app_data(test_state())
                .route("/api/logistics/analyze", web::post().to(analyze_handler)),
        )
        .await;
        let mut payload = analyze_body();
        payload["routes"] = json!([]);
        let request = test::TestRequest::post()
            .uri("/api/logistics/analyze")
            .set_json(payload)
            .to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), actix_web::http::StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[actix_web::test]
    async fn dispatching_an_unknown_unit_is_a_404() {
        let app = test::init_service(
            App::new()
                .app_data(test_state())
                .route("/api/logistics/dispatch", web::post().to(dispatch_handler)),
        )
        .await;
        let request = test::TestRequest::post()
            .uri("/api/logistics/dispatch")
            .set_json(json!({ "fleetId": "MS-TRUCK-99", "routeId": "route-alpha" }))
            .to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), actix_web::http::StatusCode::NOT_FOUND);
    }
}
