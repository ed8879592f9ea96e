//! Gamma profile page endpoint
//!
//! Serves the root page: the configured contract is revalued across the
//! spot grid and the resulting gamma curve is embedded as an SVG chart
//! in a server-rendered HTML document.

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use thiserror::Error;

use greeks_models::analytical::EngineError;
use greeks_models::gamma::{compute_gamma_curve, MarketParams};
use greeks_models::instruments::{ContractError, VanillaOption};

use super::AppState;
use crate::chart::{render_gamma_chart, ChartStyle};
use crate::config::CurveConfig;
use crate::render::{page_template, render_page, RenderError};

/// Failures while producing the gamma page; all map to 500.
#[derive(Debug, Error)]
pub enum AppError {
    /// The configured contract failed validation
    #[error("invalid contract: {0}")]
    Contract(#[from] ContractError),

    /// The pricing engine rejected the valuation
    #[error("pricing engine failure: {0}")]
    Engine(#[from] EngineError),

    /// Chart or page rendering failed
    #[error("render failure: {0}")]
    Render(#[from] RenderError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "failed to build gamma page");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("internal server error: {}", self),
        )
            .into_response()
    }
}

/// Build the chart routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(gamma_page_handler))
}

/// GET / - Gamma profile page
///
/// Computes gamma for the configured contract at each spot on the grid
/// and returns an HTML page with the curve embedded as SVG.
async fn gamma_page_handler(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let page = build_gamma_page(&state.config.curve)?;
    Ok(Html(page))
}

/// Assemble the full page for a curve configuration.
///
/// Synchronous on purpose: the whole valuation runs inside one handler
/// call with no await points, so the borrowed quote never crosses a
/// task boundary.
fn build_gamma_page(curve: &CurveConfig) -> Result<String, AppError> {
    let option = VanillaOption::european(curve.option_kind, curve.strike, curve.expiry)?;
    let market = MarketParams {
        valuation_date: curve.valuation_date,
        risk_free_rate: curve.risk_free_rate,
        dividend_yield: curve.dividend_yield,
        volatility: curve.volatility,
        ..MarketParams::default()
    };

    let spots = curve.spot_grid();
    let gammas = compute_gamma_curve(&option, &market, &spots)?;

    tracing::debug!(
        points = spots.len(),
        strike = curve.strike,
        expiry = %curve.expiry,
        "gamma curve computed"
    );

    let svg = render_gamma_chart(&spots, &gammas, &ChartStyle::default())?;

    let title = format!(
        "Gamma profile: {} K={} exp {}",
        curve.option_kind, curve.strike, curve.expiry
    );
    let template = page_template("index")?;
    let page = render_page(template, &[("title", &title), ("chart", &svg)])?;

    Ok(page)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServerConfig;
    use axum::body::Body;
    use axum::http::{header, Request};
    use greeks_core::types::Date;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn pinned_curve() -> CurveConfig {
        CurveConfig {
            valuation_date: Some(Date::from_ymd(2021, 1, 1).unwrap()),
            ..Default::default()
        }
    }

    fn state_with_curve(curve: CurveConfig) -> AppState {
        let config = ServerConfig {
            curve,
            ..Default::default()
        };
        AppState::new(Arc::new(config))
    }

    #[tokio::test]
    async fn test_root_returns_html_with_embedded_svg() {
        let router = routes().with_state(state_with_curve(pinned_curve()));

        let response = router
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();
        assert!(content_type.starts_with("text/html"));

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let html = std::str::from_utf8(&body).unwrap();
        assert!(html.contains("<svg"));
        assert!(html.contains("Gamma profile"));
        assert!(!html.contains("{{"));
    }

    #[tokio::test]
    async fn test_expired_contract_returns_500() {
        let curve = CurveConfig {
            expiry: Date::from_ymd(2020, 6, 1).unwrap(),
            ..pinned_curve()
        };
        let router = routes().with_state(state_with_curve(curve));

        let response = router
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_invalid_strike_returns_500() {
        // Bypasses config validation to exercise the handler's own error path
        let curve = CurveConfig {
            strike: -5.0,
            ..pinned_curve()
        };
        let router = routes().with_state(state_with_curve(curve));

        let response = router
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_build_gamma_page_is_deterministic_with_pinned_date() {
        let curve = pinned_curve();
        let first = build_gamma_page(&curve).unwrap();
        let second = build_gamma_page(&curve).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_build_gamma_page_propagates_engine_errors() {
        let curve = CurveConfig {
            volatility: 0.0,
            ..pinned_curve()
        };
        let err = build_gamma_page(&curve).unwrap_err();
        assert!(matches!(err, AppError::Engine(EngineError::Contract(_))));
    }

    #[test]
    fn test_app_error_display() {
        let err = AppError::Render(RenderError::SeriesLengthMismatch { xs: 2, ys: 3 });
        assert!(err.to_string().contains("render failure"));
    }
}
