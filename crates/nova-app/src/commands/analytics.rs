//! # Analytics Commands
//!
//! Serves the dashboard datasets to the back-office. The datasets themselves
//! live in `nova_catalog::analytics` and are fixed demo series; this command
//! only bundles them behind the role gate.

use serde::Serialize;
use tracing::debug;

use crate::error::ApiError;
use crate::state::SessionState;
use nova_catalog::analytics::{
    category_shares, monthly_revenue, summary, top_sellers, CategoryShare, DashboardSummary,
    MonthlyRevenue, TopSeller,
};

/// Everything the dashboard screen renders, in one payload.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub summary: DashboardSummary,
    pub revenue_by_month: Vec<MonthlyRevenue>,
    pub category_shares: Vec<CategoryShare>,
    pub top_sellers: Vec<TopSeller>,
}

/// Returns the dashboard datasets. Admin only.
pub fn dashboard(session: &SessionState) -> Result<DashboardResponse, ApiError> {
    let user = session
        .current()
        .ok_or_else(|| ApiError::unauthorized("Sign in to use the back-office"))?;
    if !user.is_admin() {
        return Err(ApiError::forbidden("Admin access required"));
    }

    debug!("dashboard command");

    Ok(DashboardResponse {
        summary: summary(),
        revenue_by_month: monthly_revenue(),
        category_shares: category_shares(),
        top_sellers: top_sellers(),
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::auth::login;
    use crate::error::ErrorCode;
    use crate::App;

    #[test]
    fn test_dashboard_requires_admin() {
        let app = App::new();
        assert_eq!(
            dashboard(&app.session).unwrap_err().code,
            ErrorCode::Unauthorized
        );

        login(&app.catalog, &app.session, "sam@example.test", "sam123").unwrap();
        assert_eq!(
            dashboard(&app.session).unwrap_err().code,
            ErrorCode::Forbidden
        );
    }

    #[test]
    fn test_dashboard_payload_shape() {
        let app = App::new();
        login(&app.catalog, &app.session, "avery@novagadgets.test", "admin123").unwrap();

        let payload = dashboard(&app.session).unwrap();
        assert_eq!(payload.revenue_by_month.len(), 12);
        assert_eq!(payload.top_sellers.len(), 5);
        assert!(payload.summary.total_orders > 0);

        let json = serde_json::to_string(&payload).unwrap();
        assert!(json.contains("revenueByMonth"));
        assert!(json.contains("categoryShares"));
    }
}
