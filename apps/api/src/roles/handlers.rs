use axum::{extract::State, Json};

use crate::roles::RoleSummary;
use crate::state::AppState;

/// GET /api/v1/roles
/// Role picker entries, in catalog order.
pub async fn handle_list_roles(State(state): State<AppState>) -> Json<Vec<RoleSummary>> {
    Json(state.roles.roles().to_vec())
}
