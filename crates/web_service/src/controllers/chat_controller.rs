use actix_web::{post, web, HttpResponse};

use chat_core::ChatTurn;

use crate::dto::ChatRequest;
use crate::error::AppError;
use crate::server::AppState;

/// Token window policy: forward only the most recent 8 turns
/// (4 user + 4 assistant).
const MAX_HISTORY_TURNS: usize = 8;

fn trim_history(history: &[ChatTurn]) -> &[ChatTurn] {
    &history[history.len().saturating_sub(MAX_HISTORY_TURNS)..]
}

#[post("/chat")]
pub async fn chat(
    app_state: web::Data<AppState>,
    req: web::Json<ChatRequest>,
) -> Result<HttpResponse, AppError> {
    let request = req.into_inner();
    let trimmed = trim_history(&request.history);
    log::info!(
        "Handling chat request: {} turns received, {} forwarded",
        request.history.len(),
        trimmed.len()
    );

    let record = app_state.service.recommend(trimmed).await.map_err(|err| {
        log::error!("Recommendation failed: {err}");
        AppError::from(err)
    })?;

    Ok(HttpResponse::Ok().json(record))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(chat);
}
