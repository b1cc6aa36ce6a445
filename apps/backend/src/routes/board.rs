//! Tic-tac-toe session endpoints.
//!
//! Boards are held in memory for the lifetime of an interactive session;
//! every transition goes through the pure engine in `domain::board`.

use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use ulid::Ulid;

use crate::domain::board::{self, BoardState, Player};
use crate::error::AppError;
use crate::state::app_state::AppState;

#[derive(Debug, Serialize)]
struct BoardView {
    id: String,
    cells: [Option<Player>; board::CELLS],
    next_player: Player,
    winner: Option<Player>,
}

impl BoardView {
    fn render(id: &str, state: BoardState) -> Self {
        Self {
            id: id.to_string(),
            cells: state.cells,
            next_player: state.next_player,
            winner: board::winner(&state),
        }
    }
}

#[derive(Debug, Deserialize)]
struct MarkRequest {
    cell: usize,
}

/// POST /dashboard/tic-tac-toe/sessions
async fn create_session(state: web::Data<AppState>) -> HttpResponse {
    let id = Ulid::new().to_string();
    let fresh = BoardState::new();
    state.boards.insert(id.clone(), fresh);
    HttpResponse::Created().json(BoardView::render(&id, fresh))
}

/// GET /dashboard/tic-tac-toe/sessions/{id}
async fn get_session(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let board = lookup(state.get_ref(), &id)?;
    Ok(HttpResponse::Ok().json(BoardView::render(&id, board)))
}

/// POST /dashboard/tic-tac-toe/sessions/{id}/marks
///
/// Marks on occupied cells or finished games leave the board unchanged.
async fn mark_cell(
    state: web::Data<AppState>,
    path: web::Path<String>,
    req: web::Json<MarkRequest>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let mut entry = state
        .boards
        .get_mut(&id)
        .ok_or_else(|| session_not_found(&id))?;

    let next = board::mark(*entry, req.cell);
    *entry = next;
    drop(entry);

    Ok(HttpResponse::Ok().json(BoardView::render(&id, next)))
}

/// POST /dashboard/tic-tac-toe/sessions/{id}/reset
async fn reset_session(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let mut entry = state
        .boards
        .get_mut(&id)
        .ok_or_else(|| session_not_found(&id))?;

    let next = board::reset(*entry);
    *entry = next;
    drop(entry);

    Ok(HttpResponse::Ok().json(BoardView::render(&id, next)))
}

fn lookup(state: &AppState, id: &str) -> Result<BoardState, AppError> {
    state
        .boards
        .get(id)
        .map(|entry| *entry.value())
        .ok_or_else(|| session_not_found(id))
}

fn session_not_found(id: &str) -> AppError {
    AppError::not_found("BOARD_SESSION_NOT_FOUND", format!("No board session {id}"))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/tic-tac-toe/sessions").route(web::post().to(create_session)));
    cfg.service(web::resource("/tic-tac-toe/sessions/{id}").route(web::get().to(get_session)));
    cfg.service(web::resource("/tic-tac-toe/sessions/{id}/marks").route(web::post().to(mark_cell)));
    cfg.service(
        web::resource("/tic-tac-toe/sessions/{id}/reset").route(web::post().to(reset_session)),
    );
}
