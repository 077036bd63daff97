use crate::state::AppState;
use crate::studio::CapturedClipboard;
use crate::types::{GenerateRequest, InputRequest, ModeRequest};
use actix_web::{HttpResponse, Responder, error, web};

const INDEX_HTML: &str = include_str!("../static/index.html");

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/").route(web::get().to(index)))
        .service(web::resource("/health").route(web::get().to(health)))
        .service(web::resource("/api/session").route(web::post().to(new_session)))
        .service(web::resource("/api/state").route(web::get().to(get_state)))
        .service(web::resource("/api/mode").route(web::post().to(set_mode)))
        .service(web::resource("/api/input").route(web::post().to(set_input)))
        .service(web::resource("/api/generate").route(web::post().to(generate)))
        .service(web::resource("/api/copy").route(web::post().to(copy)));
}

pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(1024 * 1024)
        .error_handler(|err, _req| {
            log::warn!("Rejected request body: {err}");
            let response = HttpResponse::BadRequest().json(serde_json::json!({
                "error": err.to_string()
            }));
            error::InternalError::from_response(err, response).into()
        })
}

pub async fn index() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(INDEX_HTML)
}

pub async fn health(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "model": state.config.model,
        "apiBaseUrl": state.config.api_base_url
    }))
}

pub async fn new_session(state: web::Data<AppState>) -> impl Responder {
    let mut studio = state.studio();
    studio.reset();
    log::info!("New session started");
    HttpResponse::Ok().json(studio.snapshot())
}

pub async fn get_state(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.studio().snapshot())
}

pub async fn set_mode(state: web::Data<AppState>, body: web::Json<ModeRequest>) -> impl Responder {
    let mut studio = state.studio();
    studio.set_mode(body.mode);
    log::debug!("Mode set to {:?}", body.mode);
    HttpResponse::Ok().json(studio.snapshot())
}

pub async fn set_input(
    state: web::Data<AppState>,
    body: web::Json<InputRequest>,
) -> impl Responder {
    let mut studio = state.studio();
    studio.set_input(body.into_inner().input);
    HttpResponse::Ok().json(studio.snapshot())
}

pub async fn generate(
    state: web::Data<AppState>,
    body: Option<web::Json<GenerateRequest>>,
) -> impl Responder {
    log::info!("==== Generate Request Started ====");

    // The lock is released while the remote call is pending so the page can
    // keep switching modes or editing input.
    let ticket = {
        let mut studio = state.studio();
        if let Some(input) = body.and_then(|b| b.into_inner().input) {
            studio.set_input(input);
        }
        match studio.begin_generate() {
            Ok(ticket) => ticket,
            Err(err) => {
                log::info!("Generate rejected: {err}");
                return HttpResponse::Ok().json(studio.snapshot());
            }
        }
    };

    if state.config.debug {
        log::debug!(
            "Request {}: mode={:?}, input {} chars",
            ticket.request_id,
            ticket.mode,
            ticket.input.chars().count()
        );
    }

    let result = state
        .client
        .generate_content(ticket.mode, &ticket.input)
        .await;

    let mut studio = state.studio();
    if studio.finish_generate(&ticket, result) {
        log::info!("Request {} applied", ticket.request_id);
    }

    HttpResponse::Ok()
        .insert_header(("Cache-Control", "no-cache"))
        .json(studio.snapshot())
}

pub async fn copy(state: web::Data<AppState>) -> impl Responder {
    let mut studio = state.studio();
    let mut clipboard = CapturedClipboard::default();
    studio.copy(&mut clipboard);

    let mut snapshot = studio.snapshot();
    snapshot.clipboard = clipboard.text;
    HttpResponse::Ok().json(snapshot)
}
