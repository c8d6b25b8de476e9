use actix_cors::Cors;
use actix_web::{error, middleware, web, App, HttpResponse, HttpServer, ResponseError};
use tracing::{debug, info, warn};
use crate::error::PlannerError;
use crate::form::{validate_request, ScheduleRequest};
use crate::schedule::allocate;

pub const HEALTH_MESSAGE: &str = "Study Scheduler API is running";

// Schedule generation endpoint
async fn generate_schedule(req: web::Json<ScheduleRequest>) -> Result<HttpResponse, PlannerError> {
    let req = req.into_inner();

    if let Err(e) = validate_request(&req) {
        warn!(error = %e, "rejected schedule request");
        return Err(e.into());
    }

    debug!(preferred_study_times = ?req.preferred_study_times, "preferred times ignored by allocator");

    let schedule = allocate(&req.subjects, req.daily_budget()).map_err(|e| {
        warn!(error = %e, "allocation failed");
        PlannerError::from(e)
    })?;

    info!(
        subjects = req.subjects.len(),
        sessions = schedule.sessions.len(),
        total_hours = schedule.total_hours,
        "schedule generated"
    );

    Ok(HttpResponse::Ok().json(schedule))
}

// Liveness probe
async fn health() -> HttpResponse {
    HttpResponse::Ok().content_type("text/plain").body(HEALTH_MESSAGE)
}

// HTML page handler
async fn index() -> HttpResponse {
    let html = include_str!("../templates/index.html");
    HttpResponse::Ok().content_type("text/html").body(html)
}

/// Malformed JSON bodies get the same error shape as validation failures
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let response = PlannerError::BadRequest(err.to_string()).error_response();
        error::InternalError::from_response(err, response).into()
    })
}

/// Routes shared by the server and the tests
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .route("/", web::get().to(index))
        .service(
            web::scope("/api/schedule")
                .route("/generate", web::post().to(generate_schedule))
                .route("/health", web::get().to(health)),
        );
}

/// Any origin may call the API, including browser preflights
fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .send_wildcard()
        .allow_any_method()
        .allow_any_header()
        .max_age(3600)
}

pub async fn start_server(bind: &str, port: u16) -> std::io::Result<()> {
    info!(bind, port, "starting web server");

    HttpServer::new(|| {
        App::new()
            .wrap(middleware::Logger::default())
            .wrap(cors())
            .configure(configure)
    })
    .bind((bind, port))?
    .run()
    .await
}
