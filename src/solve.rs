use actix_web::{web, HttpResponse, Responder};
use lru::LruCache;
use parking_lot::Mutex;
use std::fs;
use std::num::NonZeroUsize;

use crate::config::SolverConfig;
use crate::convert::to_response;
use crate::domain::document::ModelDocument;
use crate::domain::problem::Problem;
use crate::error::ProblemError;
use crate::models::{SolveRequest, SolveResponse, Status};

/// Name of the per-request copy of a parameters file posted with the request
const PARAMETERS_FILE: &str = "symphonyParameters.txt";

/// Shared by all workers
pub struct AppState {
    pub config: SolverConfig,
    cache: Mutex<LruCache<SolveRequest, SolveResponse>>,
}

impl AppState {
    pub fn new(config: SolverConfig, cache_capacity: NonZeroUsize) -> Self {
        AppState {
            config,
            cache: Mutex::new(LruCache::new(cache_capacity)),
        }
    }

    fn cached(&self, req: &SolveRequest) -> Option<SolveResponse> {
        self.cache.lock().get(req).cloned()
    }

    fn remember(&self, req: SolveRequest, response: &SolveResponse) {
        // Failed runs (timeouts, crashes) may succeed on retry
        if response.status != Status::Failed {
            self.cache.lock().put(req, response.clone());
        }
    }
}

/// Run one request end to end in its own directory under the configured output dir.
/// The directory is kept when the solve completes so the artifacts named in
/// diagnostics stay readable.
pub fn solve_request(
    req: &SolveRequest,
    config: &SolverConfig,
) -> Result<SolveResponse, ProblemError> {
    let mut problem = Problem::new(req.name.as_str());
    problem.create(&ModelDocument::from(req))?;
    problem.ensure_solvable()?;

    let workdir = tempfile::Builder::new()
        .prefix("solve-")
        .tempdir_in(&config.output_dir)?;
    let parameters = match &req.parameters {
        Some(contents) => {
            let path = workdir.path().join(PARAMETERS_FILE);
            fs::write(&path, contents)?;
            Some(path)
        }
        None => config.parameters_path.clone(),
    };

    let solver = config.command();
    problem.solve_with(workdir.path(), parameters.as_deref(), &solver)?;

    // Diagnostics point into the work dir, so it outlives the request
    let kept = workdir.keep();
    log::debug!("artifacts for problem {} kept in {}", req.name, kept.display());

    Ok(to_response(&mut problem))
}

fn error_response(err: &ProblemError) -> HttpResponse {
    let body = serde_json::json!({ "error": err.to_string() });
    if err.is_client_error() {
        HttpResponse::BadRequest().json(body)
    } else {
        log::error!("solve failed: {}", err);
        sentry::capture_error(err);
        HttpResponse::InternalServerError().json(body)
    }
}

/// POST /solve
pub async fn solve(state: web::Data<AppState>, req: web::Json<SolveRequest>) -> HttpResponse {
    let req = req.into_inner();
    if let Some(response) = state.cached(&req) {
        log::debug!("cache hit for problem {}", req.name);
        return HttpResponse::Ok().json(response);
    }

    let worker_state = state.clone();
    let worker_req = req.clone();
    let result =
        web::block(move || solve_request(&worker_req, &worker_state.config)).await;

    match result {
        Ok(Ok(response)) => {
            state.remember(req, &response);
            HttpResponse::Ok().json(response)
        }
        Ok(Err(err)) => error_response(&err),
        Err(err) => HttpResponse::InternalServerError()
            .json(serde_json::json!({ "error": err.to_string() })),
    }
}

/// GET /health
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().body("OK")
}

/// JSON extractor settings: payload limit and `{ "error": ... }` bodies for bad JSON
pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(|err, _| {
            let err_string = err.to_string();
            actix_web::error::InternalError::from_response(
                err,
                HttpResponse::BadRequest().json(serde_json::json!({ "error": err_string })),
            )
            .into()
        })
}

/// Register the service routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/solve", web::post().to(solve))
        .route("/health", web::get().to(health_check));
}
