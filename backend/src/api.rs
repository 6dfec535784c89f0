//! Web API Module
//!
//! Exposes RESTful endpoints for the skill gap frontend.
//! All endpoints return JSON and require no authentication.

use crate::ai::{AiError, CompletionProvider, OpenRouterProvider};
use crate::analysis::{
    analyze, CatalogError, HttpProbe, JobSuggester, JobSuggestion, LinkValidationCache, LinkValidator,
    ReachabilityProbe, RoadmapConfig, RoadmapNormalizer, RoadmapOrchestrator, RoadmapResult, RoleInfo,
    RoleSkillCatalog, SkillDefinition, SkillGapResult,
};
use crate::config::AppConfig;
use actix_cors::Cors;
use actix_web::{web, App, HttpResponse, HttpServer, Responder};
use chrono::{DateTime, Utc};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

// ============================================================
// APPLICATION STATE
// ============================================================

#[derive(Error, Debug)]
pub enum StartupError {
    #[error("Failed to load skill catalog: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Failed to create AI client: {0}")]
    Ai(#[from] AiError),

    #[error("Failed to create link probe: {0}")]
    Probe(#[from] reqwest::Error),
}

/// Shared application state
pub struct AppState {
    pub catalog: Arc<RoleSkillCatalog>,
    pub provider: Arc<dyn CompletionProvider>,
    pub link_cache: Arc<LinkValidationCache>,
    pub orchestrator: RoadmapOrchestrator,
    pub job_suggester: JobSuggester,
}

impl AppState {
    /// Wire the core around an already-built catalog, provider and probe
    pub fn new(
        catalog: RoleSkillCatalog,
        provider: Arc<dyn CompletionProvider>,
        probe: Arc<dyn ReachabilityProbe>,
        config: &AppConfig,
    ) -> Self {
        let catalog = Arc::new(catalog);
        let link_cache = Arc::new(LinkValidationCache::new());
        let validator = LinkValidator::new(link_cache.clone(), probe).with_timeout(config.link_probe_timeout);

        let orchestrator = RoadmapOrchestrator::new(
            catalog.clone(),
            provider.clone(),
            RoadmapNormalizer::new(Arc::new(validator)),
            RoadmapConfig {
                generation_timeout: config.ai.timeout,
                static_fallback: config.roadmap_static_fallback,
            },
        );
        let job_suggester = JobSuggester::new(provider.clone(), config.ai.timeout);

        Self {
            catalog,
            provider,
            link_cache,
            orchestrator,
            job_suggester,
        }
    }

    /// Production wiring: OpenRouter provider, HTTP probe, optional catalog file
    pub fn from_config(config: &AppConfig) -> Result<Self, StartupError> {
        let catalog = match &config.catalog_path {
            Some(path) => {
                info!("Loading skill catalog from {}", path.display());
                RoleSkillCatalog::load(path)?
            }
            None => RoleSkillCatalog::builtin(),
        };

        let provider = OpenRouterProvider::new(&config.ai)?;
        if config.ai.api_key.is_none() {
            warn!("OPENROUTER_API_KEY is not set; AI features will use fallbacks");
        }
        info!("Using model {}", provider.model());

        let probe = HttpProbe::new(config.link_probe_timeout)?;

        Ok(Self::new(catalog, Arc::new(provider), Arc::new(probe), config))
    }
}

// ============================================================
// API REQUEST/RESPONSE TYPES
// ============================================================

/// Role plus selected skills, shared by the analysis endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisRequest {
    pub role: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
}

impl AnalysisRequest {
    fn role(&self) -> Option<&str> {
        self.role.as_deref().map(str::trim).filter(|r| !r.is_empty())
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillGapResponse {
    pub role: Option<String>,
    pub skills: Vec<String>,
    #[serde(flatten)]
    pub result: SkillGapResult,
}

/// A roadmap result tagged with the input it was computed for
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapResponse {
    pub request_id: String,
    pub generated_at: DateTime<Utc>,
    pub role: Option<String>,
    pub skills: Vec<String>,
    pub result: RoadmapResult,
}

#[derive(Debug, Serialize)]
pub struct AiStatus {
    pub connected: bool,
}

#[derive(Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: &str) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            data: None,
            error: Some(message.to_string()),
        }
    }
}

// ============================================================
// API HANDLERS
// ============================================================

/// Health check endpoint
async fn health_check(data: web::Data<Arc<AppState>>) -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "Skill Bridge API",
        "version": env!("CARGO_PKG_VERSION"),
        "cachedLinks": data.link_cache.len(),
    }))
}

/// Round trip to the AI service
async fn ai_status(data: web::Data<Arc<AppState>>) -> impl Responder {
    let connected = data.provider.check_connection().await;
    HttpResponse::Ok().json(ApiResponse::success(AiStatus { connected }))
}

async fn list_roles(data: web::Data<Arc<AppState>>) -> impl Responder {
    let roles: Vec<RoleInfo> = data
        .catalog
        .roles()
        .map(|role| data.catalog.role_info(Some(&role.id)))
        .collect();
    HttpResponse::Ok().json(ApiResponse::success(roles))
}

async fn get_role(data: web::Data<Arc<AppState>>, path: web::Path<String>) -> impl Responder {
    let role = path.into_inner();
    if !data.catalog.contains_role(&role) {
        return HttpResponse::NotFound().json(ApiResponse::<()>::error(&format!("Unknown role: {}", role)));
    }
    HttpResponse::Ok().json(ApiResponse::success(data.catalog.role_info(Some(&role))))
}

async fn list_skills(data: web::Data<Arc<AppState>>) -> impl Responder {
    let skills: Vec<&SkillDefinition> = data.catalog.skills().collect();
    HttpResponse::Ok().json(ApiResponse::success(skills))
}

async fn skill_gap(data: web::Data<Arc<AppState>>, req: web::Json<AnalysisRequest>) -> impl Responder {
    let result = analyze(&data.catalog, req.role(), &req.skills);
    HttpResponse::Ok().json(ApiResponse::success(SkillGapResponse {
        role: req.role().map(str::to_string),
        skills: req.skills.clone(),
        result,
    }))
}

/// Generate a learning roadmap. Failures are reported inside the result.
async fn generate_roadmap(data: web::Data<Arc<AppState>>, req: web::Json<AnalysisRequest>) -> impl Responder {
    let request_id = Uuid::new_v4().to_string();
    info!(
        "Roadmap request {} for role {:?} with {} skills",
        request_id,
        req.role(),
        req.skills.len()
    );

    let result = data.orchestrator.generate_roadmap(&req.skills, req.role()).await;

    HttpResponse::Ok().json(ApiResponse::success(RoadmapResponse {
        request_id,
        generated_at: Utc::now(),
        role: req.role().map(str::to_string),
        skills: req.skills.clone(),
        result,
    }))
}

async fn job_suggestions(data: web::Data<Arc<AppState>>, req: web::Json<AnalysisRequest>) -> impl Responder {
    let role = match req.role() {
        Some(role) => role,
        None => return HttpResponse::BadRequest().json(ApiResponse::<()>::error("Role is required")),
    };

    // Catalog ids are shown to the model by display name; free-form roles pass through
    let role_name = if data.catalog.contains_role(role) {
        data.catalog.role_display_name(role)
    } else {
        role.to_string()
    };
    let skill_names = data.catalog.display_names(&req.skills);

    let jobs: Vec<JobSuggestion> = data.job_suggester.suggest_jobs(&role_name, &skill_names).await;
    HttpResponse::Ok().json(ApiResponse::success(jobs))
}

// ============================================================
// SERVER CONFIGURATION
// ============================================================

/// Register every endpoint; the caller supplies the `AppState`
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/api/ai/status", web::get().to(ai_status))
        .route("/api/roles", web::get().to(list_roles))
        .route("/api/roles/{role}", web::get().to(get_role))
        .route("/api/skills", web::get().to(list_skills))
        .route("/api/skill-gap", web::post().to(skill_gap))
        .route("/api/roadmap", web::post().to(generate_roadmap))
        .route("/api/jobs/suggestions", web::post().to(job_suggestions));
}

/// Configure and run the API server
pub async fn run_server(config: AppConfig) -> std::io::Result<()> {
    let state = AppState::from_config(&config)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()))?;
    let state = Arc::new(state);

    info!("Skill Bridge API starting at http://{}:{}", config.host, config.port);
    info!("API Endpoints:");
    info!("   GET  /api/ai/status        - AI service connectivity");
    info!("   GET  /api/roles            - List roles");
    info!("   GET  /api/roles/:role      - Role details");
    info!("   GET  /api/skills           - List skills");
    info!("   POST /api/skill-gap        - Skill gap analysis");
    info!("   POST /api/roadmap          - Generate learning roadmap");
    info!("   POST /api/jobs/suggestions - Job suggestions");

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header();

        App::new()
            .wrap(cors)
            .app_data(web::Data::new(state.clone()))
            .configure(configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
