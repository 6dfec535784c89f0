//! HTTP API tests against mock AI and link probes

use actix_web::{test, web, App};
use async_trait::async_trait;
use serde_json::{json, Value};
use skill_bridge::ai::{AiError, CompletionOptions, CompletionProvider};
use skill_bridge::api::{configure, AppState};
use skill_bridge::config::AppConfig;
use skill_bridge::{ReachabilityProbe, RoleSkillCatalog};
use std::sync::Arc;
use url::Url;

/// Answers roadmap and job prompts with canned JSON, or always fails
struct ScriptedProvider {
    online: bool,
}

#[async_trait]
impl CompletionProvider for ScriptedProvider {
    async fn complete(&self, prompt: &str, _options: &CompletionOptions) -> Result<String, AiError> {
        if !self.online {
            return Err(AiError::MissingApiKey);
        }
        if prompt.contains("API Working") {
            return Ok("API Working".to_string());
        }
        if prompt.contains("job opportunities") {
            return Ok(json!([{ "title": "React Developer", "company": "Swiggy" }]).to_string());
        }
        Ok(json!([
            { "skillName": "Learn TypeScript", "type": "SITE", "estimatedTime": "2 weeks",
              "link": "https://www.typescriptlang.org/docs/" },
            { "skillName": "Learn React", "type": "VIDEO", "estimatedTime": "3-5 weeks",
              "link": "https://broken.example.com/react" }
        ])
        .to_string())
    }
}

struct DomainProbe;

#[async_trait]
impl ReachabilityProbe for DomainProbe {
    async fn probe(&self, url: &Url) -> bool {
        url.host_str() == Some("www.typescriptlang.org")
    }
}

fn state(online: bool) -> Arc<AppState> {
    Arc::new(AppState::new(
        RoleSkillCatalog::builtin(),
        Arc::new(ScriptedProvider { online }),
        Arc::new(DomainProbe),
        &AppConfig::default(),
    ))
}

macro_rules! app {
    ($state:expr) => {
        test::init_service(App::new().app_data(web::Data::new($state)).configure(configure)).await
    };
}

#[actix_rt::test]
async fn test_health() {
    let app = app!(state(true));
    let req = test::TestRequest::get().uri("/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["cachedLinks"], 0);
}

#[actix_rt::test]
async fn test_ai_status() {
    let app = app!(state(true));
    let req = test::TestRequest::get().uri("/api/ai/status").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["connected"], true);

    let app = app!(state(false));
    let req = test::TestRequest::get().uri("/api/ai/status").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["connected"], false);
}

#[actix_rt::test]
async fn test_roles_and_skills() {
    let app = app!(state(true));

    let req = test::TestRequest::get().uri("/api/roles").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let roles = body["data"].as_array().unwrap();
    assert_eq!(roles.len(), 10);
    assert_eq!(roles[0]["id"], "frontend-developer");
    assert_eq!(roles[0]["name"], "Frontend Developer");

    let req = test::TestRequest::get().uri("/api/roles/ui-ux-designer").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["name"], "Ui Ux Designer");
    assert_eq!(body["data"]["requiredSkillsDisplay"][0], "Figma Design Tool");

    let req = test::TestRequest::get().uri("/api/roles/astronaut").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);

    let req = test::TestRequest::get().uri("/api/skills").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 22);
    assert_eq!(body["data"][0], json!({ "id": "javascript", "name": "JavaScript Fundamentals" }));
}

#[actix_rt::test]
async fn test_skill_gap() {
    let app = app!(state(true));
    let req = test::TestRequest::post()
        .uri("/api/skill-gap")
        .set_json(json!({ "role": "frontend-developer", "skills": ["javascript", "html", "git"] }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    let data = &body["data"];
    assert_eq!(data["matchPercentage"], 43);
    assert_eq!(data["matchingSkills"], json!(["javascript", "html", "git"]));
    assert_eq!(data["missingSkills"], json!(["typescript", "react", "css", "figma"]));
    assert_eq!(data["role"], "frontend-developer");

    let req = test::TestRequest::post()
        .uri("/api/skill-gap")
        .set_json(json!({ "skills": ["javascript"] }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["matchPercentage"], 0);
    assert_eq!(body["data"]["missingSkills"], json!([]));
}

#[actix_rt::test]
async fn test_roadmap_ready() {
    let state = state(true);
    let app = app!(state.clone());
    let req = test::TestRequest::post()
        .uri("/api/roadmap")
        .set_json(json!({ "role": "frontend-developer", "skills": ["javascript", "html", "git"] }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    let data = &body["data"];
    assert!(data["requestId"].as_str().is_some());
    assert!(data["generatedAt"].as_str().is_some());
    assert_eq!(data["role"], "frontend-developer");
    assert_eq!(data["skills"], json!(["javascript", "html", "git"]));

    let result = &data["result"];
    assert_eq!(result["success"], true);
    assert!(result.get("error").is_none());
    assert_eq!(result["roadmap"][0]["link"], "https://www.typescriptlang.org/docs/");
    assert_eq!(result["roadmap"][1]["type"], "VIDEO");
    assert_eq!(result["roadmap"][1]["link"], "https://www.youtube.com/watch?v=SqcY0GlETPk");
    assert_eq!(result["metadata"]["estimatedTime"], "6 weeks");
    assert_eq!(result["metadata"]["completionStatus"], "in-progress");
    assert_eq!(result["metadata"]["targetRole"], "Frontend Developer");
    assert_eq!(state.link_cache.len(), 2);
}

#[actix_rt::test]
async fn test_roadmap_states() {
    let app = app!(state(false));

    let req = test::TestRequest::post()
        .uri("/api/roadmap")
        .set_json(json!({ "skills": ["javascript"] }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let result = &body["data"]["result"];
    assert_eq!(result["success"], false);
    assert_eq!(result["error"], "Invalid or missing job role");
    assert_eq!(result["metadata"]["completionStatus"], "No role selected");

    let req = test::TestRequest::post()
        .uri("/api/roadmap")
        .set_json(json!({ "role": "product-manager", "skills": ["agile", "data-analysis", "sql"] }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let result = &body["data"]["result"];
    assert_eq!(result["success"], true);
    assert_eq!(result["metadata"]["completionStatus"], "complete");

    let req = test::TestRequest::post()
        .uri("/api/roadmap")
        .set_json(json!({ "role": "product-manager", "skills": [] }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;
    let result = &body["data"]["result"];
    assert_eq!(result["success"], false);
    assert_eq!(result["metadata"]["completionStatus"], "error");
    assert_eq!(result["roadmap"], json!([]));
}

#[actix_rt::test]
async fn test_job_suggestions() {
    let app = app!(state(true));
    let req = test::TestRequest::post()
        .uri("/api/jobs/suggestions")
        .set_json(json!({ "role": "frontend-developer", "skills": ["react"] }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let jobs = body["data"].as_array().unwrap();
    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0]["company"], "Swiggy");
    assert_eq!(jobs[0]["requiredSkills"], json!(["Frontend Developer"]));

    let app = app!(state(false));
    let req = test::TestRequest::post()
        .uri("/api/jobs/suggestions")
        .set_json(json!({ "role": "frontend-developer", "skills": ["react", "git"] }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let jobs = body["data"].as_array().unwrap();
    assert_eq!(jobs.len(), 6);
    assert_eq!(jobs[0]["title"], "Senior Frontend Developer");
    assert_eq!(jobs[0]["requiredSkills"], json!(["React Framework", "Git Version Control"]));

    let req = test::TestRequest::post()
        .uri("/api/jobs/suggestions")
        .set_json(json!({ "role": "  ", "skills": [] }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}
