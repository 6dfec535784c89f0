//! Skill Bridge Backend - Main Entry Point
//!
//! Starts the web API server for the skill gap frontend.

use skill_bridge::api::run_server;
use skill_bridge::config::AppConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize logging
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    println!("╔════════════════════════════════════════════════╗");
    println!("║   Skill Bridge - Skill Gap & Learning Roadmap  ║");
    println!("║   Analyze → Plan → Learn                       ║");
    println!("╚════════════════════════════════════════════════╝");
    println!();

    let config = AppConfig::from_env()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()))?;

    run_server(config).await
}
