//! Job Suggestions
//!
//! Asks the AI service for India-focused openings matching a role and a
//! skill set. Never fails: missing fields get defaults and any service or
//! parse failure yields a fixed list of six suggestions.

use super::fallback::encode_component;
use super::types::JobSuggestion;
use crate::ai::prompts::job_suggestions_prompt;
use crate::ai::{parse_json_array, str_field, AiError, CompletionOptions, CompletionProvider};
use log::{debug, info, warn};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

const JOB_MAX_TOKENS: u32 = 2000;

pub struct JobSuggester {
    provider: Arc<dyn CompletionProvider>,
    timeout: Duration,
}

impl JobSuggester {
    pub fn new(provider: Arc<dyn CompletionProvider>, timeout: Duration) -> Self {
        Self { provider, timeout }
    }

    /// `role` and `current_skills` are display names
    pub async fn suggest_jobs<S: AsRef<str>>(&self, role: &str, current_skills: &[S]) -> Vec<JobSuggestion> {
        match self.request_jobs(role, current_skills).await {
            Ok(records) => {
                info!("Generated {} job suggestions for {}", records.len(), role);
                records
                    .iter()
                    .enumerate()
                    .map(|(index, record)| job_from_record(index, record, role))
                    .collect()
            }
            Err(e) => {
                warn!("Job suggestion failed for {}: {}", role, e);
                fallback_jobs(role, current_skills)
            }
        }
    }

    async fn request_jobs<S: AsRef<str>>(&self, role: &str, current_skills: &[S]) -> Result<Vec<Value>, AiError> {
        let prompt = job_suggestions_prompt(role, current_skills);
        debug!("Job suggestion prompt:\n{}", prompt);

        let options = CompletionOptions {
            max_tokens: JOB_MAX_TOKENS,
            ..Default::default()
        };
        let reply = tokio::time::timeout(self.timeout, self.provider.complete(&prompt, &options))
            .await
            .map_err(|_| AiError::Timeout)??;

        parse_json_array(&reply)
    }
}

fn job_from_record(index: usize, record: &Value, role: &str) -> JobSuggestion {
    let title = str_field(record, "title");
    let text = |key: &str, default: &str| str_field(record, key).unwrap_or(default).to_string();

    let required_skills = match record.get("requiredSkills") {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect(),
        _ => vec![role.to_string()],
    };

    JobSuggestion {
        id: (index + 1) as u32,
        title: title.map(str::to_string).unwrap_or_else(|| format!("{} Position", role)),
        company: text("company", "TCS"),
        location: text("location", "Bangalore, India"),
        salary_range: text("salaryRange", "₹6,00,000 - ₹12,00,000 LPA"),
        description: text(
            "description",
            "Exciting opportunity to grow your career in India's tech ecosystem",
        ),
        required_skills,
        experience_level: text("experienceLevel", "Mid"),
        apply_url: str_field(record, "applyUrl")
            .map(str::to_string)
            .unwrap_or_else(|| naukri_search(title.unwrap_or(role))),
    }
}

fn naukri_search(keywords: &str) -> String {
    format!("https://www.naukri.com/jobs-in-india?k={}", encode_component(keywords))
}

/// First `n` skills, or all of them when there are fewer
fn first_skills<S: AsRef<str>>(skills: &[S], n: usize) -> Vec<String> {
    skills.iter().take(n).map(|s| s.as_ref().to_string()).collect()
}

pub fn fallback_jobs<S: AsRef<str>>(role: &str, current_skills: &[S]) -> Vec<JobSuggestion> {
    let encoded = encode_component(role);
    let job = |id: u32,
               title: String,
               company: &str,
               location: &str,
               salary_range: &str,
               description: &str,
               skill_count: usize,
               experience_level: &str,
               apply_url: String| JobSuggestion {
        id,
        title,
        company: company.to_string(),
        location: location.to_string(),
        salary_range: salary_range.to_string(),
        description: description.to_string(),
        required_skills: first_skills(current_skills, skill_count),
        experience_level: experience_level.to_string(),
        apply_url,
    };

    vec![
        job(
            1,
            format!("Senior {}", role),
            "Tata Consultancy Services (TCS)",
            "Bangalore, India",
            "₹18,00,000 - ₹28,00,000 LPA",
            "Join India's largest IT services company and work on global projects with cutting-edge technology",
            3,
            "Senior",
            naukri_search(role),
        ),
        job(
            2,
            role.to_string(),
            "Flipkart",
            "Bangalore, India",
            "₹12,00,000 - ₹20,00,000 LPA",
            "Be part of India's leading e-commerce platform and shape the future of online shopping",
            3,
            "Mid",
            format!(
                "https://www.linkedin.com/jobs/search/?currentJobId=&geoId=102713980&keywords={}&location=India",
                encoded
            ),
        ),
        job(
            3,
            format!("Junior {}", role),
            "Zomato",
            "Gurgaon, India",
            "₹6,00,000 - ₹10,00,000 LPA",
            "Start your career with India's leading food delivery platform and grow in a dynamic startup environment",
            2,
            "Entry",
            format!("https://www.naukri.com/zomato-jobs?k={}", encoded),
        ),
        job(
            4,
            format!("{} - Remote", role),
            "Paytm",
            "Noida, India (Remote Available)",
            "₹10,00,000 - ₹16,00,000 LPA",
            "Join India's digital payments revolution and work on fintech solutions used by millions",
            3,
            "Mid",
            format!("https://careers.paytm.com/jobs?search={}", encoded),
        ),
        job(
            5,
            format!("Lead {}", role),
            "Infosys",
            "Hyderabad, India",
            "₹22,00,000 - ₹32,00,000 LPA",
            "Lead innovative projects at one of India's premier IT services companies with global reach",
            4,
            "Senior",
            format!("https://www.infosys.com/careers/job-search.html?search={}", encoded),
        ),
        job(
            6,
            format!("{} Intern", role),
            "BYJU'S",
            "Bangalore, India",
            "₹4,00,000 - ₹7,00,000 LPA",
            "Begin your journey in EdTech with India's leading online learning platform",
            2,
            "Entry",
            format!("https://byjus.com/careers/?search={}", encoded),
        ),
    ]
}
