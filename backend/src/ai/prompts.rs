//! Prompt builders for the chat-completion service

/// Upper bound on roadmap steps requested from the model
pub const MAX_ROADMAP_STEPS: usize = 12;

/// Number of job suggestions requested from the model
pub const JOB_SUGGESTION_COUNT: usize = 6;

pub fn roadmap_prompt<S: AsRef<str>>(
    role: &str,
    current_skills: &[S],
    required_skills: &[S],
    missing_skills: &[S],
) -> String {
    format!(
        r#"
You are a career development expert creating a personalized learning roadmap.

Target Role: {role}
Current Skills: {current}
Required Skills for Role: {required}
Skills to Learn: {missing}

Create a step-by-step learning roadmap for the missing skills. For each step, provide:
1. A clear, specific learning objective
2. Resource type (either "VIDEO" or "SITE")
3. Estimated learning time
4. Brief description of what they'll learn
5. A VALID, ACCESSIBLE learning resource link

Format your response as a JSON array with exactly this structure:
[
  {{
    "id": 1,
    "skillName": "Specific learning objective",
    "type": "VIDEO" or "SITE",
    "description": "Brief description",
    "estimatedTime": "2-3 weeks",
    "difficulty": "Beginner/Intermediate/Advanced",
    "link": "https://valid-accessible-url.com"
  }}
]

IMPORTANT LINK REQUIREMENTS:
- For VIDEO type: Use YouTube, Coursera, Udemy, or educational platform URLs
- For SITE type: Use MDN, official documentation, W3Schools, FreeCodeCamp, or reputable tutorial sites
- Links MUST be real, accessible URLs that exist and work
- Prefer free resources over paid ones
- Use specific tutorial/course URLs, not general homepage URLs
- Examples of good links:
  * https://www.youtube.com/watch?v=specific-tutorial
  * https://developer.mozilla.org/en-US/docs/specific-topic
  * https://www.freecodecamp.org/learn/specific-course
  * https://reactjs.org/tutorial/tutorial.html

Make sure to:
- Order steps logically (prerequisites first)
- Include ALL missing skills (up to {max_steps} steps maximum)
- Be specific about what they'll learn
- Consider the user's existing skills
- Focus on practical, actionable learning objectives
- ONLY include links that are real and accessible

Respond with only the JSON array, no additional text.
"#,
        role = role,
        current = join(current_skills),
        required = join(required_skills),
        missing = join(missing_skills),
        max_steps = MAX_ROADMAP_STEPS,
    )
}

pub fn job_suggestions_prompt<S: AsRef<str>>(role: &str, current_skills: &[S]) -> String {
    format!(
        r#"
You are a job search expert helping users find relevant job opportunities in India.

Target Role: {role}
User's Skills: {skills}

Generate {count} relevant job opportunities in India that match the user's profile. For each job, provide:
1. Job title
2. Indian company name (use realistic Indian company names like TCS, Infosys, Wipro, Zomato, Flipkart, Paytm, etc.)
3. Location (major Indian cities like Bangalore, Mumbai, Delhi, Hyderabad, Pune, Chennai, etc.)
4. Salary range in INR (realistic for Indian market)
5. Brief job description
6. Key skills required
7. Experience level required

Format your response as a JSON array with exactly this structure:
[
  {{
    "id": 1,
    "title": "Job Title",
    "company": "Indian Company Name",
    "location": "Indian City, India",
    "salaryRange": "₹X,XX,XXX - ₹X,XX,XXX LPA",
    "description": "Brief 2-3 line job description",
    "requiredSkills": ["skill1", "skill2", "skill3"],
    "experienceLevel": "Entry/Mid/Senior",
    "applyUrl": "https://naukri.com/job/123 or https://linkedin.com/jobs/india/123"
  }}
]

Salary Guidelines for India:
- Entry Level: ₹3,00,000 - ₹8,00,000 LPA
- Mid Level: ₹8,00,000 - ₹18,00,000 LPA
- Senior Level: ₹18,00,000 - ₹40,00,000 LPA

Focus on:
- Real Indian companies (both startups and established firms)
- Major Indian tech hubs
- Competitive Indian salary ranges in INR
- Include both product companies and service companies
- Use Indian job portals like Naukri.com, LinkedIn India in apply URLs

Respond with only the JSON array, no additional text.
"#,
        role = role,
        skills = join(current_skills),
        count = JOB_SUGGESTION_COUNT,
    )
}

fn join<S: AsRef<str>>(items: &[S]) -> String {
    items
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(", ")
}
