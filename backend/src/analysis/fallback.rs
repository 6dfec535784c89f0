//! Fallback Learning Links
//!
//! Deterministic replacement links for roadmap steps whose own link is
//! missing or unreachable. A curated table is tried first (first matching
//! key in table order wins), then a search URL for the skill.

use super::types::ResourceType;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters left unescaped by JavaScript's `encodeURIComponent`
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

const VIDEO_LINKS: &[(&str, &str)] = &[
    ("javascript", "https://www.youtube.com/watch?v=PkZNo7MFNFg"),
    ("react", "https://www.youtube.com/watch?v=SqcY0GlETPk"),
    ("nodejs", "https://www.youtube.com/watch?v=fBNz5xF-Kx4"),
    ("python", "https://www.youtube.com/watch?v=_uQrJ0TkZlc"),
    ("typescript", "https://www.youtube.com/watch?v=BwuLxPH8IDs"),
    ("html", "https://www.youtube.com/watch?v=pQN-pnXPaVg"),
    ("css", "https://www.youtube.com/watch?v=yfoY53QXEnI"),
    ("git", "https://www.youtube.com/watch?v=8JJ101D3knE"),
    ("sql", "https://www.youtube.com/watch?v=HXV3zeQKqGY"),
    ("mongodb", "https://www.youtube.com/watch?v=pWbMrx5rVBE"),
];

const SITE_LINKS: &[(&str, &str)] = &[
    ("javascript", "https://developer.mozilla.org/en-US/docs/Web/JavaScript/Guide"),
    ("react", "https://reactjs.org/tutorial/tutorial.html"),
    ("nodejs", "https://nodejs.org/en/learn/getting-started/introduction-to-nodejs"),
    ("python", "https://docs.python.org/3/tutorial/"),
    ("typescript", "https://www.typescriptlang.org/docs/handbook/typescript-in-5-minutes.html"),
    ("html", "https://developer.mozilla.org/en-US/docs/Web/HTML"),
    ("css", "https://developer.mozilla.org/en-US/docs/Web/CSS"),
    ("git", "https://git-scm.com/docs/gittutorial"),
    ("sql", "https://www.w3schools.com/sql/"),
    ("mongodb", "https://docs.mongodb.com/manual/tutorial/getting-started/"),
    ("aws", "https://aws.amazon.com/getting-started/"),
    ("docker", "https://docs.docker.com/get-started/"),
    ("kubernetes", "https://kubernetes.io/docs/tutorials/kubernetes-basics/"),
];

const VIDEO_SEARCH: &str = "https://www.youtube.com/results?search_query=";
const SITE_SEARCH: &str = "https://www.freecodecamp.org/news/search/?query=";

fn curated_links(resource_type: ResourceType) -> &'static [(&'static str, &'static str)] {
    match resource_type {
        ResourceType::Video => VIDEO_LINKS,
        ResourceType::Site => SITE_LINKS,
    }
}

/// Percent-encode like `encodeURIComponent`
pub fn encode_component(raw: &str) -> String {
    utf8_percent_encode(raw, URI_COMPONENT).to_string()
}

/// A usable learning link for `skill_name`. Pure and total.
pub fn fallback_link(skill_name: &str, resource_type: ResourceType) -> String {
    let skill_lower = skill_name.to_lowercase();

    if let Some((_, link)) = curated_links(resource_type)
        .iter()
        .find(|(key, _)| skill_lower.contains(key))
    {
        return link.to_string();
    }

    match resource_type {
        ResourceType::Video => format!(
            "{}{}",
            VIDEO_SEARCH,
            encode_component(&format!("{} tutorial", skill_name))
        ),
        ResourceType::Site => format!("{}{}", SITE_SEARCH, encode_component(skill_name)),
    }
}
