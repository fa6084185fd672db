//! Outbound search links for the same role on third-party job boards.
//! Pure string construction; nothing here touches the network.

use reqwest::Url;
use serde::Serialize;

use crate::models::Job;

/// Skills that make a GitHub search worth offering.
const GITHUB_SKILLS: &[&str] = &["javascript", "python", "java", "golang", "rust"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformLinks {
    pub linkedin: String,
    pub bdjobs: String,
    pub glassdoor: String,
    pub indeed: String,
    pub bayt: String,
    pub github: Option<String>,
    pub angellist: String,
    pub remoteok: Option<String>,
}

pub fn build_platform_links(job: &Job) -> PlatformLinks {
    let title_and_company = format!("{} {}", job.title.trim(), job.company.trim());
    let query = title_and_company.as_str();
    let location = job.location.trim();

    let has_github_skill = job
        .skills
        .iter()
        .any(|s| GITHUB_SKILLS.contains(&s.trim().to_lowercase().as_str()));

    PlatformLinks {
        linkedin: search_url(
            "https://www.linkedin.com/jobs/search/",
            &[("keywords", query), ("location", location)],
        ),
        bdjobs: search_url(
            "https://jobs.bdjobs.com/jobsearch.asp",
            &[("txtsearch", query)],
        ),
        glassdoor: search_url(
            "https://www.glassdoor.com/Job/jobs.htm",
            &[("sc.keyword", query), ("locKeyword", location)],
        ),
        indeed: search_url(
            "https://www.indeed.com/jobs",
            &[("q", query), ("l", location)],
        ),
        bayt: search_url(
            "https://www.bayt.com/en/international/jobs/",
            &[("q", query), ("location", location)],
        ),
        github: has_github_skill.then(|| {
            search_url(
                "https://github.com/search",
                &[("q", query), ("type", "users")],
            )
        }),
        angellist: search_url("https://wellfound.com/jobs", &[("query", query)]),
        remoteok: job.is_remote.then(|| {
            search_url(
                "https://remoteok.com/remote-jobs",
                &[("search", job.title.trim())],
            )
        }),
    }
}

/// Base URLs are compile-time constants, so parsing cannot fail at runtime.
fn search_url(base: &str, params: &[(&str, &str)]) -> String {
    match Url::parse_with_params(base, params) {
        Ok(url) => url.into(),
        Err(_) => base.to_string(),
    }
}
