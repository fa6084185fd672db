// Prompts for the assistant features. Placeholders use {braces} and are
// filled with `str::replace`.

pub const CHAT_SYSTEM: &str = "You are a friendly career assistant on a job board. \
    Help job seekers with job search strategy, CV improvement, interview preparation, \
    and skill development. Keep answers concise and practical. \
    The user's profile:\n{profile}";

pub const CV_SKILLS_SYSTEM: &str = crate::llm_client::prompts::JSON_ONLY_SYSTEM;

pub const CV_SKILLS_PROMPT: &str = "Extract the professional skills (technologies, tools, \
    languages, methodologies) mentioned in the CV below.\n\
    Respond as: {\"skills\": [\"Skill\", ...]}\n\n\
    CV:\n{cv_text}";

pub const ROADMAP_SYSTEM: &str = crate::llm_client::prompts::JSON_ONLY_SYSTEM;

pub const ROADMAP_PROMPT: &str = "Create a step-by-step learning roadmap for someone who \
    wants to become a {target_role}.\n\
    Their current profile:\n{profile}\n\n\
    Respond as: {\"summary\": \"...\", \"phases\": [{\"title\": \"...\", \
    \"durationWeeks\": 4, \"skills\": [\"...\"], \"milestones\": [\"...\"]}]}";
