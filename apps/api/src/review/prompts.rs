// Prompt templates for the resume review endpoints.
// Builders are pure: identical inputs always produce identical prompts.

use crate::models::UserInfo;

/// ATS analysis prompt. Replace `{resume_text}` before sending.
pub const ANALYSIS_PROMPT_TEMPLATE: &str = "You are an expert resume analyst. Analyze the resume below and return the following:
- ATS score (out of 100)
- Strengths
- Weaknesses
- Missing sections
- Tailored suggestions for improvement based on profession
- ATS-relevant keywords that are missing or weak

Resume: {resume_text}";

/// Achievement suggestion prompt. Replace `{resume_text}` before sending.
pub const ACHIEVEMENTS_PROMPT_TEMPLATE: &str = "Read the following resume and suggest industry-specific achievements or enhancements. Tailor examples to the candidate's field, whether teaching, civil engineering, or software. Use real-world metrics where possible.

Resume: {resume_text}";

pub const IMPROVEMENT_PREAMBLE: &str = "You are an expert resume writer. Rewrite the candidate's resume using the details they provided below.";

pub const IMPROVEMENT_CLOSING: &str = "Return the improved resume only. It must be professionally formatted, concise, ATS-optimized, and reflect the candidate's strengths.";

/// Used in the achievements section when the user accepted none.
pub const NO_ACHIEVEMENTS: &str = "None provided";

pub fn build_analysis_prompt(resume_text: &str) -> String {
    ANALYSIS_PROMPT_TEMPLATE.replace("{resume_text}", resume_text)
}

pub fn build_achievements_prompt(resume_text: &str) -> String {
    ACHIEVEMENTS_PROMPT_TEMPLATE.replace("{resume_text}", resume_text)
}

/// Builds the rewrite prompt.
///
/// Layout, sections separated by blank lines:
/// preamble, one `### <Heading>` section per non-blank user field,
/// `### Achievements`, `### Original Resume`, closing instructions.
pub fn build_improvement_prompt(
    user_info: &UserInfo,
    pdf_text: &str,
    accepted_achievements: Option<&str>,
) -> String {
    let mut sections = vec![IMPROVEMENT_PREAMBLE.to_string()];

    for (key, value) in user_info.non_empty_entries() {
        sections.push(format!("### {}\n{}", heading_from_key(key), value));
    }

    let achievements = accepted_achievements
        .filter(|a| !a.trim().is_empty())
        .unwrap_or(NO_ACHIEVEMENTS);
    sections.push(format!("### Achievements\n{achievements}"));

    sections.push(format!("### Original Resume\n{pdf_text}"));
    sections.push(IMPROVEMENT_CLOSING.to_string());

    sections.join("\n\n")
}

/// Turns a camel-case field name into a Title Case heading:
/// a space goes before every ASCII uppercase letter after the first character,
/// and the first character is uppercased.
///
/// `yearsOfExperience` → `Years Of Experience`
pub fn heading_from_key(key: &str) -> String {
    let mut heading = String::with_capacity(key.len() + 4);
    for (i, ch) in key.chars().enumerate() {
        if i == 0 {
            heading.extend(ch.to_uppercase());
        } else {
            if ch.is_ascii_uppercase() {
                heading.push(' ');
            }
            heading.push(ch);
        }
    }
    heading
}
