// Prompt template for resume evaluation.

/// Replace `{target_company}`, `{interview_type}` and `{resume_text}` before sending.
pub const ANALYSIS_PROMPT_TEMPLATE: &str = r#"You are an experienced technical recruiter and interview coach.
Evaluate the resume below for a candidate preparing for a {interview_type} interview at {target_company}.

Provide:
1. An overall score out of 10.
2. Sub-scores out of 10 for each of:
   - Clarity
   - Relevance to {target_company}
   - Skills
   - Experience
   - Formatting
3. Specific, actionable suggestions to improve the resume for this company and interview type.

Resume:
"""
{resume_text}
""""#;

/// Builds the evaluation prompt.
///
/// Placeholders are filled in a single left-to-right pass over the template,
/// so braces inside any user-supplied value are copied through verbatim.
pub fn build_analysis_prompt(resume_text: &str, target_company: &str, interview_type: &str) -> String {
    let substitutions = [
        ("{target_company}", target_company),
        ("{interview_type}", interview_type),
        ("{resume_text}", resume_text),
    ];

    let mut prompt = String::with_capacity(ANALYSIS_PROMPT_TEMPLATE.len() + resume_text.len());
    let mut rest = ANALYSIS_PROMPT_TEMPLATE;
    while let Some(start) = rest.find('{') {
        prompt.push_str(&rest[..start]);
        let tail = &rest[start..];
        match substitutions
            .iter()
            .find(|(placeholder, _)| tail.starts_with(placeholder))
        {
            Some((placeholder, value)) => {
                prompt.push_str(value);
                rest = &tail[placeholder.len()..];
            }
            None => {
                prompt.push('{');
                rest = &tail[1..];
            }
        }
    }
    prompt.push_str(rest);
    prompt
}
