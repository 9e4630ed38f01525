//! Prompt templates for the panel flow

const QUERY_PLACEHOLDER: &str = "{query}";
const RESPONSES_PLACEHOLDER: &str = "{responses}";

/// Templates for generating prompts at each stage
pub struct PromptTemplate;

impl PromptTemplate {
    /// System instruction sent with every completion call, including the judge's
    pub const SYSTEM_INSTRUCTION: &'static str = "You are a helpful, accurate, and comprehensive AI assistant. Provide detailed, well-structured responses that directly address the user's query.";

    /// Section headers the judge is asked to produce, in order
    pub const SECTION_HEADERS: [&'static str; 3] =
        ["## Evaluation", "## Final Response", "## Reasoning"];

    /// Judge evaluation template with `{query}` and `{responses}` placeholders
    pub const JUDGE_TEMPLATE: &'static str = r#"You are an expert AI evaluator. I will provide you with a user query and multiple responses from different AI models. Your job is to:

1. Analyze each response for accuracy, completeness, clarity, and helpfulness
2. Identify the best elements from each response
3. Create a comprehensive merged response that combines the best aspects
4. Provide reasoning for your choices

User Query: {query}

Responses:
{responses}

Please provide:
1. A brief evaluation of each response (2-3 sentences each)
2. A final merged response that incorporates the best elements
3. Your reasoning for the final response

Format your response as:
## Evaluation
[Your evaluation of each response]

## Final Response
[Your merged and improved response]

## Reasoning
[Your reasoning for the final response]"#;

    /// Build the judge prompt for a query and a rendered provider report.
    ///
    /// Substitution is single-pass: placeholder text inside `query` or
    /// `responses` is left as-is.
    pub fn judge_prompt(query: &str, responses: &str) -> String {
        let template = Self::JUDGE_TEMPLATE;
        let mut out = String::with_capacity(template.len() + query.len() + responses.len());
        let mut rest = template;

        while let Some(start) = rest.find('{') {
            out.push_str(&rest[..start]);
            let tail = &rest[start..];
            if let Some(after) = tail.strip_prefix(QUERY_PLACEHOLDER) {
                out.push_str(query);
                rest = after;
            } else if let Some(after) = tail.strip_prefix(RESPONSES_PLACEHOLDER) {
                out.push_str(responses);
                rest = after;
            } else {
                out.push('{');
                rest = &tail[1..];
            }
        }
        out.push_str(rest);

        out
    }
}
