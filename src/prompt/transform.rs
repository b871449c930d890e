/// Run-level instructions for the focus-keyword transform assistant.
pub const TRANSFORM_RUN_INSTRUCTIONS: &str =
    "Ensure the response appropriately modified as per Assistant Instructions and the 'focus_keyword' logic is applied as intended Follow the JSON format template strictly as outlined in the Assistant and User prompts.";

/// Prompt for the transform stage: reshapes the metadata stage's output
/// around the focus keyword, per the eight-key JSON output object template.
/// The two focus-keyword fields are scratch state, dropped before the final
/// response.
pub fn transform_prompt(metadata_text: &str, focus_keyword: &str) -> String {
    format!(
        r#"Original Odia meta information and article elements text: {}

Focus Keyword: {}

Instructions:
- Modify the supplied meta information and article elements 'assistant_response' using the optional 'focus_keyword' and strictly adhering to the 'JSON Output Object Template' below.
- Use the 'focus_keyword' provided. If not provided, extract it from the first position of 'semantic_meta_keywords' in the 'assistant_response', translate it to English non-literally as per the 'Translation Criteria and Examples' in the Assistant Prompt, and use it accordingly.
- Apply this logic in every field where the Focus Keyword is to be used.
- Refer to the 'Instructions for transforming the input' and examples in the Assistant Prompt for detailed guidance.

**JSON Output Object Template:**

{{
  "focus_keyword_odia": "As determined in Step 1: The Focus Keyword in Odia.",  // String
  "focus_keyword_english": "As determined in Step 1: The Focus Keyword in English.",  // String
  "meta_title": "Start with the value of focus_keyword_english followed by ': '. Then reproduce the Odia 'meta_title' exactly as received in the 'assistant_response', unchanged. Insert a separator '|'. Append a full English translation of the Odia meta title component, in high-quality Indian English news outlet style, *making sure the news keywords used in the source Odia meta title are reliably and accurately represented in the English translation*. Note: No character limit.",  // String
  "meta_description": "Start with the value of focus_keyword_english followed by ': '. Then reproduce the Odia 'meta_description' exactly as received in the 'assistant_response', unchanged.",  // String
  "headline": "Start with the value of focus_keyword_english followed by ': '. Then reproduce the Odia 'headline' exactly as received in the 'assistant_response', unchanged.",  // String
  "semantic_meta_keywords": [  // Array of Strings
    "The value of Focus Keyword in Odia",
    "List of additional Odia keywords",
    "The value of Focus Keyword in English",
    "Non-literal English translations of the Odia keywords"
  ],
  "article_summary": "Reproduce the 'article_summary' exactly as received in the 'assistant_response', unchanged. No English text or alphabet should be included in this part.",  // String
  "five_key_points": [  // Array of Strings
    "Reproduce the 'five_key_points' exactly as received in the 'assistant_response', unchanged. No English text or alphabet should be included in this part."
  ]
}}

Other Instructions:
- Do not include any notation characters such as '[...]' or '<...>' in the final output.
- Strictly follow the JSON Output Structure provided above.
- Stop generating when the JSON template is fully completed. Do not write outside the JSON template.
- Write only using Odia and English language and alphabets as instructed. Do not use any other language."#,
        metadata_text, focus_keyword
    )
}
