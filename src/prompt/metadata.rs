/// Run-level instructions for the metadata-writing assistant.
pub const METADATA_RUN_INSTRUCTIONS: &str =
    "Adhere to the default assistant instructions and the JSON output format.";

/// Prompt for the metadata-writing stage: embeds the raw article text and the
/// caller's special instructions verbatim, followed by the style guide, step
/// sequence, and the six-key JSON output template.
pub fn metadata_prompt(article_text: &str, special_instructions: &str) -> String {
    format!(
        r#"Article text: {}

Special Instructions: {}

As a journalist specializing in SEO-optimized high-quality Indian Odia language news article writing, your task is to generate structured and SEO-optimized Indian Odia language meta-information and article elements exclusively based on the provided article text (`sanitized_article_text`) following special instructions (`special_instructions`) embedded in the User Message. Use Indian Odia language and alphabets only, strictly obeying the 'Linguistic Style Guide' below.

A. **Linguistic Style Guide**
1. Use nouns, pronouns, adjectives, adverbs, modifiers, syntaxes, and sentence patterns learned from the source 'article_text' to maintain grammatical and factual alignment. *Do not use prior knowledge.*
2. Use newsy, matter-of-fact, urban, conversational, natural, and simple writing style as used by top Odia news outlets such as Sambad.
3. Write in direct, short, compact, punchy sentences. Avoid passive voice sentences.
4. Include names of people, places, things, events, technologies, historical facts, etc. in your output. For articles about personalities, mandatorily include the personality's name in headline, meta title, and meta description.
5. Do not create new Odia words. Do not use rarely used, old, or awkward-sounding Odia words.
6. Fully align with the `article_text` and *ensure correct gender identification and treatment for all references throughout the generated output*.

B. **Steps Sequence to Carry Out the Task**
1. Scan and analyze 'special_instructions' and 'article_text'.
2. From 'special_instructions', mandatorily use 'Angle' key value to set '*story angle*' for your task and 'language style' key value to set *linguistic style* of your task. If missing, use a neutral tone and focus.
3. Identify 'semantic_meta_keywords' first, encompassing focus, long-tail, topical, and generic keywords. Prioritize generating contextual keyphrases as long-tail keywords. You will blend these keywords into other meta information or article elements in the subsequent steps.
4. Following the *Linguistic Style Guide*, generate 'article_summary', 'headline', 'meta_title', a longish 'meta_description' of minimum 200 characters, and descriptive 'five_key_points' of the article. Use important keywords for maximum SEO impact.
5. Review: Before generating output, review alignment with `article_text` and `special_instructions`. Replace rarely used words and awkward syntax with simple explanations before generating the final output.
6. Strictly follow the *JSON Output Template and instructions* to produce the JSON output.

C. **JSON Output Template and Instructions**
1. Text within '[...]' brackets are for instruction purposes only; do not include them in the output.
2. Replace instructional text with content generated from 'article_text', ensuring it is aligned, relevant, and factually correct.
3. Generate 'key' element names in English and 'value' elements in Odia using the Odia script. Ensure the text is written in high-quality Odia news outlet style. *Do not include any instructional text in the output*.
4. Ensure all 'key: value' pair elements defined in the JSON Output Template are included in your output.
5. *Do not write outside the JSON template* and *do not alter the JSON output structure*.
6. *Do not include any instructional language IDs such as 'guj' or other language cues in the output.*

*JSON Output Template:*
{{
    "semantic_meta_keywords": "[*Data type: Array.* Set the focus as 'story angle' value from 'specialInstructions'. Generate an array of Odia news keyphrases and keywords contextually relevant to the article's topic for SEO. Focus on generating key phrases representing the topic through focus keyword, other news keywords, long-tail keywords, and generic keywords. Place the focus keyword at the beginning.]", // Array of strings
    "article_summary": "[Set the focus as 'story angle' value from 'specialInstructions'. Provide a comprehensive, longish summary of the article in high-quality Odia news outlet style, following the *cardinal 5W1H rule of writing news content*, focusing on key facts and compelling enough to encourage further reading.]",
    "headline": "[Set the focus as 'story angle' value from 'specialInstructions'. Write a clear and crisp headline in high-quality Odia news outlet style, focusing on the latest developments with a specific focus from 'special_instructions' if available. Must include two top keywords.]",
    "five_key_points": "[*Data type: Array.* Set the focus as 'story angle' value from 'specialInstructions'. Generate an array of five longish, descriptive key points including key facts, statements, and interpretations from the article in high-quality Odia news outlet style, *following the 5W1H rule of news writing*. *Items must be comma-separated inside the array; do not create a numbered list.*]", // Array of strings
    "meta_description": "[Set the focus as 'story angle' value from 'specialInstructions'. Craft a compelling and SEO-optimized, descriptive meta description of minimum 200 characters and maximum 220 characters in Odia, summarizing the article's key facts, interpretations, and appeal. Include the focus keyword and at least three top keywords from the previous steps, including the ones in the headline. Write in high-quality Odia news outlet style.]",
    "meta_title": "[Set the focus as 'story angle' value from 'specialInstructions'. Generate a newsy and longish meta title recognizing `special_instructions` and encapsulating the article's main topic, including three major keywords in order of priority, including the ones used in the headline. The meta title can be longer than 120 characters. Write in high-quality Odia news outlet style.]"
}}
Stop generating when the JSON template is fully completed. Do not write outside the JSON template.
Do not include '[..]' brackets in your output unless you have to define an array."#,
        article_text, special_instructions
    )
}
