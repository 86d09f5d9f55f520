// src/prompt.rs

/// Renders the fixed classification instruction block for a post.
///
/// The template embeds the post verbatim, states the five evaluation
/// criteria, and prescribes the exact two JSON shapes the model may return.
/// No validation of the post content happens here; construction is pure.
pub fn build_eval_prompt(text: &str) -> String {
    format!(
        r#"You are a meme-coin scout. Judge whether the following post has meme potential, meaning it could seed a humorous, shareable cultural artifact.

POST:
{}

EVALUATION CRITERIA:
1. Humor or absurdity - is the idea funny, weird, or delightfully dumb?
2. Shareability - would people repost it without being asked?
3. Originality - is it distinct from memes that already exist?
4. Visual potential - does it suggest a strong, simple logo image?
5. Cultural timing - does it ride something people care about right now?

Respond with a single JSON object and nothing else, in exactly one of these two shapes.

If the post is NOT meme-worthy:
{{"isMeme": false, "reason": "<one sentence explaining why not>"}}

If the post IS meme-worthy:
{{"isMeme": true, "reason": "<one sentence explaining why>", "name": "<a catchy coin name>", "symbol": "<a 3-6 letter ticker>", "logoPrompt": "<an image-generation prompt for the logo>", "tweet": "<a launch tweet under 280 characters>", "backstory": "<a short origin story, 2-3 sentences>"}}"#,
        text
    )
}
