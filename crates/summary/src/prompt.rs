/// Separator placed between embedded reviews. A standalone line of three
/// hyphens is not expected to occur inside review prose.
pub const REVIEW_DELIMITER: &str = "\n---\n";

/// Renders the summarization instruction with every review embedded
/// verbatim. No truncation, no sampling: the whole point of the summary
/// is that it covers all the feedback.
pub fn build_prompt(review_texts: &[&str]) -> String {
    format!(
        "Based on the following clinician reviews, create a concise one-sentence summary \
         (max 100 words) of what people think of this mental health clinician. \
         Focus on common themes, strengths, and overall fit.\n\nReviews:\n{}",
        review_texts.join(REVIEW_DELIMITER)
    )
}
