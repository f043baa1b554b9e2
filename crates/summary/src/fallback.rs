/// Summary shown when there is nothing to summarize. Not an error case.
pub const NO_REVIEWS_SUMMARY: &str = "No reviews yet.";

/// Deterministic summary used when reviews exist but no model candidate
/// produced text. Safe to render to end users as-is: no upstream bodies,
/// no credentials, no stack traces.
pub fn compose_unavailable_summary(review_count: usize) -> String {
    let noun = if review_count == 1 { "review" } else { "reviews" };
    format!(
        "Based on {review_count} {noun}, this clinician has received feedback from patients. \
         Unable to generate AI summary at this time."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn singular_review_count() {
        assert_eq!(
            compose_unavailable_summary(1),
            "Based on 1 review, this clinician has received feedback from patients. \
             Unable to generate AI summary at this time."
        );
    }

    #[test]
    fn plural_review_count() {
        let text = compose_unavailable_summary(3);
        assert!(text.starts_with("Based on 3 reviews,"));
        assert!(text.ends_with("Unable to generate AI summary at this time."));
    }

    #[test]
    fn no_reviews_summary_is_stable() {
        assert_eq!(NO_REVIEWS_SUMMARY, "No reviews yet.");
    }

    #[test]
    fn composer_is_deterministic() {
        assert_eq!(compose_unavailable_summary(7), compose_unavailable_summary(7));
    }
}
