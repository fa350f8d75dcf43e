const WORDS_PER_MINUTE: usize = 200;

/// Target-reader age bands by word count, half-open `[prev, limit)`.
const AGE_BANDS: &[(usize, &str)] = &[(1_000, "5–8"), (5_000, "6–10"), (15_000, "8–12")];
const OLDEST_BAND: &str = "10–14";

pub fn reading_time(word_count: usize) -> String {
    format!("~{} min", (word_count / WORDS_PER_MINUTE).max(1))
}

pub fn age_category(word_count: usize) -> &'static str {
    AGE_BANDS
        .iter()
        .find(|(limit, _)| word_count < *limit)
        .map(|(_, band)| *band)
        .unwrap_or(OLDEST_BAND)
}
