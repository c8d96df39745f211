//! Fuzzy course search over codes, titles and title acronyms.

use super::CourseSummary;

const STOP_WORDS: &[&str] = &[
    "and", "of", "the", "for", "in", "on", "to", "a", "an", "with", "by", "from", "at", "as",
    "is", "are", "was", "were", "i", "ii", "iii", "iv", "v",
];

const ROMAN_NUMERALS: &[(&str, &str)] = &[("i", "1"), ("ii", "2"), ("iii", "3"), ("iv", "4"), ("v", "5")];

/// True if `term` finds `course`.
///
/// Tried in order: substring of code or title, acronym of the title's capital
/// letters, acronym of the title's non-stop words (whole title or its first
/// 2 to 4 words), Arabic numeral for a Roman-numeral title word, and finally
/// every search word contained in some title word. An empty term matches.
pub fn matches(course: &CourseSummary, term: &str) -> bool {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }

    let title = course.title.to_lowercase();
    if title.contains(&needle) || course.course_code.to_lowercase().contains(&needle) {
        return true;
    }

    let capitals: String = course.title.chars().filter(char::is_ascii_uppercase).collect();
    if !capitals.is_empty() && capitals.to_lowercase().contains(&needle) {
        return true;
    }

    let words: Vec<&str> = course
        .title
        .split_whitespace()
        .filter(|w| !STOP_WORDS.contains(&w.to_lowercase().as_str()))
        .collect();
    if !words.is_empty() {
        if acronym(&words).contains(&needle) {
            return true;
        }
        for len in 2..=words.len().min(4) {
            if acronym(&words[..len]).contains(&needle) {
                return true;
            }
        }
    }

    let title_words: Vec<&str> = title.split_whitespace().collect();
    if ROMAN_NUMERALS
        .iter()
        .any(|(roman, arabic)| needle == *arabic && title_words.contains(roman))
    {
        return true;
    }

    needle
        .split_whitespace()
        .all(|part| title_words.iter().any(|w| w.contains(part)))
}

fn acronym(words: &[&str]) -> String {
    words
        .iter()
        .filter_map(|w| w.chars().next())
        .collect::<String>()
        .to_lowercase()
}
