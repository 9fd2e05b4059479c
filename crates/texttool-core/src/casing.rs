//! Case conversion
//!
//! Splits input into words (whitespace, punctuation separators, and
//! lower→upper camel boundaries), then reassembles in the target style.

/// Target style for the case-converter page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseStyle {
    Upper,
    Lower,
    Title,
    Sentence,
    Camel,
    Pascal,
    Snake,
    Kebab,
}

pub fn convert_case(input: &str, style: CaseStyle) -> String {
    match style {
        CaseStyle::Upper => input.to_uppercase(),
        CaseStyle::Lower => input.to_lowercase(),
        CaseStyle::Sentence => sentence_case(input),
        CaseStyle::Title => join_words(input, " ", capitalize),
        CaseStyle::Pascal => join_words(input, "", capitalize),
        CaseStyle::Snake => join_words(input, "_", |w| w.to_lowercase()),
        CaseStyle::Kebab => join_words(input, "-", |w| w.to_lowercase()),
        CaseStyle::Camel => {
            let mut first = true;
            join_words(input, "", move |w| {
                if std::mem::take(&mut first) {
                    w.to_lowercase()
                } else {
                    capitalize(w)
                }
            })
        }
    }
}

/// Split on separators and camelCase boundaries
fn words(input: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut current = String::new();
    let mut prev_lower = false;

    for ch in input.chars() {
        if ch.is_alphanumeric() {
            if ch.is_uppercase() && prev_lower && !current.is_empty() {
                out.push(std::mem::take(&mut current));
            }
            prev_lower = ch.is_lowercase() || ch.is_numeric();
            current.push(ch);
        } else {
            prev_lower = false;
            if !current.is_empty() {
                out.push(std::mem::take(&mut current));
            }
        }
    }
    if !current.is_empty() {
        out.push(current);
    }
    out
}

fn join_words(input: &str, sep: &str, mut transform: impl FnMut(&str) -> String) -> String {
    words(input)
        .iter()
        .map(|w| transform(w))
        .collect::<Vec<_>>()
        .join(sep)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

fn sentence_case(input: &str) -> String {
    let lower = input.to_lowercase();
    let mut out = String::with_capacity(lower.len());
    let mut at_sentence_start = true;
    for ch in lower.chars() {
        if at_sentence_start && ch.is_alphabetic() {
            out.extend(ch.to_uppercase());
            at_sentence_start = false;
        } else {
            if matches!(ch, '.' | '!' | '?') {
                at_sentence_start = true;
            }
            out.push(ch);
        }
    }
    out
}
