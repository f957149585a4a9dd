//! Date/time pattern translation and locale lookup.
//!
//! Patterns are written with Luxon-style tokens (`HH:mm:ss`,
//! `cccc d LLLL yyyy`) and translated to chrono's strftime syntax. Text in
//! single quotes is literal, `''` is a quote. A pattern that already
//! contains `%` is taken as strftime and passed through untouched.

use chrono::Locale;
use tracing::debug;

/// Translates a pattern to chrono strftime syntax.
pub fn to_strftime(pattern: &str) -> String {
    if pattern.contains('%') {
        return pattern.to_string();
    }

    let chars: Vec<char> = pattern.chars().collect();
    let mut out = String::with_capacity(pattern.len() * 2);
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        if c == '\'' {
            if chars.get(i + 1) == Some(&'\'') {
                out.push('\'');
                i += 2;
                continue;
            }
            let mut j = i + 1;
            while j < chars.len() && chars[j] != '\'' {
                push_literal(&mut out, chars[j]);
                j += 1;
            }
            i = j + 1;
            continue;
        }

        let mut run = 1;
        while chars.get(i + run) == Some(&c) {
            run += 1;
        }

        match specifier(c, run) {
            Some(spec) => out.push_str(spec),
            None => (0..run).for_each(|_| push_literal(&mut out, c)),
        }
        i += run;
    }

    out
}

fn specifier(c: char, run: usize) -> Option<&'static str> {
    let spec = match (c, run) {
        ('y', 2) => "%y",
        ('y', _) => "%Y",
        ('k', _) => "%G",
        ('L' | 'M', 1) => "%-m",
        ('L' | 'M', 2) => "%m",
        ('L' | 'M', 3) => "%b",
        ('L' | 'M', _) => "%B",
        ('d', 1) => "%-d",
        ('d', _) => "%d",
        ('o', 1 | 2) => "%-j",
        ('o', _) => "%j",
        ('c' | 'E', 1 | 2) => "%u",
        ('c' | 'E', 3) => "%a",
        ('c' | 'E', _) => "%A",
        ('W', 1) => "%-V",
        ('W', _) => "%V",
        ('H', 1) => "%-H",
        ('H', _) => "%H",
        ('h', 1) => "%-I",
        ('h', _) => "%I",
        ('m', 1) => "%-M",
        ('m', _) => "%M",
        ('s', 1) => "%-S",
        ('s', _) => "%S",
        ('S', _) => "%3f",
        ('a', _) => "%p",
        ('Z', 1 | 2) => "%:z",
        ('Z', _) => "%z",
        ('z', _) => "%Z",
        _ => return None,
    };
    Some(spec)
}

fn push_literal(out: &mut String, c: char) {
    if c == '%' {
        out.push_str("%%");
    } else {
        out.push(c);
    }
}

/// Resolves a locale tag such as `fr`, `fr-FR` or `de_AT`.
///
/// Unknown or missing tags fall back to `en_US`.
pub fn resolve_locale(tag: Option<&str>) -> Locale {
    let Some(tag) = tag.map(str::trim).filter(|t| !t.is_empty()) else {
        return Locale::en_US;
    };

    let normalized = tag.replace('-', "_");
    let mut parts = normalized.split('_');
    let language = parts.next().unwrap_or_default().to_ascii_lowercase();
    let region = parts.next().map(str::to_ascii_uppercase);

    let candidates = [
        Some(normalized.clone()),
        region.map(|region| format!("{language}_{region}")),
        Some(format!("{language}_{}", language.to_ascii_uppercase())),
    ];

    candidates
        .into_iter()
        .flatten()
        .find_map(|candidate| Locale::try_from(candidate.as_str()).ok())
        .unwrap_or_else(|| {
            debug!(locale = tag, "Unknown locale, using en_US");
            Locale::en_US
        })
}
