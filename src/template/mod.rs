//! `{{ token }}` substitution over clock values and live entity state.
//!
//! Only four kinds of token exist: `user`, `date`, `time` and entity ids.


use std::{borrow::Cow, sync::LazyLock};

use regex::{Captures, Regex};

use crate::{clock::ClockSnapshot, host::Host};

/// Substituted for `{{ user }}` when the host has no user name.
pub const UNKNOWN_USER: &str = "unknown user";
/// Substituted for entity tokens the host does not know.
pub const ENTITY_NOT_FOUND: &str = "[entity not found]";

#[allow(clippy::expect_used)]
static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{\s*(.*?)\s*\}\}").expect("valid placeholder regex"));

/// A parsed placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token<'a> {
    /// Current user's display name
    User,
    /// Current formatted date
    Date,
    /// Current formatted time
    Time,
    /// State of the named entity
    Entity(&'a str),
}

impl<'a> Token<'a> {
    /// Classifies the inside of a placeholder.
    pub fn parse(raw: &'a str) -> Self {
        let trimmed = raw.trim();
        if trimmed.eq_ignore_ascii_case("user") {
            Token::User
        } else if trimmed.eq_ignore_ascii_case("date") {
            Token::Date
        } else if trimmed.eq_ignore_ascii_case("time") {
            Token::Time
        } else {
            Token::Entity(trimmed)
        }
    }
}

/// Everything a placeholder can resolve against during one render pass.
pub struct TemplateContext<'a> {
    host: &'a dyn Host,
    clock: &'a ClockSnapshot,
}

impl<'a> TemplateContext<'a> {
    /// Creates a context over the host and the current clock strings.
    pub fn new(host: &'a dyn Host, clock: &'a ClockSnapshot) -> Self {
        Self { host, clock }
    }

    /// Replaces every placeholder in `text`; other text passes through.
    pub fn resolve<'t>(&self, text: &'t str) -> Cow<'t, str> {
        PLACEHOLDER.replace_all(text, |caps: &Captures<'_>| {
            let raw = caps.get(1).map_or("", |m| m.as_str());
            self.value_of(Token::parse(raw))
        })
    }

    fn value_of(&self, token: Token<'_>) -> String {
        match token {
            Token::User => self
                .host
                .user_name()
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| UNKNOWN_USER.to_string()),
            Token::Date => self.clock.date.clone(),
            Token::Time => self.clock.time.clone(),
            Token::Entity(entity_id) => self
                .host
                .entity_state(entity_id)
                .unwrap_or_else(|| ENTITY_NOT_FOUND.to_string()),
        }
    }
}
