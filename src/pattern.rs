use crate::router::RouterError;

use std::collections::HashMap;

use regex::Regex;

/// Placeholder dictionary: `:token` -> regex fragment.
///
/// Seeded with `:any` (one path segment), `:num` (digits) and `:all`
/// (the rest of the path). Fragments are wrapped in a capture group when
/// a template is compiled, so custom fragments should not contain capture
/// groups of their own.
#[derive(Debug, Clone)]
pub struct Patterns {
    map: HashMap<Box<str>, Box<str>>,
}

impl Default for Patterns {
    fn default() -> Self {
        let mut map = HashMap::new();
        map.insert("any".into(), "[^/]+".into());
        map.insert("num".into(), "[0-9]+".into());
        map.insert("all".into(), ".*".into());
        Self { map }
    }
}

impl Patterns {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defines (or redefines) a token. `token` must be a `:name` with a
    /// non-empty `[A-Za-z0-9_]` name. Affects routes registered afterwards.
    pub fn define(&mut self, token: &str, fragment: &str) -> Result<(), RouterError> {
        let name = match token.strip_prefix(':') {
            Some(n) => n,
            None => return Err(RouterError::BadToken { token: token.into() }),
        };
        if name.is_empty() || !name.chars().all(is_ident) {
            return Err(RouterError::BadToken { token: token.into() });
        }
        self.map.insert(name.into(), fragment.into());
        Ok(())
    }

    fn fragment(&self, name: &str) -> Option<&str> {
        self.map.get(name).map(|f| &**f)
    }
}

/// Compiles a path template into an anchored regex, one capture group per
/// token. Returns `Ok(None)` for templates without tokens (literal routes).
///
/// Single pass: literal runs are escaped, so tokens can not collide with
/// literal text. A `:` not followed by an identifier is literal; a `:name`
/// not present in the dictionary is a registration error.
pub(crate) fn compile(template: &str, patterns: &Patterns) -> Result<Option<Regex>, RouterError> {
    let mut out = String::with_capacity(template.len() + 16);
    out.push('^');

    let mut found = false;
    let mut rest = template;

    while let Some(pos) = rest.find(':') {
        out.push_str(&regex::escape(&rest[..pos]));
        let after = &rest[pos + 1..];
        let end = after.find(|c: char| !is_ident(c)).unwrap_or(after.len());
        if end == 0 {
            out.push_str("\\:");
            rest = after;
            continue;
        }
        let name = &after[..end];
        match patterns.fragment(name) {
            Some(frag) => {
                found = true;
                out.push('(');
                out.push_str(frag);
                out.push(')');
            }
            None => {
                return Err(RouterError::UnknownToken {
                    token: name.into(),
                    pattern: template.into(),
                });
            }
        }
        rest = &after[end..];
    }
    out.push_str(&regex::escape(rest));
    out.push('$');

    if !found {
        return Ok(None);
    }

    match Regex::new(&out) {
        Ok(r) => Ok(Some(r)),
        Err(source) => Err(RouterError::BadPattern {
            pattern: template.into(),
            source,
        }),
    }
}

fn is_ident(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
