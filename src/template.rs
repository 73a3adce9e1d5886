//! Parsing of path templates.
//!
//! A template is one or more `/segment` groups made of word characters
//! (`[A-Za-z0-9_]`, possibly empty), optionally followed by a single
//! trailing placeholder:
//!
//! ```text
//!  /author/<username>     word placeholder, matches [A-Za-z0-9_]+
//!  /post/<int:id>         int placeholder, matches [0-9]+
//!  /about                 no placeholder, matches the literal path only
//! ```
use crate::error::InsertError;

/// The character class captured by a placeholder.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ParamKind {
    /// `<name>`: one or more word characters.
    Word,
    /// `<int:name>`: one or more decimal digits.
    Int,
}

impl ParamKind {
    fn from_tag(tag: &str) -> Option<ParamKind> {
        match tag {
            "int" => Some(ParamKind::Int),
            _ => None,
        }
    }

    /// The regex fragment that matches one capture of this kind.
    pub(crate) fn class(self) -> &'static str {
        match self {
            ParamKind::Word => "[A-Za-z0-9_]+",
            ParamKind::Int => "[0-9]+",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Placeholder<'t> {
    pub(crate) name: &'t str,
    pub(crate) kind: ParamKind,
}

/// A parsed, but not yet compiled, path template.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Template<'t> {
    /// Everything before the placeholder, or the whole template.
    pub(crate) prefix: &'t str,
    pub(crate) param: Option<Placeholder<'t>>,
}

fn is_word(c: u8) -> bool {
    c.is_ascii_alphanumeric() || c == b'_'
}

fn invalid(template: &str, reason: &'static str) -> InsertError {
    InsertError::InvalidTemplate {
        template: template.to_owned(),
        reason,
    }
}

impl<'t> Template<'t> {
    pub(crate) fn parse(template: &'t str) -> Result<Template<'t>, InsertError> {
        let bytes = template.as_bytes();

        if bytes.first() != Some(&b'/') {
            return Err(invalid(template, "templates must begin with '/'"));
        }

        // the literal prefix runs up to the first non-word, non-slash byte
        let end = bytes
            .iter()
            .position(|&c| c != b'/' && !is_word(c))
            .unwrap_or(bytes.len());

        let prefix = &template[..end];
        let rest = &template[end..];

        if rest.is_empty() {
            return Ok(Template {
                prefix,
                param: None,
            });
        }

        if !rest.starts_with('<') {
            return Err(invalid(
                template,
                "literal segments may only contain word characters",
            ));
        }

        let close = match rest.find('>') {
            Some(close) => close,
            None => return Err(invalid(template, "unterminated parameter placeholder")),
        };

        if close + 1 != rest.len() {
            let trailing = &rest[close + 1..];
            return Err(if trailing.contains('<') {
                invalid(template, "only one parameter placeholder is allowed")
            } else if trailing.starts_with('/') {
                invalid(template, "parameter placeholders must be the final segment")
            } else {
                invalid(template, "unexpected characters after parameter placeholder")
            });
        }

        let inner = &rest[1..close];
        let (tag, name) = match inner.split_once(':') {
            Some((tag, name)) => (Some(tag), name),
            None => (None, inner),
        };

        if name.is_empty() || !name.bytes().all(is_word) {
            return Err(invalid(
                template,
                "parameter names must be one or more word characters",
            ));
        }

        let kind = match tag {
            None => ParamKind::Word,
            Some(tag) => match ParamKind::from_tag(tag) {
                Some(kind) => kind,
                None => return Err(invalid(template, "unsupported parameter type")),
            },
        };

        Ok(Template {
            prefix,
            param: Some(Placeholder { name, kind }),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reason(template: &str) -> &'static str {
        match Template::parse(template) {
            Err(InsertError::InvalidTemplate { reason, .. }) => reason,
            other => panic!("expected '{}' to be rejected, got {:?}", template, other),
        }
    }

    #[test]
    fn literal() {
        let parsed = Template::parse("/about/team").unwrap();
        assert_eq!(parsed.prefix, "/about/team");
        assert_eq!(parsed.param, None);

        assert_eq!(Template::parse("/").unwrap().prefix, "/");
        assert_eq!(Template::parse("//x_1").unwrap().prefix, "//x_1");
    }

    #[test]
    fn placeholders() {
        let parsed = Template::parse("/author/<username>").unwrap();
        assert_eq!(parsed.prefix, "/author/");
        assert_eq!(
            parsed.param,
            Some(Placeholder {
                name: "username",
                kind: ParamKind::Word
            })
        );

        let parsed = Template::parse("/post/<int:id>").unwrap();
        assert_eq!(parsed.prefix, "/post/");
        assert_eq!(
            parsed.param,
            Some(Placeholder {
                name: "id",
                kind: ParamKind::Int
            })
        );

        // a placeholder may share a segment with its literal prefix
        let parsed = Template::parse("/user<id>").unwrap();
        assert_eq!(parsed.prefix, "/user");
    }

    #[test]
    fn rejected() {
        assert_eq!(reason(""), "templates must begin with '/'");
        assert_eq!(reason("hello"), "templates must begin with '/'");
        assert_eq!(reason("<name>"), "templates must begin with '/'");
        assert_eq!(
            reason("/hello-world"),
            "literal segments may only contain word characters"
        );
        assert_eq!(reason("/x/<name"), "unterminated parameter placeholder");
        assert_eq!(
            reason("/x/<a>/<b>"),
            "only one parameter placeholder is allowed"
        );
        assert_eq!(
            reason("/x/<a><b>"),
            "only one parameter placeholder is allowed"
        );
        assert_eq!(
            reason("/x/<a>/edit"),
            "parameter placeholders must be the final segment"
        );
        assert_eq!(
            reason("/x/<>"),
            "parameter names must be one or more word characters"
        );
        assert_eq!(
            reason("/x/<int:>"),
            "parameter names must be one or more word characters"
        );
        assert_eq!(
            reason("/x/<a-b>"),
            "parameter names must be one or more word characters"
        );
        assert_eq!(
            reason("/x/<a>>"),
            "unexpected characters after parameter placeholder"
        );
        assert_eq!(
            reason("/x/<a>b"),
            "unexpected characters after parameter placeholder"
        );
        assert_eq!(reason("/x/<float:f>"), "unsupported parameter type");
        assert_eq!(reason("/x/<:f>"), "unsupported parameter type");
    }
}
