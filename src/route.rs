use crate::error::InsertError;
use crate::params::Params;
use crate::template::Template;

use regex::Regex;
use std::fmt;

/// A path template compiled into an anchored matcher.
#[derive(Clone, Debug)]
pub(crate) struct CompiledRoute {
    template: String,
    prefix: String,
    param: Option<String>,
    regex: Regex,
}

impl CompiledRoute {
    pub(crate) fn compile(template: &str) -> Result<CompiledRoute, InsertError> {
        let parsed = Template::parse(template)?;

        let mut pattern = format!("^{}", regex::escape(parsed.prefix));
        if let Some(param) = parsed.param {
            pattern.push('(');
            pattern.push_str(param.kind.class());
            pattern.push(')');
        }
        pattern.push('$');

        let regex = Regex::new(&pattern).map_err(|_| InsertError::InvalidTemplate {
            template: template.to_owned(),
            reason: "pattern failed to compile",
        })?;

        Ok(CompiledRoute {
            template: template.to_owned(),
            prefix: parsed.prefix.to_owned(),
            param: parsed.param.map(|p| p.name.to_owned()),
            regex,
        })
    }

    /// The template this route was compiled from.
    pub(crate) fn template(&self) -> &str {
        &self.template
    }

    pub(crate) fn param_name(&self) -> Option<&str> {
        self.param.as_deref()
    }

    /// Returns `true` if both routes accept exactly the same paths.
    ///
    /// Parameter names do not take part: `/x/<a>` and `/x/<b>` collide.
    pub(crate) fn same_matcher(&self, other: &CompiledRoute) -> bool {
        self.regex.as_str() == other.regex.as_str()
    }

    /// Tests `path` against the route, returning its bindings on a match.
    pub(crate) fn matches<'r, 'p>(&'r self, path: &'p str) -> Option<Params<'r, 'p>> {
        let captures = self.regex.captures(path)?;

        match (&self.param, captures.get(1)) {
            (Some(name), Some(value)) => Some(Params::one(name, value.as_str())),
            _ => Some(Params::new()),
        }
    }

    /// Builds a concrete path, substituting `value` for the placeholder.
    ///
    /// The value is not checked against the placeholder's character class.
    pub(crate) fn build(&self, value: Option<&dyn fmt::Display>) -> String {
        match (&self.param, value) {
            (Some(_), Some(value)) => format!("{}{}", self.prefix, value),
            _ => self.prefix.clone(),
        }
    }
}
