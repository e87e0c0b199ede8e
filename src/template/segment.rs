use smallvec::SmallVec;

use super::scan_template;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplatePart {
    Literal(Box<str>),
    Param { name: Box<str> },
}

pub type TemplateParts = SmallVec<[TemplatePart; 4]>;

/// A `:name` path template together with its scanned parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathTemplate {
    raw: Box<str>,
    parts: TemplateParts,
}

impl PathTemplate {
    pub fn parse(raw: &str) -> Self {
        Self {
            raw: raw.into(),
            parts: scan_template(raw),
        }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn parts(&self) -> &[TemplatePart] {
        &self.parts
    }

    /// A template is parametric as soon as it contains a `:`.
    pub fn is_parametric(&self) -> bool {
        self.parts
            .iter()
            .any(|part| matches!(part, TemplatePart::Param { .. }))
    }

    /// Declared parameter names in template order, repeated names collapsed.
    pub fn param_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::with_capacity(self.parts.len());
        for part in &self.parts {
            if let TemplatePart::Param { name } = part
                && !names.contains(&&**name)
            {
                names.push(name);
            }
        }
        names
    }
}
