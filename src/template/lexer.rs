use hashbrown::HashSet;
use memchr::memchr;

use super::{PathTemplate, TemplateError, TemplatePart, TemplateParts, TemplateResult};

/// Splits a template into literal text and `:name` parameters.
///
/// A parameter name runs from the byte after `:` up to the next `/` or the
/// end of the template. No validation happens here; see [`validate_template`].
#[tracing::instrument(level = "trace", fields(template_len = template.len() as u64))]
pub fn scan_template(template: &str) -> TemplateParts {
    let bytes = template.as_bytes();
    let mut parts = TemplateParts::new();
    let mut cursor = 0usize;

    while let Some(rel) = memchr(b':', &bytes[cursor..]) {
        let colon = cursor + rel;

        if colon > cursor {
            parts.push(TemplatePart::Literal(template[cursor..colon].into()));
        }

        let name_start = colon + 1;
        let name_end = memchr(b'/', &bytes[name_start..])
            .map_or(bytes.len(), |pos| name_start + pos);

        parts.push(TemplatePart::Param {
            name: template[name_start..name_end].into(),
        });

        cursor = name_end;
    }

    if cursor < bytes.len() {
        parts.push(TemplatePart::Literal(template[cursor..].into()));
    }

    parts
}

#[tracing::instrument(level = "trace", skip(template), fields(template = %template.raw()))]
pub fn validate_template(template: &PathTemplate, allow_duplicates: bool) -> TemplateResult<()> {
    let raw = template.raw();
    let mut seen: HashSet<&str> = HashSet::new();

    for part in template.parts() {
        let TemplatePart::Param { name } = part else {
            continue;
        };

        let Some(first) = name.chars().next() else {
            return Err(TemplateError::EmptyParameterName {
                template: raw.to_string(),
            });
        };

        if !(first.is_ascii_alphabetic() || first == '_') {
            return Err(TemplateError::ParameterInvalidStart {
                template: raw.to_string(),
                name: name.to_string(),
                found: first,
            });
        }

        if let Some(invalid) = name
            .chars()
            .skip(1)
            .find(|c| !(c.is_ascii_alphanumeric() || *c == '_'))
        {
            return Err(TemplateError::ParameterInvalidCharacter {
                template: raw.to_string(),
                name: name.to_string(),
                invalid,
            });
        }

        if !seen.insert(name) && !allow_duplicates {
            return Err(TemplateError::DuplicateParameterName {
                template: raw.to_string(),
                name: name.to_string(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn literal(text: &str) -> TemplatePart {
        TemplatePart::Literal(text.into())
    }

    fn param(name: &str) -> TemplatePart {
        TemplatePart::Param { name: name.into() }
    }

    #[test]
    fn static_template_is_single_literal() {
        let parts = scan_template("/users/list");
        assert_eq!(parts.as_slice(), &[literal("/users/list")]);
    }

    #[test]
    fn empty_template_has_no_parts() {
        assert!(scan_template("").is_empty());
    }

    #[test]
    fn splits_parameters_between_literals() {
        let parts = scan_template("/users/:userId/posts/:postId");
        assert_eq!(
            parts.as_slice(),
            &[
                literal("/users/"),
                param("userId"),
                literal("/posts/"),
                param("postId"),
            ]
        );
    }

    #[test]
    fn trailing_slash_after_parameter_is_literal() {
        let parts = scan_template("/users/:id/");
        assert_eq!(
            parts.as_slice(),
            &[literal("/users/"), param("id"), literal("/")]
        );
    }

    #[test]
    fn name_extends_to_next_slash() {
        let parts = scan_template("/files/:name.json/raw");
        assert_eq!(
            parts.as_slice(),
            &[literal("/files/"), param("name.json"), literal("/raw")]
        );
    }

    #[test]
    fn parameter_inside_segment_keeps_prefix_literal() {
        let parts = scan_template("/v:version");
        assert_eq!(parts.as_slice(), &[literal("/v"), param("version")]);
    }

    #[test]
    fn bare_colon_yields_empty_name() {
        let parts = scan_template("/users/:");
        assert_eq!(parts.as_slice(), &[literal("/users/"), param("")]);
    }

    #[test]
    fn validation_accepts_underscored_names() {
        let template = PathTemplate::parse("/:_id/:post_2");
        assert_eq!(validate_template(&template, false), Ok(()));
    }

    #[test]
    fn validation_rejects_empty_name() {
        let template = PathTemplate::parse("/users/:/edit");
        let err = validate_template(&template, true).unwrap_err();
        assert_eq!(
            err,
            TemplateError::EmptyParameterName {
                template: "/users/:/edit".to_string()
            }
        );
    }

    #[test]
    fn validation_rejects_leading_digit() {
        let template = PathTemplate::parse("/:1id");
        match validate_template(&template, true).unwrap_err() {
            TemplateError::ParameterInvalidStart { name, found, .. } => {
                assert_eq!(name, "1id");
                assert_eq!(found, '1');
            }
            other => panic!("expected ParameterInvalidStart, got {other:?}"),
        }
    }

    #[test]
    fn validation_rejects_nested_colon() {
        let template = PathTemplate::parse("/:a:b");
        match validate_template(&template, true).unwrap_err() {
            TemplateError::ParameterInvalidCharacter { invalid, .. } => assert_eq!(invalid, ':'),
            other => panic!("expected ParameterInvalidCharacter, got {other:?}"),
        }
    }

    #[test]
    fn duplicates_only_rejected_when_disallowed() {
        let template = PathTemplate::parse("/:id/copy/:id");
        assert_eq!(validate_template(&template, true), Ok(()));

        match validate_template(&template, false).unwrap_err() {
            TemplateError::DuplicateParameterName { name, .. } => assert_eq!(name, "id"),
            other => panic!("expected DuplicateParameterName, got {other:?}"),
        }
    }

    #[test]
    fn param_names_collapse_repeats() {
        let template = PathTemplate::parse("/:id/copy/:id/:rev");
        assert_eq!(template.param_names(), vec!["id", "rev"]);
        assert!(template.is_parametric());
    }
}
