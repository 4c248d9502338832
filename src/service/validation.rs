//! Field validation for contact mutations.

use crate::error::AppError;
use crate::model::ContactMutation;
use regex::Regex;

/// Constraints on one text field. Empty values always pass: every field may be cleared.
#[derive(Clone, Debug, Default)]
pub struct FieldRule {
    pub max_length: Option<usize>,
    pub pattern: Option<&'static str>,
    pub format: Option<FieldFormat>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldFormat {
    /// Absolute http(s) URL.
    HttpUrl,
}

const NAME_RULE: FieldRule = FieldRule {
    max_length: Some(100),
    pattern: None,
    format: None,
};

const TWITTER_RULE: FieldRule = FieldRule {
    max_length: Some(16),
    pattern: Some(r"^@?[A-Za-z0-9_]{1,15}$"),
    format: None,
};

const AVATAR_RULE: FieldRule = FieldRule {
    max_length: Some(2048),
    pattern: None,
    format: Some(FieldFormat::HttpUrl),
};

const NOTES_RULE: FieldRule = FieldRule {
    max_length: Some(5000),
    pattern: None,
    format: None,
};

/// Validate only the fields present in the mutation.
pub fn validate_mutation(mutation: &ContactMutation) -> Result<(), AppError> {
    let fields = [
        ("first", &mutation.first, &NAME_RULE),
        ("last", &mutation.last, &NAME_RULE),
        ("twitter", &mutation.twitter, &TWITTER_RULE),
        ("avatar", &mutation.avatar, &AVATAR_RULE),
        ("notes", &mutation.notes, &NOTES_RULE),
    ];
    for (name, value, rule) in fields {
        if let Some(v) = value {
            validate_field(name, v, rule)?;
        }
    }
    Ok(())
}

pub fn validate_field(name: &str, value: &str, rule: &FieldRule) -> Result<(), AppError> {
    if value.is_empty() {
        return Ok(());
    }
    if let Some(max) = rule.max_length {
        if value.chars().count() > max {
            return Err(AppError::Validation(format!(
                "{} must be at most {} characters",
                name, max
            )));
        }
    }
    if let Some(pattern) = rule.pattern {
        let re = Regex::new(pattern)
            .map_err(|_| AppError::Validation(format!("invalid pattern for {}", name)))?;
        if !re.is_match(value) {
            return Err(AppError::Validation(format!("{} is not valid", name)));
        }
    }
    if let Some(FieldFormat::HttpUrl) = rule.format {
        let rest = value
            .strip_prefix("https://")
            .or_else(|| value.strip_prefix("http://"));
        let host_ok = rest
            .map(|r| {
                let host = r.split(['/', '?', '#']).next().unwrap_or("");
                !host.is_empty()
            })
            .unwrap_or(false);
        if !host_ok || value.chars().any(char::is_whitespace) {
            return Err(AppError::Validation(format!(
                "{} must be an http or https URL",
                name
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m() -> ContactMutation {
        ContactMutation::default()
    }

    #[test]
    fn empty_mutation_is_valid() {
        validate_mutation(&m()).unwrap();
    }

    #[test]
    fn empty_values_clear_fields() {
        let mutation = ContactMutation {
            twitter: Some(String::new()),
            avatar: Some(String::new()),
            ..m()
        };
        validate_mutation(&mutation).unwrap();
    }

    #[test]
    fn twitter_handles() {
        for ok in ["@jack", "jack", "@a_b_1", "@abcdefghijklmno"] {
            validate_mutation(&ContactMutation {
                twitter: Some(ok.into()),
                ..m()
            })
            .unwrap_or_else(|e| panic!("{ok}: {e}"));
        }
        for bad in ["@", "@with space", "@abcdefghijklmnop", "@dash-ed"] {
            let err = validate_mutation(&ContactMutation {
                twitter: Some(bad.into()),
                ..m()
            });
            assert!(matches!(err, Err(AppError::Validation(_))), "{bad}");
        }
    }

    #[test]
    fn avatar_must_be_http_url() {
        validate_mutation(&ContactMutation {
            avatar: Some("https://example.com/a.jpg".into()),
            ..m()
        })
        .unwrap();
        for bad in ["example.com/a.jpg", "ftp://example.com/a", "https://", "https://x.com/a b"] {
            let err = validate_mutation(&ContactMutation {
                avatar: Some(bad.into()),
                ..m()
            });
            assert!(matches!(err, Err(AppError::Validation(_))), "{bad}");
        }
    }

    #[test]
    fn length_limits() {
        let err = validate_mutation(&ContactMutation {
            first: Some("x".repeat(101)),
            ..m()
        })
        .unwrap_err();
        assert_eq!(err.to_string(), "validation: first must be at most 100 characters");
        validate_mutation(&ContactMutation {
            notes: Some("é".repeat(5000)),
            ..m()
        })
        .unwrap();
    }
}
