//! Contact record and partial updates.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: String,
    pub first: String,
    pub last: String,
    pub twitter: String,
    pub avatar: String,
    pub notes: String,
    pub favorite: bool,
    pub created_at: DateTime<Utc>,
}

impl Contact {
    /// Empty contact with a freshly allocated id.
    pub fn new_empty() -> Self {
        Contact {
            id: uuid::Uuid::new_v4().to_string(),
            first: String::new(),
            last: String::new(),
            twitter: String::new(),
            avatar: String::new(),
            notes: String::new(),
            favorite: false,
            created_at: Utc::now(),
        }
    }

    /// "First Last", or None when both parts are empty.
    pub fn display_name(&self) -> Option<String> {
        match (self.first.is_empty(), self.last.is_empty()) {
            (true, true) => None,
            (false, true) => Some(self.first.clone()),
            (true, false) => Some(self.last.clone()),
            (false, false) => Some(format!("{} {}", self.first, self.last)),
        }
    }

    /// Apply every field present in `mutation`; absent fields are untouched.
    pub fn apply(&mut self, mutation: &ContactMutation) {
        if let Some(v) = &mutation.first {
            self.first = v.clone();
        }
        if let Some(v) = &mutation.last {
            self.last = v.clone();
        }
        if let Some(v) = &mutation.twitter {
            self.twitter = v.clone();
        }
        if let Some(v) = &mutation.avatar {
            self.avatar = v.clone();
        }
        if let Some(v) = &mutation.notes {
            self.notes = v.clone();
        }
        if let Some(v) = mutation.favorite {
            self.favorite = v;
        }
    }
}

/// Partial update. Also used as the body of the edit form and of the JSON create/patch routes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ContactMutation {
    #[serde(default)]
    pub first: Option<String>,
    #[serde(default)]
    pub last: Option<String>,
    #[serde(default)]
    pub twitter: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub favorite: Option<bool>,
}

impl ContactMutation {
    pub fn favorite(favorite: bool) -> Self {
        ContactMutation {
            favorite: Some(favorite),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self == &ContactMutation::default()
    }

    /// Trim surrounding whitespace from every text field.
    pub fn normalized(mut self) -> Self {
        for field in [
            &mut self.first,
            &mut self.last,
            &mut self.twitter,
            &mut self.avatar,
            &mut self.notes,
        ] {
            if let Some(v) = field.as_mut() {
                let trimmed = v.trim();
                if trimmed.len() != v.len() {
                    *v = trimmed.to_string();
                }
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_empty_has_defaults() {
        let c = Contact::new_empty();
        assert!(!c.id.is_empty());
        assert_eq!(c.first, "");
        assert_eq!(c.notes, "");
        assert!(!c.favorite);
        assert_eq!(c.display_name(), None);
    }

    #[test]
    fn apply_only_touches_present_fields() {
        let mut c = Contact::new_empty();
        c.first = "Ada".into();
        c.last = "Lovelace".into();
        c.apply(&ContactMutation {
            last: Some("Byron".into()),
            favorite: Some(true),
            ..Default::default()
        });
        assert_eq!(c.first, "Ada");
        assert_eq!(c.last, "Byron");
        assert!(c.favorite);
        assert_eq!(c.display_name().as_deref(), Some("Ada Byron"));
    }

    #[test]
    fn normalized_trims_text_fields() {
        let m = ContactMutation {
            first: Some("  Ada ".into()),
            notes: Some("\nline one\nline two\n".into()),
            ..Default::default()
        }
        .normalized();
        assert_eq!(m.first.as_deref(), Some("Ada"));
        assert_eq!(m.notes.as_deref(), Some("line one\nline two"));
    }

    #[test]
    fn serializes_camel_case() {
        let c = Contact::new_empty();
        let v = serde_json::to_value(&c).unwrap();
        assert!(v.get("createdAt").is_some());
        assert!(v.get("created_at").is_none());
    }

    #[test]
    fn mutation_rejects_unknown_fields() {
        let err = serde_json::from_str::<ContactMutation>(r#"{"nickname":"x"}"#);
        assert!(err.is_err());
        let ok: ContactMutation = serde_json::from_str(r#"{"favorite":true}"#).unwrap();
        assert_eq!(ok, ContactMutation::favorite(true));
    }
}
