//! Name search for the contact list.
//!
//! A query is ranked against each of a contact's `first` and `last` names. Anything that ranks at
//! least [`Rank::Fuzzy`] on either name matches. The ranking only filters; ordering of the final
//! list is [`sort_contacts`].

use crate::model::Contact;
use std::cmp::Ordering;

/// How well a query matches a single value, worst to best.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rank {
    NoMatch,
    /// Every query character appears in order.
    Fuzzy,
    /// Query equals the initials of the value's words.
    Acronym,
    Contains,
    WordStartsWith,
    StartsWith,
    Equal,
    CaseSensitiveEqual,
}

/// Rank `query` against `value`. An empty query ranks as [`Rank::Fuzzy`].
pub fn rank(value: &str, query: &str) -> Rank {
    if query.is_empty() {
        return Rank::Fuzzy;
    }
    if value == query {
        return Rank::CaseSensitiveEqual;
    }
    let value_lc = value.to_lowercase();
    let query_lc = query.to_lowercase();
    if query_lc.chars().count() > value_lc.chars().count() {
        return Rank::NoMatch;
    }
    if value_lc == query_lc {
        return Rank::Equal;
    }
    if value_lc.starts_with(&query_lc) {
        return Rank::StartsWith;
    }
    if value_lc.contains(&format!(" {}", query_lc)) {
        return Rank::WordStartsWith;
    }
    if value_lc.contains(&query_lc) {
        return Rank::Contains;
    }
    if query_lc.chars().count() == 1 {
        return Rank::NoMatch;
    }
    if acronym(&value_lc).contains(&query_lc) {
        return Rank::Acronym;
    }
    if is_subsequence(&query_lc, &value_lc) {
        return Rank::Fuzzy;
    }
    Rank::NoMatch
}

fn acronym(value: &str) -> String {
    value
        .split(|c: char| c.is_whitespace() || c == '-')
        .filter_map(|word| word.chars().next())
        .collect()
}

fn is_subsequence(needle: &str, haystack: &str) -> bool {
    let mut hay = haystack.chars();
    needle.chars().all(|n| hay.any(|h| h == n))
}

/// Best rank of `query` against the contact's first and last name.
pub fn contact_rank(contact: &Contact, query: &str) -> Rank {
    rank(&contact.first, query).max(rank(&contact.last, query))
}

/// Whether `contact` should be listed for `query`. Blank queries match everything.
pub fn matches(contact: &Contact, query: &str) -> bool {
    let query = query.trim();
    query.is_empty() || contact_rank(contact, query) >= Rank::Fuzzy
}

/// List order: last name (case-insensitive), then creation time.
pub fn compare_contacts(a: &Contact, b: &Contact) -> Ordering {
    a.last
        .to_lowercase()
        .cmp(&b.last.to_lowercase())
        .then_with(|| a.created_at.cmp(&b.created_at))
        .then_with(|| a.id.cmp(&b.id))
}

pub fn sort_contacts(contacts: &mut [Contact]) {
    contacts.sort_by(compare_contacts);
}

/// Filter by `query` (if any) and sort. Shared by every store implementation.
pub fn filter_and_sort(contacts: impl IntoIterator<Item = Contact>, query: Option<&str>) -> Vec<Contact> {
    let mut out: Vec<Contact> = match query {
        Some(q) => contacts.into_iter().filter(|c| matches(c, q)).collect(),
        None => contacts.into_iter().collect(),
    };
    sort_contacts(&mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn contact(first: &str, last: &str) -> Contact {
        let mut c = Contact::new_empty();
        c.first = first.into();
        c.last = last.into();
        c
    }

    #[test]
    fn ranks_in_expected_order() {
        assert_eq!(rank("Kent", "Kent"), Rank::CaseSensitiveEqual);
        assert_eq!(rank("Kent", "kent"), Rank::Equal);
        assert_eq!(rank("Kenneth", "ken"), Rank::StartsWith);
        assert_eq!(rank("Mary Ann", "ann"), Rank::WordStartsWith);
        assert_eq!(rank("Florence", "ren"), Rank::Contains);
        assert_eq!(rank("Kent C Dodds", "kcd"), Rank::Acronym);
        assert_eq!(rank("Lybrand", "lbd"), Rank::Fuzzy);
        assert_eq!(rank("Lybrand", "xyz"), Rank::NoMatch);
        assert_eq!(rank("Al", "Alex"), Rank::NoMatch);
    }

    #[test]
    fn single_character_needs_substring() {
        assert_eq!(rank("Ryan", "y"), Rank::Contains);
        assert_eq!(rank("Ryan", "z"), Rank::NoMatch);
    }

    #[test]
    fn matches_either_name() {
        let c = contact("Ryan", "Florence");
        assert!(matches(&c, "ryan"));
        assert!(matches(&c, "flo"));
        assert!(matches(&c, "  "));
        assert!(!matches(&c, "dodds"));
    }

    #[test]
    fn sorts_by_last_then_created_at() {
        let mut a = contact("A", "smith");
        let mut b = contact("B", "Smith");
        let c = contact("C", "Jones");
        let now = Utc::now();
        a.created_at = now;
        b.created_at = now - Duration::seconds(10);
        let sorted = filter_and_sort(vec![a, b, c], None);
        let firsts: Vec<&str> = sorted.iter().map(|c| c.first.as_str()).collect();
        assert_eq!(firsts, vec!["C", "B", "A"]);
    }

    #[test]
    fn filter_then_sort() {
        let list = vec![
            contact("Shruti", "Kapoor"),
            contact("Glenn", "Reyes"),
            contact("Ryan", "Florence"),
        ];
        let out = filter_and_sort(list, Some("r"));
        let lasts: Vec<&str> = out.iter().map(|c| c.last.as_str()).collect();
        assert_eq!(lasts, vec!["Florence", "Kapoor", "Reyes"]);
        let out = filter_and_sort(out, Some("glenn"));
        assert_eq!(out.len(), 1);
    }
}
