//! Demo contacts loaded into an empty store at startup.

use crate::model::Contact;
use chrono::{Duration, Utc};

const SEED: &[(&str, &str, &str)] = &[
    ("Shruti", "Kapoor", "@shrutikapoor08"),
    ("Glenn", "Reyes", "@glnnrys"),
    ("Ryan", "Florence", "@ryanflorence"),
    ("Oscar", "Newman", "@__oscarnewman"),
    ("Michael", "Jackson", "@mjackson"),
    ("Christopher", "Chedeau", "@Vjeux"),
    ("Cameron", "Matheson", "@cmatheson"),
    ("Brooks", "Lybrand", "@BrooksLybrand"),
    ("Alex", "Anderson", "@ralex1993"),
    ("Kent C.", "Dodds", "@kentcdodds"),
    ("Nevi", "Shah", "@nevikashah"),
    ("Andrew", "Petersen", "@aprpetersen"),
    ("Scott", "Smerchek", "@smerchek"),
    ("Giovanni", "Benussi", "@giovannibenussi"),
    ("Igor", "Minar", "@IgorMinar"),
    ("Brandon", "Kish", "@BrandonKish"),
];

/// Fresh demo records. Creation times are spaced one second apart in listing order.
pub fn seed_contacts() -> Vec<Contact> {
    let base = Utc::now() - Duration::seconds(SEED.len() as i64);
    SEED.iter()
        .enumerate()
        .map(|(i, (first, last, twitter))| {
            let mut contact = Contact::new_empty();
            contact.first = (*first).to_string();
            contact.last = (*last).to_string();
            contact.twitter = (*twitter).to_string();
            contact.avatar = format!("https://i.pravatar.cc/300?u={}", twitter.trim_start_matches('@'));
            contact.created_at = base + Duration::seconds(i as i64);
            contact
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::validate_mutation;
    use std::collections::HashSet;

    #[test]
    fn seed_ids_are_unique_and_fields_valid() {
        let contacts = seed_contacts();
        let ids: HashSet<&str> = contacts.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids.len(), contacts.len());
        for c in &contacts {
            let m = crate::model::ContactMutation {
                first: Some(c.first.clone()),
                last: Some(c.last.clone()),
                twitter: Some(c.twitter.clone()),
                avatar: Some(c.avatar.clone()),
                ..Default::default()
            };
            validate_mutation(&m).unwrap();
        }
    }
}
