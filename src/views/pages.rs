//! Page bodies: index, contact detail, edit form, about, and the error boundary.

use super::{document, escape, sidebar_layout, url_encode, Sidebar};
use crate::model::{Contact, ContactMutation};
use axum::http::StatusCode;
use axum::response::Html;

pub fn index_page(sidebar: &Sidebar<'_>) -> Html<String> {
    let detail = "<p id=\"index-page\">This is a demo of a server-rendered contacts app.<br>\
Pick a contact on the left, or create a new one with <b>New</b>. \
See <a href=\"/about\">About</a> for more.</p>";
    Html(sidebar_layout("Contacts", sidebar, detail))
}

pub fn contact_page(sidebar: &Sidebar<'_>, contact: &Contact) -> Html<String> {
    let id = url_encode(&contact.id);
    let name = contact.display_name();
    let heading = match &name {
        Some(n) => escape(n),
        None => "<i>No Name</i>".to_string(),
    };
    let alt = format!("{} {} avatar", contact.first, contact.last);
    let (star, label, next) = if contact.favorite {
        ("★", "Remove from favorites", "false")
    } else {
        ("☆", "Add to favorites", "true")
    };
    let twitter = if contact.twitter.is_empty() {
        String::new()
    } else {
        format!(
            "<p><a href=\"https://twitter.com/{}\">{}</a></p>",
            url_encode(contact.twitter.trim_start_matches('@')),
            escape(&contact.twitter)
        )
    };
    let notes = if contact.notes.is_empty() {
        String::new()
    } else {
        format!("<p style=\"white-space:pre-wrap\">{}</p>", escape(&contact.notes))
    };
    let detail = format!(
        "<div id=\"contact\">\
<div><img alt=\"{alt}\" src=\"{avatar}\"></div>\
<div><h1><span>{heading}</span>\
<form class=\"favorite\" method=\"post\" action=\"/contacts/{id}\">\
<button type=\"submit\" name=\"favorite\" value=\"{next}\" aria-label=\"{label}\">{star}</button>\
</form></h1>\
{twitter}{notes}\
<div class=\"actions\">\
<form method=\"get\" action=\"/contacts/{id}/edit\"><button type=\"submit\">Edit</button></form>\
<form method=\"post\" action=\"/contacts/{id}/destroy\" \
onsubmit=\"return confirm('Please confirm you want to delete this record.');\">\
<button type=\"submit\" class=\"danger\">Delete</button></form>\
</div></div></div>",
        alt = escape(&alt),
        avatar = escape(&contact.avatar),
        heading = heading,
        id = id,
        next = next,
        label = label,
        star = star,
        twitter = twitter,
        notes = notes,
    );
    let title = name.unwrap_or_else(|| "No Name".to_string());
    Html(sidebar_layout(&title, sidebar, &detail))
}

/// Values shown in the edit form: the stored record, or a rejected submission plus its error.
#[derive(Clone, Debug, Default)]
pub struct EditForm {
    pub id: String,
    pub first: String,
    pub last: String,
    pub twitter: String,
    pub avatar: String,
    pub notes: String,
    pub error: Option<String>,
}

impl EditForm {
    pub fn from_contact(contact: &Contact) -> Self {
        EditForm {
            id: contact.id.clone(),
            first: contact.first.clone(),
            last: contact.last.clone(),
            twitter: contact.twitter.clone(),
            avatar: contact.avatar.clone(),
            notes: contact.notes.clone(),
            error: None,
        }
    }

    /// Stored values overlaid with what was submitted, for re-display after a rejected save.
    pub fn rejected(contact: &Contact, submitted: &ContactMutation, error: String) -> Self {
        let mut shown = contact.clone();
        shown.apply(submitted);
        EditForm {
            error: Some(error),
            ..Self::from_contact(&shown)
        }
    }
}

pub fn edit_page(sidebar: &Sidebar<'_>, form: &EditForm) -> Html<String> {
    let id = url_encode(&form.id);
    let error = form
        .error
        .as_deref()
        .map(|e| format!("<p class=\"error\" role=\"alert\">{}</p>", escape(e)))
        .unwrap_or_default();
    let detail = format!(
        "<form id=\"contact-form\" method=\"post\" action=\"/contacts/{id}/edit\">\
{error}\
<p><span>Name</span>\
<input aria-label=\"First name\" name=\"first\" placeholder=\"First\" type=\"text\" value=\"{first}\">\
<input aria-label=\"Last name\" name=\"last\" placeholder=\"Last\" type=\"text\" value=\"{last}\"></p>\
<label><span>Twitter</span>\
<input name=\"twitter\" placeholder=\"@jack\" type=\"text\" value=\"{twitter}\"></label>\
<label><span>Avatar URL</span>\
<input aria-label=\"Avatar URL\" name=\"avatar\" placeholder=\"https://example.com/avatar.jpg\" type=\"text\" value=\"{avatar}\"></label>\
<label><span>Notes</span><textarea name=\"notes\" rows=\"6\">{notes}</textarea></label>\
<p><button type=\"submit\">Save</button> <a class=\"button\" href=\"/contacts/{id}\">Cancel</a></p>\
</form>",
        id = id,
        error = error,
        first = escape(&form.first),
        last = escape(&form.last),
        twitter = escape(&form.twitter),
        avatar = escape(&form.avatar),
        notes = escape(&form.notes),
    );
    Html(sidebar_layout("Edit contact", sidebar, &detail))
}

pub fn about_page() -> Html<String> {
    let body = "<div id=\"about\" style=\"padding:2rem 4rem;max-width:48rem\">\
<a href=\"/\">← Go to demo</a>\
<h1>About Contacts</h1>\
<p>This is a demo application showing a small contacts book built from routed pages, \
data loaders, and form actions, rendered entirely on the server.</p>\
<h2>Features</h2>\
<p>Explore the demo to see:</p>\
<ul>\
<li>Data loading and mutations with loaders and actions</li>\
<li>Nested layout with a searchable sidebar</li>\
<li>URL-based routing with dynamic segments</li>\
<li>Post/redirect/get form handling</li>\
</ul>\
<h2>Learn More</h2>\
<p>The same records are available as JSON under <code>/api/v1/contacts</code>.</p>\
</div>";
    Html(document("About Contacts", body))
}

/// Error boundary page: "404" for missing pages, "Error" plus the status reason otherwise.
pub fn error_page(status: StatusCode) -> Html<String> {
    let (message, details) = if status == StatusCode::NOT_FOUND {
        ("404".to_string(), "The requested page could not be found.".to_string())
    } else {
        (
            "Error".to_string(),
            status
                .canonical_reason()
                .unwrap_or("An unexpected error occurred.")
                .to_string(),
        )
    };
    let body = format!(
        "<main class=\"error-page\"><h1>{}</h1><p>{}</p><p><a href=\"/\">Back to contacts</a></p></main>",
        escape(&message),
        escape(&details)
    );
    Html(document(&message, &body))
}
