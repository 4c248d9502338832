//! Document shell and the sidebar layout shared by the contact pages.

use super::{escape, url_encode};
use crate::model::Contact;

const STYLES: &str = r#"
*{box-sizing:border-box}
body{margin:0;font-family:system-ui,-apple-system,"Segoe UI",Roboto,sans-serif;color:#121212;display:flex;min-height:100vh}
a{color:#3992ff}
button,input,textarea{font:inherit}
button,.button{font-size:1rem;font-weight:500;padding:.5rem .75rem;border:0;border-radius:.5rem;background:#fff;color:#3992ff;box-shadow:0 0 0 1px #e5e7eb;cursor:pointer}
button.danger{color:#f44250}
input,textarea{padding:.5rem .75rem;border:0;border-radius:.5rem;box-shadow:0 0 0 1px #e5e7eb;width:100%}
#sidebar{width:22rem;background:#f7f7f7;border-right:1px solid #e3e3e3;display:flex;flex-direction:column}
#sidebar>div{display:flex;gap:.5rem;padding:1rem 2rem;border-bottom:1px solid #e3e3e3}
#sidebar nav{flex:1;overflow:auto;padding:1rem 2rem}
#sidebar ul{list-style:none;margin:0;padding:0}
#sidebar li a{display:flex;justify-content:space-between;padding:.5rem;border-radius:.5rem;color:inherit;text-decoration:none}
#sidebar li a.active{background:#3992ff;color:#fff}
#sidebar h1{font-size:1rem;margin:0;padding:1rem 2rem;border-top:1px solid #e3e3e3}
#detail{flex:1;padding:2rem 4rem}
#contact{display:flex;max-width:40rem;gap:2rem}
#contact img{width:12rem;height:12rem;background:#c8c8c8;border-radius:1.5rem;object-fit:cover}
#contact h1{display:flex;gap:1rem;align-items:flex-start;margin:0}
#contact .actions{display:flex;gap:.5rem;margin-top:1rem}
.favorite button{box-shadow:none;background:none;font-size:1.5rem;padding:0;color:#a4a4a4}
.favorite button[value="false"]{color:#eeb004}
#contact-form{display:flex;flex-direction:column;gap:1rem;max-width:40rem}
#contact-form label{display:flex;gap:1rem}
#contact-form label span{width:8rem}
#contact-form .error{color:#f44250}
.error-page{flex:1;display:flex;flex-direction:column;align-items:center;justify-content:center}
"#;

/// Full HTML document around `body`.
pub fn document(title: &str, body: &str) -> String {
    format!(
        "<!doctype html><html lang=\"en\"><head><meta charset=\"utf-8\">\
<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\
<title>{}</title><style>{}</style></head><body>{}</body></html>",
        escape(title),
        STYLES,
        body
    )
}

/// Data the sidebar needs: the (already filtered) list, the active search, the selected contact.
pub struct Sidebar<'a> {
    pub contacts: &'a [Contact],
    pub query: Option<&'a str>,
    pub active_id: Option<&'a str>,
}

impl Sidebar<'_> {
    fn render(&self) -> String {
        let query = self.query.unwrap_or("");
        let items = if self.contacts.is_empty() {
            "<p><i>No contacts</i></p>".to_string()
        } else {
            let mut list = String::from("<ul>");
            for c in self.contacts {
                let name = match c.display_name() {
                    Some(n) => escape(&n),
                    None => "<i>No Name</i>".to_string(),
                };
                let star = if c.favorite { "<span>★</span>" } else { "" };
                let class = if self.active_id == Some(c.id.as_str()) {
                    " class=\"active\""
                } else {
                    ""
                };
                list.push_str(&format!(
                    "<li><a href=\"/contacts/{}\"{}>{}{}</a></li>",
                    url_encode(&c.id),
                    class,
                    name,
                    star
                ));
            }
            list.push_str("</ul>");
            list
        };
        format!(
            "<div id=\"sidebar\">\
<div><form id=\"search-form\" role=\"search\" method=\"get\" action=\"/\">\
<input id=\"q\" aria-label=\"Search contacts\" placeholder=\"Search\" type=\"search\" name=\"q\" value=\"{}\">\
</form>\
<form method=\"post\" action=\"/\"><button type=\"submit\">New</button></form></div>\
<nav>{}</nav>\
<h1><a href=\"/about\">Contacts</a></h1>\
</div>",
            escape(query),
            items
        )
    }
}

/// Sidebar plus `detail` as a full document.
pub fn sidebar_layout(title: &str, sidebar: &Sidebar<'_>, detail: &str) -> String {
    let body = format!("{}<div id=\"detail\">{}</div>", sidebar.render(), detail);
    document(title, &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sidebar_marks_active_and_favorites() {
        let mut a = Contact::new_empty();
        a.first = "Ada".into();
        a.favorite = true;
        let b = Contact::new_empty();
        let contacts = vec![a.clone(), b];
        let html = sidebar_layout(
            "t",
            &Sidebar {
                contacts: &contacts,
                query: Some("a\"d"),
                active_id: Some(a.id.as_str()),
            },
            "<p>detail</p>",
        );
        assert!(html.contains(&format!("<a href=\"/contacts/{}\" class=\"active\">Ada<span>★</span></a>", a.id)));
        assert!(html.contains("<i>No Name</i>"));
        assert!(html.contains("value=\"a&quot;d\""));
        assert!(html.contains("<div id=\"detail\"><p>detail</p></div>"));
    }

    #[test]
    fn empty_sidebar() {
        let html = sidebar_layout(
            "t",
            &Sidebar {
                contacts: &[],
                query: None,
                active_id: None,
            },
            "",
        );
        assert!(html.contains("<i>No contacts</i>"));
    }
}
