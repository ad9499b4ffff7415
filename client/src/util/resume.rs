//! Print-formatted resume markup.
//!
//! The fragment is self-contained (inline styles only) because it is written
//! into a fresh browsing context that has none of the page's stylesheets.

#[cfg(test)]
#[path = "resume_test.rs"]
mod resume_test;

use crate::content::Profile;
use crate::util::dom;

const ACCENT: &str = "#7c3aed";
const MUTED: &str = "#666";

/// Escape text for inclusion in HTML element content or attribute values.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn section_heading(title: &str) -> String {
    format!(
        r#"<h4 style="color: {ACCENT}; border-bottom: 2px solid {ACCENT}; padding-bottom: 5px;">{}</h4>"#,
        escape_html(title)
    )
}

/// Open the resume for `profile` in a new window and print it.
///
/// Shared by `Action::PrintResume` and the exported `printResume()`.
pub fn print(profile: &Profile) {
    dom::print_html(&resume_html(profile));
}

/// Build the resume fragment for `profile`.
#[must_use]
pub fn resume_html(profile: &Profile) -> String {
    let mut html = String::new();
    html.push_str(r#"<div style="padding: 40px; font-family: Arial, sans-serif; max-width: 800px; margin: 0 auto;">"#);
    html.push_str(&format!(
        r#"<h1 style="color: {ACCENT}; margin-bottom: 10px;">{}</h1><h3 style="color: {MUTED}; margin-bottom: 30px;">{}</h3>"#,
        escape_html(profile.name),
        escape_html(profile.headline),
    ));
    html.push_str(&format!(
        r#"<div style="margin-bottom: 20px;"><p><strong>Email:</strong> {}</p><p><strong>Phone:</strong> {}</p><p><strong>Location:</strong> {}</p></div>"#,
        escape_html(profile.email),
        escape_html(profile.phone),
        escape_html(profile.location),
    ));

    html.push_str(&section_heading("Education"));
    for entry in profile.education {
        html.push_str(&format!(
            "<p><strong>{}</strong><br>{}<br>{}</p>",
            escape_html(entry.degree),
            escape_html(entry.institution),
            escape_html(entry.period),
        ));
    }

    html.push_str(&section_heading("Skills"));
    html.push_str("<ul>");
    for line in profile.skill_lines {
        html.push_str(&format!("<li>{}</li>", escape_html(line)));
    }
    html.push_str("</ul>");

    html.push_str(&section_heading("Projects"));
    for project in profile.projects {
        html.push_str(&format!(
            "<p><strong>{}</strong> - {}</p>",
            escape_html(project.title),
            escape_html(project.summary),
        ));
    }

    html.push_str(&format!(
        r#"<div style="margin-top: 40px; text-align: center; color: {MUTED}; font-size: 12px;"><p>Generated from {}'s Portfolio - {}</p></div>"#,
        escape_html(profile.name),
        escape_html(profile.site_url),
    ));
    html.push_str("</div>");
    html
}
