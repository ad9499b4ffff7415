use super::*;
use crate::content::{Education, PROFILE, Project, Skill};

#[test]
fn escape_html_replaces_markup_characters() {
    assert_eq!(escape_html(r#"<a href="x">&'</a>"#), "&lt;a href=&quot;x&quot;&gt;&amp;&#39;&lt;/a&gt;");
    assert_eq!(escape_html("plain"), "plain");
}

#[test]
fn resume_contains_every_profile_section() {
    let html = resume_html(&PROFILE);
    assert!(html.contains("<h1"));
    assert!(html.contains("Deepesh Subedi"));
    assert!(html.contains("Aspiring Full Stack Developer"));
    assert!(html.contains("dpssubedi8@gmail.com"));
    assert!(html.contains("+977 9829132645"));
    assert!(html.contains("Pokhara, Nepal"));
    for heading in ["Education", "Skills", "Projects"] {
        assert!(html.contains(&format!(">{heading}</h4>")), "missing {heading}");
    }
    assert!(html.contains("ISMT University"));
    assert!(html.contains("<li>Python, C#</li>"));
    assert!(html.contains("<strong>Car Rental Management System</strong>"));
}

#[test]
fn resume_is_one_balanced_wrapper() {
    let html = resume_html(&PROFILE);
    assert!(html.starts_with("<div"));
    assert!(html.ends_with("</div>"));
    assert_eq!(html.matches("<div").count(), html.matches("</div>").count());
}

#[test]
fn resume_escapes_profile_text() {
    let profile = Profile {
        name: "<script>",
        headline: "A & B",
        tagline: "",
        email: "e",
        phone: "p",
        location: "l",
        site_url: "u",
        about: &[],
        education: &[Education { degree: "d", institution: "i", period: "p" }],
        skill_lines: &["<b>"],
        skills: &[Skill { name: "s", percent: 1 }],
        projects: &[Project { title: "t", summary: "s" }],
    };
    let html = resume_html(&profile);
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;"));
    assert!(html.contains("A &amp; B"));
    assert!(html.contains("<li>&lt;b&gt;</li>"));
}
