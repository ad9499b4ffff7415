//! Static portfolio content shared by the page view and the print resume.

pub struct Profile {
    pub name: &'static str,
    pub headline: &'static str,
    pub tagline: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub location: &'static str,
    pub site_url: &'static str,
    pub about: &'static [&'static str],
    pub education: &'static [Education],
    /// Grouped skill lines for the printed resume.
    pub skill_lines: &'static [&'static str],
    pub skills: &'static [Skill],
    pub projects: &'static [Project],
}

pub struct Education {
    pub degree: &'static str,
    pub institution: &'static str,
    pub period: &'static str,
}

pub struct Skill {
    pub name: &'static str,
    pub percent: u8,
}

pub struct Project {
    pub title: &'static str,
    pub summary: &'static str,
}

/// A page section reachable from the navigation menu.
pub struct NavSection {
    pub id: &'static str,
    pub label: &'static str,
}

impl NavSection {
    #[must_use]
    pub fn href(&self) -> String {
        format!("#{}", self.id)
    }
}

pub const PROFILE: Profile = Profile {
    name: "Deepesh Subedi",
    headline: "Aspiring Full Stack Developer",
    tagline: "Student developer building for the web, one project at a time.",
    email: "dpssubedi8@gmail.com",
    phone: "+977 9829132645",
    location: "Pokhara, Nepal",
    site_url: "https://your-portfolio-url.com",
    about: &[
        "I am a computer science student who enjoys turning ideas into working software.",
        "Right now I am deepening my front-end skills and learning how full stack systems fit together.",
    ],
    education: &[Education {
        degree: "BScIT / Computer Science & Engineering",
        institution: "ISMT University",
        period: "2022 - Present",
    }],
    skill_lines: &[
        "HTML5, CSS3, JavaScript",
        "Python, C#",
        "Currently learning: React, Vue.js, MongoDB",
    ],
    skills: &[
        Skill { name: "HTML5", percent: 90 },
        Skill { name: "CSS3", percent: 85 },
        Skill { name: "JavaScript", percent: 75 },
        Skill { name: "Python", percent: 70 },
        Skill { name: "C#", percent: 65 },
    ],
    projects: &[
        Project {
            title: "Fullstack Web Application",
            summary: "University assignment with authentication and database",
        },
        Project {
            title: "Car Rental Management System",
            summary: "Windows Forms application in C#",
        },
    ],
};

pub const SECTIONS: &[NavSection] = &[
    NavSection { id: "home", label: "Home" },
    NavSection { id: "about", label: "About" },
    NavSection { id: "skills", label: "Skills" },
    NavSection { id: "projects", label: "Projects" },
    NavSection { id: "contact", label: "Contact" },
];
