//! Static page content: the regions, the service catalogue and the project
//! showcase. Nothing here changes after the page is mounted.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Region {
    Home,
    Services,
    Projects,
    Contact,
}

impl Region {
    /// Page order, also used for the navigation links.
    pub const ALL: [Region; 4] = [
        Region::Home,
        Region::Services,
        Region::Projects,
        Region::Contact,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Region::Home => "Home",
            Region::Services => "Services",
            Region::Projects => "Projects",
            Region::Contact => "Contact",
        }
    }

    pub fn anchor(self) -> &'static str {
        match self {
            Region::Home => "home",
            Region::Services => "services",
            Region::Projects => "projects",
            Region::Contact => "contact",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.anchor())
    }

    /// The hero renders as a `<header>`, everything else as a `<section>`.
    pub fn tag(self) -> &'static str {
        match self {
            Region::Home => "header",
            _ => "section",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ServiceIcon {
    Building,
    HardHat,
    Ruler,
    Users,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ServiceEntry {
    pub label: &'static str,
    pub icon: ServiceIcon,
}

pub const SERVICES: [ServiceEntry; 4] = [
    ServiceEntry { label: "Structural Engineering", icon: ServiceIcon::Building },
    ServiceEntry { label: "Construction Management", icon: ServiceIcon::HardHat },
    ServiceEntry { label: "Urban Planning", icon: ServiceIcon::Ruler },
    ServiceEntry { label: "Project Consultation", icon: ServiceIcon::Users },
];

/// A placeholder image reference. Only the URL is built here, the image
/// itself is served as a static asset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placeholder {
    pub width: u32,
    pub height: u32,
}

impl Placeholder {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn src(&self) -> String {
        format!("/placeholder.svg?height={}&width={}", self.height, self.width)
    }
}

pub const HERO_IMAGE: Placeholder = Placeholder::new(600, 400);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProjectEntry {
    pub number: u32,
    pub image: Placeholder,
}

impl ProjectEntry {
    pub fn title(&self) -> String {
        format!("Project {}", self.number)
    }

    pub fn blurb(&self) -> &'static str {
        "A brief description of the project and its impact on the community and infrastructure."
    }
}

pub const PROJECTS: [ProjectEntry; 3] = [
    ProjectEntry { number: 1, image: Placeholder::new(400, 300) },
    ProjectEntry { number: 2, image: Placeholder::new(400, 300) },
    ProjectEntry { number: 3, image: Placeholder::new(400, 300) },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions_link_to_lowercase_anchors() {
        let hrefs: Vec<String> = Region::ALL.iter().map(|r| r.href()).collect();
        assert_eq!(hrefs, vec!["#home", "#services", "#projects", "#contact"]);
    }

    #[test]
    fn only_home_renders_as_header() {
        assert_eq!(Region::Home.tag(), "header");
        for region in &Region::ALL[1..] {
            assert_eq!(region.tag(), "section");
        }
    }

    #[test]
    fn placeholder_puts_height_before_width() {
        assert_eq!(HERO_IMAGE.src(), "/placeholder.svg?height=400&width=600");
        assert_eq!(PROJECTS[0].image.src(), "/placeholder.svg?height=300&width=400");
    }

    #[test]
    fn projects_are_numbered_from_one() {
        let titles: Vec<String> = PROJECTS.iter().map(ProjectEntry::title).collect();
        assert_eq!(titles, vec!["Project 1", "Project 2", "Project 3"]);
    }
}
