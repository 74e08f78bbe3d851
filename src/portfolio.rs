use serde::{Deserialize, Serialize};

const IMAGE_SIZING: &str = "?auto=format&fit=crop&w=500&q=80";
const GRID_PAGE: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image: String,
    pub categories: Vec<String>,
    pub technologies: Vec<String>,
    pub demo_link: String,
    pub github_link: String,
}

impl Project {
    #[allow(clippy::too_many_arguments)]
    fn new(
        id: &str,
        title: &str,
        description: &str,
        image: &str,
        categories: &[&str],
        technologies: &[&str],
        demo_link: &str,
        github_link: &str,
    ) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            image: image.to_string(),
            categories: categories.iter().map(|s| s.to_string()).collect(),
            technologies: technologies.iter().map(|s| s.to_string()).collect(),
            demo_link: demo_link.to_string(),
            github_link: github_link.to_string(),
        }
    }

    pub fn image_url(&self) -> String {
        format!("{}{}", self.image, IMAGE_SIZING)
    }

    pub fn has_category(&self, tag: &str) -> bool {
        self.categories.iter().any(|c| c == tag)
    }
}

/// The project catalogue, in display order.
pub fn projects() -> Vec<Project> {
    vec![
        Project::new(
            "vidnet-frontend",
            "VidNet Frontend",
            "A modern video streaming platform with React and Redux",
            "https://images.unsplash.com/photo-1611162617213-7d7a39e9b1d7",
            &["frontend", "web"],
            &["React", "Redux", "Tailwind CSS"],
            "https://vidnet.example.com",
            "https://github.com/ibrahimsohofi/vidnet_frontend",
        ),
        Project::new(
            "online-courses",
            "Online Courses Platform",
            "A platform for online courses with user authentication",
            "https://images.unsplash.com/photo-1501504905252-473c47e087f8",
            &["fullstack", "web"],
            &["Next.js", "MongoDB", "Express.js"],
            "https://courses.example.com",
            "https://github.com/ibrahimsohofi/online_courses_platform",
        ),
        Project::new(
            "link-shortener",
            "Link Shortener",
            "A URL shortening service with analytics",
            "https://images.unsplash.com/photo-1558494949-ef010cbdcc31",
            &["backend", "web"],
            &["Node.js", "Express.js", "MongoDB"],
            "https://shortlinks.example.com",
            "https://github.com/ibrahimsohofi/link-shortener",
        ),
        Project::new(
            "books-website",
            "Books Website",
            "A book review and recommendation website",
            "https://images.unsplash.com/photo-1495446815901-a7297e633e8d",
            &["frontend", "web"],
            &["HTML", "CSS", "JavaScript"],
            "https://books.example.com",
            "https://github.com/ibrahimsohofi/Bookswebsite",
        ),
        Project::new(
            "watch-series",
            "Watch Series",
            "A series and movies tracking application",
            "https://images.unsplash.com/photo-1594908900066-3f47337549d8",
            &["fullstack", "web"],
            &["TypeScript", "React", "Node.js"],
            "https://watchseries.example.com",
            "https://github.com/ibrahimsohofi/watch-series-",
        ),
        Project::new(
            "anime-tracker",
            "Anime Tracker",
            "An application to track and discover anime series",
            "https://images.unsplash.com/photo-1563089145-599997674d42",
            &["frontend", "mobile"],
            &["React Native", "Firebase"],
            "https://animetracker.example.com",
            "https://github.com/ibrahimsohofi/anime",
        ),
    ]
}

/// Whether the grid has more projects than fit on the first page.
pub fn show_more(projects: &[Project]) -> bool {
    projects.len() > GRID_PAGE
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Filter {
    #[default]
    All,
    Tag(String),
}

pub const FILTERS: [&str; 6] = ["all", "frontend", "backend", "fullstack", "web", "mobile"];

impl From<&str> for Filter {
    fn from(value: &str) -> Self {
        match value {
            "all" => Self::All,
            tag => Self::Tag(tag.to_string()),
        }
    }
}

impl Filter {
    pub fn as_str(&self) -> &str {
        match self {
            Filter::All => "all",
            Filter::Tag(t) => t,
        }
    }

    pub fn label(&self) -> String {
        let s = self.as_str();
        let mut chars = s.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    pub fn matches(&self, project: &Project) -> bool {
        match self {
            Filter::All => true,
            Filter::Tag(t) => project.has_category(t),
        }
    }
}

/// Stable filter over the catalogue; never reorders.
pub fn apply_filter(projects: &[Project], filter: &Filter) -> Vec<Project> {
    projects
        .iter()
        .filter(|p| filter.matches(p))
        .cloned()
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub proficiency: u8,
}

pub const SKILLS: [Skill; 8] = [
    Skill { name: "HTML5", proficiency: 90 },
    Skill { name: "CSS3", proficiency: 85 },
    Skill { name: "JavaScript", proficiency: 80 },
    Skill { name: "React", proficiency: 75 },
    Skill { name: "PHP", proficiency: 70 },
    Skill { name: "Python", proficiency: 65 },
    Skill { name: "MongoDB", proficiency: 60 },
    Skill { name: "MySQL", proficiency: 75 },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Education {
    pub title: &'static str,
    pub period: &'static str,
    pub school: &'static str,
}

pub const EDUCATION: [Education; 2] = [
    Education {
        title: "Bachelor's in Web Development",
        period: "2018 - 2021",
        school: "University of Morocco",
    },
    Education {
        title: "Web Development Certification",
        period: "2022",
        school: "FreeCodeCamp",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    pub name: &'static str,
    pub level: &'static str,
}

pub const LANGUAGES: [Language; 3] = [
    Language { name: "English", level: "Professional Working" },
    Language { name: "Arabic", level: "Native" },
    Language { name: "French", level: "Professional Working" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
}

pub const SOCIAL_LINKS: [SocialLink; 4] = [
    SocialLink {
        label: "GitHub",
        href: "https://github.com/ibrahimsohofi",
        icon: "devicon-github-plain",
    },
    SocialLink {
        label: "LinkedIn",
        href: "https://www.linkedin.com/in/ibrahimsohofi/",
        icon: "devicon-linkedin-plain",
    },
    SocialLink {
        label: "Twitter",
        href: "https://twitter.com/Ibrahimsohofi",
        icon: "devicon-twitter-original",
    },
    SocialLink {
        label: "Instagram",
        href: "https://www.instagram.com/sohofi.ibrahim/",
        icon: "extra-instagram",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(projects: &[Project]) -> Vec<&str> {
        projects.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_filter_all_is_identity() {
        let all = projects();
        assert_eq!(apply_filter(&all, &Filter::All), all);
    }

    #[test]
    fn test_filter_by_tag_preserves_order() {
        let all = projects();
        let frontend = apply_filter(&all, &Filter::from("frontend"));
        assert_eq!(
            ids(&frontend),
            vec!["vidnet-frontend", "books-website", "anime-tracker"]
        );
        let web = apply_filter(&all, &Filter::from("web"));
        assert_eq!(
            ids(&web),
            vec![
                "vidnet-frontend",
                "online-courses",
                "link-shortener",
                "books-website",
                "watch-series"
            ]
        );
        assert_eq!(ids(&apply_filter(&all, &"mobile".into())), vec!["anime-tracker"]);
    }

    #[test]
    fn test_filter_matches_exactly_tagged_projects() {
        let all = projects();
        for tag in FILTERS.iter().skip(1) {
            let filtered = apply_filter(&all, &Filter::from(*tag));
            let expected = all
                .iter()
                .filter(|p| p.categories.iter().any(|c| c == tag))
                .cloned()
                .collect::<Vec<_>>();
            assert_eq!(filtered, expected, "filter {tag}");
        }
    }

    #[test]
    fn test_unknown_tag_is_empty() {
        let all = projects();
        assert!(apply_filter(&all, &Filter::from("embedded")).is_empty());
    }

    #[test]
    fn test_catalogue_invariants() {
        let all = projects();
        let mut seen = std::collections::HashSet::new();
        for p in &all {
            assert!(seen.insert(p.id.clone()), "duplicate id {}", p.id);
            assert!(!p.title.is_empty());
            assert!(!p.categories.is_empty());
        }
        assert!(!show_more(&all));
    }

    #[test]
    fn test_labels_and_urls() {
        assert_eq!(Filter::All.label(), "All");
        assert_eq!(Filter::from("fullstack").label(), "Fullstack");
        let p = &projects()[0];
        assert!(p.image_url().ends_with("?auto=format&fit=crop&w=500&q=80"));
    }
}
