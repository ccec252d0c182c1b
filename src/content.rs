//! Fixed copy rendered by the page sections.

pub struct Project {
    pub category: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub alt: &'static str,
    pub tech: &'static [&'static str],
}

pub struct Job {
    pub company: &'static str,
    pub role: &'static str,
    pub period: &'static str,
    pub summary: &'static str,
    pub logo: &'static str,
    pub tech: &'static [&'static str],
}

pub struct Milestone {
    pub title: &'static str,
    pub detail: &'static str,
}

pub struct TimelineYear {
    pub year: u16,
    pub milestones: &'static [Milestone],
}

pub struct Testimonial {
    pub quote: &'static str,
    pub name: &'static str,
    pub title: &'static str,
    pub image: Option<&'static str>,
}

pub struct NavSection {
    pub name: &'static str,
    pub section_id: &'static str,
}

pub struct NavItem {
    pub name: &'static str,
    pub link: &'static str,
    /// Sections of the linked page offered in a dropdown.
    pub sections: &'static [NavSection],
}

pub struct Interest {
    pub title: &'static str,
    pub detail: &'static str,
}

pub static NAV_ITEMS: &[NavItem] = &[
    NavItem {
        name: "Home",
        link: "/",
        sections: &[
            NavSection { name: "Projects", section_id: "projects" },
            NavSection { name: "Experience", section_id: "experience" },
            NavSection { name: "Blog", section_id: "blog" },
            NavSection { name: "Testimonials", section_id: "testimonials" },
            NavSection { name: "Contact", section_id: "contact" },
        ],
    },
    NavItem {
        name: "About",
        link: "/about",
        sections: &[],
    },
    NavItem {
        name: "Contact",
        link: "/contact",
        sections: &[],
    },
];

pub static HERO_ROLES: &[&str] = &[
    "Software Developer",
    "Full Stack Engineer",
    "Frontend Specialist",
    "React Developer",
    "TypeScript Expert",
    "UI/UX Designer",
];

pub const HERO_TAGLINE: &str = "I'm a product designer and frontend engineer focused on creating beautiful, functional experiences that solve real problems for people.";

pub const ABOUT_TAGLINE: &str = "I'm a passionate product designer and frontend engineer with over 5 years of experience creating beautiful, functional experiences that solve real problems for people.";

pub const CONTACT_TAGLINE: &str =
    "I'm open to freelancing offers. Reach out to me to inquire more about my work.";

pub static PROJECTS: &[Project] = &[
    Project {
        category: "Web Design",
        title: "Modern Dashboard",
        description: "A comprehensive admin dashboard with real-time analytics and intuitive data visualization",
        image: "https://images.unsplash.com/photo-1504868584819-f8e8b4b6d7e3?q=80&w=2070&auto=format&fit=crop",
        alt: "Modern dashboard design",
        tech: &["React", "TypeScript", "Node.js"],
    },
    Project {
        category: "Mobile App",
        title: "iOS Interface",
        description: "A sleek iOS interface design focused on user experience and accessibility",
        image: "https://images.unsplash.com/photo-1512941937669-90a1b58e7e9c?q=80&w=2070&auto=format&fit=crop",
        alt: "Mobile app interface",
        tech: &["React", "JavaScript", "CSS"],
    },
    Project {
        category: "Web Design",
        title: "Portfolio Site",
        description: "A minimalist portfolio showcasing creative work with smooth animations",
        image: "/portfolio.svg",
        alt: "Portfolio website",
        tech: &["React", "TypeScript", "HTML"],
    },
];

pub static EXPERIENCE: &[Job] = &[
    Job {
        company: "Google",
        role: "Senior Frontend Engineer",
        period: "March 2024 - Present",
        summary: "Working on Google Cloud Platform's web console, building engineering web tools, optimizing performance and user experience.",
        logo: "/logos/google.svg",
        tech: &["React", "TypeScript", "Node.js"],
    },
    Job {
        company: "Microsoft",
        role: "Software Engineer",
        period: "June 2022 - February 2024",
        summary: "Developed and maintained Azure web applications, engineering web tools, optimizing performance and user experience.",
        logo: "https://upload.wikimedia.org/wikipedia/commons/4/44/Microsoft_logo.svg",
        tech: &["C#", "Azure", "React"],
    },
    Job {
        company: "Airbnb",
        role: "Frontend Developer",
        period: "January 2021 - May 2022",
        summary: "Implemented user-facing web development of Airbnb's booking platform.",
        logo: "/logos/airbnb.svg",
        tech: &["JavaScript", "React", "CSS"],
    },
    Job {
        company: "Shopify",
        role: "Frontend Web Developer",
        period: "March 2020 - December 2020",
        summary: "Developed and maintained Shopify themes for enterprise clients with advanced technical requirements.",
        logo: "/logos/shopify.svg",
        tech: &["HTML", "CSS", "JavaScript"],
    },
    Job {
        company: "Adobe",
        role: "Frontend Product Consultant",
        period: "September 2019 - November 2020",
        summary: "Consulted on the design and development of Adobe's Creative Cloud web applications.",
        logo: "/logos/adobe.svg",
        tech: &["JavaScript", "CSS", "HTML"],
    },
];

pub static TIMELINE: &[TimelineYear] = &[
    TimelineYear {
        year: 2025,
        milestones: &[Milestone {
            title: "Launched DevTools Pro extension",
            detail: "Created a popular VS Code extension that helps developers debug React applications, reaching 15,000+ weekly downloads.",
        }],
    },
    TimelineYear {
        year: 2024,
        milestones: &[
            Milestone {
                title: "Built freelance design system",
                detail: "Designed and developed a reusable component library for a fintech startup, reducing their development time by 40%.",
            },
            Milestone {
                title: "Presented at local tech meetup",
                detail: "Shared my experience building performant React applications at the San Francisco Frontend Developers meetup.",
            },
        ],
    },
    TimelineYear {
        year: 2023,
        milestones: &[
            Milestone {
                title: "Merged first PR to Next.js",
                detail: "Contributed a performance optimization fix that improved image loading times in Next.js 13.",
            },
            Milestone {
                title: "Started technical blog",
                detail: "Launched a blog documenting my journey learning advanced React patterns, gaining 2,000+ monthly readers.",
            },
        ],
    },
    TimelineYear {
        year: 2022,
        milestones: &[Milestone {
            title: "Promoted to Senior Frontend Engineer",
            detail: "Took on technical leadership responsibilities, mentoring junior developers and establishing code review processes.",
        }],
    },
    TimelineYear {
        year: 2021,
        milestones: &[
            Milestone {
                title: "Completed CS degree",
                detail: "Graduated with a Bachelor's in Computer Science, focusing on web technologies and user interface design.",
            },
            Milestone {
                title: "Launched personal portfolio site",
                detail: "Built and deployed my first full-stack project, which became a case study for my job applications.",
            },
        ],
    },
    TimelineYear {
        year: 2020,
        milestones: &[Milestone {
            title: "Discovered web development",
            detail: "Started learning JavaScript through freeCodeCamp and built my first interactive website using vanilla JS and CSS.",
        }],
    },
];

pub static TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "One of the most thoughtful engineers I've worked with. Every interaction felt considered.",
        name: "Sarah Chen",
        title: "Design Lead",
        image: None,
    },
    Testimonial {
        quote: "Shipped our dashboard rewrite ahead of schedule and the performance gains were immediate.",
        name: "Marcus Johnson",
        title: "Engineering Manager",
        image: None,
    },
    Testimonial {
        quote: "Turns vague product ideas into polished interfaces faster than anyone on the team.",
        name: "Priya Patel",
        title: "Product Manager",
        image: None,
    },
    Testimonial {
        quote: "The component library became the backbone of everything we built afterwards.",
        name: "Daniel Kim",
        title: "CTO, fintech startup",
        image: None,
    },
    Testimonial {
        quote: "Great communicator, great reviewer, and a genuinely kind teammate.",
        name: "Laura Martínez",
        title: "Senior Engineer",
        image: None,
    },
];

pub static INTERESTS: &[Interest] = &[
    Interest {
        title: "Open Source",
        detail: "Contributing fixes and small tools back to the libraries I rely on every day.",
    },
    Interest {
        title: "Learning & Growth",
        detail: "Reading, experimenting with new frameworks and writing about what I learn.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SITE;
    use std::path::Path;

    #[test]
    fn test_local_assets_are_shipped() {
        let public = Path::new(env!("CARGO_MANIFEST_DIR")).join("public");
        let local = PROJECTS
            .iter()
            .map(|p| p.image)
            .chain(EXPERIENCE.iter().map(|j| j.logo))
            .chain(TESTIMONIALS.iter().filter_map(|t| t.image))
            .chain([SITE.avatar, SITE.resume, "/favicon.svg"])
            .filter(|path| path.starts_with('/'));
        for path in local {
            assert!(
                public.join(path.trim_start_matches('/')).is_file(),
                "{path} missing from public/"
            );
        }
    }

    #[test]
    fn test_nav_sections_exist_on_home() {
        let home = NAV_ITEMS.iter().find(|i| i.link == "/").unwrap();
        let ids = home.sections.iter().map(|s| s.section_id).collect::<Vec<_>>();
        assert_eq!(ids, ["projects", "experience", "blog", "testimonials", "contact"]);
    }
}
