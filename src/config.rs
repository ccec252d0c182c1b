//! Site identity and section toggles.

pub struct Social {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: SocialIcon,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialIcon {
    Github,
    Linkedin,
    Twitter,
}

pub struct SiteConfig {
    pub owner: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub email: &'static str,
    pub avatar: &'static str,
    pub resume: &'static str,
    pub socials: &'static [Social],
    /// Show the square badge behind section headings once they animate in.
    pub text_with_pill_badge: bool,
}

pub struct AboutSections {
    pub show_who_i_am: bool,
    pub show_brands: bool,
    pub show_beyond_work: bool,
}

pub static SITE: SiteConfig = SiteConfig {
    owner: "Elijah Farrell",
    title: "Minimal Portfolio",
    description: "Product designer and frontend engineer portfolio",
    email: "farrellelijah@outlook.com",
    avatar: "/pfp.svg",
    resume: "/resume.pdf",
    socials: &[
        Social {
            label: "GitHub",
            href: "https://github.com/",
            icon: SocialIcon::Github,
        },
        Social {
            label: "LinkedIn",
            href: "https://linkedin.com/",
            icon: SocialIcon::Linkedin,
        },
        Social {
            label: "Twitter",
            href: "https://twitter.com/",
            icon: SocialIcon::Twitter,
        },
    ],
    text_with_pill_badge: true,
};

pub static ABOUT_SECTIONS: AboutSections = AboutSections {
    show_who_i_am: false,
    show_brands: false,
    show_beyond_work: false,
};
