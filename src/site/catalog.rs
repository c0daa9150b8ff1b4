//! Static page content.

pub const BRAND: &str = "Wave Draft";
pub const HERO_BACKGROUND: &str = "/hero-bg.jpg";
pub const ABOUT_IMAGE: &str = "/portfolio-1.jpg";

#[derive(Debug, PartialEq, Eq)]
pub struct Service {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub category: &'static str,
    pub image: &'static str,
    pub description: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub struct Stat {
    pub target: u32,
    pub suffix: &'static str,
    pub label: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub struct ContactDetail {
    pub icon: &'static str,
    pub label: &'static str,
    pub value: &'static str,
    pub href: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub short: &'static str,
    pub href: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub struct LinkGroup {
    pub title: &'static str,
    pub links: &'static [&'static str],
}

pub const SERVICES: &[Service] = &[
    Service {
        icon: "✦",
        title: "Branding Strategy",
        description: "Create a powerful brand identity that resonates with your audience and sets you apart from competitors.",
    },
    Service {
        icon: "⇄",
        title: "Social Media Marketing",
        description: "Engage your audience across all platforms with strategic content and community management.",
    },
    Service {
        icon: "⌕",
        title: "SEO Optimization",
        description: "Boost your online visibility with proven SEO strategies that drive organic traffic.",
    },
    Service {
        icon: "↗",
        title: "Paid Ads Management",
        description: "Maximize ROI with targeted advertising campaigns across Google, Facebook, and Instagram.",
    },
    Service {
        icon: "</>",
        title: "Web Design & Development",
        description: "Build stunning, responsive websites that convert visitors into customers.",
    },
    Service {
        icon: "✎",
        title: "Content Creation",
        description: "Craft compelling content that tells your story and drives engagement.",
    },
];

pub const PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: "TechStart Branding",
        category: "Branding",
        image: "/portfolio-1.jpg",
        description: "Complete brand identity redesign for a tech startup, including logo, color palette, and brand guidelines.",
    },
    Project {
        id: 2,
        title: "Social Campaign Success",
        category: "Social Media",
        image: "/portfolio-2.jpg",
        description: "Multi-platform social media campaign that increased engagement by 300% in 3 months.",
    },
    Project {
        id: 3,
        title: "E-Commerce Platform",
        category: "Web Design",
        image: "/portfolio-3.jpg",
        description: "Full-stack e-commerce website with integrated payment gateway and inventory management.",
    },
    Project {
        id: 4,
        title: "SEO Optimization",
        category: "SEO",
        image: "/portfolio-1.jpg",
        description: "Improved organic search rankings from page 5 to page 1 for 15+ target keywords.",
    },
    Project {
        id: 5,
        title: "Paid Ads Strategy",
        category: "Advertising",
        image: "/portfolio-2.jpg",
        description: "Managed $500K+ in ad spend across Google and Facebook with 4.5x ROI.",
    },
    Project {
        id: 6,
        title: "Content Marketing",
        category: "Content",
        image: "/portfolio-3.jpg",
        description: "Developed and executed comprehensive content strategy resulting in 50% more leads.",
    },
];

pub const HERO_STATS: &[(&str, &str)] = &[
    ("500+", "Projects Completed"),
    ("98%", "Client Satisfaction"),
];

pub const STATS: &[Stat] = &[
    Stat {
        target: 2,
        suffix: "+",
        label: "Years of Experience",
    },
    Stat {
        target: 50,
        suffix: "+",
        label: "Projects Completed",
    },
    Stat {
        target: 98,
        suffix: "%",
        label: "Client Satisfaction",
    },
    Stat {
        target: 15,
        suffix: "+",
        label: "Team Members",
    },
];

pub const BENEFITS: &[&str] = &[
    "Expert team with 10+ years of experience",
    "Data-driven strategies and proven results",
    "Transparent communication and reporting",
    "Customized solutions for every business",
    "Dedicated account managers",
    "Continuous optimization and improvement",
];

pub const CONTACT_DETAILS: &[ContactDetail] = &[
    ContactDetail {
        icon: "✉",
        label: "Email",
        value: "wavedraftsolutions@gmail.com",
        href: "mailto:wavedraftsolutions@gmail.com",
    },
    ContactDetail {
        icon: "☎",
        label: "Phone",
        value: "+1 346 344 1342",
        href: "tel:+13463441342",
    },
];

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        label: "Facebook",
        short: "f",
        href: "#",
    },
    SocialLink {
        label: "Twitter",
        short: "𝕏",
        href: "https://x.com/DraftWave45633",
    },
    SocialLink {
        label: "LinkedIn",
        short: "in",
        href: "https://www.linkedin.com/in/wavedraft-solutions-77720339b/",
    },
    SocialLink {
        label: "Instagram",
        short: "ig",
        href: "#",
    },
];

pub const FOOTER_LINKS: &[LinkGroup] = &[
    LinkGroup {
        title: "Company",
        links: &["About Us", "Services", "Portfolio", "Blog", "Careers"],
    },
    LinkGroup {
        title: "Services",
        links: &["Branding", "Social Media", "SEO", "Paid Ads", "Web Design", "Content"],
    },
    LinkGroup {
        title: "Legal",
        links: &["Privacy Policy", "Terms of Service", "Cookie Policy", "Contact"],
    },
];

pub fn copyright(year: i32) -> String {
    format!("© {year} {BRAND}. All rights reserved.")
}
