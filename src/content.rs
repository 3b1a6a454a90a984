pub(crate) const OWNER_NAME: &str = "Elius Niwamanya";
pub(crate) const OWNER_TAGLINE: &str = "Safety Officer • Developer • Data Analyst";
pub(crate) const OWNER_PORTRAIT: &str = "/el.jpg";
pub(crate) const OWNER_PHONE: &str = "+971 55 262 3327";
pub(crate) const OWNER_PHONE_URI: &str = "tel:+971552623327";
pub(crate) const OWNER_LOCATION: &str = "UAE";

#[derive(Clone, Copy, Debug)]
pub(crate) struct NavLink {
    pub label: &'static str,
    pub anchor: &'static str,
}

pub(crate) const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "About", anchor: "#about" },
    NavLink { label: "Experience", anchor: "#experience" },
    NavLink { label: "Skills", anchor: "#skills" },
    NavLink { label: "Certifications", anchor: "#certifications" },
    NavLink { label: "Contact", anchor: "#contact" },
];

pub(crate) const HERO_BADGES: &[&str] = &[
    "IOSH Certified",
    "Full Stack Developer",
    "ML Engineer",
    "Cybersecurity",
];

#[derive(Clone, Copy, Debug)]
pub(crate) struct SectionIntro {
    pub title: &'static str,
    pub blurb: &'static str,
}

pub(crate) const ABOUT_HEADING: SectionIntro = SectionIntro {
    title: "About Me",
    blurb: "Combining safety expertise with cutting-edge technology to create secure, innovative \
            solutions for the modern workplace.",
};

pub(crate) const PROJECTS_HEADING: SectionIntro = SectionIntro {
    title: "Featured Projects",
    blurb: "Innovative solutions combining safety management with modern technology",
};

pub(crate) const EXPERIENCE_HEADING: SectionIntro = SectionIntro {
    title: "Professional Experience",
    blurb: "Real-world impact in safety management and construction projects",
};

pub(crate) const SKILLS_HEADING: SectionIntro = SectionIntro {
    title: "Technical Skills",
    blurb: "Diverse technical expertise spanning multiple domains",
};

pub(crate) const CERTIFICATIONS_HEADING: SectionIntro = SectionIntro {
    title: "Professional Certifications",
    blurb: "Validated expertise in safety management and technical development",
};

pub(crate) const CONTACT_HEADING: SectionIntro = SectionIntro {
    title: "Let's Work Together",
    blurb: "Ready to bring safety expertise and technical innovation to your next project? Let's \
            discuss how we can create secure, efficient solutions together.",
};

pub(crate) const ABOUT_STORY: &[&str] = &[
    "As an IOSH-certified Safety Officer with a passion for technology, I bridge the gap between \
     traditional safety management and modern digital solutions. My unique combination of safety \
     expertise and technical skills allows me to develop comprehensive HSE management systems \
     that not only ensure compliance but also drive operational efficiency.",
    "With experience in Python, machine learning, and cybersecurity, I bring a data-driven \
     approach to safety management, helping organizations make informed decisions through \
     advanced analytics and real-time monitoring systems.",
];

#[derive(Clone, Copy, Debug)]
pub(crate) struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub(crate) const ABOUT_STATS: &[Stat] = &[
    Stat { value: "IOSH", label: "Certified Professional" },
    Stat { value: "2019", label: "Coding Since" },
];

#[derive(Clone, Copy, Debug)]
pub(crate) struct Project {
    pub title: &'static str,
    pub summary: &'static str,
    pub stack: &'static [&'static str],
    pub highlights: &'static [&'static str],
    pub source: Option<&'static str>,
}

pub(crate) const PROJECTS: &[Project] = &[
    Project {
        title: "HSE Management System",
        summary: "Comprehensive safety management platform with real-time monitoring, incident \
                  reporting, and compliance tracking.",
        stack: &["React", "Node.js", "MongoDB", "Express", "Chart.js"],
        highlights: &[
            "500+ active users",
            "Real-time incident reporting",
            "Automated compliance tracking",
        ],
        source: Some("https://github.com/s6ft256/track"),
    },
    Project {
        title: "Weather Forecast App",
        summary: "Modern weather application with 7-day forecasts, interactive maps, and severe \
                  weather alerts.",
        stack: &["React", "OpenWeather API", "Chart.js", "Geolocation"],
        highlights: &[
            "7-day detailed forecasts",
            "Interactive weather maps",
            "Real-time weather alerts",
        ],
        source: None,
    },
];

#[derive(Clone, Copy, Debug)]
pub(crate) struct Engagement {
    pub role: &'static str,
    pub organization: &'static str,
    pub setting: &'static str,
    pub period: &'static str,
    pub achievements: &'static [&'static str],
    pub applied_skills: &'static [&'static str],
}

pub(crate) const EXPERIENCE: Engagement = Engagement {
    role: "Safety Officer",
    organization: "Trojan / National Project Construction",
    setting: "Construction Site • Full-time",
    period: "2025 - Present",
    achievements: &[
        "Implemented HSE management systems reducing workplace incidents by 40%",
        "Conducted daily safety inspections and risk assessments for 500+ workers",
        "Developed and delivered safety training programs achieving 98% compliance",
        "Created digital incident reporting system improving response time by 60%",
        "Maintained IOSH safety standards across multiple construction phases",
    ],
    applied_skills: &[
        "HSE Management",
        "Risk Assessment",
        "IOSH Standards",
        "Safety Training",
        "Incident Investigation",
        "Compliance Management",
    ],
};

#[derive(Clone, Copy, Debug)]
pub(crate) struct SkillGroup {
    pub icon: &'static str,
    pub title: &'static str,
    pub items: &'static [&'static str],
}

pub(crate) const SKILL_GROUPS: &[SkillGroup] = &[
    SkillGroup {
        icon: "💻",
        title: "Web Development",
        items: &["React", "Node.js", "JavaScript", "HTML/CSS", "MongoDB"],
    },
    SkillGroup {
        icon: "🐍",
        title: "Python & ML",
        items: &["Machine Learning", "Pandas", "NumPy", "Scikit-learn", "TensorFlow"],
    },
    SkillGroup {
        icon: "📊",
        title: "Data Analysis",
        items: &[
            "Data Mining",
            "Statistical Analysis",
            "Data Visualization",
            "Matplotlib",
            "Seaborn",
        ],
    },
    SkillGroup {
        icon: "🔒",
        title: "Cybersecurity",
        items: &[
            "Penetration Testing",
            "Vulnerability Assessment",
            "Network Security",
            "Security Auditing",
            "Risk Analysis",
        ],
    },
    SkillGroup {
        icon: "⚡",
        title: "HSE & Events",
        items: &[
            "HSE Officer",
            "Plant Operations",
            "Equipment Management",
            "Event Industry",
            "Safety Compliance",
        ],
    },
];

#[derive(Clone, Copy, Debug)]
pub(crate) struct Certificate {
    pub title: &'static str,
    pub summary: &'static str,
    pub src: &'static str,
    pub download_name: &'static str,
    pub tags: &'static [&'static str],
}

pub(crate) const CERTIFICATES: &[Certificate] = &[
    Certificate {
        title: "IOSH Managing Safely",
        summary: "Institution of Occupational Safety and Health certification in safety \
                  management, issued May 2025 through Speed Way Safety Training Centre LLC.",
        src: "/iosh-certificate.jpg",
        download_name: "IOSH_Certificate_Elius_Niwamanya.jpg",
        tags: &["Safety Management", "Risk Assessment", "IOSH Standards"],
    },
    Certificate {
        title: "Coding Fundamentals",
        summary: "Certificate of completion for coding fundamentals from Grasshopper, awarded \
                  July 2019 by Laura Holmes, Founder & CEO.",
        src: "/certificate.jpg",
        download_name: "Coding_Certificate_Elius_Niwamanya.jpg",
        tags: &["Programming Basics", "JavaScript", "Problem Solving"],
    },
];

pub(crate) fn certificate_by_src(src: &str) -> Option<&'static Certificate> {
    CERTIFICATES.iter().find(|entry| entry.src == src)
}

pub(crate) const SERVICES: &[&str] = &[
    "HSE Management System Development",
    "Safety Training & Compliance",
    "Web Application Development",
    "Data Analysis & Visualization",
    "Cybersecurity Assessment",
];

#[derive(Clone, Copy, Debug)]
pub(crate) struct SocialLink {
    pub label: &'static str,
    pub url: &'static str,
}

pub(crate) const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        label: "LinkedIn",
        url: "https://www.linkedin.com/in/elius-niwamanya-026228187",
    },
    SocialLink {
        label: "Facebook",
        url: "https://www.facebook.com/share/1BGED9N6Ax/",
    },
    SocialLink { label: "Twitter", url: "https://x.com/Elius7c" },
    SocialLink {
        label: "Instagram",
        url: "https://www.instagram.com/niwamanyaelius95/",
    },
    SocialLink {
        label: "Reddit",
        url: "https://www.reddit.com/u/NIWAMANYAELIUS/",
    },
    SocialLink { label: "Discord", url: "https://discord.gg/BzhZpcvC" },
];

pub(crate) const INQUIRY_PLACEHOLDER: &str = "Select an option";

pub(crate) const INQUIRY_OPTIONS: &[&str] = &[
    "HSE Consultation",
    "Web Development",
    "Data Analysis",
    "Cybersecurity",
    "General Inquiry",
];

pub(crate) const FORM_NOTE: &str = "Choose between Email or WhatsApp when sending your message";
