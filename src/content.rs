//! Hand-written page content.

pub struct Owner {
    pub full_name: &'static str,
    pub first_name: &'static str,
    pub headline: &'static str,
    pub email: &'static str,
    pub location: &'static str,
    pub initial: &'static str,
    pub photo: &'static str,
}

pub static OWNER: Owner = Owner {
    full_name: "Kidhurshan",
    first_name: "Kidhurshan",
    headline: "Computer Engineering Student & AI Enthusiast",
    email: "d.kidhu@gmail.com",
    location: "Jaffna, Sri Lanka",
    initial: "K",
    photo: "https://images.pexels.com/photos/220453/pexels-photo-220453.jpeg?auto=compress&cs=tinysrgb&w=800",
};

pub static BIO: &[&str] = &[
    "Hi, I'm Kidhurshan, an enthusiastic Computer Engineering undergraduate at the University of Jaffna, Sri Lanka, with a deep passion for building real-world solutions through AI, Machine Learning, and Deep Learning. My journey into the world of technology began with a curiosity to solve complex problems, and over time, this curiosity evolved into a purposeful drive to become a skilled AI Engineer.",
    "I specialize in crafting intelligent systems, developing immersive AR/VR experiences, and experimenting with agentic AI applications. With a growing portfolio of solo and team-driven projects, I strive to fuse innovation with usability, always aiming to build tools that are functional, scalable, and human-centered.",
    "Whether I'm prototyping a GenAI agent, developing a peer-to-peer video conferencing app, or sculpting an AI-enhanced AR game, I focus on clarity, minimalism, and unique user experiences. My engineering mindset is paired with a visual storytelling approach that ensures every feature not only works but resonates with the user.",
];

pub struct Education {
    pub title: &'static str,
    pub institution: &'static str,
    pub description: &'static str,
    pub time_ago: &'static str,
    pub image: &'static str,
}

pub static EDUCATION: &[Education] = &[
    Education {
        title: "Bachelor of Engineering in Computer Engineering",
        institution: "University of Jaffna, Sri Lanka",
        description: "Specializing in AI, Machine Learning, and Deep Learning with focus on real-world applications",
        time_ago: "Current",
        image: "https://images.pexels.com/photos/267885/pexels-photo-267885.jpeg?auto=compress&cs=tinysrgb&w=400",
    },
    Education {
        title: "Advanced Level (A/L)",
        institution: "Science Stream with Mathematics",
        description: "Strong foundation in Mathematics, Physics, and Chemistry",
        time_ago: "3 years ago",
        image: "https://images.pexels.com/photos/1595391/pexels-photo-1595391.jpeg?auto=compress&cs=tinysrgb&w=400",
    },
    Education {
        title: "Ordinary Level (O/L)",
        institution: "High School Education",
        description: "Comprehensive secondary education with excellent academic performance",
        time_ago: "5 years ago",
        image: "https://images.pexels.com/photos/159844/cellular-education-classroom-159844.jpeg?auto=compress&cs=tinysrgb&w=400",
    },
];

pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub live_demo: Option<&'static str>,
    pub github: Option<&'static str>,
    pub date: &'static str,
    pub team: &'static str,
    pub role: &'static str,
    pub details: &'static str,
    pub achievements: &'static [&'static str],
    pub images: &'static [&'static str],
}

/// Thumbnails shown inline per project; the rest collapse into a "+N" tile.
pub const GALLERY_LIMIT: usize = 4;

impl Project {
    /// The thumbnails to render and how many images are left over.
    pub fn gallery(&self) -> (&'static [&'static str], usize) {
        let images = self.images;
        let shown = images.len().min(GALLERY_LIMIT);
        (&images[..shown], images.len() - shown)
    }
}

pub static PROJECTS: &[Project] = &[
    Project {
        id: "medsync",
        title: "MedSync - Secure Medical Records Platform",
        description: "A comprehensive healthcare platform with secure medical records management, featuring intuitive interfaces for doctors, patients, and administrators.",
        technologies: &["React", "TypeScript", "Tailwind CSS", "Node.js", "MongoDB", "JWT"],
        live_demo: Some("https://medsync-demo.example.com"),
        github: Some("https://github.com/kidhurshan/medsync"),
        date: "Nov 2024",
        team: "Team of 4",
        role: "Frontend Developer",
        details: "As the Frontend Developer, I designed intuitive interfaces for doctors, patients, and admins using React, TypeScript, and Tailwind CSS. I implemented key features like an analytics dashboard, security verification system, and real-time access logs. This platform achieved 100% audit trail coverage and full HIPAA compliance, streamlining the healthcare workflow across roles.",
        achievements: &[
            "100% audit trail coverage",
            "Full HIPAA compliance",
            "Real-time access logs",
            "Multi-role dashboard system",
            "Security verification system",
        ],
        images: &[
            "https://images.pexels.com/photos/4386467/pexels-photo-4386467.jpeg?auto=compress&cs=tinysrgb&w=300",
            "https://images.pexels.com/photos/4386464/pexels-photo-4386464.jpeg?auto=compress&cs=tinysrgb&w=300",
            "https://images.pexels.com/photos/4386465/pexels-photo-4386465.jpeg?auto=compress&cs=tinysrgb&w=300",
        ],
    },
    Project {
        id: "attendance-system",
        title: "Student Attendance Management System",
        description: "A university-wide attendance tracking system with multi-role dashboards, real-time notifications, and comprehensive analytics.",
        technologies: &["HTML5", "CSS3", "JavaScript", "PHP", "MySQL", "Chart.js"],
        live_demo: Some("https://attendance-demo.example.com"),
        github: Some("https://github.com/kidhurshan/attendance-system"),
        date: "Sep 2024",
        team: "Solo Project",
        role: "Full-Stack Developer",
        details: "I developed a university-wide attendance system from scratch using HTML5, CSS3, JavaScript, PHP, and MySQL. The system supports multi-role dashboards, real-time notifications, and visual analytics. It dramatically reduced manual work for staff and improved engagement through automated processes and student feedback loops.",
        achievements: &[
            "Reduced manual work by 80%",
            "Real-time notification system",
            "Visual analytics dashboard",
            "Multi-role access control",
            "Automated attendance tracking",
        ],
        images: &[
            "https://images.pexels.com/photos/3184465/pexels-photo-3184465.jpeg?auto=compress&cs=tinysrgb&w=300",
            "https://images.pexels.com/photos/7688336/pexels-photo-7688336.jpeg?auto=compress&cs=tinysrgb&w=300",
            "https://images.pexels.com/photos/3184292/pexels-photo-3184292.jpeg?auto=compress&cs=tinysrgb&w=300",
        ],
    },
    Project {
        id: "meetly",
        title: "Meetly - Real-Time Peer-to-Peer Video Conferencing",
        description: "A custom-built WebRTC application for secure, low-latency video calls with advanced features like adaptive layouts and real-time chat.",
        technologies: &["React", "Vite", "Node.js", "WebRTC", "WebSockets", "STUN"],
        live_demo: Some("https://meetly-demo.example.com"),
        github: Some("https://github.com/kidhurshan/meetly"),
        date: "Aug 2024",
        team: "Solo Project",
        role: "Full-Stack Developer & Architect",
        details: "Meetly is a custom-built WebRTC application for secure, low-latency video calls, using React, Vite, Node.js, WebSockets, and STUN. As the Full-Stack Developer & Architect, I built the full stack, from room generation and adaptive layouts to chat and media controls. Meetly delivers <200ms latency and was praised for its simplicity and performance.",
        achievements: &[
            "<200ms latency achieved",
            "Secure P2P connections",
            "Adaptive video layouts",
            "Real-time chat integration",
            "Cross-platform compatibility",
        ],
        images: &[
            "https://images.pexels.com/photos/4348401/pexels-photo-4348401.jpeg?auto=compress&cs=tinysrgb&w=300",
            "https://images.pexels.com/photos/4348404/pexels-photo-4348404.jpeg?auto=compress&cs=tinysrgb&w=300",
        ],
    },
    Project {
        id: "ar-ai-game",
        title: "AR AI Game - Unity-based Mixed Reality Experience",
        description: "An innovative mobile AR game featuring adaptive AI bots, procedural world interactions, and spatial puzzles using Unity and AR Foundation.",
        technologies: &["Unity", "C#", "AR Foundation", "Blender", "FMOD", "Visual Scripting"],
        live_demo: Some("https://play.google.com/store/apps/details?id=com.kidhurshan.argame"),
        github: Some("https://github.com/kidhurshan/ar-ai-game"),
        date: "Jul 2024",
        team: "Solo Project",
        role: "Unity Developer & Game Designer",
        details: "As a Solo Unity Developer, I built a mobile AR game using Unity Visual Scripting, AR Foundation, Blender, and FMOD. The game features adaptive AI bots, procedural world interactions, and spatial puzzles. By optimizing performance and deploying across Android and iOS, I created a unique and engaging AR experience that showcases real-world navigation and virtual logic.",
        achievements: &[
            "Cross-platform AR deployment",
            "Adaptive AI bot behavior",
            "Procedural world generation",
            "Spatial puzzle mechanics",
            "Optimized mobile performance",
        ],
        images: &[
            "https://images.pexels.com/photos/8386440/pexels-photo-8386440.jpeg?auto=compress&cs=tinysrgb&w=300",
            "https://images.pexels.com/photos/3861969/pexels-photo-3861969.jpeg?auto=compress&cs=tinysrgb&w=300",
            "https://images.pexels.com/photos/7862492/pexels-photo-7862492.jpeg?auto=compress&cs=tinysrgb&w=300",
        ],
    },
];

pub struct Skill {
    pub name: &'static str,
    pub proficiency: u8, // percent
}

pub struct SkillCategory {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub key_skills: &'static [&'static str],
    pub skills: &'static [Skill],
}

macro_rules! skills {
    ($($name:literal => $p:literal),* $(,)?) => {
        &[$(Skill { name: $name, proficiency: $p }),*]
    };
}

pub static SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        id: "programming",
        title: "Programming Languages",
        description: "Proficient in multiple programming languages with strong foundation in object-oriented and functional programming paradigms.",
        key_skills: &["Java", "Python", "C++", "JavaScript"],
        skills: skills!["Java" => 90, "Python" => 90, "C++" => 80, "JavaScript" => 60],
    },
    SkillCategory {
        id: "genai",
        title: "GenAI & Agentic AI",
        description: "Specialized in building intelligent agents and generative AI applications using cutting-edge frameworks and tools.",
        key_skills: &["LangGraph", "LangChain", "Pydantic", "Pinecone", "CrewAI", "AutoGen"],
        skills: skills![
            "LangGraph" => 85,
            "LangChain" => 80,
            "Pydantic" => 80,
            "Pinecone" => 80,
            "CrewAI" => 80,
            "AutoGen" => 70,
        ],
    },
    SkillCategory {
        id: "ml",
        title: "Machine Learning",
        description: "Experience in developing and deploying machine learning models for various applications and domains.",
        key_skills: &["PyTorch", "scikit-learn"],
        skills: skills!["PyTorch" => 80, "scikit-learn" => 60],
    },
    SkillCategory {
        id: "frontend",
        title: "Frontend Development",
        description: "Creating responsive and interactive user interfaces with modern web technologies and frameworks.",
        key_skills: &["HTML5", "CSS3", "Bootstrap", "Tailwind CSS", "React", "TypeScript"],
        skills: skills![
            "HTML5" => 85,
            "CSS3" => 80,
            "Bootstrap" => 80,
            "Tailwind CSS" => 80,
            "JavaScript" => 60,
            "React" => 50,
            "TypeScript" => 50,
        ],
    },
    SkillCategory {
        id: "backend",
        title: "Backend Development",
        description: "Building robust server-side applications and managing databases with various technologies and frameworks.",
        key_skills: &["PHP", "MySQL", "MongoDB", "Node.js"],
        skills: skills!["PHP" => 80, "MySQL" => 75, "MongoDB" => 70, "Node.js" => 50],
    },
    SkillCategory {
        id: "arvr",
        title: "AR/VR Development",
        description: "Developing immersive augmented and virtual reality experiences using industry-standard game engines.",
        key_skills: &["Unity Engine", "AR Foundation", "Visual Scripting", "Unreal Engine"],
        skills: skills![
            "Unity Engine" => 85,
            "AR Foundation" => 80,
            "Visual Scripting" => 80,
            "Unreal Engine" => 70,
        ],
    },
    SkillCategory {
        id: "creative",
        title: "Creative Tools",
        description: "3D modeling, sculpting, and animation tools for creating digital assets and visual content.",
        key_skills: &["Blender", "ZBrush", "Maya"],
        skills: skills!["Blender" => 70, "ZBrush" => 70, "Maya" => 50],
    },
    SkillCategory {
        id: "devops",
        title: "Version Control & DevOps",
        description: "Managing code repositories and basic deployment workflows with version control and cloud platforms.",
        key_skills: &["Git & GitHub", "Docker", "AWS"],
        skills: skills!["Git & GitHub" => 85, "Docker (basic)" => 50, "AWS (basic)" => 50],
    },
];

pub struct ContactMethod {
    pub label: &'static str,
    pub value: &'static str,
    pub href: Option<&'static str>,
    pub description: &'static str,
}

pub static CONTACT_METHODS: &[ContactMethod] = &[
    ContactMethod {
        label: "Email",
        value: "d.kidhu@gmail.com",
        href: Some("mailto:d.kidhu@gmail.com"),
        description: "Best for detailed inquiries and collaboration",
    },
    ContactMethod {
        label: "Location",
        value: "Jaffna, Sri Lanka",
        href: None,
        description: "Open to remote opportunities worldwide",
    },
    ContactMethod {
        label: "Response Time",
        value: "24-48 hours",
        href: None,
        description: "I typically respond within 1-2 business days",
    },
];

pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: &'static str, // devicon class
    pub description: &'static str,
}

pub static SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        label: "LinkedIn",
        href: "https://linkedin.com/in/kidhurshan",
        icon: "devicon-linkedin-plain",
        description: "Professional network and career updates",
    },
    SocialLink {
        label: "GitHub",
        href: "https://github.com/kidhurshan",
        icon: "devicon-github-plain",
        description: "Open source projects and code repositories",
    },
];

/// Accordion toggle shared by the projects and skills pages: at most one
/// item open, clicking the open one closes it.
pub fn toggle_expanded(current: Option<&'static str>, id: &'static str) -> Option<&'static str> {
    if current == Some(id) {
        None
    } else {
        Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_expanded() {
        assert_eq!(toggle_expanded(None, "ml"), Some("ml"));
        assert_eq!(toggle_expanded(Some("ml"), "ml"), None);
        assert_eq!(toggle_expanded(Some("ml"), "genai"), Some("genai"));
    }

    #[test]
    fn test_gallery_caps_thumbnails() {
        let mut project = Project {
            images: &["a", "b"],
            ..PROJECTS[0]
        };
        assert_eq!(project.gallery(), (&["a", "b"][..], 0));

        project.images = &["a", "b", "c", "d", "e", "f"];
        assert_eq!(project.gallery(), (&["a", "b", "c", "d"][..], 2));

        project.images = &[];
        assert_eq!(project.gallery(), (&[][..], 0));
    }

    #[test]
    fn test_every_project_has_images() {
        assert!(PROJECTS.iter().all(|p| !p.images.is_empty()));
    }

    #[test]
    fn test_ids_are_unique() {
        let mut ids = PROJECTS.iter().map(|p| p.id).collect::<Vec<_>>();
        ids.extend(SKILL_CATEGORIES.iter().map(|c| c.id));
        let len = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), len);
    }

    #[test]
    fn test_proficiency_is_a_percentage() {
        assert!(SKILL_CATEGORIES
            .iter()
            .flat_map(|c| c.skills)
            .all(|s| s.proficiency <= 100));
    }

    #[test]
    fn test_owner_email_is_first_contact_method() {
        assert_eq!(CONTACT_METHODS[0].value, OWNER.email);
    }
}
