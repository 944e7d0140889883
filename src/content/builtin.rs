// Built-in Profile
// Content compiled into the binary, used when no profile file is configured

use super::profile::*;
use crate::charts::diagram::{DiagramEdge, DiagramNode};
use crate::charts::series::InfrastructureDemo;

impl Default for Profile {
    fn default() -> Self {
        Profile {
            page_title: "Elienock Lubaya Mulumba | Researcher Profile".to_string(),
            name: "Elienock Lubaya Mulumba".to_string(),
            title: "Software Engineer · Research Fellow (CHPC 2026) · ML Practitioner".to_string(),
            bio: vec![
                "A versatile Software Engineer with over 4 years of industry experience and a newly \
                 completed Advanced Diploma in Computer Science. I specialize in bridging the gap between \
                 high-level architectural design and low-level computational efficiency. My work focuses \
                 on building scalable digital ecosystems and applying Machine Learning to solve real-world \
                 logistical and social challenges."
                    .to_string(),
            ],
            badges: strings(&[
                "📍 Pretoria, South Africa",
                "🎓 Tshwane University of Technology",
                "🏢 Founder, Albo Tech SARL & Claudine Tech",
            ]),
            navigation: None,
            quick_links: vec![
                Link::new("GitHub", "https://github.com/Elienock"),
                Link::new("LinkedIn", "https://linkedin.com/"),
            ],
            metrics: vec![
                MetricTile::new("4+", "Years Experience"),
                MetricTile::new("2", "Tech Companies Founded"),
                MetricTile::new("5+", "Certifications"),
                MetricTile::new("2", "Countries (SA & DRC)"),
            ],
            education: vec![
                TimelineEntry {
                    year: "2026".to_string(),
                    title: "CHPC Coding Summer School — Research Fellow".to_string(),
                    subtitle: "University of Pretoria · High-Performance Computing".to_string(),
                    detail: None,
                },
                TimelineEntry {
                    year: "Completed".to_string(),
                    title: "Advanced Diploma in Computer Science".to_string(),
                    subtitle: "Tshwane University of Technology (TUT)".to_string(),
                    detail: Some(
                        "Specialization: Full-Stack Systems, Machine Learning & Predictive Modeling"
                            .to_string(),
                    ),
                },
            ],
            certifications: strings(&[
                "Machine Learning (SETA)",
                "Cisco Cybersecurity",
                "CHPC 2026 Research Fellow",
                "Full-Stack Development",
                "Data Science & Predictive Modeling",
            ]),
            flagship: Feature {
                heading: "Flagship Project — The Kneel".to_string(),
                card: Card::text(
                    "The Kneel: Sophisticated Digital Ecosystem Platform",
                    "Currently architecting The Kneel, a sophisticated digital ecosystem \
                     designed for specialized community connectivity and service management. The platform \
                     implements secure, invite-only authentication protocols, complex database relations, \
                     and high-performance backend logic to deliver a seamless, scalable user experience.",
                ),
                chart_title: "System Architecture".to_string(),
            },
            architecture: Architecture {
                nodes: vec![
                    DiagramNode::new(0.5, 0.9, "User Layer\n(Invite-Only Auth)", "#0f2027"),
                    DiagramNode::new(0.5, 0.72, "API Gateway\n& Security (SOS Protocols)", "#203a43"),
                    DiagramNode::new(0.15, 0.5, "Java Backend\n(Multi-threaded)", "#2c5364"),
                    DiagramNode::new(0.5, 0.5, "PHP Services\n(API Integration)", "#2c5364"),
                    DiagramNode::new(0.85, 0.5, "ML Pipeline\n(Predictive Models)", "#2c5364"),
                    DiagramNode::new(0.5, 0.28, "Complex Database\nRelations & Analytics", "#203a43"),
                    DiagramNode::new(0.5, 0.1, "Dashboard &\nBusiness Intelligence", "#0f2027"),
                ],
                edges: vec![
                    DiagramEdge::new(0.5, 0.84, 0.5, 0.78),
                    DiagramEdge::new(0.5, 0.66, 0.15, 0.56),
                    DiagramEdge::new(0.5, 0.66, 0.5, 0.56),
                    DiagramEdge::new(0.5, 0.66, 0.85, 0.56),
                    DiagramEdge::new(0.15, 0.44, 0.5, 0.34),
                    DiagramEdge::new(0.5, 0.44, 0.5, 0.34),
                    DiagramEdge::new(0.85, 0.44, 0.5, 0.34),
                    DiagramEdge::new(0.5, 0.22, 0.5, 0.16),
                ],
            },
            research: Feature {
                heading: "Research — Water Infrastructure Failure Prediction".to_string(),
                card: Card::text(
                    "Predictive Modeling for Public Infrastructure Failure",
                    "Developed predictive models for water infrastructure failure, utilizing real-world data sets \
                     to calculate Optimal Response Time (ORT) vs. Actual Repair Time (ART). \
                     Applied regression analysis, data cleaning, and ML techniques to identify failure patterns \
                     and optimize maintenance scheduling for public water systems.",
                ),
                chart_title: "Infrastructure Response Analysis (Simulated)".to_string(),
            },
            infrastructure: InfrastructureDemo::default(),
            ventures: vec![
                Card::text(
                    "Albo Tech SARL",
                    "A cross-border digital agency operating in South Africa and the DRC, delivering \
                     full-stack web solutions, user engagement tracking, and conversion optimization for \
                     international markets.",
                ),
                Card::text(
                    "Claudine Tech",
                    "Technology company specializing in digital solutions, managing full-stack deployments \
                     and tracking business intelligence metrics across multiple markets.",
                ),
            ],
            skills: vec![
                SkillRecord::new("Java", 92.0, "Backend"),
                SkillRecord::new("PHP", 88.0, "Backend"),
                SkillRecord::new("Python", 82.0, "Data & ML"),
                SkillRecord::new("JavaScript", 78.0, "Data & ML"),
                SkillRecord::new("SQL", 85.0, "Data & ML"),
                SkillRecord::new("Machine Learning", 80.0, "Data & ML"),
                SkillRecord::new("Data Science", 78.0, "Data & ML"),
                SkillRecord::new("Cybersecurity", 82.0, "Data & ML"),
                SkillRecord::new("API Integration", 86.0, "Architecture"),
                SkillRecord::new("Multi-threaded Apps", 88.0, "Architecture"),
                SkillRecord::new("Full-Stack Dev", 90.0, "Architecture"),
                SkillRecord::new("Cloud/HPC", 70.0, "Architecture"),
            ],
            skill_colors: vec![
                category("Backend", "#2c5364"),
                category("Data & ML", "#3d85c6"),
                category("Architecture", "#81b29a"),
            ],
            toolbox: strings(&[
                "Java", "PHP", "Python", "JavaScript", "SQL", "HTML/CSS",
                "Scikit-learn", "Pandas", "NumPy", "Matplotlib", "Plotly",
                "Spring Boot", "Laravel", "Node.js", "React",
                "MySQL", "PostgreSQL", "MongoDB",
                "Git", "GitHub", "Docker", "Linux",
                "Cisco Security", "SOS Protocols", "API Design",
                "Claude CLI", "HPC", "Streamlit",
            ]),
            competencies: vec![
                competency("Backend Engineering", 92.0),
                competency("Machine Learning", 80.0),
                competency("Cybersecurity", 82.0),
                competency("Full-Stack Development", 90.0),
                competency("Data Science", 78.0),
                competency("System Architecture", 85.0),
            ],
            accomplishments: vec![
                Card::text(
                    "🎓 Advanced Diploma in Computer Science",
                    "Completed at Tshwane University of Technology, specializing in full-stack systems, \
                     machine learning, and predictive modeling.",
                ),
                Card::text(
                    "🔬 CHPC 2026 Research Fellow",
                    "Selected for the Coding Summer School at the University of Pretoria to master \
                     High-Performance Computing.",
                ),
                Card::text(
                    "🏢 Founder — Albo Tech SARL & Claudine Tech",
                    "Demonstrated ability to take research-level concepts and commercialize them into \
                     functional, cross-border digital agencies operating in South Africa and the DRC.",
                ),
                Card::text(
                    "🔒 Cisco Certified in Cybersecurity",
                    "Expert in implementing SOS protocols and secure user-data handling across enterprise systems.",
                ),
            ],
            optimization: OptimizationSeries {
                before: vec![45.0, 42.0, 48.0, 44.0, 46.0, 43.0, 47.0, 45.0, 44.0, 46.0],
                after: vec![45.0, 38.0, 32.0, 28.0, 24.0, 21.0, 19.0, 17.0, 16.0, 15.0],
            },
            business: BusinessMetrics {
                quarters: strings(&["Q1 2024", "Q2 2024", "Q3 2024", "Q4 2024", "Q1 2025", "Q2 2025"]),
                markets: vec![
                    MarketSeries {
                        market: "SA".to_string(),
                        engagement: vec![320.0, 480.0, 620.0, 780.0, 950.0, 1150.0],
                        conversion: vec![3.2, 3.8, 4.1, 4.5, 5.0, 5.4],
                        bar_color: "#2c5364".to_string(),
                        line_color: "#f2cc8f".to_string(),
                        dashed: false,
                    },
                    MarketSeries {
                        market: "DRC".to_string(),
                        engagement: vec![150.0, 220.0, 340.0, 410.0, 530.0, 680.0],
                        conversion: vec![2.1, 2.5, 3.0, 3.3, 3.8, 4.2],
                        bar_color: "#81b29a".to_string(),
                        line_color: "#e07a5f".to_string(),
                        dashed: true,
                    },
                ],
            },
            interests: vec![
                interest("High-Performance Computing", 92.0),
                interest("Predictive Modeling", 88.0),
                interest("Scalable Systems Architecture", 90.0),
                interest("Machine Learning", 85.0),
                interest("Infrastructure Analytics", 82.0),
                interest("Cybersecurity", 80.0),
                interest("Data Engineering", 78.0),
                interest("Cross-Border Tech Solutions", 75.0),
            ],
            contact: vec![
                vec![
                    Card::lines(
                        "🎓 Affiliation",
                        &[
                            "Tshwane University of Technology",
                            "CHPC 2026 Research Fellow — University of Pretoria",
                        ],
                    ),
                    Card::lines(
                        "💼 Ventures",
                        &["Albo Tech SARL · Claudine Tech", "Cross-border digital agencies (SA & DRC)"],
                    ),
                ],
                vec![
                    Card::lines("🔗 Profiles", &[])
                        .with_link(Link::new("GitHub — Elienock", "https://github.com/Elienock"))
                        .with_link(Link::new("LinkedIn", "https://linkedin.com/")),
                    Card::lines("📍 Location", &["Pretoria, Gauteng, South Africa"]),
                ],
            ],
            acknowledgement: "Thanks for reaching out! I'll get back to you soon.".to_string(),
            footer: "© 2026 Elienock Lubaya Mulumba · Albo Tech SARL & Claudine Tech".to_string(),
        }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn category(category: &str, color: &str) -> CategoryColor {
    CategoryColor {
        category: category.to_string(),
        color: color.to_string(),
    }
}

fn competency(axis: &str, value: f64) -> Competency {
    Competency {
        axis: axis.to_string(),
        value,
    }
}

fn interest(topic: &str, level: f64) -> Interest {
    Interest {
        topic: topic.to_string(),
        level,
    }
}
