//! Seed snapshot loaded into storage at startup.
//!
//! The built-in records stand in for a database. A JSON file with the same shape can replace them.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::{
    AchievementIcon, ArticleCategory, EventCategory, MemberCategory, NewAchievement, NewArticle,
    NewEvent, NewTeamMember,
};

const LINKEDIN: &str = "https://linkedin.com";

/// Immutable set of records used to populate storage.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SeedData {
    #[serde(default)]
    pub team_members: Vec<NewTeamMember>,
    #[serde(default)]
    pub events: Vec<NewEvent>,
    #[serde(default)]
    pub articles: Vec<NewArticle>,
    #[serde(default)]
    pub achievements: Vec<NewAchievement>,
}

impl SeedData {
    /// Load a snapshot from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self, AppError> {
        let raw = std::fs::read_to_string(path)?;
        let seed = serde_json::from_str(&raw)?;
        Ok(seed)
    }

    /// Check every record before it reaches storage.
    pub fn validate(&self) -> Result<(), AppError> {
        self.team_members.iter().try_for_each(NewTeamMember::validate)?;
        self.events.iter().try_for_each(NewEvent::validate)?;
        self.articles.iter().try_for_each(NewArticle::validate)?;
        self.achievements.iter().try_for_each(NewAchievement::validate)?;

        let featured = self.articles.iter().filter(|a| a.featured).count();
        if featured > 1 {
            tracing::warn!(
                "{} articles are marked featured; only the first will be shown",
                featured
            );
        }

        Ok(())
    }
}

/// The built-in club records.
pub fn builtin() -> SeedData {
    SeedData {
        team_members: team_members(),
        events: events(),
        articles: articles(),
        achievements: achievements(),
    }
}

fn member(
    name: &str,
    role: &str,
    category: MemberCategory,
    department: &str,
    year: Option<&str>,
    avatar_color: &str,
) -> NewTeamMember {
    NewTeamMember {
        name: name.to_string(),
        role: role.to_string(),
        category,
        department: Some(department.to_string()),
        year: year.map(str::to_string),
        linked_in: Some(LINKEDIN.to_string()),
        avatar_color: avatar_color.to_string(),
        image_url: None,
    }
}

fn team_members() -> Vec<NewTeamMember> {
    use MemberCategory::*;

    vec![
        member("Dr. Rajesh Kumar", "Faculty Advisor", Faculty, "CSE Dept.", None, "#0891b2"),
        member("Prof. Priya Sharma", "Co-Advisor", Faculty, "IT Dept.", None, "#059669"),
        member("Aditya Verma", "President", Student, "4th Year CSE", Some("4th Year"), "#06b6d4"),
        member("Sneha Patel", "Vice President", Student, "3rd Year AI/ML", Some("3rd Year"), "#0891b2"),
        member("Rohan Gupta", "Technical Lead", Student, "4th Year CSE", Some("4th Year"), "#059669"),
        member("Ananya Singh", "Events Head", Student, "3rd Year IT", Some("3rd Year"), "#10b981"),
        member("Karthik Reddy", "Media Lead", Student, "2nd Year CSE", Some("2nd Year"), "#0891b2"),
        member("Vikram Joshi", "Workshop Coordinator", Core, "3rd Year CSE", Some("3rd Year"), "#06b6d4"),
        member("Meera Nair", "Project Manager", Core, "3rd Year AI/ML", Some("3rd Year"), "#059669"),
        member("Arjun Malhotra", "Content Writer", Core, "2nd Year IT", Some("2nd Year"), "#0891b2"),
        member("Divya Kapoor", "Social Media Manager", Core, "2nd Year CSE", Some("2nd Year"), "#10b981"),
        member("Rahul Iyer", "Technical Member", Core, "3rd Year CSE", Some("3rd Year"), "#06b6d4"),
        member("Pooja Desai", "Event Organizer", Core, "2nd Year AI/ML", Some("2nd Year"), "#059669"),
    ]
}

#[allow(clippy::too_many_arguments)]
fn event(
    title: &str,
    description: &str,
    category: EventCategory,
    date: &str,
    month: &str,
    year: &str,
    participants: u32,
    tags: &[&str],
    images: u32,
) -> NewEvent {
    NewEvent {
        title: title.to_string(),
        description: description.to_string(),
        category,
        date: date.to_string(),
        month: month.to_string(),
        year: year.to_string(),
        participants,
        tags: tags.iter().map(|t| t.to_string()).collect(),
        images,
    }
}

fn events() -> Vec<NewEvent> {
    use EventCategory::*;

    vec![
        event(
            "AI/ML Workshop Series 2025",
            "Comprehensive hands-on workshop covering fundamentals of machine learning, deep learning frameworks, and practical implementation of neural networks.",
            Workshop,
            "Jan 15",
            "January",
            "2025",
            120,
            &["Machine Learning", "Python", "TensorFlow"],
            4,
        ),
        event(
            "Smart India Hackathon 2025",
            "National-level hackathon where our team developed an AI-powered healthcare solution, securing first place in the AI/ML category.",
            Hackathon,
            "Feb 22",
            "February",
            "2025",
            80,
            &["Healthcare", "Computer Vision", "Innovation"],
            3,
        ),
        event(
            "Guest Lecture: Future of AI",
            "Industry expert from a leading tech company shared insights on emerging AI trends, career opportunities, and the future of artificial intelligence.",
            Seminar,
            "Mar 10",
            "March",
            "2025",
            200,
            &["Industry Insights", "Career", "Trends"],
            3,
        ),
        event(
            "Computer Vision Showcase",
            "Final year project presentations showcasing innovative applications of computer vision in real-world scenarios including object detection and image segmentation.",
            Project,
            "Apr 18",
            "April",
            "2025",
            60,
            &["Computer Vision", "Projects", "Innovation"],
            4,
        ),
        event(
            "Deep Learning Bootcamp",
            "Intensive 3-day bootcamp covering advanced deep learning concepts, architectures, and hands-on implementation of state-of-the-art models.",
            Workshop,
            "Aug 5",
            "August",
            "2024",
            100,
            &["Deep Learning", "Neural Networks", "Hands-on"],
            3,
        ),
        event(
            "Inter-College AI Competition",
            "Hosted a regional AI competition bringing together students from 15 colleges to solve real-world problems using machine learning.",
            Competition,
            "Sep 14",
            "September",
            "2024",
            250,
            &["Competition", "Inter-College", "ML"],
            4,
        ),
        event(
            "Tech Company Visit",
            "Organized visit to a leading AI startup, providing members with insights into industry practices and networking opportunities.",
            Event,
            "Oct 8",
            "October",
            "2024",
            40,
            &["Industry Visit", "Networking", "Career"],
            3,
        ),
        event(
            "Research Paper Workshop",
            "Workshop on writing and publishing research papers in AI/ML, with guidance from faculty and published researchers.",
            Workshop,
            "Nov 12",
            "November",
            "2024",
            75,
            &["Research", "Academic", "Publications"],
            3,
        ),
        event(
            "Annual Tech Fest",
            "Organized AI exhibition showcasing student projects, hosting technical talks, and conducting coding competitions.",
            Event,
            "Dec 20",
            "December",
            "2024",
            300,
            &["Exhibition", "Projects", "Fest"],
            4,
        ),
        event(
            "Club Inauguration",
            "Grand launch of the AI Club with distinguished guests, faculty support, and enthusiastic student participation.",
            Event,
            "Jul 1",
            "July",
            "2023",
            150,
            &["Inauguration", "Milestone", "Launch"],
            4,
        ),
        event(
            "Python for AI Workshop",
            "Foundational workshop introducing Python programming for AI applications, covering NumPy, Pandas, and Scikit-learn.",
            Workshop,
            "Aug 20",
            "August",
            "2023",
            90,
            &["Python", "Basics", "Programming"],
            3,
        ),
        event(
            "First ML Project Demo",
            "Student teams presented their first machine learning projects, demonstrating practical applications of course concepts.",
            Project,
            "Nov 25",
            "November",
            "2023",
            50,
            &["Projects", "ML", "Demo"],
            3,
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn article(
    title: &str,
    excerpt: &str,
    category: ArticleCategory,
    author: &str,
    author_avatar: &str,
    date: &str,
    read_time: &str,
    featured: bool,
) -> NewArticle {
    NewArticle {
        title: title.to_string(),
        excerpt: excerpt.to_string(),
        category,
        author: author.to_string(),
        author_avatar: author_avatar.to_string(),
        date: date.to_string(),
        read_time: read_time.to_string(),
        featured,
    }
}

fn articles() -> Vec<NewArticle> {
    use ArticleCategory::*;

    vec![
        article(
            "Getting Started with Machine Learning: A Comprehensive Guide",
            "Discover the fundamentals of machine learning, essential algorithms, and practical tips for beginners looking to enter the exciting world of AI. Learn about supervised and unsupervised learning with hands-on examples.",
            Tutorials,
            "Aditya Verma",
            "#0891b2",
            "Mar 15, 2025",
            "8 min read",
            true,
        ),
        article(
            "Recap: AI Workshop 2025 Success Story",
            "Over 120 students participated in our latest workshop covering deep learning and neural networks. See highlights and key takeaways.",
            Events,
            "Sneha Patel",
            "#059669",
            "Mar 10, 2025",
            "5 min read",
            false,
        ),
        article(
            "Understanding Neural Networks: Architecture and Training",
            "Deep dive into neural network architectures, backpropagation, and optimization techniques used in modern deep learning.",
            Tutorials,
            "Rohan Gupta",
            "#06b6d4",
            "Mar 5, 2025",
            "12 min read",
            false,
        ),
        article(
            "Our Award-Winning Chatbot: Development Journey",
            "Learn how our team built an intelligent chatbot that won first place at the national hackathon using NLP and transformers.",
            Projects,
            "Vikram Joshi",
            "#10b981",
            "Feb 28, 2025",
            "10 min read",
            false,
        ),
        article(
            "Industry Trends in AI 2025: What to Expect",
            "Explore emerging trends in artificial intelligence including multimodal AI, edge computing, and ethical AI development.",
            Insights,
            "Ananya Singh",
            "#0891b2",
            "Feb 20, 2025",
            "7 min read",
            false,
        ),
        article(
            "Alumni Interview: Journey to AI Engineer at Google",
            "Former club president shares insights on career progression, interview preparation, and working on cutting-edge AI projects.",
            Insights,
            "Divya Kapoor",
            "#059669",
            "Feb 15, 2025",
            "9 min read",
            false,
        ),
        article(
            "Building Your First Convolutional Neural Network",
            "Step-by-step tutorial on implementing CNN for image classification using TensorFlow and Keras frameworks.",
            Tutorials,
            "Karthik Reddy",
            "#06b6d4",
            "Feb 10, 2025",
            "15 min read",
            false,
        ),
        article(
            "Hackathon Success Story: From Idea to Implementation",
            "Behind the scenes look at how we developed our winning solution in just 24 hours during Smart India Hackathon.",
            Events,
            "Meera Nair",
            "#10b981",
            "Feb 5, 2025",
            "6 min read",
            false,
        ),
        article(
            "Deep Dive into Transformers and Attention Mechanisms",
            "Comprehensive exploration of transformer architecture, self-attention, and their applications in NLP and computer vision.",
            Research,
            "Arjun Malhotra",
            "#0891b2",
            "Jan 30, 2025",
            "14 min read",
            false,
        ),
    ]
}

fn achievement(
    title: &str,
    description: &str,
    category: &str,
    date: &str,
    icon: AchievementIcon,
) -> NewAchievement {
    NewAchievement {
        title: title.to_string(),
        description: description.to_string(),
        category: category.to_string(),
        date: date.to_string(),
        icon,
    }
}

fn achievements() -> Vec<NewAchievement> {
    use AchievementIcon::*;

    vec![
        achievement(
            "Smart India Hackathon Winner",
            "First place in AI/ML category with an innovative healthcare solution using computer vision",
            "Competition",
            "February 2025",
            Trophy,
        ),
        achievement(
            "Published in IEEE Conference",
            "Research paper on neural architecture search accepted at international conference",
            "Research",
            "January 2025",
            Document,
        ),
        achievement(
            "Collaboration with Tech Giants",
            "Established partnerships with leading AI companies for mentorship and internships",
            "Partnership",
            "December 2024",
            Handshake,
        ),
        achievement(
            "15+ Members Placed in Top Companies",
            "Club members secured positions at FAANG and leading AI startups worldwide",
            "Placements",
            "November 2024",
            Briefcase,
        ),
        achievement(
            "Best Student Chapter Award",
            "Recognized as the most active and impactful AI student organization in the region",
            "Award",
            "October 2024",
            Medal,
        ),
        achievement(
            "AI Certification Program Launch",
            "Launched comprehensive certification program in partnership with industry leaders",
            "Certification",
            "September 2024",
            Badge,
        ),
    ]
}
