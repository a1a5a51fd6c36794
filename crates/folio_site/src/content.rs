//! Static content
//!
//! Projects ship as an embedded JSON asset; the smaller collections are plain
//! statics. Views never mutate any of it.

use crate::error::Result;
use serde::{Deserialize, Serialize};

const PROJECTS_JSON: &str = include_str!("../content/projects.json");

/// Number of featured projects shown on the home page
pub const FEATURED_LIMIT: usize = 3;

/// Tech tags shown per catalog card
pub const CATALOG_TECH_LIMIT: usize = 6;

/// A project case study
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Project {
    pub id: u32,
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub featured: bool,
    pub image: String,
    pub tech: Vec<String>,
    pub short_description: String,
    pub long_description: String,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub responsibilities: Vec<String>,
    #[serde(default)]
    pub results: Vec<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub live_url: Option<String>,
}

impl Project {
    /// Tech tags for a catalog card
    pub fn card_tech(&self) -> &[String] {
        &self.tech[..self.tech.len().min(CATALOG_TECH_LIMIT)]
    }
}

/// Read-only, ordered project collection
#[derive(Clone, Debug)]
pub struct ContentStore {
    projects: Vec<Project>,
}

impl ContentStore {
    /// Parse the embedded asset
    pub fn load() -> Result<Self> {
        Self::from_json(PROJECTS_JSON)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let projects: Vec<Project> = serde_json::from_str(json)?;
        tracing::debug!("ContentStore: loaded {} projects", projects.len());
        Ok(Self { projects })
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// The first few projects marked featured, in catalog order
    pub fn featured(&self) -> impl Iterator<Item = &Project> {
        self.projects
            .iter()
            .filter(|p| p.featured)
            .take(FEATURED_LIMIT)
    }

    pub fn find(&self, slug: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.slug == slug)
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

// =============================================================================
// Profile
// =============================================================================

pub struct Profile {
    pub name: &'static str,
    pub headline: &'static str,
    pub summary: &'static str,
    pub email: &'static str,
    pub location: &'static str,
    pub github: &'static str,
    pub linkedin: &'static str,
}

pub const PROFILE: Profile = Profile {
    name: "Hemanth Katikala Muniraj",
    headline: "Robotics Engineer",
    summary: "I build deployable robotics systems by integrating ROS2, LiDAR perception, \
              localization, planning, and control, and I thrive on debugging hard problems \
              until the robot works reliably in the real world.",
    email: "hemanthh@umich.edu",
    location: "Dearborn, Michigan, USA",
    github: "https://github.com/Hemanth-Katikala-Muniraj",
    linkedin: "https://www.linkedin.com/in/hemanth-muniraj/",
};

/// Paragraphs of the about section
pub const ABOUT: [&str; 2] = [
    "I'm a Robotics Engineer and graduate student focused on building autonomous systems that \
     work in real conditions. I enjoy taking a robotics problem from raw sensor data to stable \
     robot behavior, then iterating until the system is dependable and easy to reproduce.",
    "My work spans ROS2-based autonomy and LiDAR perception pipelines, state estimation and \
     motion planning, and end-to-end system integration.",
];

/// `(value, caption)` badges under the about text
pub const HIGHLIGHTS: [(&str, &str); 6] = [
    ("ROS2", "Autonomy & Integration"),
    ("LiDAR", "Perception Pipelines"),
    ("Planning", "A* / DWA / Replanning"),
    ("6+", "Robotics Projects"),
    ("3+", "End-to-End Systems"),
    ("100%", "Hands-on Build Mindset"),
];

// =============================================================================
// Skills & Experience
// =============================================================================

pub struct Skill {
    pub name: &'static str,
    /// Proficiency, 0 to 100
    pub level: u8,
}

pub const SKILLS: [Skill; 12] = [
    Skill { name: "ROS2 (Nodes, Topics, TF)", level: 88 },
    Skill { name: "C++ (Robotics Software)", level: 84 },
    Skill { name: "Python (Tools + ML)", level: 86 },
    Skill { name: "LiDAR (PointCloud2, RViz)", level: 82 },
    Skill { name: "Localization & SLAM", level: 80 },
    Skill { name: "Motion Planning (A*, DWA)", level: 82 },
    Skill { name: "Control & Estimation (EKF)", level: 80 },
    Skill { name: "Computer Vision (YOLO)", level: 78 },
    Skill { name: "Git & Reproducible Workflows", level: 85 },
    Skill { name: "Simulation (Gazebo/Coppelia)", level: 76 },
    Skill { name: "Docker & Dev Environments", level: 74 },
    Skill { name: "Debugging & Integration", level: 90 },
];

pub struct Experience {
    pub role: &'static str,
    pub company: &'static str,
    pub location: &'static str,
    pub date: &'static str,
    pub bullets: &'static [&'static str],
}

pub const EXPERIENCE: [Experience; 4] = [
    Experience {
        role: "Industrial Automation and Artificial Intelligence Intern",
        company: "AliveMind",
        location: "Cerritos, CA, USA",
        date: "Sept 2025 – Present",
        bullets: &[
            "Directed Robotics and AI teams for the Robot Barista Project, designing an intelligent UR5 workflow that integrates automation, perception, and NLP-based interaction.",
            "Built a multi-modal AI stack combining speech-to-text (Whisper), text-to-speech (gTTS), and transformer-based intent recognition (BERT/GPT), enabling conversational order handling and emotion-aware responses.",
            "Completed eye-in-hand calibration (OpenCV) achieving ±1.5 mm TCP repeatability, with end-to-end response times under 30 s and ≥ 95% task accuracy.",
        ],
    },
    Experience {
        role: "Computer Vision and 3D Perception Intern",
        company: "BotClub PVT LTD",
        location: "Visakhapatnam, India",
        date: "June 2023 – Nov 2023",
        bullets: &[
            "Designed and trained deep learning models using PyTorch, TensorFlow, and YOLOv11 for real-time object detection and classification, improving detection accuracy by 28%.",
            "Developed computer vision pipelines for defect detection, object localization, and 3D reconstruction using OpenCV and PyTorch3D.",
            "Implemented data preprocessing, augmentation, and hyperparameter tuning workflows to optimize mAP, precision, and recall.",
        ],
    },
    Experience {
        role: "Research Fellow – Computer Vision and Perception",
        company: "Vellore Institute of Technology",
        location: "Amaravathi, India",
        date: "Mar 2023 – May 2023",
        bullets: &[
            "Authored a paper on vehicle detection using computer vision.",
            "Developed algorithms for real-time vehicle classification, significantly improving accuracy.",
            "Collaborated on robotics projects for transportation analysis in the context of Advanced Driver Assistance Systems.",
        ],
    },
    Experience {
        role: "Research Fellow – Embedded Systems and Robotics",
        company: "Vellore Institute of Technology",
        location: "Amaravathi, India",
        date: "Dec 2023 – Apr 2024",
        bullets: &[
            "Co-authored IEEE paper: \"AGRIFOG: Fog-Assisted IoT Enabled Agriculture Monitoring System\", implementing MQTT and Google Drive API for edge-cloud communication.",
            "Designed a Fog node-based system architecture using ESP32 and Raspberry Pi for real-time environmental sensing.",
            "Implemented MQTT communication & REST APIs, ensuring fault-tolerant data handling.",
        ],
    },
];

// =============================================================================
// Navigation
// =============================================================================

/// A menu entry that scrolls to a section of the home page
pub struct NavItem {
    pub name: &'static str,
    /// Section anchor
    pub id: &'static str,
}

pub const NAV_ITEMS: [NavItem; 5] = [
    NavItem { name: "Home", id: "hero" },
    NavItem { name: "About me", id: "about" },
    NavItem { name: "Experience", id: "experience" },
    NavItem { name: "Projects", id: "projects" },
    NavItem { name: "Contact", id: "contact" },
];
