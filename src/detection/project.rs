//! Project type detection.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::error::Result;
use crate::host::Host;
use crate::ui::{Prompt, PromptOption, UserInterface};

/// Detected project type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectType {
    Docker,
    Web,
    Python,
    Unknown,
}

impl ProjectType {
    /// Types the user can pick when detection finds nothing.
    pub const CHOICES: [ProjectType; 3] =
        [ProjectType::Docker, ProjectType::Web, ProjectType::Python];

    /// Display name of the type.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Docker => "Docker",
            Self::Web => "Web",
            Self::Python => "Python",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ProjectType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "docker" => Ok(Self::Docker),
            "web" => Ok(Self::Web),
            "python" => Ok(Self::Python),
            _ => Err(format!("unknown project type: {}", s)),
        }
    }
}

/// Marker files per project type, in priority order.
///
/// The first type with any marker present wins.
pub const MARKERS: &[(ProjectType, &[&str])] = &[
    (ProjectType::Docker, &["Dockerfile", "docker-compose.yml"]),
    (ProjectType::Web, &["package.json"]),
    (ProjectType::Python, &["requirements.txt", "pyproject.toml"]),
];

/// Result of project detection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDetection {
    pub project_type: ProjectType,
    /// The marker that decided the type, if any.
    pub marker: Option<&'static str>,
}

/// Detects the project type from marker files.
pub struct ProjectDetector;

impl ProjectDetector {
    /// Detect the project type without asking the user.
    ///
    /// Returns [`ProjectType::Unknown`] when no marker file exists.
    pub fn detect(host: &dyn Host) -> ProjectDetection {
        for (project_type, markers) in MARKERS {
            if let Some(marker) = markers.iter().find(|m| host.file_exists(m)) {
                debug!("{} marks a {} project", marker, project_type);
                return ProjectDetection {
                    project_type: *project_type,
                    marker: Some(*marker),
                };
            }
        }

        ProjectDetection {
            project_type: ProjectType::Unknown,
            marker: None,
        }
    }

    /// Detect the project type, asking the user to choose when no marker
    /// file exists.
    pub fn resolve(host: &dyn Host, ui: &mut dyn UserInterface) -> Result<ProjectType> {
        let detection = Self::detect(host);
        if detection.project_type != ProjectType::Unknown {
            return Ok(detection.project_type);
        }

        debug!("no marker files found, asking for the project type");
        let answer = ui.prompt(&Self::choice_prompt())?;
        let chosen = answer.as_string().parse().unwrap_or(ProjectType::Unknown);

        Ok(chosen)
    }

    /// The single-choice prompt shown when detection finds nothing.
    pub fn choice_prompt() -> Prompt {
        let options = ProjectType::CHOICES
            .iter()
            .map(|t| PromptOption::new(t.name()))
            .collect();

        Prompt::select(
            "project_type",
            "Couldn't detect project type. What are you working on?",
            options,
        )
    }
}
