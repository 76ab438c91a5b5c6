use directories::ProjectDirs;
use std::path::PathBuf;

/// Where the CLI looks for its files.
#[derive(Debug, Clone)]
pub struct Directories {
    /// Config directory (~/.config/zbx)
    pub config: PathBuf,

    /// Config file path
    pub config_file: PathBuf,

    /// Log directory (~/.cache/zbx)
    pub logs: PathBuf,
}

impl Directories {
    /// Standard per-user paths, or `None` when the home directory cannot be
    /// determined.
    #[must_use]
    pub fn new() -> Option<Self> {
        let project = ProjectDirs::from("", "", "zbx")?;
        let config = project.config_dir().to_path_buf();

        Some(Self {
            config_file: config.join("config.json"),
            logs: project.cache_dir().to_path_buf(),
            config,
        })
    }

    #[must_use]
    pub fn with_base(base: PathBuf) -> Self {
        Self {
            config_file: base.join("config.json"),
            logs: base.join("logs"),
            config: base,
        }
    }
}
