use std::fmt;
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    DirectoryCreate {
        path: PathBuf,
        source: std::io::Error,
    },
    FileWrite {
        path: PathBuf,
        source: std::io::Error,
    },
    FileRemove {
        path: PathBuf,
        source: std::io::Error,
    },
    FileRename {
        from: PathBuf,
        to: PathBuf,
        source: std::io::Error,
    },
    FileReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    TomlParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
    YamlRender(serde_yaml::Error),
    CommandSpawn {
        program: String,
        source: std::io::Error,
    },
    InvalidConfig {
        reason: String,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::DirectoryCreate { path, source } => {
                write!(
                    f,
                    "failed to create directory: {} ({})",
                    path.display(),
                    source
                )
            }
            Error::FileWrite { path, source } => {
                write!(f, "failed to write file: {} ({})", path.display(), source)
            }
            Error::FileRemove { path, source } => {
                write!(f, "failed to remove file: {} ({})", path.display(), source)
            }
            Error::FileRename { from, to, source } => {
                write!(
                    f,
                    "failed to rename {} to {} ({})",
                    from.display(),
                    to.display(),
                    source
                )
            }
            Error::FileReadError { path, source } => {
                write!(f, "failed to read file: {} ({})", path.display(), source)
            }
            Error::TomlParseError { path, source } => {
                write!(
                    f,
                    "failed to parse toml file: {} ({})",
                    path.display(),
                    source
                )
            }
            Error::YamlRender(err) => {
                write!(f, "failed to render yaml document: {}", err)
            }
            Error::CommandSpawn { program, source } => {
                write!(f, "failed to run '{}': {}", program, source)
            }
            Error::InvalidConfig { reason } => {
                write!(f, "invalid configuration: {}", reason)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::DirectoryCreate { source, .. } => Some(source),
            Error::FileWrite { source, .. } => Some(source),
            Error::FileRemove { source, .. } => Some(source),
            Error::FileRename { source, .. } => Some(source),
            Error::FileReadError { source, .. } => Some(source),
            Error::TomlParseError { source, .. } => Some(source),
            Error::YamlRender(err) => Some(err),
            Error::CommandSpawn { source, .. } => Some(source),
            Error::InvalidConfig { .. } => None,
        }
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(err: serde_yaml::Error) -> Self {
        Error::YamlRender(err)
    }
}

// helpers that attach the offending path to raw io errors
impl Error {
    pub fn directory_create(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::DirectoryCreate {
            path: path.into(),
            source,
        }
    }

    pub fn file_write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::FileWrite {
            path: path.into(),
            source,
        }
    }
}
