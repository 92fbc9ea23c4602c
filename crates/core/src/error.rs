use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Selection requires an interactive terminal.")]
    NotInteractive,

    #[error("There are no items to select from.")]
    EmptySelection,

    #[error("The sub process exited with non-success code.")]
    SubProcessExit,

    #[error("Error {} {} file at `{}`: {}", .action, .file_description, .path, .original)]
    Json {
        action: String,
        file_description: String,
        path: String,
        original: serde_json::Error,
    },

    #[error("IO error with {} file at path `{}`: {}", .file_description, .path, .original)]
    Io {
        file_description: String,
        path: String,
        original: std::io::Error,
    },

    #[error("STDIO error: {}", .0)]
    Stdio(#[from] std::io::Error),

    #[error("No runnable tool named `{}` was found.", .0)]
    ToolNotFound(String),

    #[error("Unknown provider: `{}`", .0)]
    UnknownProvider(String),

    #[error("Misc error: {}", .0)]
    Misc(String),
}

impl Error {
    pub fn json_error(
        action: String,
        file_description: String,
        path: String,
        original: serde_json::Error,
    ) -> Self {
        Self::Json {
            action,
            file_description,
            path,
            original,
        }
    }

    pub fn io_error(file_description: String, path: String, original: std::io::Error) -> Self {
        Self::Io {
            file_description,
            path,
            original,
        }
    }
}
