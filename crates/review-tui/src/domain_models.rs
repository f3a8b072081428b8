//! Domain models shared across state, reducers and views.

use strum::{Display, EnumIter};

/// Highlighting language offered in the language selector.
///
/// The selection feeds the syntax highlighter and the header indicator;
/// it does not change what is submitted to the review endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumIter)]
pub enum Language {
    #[default]
    #[strum(to_string = "JavaScript")]
    Javascript,
    #[strum(to_string = "TypeScript")]
    Typescript,
    #[strum(to_string = "Python")]
    Python,
    #[strum(to_string = "Java")]
    Java,
    #[strum(to_string = "C#")]
    Csharp,
    #[strum(to_string = "PHP")]
    Php,
    #[strum(to_string = "Ruby")]
    Ruby,
    #[strum(to_string = "Go")]
    Go,
    #[strum(to_string = "C")]
    C,
    #[strum(to_string = "C++")]
    Cpp,
    #[strum(to_string = "Other")]
    Other,
}

impl Language {
    /// Token handed to the syntax highlighter. Tokens syntect does not know
    /// (typescript, other) fall back to the JavaScript grammar there.
    pub fn syntax_token(self) -> &'static str {
        match self {
            Language::Javascript => "js",
            Language::Typescript => "typescript",
            Language::Python => "python",
            Language::Java => "java",
            Language::Csharp => "cs",
            Language::Php => "php",
            Language::Ruby => "ruby",
            Language::Go => "go",
            Language::C => "c",
            Language::Cpp => "cpp",
            Language::Other => "other",
        }
    }

    /// Identifier used in config files and logs.
    pub fn id(self) -> &'static str {
        match self {
            Language::Javascript => "javascript",
            Language::Typescript => "typescript",
            Language::Python => "python",
            Language::Java => "java",
            Language::Csharp => "csharp",
            Language::Php => "php",
            Language::Ruby => "ruby",
            Language::Go => "go",
            Language::C => "c",
            Language::Cpp => "cpp",
            Language::Other => "other",
        }
    }

    /// Parse a config identifier; unknown values map to the default.
    pub fn from_id(id: &str) -> Self {
        match id.to_lowercase().as_str() {
            "javascript" | "js" => Language::Javascript,
            "typescript" | "ts" => Language::Typescript,
            "python" => Language::Python,
            "java" => Language::Java,
            "csharp" | "c#" => Language::Csharp,
            "php" => Language::Php,
            "ruby" => Language::Ruby,
            "go" => Language::Go,
            "c" => Language::C,
            "cpp" | "c++" => Language::Cpp,
            _ => Language::Other,
        }
    }
}

/// Lifecycle of a review submission. Exactly one variant holds at a time;
/// at most one submission is in flight.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RequestState {
    /// No submission yet (or nothing since startup)
    #[default]
    Idle,
    /// A request is in flight; further submissions are rejected
    Loading,
    /// The endpoint answered with a review (markdown text)
    Success(String),
    /// The request failed; holds the user-facing message only
    Error(String),
}

impl RequestState {
    pub fn is_loading(&self) -> bool {
        matches!(self, RequestState::Loading)
    }
}
