use regex::Regex;
use std::sync::OnceLock;
use url::Url;

/// Host serving Google Drive share links.
pub const DRIVE_HOST: &str = "drive.google.com";
pub const PDF_SUFFIX: &str = ".pdf";

const YOUTUBE_PATTERN: &str = r"^(https?://)?(www\.)?(youtube\.com|youtu\.be)/.+";

/// Field-level predicates referenced from the schema tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// At least one non-whitespace character.
    NonEmpty,
    /// Parses as an absolute URL.
    Url,
    /// Hosted on Google Drive (or a subdomain of it), or a URL whose path
    /// names a `.pdf` document.
    DocumentLink,
    /// Points at youtube.com or youtu.be.
    YoutubeLink,
}

impl Rule {
    pub fn check(&self, value: &str) -> bool {
        match self {
            Rule::NonEmpty => !value.trim().is_empty(),
            Rule::Url => Url::parse(value).is_ok(),
            Rule::DocumentLink => Url::parse(value).is_ok_and(|url| is_document_link(&url)),
            Rule::YoutubeLink => youtube_regex().is_match(value),
        }
    }
}

fn is_document_link(url: &Url) -> bool {
    let on_drive = url.host_str().is_some_and(|host| {
        host == DRIVE_HOST
            || host
                .strip_suffix(DRIVE_HOST)
                .is_some_and(|sub| sub.ends_with('.'))
    });
    on_drive || url.path().ends_with(PDF_SUFFIX)
}

fn youtube_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(YOUTUBE_PATTERN).expect("youtube pattern compiles"))
}
