/// How the `query` command presents rows
///
/// Raw rows carry the flattened record fields untouched, for widgets that
/// render cells themselves. Html rows are pre-rendered by `CellFormatter`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    #[default]
    Raw,
    Html,
}

impl std::str::FromStr for RenderMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "raw" | "json" => Ok(RenderMode::Raw),
            "html" => Ok(RenderMode::Html),
            _ => Err(format!(
                "Invalid render mode: {}. Please specify 'raw' or 'html'",
                s
            )),
        }
    }
}

impl std::fmt::Display for RenderMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderMode::Raw => write!(f, "raw"),
            RenderMode::Html => write!(f, "html"),
        }
    }
}
