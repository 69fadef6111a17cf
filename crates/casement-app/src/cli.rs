use clap::Parser;

/// Casement: an HTML-rendered desktop shell with a page/host call bridge.
#[derive(Parser, Debug)]
#[command(name = "casement", version, about)]
pub struct Args {
    /// URL to load instead of the bundled demo page.
    #[arg(short = 'u', long)]
    pub url: Option<String>,

    /// Window title override.
    #[arg(short = 't', long)]
    pub title: Option<String>,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Log level override (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_args_is_valid() {
        let args = Args::try_parse_from(["casement"]).unwrap();
        assert!(args.url.is_none());
        assert!(args.title.is_none());
        assert!(args.config.is_none());
    }

    #[test]
    fn overrides_parse() {
        let args = Args::try_parse_from([
            "casement",
            "--url",
            "https://example.com",
            "--title",
            "Demo",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert_eq!(args.url.as_deref(), Some("https://example.com"));
        assert_eq!(args.title.as_deref(), Some("Demo"));
        assert_eq!(args.log_level.as_deref(), Some("debug"));
    }
}
