use std::path::PathBuf;

use crate::error::{AppError, AppResult};
use crate::theme::ThemeMode;

pub const USAGE: &str = "\
usage: mine-ui [--theme <light|dark|system>] [--output <path>]

Resolves the light/dark theme, optionally recording a new choice, and
renders the component demo page as HTML (stdout unless --output is given).";

/// Options parsed from the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StartupConfig {
    pub theme: Option<ThemeMode>,
    pub output: Option<PathBuf>,
    pub show_help: bool,
}

impl StartupConfig {
    pub fn from_args() -> AppResult<Self> {
        Self::parse(std::env::args().skip(1))
    }

    pub fn parse<I>(args: I) -> AppResult<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = Self::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            let (flag, inline) = match arg.split_once('=') {
                Some((flag, value)) if flag.starts_with("--") => {
                    (flag.to_string(), Some(value.to_string()))
                }
                _ => (arg, None),
            };

            match flag.as_str() {
                "-h" | "--help" => config.show_help = true,
                "-t" | "--theme" => {
                    let raw = flag_value(&flag, inline, &mut args)?;
                    let mode = raw
                        .parse::<ThemeMode>()
                        .map_err(|err| AppError::Usage(err.to_string()))?;
                    config.theme = Some(mode);
                }
                "-o" | "--output" => {
                    config.output = Some(PathBuf::from(flag_value(&flag, inline, &mut args)?));
                }
                other => {
                    return Err(AppError::Usage(format!("unexpected argument '{other}'")));
                }
            }
        }

        Ok(config)
    }
}

fn flag_value(
    flag: &str,
    inline: Option<String>,
    rest: &mut impl Iterator<Item = String>,
) -> AppResult<String> {
    inline
        .or_else(|| rest.next())
        .filter(|value| !value.is_empty())
        .ok_or_else(|| AppError::Usage(format!("missing value for {flag}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> AppResult<StartupConfig> {
        StartupConfig::parse(args.iter().map(|arg| arg.to_string()))
    }

    #[test]
    fn no_arguments_keeps_stored_theme() {
        assert_eq!(parse(&[]).unwrap(), StartupConfig::default());
    }

    #[test]
    fn parses_theme_and_output() {
        let config = parse(&["--theme", "dark", "-o", "/tmp/demo.html"]).unwrap();
        assert_eq!(config.theme, Some(ThemeMode::Dark));
        assert_eq!(config.output, Some(PathBuf::from("/tmp/demo.html")));
        assert!(!config.show_help);
    }

    #[test]
    fn parses_inline_values() {
        let config = parse(&["--theme=system", "--output=page.html"]).unwrap();
        assert_eq!(config.theme, Some(ThemeMode::System));
        assert_eq!(config.output, Some(PathBuf::from("page.html")));
    }

    #[test]
    fn rejects_unknown_theme() {
        let err = parse(&["--theme", "sepia"]).unwrap_err();
        assert!(matches!(err, AppError::Usage(message) if message.contains("sepia")));
    }

    #[test]
    fn rejects_missing_value() {
        let err = parse(&["--output"]).unwrap_err();
        assert!(matches!(err, AppError::Usage(message) if message.contains("--output")));
    }

    #[test]
    fn rejects_unexpected_argument() {
        let err = parse(&["--verbose"]).unwrap_err();
        assert!(matches!(err, AppError::Usage(message) if message.contains("--verbose")));
    }

    #[test]
    fn help_flag_is_recorded() {
        assert!(parse(&["-h"]).unwrap().show_help);
    }
}
