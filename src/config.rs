use anyhow::{bail, Context, Result};

pub const USAGE: &str = "usage: minigrep [-d|--debug] -E <pattern>";

/// Command-line options for the binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub pattern: String,
    pub debug: bool,
}

impl Config {
    /// Parse arguments with the program name already skipped.
    pub fn from_args<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let (debug, args) = args.into_iter().fold((false, vec![]), |(debug, mut args), arg| {
            if arg == "--debug" || arg == "-d" {
                (true, args)
            } else {
                args.push(arg);
                (debug, args)
            }
        });

        let mut args = args.into_iter();
        if args.next().as_deref() != Some("-E") {
            bail!("expected first argument to be '-E'\n{USAGE}");
        }
        let pattern = args.next().with_context(|| format!("missing pattern\n{USAGE}"))?;
        if let Some(extra) = args.next() {
            bail!("unexpected argument {extra:?}\n{USAGE}");
        }

        Ok(Self { pattern, debug })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_from_args() {
        let config = Config::from_args(args(&["-E", r"\d"])).unwrap();
        assert_eq!(config.pattern, r"\d");
        assert!(!config.debug);

        let config = Config::from_args(args(&["--debug", "-E", "a"])).unwrap();
        assert!(config.debug);
        assert_eq!(config.pattern, "a");

        let config = Config::from_args(args(&["-E", "", "-d"])).unwrap();
        assert!(config.debug);
        assert_eq!(config.pattern, "");
    }

    #[test]
    fn test_usage_errors() {
        assert!(Config::from_args(args(&[])).is_err());
        assert!(Config::from_args(args(&["a"])).is_err());
        assert!(Config::from_args(args(&["-E"])).is_err());
        assert!(Config::from_args(args(&["-E", "a", "b"])).is_err());
    }
}
