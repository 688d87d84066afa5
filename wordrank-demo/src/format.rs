//! Output formats for a ranking.

use clap::ValueEnum;
use wordrank_types::WordCount;

/// How the ranking is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// `[coding=3, powerful=2]`
    #[default]
    Entries,
    /// `[('coding', 3), ('powerful', 2)]`
    Pairs,
    /// `[{"word":"coding","count":3}, ...]`
    Json,
}

/// Renders `ranking` in the requested format.
pub fn render(ranking: &[WordCount], format: OutputFormat) -> Result<String, serde_json::Error> {
    let out = match format {
        OutputFormat::Entries => {
            let items: Vec<String> = ranking.iter().map(ToString::to_string).collect();
            format!("[{}]", items.join(", "))
        }
        OutputFormat::Pairs => {
            let items: Vec<String> = ranking
                .iter()
                .map(|e| format!("('{}', {})", e.word, e.count))
                .collect();
            format!("[{}]", items.join(", "))
        }
        OutputFormat::Json => serde_json::to_string(ranking)?,
    };
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<WordCount> {
        vec![
            WordCount::new("coding", 3),
            WordCount::new("powerful", 2),
            WordCount::new("python", 1),
        ]
    }

    #[test]
    fn entries_format() {
        let out = render(&sample(), OutputFormat::Entries).unwrap();
        assert_eq!(out, "[coding=3, powerful=2, python=1]");
    }

    #[test]
    fn pairs_format() {
        let out = render(&sample(), OutputFormat::Pairs).unwrap();
        assert_eq!(out, "[('coding', 3), ('powerful', 2), ('python', 1)]");
    }

    #[test]
    fn json_format() {
        let out = render(&sample()[..1], OutputFormat::Json).unwrap();
        assert_eq!(out, r#"[{"word":"coding","count":3}]"#);
    }

    #[test]
    fn empty_ranking() {
        assert_eq!(render(&[], OutputFormat::Entries).unwrap(), "[]");
        assert_eq!(render(&[], OutputFormat::Pairs).unwrap(), "[]");
        assert_eq!(render(&[], OutputFormat::Json).unwrap(), "[]");
    }
}
