//! Plain-text sanitizer for model output.
//!
//! Models are told to answer without markdown, but some still emit it. The
//! sanitizer strips the lightweight markers that leak through:
//!
//! - code fence lines (the fenced body is kept)
//! - heading markers at line start
//! - bullet and numbered list markers at line start
//! - `**bold**` and `*italic*` emphasis
//! - inline code backticks
//! - links and images, keeping the label
//!
//! Every rule only ever deletes characters, so one pass either leaves the text
//! alone or makes it strictly shorter. [`sanitize`] repeats passes until
//! nothing changes, which makes it idempotent: `sanitize(&sanitize(x)) ==
//! sanitize(x)` for every input.

use once_cell::sync::Lazy;
use regex::Regex;

struct Rule {
    pattern: Regex,
    replacement: &'static str,
}

impl Rule {
    fn new(pattern: &str, replacement: &'static str) -> Self {
        Self {
            pattern: Regex::new(pattern).unwrap(),
            replacement,
        }
    }
}

// Order matters within a pass: line-level markers go first so a leading
// bullet `*` is never paired up as emphasis.
static RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    vec![
        Rule::new(r"(?m)^[ \t]*```[^\n]*(?:\n|$)", ""),
        Rule::new(r"(?m)^[ \t]*#{1,6}[ \t]+", ""),
        Rule::new(r"(?m)^[ \t]*[-*+][ \t]+", ""),
        Rule::new(r"(?m)^[ \t]*\d+\.[ \t]+", ""),
        Rule::new(r"\*\*([^*\s](?:[^\n]*?[^*\s])?)\*\*", "$1"),
        Rule::new(r"\*([^*\s](?:[^*\n]*[^*\s])?)\*", "$1"),
        Rule::new(r"`([^`\n]*)`", "$1"),
        Rule::new(r"!?\[([^\]\n]*)\]\([^)\n]*\)", "$1"),
    ]
});

/// Strip lightweight markup and surrounding whitespace.
pub fn sanitize(text: &str) -> String {
    let mut current = text.trim().to_string();
    loop {
        let next = sanitize_pass(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

fn sanitize_pass(text: &str) -> String {
    let mut out = text.to_string();
    for rule in RULES.iter() {
        if rule.pattern.is_match(&out) {
            out = rule
                .pattern
                .replace_all(&out, rule.replacement)
                .into_owned();
        }
    }
    out.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emphasis_and_inline_code() {
        assert_eq!(
            sanitize("**bold** and *italic* and `code`"),
            "bold and italic and code"
        );
    }

    #[test]
    fn test_link_keeps_label() {
        assert_eq!(sanitize("[label](http://x)"), "label");
        assert_eq!(
            sanitize("See ![diagram](img.png) and [the repo](https://github.com/x/y)."),
            "See diagram and the repo."
        );
    }

    #[test]
    fn test_heading_markers() {
        assert_eq!(sanitize("# Heading\nbody"), "Heading\nbody");
        assert_eq!(sanitize("### Sub\n## Other\ntext"), "Sub\nOther\ntext");
        // Not a heading: no marker at line start.
        assert_eq!(sanitize("C# and F# are fine"), "C# and F# are fine");
        assert_eq!(sanitize("#hashtag"), "#hashtag");
    }

    #[test]
    fn test_list_markers() {
        assert_eq!(
            sanitize("Highlights:\n- React\n* Python\n+ Rust\n1. First\n  2. Second"),
            "Highlights:\nReact\nPython\nRust\nFirst\nSecond"
        );
    }

    #[test]
    fn test_code_fences_keep_body() {
        assert_eq!(
            sanitize("Here:\n```rust\nfn main() {}\n```\nDone"),
            "Here:\nfn main() {}\nDone"
        );
    }

    #[test]
    fn test_plain_prose_untouched() {
        let prose = "Danial built 25+ projects, 3 internships; 2 * 3 * 4 = 24 and snake_case stays.";
        assert_eq!(sanitize(prose), prose);
    }

    #[test]
    fn test_nested_markup_resolves() {
        assert_eq!(sanitize("***both***"), "both");
        assert_eq!(sanitize("- **[Mira](https://x.y)** is `fast`"), "Mira is fast");
    }

    #[test]
    fn test_idempotent_on_tricky_inputs() {
        let inputs = [
            "",
            "   ",
            "plain",
            "**bold** and *italic* and `code`",
            "***x***",
            "****",
            "** spaced **",
            "*a* *b* **c** ***d***",
            "``` ``` ```",
            "```\n```\n```",
            "- - - -",
            "1. 2. 3. x",
            "# # # title",
            "[a](b)[c](d)",
            "[[nested](x)](y)",
            "`` `a` ``",
            "* *x* *",
            "\n\n  - item  \n\n",
            "text **unclosed",
            "![img]()",
            "####### seven",
        ];
        for input in inputs {
            let once = sanitize(input);
            let twice = sanitize(&once);
            assert_eq!(once, twice, "not idempotent for {:?}", input);
        }
    }
}
