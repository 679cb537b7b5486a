//! Fenced code block format
//!
//! ````text
//! ```js
//! console.log(1)
//! ```
//! ````
//!
//! The alias is the run of word characters after the opening backticks; the
//! body is everything after the first newline up to the closing fence,
//! trimmed.

const FENCE: &str = "```";

/// A parsed fenced block
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Fence {
    /// Language alias as written (may be empty)
    pub alias: String,
    /// Trimmed body text
    pub body: String,
}

/// Whether `raw` should be shown as a code block
pub fn should_use(raw: &str) -> bool {
    raw.starts_with(FENCE)
}

/// Parse a fenced block. Text that is not fenced parses with an empty alias.
pub fn parse(raw: &str) -> Fence {
    let alias = raw
        .strip_prefix(FENCE)
        .map(|rest| {
            let end = rest
                .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
                .unwrap_or(rest.len());
            &rest[..end]
        })
        .unwrap_or_default();

    let body = match raw.find('\n') {
        Some(nl) => &raw[nl + 1..],
        None => "",
    };
    let body = body.trim_end();
    let body = body.strip_suffix(FENCE).unwrap_or(body);

    Fence {
        alias: alias.to_string(),
        body: body.trim().to_string(),
    }
}

impl Fence {
    pub fn new(alias: &str, body: &str) -> Self {
        Self {
            alias: alias.to_string(),
            body: body.to_string(),
        }
    }

    /// Serialize back to the fenced form
    pub fn serialize(&self) -> String {
        serialize(&self.alias, &self.body)
    }
}

/// Fenced form of `body` under `alias`
pub fn serialize(alias: &str, body: &str) -> String {
    format!("{FENCE}{alias}\n{body}\n{FENCE}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_use() {
        assert!(should_use("```js\nx\n```"));
        assert!(should_use("```\nplain\n```"));
        assert!(!should_use("`inline`"));
        assert!(!should_use(" ```js"));
    }

    #[test]
    fn test_parse() {
        let fence = parse("```js\nconsole.log(1)\n```");
        assert_eq!(fence, Fence::new("js", "console.log(1)"));
    }

    #[test]
    fn test_parse_trims_body() {
        let fence = parse("```python\n\n  x = 1\n\n```");
        assert_eq!(fence.alias, "python");
        assert_eq!(fence.body, "x = 1");
    }

    #[test]
    fn test_parse_alias_stops_at_non_word() {
        let fence = parse("```c++ extra\nint x;\n```");
        assert_eq!(fence.alias, "c");
        assert_eq!(fence.body, "int x;");
    }

    #[test]
    fn test_parse_without_alias() {
        let fence = parse("```\nplain text\n```");
        assert_eq!(fence.alias, "");
        assert_eq!(fence.body, "plain text");
    }

    #[test]
    fn test_parse_without_newline() {
        assert_eq!(parse("```js"), Fence::new("js", ""));
    }

    #[test]
    fn test_parse_multiline_body() {
        let fence = parse("```sh\necho a\n\necho b\n```\n");
        assert_eq!(fence.body, "echo a\n\necho b");
    }

    #[test]
    fn test_round_trip() {
        let raw = "```ts\nlet x: number = 1;\nconsole.log(x);\n```";
        let fence = parse(raw);
        assert_eq!(fence.serialize(), raw);
        assert_eq!(parse(&fence.serialize()), fence);
    }
}
