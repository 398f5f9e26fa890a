//! Token-stream segmentation into flags, options, and positionals.
//!
//! The parser is a total function: any token vector produces a
//! [`ParseResult`] and every token lands in exactly one bucket. Short options
//! never cluster, so `-la` is a single flag named `la`.

use std::collections::{BTreeMap, BTreeSet};

/// Immutable snapshot of one tokenization pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseResult {
    /// Option name (without dashes) to its value.
    options: BTreeMap<String, String>,
    /// Option names seen without a value.
    flags: BTreeSet<String>,
    /// Bare tokens in input order.
    positionals: Vec<String>,
}

impl ParseResult {
    /// Whether `name` was given as a value-less option.
    pub fn flag(&self, name: &str) -> bool {
        self.flags.contains(name)
    }

    /// Value of option `name`, if present.
    pub fn option(&self, name: &str) -> Option<&str> {
        self.options.get(name).map(String::as_str)
    }

    pub fn options(&self) -> &BTreeMap<String, String> {
        &self.options
    }

    pub fn flags(&self) -> &BTreeSet<String> {
        &self.flags
    }

    pub fn positionals(&self) -> &[String] {
        &self.positionals
    }

    /// Positional at `index`, where index 0 is conventionally the command.
    pub fn positional(&self, index: usize) -> Option<&str> {
        self.positionals.get(index).map(String::as_str)
    }

    /// First positional, i.e. the requested command name.
    pub fn command_name(&self) -> Option<&str> {
        self.positional(0)
    }

    /// True when no token was seen at all.
    pub fn is_empty(&self) -> bool {
        self.options.is_empty() && self.flags.is_empty() && self.positionals.is_empty()
    }

    fn insert_option(&mut self, name: &str, value: &str) {
        // A later occurrence moves the name out of the flag bucket.
        self.flags.remove(name);
        self.options.insert(name.to_string(), value.to_string());
    }

    fn insert_flag(&mut self, name: &str) {
        self.options.remove(name);
        self.flags.insert(name.to_string());
    }
}

/// Stateless tokenizer over argument vectors.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArgParser;

impl ArgParser {
    /// Segment `tokens` left to right with one token of lookahead.
    pub fn parse<I, S>(tokens: I) -> ParseResult
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let tokens: Vec<S> = tokens.into_iter().collect();
        let mut result = ParseResult::default();

        let mut i = 0;
        while i < tokens.len() {
            let token = tokens[i].as_ref();
            match option_name(token) {
                Some(body) => {
                    if let Some((name, value)) = body.split_once('=') {
                        // Explicit `=` always wins, even for an empty value.
                        result.insert_option(name, value);
                    } else if let Some(next) = tokens.get(i + 1).map(AsRef::as_ref) {
                        if next.starts_with('-') {
                            result.insert_flag(body);
                        } else {
                            result.insert_option(body, next);
                            i += 1;
                        }
                    } else {
                        result.insert_flag(body);
                    }
                }
                None => result.positionals.push(token.to_string()),
            }
            i += 1;
        }

        result
    }
}

/// Strip the option prefix, returning `None` for positional tokens.
///
/// Bare `-` and `--` have no name and stay positional.
fn option_name(token: &str) -> Option<&str> {
    let body = token
        .strip_prefix("--")
        .or_else(|| token.strip_prefix('-'))?;
    if body.is_empty() {
        None
    } else {
        Some(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn flags(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn mixed_tokens_split_into_three_buckets() {
        let parsed = ArgParser::parse(["--a", "1", "-b", "--c=3", "x", "y"]);
        assert_eq!(parsed.options(), &options(&[("a", "1"), ("c", "3")]));
        assert_eq!(parsed.flags(), &flags(&["b"]));
        assert_eq!(parsed.positionals(), ["x", "y"]);
    }

    #[test]
    fn lone_long_option_is_a_flag() {
        let parsed = ArgParser::parse(["--flag"]);
        assert_eq!(parsed.flags(), &flags(&["flag"]));
        assert!(parsed.options().is_empty());
        assert!(parsed.positionals().is_empty());
    }

    #[test]
    fn explicit_equals_wins_over_lookahead() {
        let parsed = ArgParser::parse(["--k=", "v"]);
        assert_eq!(parsed.option("k"), Some(""));
        assert!(!parsed.flag("k"));
        assert_eq!(parsed.positionals(), ["v"]);
    }

    #[test]
    fn value_is_split_at_first_equals_only() {
        let parsed = ArgParser::parse(["--expr=a=b", "-d=x=y"]);
        assert_eq!(parsed.option("expr"), Some("a=b"));
        assert_eq!(parsed.option("d"), Some("x=y"));
    }

    #[test]
    fn short_options_accept_both_value_forms() {
        let parsed = ArgParser::parse(["-n", "Bob", "-k=v"]);
        assert_eq!(parsed.option("n"), Some("Bob"));
        assert_eq!(parsed.option("k"), Some("v"));
    }

    #[test]
    fn short_options_do_not_cluster() {
        let parsed = ArgParser::parse(["ls", "-la"]);
        assert!(parsed.flag("la"));
        assert!(!parsed.flag("l"));
        assert!(!parsed.flag("a"));
    }

    #[test]
    fn option_followed_by_option_becomes_flag() {
        let parsed = ArgParser::parse(["--verbose", "--out", "file.txt"]);
        assert!(parsed.flag("verbose"));
        assert_eq!(parsed.option("out"), Some("file.txt"));
    }

    #[test]
    fn trailing_option_without_value_is_a_flag() {
        let parsed = ArgParser::parse(["greet", "--name"]);
        assert!(parsed.flag("name"));
        assert_eq!(parsed.option("name"), None);
        assert_eq!(parsed.command_name(), Some("greet"));
    }

    #[test]
    fn last_occurrence_wins_and_keeps_buckets_disjoint() {
        let parsed = ArgParser::parse(["--mode", "fast", "--mode"]);
        assert!(parsed.flag("mode"));
        assert_eq!(parsed.option("mode"), None);

        let parsed = ArgParser::parse(["--mode", "--mode=slow", "--mode", "fast"]);
        assert!(!parsed.flag("mode"));
        assert_eq!(parsed.option("mode"), Some("fast"));
    }

    #[test]
    fn bare_dashes_are_positionals() {
        let parsed = ArgParser::parse(["cat", "-", "--"]);
        assert_eq!(parsed.positionals(), ["cat", "-", "--"]);
        assert!(parsed.flags().is_empty());
    }

    #[test]
    fn bare_dash_is_not_consumed_as_a_value() {
        let parsed = ArgParser::parse(["--input", "-"]);
        assert!(parsed.flag("input"));
        assert_eq!(parsed.positionals(), ["-"]);
    }

    #[test]
    fn empty_input_produces_empty_result() {
        let parsed = ArgParser::parse(Vec::<String>::new());
        assert!(parsed.is_empty());
        assert_eq!(parsed.command_name(), None);
    }

    #[test]
    fn positional_order_is_preserved() {
        let parsed = ArgParser::parse(["copy", "--force", "a", "b", "c"]);
        // `--force` consumes `a` as its value.
        assert_eq!(parsed.option("force"), Some("a"));
        assert_eq!(parsed.positionals(), ["copy", "b", "c"]);
        assert_eq!(parsed.positional(2), Some("c"));
        assert_eq!(parsed.positional(3), None);
    }

    #[test]
    fn repeated_names_and_bare_dashes_account_for_every_token() {
        let tokens = ["run", "-", "--a", "x", "--b=", "-c", "--a", "--", "y", "-b"];
        let parsed = ArgParser::parse(tokens);
        assert_eq!(parsed.positionals(), ["run", "-", "--", "y"]);
        assert_eq!(parsed.options(), &options(&[]));
        assert_eq!(parsed.flags(), &flags(&["a", "b", "c"]));

        let parsed = ArgParser::parse(["--a", "x", "--a=y", "z"]);
        assert_eq!(parsed.options(), &options(&[("a", "y")]));
        assert_eq!(parsed.positionals(), ["z"]);
    }

    #[cfg(feature = "fuzz-tests")]
    mod prop_tests {
        use super::*;
        use proptest::prelude::*;

        /// One scan step: a named token with its value, or a bare token.
        enum Step {
            Named(String, Option<String>),
            Bare(String),
        }

        /// Replay the scan, returning its steps and how many tokens were
        /// taken as the value of the preceding name.
        fn replay(tokens: &[String]) -> (Vec<Step>, usize) {
            let mut steps = Vec::new();
            let mut separate_values = 0;
            let mut rest = tokens.iter().peekable();
            while let Some(token) = rest.next() {
                let body = token
                    .strip_prefix("--")
                    .or_else(|| token.strip_prefix('-'))
                    .filter(|body| !body.is_empty());
                let Some(body) = body else {
                    steps.push(Step::Bare(token.clone()));
                    continue;
                };
                if let Some((name, value)) = body.split_once('=') {
                    steps.push(Step::Named(name.to_string(), Some(value.to_string())));
                } else if let Some(value) = rest.next_if(|next| !next.starts_with('-')) {
                    separate_values += 1;
                    steps.push(Step::Named(body.to_string(), Some(value.clone())));
                } else {
                    steps.push(Step::Named(body.to_string(), None));
                }
            }
            (steps, separate_values)
        }

        proptest! {
            #[test]
            fn every_token_lands_in_exactly_one_bucket(
                tokens in proptest::collection::vec(
                    proptest::string::string_regex("(-{0,2})[a-z=]{0,4}").expect("regex"),
                    0..12
                )
            ) {
                let parsed = ArgParser::parse(&tokens);
                let (steps, separate_values) = replay(&tokens);

                let mut positionals = Vec::new();
                let mut named_tokens = 0;
                // Last occurrence of a name decides its bucket and value.
                let mut last: BTreeMap<String, Option<String>> = BTreeMap::new();
                for step in steps {
                    match step {
                        Step::Bare(token) => positionals.push(token),
                        Step::Named(name, value) => {
                            named_tokens += 1;
                            last.insert(name, value);
                        }
                    }
                }
                prop_assert_eq!(
                    positionals.len() + named_tokens + separate_values,
                    tokens.len()
                );

                let expected_options: BTreeMap<String, String> = last
                    .iter()
                    .filter_map(|(name, value)| Some((name.clone(), value.clone()?)))
                    .collect();
                let expected_flags: BTreeSet<String> = last
                    .iter()
                    .filter(|(_, value)| value.is_none())
                    .map(|(name, _)| name.clone())
                    .collect();

                prop_assert_eq!(parsed.positionals(), positionals.as_slice());
                prop_assert_eq!(parsed.options(), &expected_options);
                prop_assert_eq!(parsed.flags(), &expected_flags);
                for name in parsed.flags() {
                    prop_assert!(!parsed.options().contains_key(name));
                }
            }
        }
    }
}
