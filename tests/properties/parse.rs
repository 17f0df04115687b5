//! Property tests for the option parser.

use proptest::prelude::*;

use relo::{parse, ParseError, Signal};

fn signal() -> impl Strategy<Value = Signal> {
    prop::sample::select(Signal::ALL.to_vec())
}

fn watch_path() -> impl Strategy<Value = String> {
    // Never starts with '-', so it can't be mistaken for a flag.
    proptest::string::string_regex("[A-Za-z0-9_.][A-Za-z0-9_./]{0,15}").unwrap()
}

/// Anything that may follow `--`, including things that look like flags
fn command_token() -> impl Strategy<Value = String> {
    prop_oneof![
        proptest::string::string_regex("[A-Za-z0-9_./=-]{1,12}").unwrap(),
        prop::sample::select(vec!["--", "-g", "--signal", "SIGPIPE"]).prop_map(String::from),
    ]
}

/// Tokens for the region before `--`, valid or not
fn any_token() -> impl Strategy<Value = String> {
    prop_oneof![
        watch_path(),
        prop::sample::select(vec![
            "-w",
            "--wait",
            "-g",
            "--group",
            "-p",
            "--parallel",
            "-s",
            "--signal",
            "--signal=SIGHUP",
            "-wgp",
            "SIGTERM",
            "SIGPIPE",
            "-",
        ])
        .prop_map(String::from),
        proptest::string::string_regex("-[a-z]{1,3}").unwrap(),
        "(?s).{0,12}",
    ]
}

#[derive(Debug, Clone)]
struct ValidLine {
    watches: Vec<String>,
    command: Vec<String>,
    // For each flag: absent, or present with `true` for the long spelling
    wait: Option<bool>,
    group: Option<bool>,
    parallel: Option<bool>,
    signal: Option<(bool, Signal)>,
}

impl ValidLine {
    fn argv(&self) -> Vec<String> {
        let mut argv = self.watches.clone();
        let flags = [
            (self.wait, "-w", "--wait"),
            (self.group, "-g", "--group"),
            (self.parallel, "-p", "--parallel"),
        ];
        for (spelling, short, long) in flags {
            match spelling {
                Some(true) => argv.push(long.to_string()),
                Some(false) => argv.push(short.to_string()),
                None => {}
            }
        }
        if let Some((long, signal)) = self.signal {
            argv.push(if long { "--signal" } else { "-s" }.to_string());
            argv.push(signal.to_string());
        }
        argv.push("--".to_string());
        argv.extend(self.command.iter().cloned());
        argv
    }
}

fn valid_line() -> impl Strategy<Value = ValidLine> {
    (
        proptest::collection::vec(watch_path(), 1..5),
        proptest::collection::vec(command_token(), 1..5),
        proptest::option::of(any::<bool>()),
        proptest::option::of(any::<bool>()),
        proptest::option::of(any::<bool>()),
        proptest::option::of((any::<bool>(), signal())),
    )
        .prop_map(
            |(watches, command, wait, group, parallel, signal)| ValidLine {
                watches,
                command,
                wait,
                group,
                parallel,
                signal,
            },
        )
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Parsing never panics on arbitrary token sequences.
    #[test]
    fn property_parse_never_panics(
        tokens in proptest::collection::vec(any_token(), 0..12)
    ) {
        let _ = parse(tokens);
    }

    /// PROPERTY: Identical input always yields an equal result.
    #[test]
    fn property_parse_is_deterministic(
        tokens in proptest::collection::vec(any_token(), 0..12)
    ) {
        prop_assert_eq!(parse(tokens.clone()), parse(tokens));
    }

    /// PROPERTY: Without a `--` there is never a command.
    #[test]
    fn property_no_separator_means_no_command(
        tokens in proptest::collection::vec(any_token(), 0..12)
    ) {
        prop_assume!(!tokens.iter().any(|t| t == "--"));
        prop_assert_eq!(parse(tokens), Err(ParseError::NoCommandGiven));
    }

    /// PROPERTY: A well-formed line parses into matching options, and
    /// every short alias agrees with its long name.
    #[test]
    fn property_valid_lines_parse(line in valid_line()) {
        let options = parse(line.argv()).unwrap();

        prop_assert_eq!(options.watches(), &line.watches[..]);
        prop_assert_eq!(options.command(), &line.command[..]);

        prop_assert_eq!(options.wait(), line.wait.is_some());
        prop_assert_eq!(options.group(), line.group.is_some());
        prop_assert_eq!(options.parallel(), line.parallel.is_some());
        prop_assert_eq!(
            options.signal(),
            line.signal.map(|(_, s)| s).unwrap_or(Signal::Int)
        );

        prop_assert_eq!(options.w(), options.wait());
        prop_assert_eq!(options.g(), options.group());
        prop_assert_eq!(options.p(), options.parallel());
        prop_assert_eq!(options.s(), options.signal());
    }

    /// PROPERTY: Flags alone before `--` never count as watches.
    #[test]
    fn property_flags_only_means_no_watches(
        flags in proptest::collection::vec(
            prop::sample::select(vec!["-w", "--wait", "-g", "--group", "-p", "--parallel"]),
            0..6,
        ),
        command in proptest::collection::vec(command_token(), 1..4),
    ) {
        let mut argv: Vec<String> = flags.into_iter().map(String::from).collect();
        argv.push("--".to_string());
        argv.extend(command);
        prop_assert_eq!(parse(argv), Err(ParseError::NoWatchesGiven));
    }
}
