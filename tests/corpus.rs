use decimal_field::{commit_non_empty, normalize};

struct Case {
    name: &'static str,
    input: &'static str,
    allows_negative: bool,
    expected_live: &'static str,
    expected_commit: &'static str,
}

#[test]
fn golden_corpus_regression() {
    let cases = [
        Case {
            name: "mixed_letters_and_digits",
            input: "hell0wor1d!",
            allows_negative: true,
            expected_live: "01",
            expected_commit: "1",
        },
        Case {
            name: "repeated_points",
            input: "71.2.0.3",
            allows_negative: true,
            expected_live: "71.203",
            expected_commit: "71.203",
        },
        Case {
            name: "comma_separator",
            input: "82,6",
            allows_negative: true,
            expected_live: "82.6",
            expected_commit: "82.6",
        },
        Case {
            name: "sign_inside_noise",
            input: "abc -935z",
            allows_negative: true,
            expected_live: "-935",
            expected_commit: "-935",
        },
        Case {
            name: "sign_inside_noise_disallowed",
            input: "abc -935z",
            allows_negative: false,
            expected_live: "935",
            expected_commit: "935",
        },
        Case {
            name: "untrimmed_fraction",
            input: "00000.10000",
            allows_negative: true,
            expected_live: "00000.10000",
            expected_commit: "0.1",
        },
        Case {
            name: "dangling_point_negative",
            input: "-28.",
            allows_negative: true,
            expected_live: "-28.",
            expected_commit: "-28",
        },
        Case {
            name: "negative_zero_fraction",
            input: "-0.0",
            allows_negative: true,
            expected_live: "-0.0",
            expected_commit: "0",
        },
        Case {
            name: "lone_point",
            input: ".",
            allows_negative: true,
            expected_live: "0.",
            expected_commit: "0",
        },
        Case {
            name: "dash_in_the_middle",
            input: "2-1",
            allows_negative: true,
            expected_live: "21",
            expected_commit: "21",
        },
        Case {
            name: "integer_trailing_zeros",
            input: "31500",
            allows_negative: true,
            expected_live: "31500",
            expected_commit: "31500",
        },
        Case {
            name: "padded_fraction",
            input: "00.350",
            allows_negative: true,
            expected_live: "00.350",
            expected_commit: "0.35",
        },
        Case {
            name: "nothing_numeric",
            input: "ZeroOneTwoThree",
            allows_negative: true,
            expected_live: "",
            expected_commit: "0",
        },
    ];

    for case in cases {
        let live = normalize(case.input, case.allows_negative);
        assert_eq!(live, case.expected_live, "live text mismatch for {}", case.name);

        let committed = commit_non_empty(&live, case.allows_negative);
        assert_eq!(
            committed, case.expected_commit,
            "commit mismatch for {}",
            case.name
        );
    }
}
