//! Property tests for the operator command grammar.

use proptest::prelude::*;

use stepper_jog::command::{is_quit_sentinel, parse};
use stepper_jog::{Direction, ParseError};

fn direction_token() -> impl Strategy<Value = (String, Direction)> {
    prop_oneof![
        Just(Direction::Clockwise),
        Just(Direction::CounterClockwise)
    ]
    .prop_flat_map(|direction| {
        // Random ASCII casing of the canonical token
        let token = direction.token();
        proptest::collection::vec(any::<bool>(), token.len()).prop_map(move |upper| {
            let cased: String = token
                .chars()
                .zip(upper)
                .map(|(c, up)| if up { c.to_ascii_uppercase() } else { c })
                .collect();
            (cased, direction)
        })
    })
}

fn separator() -> impl Strategy<Value = String> {
    "[ \t]{1,3}"
}

proptest! {
    #[test]
    fn wrong_token_count(
        tokens in proptest::collection::vec("[a-z0-9]{1,8}", 0..7)
            .prop_filter("exactly two tokens is a different case", |t| t.len() != 2),
        sep in separator(),
    ) {
        let line = tokens.join(sep.as_str());
        prop_assert_eq!(parse(&line), Err(ParseError::WrongTokenCount(tokens.len())));
    }

    #[test]
    fn positive_steps_parse(
        (token, direction) in direction_token(),
        steps in 1u32..=u32::MAX,
        lead in "[ \t]{0,2}",
        sep in separator(),
        trail in "[ \t\n]{0,2}",
    ) {
        let line = format!("{lead}{token}{sep}{steps}{trail}");
        let command = parse(&line).unwrap();
        prop_assert_eq!(command.direction(), direction);
        prop_assert_eq!(command.steps(), steps);
    }

    #[test]
    fn non_positive_steps_rejected(
        (token, _direction) in direction_token(),
        steps in i64::MIN..=0i64,
    ) {
        let line = format!("{token} {steps}");
        prop_assert_eq!(parse(&line), Err(ParseError::NonPositiveSteps));
    }

    #[test]
    fn non_integer_steps_rejected(
        (token, _direction) in direction_token(),
        steps in prop_oneof![
            "[a-zA-Z]{1,6}",
            "[0-9]{1,4}\\.[0-9]{1,4}",
            "[0-9]{1,3}[a-z]{1,3}",
        ],
    ) {
        let line = format!("{token} {steps}");
        prop_assert_eq!(parse(&line), Err(ParseError::NonNumericSteps));
    }

    #[test]
    fn unknown_direction_rejected(
        token in "[a-z]{1,8}".prop_filter("not a direction", |t| t != "right" && t != "left"),
        steps in 1u32..1000,
    ) {
        let line = format!("{token} {steps}");
        prop_assert_eq!(parse(&line), Err(ParseError::UnknownDirection));
    }

    #[test]
    fn bad_steps_reported_before_direction(
        token in "[a-z]{1,8}".prop_filter("not a direction", |t| t != "right" && t != "left"),
        steps in i64::MIN..=0i64,
        word in "[a-z]{1,6}",
    ) {
        prop_assert_eq!(parse(&format!("{token} {steps}")), Err(ParseError::NonPositiveSteps));
        prop_assert_eq!(parse(&format!("{token} {word}")), Err(ParseError::NonNumericSteps));
    }
}

#[test]
fn test_sentinels_are_not_commands() {
    for line in ["quit", "exit", "q", "QUIT"] {
        assert!(is_quit_sentinel(line));
        assert!(matches!(parse(line), Err(ParseError::WrongTokenCount(1))));
    }
}
