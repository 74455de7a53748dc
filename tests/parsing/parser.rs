#[cfg(test)]
mod verify {
    use exprcheck::language::*;
    use exprcheck::parsing::{self, SyntaxViolation};

    fn assert_valid(line: &str) {
        let analysis = parsing::validate(line);
        assert_eq!(
            analysis.verdict,
            Verdict::Valid,
            "expected '{}' to be valid",
            line
        );
    }

    fn violation(line: &str) -> SyntaxViolation {
        match parsing::validate(line).verdict {
            Verdict::Valid => panic!("expected '{}' to be invalid", line),
            Verdict::Invalid(violation) => violation,
        }
    }

    #[test]
    fn digits_then_semicolon() {
        assert_valid("0;");
        assert_valid("42;");
        assert_valid("9876543210;");
    }

    #[test]
    fn single_operator_statements() {
        for operator in OPERATORS {
            assert_valid(&format!("{};", operator));
        }
    }

    #[test]
    fn division_slash_is_not_an_operator() {
        let result = violation("/;");
        assert_eq!(result.found, Symbol::Char('/'));
        assert_eq!(result.expected, STATEMENT_START);
    }

    #[test]
    fn empty_group() {
        assert_valid("();");
    }

    #[test]
    fn group_needs_no_closing_parenthesis() {
        assert_valid("(42;");
        assert_valid("((7;");
        assert_valid("(1;2;");
    }

    #[test]
    fn group_closed_after_statement_is_rejected() {
        let result = violation("(1);");
        assert_eq!(
            result,
            SyntaxViolation {
                offset: 2,
                found: Symbol::Char(')'),
                expected: SEMICOLON
            }
        );
    }

    #[test]
    fn trailing_dot() {
        assert_valid("5.;");
    }

    #[test]
    fn digits_after_dot_are_not_consumed() {
        let result = violation("3.14;");
        assert_eq!(
            result,
            SyntaxViolation {
                offset: 2,
                found: Symbol::Char('1'),
                expected: SEMICOLON
            }
        );
    }

    #[test]
    fn missing_semicolon() {
        for line in ["42", "+", "()", "7."] {
            let result = violation(line);
            assert_eq!(result.found, Symbol::End, "for '{}'", line);
            assert_eq!(result.expected, SEMICOLON, "for '{}'", line);
        }
    }

    #[test]
    fn empty_statements() {
        let result = violation(";;;");
        assert_eq!(
            result,
            SyntaxViolation {
                offset: 0,
                found: Symbol::Char(';'),
                expected: STATEMENT_START
            }
        );
    }

    #[test]
    fn second_statement_checked() {
        assert_valid("1;+;(2;");

        let result = violation("1;x;");
        assert_eq!(result.offset, 2);
        assert_eq!(result.found, Symbol::Char('x'));
        assert_eq!(result.expected, STATEMENT_START);
    }

    #[test]
    fn end_inside_group() {
        let result = violation("(");
        assert_eq!(result.found, Symbol::End);
        assert_eq!(result.expected, STATEMENT_START);
    }

    #[test]
    fn operator_takes_no_operand() {
        let result = violation("+1;");
        assert_eq!(result.found, Symbol::Char('1'));
        assert_eq!(result.expected, SEMICOLON);
    }

    #[test]
    fn consumed_log_on_success() {
        let analysis = parsing::validate("(1;");
        assert_eq!(
            analysis
                .consumed
                .to_string(),
            "(1;ε"
        );
    }

    #[test]
    fn consumed_log_stops_at_failure() {
        let analysis = parsing::validate("12+34;");
        assert_eq!(
            analysis
                .consumed
                .to_string(),
            "12+"
        );
        assert_eq!(
            analysis
                .consumed
                .last(),
            Some(Symbol::Char('+'))
        );
    }

    #[test]
    fn repeated_validation_agrees() {
        for line in ["42;", "3.14;", "(42;", ";;;", ""] {
            assert_eq!(parsing::validate(line), parsing::validate(line));
        }
    }

    #[test]
    fn deep_nesting() {
        let line = format!("{}1;", "(".repeat(200_000));
        assert_valid(&line);
    }

    #[test]
    fn deep_nesting_without_statement() {
        let line = "(".repeat(200_000);
        let result = violation(&line);
        assert_eq!(result.offset, 200_000);
        assert_eq!(result.found, Symbol::End);
        assert_eq!(result.expected, STATEMENT_START);
    }

    #[test]
    fn many_statements() {
        let line = "1;".repeat(100_000);
        assert_valid(&line);
    }
}
