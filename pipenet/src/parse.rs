use crate::error::ParseError;
use crate::network::{PipeRecord, Problem};

/// Parse a problem in the line format
///
/// ```text
/// n m d
/// a b c     (m lines)
/// ```
///
/// Fields are whitespace separated. Blank lines may follow the last pipe;
/// anything else after it is rejected.
pub fn parse_problem(text: &str) -> Result<Problem, ParseError> {
    let mut lines = text.lines().enumerate().map(|(i, l)| (i + 1, l));

    let (line, header) = lines.next().ok_or(ParseError::Empty)?;
    if header.trim().is_empty() && text.trim().is_empty() {
        return Err(ParseError::Empty);
    }
    let [n, m, d] = fields::<3>(line, header)?;
    let nodes = non_negative(line, n)?;
    let count = non_negative(line, m)?;

    // header counts are untrusted; never reserve more than the text can hold
    let mut pipes = Vec::with_capacity(count.min(text.len()));
    for found in 0..count {
        let (line, text) = lines.next().ok_or(ParseError::MissingPipes {
            expected: count,
            found,
        })?;
        let [a, b, c] = fields::<3>(line, text)?;
        pipes.push(PipeRecord::new(
            non_negative(line, a)?,
            non_negative(line, b)?,
            c,
        ));
    }

    if let Some((line, _)) = lines.find(|(_, l)| !l.trim().is_empty()) {
        return Err(ParseError::TrailingData(line));
    }

    Ok(Problem::new(nodes, d, pipes))
}

/// Parse an expected answer: the first line holds a single non-negative
/// integer.
pub fn parse_answer(text: &str) -> Result<usize, ParseError> {
    let first = text.lines().next().ok_or(ParseError::Empty)?;
    if first.trim().is_empty() {
        return Err(ParseError::Empty);
    }
    let [value] = fields::<1>(1, first)?;
    non_negative(1, value)
}

fn fields<const N: usize>(line: usize, text: &str) -> Result<[i64; N], ParseError> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    if tokens.len() != N {
        return Err(ParseError::FieldCount {
            line,
            expected: N,
            found: tokens.len(),
        });
    }
    let mut out = [0i64; N];
    for (slot, token) in out.iter_mut().zip(&tokens) {
        *slot = token.parse().map_err(|_| ParseError::NotInteger {
            line,
            token: token.to_string(),
        })?;
    }
    Ok(out)
}

fn non_negative(line: usize, value: i64) -> Result<usize, ParseError> {
    usize::try_from(value).map_err(|_| ParseError::Negative { line, value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_header_and_pipes() {
        let p = parse_problem("3 3 0\n1 2 1\n2 3 2\n1 3 3\n").unwrap();
        assert_eq!(p.nodes, 3);
        assert_eq!(p.discount, 0);
        assert_eq!(
            p.pipes,
            vec![
                PipeRecord::new(1, 2, 1),
                PipeRecord::new(2, 3, 2),
                PipeRecord::new(1, 3, 3),
            ]
        );
    }

    #[test]
    fn tolerates_crlf_and_extra_spaces() {
        let p = parse_problem("2 1 5\r\n  1   2 10 \r\n\r\n").unwrap();
        assert_eq!(p.pipes, vec![PipeRecord::new(1, 2, 10)]);
        assert_eq!(p.discount, 5);
    }

    #[test]
    fn empty_input() {
        assert_eq!(parse_problem(""), Err(ParseError::Empty));
        assert_eq!(parse_problem("\n\n"), Err(ParseError::Empty));
    }

    #[test]
    fn short_header() {
        assert_eq!(
            parse_problem("3 3\n"),
            Err(ParseError::FieldCount {
                line: 1,
                expected: 3,
                found: 2
            })
        );
    }

    #[test]
    fn long_pipe_line() {
        assert_eq!(
            parse_problem("2 1 0\n1 2 3 4\n"),
            Err(ParseError::FieldCount {
                line: 2,
                expected: 3,
                found: 4
            })
        );
    }

    #[test]
    fn non_numeric_token() {
        assert_eq!(
            parse_problem("2 1 0\n1 x 3\n"),
            Err(ParseError::NotInteger {
                line: 2,
                token: "x".into()
            })
        );
    }

    #[test]
    fn negative_node() {
        assert_eq!(
            parse_problem("2 1 0\n-1 2 3\n"),
            Err(ParseError::Negative { line: 2, value: -1 })
        );
    }

    #[test]
    fn negative_discount_and_cost_are_numbers() {
        let p = parse_problem("2 1 -4\n1 2 -3\n").unwrap();
        assert_eq!(p.discount, -4);
        assert_eq!(p.pipes[0].cost, -3);
    }

    #[test]
    fn missing_pipes() {
        assert_eq!(
            parse_problem("3 2 0\n1 2 1\n"),
            Err(ParseError::MissingPipes {
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn huge_declared_count_is_missing_pipes() {
        assert!(matches!(
            parse_problem("2 4000000000000000000 0\n1 2 3\n"),
            Err(ParseError::MissingPipes { found: 1, .. })
        ));
    }

    #[test]
    fn trailing_data() {
        assert_eq!(
            parse_problem("2 1 0\n1 2 1\n\n2 1 1\n"),
            Err(ParseError::TrailingData(4))
        );
    }

    #[test]
    fn answer_first_line() {
        assert_eq!(parse_answer("7\nignored\n"), Ok(7));
        assert_eq!(parse_answer(" 0 \n"), Ok(0));
        assert_eq!(parse_answer(""), Err(ParseError::Empty));
        assert!(matches!(
            parse_answer("-1\n"),
            Err(ParseError::Negative { .. })
        ));
    }
}
