use crate::{
    Constant, Expr, Func, ParseError,
    lexer::{Token, TokenKind, tokenize},
};

/// Deepest nesting of parentheses, calls, signs, and exponents accepted.
pub const MAX_DEPTH: usize = 256;

/// Tallest tree accepted, counted in operator nodes from leaf to root.
///
/// Evaluation, differentiation, and rendering all walk the tree recursively,
/// so its height bounds their stack use.
pub const MAX_HEIGHT: usize = 256;

/// Parses a formula in the variable `x`.
///
/// Grammar, loosest binding first:
///
/// ```text
/// sum     := product (("+" | "-") product)*
/// product := unary (("*" | "/") unary)*
/// unary   := ("+" | "-") unary | power
/// power   := primary ("^" unary)?
/// primary := number | "x" | constant | function "(" sum ")" | "(" sum ")"
/// ```
///
/// Power is right-associative and binds tighter than unary minus, so
/// `-x^2` is `-(x^2)` and `2^-x` is `2^(-x)`.
///
/// Input nested deeper than [`MAX_DEPTH`] or producing a tree taller than
/// [`MAX_HEIGHT`] is rejected.
///
/// # Errors
///
/// Returns a [`ParseError`] describing the first problem found.
pub fn parse(source: &str) -> Result<Expr, ParseError> {
    let tokens = tokenize(source)?;
    if tokens.is_empty() {
        return Err(ParseError::Empty);
    }

    let mut parser = Parser {
        tokens,
        pos: 0,
        depth: 0,
    };
    let node = parser.sum()?;

    match parser.peek() {
        None => Ok(node.expr),
        Some(token) => Err(unexpected(token)),
    }
}

/// A parsed subtree along with its height.
struct Node {
    expr: Expr,
    height: usize,
}

impl Node {
    fn leaf(expr: Expr) -> Self {
        Self { expr, height: 0 }
    }

    /// Wraps `self` in a unary node such as negation or a call.
    fn wrap(self, build: impl FnOnce(Box<Expr>) -> Expr, column: usize) -> Result<Self, ParseError> {
        checked(build(Box::new(self.expr)), self.height + 1, column)
    }

    /// Joins two subtrees under a binary operator found at `column`.
    fn join(
        self,
        build: fn(Box<Expr>, Box<Expr>) -> Expr,
        rhs: Self,
        column: usize,
    ) -> Result<Self, ParseError> {
        let height = self.height.max(rhs.height) + 1;
        checked(build(Box::new(self.expr), Box::new(rhs.expr)), height, column)
    }
}

fn checked(expr: Expr, height: usize, column: usize) -> Result<Node, ParseError> {
    if height > MAX_HEIGHT {
        return Err(ParseError::TooLong { column });
    }
    Ok(Node { expr, height })
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    depth: usize,
}

type Rule = fn(&mut Parser) -> Result<Node, ParseError>;

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn next(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    /// Column of the next token, or 0 at the end of input.
    fn column(&self) -> usize {
        self.peek().map_or(0, |token| token.column)
    }

    /// Consumes the next token if it has the given kind.
    fn eat(&mut self, kind: &TokenKind) -> bool {
        if self.peek().is_some_and(|token| token.kind == *kind) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Applies `rule` one nesting level down from the construct at `column`.
    fn nested(&mut self, rule: Rule, column: usize) -> Result<Node, ParseError> {
        if self.depth >= MAX_DEPTH {
            return Err(ParseError::TooDeep { column });
        }
        self.depth += 1;
        let node = rule(self);
        self.depth -= 1;
        node
    }

    fn sum(&mut self) -> Result<Node, ParseError> {
        let mut lhs = self.product()?;
        loop {
            let column = self.column();
            let build: fn(Box<Expr>, Box<Expr>) -> Expr = if self.eat(&TokenKind::Plus) {
                Expr::Add
            } else if self.eat(&TokenKind::Minus) {
                Expr::Sub
            } else {
                return Ok(lhs);
            };
            let rhs = self.product()?;
            lhs = lhs.join(build, rhs, column)?;
        }
    }

    fn product(&mut self) -> Result<Node, ParseError> {
        let mut lhs = self.unary()?;
        loop {
            let column = self.column();
            let build: fn(Box<Expr>, Box<Expr>) -> Expr = if self.eat(&TokenKind::Star) {
                Expr::Mul
            } else if self.eat(&TokenKind::Slash) {
                Expr::Div
            } else {
                return Ok(lhs);
            };
            let rhs = self.unary()?;
            lhs = lhs.join(build, rhs, column)?;
        }
    }

    fn unary(&mut self) -> Result<Node, ParseError> {
        let column = self.column();
        if self.eat(&TokenKind::Minus) {
            return self.nested(Self::unary, column)?.wrap(Expr::Neg, column);
        }
        if self.eat(&TokenKind::Plus) {
            return self.nested(Self::unary, column);
        }
        self.power()
    }

    fn power(&mut self) -> Result<Node, ParseError> {
        let base = self.primary()?;
        let column = self.column();
        if self.eat(&TokenKind::Caret) {
            let exponent = self.nested(Self::unary, column)?;
            return base.join(Expr::Pow, exponent, column);
        }
        Ok(base)
    }

    fn primary(&mut self) -> Result<Node, ParseError> {
        let Token { kind, column } = self.next().ok_or(ParseError::UnexpectedEnd)?;

        match kind {
            TokenKind::Number(value) => Ok(Node::leaf(Expr::Number(value))),
            TokenKind::LParen => {
                let inner = self.nested(Self::sum, column)?;
                self.close(column)?;
                Ok(inner)
            }
            TokenKind::Name(name) => self.named(name, column),
            other => Err(ParseError::UnexpectedToken {
                found: other.to_string(),
                column,
            }),
        }
    }

    fn named(&mut self, name: String, column: usize) -> Result<Node, ParseError> {
        if name == "x" {
            return Ok(Node::leaf(Expr::Var));
        }
        if let Some(constant) = Constant::from_name(&name) {
            return Ok(Node::leaf(Expr::Constant(constant)));
        }
        let Some(func) = Func::from_name(&name) else {
            return Err(ParseError::UnknownName { name, column });
        };

        let open = match self.peek() {
            Some(Token {
                kind: TokenKind::LParen,
                column,
            }) => *column,
            _ => return Err(ParseError::MissingArguments { name, column }),
        };
        self.pos += 1;

        let argument = self.nested(Self::sum, open)?;
        self.close(open)?;
        argument.wrap(|u| Expr::Call(func, u), column)
    }

    /// Consumes the `)` matching a `(` opened at `open`.
    fn close(&mut self, open: usize) -> Result<(), ParseError> {
        match self.next() {
            Some(Token {
                kind: TokenKind::RParen,
                ..
            }) => Ok(()),
            Some(token) => Err(unexpected(&token)),
            None => Err(ParseError::UnclosedParen { column: open }),
        }
    }
}

fn unexpected(token: &Token) -> ParseError {
    ParseError::UnexpectedToken {
        found: token.kind.to_string(),
        column: token.column,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn x() -> Box<Expr> {
        Box::new(Expr::Var)
    }

    fn num(value: f64) -> Box<Expr> {
        Box::new(Expr::Number(value))
    }

    #[test]
    fn respects_precedence() {
        let expr = parse("1 + 2*x^2").expect("valid");
        assert_eq!(
            expr,
            Expr::Add(num(1.0), Box::new(Expr::Mul(num(2.0), Box::new(Expr::Pow(x(), num(2.0))))))
        );
    }

    #[test]
    fn power_is_right_associative() {
        let expr = parse("2^3^2").expect("valid");
        assert_relative_eq!(expr.eval(0.0), 512.0);
    }

    #[test]
    fn unary_minus_binds_looser_than_power() {
        let expr = parse("-x^2").expect("valid");
        assert_eq!(expr, Expr::Neg(Box::new(Expr::Pow(x(), num(2.0)))));

        let expr = parse("x^-1").expect("valid");
        assert_eq!(expr, Expr::Pow(x(), Box::new(Expr::Neg(num(1.0)))));
    }

    #[test]
    fn subtraction_is_left_associative() {
        let expr = parse("10 - 4 - 3").expect("valid");
        assert_relative_eq!(expr.eval(0.0), 3.0);
    }

    #[test]
    fn recognizes_constants_and_aliases() {
        assert_eq!(parse("e").expect("valid"), Expr::Constant(Constant::E));
        assert_eq!(parse("PI").expect("valid"), Expr::Constant(Constant::Pi));
        assert_eq!(
            parse("log(x)").expect("valid"),
            parse("ln(x)").expect("valid")
        );
        assert_eq!(parse("x**2").expect("valid"), parse("x^2").expect("valid"));
    }

    #[test]
    fn rejects_doubled_operator() {
        let err = parse("x^^2+").expect_err("malformed");
        assert_eq!(
            err,
            ParseError::UnexpectedToken {
                found: "'^'".into(),
                column: 3,
            }
        );
    }

    #[test]
    fn rejects_trailing_operator() {
        assert_eq!(parse("x^2 +"), Err(ParseError::UnexpectedEnd));
    }

    #[test]
    fn rejects_unknown_names() {
        assert!(matches!(
            parse("y + 1"),
            Err(ParseError::UnknownName { ref name, column: 1 }) if name == "y"
        ));
    }

    #[test]
    fn rejects_function_without_parentheses() {
        assert!(matches!(
            parse("sin x"),
            Err(ParseError::MissingArguments { column: 1, .. })
        ));
    }

    #[test]
    fn rejects_implicit_multiplication() {
        assert!(matches!(
            parse("2x"),
            Err(ParseError::UnexpectedToken { column: 2, .. })
        ));
    }

    #[test]
    fn reports_unclosed_parenthesis() {
        assert_eq!(
            parse("cos((x)"),
            Err(ParseError::UnclosedParen { column: 4 })
        );
    }

    #[test]
    fn rejects_blank_input() {
        assert_eq!(parse("   "), Err(ParseError::Empty));
    }

    #[test]
    fn rejects_runaway_nesting() {
        let source = format!("{}x{}", "(".repeat(20_000), ")".repeat(20_000));
        assert_eq!(
            parse(&source),
            Err(ParseError::TooDeep {
                column: MAX_DEPTH + 1
            })
        );

        let source = format!("{}x", "-".repeat(10_000));
        assert!(matches!(parse(&source), Err(ParseError::TooDeep { .. })));

        let source = vec!["x"; 20_000].join("^");
        assert!(matches!(parse(&source), Err(ParseError::TooDeep { .. })));

        let source = format!("{}x{}", "sin(".repeat(5_000), ")".repeat(5_000));
        assert!(matches!(parse(&source), Err(ParseError::TooDeep { .. })));
    }

    #[test]
    fn rejects_runaway_chains() {
        let source = vec!["x"; 200_000].join("+");
        assert_eq!(
            parse(&source),
            Err(ParseError::TooLong {
                column: 2 * MAX_HEIGHT + 2
            })
        );

        let source = vec!["x"; 200_000].join("*");
        assert!(matches!(parse(&source), Err(ParseError::TooLong { .. })));

        // Each level is shallow on its own but the heights add up.
        let inner = vec!["x"; 100].join("+");
        let source = format!("({inner})*({inner})^({inner})");
        assert!(parse(&source).is_ok());
        let source = format!("({inner}){}", format!("*({inner})").repeat(200));
        assert!(matches!(parse(&source), Err(ParseError::TooLong { .. })));
    }

    #[test]
    fn accepts_expressions_near_the_limits() {
        let source = format!("{}x{}", "(".repeat(MAX_DEPTH), ")".repeat(MAX_DEPTH));
        assert_eq!(parse(&source).expect("valid"), Expr::Var);

        let source = vec!["x"; MAX_HEIGHT + 1].join("+");
        let expr = parse(&source).expect("valid");
        assert_relative_eq!(expr.eval(2.0), 2.0 * (MAX_HEIGHT + 1) as f64);

        let source = vec!["x"; 200].join("*");
        let df = parse(&source).expect("valid").derivative();
        assert_relative_eq!(df.eval(1.0), 200.0);
        assert!(!df.to_string().is_empty());
    }
}
