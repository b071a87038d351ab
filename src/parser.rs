use crate::ast::{BlockStatement, Expression, InfixOperator, PrefixOperator, Program, Statement};
use crate::lexer::Lexer;
use crate::token::{Token, TokenKind};

type Result<T> = std::result::Result<T, ParserError>;

/// Parses an expression that starts at the current token (null denotation).
type PrefixParseFn<'a> = fn(&mut Parser<'a>) -> Result<Expression>;
/// Extends an already parsed left operand with the current token (left denotation).
type InfixParseFn<'a> = fn(&mut Parser<'a>, Expression) -> Result<Expression>;

/// How deeply expressions may nest before the parser gives up on them.
pub const DEFAULT_MAX_DEPTH: usize = 256;

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ParserError {
    #[error("expected next token to be {expected}, got {} instead", .got.kind)]
    UnexpectedToken { expected: TokenKind, got: Token },
    #[error("no prefix parse function for {0}")]
    NoPrefixParseFn(TokenKind),
    #[error("illegal token `{0}`")]
    IllegalToken(String),
    #[error("could not parse `{0}` as integer")]
    InvalidInteger(String),
    #[error("could not parse `{0}` as float")]
    InvalidFloat(String),
    #[error("expression nesting exceeds the maximum depth of {0}")]
    NestingTooDeep(usize),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
enum Precedence {
    Lowest,
    /// == and !=
    Equals,
    /// < and >
    LessGreater,
    /// + and -
    Sum,
    /// * and /
    Product,
    /// -x and !x
    Prefix,
}

fn precedence_of(kind: TokenKind) -> Precedence {
    match kind {
        TokenKind::Eq | TokenKind::NotEq => Precedence::Equals,
        TokenKind::Lt | TokenKind::Gt => Precedence::LessGreater,
        TokenKind::Plus | TokenKind::Minus => Precedence::Sum,
        TokenKind::Asterisk | TokenKind::Slash => Precedence::Product,
        _ => Precedence::Lowest,
    }
}

pub struct Parser<'a> {
    lexer: Lexer<'a>,
    cur_token: Token,
    peek_token: Token,
    errors: Vec<ParserError>,

    prefix_parse_fns: [Option<PrefixParseFn<'a>>; TokenKind::COUNT],
    infix_parse_fns: [Option<InfixParseFn<'a>>; TokenKind::COUNT],

    depth: usize,
    max_depth: usize,
    /// Blocks entered but not yet closed; lets error recovery skip to their `}`.
    open_blocks: usize,
}

impl<'a> Parser<'a> {
    pub fn new(lexer: Lexer<'a>) -> Self {
        Parser::with_max_depth(lexer, DEFAULT_MAX_DEPTH)
    }

    pub fn with_max_depth(lexer: Lexer<'a>, max_depth: usize) -> Self {
        let mut p = Parser {
            lexer,
            cur_token: Token::eof(),
            peek_token: Token::eof(),
            errors: vec![],
            prefix_parse_fns: [None; TokenKind::COUNT],
            infix_parse_fns: [None; TokenKind::COUNT],
            depth: 0,
            max_depth,
            open_blocks: 0,
        };

        p.register_prefix(TokenKind::Ident, Parser::parse_identifier);
        p.register_prefix(TokenKind::Int, Parser::parse_integer_literal);
        p.register_prefix(TokenKind::Float, Parser::parse_float_literal);
        p.register_prefix(TokenKind::True, Parser::parse_boolean);
        p.register_prefix(TokenKind::False, Parser::parse_boolean);
        p.register_prefix(TokenKind::Bang, Parser::parse_prefix_expression);
        p.register_prefix(TokenKind::Minus, Parser::parse_prefix_expression);
        p.register_prefix(TokenKind::OpenParen, Parser::parse_grouped_expression);
        p.register_prefix(TokenKind::If, Parser::parse_if_expression);
        p.register_prefix(TokenKind::Function, Parser::parse_function_literal);

        for kind in &[
            TokenKind::Plus,
            TokenKind::Minus,
            TokenKind::Asterisk,
            TokenKind::Slash,
            TokenKind::Lt,
            TokenKind::Gt,
            TokenKind::Eq,
            TokenKind::NotEq,
        ] {
            p.register_infix(*kind, Parser::parse_infix_expression);
        }

        // Read 2 tokens so that cur_token and peek_token are both initialised
        p.next_token();
        p.next_token();

        p
    }

    fn register_prefix(&mut self, kind: TokenKind, f: PrefixParseFn<'a>) {
        self.prefix_parse_fns[kind.index()] = Some(f);
    }

    fn register_infix(&mut self, kind: TokenKind, f: InfixParseFn<'a>) {
        self.infix_parse_fns[kind.index()] = Some(f);
    }

    pub fn errors(&self) -> &[ParserError] {
        &self.errors
    }

    pub fn next_token(&mut self) {
        let next = self.lexer.next_token();
        self.cur_token = std::mem::replace(&mut self.peek_token, next);
    }

    /// Always returns a program; statements that failed to parse are left
    /// out and their errors are collected in `errors()`.
    pub fn parse_program(&mut self) -> Program {
        let mut statements = vec![];

        while self.cur_token.kind != TokenKind::Eof {
            match self.parse_statement() {
                Ok(stmt) => statements.push(stmt),
                Err(err) => {
                    self.errors.push(err);
                    self.synchronize();
                }
            }
            self.next_token();
        }

        tracing::debug!(
            statements = statements.len(),
            errors = self.errors.len(),
            "parsed program"
        );

        Program { statements }
    }

    /// Skips to the end of the failed statement so parsing resumes at the next one.
    /// Blocks the failure happened inside are closed first, so a `;` within
    /// them does not count as the end of the statement.
    fn synchronize(&mut self) {
        let mut open_blocks = std::mem::replace(&mut self.open_blocks, 0);

        loop {
            match self.cur_token.kind {
                TokenKind::Eof => return,
                TokenKind::SemiColon if open_blocks == 0 => return,
                TokenKind::OpenBrace => open_blocks += 1,
                TokenKind::CloseBrace => open_blocks = open_blocks.saturating_sub(1),
                _ => {}
            }
            self.next_token();
        }
    }

    fn parse_statement(&mut self) -> Result<Statement> {
        match self.cur_token.kind {
            TokenKind::Let => self.parse_let_statement(),
            TokenKind::Return => self.parse_return_statement(),
            _ => self.parse_expression_statement(),
        }
    }

    fn parse_let_statement(&mut self) -> Result<Statement> {
        self.expect_peek(TokenKind::Ident)?;
        let name = self.cur_token.literal.clone();

        self.expect_peek(TokenKind::Assign)?;
        self.next_token();

        let value = self.parse_expression(Precedence::Lowest)?;
        self.skip_optional_semicolon();

        Ok(Statement::Let(name, value))
    }

    fn parse_return_statement(&mut self) -> Result<Statement> {
        self.next_token();

        let value = self.parse_expression(Precedence::Lowest)?;
        self.skip_optional_semicolon();

        Ok(Statement::Return(value))
    }

    fn parse_expression_statement(&mut self) -> Result<Statement> {
        let expression = self.parse_expression(Precedence::Lowest)?;
        self.skip_optional_semicolon();

        Ok(Statement::Expression(expression))
    }

    fn skip_optional_semicolon(&mut self) {
        if self.peek_token_is(TokenKind::SemiColon) {
            self.next_token();
        }
    }

    fn parse_expression(&mut self, precedence: Precedence) -> Result<Expression> {
        let depth = self.depth;

        self.descend()?;
        let res = self.parse_pratt(precedence);
        self.depth = depth;

        res
    }

    /// Counts one more level of tree depth, both for nested expressions and
    /// for each operator folded into a left-associative chain.
    fn descend(&mut self) -> Result<()> {
        if self.depth >= self.max_depth {
            return Err(ParserError::NestingTooDeep(self.max_depth));
        }

        self.depth += 1;
        Ok(())
    }

    fn parse_pratt(&mut self, precedence: Precedence) -> Result<Expression> {
        let prefix = match self.prefix_parse_fns[self.cur_token.kind.index()] {
            Some(prefix) => prefix,
            None => return Err(self.no_prefix_parse_fn_error()),
        };

        let mut left = prefix(self)?;

        while !self.peek_token_is(TokenKind::SemiColon) && precedence < self.peek_precedence() {
            let infix = match self.infix_parse_fns[self.peek_token.kind.index()] {
                Some(infix) => infix,
                None => return Ok(left),
            };

            self.descend()?;
            self.next_token();
            left = infix(self, left)?;
        }

        Ok(left)
    }

    fn no_prefix_parse_fn_error(&self) -> ParserError {
        match self.cur_token.kind {
            TokenKind::Illegal => ParserError::IllegalToken(self.cur_token.literal.clone()),
            kind => ParserError::NoPrefixParseFn(kind),
        }
    }

    fn parse_identifier(&mut self) -> Result<Expression> {
        Ok(Expression::Identifier(self.cur_token.literal.clone()))
    }

    fn parse_integer_literal(&mut self) -> Result<Expression> {
        let literal = &self.cur_token.literal;

        literal
            .parse()
            .map(Expression::IntegerLiteral)
            .map_err(|_| ParserError::InvalidInteger(literal.clone()))
    }

    fn parse_float_literal(&mut self) -> Result<Expression> {
        let literal = &self.cur_token.literal;

        literal
            .parse()
            .map(Expression::FloatLiteral)
            .map_err(|_| ParserError::InvalidFloat(literal.clone()))
    }

    fn parse_boolean(&mut self) -> Result<Expression> {
        Ok(Expression::Boolean(self.cur_token_is(TokenKind::True)))
    }

    fn parse_prefix_expression(&mut self) -> Result<Expression> {
        let operator = PrefixOperator::from_token(self.cur_token.kind)
            .ok_or_else(|| self.no_prefix_parse_fn_error())?;

        self.next_token();
        let operand = self.parse_expression(Precedence::Prefix)?;

        Ok(Expression::Prefix(operator, Box::new(operand)))
    }

    fn parse_infix_expression(&mut self, left: Expression) -> Result<Expression> {
        let operator = InfixOperator::from_token(self.cur_token.kind)
            .ok_or_else(|| self.no_prefix_parse_fn_error())?;
        let precedence = self.cur_precedence();

        self.next_token();
        let right = self.parse_expression(precedence)?;

        Ok(Expression::Infix(operator, Box::new(left), Box::new(right)))
    }

    fn parse_grouped_expression(&mut self) -> Result<Expression> {
        self.next_token();

        let expression = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::CloseParen)?;

        Ok(expression)
    }

    fn parse_if_expression(&mut self) -> Result<Expression> {
        self.expect_peek(TokenKind::OpenParen)?;
        self.next_token();

        let condition = self.parse_expression(Precedence::Lowest)?;

        self.expect_peek(TokenKind::CloseParen)?;
        self.expect_peek(TokenKind::OpenBrace)?;

        let consequence = self.parse_block_statement()?;

        let alternative = if self.peek_token_is(TokenKind::Else) {
            self.next_token();
            self.expect_peek(TokenKind::OpenBrace)?;

            Some(self.parse_block_statement()?)
        } else {
            None
        };

        Ok(Expression::If(Box::new(condition), consequence, alternative))
    }

    fn parse_function_literal(&mut self) -> Result<Expression> {
        self.expect_peek(TokenKind::OpenParen)?;

        let parameters = self.parse_function_parameters()?;

        self.expect_peek(TokenKind::OpenBrace)?;

        let body = self.parse_block_statement()?;

        Ok(Expression::FunctionLiteral(parameters, body))
    }

    fn parse_function_parameters(&mut self) -> Result<Vec<String>> {
        let mut identifiers = vec![];

        if self.peek_token_is(TokenKind::CloseParen) {
            self.next_token();
            return Ok(identifiers);
        }

        self.expect_peek(TokenKind::Ident)?;
        identifiers.push(self.cur_token.literal.clone());

        while self.peek_token_is(TokenKind::Comma) {
            self.next_token();
            self.expect_peek(TokenKind::Ident)?;
            identifiers.push(self.cur_token.literal.clone());
        }

        self.expect_peek(TokenKind::CloseParen)?;

        Ok(identifiers)
    }

    /// Parses statements up to the closing brace; `cur_token` is the opening one on entry.
    fn parse_block_statement(&mut self) -> Result<BlockStatement> {
        let mut statements = vec![];

        self.open_blocks += 1;
        self.next_token();

        while !self.cur_token_is(TokenKind::CloseBrace) {
            if self.cur_token_is(TokenKind::Eof) {
                return Err(ParserError::UnexpectedToken {
                    expected: TokenKind::CloseBrace,
                    got: self.cur_token.clone(),
                });
            }

            statements.push(self.parse_statement()?);
            self.next_token();
        }

        self.open_blocks -= 1;
        Ok(BlockStatement { statements })
    }

    fn cur_token_is(&self, kind: TokenKind) -> bool {
        self.cur_token.kind == kind
    }

    fn peek_token_is(&self, kind: TokenKind) -> bool {
        self.peek_token.kind == kind
    }

    fn expect_peek(&mut self, kind: TokenKind) -> Result<()> {
        if !self.peek_token_is(kind) {
            return Err(ParserError::UnexpectedToken {
                expected: kind,
                got: self.peek_token.clone(),
            });
        }

        self.next_token();
        Ok(())
    }

    fn peek_precedence(&self) -> Precedence {
        precedence_of(self.peek_token.kind)
    }

    fn cur_precedence(&self) -> Precedence {
        precedence_of(self.cur_token.kind)
    }
}

#[cfg(test)]
mod test {
    use crate::ast::{BlockStatement, Expression, InfixOperator, PrefixOperator, Statement};
    use crate::lexer::Lexer;
    use crate::parser::{Parser, ParserError, DEFAULT_MAX_DEPTH};
    use crate::token::{Token, TokenKind};

    fn parse(input: &str) -> (Vec<Statement>, Vec<ParserError>) {
        let lexer = Lexer::new(input);
        let mut parser = Parser::new(lexer);
        let program = parser.parse_program();

        (program.statements, parser.errors().to_vec())
    }

    fn parse_ok(input: &str) -> Vec<Statement> {
        let (statements, errors) = parse(input);

        assert!(errors.is_empty(), "Parser errors for `{}`: {:?}", input, errors);

        statements
    }

    fn ident(name: &str) -> Box<Expression> {
        Box::new(Expression::Identifier(name.to_string()))
    }

    fn int(v: i64) -> Box<Expression> {
        Box::new(Expression::IntegerLiteral(v))
    }

    #[test]
    fn let_statement() {
        let input = "
let x = 5;
let y = 10.5;
let foobar = y;
        ";

        assert_eq!(
            parse_ok(input),
            vec![
                Statement::Let("x".to_string(), Expression::IntegerLiteral(5)),
                Statement::Let("y".to_string(), Expression::FloatLiteral(10.5)),
                Statement::Let(
                    "foobar".to_string(),
                    Expression::Identifier("y".to_string())
                ),
            ]
        );
    }

    #[test]
    fn return_statement() {
        let input = "
return 5;
return 10;
return 993322
";

        assert_eq!(
            parse_ok(input),
            vec![
                Statement::Return(Expression::IntegerLiteral(5)),
                Statement::Return(Expression::IntegerLiteral(10)),
                Statement::Return(Expression::IntegerLiteral(993322)),
            ]
        );
    }

    #[test]
    fn literal_expressions() {
        let tests = vec![
            ("foobar;", Expression::Identifier("foobar".to_string())),
            ("5;", Expression::IntegerLiteral(5)),
            ("2.5", Expression::FloatLiteral(2.5)),
            (".4", Expression::FloatLiteral(0.4)),
            ("true", Expression::Boolean(true)),
            ("false;", Expression::Boolean(false)),
        ];

        for (input, expected) in tests {
            assert_eq!(parse_ok(input), vec![Statement::Expression(expected)]);
        }
    }

    #[test]
    fn prefix_expressions() {
        assert_eq!(
            parse_ok("!5; -x"),
            vec![
                Statement::Expression(Expression::Prefix(PrefixOperator::Bang, int(5))),
                Statement::Expression(Expression::Prefix(PrefixOperator::Minus, ident("x"))),
            ]
        );
    }

    #[test]
    fn infix_expressions() {
        let tests = vec![
            ("5 + 5;", InfixOperator::Plus),
            ("5 - 5;", InfixOperator::Minus),
            ("5 * 5;", InfixOperator::Asterisk),
            ("5 / 5;", InfixOperator::Slash),
            ("5 > 5;", InfixOperator::Gt),
            ("5 < 5;", InfixOperator::Lt),
            ("5 == 5;", InfixOperator::Eq),
            ("5 != 5;", InfixOperator::NotEq),
        ];

        for (input, operator) in tests {
            assert_eq!(
                parse_ok(input),
                vec![Statement::Expression(Expression::Infix(
                    operator,
                    int(5),
                    int(5)
                ))],
                "for `{}`",
                input
            );
        }
    }

    #[test]
    fn operator_precedence() {
        let tests = vec![
            ("-a * b", "((-a) * b)"),
            ("!-a", "(!(-a))"),
            ("a + b + c", "((a + b) + c)"),
            ("a + b - c", "((a + b) - c)"),
            ("a * b * c", "((a * b) * c)"),
            ("a * b / c", "((a * b) / c)"),
            ("a + b / c", "(a + (b / c))"),
            ("a + b * c + d / e - f", "(((a + (b * c)) + (d / e)) - f)"),
            ("3 + 4; -5 * 5", "(3 + 4)\n((-5) * 5)"),
            ("5 > 4 == 3 < 4", "((5 > 4) == (3 < 4))"),
            ("5 < 4 != 3 > 4", "((5 < 4) != (3 > 4))"),
            (
                "3 + 4 * 5 == 3 * 1 + 4 * 5",
                "((3 + (4 * 5)) == ((3 * 1) + (4 * 5)))",
            ),
            ("true", "true"),
            ("3 > 5 == false", "((3 > 5) == false)"),
            ("1 + (2 + 3) + 4", "((1 + (2 + 3)) + 4)"),
            ("(5 + 5) * 2", "((5 + 5) * 2)"),
            ("2 / (5 + 5)", "(2 / (5 + 5))"),
            ("-(5 + 5)", "(-(5 + 5))"),
            ("!(true == true)", "(!(true == true))"),
            ("1.5 * 2", "(1.5 * 2)"),
        ];

        for (input, expected) in tests {
            let lexer = Lexer::new(input);
            let mut parser = Parser::new(lexer);
            let program = parser.parse_program();

            assert!(parser.errors().is_empty(), "{:?}", parser.errors());
            assert_eq!(expected, program.to_string(), "for `{}`", input);
        }
    }

    #[test]
    fn if_expression() {
        assert_eq!(
            parse_ok("if (x < y) { x }"),
            vec![Statement::Expression(Expression::If(
                Box::new(Expression::Infix(InfixOperator::Lt, ident("x"), ident("y"))),
                BlockStatement {
                    statements: vec![Statement::Expression(Expression::Identifier(
                        "x".to_string()
                    ))],
                },
                None,
            ))]
        );
    }

    #[test]
    fn if_else_expression() {
        assert_eq!(
            parse_ok("if (x < y) { x } else { return y; }"),
            vec![Statement::Expression(Expression::If(
                Box::new(Expression::Infix(InfixOperator::Lt, ident("x"), ident("y"))),
                BlockStatement {
                    statements: vec![Statement::Expression(Expression::Identifier(
                        "x".to_string()
                    ))],
                },
                Some(BlockStatement {
                    statements: vec![Statement::Return(Expression::Identifier("y".to_string()))],
                }),
            ))]
        );
    }

    #[test]
    fn function_literal() {
        let tests = vec![
            ("fn() {};", vec![]),
            ("fn(x) {};", vec!["x"]),
            ("fn(x, y, z) {};", vec!["x", "y", "z"]),
        ];

        for (input, expected) in tests {
            let expected_params: Vec<String> = expected.iter().map(|s| s.to_string()).collect();

            assert_eq!(
                parse_ok(input),
                vec![Statement::Expression(Expression::FunctionLiteral(
                    expected_params,
                    BlockStatement::default(),
                ))]
            );
        }

        assert_eq!(
            "fn(x, y) { (x + y) }",
            parse_ok("fn(x, y) { x + y; }")[0].to_string()
        );
    }

    #[test]
    fn rendered_programs_reparse_identically() {
        let inputs = vec![
            "let x = 5 * (2 + 3); x",
            "if (1 < 2) { 10 } else { -2.0 }",
            "1;\n-2",
            "let f = fn(a) { return !a; };",
            "return --1;",
        ];

        for input in inputs {
            let lexer = Lexer::new(input);
            let mut parser = Parser::new(lexer);
            let rendered = parser.parse_program().to_string();
            assert!(parser.errors().is_empty(), "{:?}", parser.errors());

            let lexer = Lexer::new(&rendered);
            let mut parser = Parser::new(lexer);
            let reparsed = parser.parse_program();

            assert!(parser.errors().is_empty(), "`{}`: {:?}", rendered, parser.errors());
            assert_eq!(rendered, reparsed.to_string(), "for `{}`", input);
        }
    }

    #[test]
    fn errors_are_accumulated() {
        let (statements, errors) = parse("let = 5; let x 5; 7; let y = ;");

        assert_eq!(
            errors,
            vec![
                ParserError::UnexpectedToken {
                    expected: TokenKind::Ident,
                    got: Token::new(TokenKind::Assign, "="),
                },
                ParserError::UnexpectedToken {
                    expected: TokenKind::Assign,
                    got: Token::new(TokenKind::Int, "5"),
                },
                ParserError::NoPrefixParseFn(TokenKind::SemiColon),
            ]
        );
        assert_eq!(statements, vec![Statement::Expression(Expression::IntegerLiteral(7))]);
    }

    #[test]
    fn error_messages() {
        let tests = vec![
            ("let = 5", "expected next token to be IDENT, got = instead"),
            ("}", "no prefix parse function for }"),
            ("5.4.4", "illegal token `5.4.4`"),
            ("1 + @", "illegal token `@`"),
            (
                "99999999999999999999",
                "could not parse `99999999999999999999` as integer",
            ),
            (".", "could not parse `.` as float"),
            ("if (true) { 1", "expected next token to be }, got EOF instead"),
        ];

        for (input, expected) in tests {
            let (_, errors) = parse(input);

            assert_eq!(1, errors.len(), "for `{}`: {:?}", input, errors);
            assert_eq!(expected, errors[0].to_string());
        }
    }

    #[test]
    fn malformed_input_still_yields_a_program() {
        let lexer = Lexer::new("( ( (");
        let mut parser = Parser::new(lexer);
        let program = parser.parse_program();

        assert!(program.statements.is_empty());
        assert!(!parser.errors().is_empty());
        assert!(parser.errors().iter().all(|e| !e.to_string().is_empty()));
    }

    #[test]
    fn nesting_is_bounded() {
        let input = format!("{}1", "-".repeat(50));

        let lexer = Lexer::new(&input);
        let mut parser = Parser::with_max_depth(lexer, 10);
        parser.parse_program();
        assert_eq!(parser.errors(), &[ParserError::NestingTooDeep(10)]);

        let lexer = Lexer::new(&input);
        let mut parser = Parser::new(lexer);
        parser.parse_program();
        assert!(parser.errors().is_empty());
    }

    #[test]
    fn long_operator_chains_are_bounded() {
        let (statements, errors) = parse(&format!("1{}; 7", "+1".repeat(100_000)));

        assert_eq!(errors, vec![ParserError::NestingTooDeep(DEFAULT_MAX_DEPTH)]);
        assert_eq!(statements, vec![Statement::Expression(Expression::IntegerLiteral(7))]);

        let (statements, errors) = parse(&format!("1{}", " * 2 - 1".repeat(100)));
        assert!(errors.is_empty(), "{:?}", errors);
        assert_eq!(1, statements.len());
    }

    #[test]
    fn recovery_skips_past_the_failed_block() {
        let tests = vec![
            (
                "if (x) { 1 + ; 2 }; 3",
                ParserError::NoPrefixParseFn(TokenKind::SemiColon),
            ),
            (
                "if (x) { if (y) { let = 1; } 2 } else { 4; }; 3",
                ParserError::UnexpectedToken {
                    expected: TokenKind::Ident,
                    got: Token::new(TokenKind::Assign, "="),
                },
            ),
            (
                "fn(a) { a + }; 3",
                ParserError::NoPrefixParseFn(TokenKind::CloseBrace),
            ),
        ];

        for (input, expected) in tests {
            let (statements, errors) = parse(input);

            assert_eq!(errors, vec![expected], "for `{}`", input);
            assert_eq!(
                statements,
                vec![Statement::Expression(Expression::IntegerLiteral(3))],
                "for `{}`",
                input
            );
        }
    }
}
