//! Structural tracking for an expression under construction.
//!
//! A two-state machine (term expected / operator or close expected) plus the
//! number of open groups. It follows the grammar accepted by the search
//! endpoint: `expr := term | "(" expr ")" | expr OP expr`.

use crate::error::Defect;

/// What the next token must be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Expect {
    /// A term or an opening group.
    #[default]
    Term,
    /// A boolean operator or a closing group.
    OperatorOrClose,
}

/// Kinds of token appended to an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Term,
    Operator,
    Open,
    Close,
}

#[derive(Debug, Clone, Default)]
pub struct Structure {
    expect: Expect,
    depth: usize,
    tokens: usize,
}

impl Structure {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tokens seen so far.
    pub fn tokens(&self) -> usize {
        self.tokens
    }

    pub fn expect(&self) -> Expect {
        self.expect
    }

    pub fn open_groups(&self) -> usize {
        self.depth
    }

    /// Record `token`. The token is always counted; on a violation the state
    /// moves on as if the token had been valid so later checks stay useful.
    pub fn push(&mut self, token: Token) -> Result<(), Defect> {
        self.tokens += 1;

        let outcome = match (token, self.expect) {
            (Token::Term, Expect::Term) => Ok(()),
            (Token::Term, Expect::OperatorOrClose) => Err(Defect::MissingOperator),
            (Token::Open, Expect::Term) => Ok(()),
            (Token::Open, Expect::OperatorOrClose) => Err(Defect::MissingOperator),
            (Token::Operator, Expect::OperatorOrClose) => Ok(()),
            (Token::Operator, Expect::Term) => Err(Defect::OperatorWithoutLeftOperand),
            (Token::Close, Expect::Term) => Err(Defect::EmptyOperand),
            (Token::Close, Expect::OperatorOrClose) if self.depth == 0 => {
                Err(Defect::UnmatchedClose)
            }
            (Token::Close, Expect::OperatorOrClose) => Ok(()),
        };

        match token {
            Token::Term | Token::Close => self.expect = Expect::OperatorOrClose,
            Token::Operator | Token::Open => self.expect = Expect::Term,
        }
        match token {
            Token::Open => self.depth += 1,
            Token::Close => self.depth = self.depth.saturating_sub(1),
            _ => {}
        }

        outcome
    }

    /// Check that the expression can be finalized. An empty expression is
    /// complete.
    pub fn complete(&self) -> Result<(), Defect> {
        if self.tokens == 0 {
            return Ok(());
        }
        if self.expect == Expect::Term || self.open_groups() > 0 {
            return Err(Defect::Incomplete { open_groups: self.open_groups() });
        }
        Ok(())
    }
}
