//! Parser for the CSS subset produced by the selector builder.
//!
//! Supported: type and universal selectors, `#id`, `[attr]`, `[attr="v"]`,
//! `:nth-of-type(n)`, `:checked`, and the child and descendant combinators.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Combinator {
    Descendant,
    Child,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct AttrTest {
    pub name: String,
    /// `None` only tests presence.
    pub value: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Compound {
    pub tag: Option<String>,
    pub id: Option<String>,
    pub attrs: Vec<AttrTest>,
    pub nth_of_type: Option<usize>,
    pub checked: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Step {
    /// Relation to the previous step; ignored on the first one.
    pub combinator: Combinator,
    pub compound: Compound,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Selector {
    pub steps: Vec<Step>,
}

impl Selector {
    /// `None` when the input is not part of the supported subset.
    pub fn parse(input: &str) -> Option<Self> {
        let mut parser = Parser {
            chars: input.chars().collect(),
            pos: 0,
        };
        parser.skip_ws();

        let mut steps = Vec::new();
        let mut combinator = Combinator::Descendant;
        loop {
            let compound = parser.compound()?;
            steps.push(Step {
                combinator,
                compound,
            });
            let had_ws = parser.skip_ws();
            match parser.peek() {
                None => break,
                Some('>') => {
                    parser.bump();
                    parser.skip_ws();
                    combinator = Combinator::Child;
                }
                Some(_) if had_ws => combinator = Combinator::Descendant,
                Some(_) => return None,
            }
        }
        Some(Self { steps })
    }
}

struct Parser {
    chars: Vec<char>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += 1;
        Some(c)
    }

    fn expect(&mut self, expected: char) -> Option<()> {
        (self.bump()? == expected).then_some(())
    }

    fn skip_ws(&mut self) -> bool {
        let start = self.pos;
        while self.peek().is_some_and(char::is_whitespace) {
            self.pos += 1;
        }
        self.pos > start
    }

    fn compound(&mut self) -> Option<Compound> {
        let mut compound = Compound::default();
        let mut any = false;

        if self.peek() == Some('*') {
            self.bump();
            any = true;
        } else if let Some(tag) = self.ident() {
            compound.tag = Some(tag.to_ascii_lowercase());
            any = true;
        }

        loop {
            match self.peek() {
                Some('#') => {
                    self.bump();
                    compound.id = Some(self.ident()?);
                }
                Some('[') => {
                    self.bump();
                    compound.attrs.push(self.attr()?);
                }
                Some(':') => {
                    self.bump();
                    match self.ident()?.to_ascii_lowercase().as_str() {
                        "nth-of-type" => {
                            self.expect('(')?;
                            self.skip_ws();
                            compound.nth_of_type = Some(self.number()?);
                            self.skip_ws();
                            self.expect(')')?;
                        }
                        "checked" => compound.checked = true,
                        _ => return None,
                    }
                }
                _ => break,
            }
            any = true;
        }

        any.then_some(compound)
    }

    fn ident(&mut self) -> Option<String> {
        let mut out = String::new();
        while let Some(c) = self.peek() {
            if c == '\\' {
                self.bump();
                out.push(self.bump()?);
            } else if c.is_alphanumeric() || c == '-' || c == '_' || !c.is_ascii() {
                self.bump();
                out.push(c);
            } else {
                break;
            }
        }
        (!out.is_empty()).then_some(out)
    }

    fn attr(&mut self) -> Option<AttrTest> {
        self.skip_ws();
        let name = self.ident()?.to_ascii_lowercase();
        self.skip_ws();
        if self.peek() == Some(']') {
            self.bump();
            return Some(AttrTest { name, value: None });
        }
        self.expect('=')?;
        self.skip_ws();
        let value = match self.peek()? {
            quote @ ('"' | '\'') => self.quoted(quote)?,
            _ => self.ident()?,
        };
        self.skip_ws();
        self.expect(']')?;
        Some(AttrTest {
            name,
            value: Some(value),
        })
    }

    fn quoted(&mut self, quote: char) -> Option<String> {
        self.bump();
        let mut out = String::new();
        loop {
            match self.bump()? {
                '\\' => out.push(self.bump()?),
                c if c == quote => return Some(out),
                c => out.push(c),
            }
        }
    }

    fn number(&mut self) -> Option<usize> {
        let start = self.pos;
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.pos += 1;
        }
        let digits: String = self.chars[start..self.pos].iter().collect();
        digits.parse().ok().filter(|n| *n >= 1)
    }
}
