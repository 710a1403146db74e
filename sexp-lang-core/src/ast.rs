use std::fmt::Display;
use std::rc::Rc;

/// A node of the syntax tree. Built bottom-up by the parser and never mutated
/// afterwards.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Node {
    Number(i64),
    Symbol(Rc<str>),
    List(Vec<Node>),
    Program(Vec<Node>),
}

impl Node {
    pub fn symbol(name: &str) -> Node {
        Node::Symbol(name.into())
    }
}

/// The parse root. The grammar only admits a single top-level list, so
/// `forms` holds exactly one element when produced by the parser.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Program {
    pub forms: Vec<Node>,
}

impl From<Program> for Node {
    fn from(program: Program) -> Self {
        Node::Program(program.forms)
    }
}

fn write_separated(
    f: &mut std::fmt::Formatter<'_>,
    nodes: &[Node],
    separator: &str,
) -> std::fmt::Result {
    for (i, node) in nodes.iter().enumerate() {
        if i > 0 {
            write!(f, "{}", separator)?;
        }
        write!(f, "{}", node)?;
    }
    Ok(())
}

impl Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Node::Number(value) => write!(f, "{}", value),
            Node::Symbol(name) => write!(f, "{}", name),
            Node::List(elements) => {
                write!(f, "(")?;
                write_separated(f, elements, " ")?;
                write!(f, ")")
            }
            Node::Program(forms) => write_separated(f, forms, "\n"),
        }
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write_separated(f, &self.forms, "\n")
    }
}
