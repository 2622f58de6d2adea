use std::fmt::Display;

use crate::lexer::tokens::Token;

/// Grammar symbol a node was derived from.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum NodeKind {
    /// `IDENT := <disjunction> ;`
    Statement,
    /// `or` / `xor` level
    Disjunction,
    /// `and` level
    Conjunction,
    /// Parenthesized, negated, or single-operand expression
    Atom,
    /// Wrapper around an identifier or literal leaf
    Operand,
    /// A consumed token
    Leaf,
}

impl NodeKind {
    /// Short grammar symbol shown in the rendered tree.
    pub fn symbol(&self) -> &'static str {
        match self {
            NodeKind::Statement => "S",
            NodeKind::Disjunction => "F",
            NodeKind::Conjunction => "T",
            NodeKind::Atom => "E",
            NodeKind::Operand => "a",
            NodeKind::Leaf => "",
        }
    }
}

/// Concrete syntax tree node.
///
/// Non-terminals own their children in source order; leaves own the token
/// they were built from and have no children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    kind: NodeKind,
    children: Vec<Node>,
    token: Option<Token>,
}

impl Node {
    pub fn new(kind: NodeKind, children: Vec<Node>) -> Self {
        Node {
            kind,
            children,
            token: None,
        }
    }

    pub fn leaf(token: Token) -> Self {
        Node {
            kind: NodeKind::Leaf,
            children: vec![],
            token: Some(token),
        }
    }

    pub fn get_kind(&self) -> NodeKind {
        self.kind
    }

    pub fn get_children(&self) -> &[Node] {
        &self.children
    }

    pub fn get_token(&self) -> Option<&Token> {
        self.token.as_ref()
    }

    pub fn is_leaf(&self) -> bool {
        self.kind == NodeKind::Leaf
    }

    /// Leaves show their literal text, everything else its grammar symbol.
    pub fn label(&self) -> &str {
        match &self.token {
            Some(token) => &token.value,
            None => self.kind.symbol(),
        }
    }

    /// Tokens under this node, left to right.
    pub fn tokens(&self) -> Vec<&Token> {
        let mut tokens = vec![];
        self.collect_tokens(&mut tokens);
        tokens
    }

    fn collect_tokens<'a>(&'a self, tokens: &mut Vec<&'a Token>) {
        if let Some(token) = &self.token {
            tokens.push(token);
        }
        for child in &self.children {
            child.collect_tokens(tokens);
        }
    }

    /// Renders the tree with box-drawing connectors, one node per line.
    ///
    /// ```text
    /// └── S
    ///     ├── a
    ///     │   └── x
    ///     ├── :=
    /// ```
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.render_into(&mut out, "", true);
        out
    }

    fn render_into(&self, out: &mut String, prefix: &str, is_tail: bool) {
        let connector = if is_tail { "└── " } else { "├── " };
        out.push_str(prefix);
        out.push_str(connector);
        out.push_str(self.label());
        out.push('\n');

        let child_prefix = format!("{}{}", prefix, if is_tail { "    " } else { "│   " });
        let last = self.children.len().saturating_sub(1);
        for (i, child) in self.children.iter().enumerate() {
            child.render_into(out, &child_prefix, i == last);
        }
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render())
    }
}
