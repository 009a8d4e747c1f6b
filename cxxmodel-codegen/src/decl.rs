//! Type declarations.
//!
//! A [`TypeDecl`] is the structured form of a declaration such as
//! `std::map<std::string, std::vector<Pet>>`. Rendering goes through
//! `Display`; [`DeclTree`] reads a rendered string back so declarations can
//! be compared structurally and re-resolved.

use crate::error::DeclParseError;
use crate::naming::NameNormalizer;
use crate::resolver::{ResolvedType, TypeResolver};
use cxxmodel_schema::{DiscriminatorLookup, SchemaNode, TypeKey};
use std::fmt;
use std::str::FromStr;

/// Fully parameterized type declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeDecl {
    /// Type without template arguments.
    Leaf(ResolvedType),
    /// Container template applied to arguments.
    Generic {
        /// Container type.
        base: ResolvedType,
        /// Template arguments, in order.
        args: Vec<TypeDecl>,
    },
}

impl TypeDecl {
    /// Returns the untagged tree form of the declaration.
    #[must_use]
    pub fn to_tree(&self) -> DeclTree {
        match self {
            Self::Leaf(resolved) => DeclTree::from_resolved(resolved),
            Self::Generic { base, args } => DeclTree {
                name: base.to_string(),
                args: args.iter().map(Self::to_tree).collect(),
            },
        }
    }

    /// Visits every resolved type in the declaration, outermost first.
    pub fn for_each_type<'a>(&'a self, visit: &mut impl FnMut(&'a ResolvedType)) {
        match self {
            Self::Leaf(resolved) => visit(resolved),
            Self::Generic { base, args } => {
                visit(base);
                for arg in args {
                    arg.for_each_type(visit);
                }
            }
        }
    }
}

impl fmt::Display for TypeDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Leaf(resolved) => write!(f, "{resolved}"),
            Self::Generic { base, args } => {
                write!(f, "{base}<")?;
                write_args(f, args)?;
                f.write_str(">")
            }
        }
    }
}

/// Declaration as a plain name/argument tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclTree {
    /// Type name, possibly namespace-qualified.
    pub name: String,
    /// Template arguments.
    pub args: Vec<DeclTree>,
}

impl DeclTree {
    /// Creates a tree without arguments.
    #[must_use]
    pub fn leaf(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
        }
    }

    fn from_resolved(resolved: &ResolvedType) -> Self {
        match resolved {
            ResolvedType::Shared { wrapper, inner } => Self {
                name: wrapper.clone(),
                args: vec![Self::from_resolved(inner)],
            },
            other => Self::leaf(other.name()),
        }
    }
}

impl fmt::Display for DeclTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        if !self.args.is_empty() {
            f.write_str("<")?;
            write_args(f, &self.args)?;
            f.write_str(">")?;
        }
        Ok(())
    }
}

impl FromStr for DeclTree {
    type Err = DeclParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parser = DeclParser { input: s, pos: 0 };
        let tree = parser.parse_decl()?;
        parser.skip_ws();
        match parser.peek() {
            Some(found) => Err(DeclParseError::UnexpectedChar {
                found,
                position: parser.pos,
            }),
            None => Ok(tree),
        }
    }
}

fn write_args<T: fmt::Display>(f: &mut fmt::Formatter<'_>, args: &[T]) -> fmt::Result {
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{arg}")?;
    }
    Ok(())
}

/// Recursive descent over `name ('<' decl (',' decl)* '>')?`.
struct DeclParser<'a> {
    input: &'a str,
    pos: usize,
}

impl DeclParser<'_> {
    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn bump(&mut self, c: char) {
        self.pos += c.len_utf8();
    }

    fn skip_ws(&mut self) {
        while let Some(c) = self.peek() {
            if !c.is_whitespace() {
                break;
            }
            self.bump(c);
        }
    }

    fn parse_decl(&mut self) -> Result<DeclTree, DeclParseError> {
        self.skip_ws();
        let start = self.pos;
        while let Some(c) = self.peek() {
            if !(c.is_ascii_alphanumeric() || c == '_' || c == ':') {
                break;
            }
            self.bump(c);
        }

        if self.pos == start {
            return Err(match self.peek() {
                Some(found) if !matches!(found, '<' | ',' | '>') => {
                    DeclParseError::UnexpectedChar {
                        found,
                        position: self.pos,
                    }
                }
                _ => DeclParseError::EmptyName { position: self.pos },
            });
        }

        let mut tree = DeclTree::leaf(&self.input[start..self.pos]);
        self.skip_ws();
        if self.peek() != Some('<') {
            return Ok(tree);
        }
        self.bump('<');

        loop {
            tree.args.push(self.parse_decl()?);
            self.skip_ws();
            match self.peek() {
                Some(',') => self.bump(','),
                Some('>') => {
                    self.bump('>');
                    return Ok(tree);
                }
                Some(found) => {
                    return Err(DeclParseError::UnexpectedChar {
                        found,
                        position: self.pos,
                    });
                }
                None => return Err(DeclParseError::UnexpectedEnd { expected: '>' }),
            }
        }
    }
}

impl<D, N> TypeResolver<D, N>
where
    D: DiscriminatorLookup,
    N: NameNormalizer,
{
    /// Rebuilds a schema node whose declaration renders as `tree`.
    ///
    /// Several keys may share a target type (every string format maps to
    /// `std::string`); the first key in vocabulary order wins. Names that
    /// match nothing become model references.
    #[must_use]
    pub fn schema_node_for(&self, tree: &DeclTree) -> SchemaNode {
        let config = self.config();
        let mappings = &config.type_mappings;
        let name = tree.name.as_str();

        match tree.args.as_slice() {
            [inner] if name == config.shared_wrapper => {
                SchemaNode::discriminated_ref(inner.name.clone())
            }
            [item] if name == config.set_container() => SchemaNode::set(self.schema_node_for(item)),
            [item] if mappings.get_key(TypeKey::Array) == Some(name) => {
                SchemaNode::array(self.schema_node_for(item))
            }
            [_, value] if mappings.get_key(TypeKey::Map) == Some(name) => {
                SchemaNode::map(self.schema_node_for(value))
            }
            _ => mappings
                .key_for(name)
                .and_then(SchemaNode::from_type_key)
                .unwrap_or_else(|| SchemaNode::object_ref(name)),
        }
    }
}
