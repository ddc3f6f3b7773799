//! The restricted record query grammar.
//!
//! Exactly one query shape is recognized, matched positionally after
//! whitespace splitting:
//!
//! ```text
//! SELECT <field-list> FROM <ObjectType> WHERE <FieldName> = '<Value>'
//! ```
//!
//! The selected field list is ignored. Token 3 is the object type and
//! token 5 the field name, taken literally and never resolved against
//! a schema. The value is the last token with at most one leading and
//! one trailing single quote stripped and every backslash removed,
//! which is how an escaped apostrophe (`O\'Brian`) survives the naive
//! split.
//!
//! The grammar is closed. Quoted values containing internal spaces do
//! not round-trip, and `AND`/`OR`/relational operators are not
//! recognized — the positional extraction above is applied regardless.
//! Compatibility with recorded API traffic matters more here than
//! generality.

/// A query decomposed into its three meaningful tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedQuery {
    /// Object type named after `FROM`
    pub object: String,
    /// Field name named after `WHERE`
    pub field: String,
    /// Unquoted, unescaped comparison value
    pub value: String,
}

impl ParsedQuery {
    /// Parses a query positionally.
    ///
    /// Returns `None` when the token shape does not fit; a query that
    /// matches nothing is not an error.
    pub fn parse(raw: &str) -> Option<Self> {
        let tokens: Vec<&str> = raw.split_whitespace().collect();
        let object = *tokens.get(3)?;
        let field = *tokens.get(5)?;
        let value = unquote(tokens.last()?);
        Some(Self {
            object: object.to_string(),
            field: field.to_string(),
            value,
        })
    }
}

/// Strips at most one leading and one trailing single quote, then
/// drops every backslash.
fn unquote(token: &str) -> String {
    let token = token.strip_prefix('\'').unwrap_or(token);
    let token = token.strip_suffix('\'').unwrap_or(token);
    token.replace('\\', "")
}
