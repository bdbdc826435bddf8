//! Token kinds for PHP-flavoured source.
//!
//! Only tokens that carry a kind get a variant here. Single-character
//! punctuation (`{`, `;`, `(`, ...) is represented by kind-less tokens.

use std::fmt;

/// Kind of a kinded token.
///
/// Variants mirror the `T_*` constants of the PHP tokenizer; [`TokenKind::name`]
/// returns that constant name.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TokenKind {
    // Trivia
    Whitespace,
    Comment,
    DocComment,

    // Embedding
    OpenTag,
    OpenTagWithEcho,
    CloseTag,
    InlineHtml,

    // Names and literals
    Variable,
    /// Bare identifier (`foo`, `true`, `null`, class names).
    String,
    StringVarname,
    LNumber,
    DNumber,
    ConstantEncapsedString,
    EncapsedAndWhitespace,
    /// `{` opening a `{$expr}` interpolation.
    CurlyOpen,
    /// `${` opening a `${name}` interpolation.
    DollarOpenCurlyBraces,
    NsSeparator,

    // Keywords
    Abstract,
    Array,
    As,
    Break,
    Case,
    Catch,
    Class,
    Clone,
    Const,
    Continue,
    Declare,
    Default,
    Do,
    Echo,
    Else,
    ElseIf,
    Extends,
    Final,
    Finally,
    Fn,
    For,
    Foreach,
    Function,
    Global,
    If,
    Implements,
    Instanceof,
    Interface,
    Namespace,
    New,
    Private,
    Protected,
    Public,
    Return,
    Static,
    Switch,
    Throw,
    Trait,
    Try,
    Use,
    Var,
    While,
    Yield,

    // Multi-character operators
    ObjectOperator,    // ->
    DoubleColon,       // ::
    DoubleArrow,       // =>
    IsEqual,           // ==
    IsIdentical,       // ===
    IsNotEqual,        // != <>
    IsNotIdentical,    // !==
    IsSmallerOrEqual,  // <=
    IsGreaterOrEqual,  // >=
    Inc,               // ++
    Dec,               // --
    BooleanAnd,        // &&
    BooleanOr,         // ||
    Coalesce,          // ??
    ConcatEqual,       // .=
    PlusEqual,         // +=
    MinusEqual,        // -=
    MulEqual,          // *=
    DivEqual,          // /=
    Ellipsis,          // ...
    Sl,                // <<
    Sr,                // >>
}

impl TokenKind {
    /// The PHP tokenizer constant name of this kind.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Whitespace => "T_WHITESPACE",
            TokenKind::Comment => "T_COMMENT",
            TokenKind::DocComment => "T_DOC_COMMENT",
            TokenKind::OpenTag => "T_OPEN_TAG",
            TokenKind::OpenTagWithEcho => "T_OPEN_TAG_WITH_ECHO",
            TokenKind::CloseTag => "T_CLOSE_TAG",
            TokenKind::InlineHtml => "T_INLINE_HTML",
            TokenKind::Variable => "T_VARIABLE",
            TokenKind::String => "T_STRING",
            TokenKind::StringVarname => "T_STRING_VARNAME",
            TokenKind::LNumber => "T_LNUMBER",
            TokenKind::DNumber => "T_DNUMBER",
            TokenKind::ConstantEncapsedString => "T_CONSTANT_ENCAPSED_STRING",
            TokenKind::EncapsedAndWhitespace => "T_ENCAPSED_AND_WHITESPACE",
            TokenKind::CurlyOpen => "T_CURLY_OPEN",
            TokenKind::DollarOpenCurlyBraces => "T_DOLLAR_OPEN_CURLY_BRACES",
            TokenKind::NsSeparator => "T_NS_SEPARATOR",
            TokenKind::Abstract => "T_ABSTRACT",
            TokenKind::Array => "T_ARRAY",
            TokenKind::As => "T_AS",
            TokenKind::Break => "T_BREAK",
            TokenKind::Case => "T_CASE",
            TokenKind::Catch => "T_CATCH",
            TokenKind::Class => "T_CLASS",
            TokenKind::Clone => "T_CLONE",
            TokenKind::Const => "T_CONST",
            TokenKind::Continue => "T_CONTINUE",
            TokenKind::Declare => "T_DECLARE",
            TokenKind::Default => "T_DEFAULT",
            TokenKind::Do => "T_DO",
            TokenKind::Echo => "T_ECHO",
            TokenKind::Else => "T_ELSE",
            TokenKind::ElseIf => "T_ELSEIF",
            TokenKind::Extends => "T_EXTENDS",
            TokenKind::Final => "T_FINAL",
            TokenKind::Finally => "T_FINALLY",
            TokenKind::Fn => "T_FN",
            TokenKind::For => "T_FOR",
            TokenKind::Foreach => "T_FOREACH",
            TokenKind::Function => "T_FUNCTION",
            TokenKind::Global => "T_GLOBAL",
            TokenKind::If => "T_IF",
            TokenKind::Implements => "T_IMPLEMENTS",
            TokenKind::Instanceof => "T_INSTANCEOF",
            TokenKind::Interface => "T_INTERFACE",
            TokenKind::Namespace => "T_NAMESPACE",
            TokenKind::New => "T_NEW",
            TokenKind::Private => "T_PRIVATE",
            TokenKind::Protected => "T_PROTECTED",
            TokenKind::Public => "T_PUBLIC",
            TokenKind::Return => "T_RETURN",
            TokenKind::Static => "T_STATIC",
            TokenKind::Switch => "T_SWITCH",
            TokenKind::Throw => "T_THROW",
            TokenKind::Trait => "T_TRAIT",
            TokenKind::Try => "T_TRY",
            TokenKind::Use => "T_USE",
            TokenKind::Var => "T_VAR",
            TokenKind::While => "T_WHILE",
            TokenKind::Yield => "T_YIELD",
            TokenKind::ObjectOperator => "T_OBJECT_OPERATOR",
            TokenKind::DoubleColon => "T_DOUBLE_COLON",
            TokenKind::DoubleArrow => "T_DOUBLE_ARROW",
            TokenKind::IsEqual => "T_IS_EQUAL",
            TokenKind::IsIdentical => "T_IS_IDENTICAL",
            TokenKind::IsNotEqual => "T_IS_NOT_EQUAL",
            TokenKind::IsNotIdentical => "T_IS_NOT_IDENTICAL",
            TokenKind::IsSmallerOrEqual => "T_IS_SMALLER_OR_EQUAL",
            TokenKind::IsGreaterOrEqual => "T_IS_GREATER_OR_EQUAL",
            TokenKind::Inc => "T_INC",
            TokenKind::Dec => "T_DEC",
            TokenKind::BooleanAnd => "T_BOOLEAN_AND",
            TokenKind::BooleanOr => "T_BOOLEAN_OR",
            TokenKind::Coalesce => "T_COALESCE",
            TokenKind::ConcatEqual => "T_CONCAT_EQUAL",
            TokenKind::PlusEqual => "T_PLUS_EQUAL",
            TokenKind::MinusEqual => "T_MINUS_EQUAL",
            TokenKind::MulEqual => "T_MUL_EQUAL",
            TokenKind::DivEqual => "T_DIV_EQUAL",
            TokenKind::Ellipsis => "T_ELLIPSIS",
            TokenKind::Sl => "T_SL",
            TokenKind::Sr => "T_SR",
        }
    }

    /// Keywords that introduce a type body: `class`, `interface`, `trait`.
    #[inline]
    pub fn is_classy(self) -> bool {
        matches!(
            self,
            TokenKind::Class | TokenKind::Interface | TokenKind::Trait
        )
    }

    /// `//`, `#` and `/* */` comments as well as `/** */` doc comments.
    #[inline]
    pub fn is_comment(self) -> bool {
        matches!(self, TokenKind::Comment | TokenKind::DocComment)
    }

    /// Visibility keywords.
    #[inline]
    pub fn is_visibility(self) -> bool {
        matches!(
            self,
            TokenKind::Public | TokenKind::Protected | TokenKind::Private
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests;
