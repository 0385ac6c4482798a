//! Operator/function registry - single source of truth for every recognised symbol
//!
//! Each symbol maps to one [`RegistryEntry`] carrying arity, precedence,
//! associativity, fixity and the operation itself. The built-in catalog is
//! populated once into a process-wide read-only instance, see [`Registry::builtin`].

use crate::builtin_functions;
use crate::context::EvalContext;
use crate::error::{CalcError, Result};
use crate::value::Value;
use rustc_hash::FxHashMap;
use std::sync::OnceLock;
use tracing::debug;

/// Numeric computation behind a symbol
///
/// Operands arrive in source order: for `a - b` the slice is `[a, b]`.
pub type Operation = fn(&[Value], &EvalContext) -> Result<Value>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fixity {
    /// `sin(x)`, `nPr(n;r)`
    PrefixFunction,
    /// `a + b`
    InfixOperator,
    /// `n!`
    PostfixOperator,
    /// Unary minus, `-x`
    PrefixOperator,
}

/// Whether coordinate operands are coerced to their first component
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperandKind {
    Scalar,
    Any,
}

/// Immutable descriptor of one operator or function
#[derive(Clone)]
pub struct RegistryEntry {
    pub symbol: String,
    pub arity: u8,
    /// Higher binds tighter
    pub precedence: u8,
    pub associativity: Associativity,
    pub fixity: Fixity,
    pub operand: OperandKind,
    pub operation: Operation,
}

impl RegistryEntry {
    /// Binary infix operator
    pub fn infix(
        symbol: impl Into<String>,
        precedence: u8,
        associativity: Associativity,
        operation: Operation,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            arity: 2,
            precedence,
            associativity,
            fixity: Fixity::InfixOperator,
            operand: OperandKind::Scalar,
            operation,
        }
    }

    /// Unary operator written before its operand
    pub fn prefix(symbol: impl Into<String>, precedence: u8, operation: Operation) -> Self {
        Self {
            symbol: symbol.into(),
            arity: 1,
            precedence,
            associativity: Associativity::Right,
            fixity: Fixity::PrefixOperator,
            operand: OperandKind::Scalar,
            operation,
        }
    }

    /// Unary operator written after its operand
    pub fn postfix(symbol: impl Into<String>, precedence: u8, operation: Operation) -> Self {
        Self {
            symbol: symbol.into(),
            arity: 1,
            precedence,
            associativity: Associativity::Left,
            fixity: Fixity::PostfixOperator,
            operand: OperandKind::Scalar,
            operation,
        }
    }

    /// Function called as `name(a)` or `name(a;b)`
    pub fn function(symbol: impl Into<String>, arity: u8, operation: Operation) -> Self {
        Self {
            symbol: symbol.into(),
            arity,
            precedence: FUNCTION_PRECEDENCE,
            associativity: Associativity::Left,
            fixity: Fixity::PrefixFunction,
            operand: OperandKind::Scalar,
            operation,
        }
    }

    /// Accept coordinate operands as they are
    pub fn accepting_coordinates(mut self) -> Self {
        self.operand = OperandKind::Any;
        self
    }

    pub fn is_function(&self) -> bool {
        self.fixity == Fixity::PrefixFunction
    }

    pub fn is_right_associative(&self) -> bool {
        self.associativity == Associativity::Right
    }
}

impl std::fmt::Debug for RegistryEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistryEntry")
            .field("symbol", &self.symbol)
            .field("arity", &self.arity)
            .field("precedence", &self.precedence)
            .field("associativity", &self.associativity)
            .field("fixity", &self.fixity)
            .field("operand", &self.operand)
            .finish_non_exhaustive()
    }
}

pub const ADDITIVE_PRECEDENCE: u8 = 1;
pub const MULTIPLICATIVE_PRECEDENCE: u8 = 2;
pub const NEGATION_PRECEDENCE: u8 = 3;
pub const POWER_PRECEDENCE: u8 = 4;
pub const POSTFIX_PRECEDENCE: u8 = 5;
pub const FUNCTION_PRECEDENCE: u8 = 6;

/// Symbol emitted by the tokenizer for unary minus
pub const NEGATION_SYMBOL: &str = "neg";

/// Symbol → entry table
#[derive(Debug, Clone, Default)]
pub struct Registry {
    entries: FxHashMap<String, RegistryEntry>,
}

impl Registry {
    /// Empty registry, for custom or minimal catalogs
    pub fn new() -> Self {
        Self::default()
    }

    /// Fresh registry holding the full built-in catalog
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        builtin_functions::register_all(&mut registry);
        debug!(symbols = registry.len(), "Built-in registry populated");
        registry
    }

    /// Process-wide built-in registry, populated on first use
    pub fn builtin() -> &'static Registry {
        static BUILTIN: OnceLock<Registry> = OnceLock::new();
        BUILTIN.get_or_init(Registry::with_builtins)
    }

    /// Insert or overwrite by symbol, returning the replaced entry
    pub fn register(&mut self, entry: RegistryEntry) -> Option<RegistryEntry> {
        self.entries.insert(entry.symbol.clone(), entry)
    }

    /// Entry for `symbol`, `UnknownOperator` on a miss
    pub fn lookup(&self, symbol: &str) -> Result<&RegistryEntry> {
        self.entries
            .get(symbol)
            .ok_or_else(|| CalcError::unknown_operator(symbol))
    }

    pub fn get(&self, symbol: &str) -> Option<&RegistryEntry> {
        self.entries.get(symbol)
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.entries.contains_key(symbol)
    }

    /// Registered symbols, sorted
    pub fn symbols(&self) -> Vec<&str> {
        let mut symbols: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        symbols.sort_unstable();
        symbols
    }

    pub fn entries(&self) -> impl Iterator<Item = &RegistryEntry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable
mod tests {
    use super::*;
    use precalc_number::Number;

    fn first(operands: &[Value], _ctx: &EvalContext) -> Result<Value> {
        Ok(operands[0].clone())
    }

    fn zero(_operands: &[Value], _ctx: &EvalContext) -> Result<Value> {
        Ok(Value::from(Number::zero()))
    }

    #[test]
    fn test_register_overwrites_by_symbol() {
        let mut registry = Registry::new();
        assert!(registry.is_empty());
        assert!(registry
            .register(RegistryEntry::function("f", 2, first))
            .is_none());

        let replaced = registry.register(RegistryEntry::function("f", 1, zero));
        assert_eq!(replaced.unwrap().arity, 2);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.lookup("f").unwrap().arity, 1);
    }

    #[test]
    fn test_lookup_miss_is_unknown_operator() {
        let registry = Registry::new();
        assert_eq!(
            registry.lookup("frobnicate").unwrap_err(),
            CalcError::UnknownOperator("frobnicate".to_string())
        );
        assert!(registry.get("frobnicate").is_none());
    }

    #[test]
    fn test_builtin_catalog_shape() {
        let registry = Registry::builtin();
        assert!(std::ptr::eq(registry, Registry::builtin()));

        let power = registry.lookup("^").unwrap();
        assert_eq!(power.fixity, Fixity::InfixOperator);
        assert!(power.is_right_associative());
        assert_eq!(power.precedence, POWER_PRECEDENCE);

        let minus = registry.lookup("-").unwrap();
        assert_eq!(minus.associativity, Associativity::Left);
        assert_eq!(minus.precedence, ADDITIVE_PRECEDENCE);

        let factorial = registry.lookup("!").unwrap();
        assert_eq!(factorial.fixity, Fixity::PostfixOperator);
        assert_eq!(factorial.arity, 1);

        let neg = registry.lookup(NEGATION_SYMBOL).unwrap();
        assert_eq!(neg.fixity, Fixity::PrefixOperator);
        assert!(neg.precedence > MULTIPLICATIVE_PRECEDENCE && neg.precedence < POWER_PRECEDENCE);

        for symbol in ["nPr", "nCr", "rootn", "logbase", "atan2", "gcd", "lcm", "Rec", "Pol", "RandInt"] {
            let entry = registry.lookup(symbol).unwrap();
            assert_eq!(entry.arity, 2, "{symbol}");
            assert!(entry.is_function(), "{symbol}");
        }
        assert_eq!(registry.lookup("Rec").unwrap().operand, OperandKind::Scalar);
    }

    #[test]
    fn test_symbols_sorted() {
        let mut registry = Registry::new();
        registry.register(RegistryEntry::function("b", 1, first));
        registry.register(RegistryEntry::function("a", 1, first));
        assert_eq!(registry.symbols(), vec!["a", "b"]);
    }
}
